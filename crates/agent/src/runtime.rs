use anyhow::Result;
use pricey_core::config::{AppConfig, ExtractorKind};
use pricey_core::{CostRoute, Intent, IntentClassifier};
use tracing::info;

use crate::llm::{DigitRunStrategy, ExtractionStrategy, HttpLlmClient, LlmStrategy};
use crate::tools::Toolbox;

/// Fixed reply for questions outside the cost domain.
pub const REFUSAL_MESSAGE: &str = "I can only answer cost related questions.";

/// The orchestrator: classify, extract, route, answer.
///
/// Stateless across invocations; the same question always yields the same
/// answer (with the deterministic extraction strategy).
pub struct CostAgent {
    classifier: IntentClassifier,
    extraction: Box<dyn ExtractionStrategy>,
    toolbox: Toolbox,
}

impl Default for CostAgent {
    fn default() -> Self {
        Self::new(Box::new(DigitRunStrategy::default()), Toolbox::default())
    }
}

impl CostAgent {
    pub fn new(extraction: Box<dyn ExtractionStrategy>, toolbox: Toolbox) -> Self {
        Self { classifier: IntentClassifier::new(), extraction, toolbox }
    }

    /// Build an agent wired per `extractor.kind`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let extraction: Box<dyn ExtractionStrategy> = match config.extractor.kind {
            ExtractorKind::DigitRun => Box::new(DigitRunStrategy::default()),
            ExtractorKind::Llm => {
                Box::new(LlmStrategy::new(HttpLlmClient::new(config.llm.clone())?))
            }
        };

        Ok(Self::new(extraction, Toolbox::default()))
    }

    pub fn extraction_strategy(&self) -> &'static str {
        self.extraction.name()
    }

    pub fn tool_names(&self) -> [&'static str; 2] {
        self.toolbox.tool_names()
    }

    /// Answer a free-text question.
    ///
    /// Every path returns text: non-cost questions get the refusal message
    /// and a missing part number travels as the `unknown` sentinel. An
    /// error can only come from a swapped-in tool; the stub tools are
    /// infallible.
    pub async fn answer(&self, question: &str) -> Result<String> {
        let intent = self.classifier.classify(question);
        if intent == Intent::Other {
            info!(
                event_name = "agent.answer.refused",
                intent = intent.as_str(),
                "question is outside the cost domain"
            );
            return Ok(REFUSAL_MESSAGE.to_string());
        }

        let part_number = self.extraction.extract(question).await;
        let route = CostRoute::select(question);
        let tool = self.toolbox.tool_for(route);
        info!(
            event_name = "agent.answer.routed",
            intent = intent.as_str(),
            part_number = %part_number,
            route = route.action_key(),
            tool = tool.name(),
            "dispatching cost question"
        );

        tool.lookup(&part_number).await
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use pricey_core::config::{AppConfig, ExtractorKind};

    use crate::tools::{CostAnalysisTool, CostTool, Toolbox};

    use super::{CostAgent, REFUSAL_MESSAGE};

    #[tokio::test]
    async fn price_question_routes_to_latest_cost() {
        let agent = CostAgent::default();
        let answer = agent.answer("What is the price of 100?").await.expect("answer");
        assert_eq!(answer, "The latest cost for part 100 is $42.00.");
    }

    #[tokio::test]
    async fn analysis_question_routes_to_cost_analysis() {
        let agent = CostAgent::default();
        let answer = agent.answer("Give a cost analysis for 999").await.expect("answer");
        assert_eq!(
            answer,
            "Cost analysis for part 999: pricing has increased by 5% year over year."
        );
    }

    #[tokio::test]
    async fn non_cost_question_gets_the_refusal() {
        let agent = CostAgent::default();
        let answer = agent.answer("tell me a joke").await.expect("answer");
        assert_eq!(answer, REFUSAL_MESSAGE);
    }

    #[tokio::test]
    async fn missing_part_number_travels_as_sentinel() {
        let agent = CostAgent::default();
        let answer = agent.answer("What does it cost?").await.expect("answer");
        assert_eq!(answer, "The latest cost for part unknown is $42.00.");
    }

    #[tokio::test]
    async fn answering_is_idempotent() {
        let agent = CostAgent::default();
        let first = agent.answer("What is the price of 100?").await.expect("first answer");
        let second = agent.answer("What is the price of 100?").await.expect("second answer");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn refusal_takes_precedence_over_routing_keywords() {
        // "analysis" alone is not cost intent.
        let agent = CostAgent::default();
        let answer = agent.answer("run an analysis of 7").await.expect("answer");
        assert_eq!(answer, REFUSAL_MESSAGE);
    }

    struct FailingTool;

    #[async_trait]
    impl CostTool for FailingTool {
        fn name(&self) -> &'static str {
            "failing_latest_cost"
        }

        async fn lookup(&self, _part_number: &str) -> Result<String> {
            Err(anyhow!("backing store unavailable"))
        }
    }

    #[tokio::test]
    async fn swapped_in_tool_errors_propagate() {
        let toolbox = Toolbox::new(Box::new(FailingTool), Box::new(CostAnalysisTool));
        let agent = CostAgent::new(Box::new(super::DigitRunStrategy::default()), toolbox);

        let result = agent.answer("price of 5").await;
        assert!(result.is_err());
    }

    #[test]
    fn from_config_selects_the_configured_strategy() {
        let digit_run = CostAgent::from_config(&AppConfig::default()).expect("digit_run agent");
        assert_eq!(digit_run.extraction_strategy(), "digit_run");

        let mut config = AppConfig::default();
        config.extractor.kind = ExtractorKind::Llm;
        let llm = CostAgent::from_config(&config).expect("llm agent");
        assert_eq!(llm.extraction_strategy(), "llm");
    }
}
