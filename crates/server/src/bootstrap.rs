use std::sync::Arc;

use pricey_agent::CostAgent;
use pricey_core::config::{AppConfig, ConfigError, LoadOptions};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub agent: Arc<CostAgent>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("agent initialization failed: {0}")]
    Agent(#[source] anyhow::Error),
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config)
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let agent = CostAgent::from_config(&config).map_err(BootstrapError::Agent)?;
    info!(
        event_name = "system.bootstrap.agent_ready",
        correlation_id = "bootstrap",
        extraction_strategy = agent.extraction_strategy(),
        "cost agent constructed"
    );

    Ok(Application { config, agent: Arc::new(agent) })
}

#[cfg(test)]
mod tests {
    use pricey_core::config::{ConfigOverrides, ExtractorKind, LlmProvider, LoadOptions};

    use crate::bootstrap::bootstrap;

    fn isolated_options(overrides: ConfigOverrides) -> LoadOptions {
        LoadOptions {
            config_path: Some(std::path::PathBuf::from("does-not-exist.toml")),
            overrides,
            ..LoadOptions::default()
        }
    }

    #[test]
    fn bootstrap_defaults_to_the_digit_run_strategy() {
        let app = bootstrap(isolated_options(ConfigOverrides::default()))
            .expect("bootstrap should succeed with defaults");

        assert_eq!(app.agent.extraction_strategy(), "digit_run");
        assert_eq!(app.agent.tool_names(), ["latest_cost", "cost_analysis"]);
    }

    #[test]
    fn bootstrap_wires_the_llm_strategy_when_configured() {
        let app = bootstrap(isolated_options(ConfigOverrides {
            extractor_kind: Some(ExtractorKind::Llm),
            ..ConfigOverrides::default()
        }))
        .expect("bootstrap should succeed for the ollama provider without credentials");

        assert_eq!(app.agent.extraction_strategy(), "llm");
    }

    #[test]
    fn bootstrap_fails_fast_on_missing_llm_credentials() {
        let result = bootstrap(isolated_options(ConfigOverrides {
            extractor_kind: Some(ExtractorKind::Llm),
            llm_provider: Some(LlmProvider::OpenAi),
            ..ConfigOverrides::default()
        }));

        let message = result.err().expect("error").to_string();
        assert!(message.contains("llm.api_key"));
    }
}
