use anyhow::Result;
use async_trait::async_trait;
use pricey_core::CostRoute;

/// A cost-answering collaborator. Both production tools are stubs that
/// format a fixed message; real data sources would slot in behind the same
/// trait.
#[async_trait]
pub trait CostTool: Send + Sync {
    fn name(&self) -> &'static str;
    async fn lookup(&self, part_number: &str) -> Result<String>;
}

/// Returns the latest cost message for a part.
#[derive(Clone, Copy, Debug, Default)]
pub struct LatestCostTool;

#[async_trait]
impl CostTool for LatestCostTool {
    fn name(&self) -> &'static str {
        "latest_cost"
    }

    async fn lookup(&self, part_number: &str) -> Result<String> {
        Ok(format!("The latest cost for part {part_number} is $42.00."))
    }
}

/// Returns a cost trend message for a part.
#[derive(Clone, Copy, Debug, Default)]
pub struct CostAnalysisTool;

#[async_trait]
impl CostTool for CostAnalysisTool {
    fn name(&self) -> &'static str {
        "cost_analysis"
    }

    async fn lookup(&self, part_number: &str) -> Result<String> {
        Ok(format!(
            "Cost analysis for part {part_number}: pricing has increased by 5% year over year."
        ))
    }
}

/// One tool per route, swappable for tests.
pub struct Toolbox {
    latest_cost: Box<dyn CostTool>,
    cost_analysis: Box<dyn CostTool>,
}

impl Default for Toolbox {
    fn default() -> Self {
        Self { latest_cost: Box::new(LatestCostTool), cost_analysis: Box::new(CostAnalysisTool) }
    }
}

impl Toolbox {
    pub fn new(latest_cost: Box<dyn CostTool>, cost_analysis: Box<dyn CostTool>) -> Self {
        Self { latest_cost, cost_analysis }
    }

    pub fn tool_for(&self, route: CostRoute) -> &dyn CostTool {
        match route {
            CostRoute::LatestCost => self.latest_cost.as_ref(),
            CostRoute::CostAnalysis => self.cost_analysis.as_ref(),
        }
    }

    pub fn tool_names(&self) -> [&'static str; 2] {
        [self.latest_cost.name(), self.cost_analysis.name()]
    }
}
