//! Route selection between the two cost-answering tools.

/// The choice between the cost tools for a cost-intent question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostRoute {
    /// Look up the latest cost for a part.
    LatestCost,
    /// Produce a cost trend analysis for a part.
    CostAnalysis,
}

impl CostRoute {
    /// Select the route for a question already known to be cost-intent.
    ///
    /// A question mentioning "analysis" routes to [`CostRoute::CostAnalysis`];
    /// everything else falls through to [`CostRoute::LatestCost`], which is
    /// also the defensive default.
    pub fn select(text: &str) -> Self {
        if text.to_ascii_lowercase().contains("analysis") {
            Self::CostAnalysis
        } else {
            Self::LatestCost
        }
    }

    pub fn action_key(&self) -> &'static str {
        match self {
            Self::LatestCost => "cost.latest",
            Self::CostAnalysis => "cost.analysis",
        }
    }
}

impl Default for CostRoute {
    fn default() -> Self {
        Self::LatestCost
    }
}
