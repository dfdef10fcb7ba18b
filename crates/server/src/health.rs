use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use pricey_agent::{CostAgent, REFUSAL_MESSAGE};
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    agent: Arc<CostAgent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub agent: HealthCheck,
    pub checked_at: String,
}

pub fn router(agent: Arc<CostAgent>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { agent })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let agent = agent_check(&state.agent).await;
    let ready = agent.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "pricey-server runtime initialized".to_string(),
        },
        agent,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

// Probe with a question the whole pipeline can answer: cost intent, a digit
// run to extract, and the default route.
const PROBE_QUESTION: &str = "What is the cost of part 1?";

async fn agent_check(agent: &CostAgent) -> HealthCheck {
    match agent.answer(PROBE_QUESTION).await {
        Ok(answer) if answer != REFUSAL_MESSAGE => HealthCheck {
            status: "ready",
            detail: format!("agent probe answered via `{}` extraction", agent.extraction_strategy()),
        },
        Ok(_) => HealthCheck {
            status: "degraded",
            detail: "agent probe was refused".to_string(),
        },
        Err(probe_error) => HealthCheck {
            status: "degraded",
            detail: format!("agent probe failed: {probe_error}"),
        },
    }
}
