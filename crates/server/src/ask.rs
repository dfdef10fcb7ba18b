//! Web routes for the cost question form.
//!
//! HTML Endpoints:
//! - `GET  /`     — question form (one text field, one submit)
//!
//! JSON API Endpoints:
//! - `POST /ask`  — answer a question

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use pricey_agent::CostAgent;
use pricey_core::{ApplicationError, InterfaceError};
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AskState {
    agent: Arc<CostAgent>,
    templates: Arc<Tera>,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub correlation_id: String,
}

#[derive(Debug, Serialize)]
pub struct AskError {
    pub error: String,
    pub correlation_id: String,
}

/// Initialize the Tera template engine for the ask page.
fn init_templates() -> Arc<Tera> {
    let mut tera = match Tera::new("templates/ask/**/*") {
        Ok(instance) => instance,
        Err(load_error) => {
            warn!(
                error = %load_error,
                "failed to load ask templates from filesystem, using empty Tera instance"
            );
            Tera::default()
        }
    };

    // Built-in fallback template in case filesystem templates are not available
    tera.add_raw_template("index.html", include_str!("../../../templates/ask/index.html")).ok();

    Arc::new(tera)
}

pub fn router(agent: Arc<CostAgent>) -> Router {
    let templates = init_templates();

    Router::new()
        .route("/", get(ask_page))
        .route("/ask", post(ask))
        .with_state(AskState { agent, templates })
}

/// Render the question form HTML page.
async fn ask_page(State(state): State<AskState>) -> Result<Html<String>, StatusCode> {
    match state.templates.render("index.html", &Context::new()) {
        Ok(body) => Ok(Html(body)),
        Err(render_error) => {
            error!(
                event_name = "system.ask.template_error",
                correlation_id = "page",
                error = %render_error,
                "failed to render ask page"
            );
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Answer a question. Every outcome is textual: the refusal and the unknown
/// part sentinel are regular answers, not errors.
pub async fn ask(
    State(state): State<AskState>,
    Json(request): Json<AskRequest>,
) -> Result<(StatusCode, Json<AskResponse>), (StatusCode, Json<AskError>)> {
    let correlation_id = Uuid::new_v4().simple().to_string();
    let question = request.question.trim();

    if question.is_empty() {
        warn!(
            event_name = "system.ask.bad_request",
            correlation_id = %correlation_id,
            "blank question rejected"
        );
        let interface =
            InterfaceError::bad_request("question must not be blank", correlation_id.as_str());
        return Err((
            StatusCode::BAD_REQUEST,
            Json(AskError { error: interface.user_message().to_owned(), correlation_id }),
        ));
    }

    match state.agent.answer(question).await {
        Ok(answer) => {
            info!(
                event_name = "system.ask.answered",
                correlation_id = %correlation_id,
                "question answered"
            );
            Ok((StatusCode::OK, Json(AskResponse { answer, correlation_id })))
        }
        Err(agent_error) => {
            error!(
                event_name = "system.ask.agent_error",
                correlation_id = %correlation_id,
                error = %agent_error,
                "agent failed to answer"
            );
            let interface = ApplicationError::Integration(agent_error.to_string())
                .into_interface(correlation_id.clone());
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(AskError { error: interface.user_message().to_owned(), correlation_id }),
            ))
        }
    }
}
