//! Part-number extraction strategies and the LLM client seam.
//!
//! Extraction is total by contract: every failure mode of the LLM path
//! (transport error, empty reply, chatty multi-line reply) collapses to the
//! [`UNKNOWN_PART`] sentinel, so both strategies behave identically from
//! the orchestrator's point of view.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use pricey_core::config::LlmConfig;
use pricey_core::{DigitRunExtractor, UNKNOWN_PART};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// How the agent finds the part number in a question.
#[async_trait]
pub trait ExtractionStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    async fn extract(&self, text: &str) -> String;
}

/// Deterministic first-digit-run extraction (the production default).
#[derive(Clone, Copy, Debug, Default)]
pub struct DigitRunStrategy(DigitRunExtractor);

#[async_trait]
impl ExtractionStrategy for DigitRunStrategy {
    fn name(&self) -> &'static str {
        "digit_run"
    }

    async fn extract(&self, text: &str) -> String {
        self.0.extract(text)
    }
}

const EXTRACTION_PROMPT: &str = "Extract the part number from the following text. \
     Respond with only the part number. If no part number is present, respond with 'unknown'.";

/// LLM-backed extraction behind the same total contract.
pub struct LlmStrategy<C> {
    client: C,
}

impl<C> LlmStrategy<C>
where
    C: LlmClient,
{
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C> ExtractionStrategy for LlmStrategy<C>
where
    C: LlmClient,
{
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn extract(&self, text: &str) -> String {
        let prompt = format!("{EXTRACTION_PROMPT}\n\n{text}");
        match self.client.complete(&prompt).await {
            Ok(reply) => sanitize_reply(&reply),
            Err(error) => {
                warn!(
                    event_name = "agent.extract.llm_failure",
                    error = %error,
                    "llm extraction failed, falling back to the unknown sentinel"
                );
                UNKNOWN_PART.to_string()
            }
        }
    }
}

fn sanitize_reply(reply: &str) -> String {
    let trimmed = reply.trim();
    if trimmed.is_empty() || trimmed.lines().count() > 1 || trimmed.len() > 64 {
        return UNKNOWN_PART.to_string();
    }
    trimmed.to_string()
}

/// OpenAI-compatible chat-completions client used by the llm extractor.
///
/// All supported providers (openai, anthropic, ollama) are addressed
/// through the `/chat/completions` surface of their configured base URL.
pub struct HttpLlmClient {
    http: reqwest::Client,
    config: LlmConfig,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: String,
}

impl HttpLlmClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("building llm http client")?;

        Ok(Self { http, config })
    }

    fn endpoint(&self) -> String {
        let base = self
            .config
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.config.provider.default_base_url());
        format!("{}/chat/completions", base.trim_end_matches('/'))
    }

    async fn send(&self, request: &ChatRequest<'_>) -> Result<String> {
        let mut builder = self.http.post(self.endpoint()).json(request);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.bearer_auth(api_key.expose_secret());
        }

        let response = builder
            .send()
            .await
            .context("llm request failed")?
            .error_for_status()
            .context("llm request was rejected")?;

        let payload: ChatResponse =
            response.json().await.context("llm response was not valid json")?;
        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow!("llm response contained no choices"))
    }
}

#[async_trait]
impl LlmClient for HttpLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
            max_tokens: 10,
        };

        let mut attempt: u32 = 0;
        loop {
            match self.send(&request).await {
                Ok(reply) => return Ok(reply),
                Err(error) if attempt < self.config.max_retries => {
                    attempt += 1;
                    warn!(
                        event_name = "agent.llm.retry",
                        attempt,
                        max_retries = self.config.max_retries,
                        error = %error,
                        "llm request failed, retrying"
                    );
                }
                Err(error) => return Err(error),
            }
        }
    }
}
