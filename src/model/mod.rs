use std::env;

use anyhow::Result;
use log::{debug, info};
use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Context for a single text-generation call: the user's interests, their
/// preferred industry, and the instruction telling the model what to do
/// with them. Built fresh for every call; never persisted.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub interests: String,
    pub industry: String,
    pub instruction: String,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("failed to extract text from response")]
    MalformedResponse,
}

/// The seam between the app and the generative-language service. Handlers
/// and the dispatcher only see this trait, so tests can substitute a
/// deterministic stub.
pub trait GenerateText {
    fn generate(
        &self,
        ctx: &GenerationContext,
    ) -> impl std::future::Future<Output = Result<String, ServiceError>> + Send;
}

// A wrapper for the Gemini generateContent REST API
pub struct GeminiClient {
    api_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    pub fn new() -> Result<Self> {
        info!("Initializing Gemini API client");

        // The API key is the one required secret; fail startup without it
        let api_key = env::var("GOOGLE_API_KEY")
            .map_err(|_| anyhow::anyhow!("GOOGLE_API_KEY environment variable is not set"))?;

        // Base URL is overridable so tests can point at a local mock server
        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        info!("Using Gemini endpoint {} with model {}", api_url, model);

        Ok(Self::with_config(api_url, api_key, model))
    }

    /// Builds a client against an explicit endpoint, bypassing the
    /// environment. Used by tests to target a local mock server.
    pub fn with_config(api_url: String, api_key: String, model: String) -> Self {
        Self {
            api_url,
            api_key,
            model,
            client: Client::new(),
        }
    }
}

impl GenerateText for GeminiClient {
    async fn generate(&self, ctx: &GenerationContext) -> Result<String, ServiceError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_url, self.model, self.api_key
        );

        // Interests, industry and instruction travel as three content
        // parts of a single user turn
        let payload = json!({
            "contents": [{
                "parts": [
                    { "text": ctx.interests },
                    { "text": ctx.industry },
                    { "text": ctx.instruction },
                ]
            }]
        });

        debug!("Payload: {}", payload);

        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Api { status, body });
        }

        let response_json: Value = response.json().await?;
        debug!("Response JSON: {}", response_json);

        let text = response_json
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .ok_or(ServiceError::MalformedResponse)?;

        info!("Response length: {} characters", text.len());
        Ok(text.to_string())
    }
}
