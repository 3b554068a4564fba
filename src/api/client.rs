//! Exercise platform API client
//!
//! One method per server endpoint, all plain JSON-over-HTTP with
//! `Content-Type: application/json`. This layer adds no authentication,
//! versioning, or retries; transport failures and non-2xx statuses map to
//! [`Error::RequestFailed`], undecodable bodies to
//! [`Error::MalformedResponse`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{ChatRequest, ChatResponse, ClipboardEvent, EvaluationRequest, EvaluationResponse};

/// Endpoint paths, relative to the configured base URL
pub const RUN_CODE_PATH: &str = "/run_code";
pub const CHAT_PATH: &str = "/chat";
pub const CLIPBOARD_PATH: &str = "/record_clipboard_event";

/// Client for the exercise platform server
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL. Trailing slashes are
    /// stripped so endpoint paths join cleanly.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit editor code for test-case evaluation
    pub async fn run_code(&self, request: &EvaluationRequest) -> Result<EvaluationResponse> {
        debug!("Submitting code for problem {}", request.problem_id);
        self.post_json(RUN_CODE_PATH, request).await
    }

    /// Relay a chat message to the assistant backend
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        debug!("Sending chat message for question {}", request.question_id);
        self.post_json(CHAT_PATH, request).await
    }

    /// Report a clipboard event. The reply is arbitrary JSON, returned
    /// only so the caller can log it.
    pub async fn record_clipboard_event(
        &self,
        event: &ClipboardEvent,
    ) -> Result<serde_json::Value> {
        debug!(
            "Recording {} event for question {}",
            event.action, event.question_id
        );
        self.post_json(CLIPBOARD_PATH, event).await
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::RequestFailed {
                endpoint: path.to_string(),
                reason: e.to_string(),
            })?
            .error_for_status()
            .map_err(|e| Error::RequestFailed {
                endpoint: path.to_string(),
                reason: e.to_string(),
            })?;

        response.json().await.map_err(|e| Error::MalformedResponse {
            endpoint: path.to_string(),
            reason: e.to_string(),
        })
    }
}
