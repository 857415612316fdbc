use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{Conversation, DomainError};

/// Hugging Face inference router, OpenAI-compatible surface.
pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/v1";
pub const DEFAULT_PROVIDER: &str = "nebius";
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.2-3B-Instruct";
const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
/// Longest slice of an error body echoed back to the user.
const MAX_ERROR_DETAIL: usize = 300;

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Connection settings for [`HuggingFaceClient`]. The binary fills them from
/// its global flags, which fall back to these environment variables:
///
/// | Variable          | Default                             |
/// |-------------------|-------------------------------------|
/// | `HF_TOKEN`        | `""` (requests go out unauthenticated) |
/// | `HF_PROVIDER`     | `nebius`                            |
/// | `HF_MODEL`        | `meta-llama/Llama-3.2-3B-Instruct`  |
/// | `HF_BASE_URL`     | `https://router.huggingface.co/v1`  |
/// | `HF_TIMEOUT_SECS` | unset (no client-side timeout)      |
#[derive(Clone)]
pub struct HuggingFaceConfig {
    pub api_key: String,
    pub provider: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl HuggingFaceConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Model id as the router expects it: `<model>:<provider>`, or the bare
    /// model when the provider is empty or `auto`.
    pub fn routed_model(&self) -> String {
        let provider = self.provider.trim();
        if provider.is_empty() || provider.eq_ignore_ascii_case("auto") {
            self.model.clone()
        } else {
            format!("{}:{}", self.model, provider)
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            provider: DEFAULT_PROVIDER.to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl std::fmt::Debug for HuggingFaceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceConfig")
            .field("api_key", &if self.has_api_key() { "<redacted>" } else { "<empty>" })
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// HTTP client for chat completions through the Hugging Face inference router
/// (or any OpenAI-compatible `/chat/completions` endpoint).
///
/// Built once at startup and shared read-only. Sends the conversation as-is
/// and returns the first choice's message content.
pub struct HuggingFaceClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    url: String,
}

impl HuggingFaceClient {
    pub fn new(config: &HuggingFaceConfig) -> Result<Self, DomainError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DomainError::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.has_api_key().then(|| config.api_key.trim().to_string()),
            model: config.routed_model(),
            url: config.endpoint(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn describe_send_error(&self, e: &reqwest::Error) -> String {
        if e.is_timeout() {
            format!("request to {} timed out: {e}", self.url)
        } else if e.is_connect() {
            format!("could not reach {}: {e}", self.url)
        } else {
            format!("request to {} failed: {e}", self.url)
        }
    }

    /// Pull a readable message out of an error body. The router answers with
    /// `{"error": "..."}` or `{"error": {"message": "..."}}`; anything else is
    /// echoed back truncated.
    fn error_detail(body: &str) -> String {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let message = parsed.as_ref().and_then(|v| {
            let error = v.get("error")?;
            error
                .as_str()
                .or_else(|| error.get("message").and_then(|m| m.as_str()))
                .map(str::to_string)
        });

        match message {
            Some(m) => m,
            None => body.trim().chars().take(MAX_ERROR_DETAIL).collect(),
        }
    }
}

#[async_trait]
impl ChatClient for HuggingFaceClient {
    async fn send(&self, conversation: &Conversation) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages: conversation
                .messages()
                .iter()
                .map(|m| ApiMessage {
                    role: m.role().as_str(),
                    content: m.content(),
                })
                .collect(),
        };

        let mut builder = self.client.post(&self.url).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| DomainError::transport(self.describe_send_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("HuggingFaceClient: API returned {status}: {body}");
            let detail = Self::error_detail(&body);
            return Err(DomainError::transport(if detail.is_empty() {
                format!("inference service returned {status}")
            } else {
                format!("inference service returned {status}: {detail}")
            }));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::transport(format!("malformed response from inference service: {e}"))
        })?;

        debug!(
            "HuggingFaceClient: {} choice(s) returned",
            api_response.choices.len()
        );

        api_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or_else(|| DomainError::transport("inference service returned no choices"))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routed_model_appends_provider() {
        let config = HuggingFaceConfig::default();
        assert_eq!(config.routed_model(), "meta-llama/Llama-3.2-3B-Instruct:nebius");
    }

    #[test]
    fn routed_model_skips_auto_and_empty_provider() {
        let mut config = HuggingFaceConfig::default();
        config.provider = "auto".to_string();
        assert_eq!(config.routed_model(), DEFAULT_MODEL);
        config.provider = "  ".to_string();
        assert_eq!(config.routed_model(), DEFAULT_MODEL);
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let config = HuggingFaceConfig::default().with_base_url("http://localhost:8080/v1/");
        assert_eq!(config.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = HuggingFaceConfig::default().with_api_key("hf_secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hf_secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn blank_api_key_is_not_sent() {
        let client = HuggingFaceClient::new(&HuggingFaceConfig::default().with_api_key("   ")).unwrap();
        assert!(client.api_key.is_none());
    }

    #[test]
    fn error_detail_reads_router_error_shapes() {
        assert_eq!(
            HuggingFaceClient::error_detail(r#"{"error": "Invalid credentials"}"#),
            "Invalid credentials"
        );
        assert_eq!(
            HuggingFaceClient::error_detail(r#"{"error": {"message": "model not found"}}"#),
            "model not found"
        );
        assert_eq!(HuggingFaceClient::error_detail("  Bad Gateway \n"), "Bad Gateway");
    }
}
