use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::application::{ChatClient, GenerateCodeUseCase};
use crate::connector::adapter::{HuggingFaceClient, HuggingFaceConfig, MockChatClient};

pub struct ContainerConfig {
    /// Answer from [`MockChatClient`] instead of calling the inference service.
    pub mock_llm: bool,
    pub inference: HuggingFaceConfig,
}

/// Owns the single chat client built at startup and hands out use cases
/// sharing it.
pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let chat_client: Arc<dyn ChatClient> = if config.mock_llm {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            if !config.inference.has_api_key() {
                warn!(
                    "No API key configured (set HF_TOKEN or --api-key); requests will be sent unauthenticated"
                );
            }
            let client = HuggingFaceClient::new(&config.inference)?;
            debug!(
                "Using Hugging Face client at {} with model {}",
                client.url(),
                client.model_name()
            );
            Arc::new(client)
        };

        Ok(Self::with_chat_client(chat_client, config))
    }

    /// Wire an already-built client, e.g. a [`MockChatClient`] shared with a test.
    pub fn with_chat_client(chat_client: Arc<dyn ChatClient>, config: ContainerConfig) -> Self {
        Self {
            chat_client,
            config,
        }
    }

    pub fn generate_use_case(&self) -> GenerateCodeUseCase {
        GenerateCodeUseCase::new(self.chat_client.clone())
    }

    pub fn model_name(&self) -> &str {
        self.chat_client.model_name()
    }

    pub fn mock_llm(&self) -> bool {
        self.config.mock_llm
    }

    pub fn provider(&self) -> &str {
        &self.config.inference.provider
    }
}
