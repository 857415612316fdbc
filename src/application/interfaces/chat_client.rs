use async_trait::async_trait;

use crate::domain::{Conversation, DomainError};

/// Sends a chat conversation to a hosted language model and returns the text
/// of the first completion.
///
/// Implementors own transport, authentication and the vendor wire format.
/// Every failure (unreachable host, timeout, rejected credentials, error
/// status, unreadable body) is reported as [`DomainError::Transport`].
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn send(&self, conversation: &Conversation) -> Result<String, DomainError>;

    /// Model identifier as sent to the provider, for logging.
    fn model_name(&self) -> &str;
}
