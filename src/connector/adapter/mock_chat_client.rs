use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{Conversation, DomainError};

const MOCK_MODEL: &str = "mock-llm";

const DEFAULT_REPLY: &str = "\
const reverseString = (str) => {
  if (typeof str !== 'string') throw new TypeError('Input must be a string');
  return [...str].reverse().join('');
};";

/// In-process [`ChatClient`] that never touches the network.
///
/// Replies with a canned snippet unless a scripted result is queued, and
/// records every conversation it receives.
pub struct MockChatClient {
    reply: String,
    scripted: Mutex<VecDeque<Result<String, String>>>,
    sent: Mutex<Vec<Conversation>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::with_reply(DEFAULT_REPLY)
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            scripted: Mutex::new(VecDeque::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Queue a one-off successful reply ahead of the default one.
    pub fn reply_next(&self, text: impl Into<String>) {
        self.script(Ok(text.into()));
    }

    /// Queue a one-off transport failure.
    pub fn fail_next(&self, message: impl Into<String>) {
        self.script(Err(message.into()));
    }

    pub fn sent(&self) -> Vec<Conversation> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().map(|s| s.len()).unwrap_or_default()
    }

    fn script(&self, result: Result<String, String>) {
        if let Ok(mut queue) = self.scripted.lock() {
            queue.push_back(result);
        }
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn send(&self, conversation: &Conversation) -> Result<String, DomainError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(conversation.clone());
        }

        let scripted = self.scripted.lock().ok().and_then(|mut q| q.pop_front());

        debug!(
            "Mock completion for {} message(s), scripted={}",
            conversation.len(),
            scripted.is_some()
        );

        match scripted {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(DomainError::transport(message)),
            None => Ok(self.reply.clone()),
        }
    }

    fn model_name(&self) -> &str {
        MOCK_MODEL
    }
}
