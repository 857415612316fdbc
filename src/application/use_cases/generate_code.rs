use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::ChatClient;
use crate::domain::{Conversation, GenerationOutcome, Query, JAVASCRIPT_INSTRUCTION};

/// Handles one form submission: validate the query, send it with the fixed
/// instruction text, and turn whatever comes back into a displayable outcome.
pub struct GenerateCodeUseCase {
    chat_client: Arc<dyn ChatClient>,
    instruction: &'static str,
}

impl GenerateCodeUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            chat_client,
            instruction: JAVASCRIPT_INSTRUCTION,
        }
    }

    /// Never fails: validation problems become a warning and client faults
    /// become an error outcome. At most one call is made to the client.
    pub async fn execute(&self, raw_query: &str) -> GenerationOutcome {
        let query = match Query::parse(raw_query) {
            Ok(query) => query,
            Err(e) => {
                debug!("Rejected submission: {}", e);
                return GenerationOutcome::empty_query();
            }
        };

        let request_id = Uuid::new_v4();
        let conversation = Conversation::single_user(query.with_instruction(self.instruction));

        info!(
            %request_id,
            "Generating code with {} ({} chars of query)",
            self.chat_client.model_name(),
            query.text().len()
        );
        debug!(%request_id, "Payload size: {} chars", conversation.content_len());

        let start_time = Instant::now();

        match self.chat_client.send(&conversation).await {
            Ok(text) => {
                info!(
                    %request_id,
                    "Completion received in {:.2?} ({} chars)",
                    start_time.elapsed(),
                    text.len()
                );
                GenerationOutcome::code(text)
            }
            Err(e) => {
                warn!(
                    %request_id,
                    "Completion failed after {:.2?}: {}",
                    start_time.elapsed(),
                    e
                );
                GenerationOutcome::error(e)
            }
        }
    }
}
