use crate::domain::DomainError;

/// The raw text a user submitted describing the code they want.
///
/// A `Query` can only be built from text that is non-empty after trimming
/// whitespace. The text itself is kept exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
}

impl Query {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let text = raw.into();
        if text.trim().is_empty() {
            return Err(DomainError::invalid_input("query is empty"));
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The message content sent to the model: the query followed by `instruction`.
    pub fn with_instruction(&self, instruction: &str) -> String {
        let mut content = String::with_capacity(self.text.len() + instruction.len());
        content.push_str(&self.text);
        content.push_str(instruction);
        content
    }
}
