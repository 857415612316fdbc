use serde::{Deserialize, Serialize};

/// Language tag attached to every generated snippet.
pub const CODE_LANGUAGE: &str = "javascript";

pub const EMPTY_QUERY_WARNING: &str = "Please enter a non-empty query.";

const ERROR_PREFIX: &str = "An error occurred: ";

/// What a single submission produced, ready to be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Code { language: String, text: String },
    Warning { message: String },
    Error { message: String },
}

impl GenerationOutcome {
    pub fn code(text: impl Into<String>) -> Self {
        Self::Code {
            language: CODE_LANGUAGE.to_string(),
            text: text.into(),
        }
    }

    pub fn empty_query() -> Self {
        Self::Warning {
            message: EMPTY_QUERY_WARNING.to_string(),
        }
    }

    pub fn error(cause: impl std::fmt::Display) -> Self {
        Self::Error {
            message: format!("{ERROR_PREFIX}{cause}"),
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code { .. })
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn code_text(&self) -> Option<&str> {
        match self {
            Self::Code { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Warning { message } | Self::Error { message } => Some(message),
            Self::Code { .. } => None,
        }
    }
}
