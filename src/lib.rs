pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ChatClient, GenerateCodeUseCase};

pub use cli::Commands;

pub use connector::{
    Container, ContainerConfig, HuggingFaceClient, HuggingFaceConfig, MockChatClient,
};

pub use domain::{
    ChatMessage, Conversation, DomainError, GenerationOutcome, Query, Role, CODE_LANGUAGE,
    EMPTY_QUERY_WARNING, JAVASCRIPT_INSTRUCTION,
};
