//! # Connector Layer
//!
//! External integrations implementing application ports and exposing the
//! use case:
//! - Inference clients (Hugging Face router, in-process mock)
//! - Dependency container, router and controllers for the CLI
//! - Web form server (axum)

pub mod adapter;
pub mod api;
pub mod web;

pub use adapter::*;
pub use api::{Container, ContainerConfig};
