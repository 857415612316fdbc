//! # Application Layer
//!
//! Ports for outbound services and the use case coordinating them.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
