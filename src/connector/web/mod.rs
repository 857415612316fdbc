//! Browser-facing surface: the form page plus a small JSON API.

pub mod handlers;
pub mod page;
pub mod server;

pub use handlers::{AppState, GenerateForm};
pub use server::{bind_address, build_router, serve};
