//! Solaris API crate - axum HTTP transport for the chat engine.
//!
//! Exposes the dialogue turn, the start command, session inspection and a
//! health check as JSON endpoints.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
