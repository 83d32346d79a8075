//! Application state shared across all route handlers.
//!
//! It is passed to handlers via axum's State extractor.

use std::sync::Arc;
use std::time::Instant;

use solaris_chat::ChatOrchestrator;
use solaris_core::config::ServerConfig;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// Dialogue engine; owns the per-user sessions.
    pub orchestrator: Arc<ChatOrchestrator>,
    /// Listener configuration, used for CORS origins.
    pub server: Arc<ServerConfig>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(orchestrator: Arc<ChatOrchestrator>, server: ServerConfig) -> Self {
        Self {
            orchestrator,
            server: Arc::new(server),
            start_time: Instant::now(),
        }
    }
}
