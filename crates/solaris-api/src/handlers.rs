//! Route handler functions for all API endpoints.
//!
//! Each handler extracts the request via axum extractors, runs it through the
//! chat orchestrator and returns a JSON response.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use solaris_chat::{ChatReply, DialogueState, TurnOutcome};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request types
// =============================================================================

/// Request body for POST /chat.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub text: String,
}

/// Request body for POST /start.
#[derive(Debug, Serialize, Deserialize)]
pub struct StartRequest {
    pub user_id: String,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    /// Number of tracked dialogue sessions.
    pub sessions: usize,
}

/// One bot reply with the session state after the turn.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponseBody {
    pub reply: String,
    pub outcome: TurnOutcome,
    pub mode: String,
    pub subject: Option<String>,
}

impl From<ChatReply> for ChatResponseBody {
    fn from(reply: ChatReply) -> Self {
        Self {
            mode: reply.state.mode().to_string(),
            subject: subject_of(&reply.state),
            reply: reply.text,
            outcome: reply.outcome,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user_id: String,
    pub mode: String,
    pub subject: Option<String>,
}

/// Planet name or small-body designation; "Солнце" for the Sun.
fn subject_of(state: &DialogueState) -> Option<String> {
    match state {
        DialogueState::Sun => Some("Солнце".to_string()),
        other => other.subject().map(str::to_string),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /health - liveness and session count.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = if state.orchestrator.is_enabled() {
        "healthy"
    } else {
        "disabled"
    };
    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        sessions: state.orchestrator.session_count(),
    })
}

/// POST /chat - run one dialogue turn.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponseBody>, ApiError> {
    let reply = state.orchestrator.handle_message(&body.user_id, &body.text)?;
    debug!(user_id = %body.user_id, outcome = ?reply.outcome, "Chat turn served");
    Ok(Json(reply.into()))
}

/// POST /start - greet and reset the user's session.
pub async fn start(
    State(state): State<AppState>,
    Json(body): Json<StartRequest>,
) -> Result<Json<ChatResponseBody>, ApiError> {
    let reply = state.orchestrator.start(&body.user_id)?;
    Ok(Json(reply.into()))
}

/// GET /sessions/{user_id} - current dialogue state of a user.
///
/// Unknown users are reported as idle.
pub async fn session(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    if user_id.trim().is_empty() {
        return Err(ApiError::BadRequest("'user_id' must not be empty".to_string()));
    }
    let dialogue = state.orchestrator.session_state(&user_id);
    Ok(Json(SessionResponse {
        mode: dialogue.mode().to_string(),
        subject: subject_of(&dialogue),
        user_id,
    }))
}
