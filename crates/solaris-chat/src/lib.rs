//! Conversational interface for Solaris.
//!
//! Provides keyword intent matching, per-user dialogue state, catalog-backed
//! attribute resolution and reply formatting for questions about the Solar
//! System.

pub mod context;
pub mod error;
pub mod normalize;
pub mod orchestrator;
pub mod parser;
pub mod response;
pub mod types;

pub use context::SessionStore;
pub use error::ChatError;
pub use normalize::{normalize, PLACEHOLDER};
pub use orchestrator::{ChatOrchestrator, START_COMMAND};
pub use parser::IntentMatcher;
pub use types::{AttributeRequest, ChatReply, DialogueState, Intent, Subject, TurnOutcome};
