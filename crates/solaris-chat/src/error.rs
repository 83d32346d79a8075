//! Error types for the chat engine.
//!
//! These reject a turn before it reaches the dialogue. Catalog failures during
//! a turn are answered in-dialogue and never surface here.

/// Errors from the chat engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat is disabled")]
    Disabled,
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("user id cannot be empty")]
    InvalidUser,
}
