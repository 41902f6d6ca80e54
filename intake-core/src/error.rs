//! Error types for the bot core.
//!
//! [`IntakeError`] is the top-level error; [`HandlerError`] is used for handler failures.

use thiserror::Error;

/// Top-level error: bot transport or handler failure.
#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Errors produced while handling a single message.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid message id: {0}")]
    InvalidMessageId(String),

    #[error("State error: {0}")]
    State(String),
}

/// Result type for core operations; uses [`IntakeError`].
pub type Result<T> = std::result::Result<T, IntakeError>;
