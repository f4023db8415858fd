//! Errors returned by speed commands.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThrottleError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThrottleError {
    /// An absolute speed below 1% was requested.
    #[error("invalid emulation speed percentage {percent}, must be at least 1")]
    InvalidArgument { percent: i32 },

    #[error("unknown speed preset `{0}`")]
    UnknownPreset(String),
}
