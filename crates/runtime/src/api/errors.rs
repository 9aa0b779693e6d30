//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and the combat engine so clients
//! can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use encounter_core::{CombatError, ErrorSeverity, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no combat session with id '{0}'")]
    UnknownSession(String),

    #[error("combat session '{0}' already exists")]
    DuplicateSession(String),

    #[error("session limit of {limit} reached")]
    SessionLimit { limit: usize },

    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error(transparent)]
    Combat(#[from] CombatError),
}

impl RuntimeError {
    /// Engine error behind this failure, if any.
    pub fn combat(&self) -> Option<&CombatError> {
        match self {
            Self::Combat(error) => Some(error),
            _ => None,
        }
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Combat(error) => error.severity(),
            Self::UnknownSession(_) | Self::DuplicateSession(_) | Self::SessionLimit { .. } => {
                ErrorSeverity::Validation
            }
            Self::CommandChannelClosed | Self::ReplyChannelClosed(_) | Self::MissingOracles => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSession(_) => "RUNTIME_UNKNOWN_SESSION",
            Self::DuplicateSession(_) => "RUNTIME_DUPLICATE_SESSION",
            Self::SessionLimit { .. } => "RUNTIME_SESSION_LIMIT",
            Self::CommandChannelClosed => "RUNTIME_COMMAND_CHANNEL_CLOSED",
            Self::ReplyChannelClosed(_) => "RUNTIME_REPLY_CHANNEL_CLOSED",
            Self::MissingOracles => "RUNTIME_MISSING_ORACLES",
            Self::Combat(error) => error.error_code(),
        }
    }
}
