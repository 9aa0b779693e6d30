//! Oracle access errors.
//!
//! Errors raised when the content store cannot satisfy a lookup.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when reading static content through an oracle.
///
/// A missing definition is fatal for the call that needed it; the caller
/// decides whether to abort or degrade.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Monster template was not found by ID.
    #[error("monster template '{0}' not found")]
    MonsterNotFound(String),

    /// Item definition was not found by ID.
    #[error("item definition '{0}' not found")]
    ItemNotFound(String),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MonsterNotFound(_) | Self::ItemNotFound(_) => ErrorSeverity::Data,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MonsterNotFound(_) => "ORACLE_MONSTER_NOT_FOUND",
            Self::ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
        }
    }
}
