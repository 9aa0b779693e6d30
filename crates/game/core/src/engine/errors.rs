//! Error types for combat commands.

use crate::engine::CombatPhase;
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};

/// Reasons a two-weapon (off-hand) attack is not allowed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TwoWeaponError {
    #[error("no weapon in the main hand")]
    MainHandEmpty,

    #[error("no weapon in the off hand")]
    OffHandEmpty,

    #[error("'{0}' is not a light weapon")]
    NotLight(String),

    #[error("main-hand weapon '{0}' has the loading property")]
    MainHandLoading(String),

    #[error("bonus action already used this turn")]
    BonusActionUsed,
}

/// Errors surfaced while processing a combat command.
///
/// Every variant except [`CombatError::Oracle`] is raised before the session
/// or player record is touched, so the same command can be corrected and
/// retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("command requires phase {expected}, session is in {actual}")]
    WrongPhase {
        expected: CombatPhase,
        actual: CombatPhase,
    },

    #[error("'{item}' is not a weapon")]
    NotAWeapon { item: String },

    #[error("'{weapon}' needs melee range, target is at range {range}")]
    NotInMeleeRange { weapon: String, range: u32 },

    #[error("'{weapon}' reaches range {long_range}, target is at range {range}")]
    OutOfRange {
        weapon: String,
        range: u32,
        long_range: u32,
    },

    #[error("'{weapon}' needs ammunition and none is equipped")]
    NoAmmunition { weapon: String },

    #[error("'{weapon}' cannot be thrown")]
    NotThrowable { weapon: String },

    #[error("two-weapon fighting not allowed: {0}")]
    TwoWeapon(#[from] TwoWeaponError),

    #[error("combat is not finished (phase {0})")]
    CombatNotFinished(CombatPhase),

    #[error("combat has already been settled")]
    AlreadySettled,
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(error) => error.severity(),
            Self::WrongPhase { .. }
            | Self::NotAWeapon { .. }
            | Self::NotInMeleeRange { .. }
            | Self::OutOfRange { .. }
            | Self::NoAmmunition { .. }
            | Self::NotThrowable { .. }
            | Self::TwoWeapon(_)
            | Self::CombatNotFinished(_)
            | Self::AlreadySettled => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(error) => error.error_code(),
            Self::WrongPhase { .. } => "COMBAT_WRONG_PHASE",
            Self::NotAWeapon { .. } => "COMBAT_NOT_A_WEAPON",
            Self::NotInMeleeRange { .. } => "COMBAT_NOT_IN_MELEE_RANGE",
            Self::OutOfRange { .. } => "COMBAT_OUT_OF_RANGE",
            Self::NoAmmunition { .. } => "COMBAT_NO_AMMUNITION",
            Self::NotThrowable { .. } => "COMBAT_NOT_THROWABLE",
            Self::TwoWeapon(_) => "COMBAT_INVALID_TWO_WEAPON",
            Self::CombatNotFinished(_) => "COMBAT_NOT_FINISHED",
            Self::AlreadySettled => "COMBAT_ALREADY_SETTLED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_errors_keep_their_classification() {
        let error = CombatError::from(OracleError::MonsterNotFound("wyrm".into()));
        assert_eq!(error.severity(), ErrorSeverity::Data);
        assert_eq!(error.error_code(), "ORACLE_MONSTER_NOT_FOUND");
        assert_eq!(error.to_string(), "monster template 'wyrm' not found");
    }

    #[test]
    fn validation_errors_are_retryable() {
        let error = CombatError::from(TwoWeaponError::BonusActionUsed);
        assert!(error.severity().is_retryable());
        assert_eq!(error.error_code(), "COMBAT_INVALID_TWO_WEAPON");
    }
}
