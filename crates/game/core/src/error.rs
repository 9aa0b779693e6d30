//! Severity classification shared by every error in the workspace.
//!
//! `OracleError` and `CombatError` live next to the code that raises them;
//! the content and runtime crates implement [`GameError`] for their own enums
//! so callers can branch on severity and stable codes without matching
//! variants.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Validation**: The request was rejected before any state changed; it can be
///   retried once the caller corrects it (different weapon, different phase)
/// - **Data**: Static content referenced by the request is missing
/// - **Internal**: Unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid request, no state was mutated.
    ///
    /// Examples: weapon out of range, no ammunition, wrong phase
    Validation,

    /// Content lookup failed.
    ///
    /// Examples: unknown monster ID, item definition missing from the store
    Data,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Data => "data",
            Self::Internal => "internal",
        }
    }

    /// Returns true if the same request may succeed after the caller corrects it.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Validation)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Severity and a stable code for an error enum.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for the variant; defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_validation_is_retryable() {
        assert!(ErrorSeverity::Validation.is_retryable());
        assert!(!ErrorSeverity::Data.is_retryable());
        assert!(!ErrorSeverity::Internal.is_retryable());
        assert!(ErrorSeverity::Internal.is_internal());
    }
}
