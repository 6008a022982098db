//! Unified error type surfaced by the runtime API.
//!
//! Wraps construction failures from the rules crate and repository failures
//! so clients can bubble them up with consistent context.

use thiserror::Error;

use champion_core::{ChampionError, ErrorSeverity, GameError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no champion named {0:?}")]
    NotFound(String),

    #[error("saved record for {name:?} is corrupt: {reason}")]
    CorruptRecord { name: String, reason: String },

    #[error("{0:?} is not a champion")]
    TypeMismatch(String),

    #[error(transparent)]
    Champion(#[from] ChampionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("roster lock was poisoned")]
    LockPoisoned,
}

impl RuntimeError {
    /// True for failures caused by caller input rather than storage.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::TypeMismatch(_) | Self::Champion(_)
        )
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) | Self::TypeMismatch(_) => ErrorSeverity::Validation,
            Self::Champion(err) => err.severity(),
            Self::CorruptRecord { .. } => ErrorSeverity::Fatal,
            Self::Repository(_) | Self::LockPoisoned => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "RUNTIME_NOT_FOUND",
            Self::CorruptRecord { .. } => "RUNTIME_CORRUPT_RECORD",
            Self::TypeMismatch(_) => "RUNTIME_TYPE_MISMATCH",
            Self::Champion(err) => err.error_code(),
            Self::Repository(_) => "RUNTIME_REPOSITORY",
            Self::LockPoisoned => "RUNTIME_LOCK_POISONED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_errors_keep_their_code() {
        let err = RuntimeError::from(ChampionError::EmptyName);
        assert_eq!(err.error_code(), "CHAMPION_EMPTY_NAME");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(err.is_user_error());
    }

    #[test]
    fn repository_failures_are_internal() {
        let err = RuntimeError::from(RepositoryError::LockPoisoned);
        assert!(err.severity().is_internal());
        assert!(!err.is_user_error());
    }
}
