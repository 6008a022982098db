//! Common error infrastructure for champion-core.
//!
//! This module provides shared types and traits used across all error types in
//! champion-core. Domain-specific errors (`ChampionError`, `ProgressionNotice`,
//! `RecordError`) are defined in their respective modules alongside the
//! operations that raise them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation family has its own error type
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **No Partial Mutation**: Every error is raised before state is touched

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Reported conditions; the caller's flow continues
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted data
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable condition - reported, state left unchanged.
    ///
    /// Examples: not enough stat points, level cap reached
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: name too long, unknown archetype
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - stored data cannot be trusted.
    ///
    /// Examples: a record whose class does not resolve
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug or bad data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all champion-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
