//! Common error infrastructure for farm-core.
//!
//! This module provides the shared classification used by every error type in
//! farm-core. Domain-specific errors (e.g., `NotationError`, `StatError`) are
//! defined in their respective modules alongside the operations that raise them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each layer has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for caller handling
//! - **No Partial Mutation**: An operation that returns an error has not touched state

/// Severity level of an error, used for categorization and handling strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Arithmetic**: Input is well-formed, but the requested computation is undefined
///   for the current state (e.g., dividing by a zero rate)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - malformed or out-of-domain input.
    ///
    /// Examples: unparseable compact number, unknown stat alias, negative delay
    Validation,

    /// Arithmetic error - the computation has no finite answer for this state.
    ///
    /// Examples: time to reach a target with a zero accrual rate,
    /// balance coefficient with a zero-amount stat
    Arithmetic,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Arithmetic => "arithmetic",
        }
    }

    /// Returns true if changing the input alone can make the call succeed.
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all farm-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on what the caller can do about it, not impact
pub trait FarmError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert_eq!(ErrorSeverity::Arithmetic.as_str(), "arithmetic");
        assert!(ErrorSeverity::Validation.is_input_error());
        assert!(!ErrorSeverity::Arithmetic.is_input_error());
    }
}
