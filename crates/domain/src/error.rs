//! Unified error types for the domain layer
//!
//! Draft validation and id parsing report through a single error type so the
//! application layer can surface the message inline without touching the network.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a required field is blank)
    #[error("{0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for a draft that cannot be submitted.
    ///
    /// The message is shown to the user as-is, so phrase it as an instruction:
    ///
    /// ```ignore
    /// if draft.title.trim().is_empty() {
    ///     return Err(DomainError::validation("Title is required"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// True when the error came from draft validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_displayed_verbatim() {
        let err = DomainError::validation("Title is required");
        assert_eq!(err.to_string(), "Title is required");
        assert!(err.is_validation());
    }

    #[test]
    fn invalid_id_is_not_a_validation_error() {
        let err = DomainError::invalid_id("abc");
        assert_eq!(err.to_string(), "Invalid ID format: abc");
        assert!(!err.is_validation());
    }
}
