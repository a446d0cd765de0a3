//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Product attribute failures                     │
//! │                                                                         │
//! │  app errors (apps/storefront)                                          │
//! │  ├── AppError         - Config, I/O, unknown commands                  │
//! │  └── SinkError        - Data layer push failures (always swallowed)    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → shell prints it        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in the storefront is fatal once it is running: errors surface as
//! a logged warning or a line in the shell, never as a halt.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product attributes from an "add" control were rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An event payload could not be turned into a JSON object.
    ///
    /// ## When This Occurs
    /// Practically never for the built-in payload types; kept so event
    /// construction stays a fallible, explicit step.
    #[error("Event payload for {event} could not be encoded: {source}")]
    PayloadEncoding {
        event: String,
        #[source]
        source: serde_json::Error,
    },

    /// An event payload encoded to something other than a JSON object.
    #[error("Event payload for {event} must be a JSON object")]
    PayloadNotObject { event: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These come from the raw attributes attached to a product card
/// (id, name, price as text).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., a price that is not a decimal number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "product_id".to_string(),
        };
        assert_eq!(err.to_string(), "product_id is required");

        let err = ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(err.to_string(), "price has invalid format: not a number");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(
            core_err.to_string(),
            "Validation error: price must not be negative"
        );
    }
}
