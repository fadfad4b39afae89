// ============================================================================
// domain/error.rs - RECIPE DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to hand back to callers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// Raised by every construction path when the cooking time is below zero.
    #[error("cooking time cannot be negative (got {minutes})")]
    NegativeCookingTime { minutes: f64 },

    /// `NaN` or an infinity. TOML documents can spell both.
    #[error("cooking time must be a finite number (got {minutes})")]
    NonFiniteCookingTime { minutes: f64 },

    // ========================================================================
    // Type Errors
    // ========================================================================
    /// Raised only by explicit ingredient validation. Does not name the
    /// offending element.
    #[error("all ingredients must be text")]
    IngredientTypeMismatch,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NegativeCookingTime { minutes } => vec![
                format!("Cooking time was {minutes}; it must be zero or more minutes"),
                "Set \"Cooking Time\" to a non-negative number".into(),
            ],
            Self::NonFiniteCookingTime { minutes } => vec![
                format!("Cooking time was {minutes}"),
                "Set \"Cooking Time\" to a whole or decimal number of minutes".into(),
            ],
            Self::IngredientTypeMismatch => vec![
                "Every entry in \"Ingredients\" must be a string".into(),
                "Quote numbers and flags, e.g. \"2 eggs\" instead of 2".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NegativeCookingTime { .. } | Self::NonFiniteCookingTime { .. } => {
                ErrorCategory::Validation
            }
            Self::IngredientTypeMismatch => ErrorCategory::TypeMismatch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    TypeMismatch,
}
