//! Unified error handling for Recipebox Core.
//!
//! This module provides a unified error type that wraps domain errors and
//! document-level failures, with user-actionable suggestions.

use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for Recipebox Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecipeBoxError {
    /// Errors from the domain layer (business rule violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// The document handed to the mapping factory is not a mapping at all.
    #[error("Recipe document must be a mapping: {reason}")]
    InvalidDocument { reason: String },
}

impl RecipeBoxError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::InvalidDocument { .. } => vec![
                "The top level of a recipe file must be an object / table".into(),
                "Expected keys: \"name\", \"Ingredients\", \"Cooking Time\"".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::TypeMismatch => ErrorCategory::TypeMismatch,
            },
            Self::InvalidDocument { .. } => ErrorCategory::InvalidDocument,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    TypeMismatch,
    InvalidDocument,
}

/// Convenient result type alias.
pub type RecipeBoxResult<T> = Result<T, RecipeBoxError>;
