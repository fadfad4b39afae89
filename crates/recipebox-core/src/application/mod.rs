//! Application layer for Recipebox.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RecipeService)
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod services;

pub use services::RecipeService;
