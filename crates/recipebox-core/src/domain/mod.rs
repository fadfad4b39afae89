// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Recipebox.
//!
//! This module contains pure business logic. All I/O and logging happen in
//! the application and CLI layers.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: `tracing` is not imported here
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    Mapping, Recipe, RecipeData,
    recipe_data::{COOKING_TIME_KEY, DEFAULT_COOKING_TIME, INGREDIENTS_KEY, NAME_KEY},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    CookingTime, Difficulty, EASY_MAX_MINUTES, MEDIUM_MAX_MINUTES, Value,
};

pub use validation::DomainValidator;
