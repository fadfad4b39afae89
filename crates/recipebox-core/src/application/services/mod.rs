//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and add observability. They hold no
//! business rules of their own.

pub mod recipe_service;

pub use recipe_service::RecipeService;
