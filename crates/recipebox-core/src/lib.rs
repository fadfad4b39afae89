//! Recipebox Core - the recipe domain and its use cases.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          recipebox-cli (CLI)            │
//! │   reads documents, prints recipe cards  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (RecipeService)              │
//! │     Orchestrates + logs use cases       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Recipe, RecipeData, CookingTime,      │
//! │   Difficulty, Value, DomainValidator)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use recipebox_core::domain::{Difficulty, Mapping, Recipe, Value};
//!
//! let eggs = Recipe::new("Boiled Eggs", ["Eggs", "Water", "Pot"], 12.0).unwrap();
//! assert_eq!(eggs.difficulty(), Difficulty::Easy);
//! println!("{eggs}");
//!
//! let mut data = Mapping::new();
//! data.insert("name".into(), Value::from("Cake"));
//! data.insert("Cooking Time".into(), Value::from(75));
//! let cake = Recipe::from_mapping(&data).unwrap();
//! assert_eq!(cake.difficulty(), Difficulty::Hard);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::RecipeService;
    pub use crate::domain::{
        CookingTime, Difficulty, DomainError, DomainValidator, Mapping, Recipe, RecipeData,
        Value,
    };
    pub use crate::error::{RecipeBoxError, RecipeBoxResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
