//! Domain entities.

pub mod recipe;
pub mod recipe_data;

pub use recipe::Recipe;
pub use recipe_data::{Mapping, RecipeData};
