//! Recipe Service - recipe use cases.
//!
//! Thin orchestration over the domain: every entry point delegates to
//! `Recipe` / `RecipeData` and records what happened with `tracing`.

use tracing::{debug, instrument, warn};

use crate::{
    domain::{DomainError, Mapping, Recipe, RecipeData, Value},
    error::{RecipeBoxError, RecipeBoxResult},
};

/// Service for recipe operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeService;

impl RecipeService {
    /// Create a new recipe service.
    pub fn new() -> Self {
        Self
    }

    /// Direct construction.
    #[instrument(skip(self, ingredients), fields(ingredient_count = ingredients.len()))]
    pub fn create(
        &self,
        name: &str,
        ingredients: Vec<Value>,
        minutes: f64,
    ) -> RecipeBoxResult<Recipe> {
        let recipe = Recipe::new(name, ingredients, minutes).inspect_err(log_rejection)?;
        debug!(difficulty = %recipe.difficulty(), "Recipe created");
        Ok(recipe)
    }

    /// Construction through the mapping factory.
    ///
    /// Keys that are present but unusable are logged at `warn` before they
    /// fall back to their defaults.
    #[instrument(skip_all, fields(keys = data.len()))]
    pub fn from_mapping(&self, data: &Mapping) -> RecipeBoxResult<Recipe> {
        for key in RecipeData::malformed_keys(data) {
            let found = data.get(key).map_or("missing", Value::type_name);
            warn!(key, found, "Ignoring malformed field; using default");
        }

        let recipe = Recipe::from_mapping(data).inspect_err(log_rejection)?;
        debug!(
            name = %recipe.name(),
            cooking_time = recipe.cooking_time(),
            difficulty = %recipe.difficulty(),
            "Recipe built from mapping"
        );
        Ok(recipe)
    }

    /// Like [`Self::from_mapping`], for a document whose top level has not
    /// been checked yet.
    pub fn from_document(&self, document: &Value) -> RecipeBoxResult<Recipe> {
        let Some(data) = document.as_map() else {
            return Err(RecipeBoxError::InvalidDocument {
                reason: format!("found {}", document.type_name()),
            });
        };
        self.from_mapping(data)
    }

    /// Explicit, opt-in ingredient check.
    #[instrument(skip_all, fields(ingredient_count = ingredients.len()))]
    pub fn validate_ingredients(&self, ingredients: &[Value]) -> RecipeBoxResult<()> {
        Recipe::validate_ingredients(ingredients).inspect_err(log_rejection)?;
        debug!("All ingredients are text");
        Ok(())
    }
}

fn log_rejection(err: &DomainError) {
    debug!(error = %err, "Rejected by domain validation");
}
