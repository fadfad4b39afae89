//! The `Recipe` entity.
//!
//! A `Recipe` is created once and not changed afterwards. The cooking time is
//! checked on the way in; the ingredient list is not. Difficulty is derived
//! from the cooking time each time it is asked for.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::domain::{
    entities::recipe_data::{
        COOKING_TIME_KEY, INGREDIENTS_KEY, Mapping, NAME_KEY, RecipeData,
    },
    error::DomainError,
    validation::DomainValidator,
    value_objects::{CookingTime, Difficulty, Value},
};

/// Separator line at the top and bottom of a rendered recipe card.
pub const SEPARATOR: &str = "--------------------------------------";

/// A recipe: name, ingredients and a validated cooking time.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    name: Value,
    ingredients: Vec<Value>,
    cooking_time: CookingTime,
}

impl Recipe {
    /// Build a recipe.
    ///
    /// Only the cooking time is validated. `ingredients` may hold values of
    /// any type; call [`Recipe::validate_ingredients`] when text-only
    /// ingredients are required.
    pub fn new<N, I>(name: N, ingredients: I, cooking_time: f64) -> Result<Self, DomainError>
    where
        N: Into<Value>,
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let cooking_time = DomainValidator::validate_cooking_time(cooking_time)?;
        Ok(Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            cooking_time,
        })
    }

    /// Build a recipe from a loosely-typed mapping.
    ///
    /// Missing or unusable keys fall back to their defaults (see
    /// [`RecipeData`]). A negative `"Cooking Time"` still fails.
    pub fn from_mapping(data: &Mapping) -> Result<Self, DomainError> {
        RecipeData::from_mapping(data).into_recipe()
    }

    /// Check that every ingredient is text. Stand-alone; never called by the
    /// constructors.
    pub fn validate_ingredients(ingredients: &[Value]) -> Result<(), DomainError> {
        DomainValidator::validate_ingredients(ingredients)
    }

    /// [`Recipe::validate_ingredients`] applied to this recipe's list.
    pub fn check_ingredients(&self) -> Result<(), DomainError> {
        Self::validate_ingredients(&self.ingredients)
    }

    pub fn name(&self) -> &Value {
        &self.name
    }

    pub fn ingredients(&self) -> &[Value] {
        &self.ingredients
    }

    /// Minutes, exactly as given at construction.
    pub fn cooking_time(&self) -> f64 {
        self.cooking_time.minutes()
    }

    /// Derived on every call.
    pub fn difficulty(&self) -> Difficulty {
        self.cooking_time.difficulty()
    }

    /// The multi-line recipe card. Same output as `Display`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn to_data(&self) -> RecipeData {
        RecipeData {
            name: Some(self.name.clone()),
            ingredients: Some(self.ingredients.clone()),
            cooking_time: Some(self.cooking_time.minutes()),
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ingredients = self
            .ingredients
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "🍽 Recipe: {}", self.name)?;
        writeln!(f, "🥄 Ingredients: {ingredients}")?;
        writeln!(f, "⏳ Cooking Time: {}", self.cooking_time)?;
        writeln!(f, "🔥 Difficulty: {}", self.difficulty())?;
        f.write_str(SEPARATOR)
    }
}

/// Serializes as the mapping contract plus a derived `"Difficulty"` key,
/// which [`Recipe::from_mapping`] ignores on the way back in.
impl Serialize for Recipe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Recipe", 4)?;
        state.serialize_field(NAME_KEY, &self.name)?;
        state.serialize_field(INGREDIENTS_KEY, &self.ingredients)?;
        state.serialize_field(COOKING_TIME_KEY, &self.cooking_time)?;
        state.serialize_field("Difficulty", &self.difficulty())?;
        state.end()
    }
}
