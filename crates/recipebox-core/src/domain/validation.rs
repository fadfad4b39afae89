use crate::domain::{
    error::DomainError,
    value_objects::{CookingTime, Value},
};

/// Centralized domain validation.
///
/// Cooking time is checked by every constructor. Ingredient shape is
/// opt-in: nothing in the domain calls [`DomainValidator::validate_ingredients`]
/// on the caller's behalf.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_cooking_time(minutes: f64) -> Result<CookingTime, DomainError> {
        CookingTime::new(minutes)
    }

    /// Succeeds iff every element is text.
    pub fn validate_ingredients(ingredients: &[Value]) -> Result<(), DomainError> {
        if ingredients.iter().all(Value::is_text) {
            Ok(())
        } else {
            Err(DomainError::IngredientTypeMismatch)
        }
    }
}
