//! The loosely-typed mapping contract and its explicit, optional-field form.
//!
//! A recipe document arrives as a [`Mapping`] keyed by `"name"`,
//! `"Ingredients"` and `"Cooking Time"`. [`RecipeData::from_mapping`] pulls
//! those keys out into typed optional fields without failing;
//! [`RecipeData::into_recipe`] fills in the defaults and hands off to
//! [`Recipe::new`], which is where the cooking-time check happens.
//!
//! | Key              | Field          | Default        |
//! |------------------|----------------|----------------|
//! | `"name"`         | `name`         | `Value::Null`  |
//! | `"Ingredients"`  | `ingredients`  | empty list     |
//! | `"Cooking Time"` | `cooking_time` | `0`            |

use std::collections::BTreeMap;

use crate::domain::{entities::recipe::Recipe, error::DomainError, value_objects::Value};

/// In-memory form of a recipe document.
pub type Mapping = BTreeMap<String, Value>;

pub const NAME_KEY: &str = "name";
pub const INGREDIENTS_KEY: &str = "Ingredients";
pub const COOKING_TIME_KEY: &str = "Cooking Time";

/// Cooking time used when the mapping has none.
pub const DEFAULT_COOKING_TIME: f64 = 0.0;

/// Recipe fields as extracted from a mapping, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeData {
    /// Taken as-is, whatever its type.
    pub name: Option<Value>,
    /// `None` when the key is missing or not a list.
    pub ingredients: Option<Vec<Value>>,
    /// `None` when the key is missing or not a number.
    pub cooking_time: Option<f64>,
}

impl RecipeData {
    /// Extract the three contract keys. Never fails; unusable values are
    /// treated as absent and unknown keys are ignored.
    pub fn from_mapping(data: &Mapping) -> Self {
        Self {
            name: data.get(NAME_KEY).cloned(),
            ingredients: data
                .get(INGREDIENTS_KEY)
                .and_then(Value::as_list)
                .map(<[Value]>::to_vec),
            cooking_time: data.get(COOKING_TIME_KEY).and_then(Value::as_number),
        }
    }

    /// Keys that are present in `data` but could not be used and will fall
    /// back to their defaults.
    pub fn malformed_keys(data: &Mapping) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if data
            .get(INGREDIENTS_KEY)
            .is_some_and(|v| v.as_list().is_none())
        {
            keys.push(INGREDIENTS_KEY);
        }
        if data
            .get(COOKING_TIME_KEY)
            .is_some_and(|v| v.as_number().is_none())
        {
            keys.push(COOKING_TIME_KEY);
        }
        keys
    }

    /// Apply defaults and construct. Fails only on a negative cooking time.
    pub fn into_recipe(self) -> Result<Recipe, DomainError> {
        Recipe::new(
            self.name.unwrap_or_default(),
            self.ingredients.unwrap_or_default(),
            self.cooking_time.unwrap_or(DEFAULT_COOKING_TIME),
        )
    }

    /// Back to the mapping contract. Absent fields are left out.
    pub fn to_mapping(&self) -> Mapping {
        let mut mapping = Mapping::new();
        if let Some(name) = &self.name {
            mapping.insert(NAME_KEY.into(), name.clone());
        }
        if let Some(ingredients) = &self.ingredients {
            mapping.insert(INGREDIENTS_KEY.into(), Value::List(ingredients.clone()));
        }
        if let Some(minutes) = self.cooking_time {
            mapping.insert(COOKING_TIME_KEY.into(), Value::Number(minutes));
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, Value)]) -> Mapping {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }

    #[test]
    fn empty_mapping_extracts_nothing() {
        assert_eq!(RecipeData::from_mapping(&Mapping::new()), RecipeData::default());
    }

    #[test]
    fn keys_are_case_sensitive() {
        let data = RecipeData::from_mapping(&mapping(&[
            ("Name", Value::from("Cake")),
            ("ingredients", Value::List(vec![Value::from("Flour")])),
            ("cooking time", Value::from(20)),
        ]));
        assert_eq!(data, RecipeData::default());
    }

    #[test]
    fn malformed_values_are_dropped() {
        let raw = mapping(&[
            (INGREDIENTS_KEY, Value::from("Flour, Sugar")),
            (COOKING_TIME_KEY, Value::from("45")),
        ]);
        let data = RecipeData::from_mapping(&raw);
        assert!(data.ingredients.is_none());
        assert!(data.cooking_time.is_none());
        assert_eq!(
            RecipeData::malformed_keys(&raw),
            vec![INGREDIENTS_KEY, COOKING_TIME_KEY]
        );
    }

    #[test]
    fn well_formed_mapping_has_no_malformed_keys() {
        let raw = mapping(&[
            (NAME_KEY, Value::from("Cake")),
            (COOKING_TIME_KEY, Value::from(75)),
        ]);
        assert!(RecipeData::malformed_keys(&raw).is_empty());
    }

    #[test]
    fn name_is_not_coerced() {
        let data = RecipeData::from_mapping(&mapping(&[(NAME_KEY, Value::from(7))]));
        assert_eq!(data.name, Some(Value::Number(7.0)));
    }

    #[test]
    fn defaults_applied_on_into_recipe() {
        let recipe = RecipeData::default().into_recipe().unwrap();
        assert!(recipe.name().is_null());
        assert!(recipe.ingredients().is_empty());
        assert_eq!(recipe.cooking_time(), DEFAULT_COOKING_TIME);
    }

    #[test]
    fn to_mapping_skips_absent_fields() {
        let data = RecipeData {
            cooking_time: Some(10.0),
            ..Default::default()
        };
        let m = data.to_mapping();
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(COOKING_TIME_KEY), Some(&Value::Number(10.0)));
    }
}
