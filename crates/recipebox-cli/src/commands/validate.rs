//! Implementation of the `recipebox validate` command.

use serde::Serialize;
use tracing::instrument;

use recipebox_core::{
    application::RecipeService,
    domain::{Difficulty, Recipe},
};

use crate::{cli::ValidateArgs, document, error::CliResult, output::OutputManager};

/// Machine-readable result of a successful validation.
#[derive(Debug, Serialize)]
struct ValidationReport {
    file: String,
    valid: bool,
    ingredients: usize,
    cooking_time: f64,
    difficulty: Difficulty,
    warnings: Vec<String>,
}

impl ValidationReport {
    fn new(file: String, recipe: &Recipe) -> Self {
        let mut warnings = Vec::new();
        if recipe.name().is_null() {
            warnings.push("Recipe has no \"name\"".to_owned());
        }
        Self {
            file,
            valid: true,
            ingredients: recipe.ingredients().len(),
            cooking_time: recipe.cooking_time(),
            difficulty: recipe.difficulty(),
            warnings,
        }
    }
}

/// Run every check there is on a document: it must be a mapping, its cooking
/// time must be a finite number that is not negative, and all of its
/// ingredients must be text.
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let service = RecipeService::new();
    let doc = document::load(&args.file)?;
    let recipe = service.from_document(&doc)?;
    service.validate_ingredients(recipe.ingredients())?;

    let report = ValidationReport::new(args.file.display().to_string(), &recipe);
    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    for warning in &report.warnings {
        output.warning(warning)?;
    }
    output.success(&format!(
        "{} is valid ({} ingredients, {} mins, {})",
        report.file, report.ingredients, report.cooking_time, report.difficulty,
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_warns_about_missing_name() {
        let recipe = Recipe::new(recipebox_core::domain::Value::Null, ["Eggs"], 5.0).unwrap();
        let report = ValidationReport::new("eggs.json".into(), &recipe);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.difficulty, Difficulty::Easy);
    }

    #[test]
    fn named_recipe_has_no_warnings() {
        let recipe = Recipe::new("Toast", ["Bread"], 4.0).unwrap();
        assert!(ValidationReport::new("t.json".into(), &recipe).warnings.is_empty());
    }
}
