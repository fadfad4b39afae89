//! Implementation of the `recipebox demo` command.
//!
//! Boiled Eggs is built directly, Cake goes through the mapping factory, so
//! both construction paths show up in the output.

use tracing::instrument;

use recipebox_core::{
    application::RecipeService,
    domain::{COOKING_TIME_KEY, INGREDIENTS_KEY, Mapping, NAME_KEY, Recipe, Value},
};

use crate::{error::CliResult, output::OutputManager};

/// In JSON mode both recipes go out as one array and the summary lines are
/// left out.
#[instrument(skip_all)]
pub fn execute(output: OutputManager) -> CliResult<()> {
    let service = RecipeService::new();
    let (eggs, cake) = samples(&service)?;

    if output.is_json() {
        output.json(&[&eggs, &cake])?;
        return Ok(());
    }

    output.recipe(&eggs)?;
    output.print(&format!("Cooking Time: {} minutes", eggs.cooking_time()))?;
    output.print(&format!("Difficulty Level: {}", eggs.difficulty()))?;
    output.print("")?;
    output.recipe(&cake)?;
    Ok(())
}

fn samples(service: &RecipeService) -> CliResult<(Recipe, Recipe)> {
    let eggs = service.create(
        "Boiled Eggs",
        ["Eggs", "Water", "Pot"].map(Value::from).to_vec(),
        12.0,
    )?;
    let cake = service.from_mapping(&cake_mapping())?;
    Ok((eggs, cake))
}

fn cake_mapping() -> Mapping {
    Mapping::from([
        (NAME_KEY.to_owned(), Value::from("Cake")),
        (
            INGREDIENTS_KEY.to_owned(),
            Value::List(["Flour", "Sugar", "Eggs", "Butter"].map(Value::from).to_vec()),
        ),
        (COOKING_TIME_KEY.to_owned(), Value::from(75)),
    ])
}
