//! Implementation of the `recipebox new` command.
//!
//! Direct construction from flags; the card is printed but nothing is
//! written to disk.

use tracing::{debug, instrument};

use recipebox_core::{application::RecipeService, domain::Value};

use crate::{cli::NewArgs, error::CliResult, output::OutputManager};

/// Ingredients are passed through exactly as given. The cooking time,
/// including `NaN` and infinities, is checked by the core.
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: NewArgs, output: OutputManager) -> CliResult<()> {
    let ingredients = to_values(args.ingredients);
    debug!(count = ingredients.len(), "Ingredients collected");

    let recipe = RecipeService::new().create(&args.name, ingredients, args.time)?;
    output.recipe(&recipe)?;
    Ok(())
}

fn to_values(ingredients: Vec<String>) -> Vec<Value> {
    ingredients.into_iter().map(Value::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingredients_are_kept_verbatim() {
        let values = to_values(vec!["Salt, to taste".into(), " Pepper ".into(), String::new()]);
        assert_eq!(
            values,
            [Value::from("Salt, to taste"), Value::from(" Pepper "), Value::from("")]
        );
    }
}
