//! Implementation of the `recipebox show` command.

use tracing::{info, instrument};

use recipebox_core::application::RecipeService;

use crate::{
    cli::ShowArgs, config::AppConfig, document, error::CliResult, output::OutputManager,
};

/// Load a document, build the recipe through the mapping factory and print
/// its card.
///
/// Ingredient types are only checked when asked for, by `--validate` or by
/// `validation.strict_ingredients` in the config.
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: ShowArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = RecipeService::new();
    let doc = document::load(&args.file)?;
    let recipe = service.from_document(&doc)?;

    if args.validate || config.validation.strict_ingredients {
        service.validate_ingredients(recipe.ingredients())?;
    }

    info!(difficulty = %recipe.difficulty(), format = ?output.format(), "Showing recipe");
    output.recipe(&recipe)?;
    Ok(())
}
