//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No recipe logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "recipebox",
    bin_name = "recipebox",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f37d} Recipe cards with cooking-time difficulty",
    long_about = "Recipebox reads a recipe document (JSON or TOML), checks its \
                  cooking time, classifies its difficulty and prints a recipe card.",
    after_help = "EXAMPLES:\n\
        \x20 recipebox show cake.json\n\
        \x20 recipebox show cake.toml --validate\n\
        \x20 recipebox new --name \"Boiled Eggs\" -i Eggs -i Water -i Pot --time 12\n\
        \x20 recipebox completions bash > /usr/share/bash-completion/completions/recipebox",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the recipe card for a recipe document.
    #[command(
        visible_alias = "s",
        about = "Show a recipe document as a recipe card",
        after_help = "EXAMPLES:\n\
            \x20 recipebox show cake.json\n\
            \x20 cat cake.json | recipebox show -\n\
            \x20 recipebox show cake.json --output-format json"
    )]
    Show(ShowArgs),

    /// Build a recipe from flags and print its card.
    #[command(
        visible_alias = "n",
        about = "Create a recipe from the command line",
        after_help = "EXAMPLES:\n\
            \x20 recipebox new --name Toast -i Bread -i Butter --time 4\n\
            \x20 recipebox new --name Soup -i \"Salt, to taste\" -i Leek --time 90"
    )]
    New(NewArgs),

    /// Check a recipe document, including ingredient types.
    #[command(
        about = "Validate a recipe document",
        after_help = "EXAMPLES:\n\
            \x20 recipebox validate cake.json"
    )]
    Validate(ValidateArgs),

    /// Print the built-in sample recipes.
    #[command(about = "Show the sample recipes")]
    Demo,

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 recipebox init\n\
            \x20 recipebox init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 recipebox completions bash > ~/.local/share/bash-completion/completions/recipebox\n\
            \x20 recipebox completions zsh  > ~/.zfunc/_recipebox"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Recipebox configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 recipebox config get validation.strict_ingredients\n\
            \x20 recipebox config list"
    )]
    Config(ConfigCommands),
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `recipebox show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Recipe document.  `.toml` files are read as TOML, everything else as
    /// JSON.  `-` reads JSON from stdin.
    #[arg(value_name = "FILE", help = "Recipe document (JSON or TOML, - for stdin)")]
    pub file: PathBuf,

    /// Require every ingredient to be text before printing.
    #[arg(long = "validate", help = "Check that all ingredients are text")]
    pub validate: bool,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `recipebox new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Recipe name.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Recipe name")]
    pub name: String,

    /// Ingredients, in order.  Repeat the flag once per ingredient; each
    /// value is kept exactly as typed, commas and spaces included.
    #[arg(
        short = 'i',
        long = "ingredient",
        visible_alias = "ingredients",
        value_name = "INGREDIENT",
        help = "Ingredient, kept verbatim (repeat for more)"
    )]
    pub ingredients: Vec<String>,

    /// Cooking time in minutes.
    #[arg(
        short = 't',
        long = "time",
        value_name = "MINUTES",
        default_value_t = 0.0,
        allow_negative_numbers = true,
        help = "Cooking time in minutes"
    )]
    pub time: f64,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `recipebox validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Recipe document to check.
    #[arg(value_name = "FILE", help = "Recipe document (JSON or TOML, - for stdin)")]
    pub file: PathBuf,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `recipebox init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `recipebox completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `recipebox config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
