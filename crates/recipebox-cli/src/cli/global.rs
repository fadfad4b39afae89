//! Flags shared by every `recipebox` subcommand.
//!
//! Flattened into [`super::Cli`]; `global = true` lets them appear before or
//! after the subcommand name (`recipebox -v show cake.json` and
//! `recipebox show cake.json -v` are the same).

use std::path::PathBuf;

use clap::Args;

/// Logging, colour, config and output-shape flags.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more to stderr; repeat for more detail.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more to stderr (-v info, -vv debug, -vvv trace)",
        long_help = "Log more to stderr. Recipe cards on stdout are unaffected.
    -v      info: which recipe was shown and its difficulty
    -vv     debug: document size, format and factory decisions
    -vvv    trace: everything
Set RUST_LOG to override the filter entirely."
    )]
    pub verbose: u8,

    /// Print only the result (card or JSON) and errors.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only recipe cards, JSON and errors"
    )]
    pub quiet: bool,

    /// Plain output with no ANSI styling. Any `NO_COLOR` value other than a
    /// false-ish one (`0`, `false`, `off`) turns this on.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Never style output with colours"
    )]
    pub no_color: bool,

    /// TOML config file to use instead of the per-user default.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Use this config file (must exist)"
    )]
    pub config: Option<PathBuf>,

    /// Shape of stdout. Overrides `output.format` from the config file.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How recipes are written to stdout"
    )]
    pub output_format: OutputFormat,
}

/// How recipes and reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Recipe cards with coloured status lines.
    Human,
    /// Recipe cards, no styling.
    Plain,
    /// A single JSON document per invocation.
    Json,
}
