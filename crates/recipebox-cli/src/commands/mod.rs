//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core calls and hand the results
//! to the [`crate::output::OutputManager`]. No recipe rules live here.

pub mod completions;
pub mod config;
pub mod demo;
pub mod init;
pub mod new;
pub mod show;
pub mod validate;
