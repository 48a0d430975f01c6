//! Command-line interface for replaying recorded predictions through the
//! recommendation engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_PREDICTION: &str = "prediction";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_TOP_K: &str = "top-k";
pub(crate) const ENV_PREDICTION: &str = "AGRIDASH_CMDS_RECOMMEND_PREDICTION_PATH";

/// Run the AgriDash CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging, input
/// loading, or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "agridash",
    about = "Crop recommendation tooling for the AgriDash engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a recorded prediction and print the enriched recommendation.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
