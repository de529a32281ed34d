//! Command-line interface for Sommelier wine pairings.
//!
//! `sommelier recommend` ranks a wine list for a steak order and prints the
//! result as JSON; `sommelier catalog` prints the house list in the same
//! format a `--catalog` file expects.
//!
//! Options for `recommend` can also come from configuration files or from
//! `SOMMELIER_CMDS_RECOMMEND_*` environment variables; command-line flags
//! take precedence. Diagnostics go to stderr, filtered by `SOMMELIER_LOG`.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod catalog;
mod error;
mod fs;
mod logging;
mod recommend;

pub use error::CliError;
pub use logging::{LOG_ENV, init_logging};

use catalog::run_catalog_with;
use recommend::{RecommendArgs, run_recommend_with};

const ARG_CUT: &str = "cut";
const ARG_DONENESS: &str = "doneness";
const ARG_ADD_ONS: &str = "add-ons";
const ARG_TANNIN_TOLERANCE: &str = "tannin-tolerance";
const ARG_OAK_TOLERANCE: &str = "oak-tolerance";
const ARG_SPICE_TOLERANCE: &str = "spice-tolerance";
const ARG_FUNK_TOLERANCE: &str = "funk-tolerance";
const ARG_BUDGET_MIN: &str = "budget-min";
const ARG_BUDGET_MAX: &str = "budget-max";
const ARG_CATALOG: &str = "catalog";

/// Run the Sommelier CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or inputs are invalid,
/// or when writing to stdout fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Recommend(args) => run_recommend_with(args, &mut stdout),
        Command::Catalog => run_catalog_with(&mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sommelier",
    about = "Wine pairing recommendations for steak orders",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend wines for a steak order.
    Recommend(RecommendArgs),
    /// Print the house wine list as JSON.
    Catalog,
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
