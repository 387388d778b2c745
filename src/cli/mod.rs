mod report;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::CaseLoader;

pub use report::{EXIT_ERROR, EXIT_MATCH, EXIT_NO_MATCH, Report};

#[derive(Parser)]
#[command(name = "docmatch")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum Commands {
    /// Match a case file and print the outcome as JSON
    Run(RunArgs),
    /// Match a case file and report the result through the exit status only
    Check(CheckArgs),
}

#[derive(clap::Args)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct RunArgs {
    /// Case file path, or "-" to read standard input
    pub case: PathBuf,

    /// Treat leftover tokens after a successful match as success
    #[arg(long)]
    pub allow_extra: bool,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

#[derive(clap::Args)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct CheckArgs {
    /// Case file path, or "-" to read standard input
    pub case: PathBuf,

    /// Treat leftover tokens after a successful match as success
    #[arg(long)]
    pub allow_extra: bool,
}

/// Run one subcommand, writing any report to `out`. Returns the exit code.
pub fn execute(
    command: &Commands,
    loader: &dyn CaseLoader,
    out: &mut dyn Write,
) -> Result<u8, anyhow::Error> {
    match command {
        Commands::Run(args) => {
            let case = loader.load(&args.case)?;
            let report = Report::from_case(&case);
            writeln!(out, "{}", report.to_json(args.compact)?)?;
            Ok(report.exit_code(args.allow_extra))
        }
        Commands::Check(args) => {
            let case = loader.load(&args.case)?;
            Ok(Report::from_case(&case).exit_code(args.allow_extra))
        }
    }
}
