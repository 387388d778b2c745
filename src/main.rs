use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use docmatch::cli::{self, Cli, EXIT_ERROR};
use docmatch::config::FileCaseLoader;

fn main() -> ExitCode {
    init_tracing();
    let args = Cli::parse();

    let loader = FileCaseLoader::new();
    match cli::execute(&args.command, &loader, &mut std::io::stdout()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("docmatch: {e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Log to stderr, filtered by `DOCMATCH_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("DOCMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
