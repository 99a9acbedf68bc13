//! hoare-sort CLI entry point

use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hoare_sort::cli::{self, Cli};

fn main() -> process::ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr, stdout only carries the lists.
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .try_init();

    let code = cli::main_with(
        cli,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    process::ExitCode::from(code.0)
}
