//! Command line front end.
//!
//! ## Commands
//!
//! - `sort [VALUES]... [--input PATH] [--output PATH]` - sort values from the command line, a
//!   file, or standard input
//! - `random --len N --min A --max B [--output PATH]` - sort a list of `N` random values in
//!   `[A, B]`
//!
//! Both print the original and the sorted list, check the result with
//! [`is_sorted`](crate::validation::is_sorted) and optionally save the report with
//! [`write_report`](crate::text_list::write_report).
//!
//! Command functions return [`Result`] instead of exiting, only [`main_with`] turns an error into
//! an [`ExitCode`].

use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::error::{Error, Result};
use crate::{patterns, quicksort, text_list, validation};

/// Sort integer lists with an in-place Hoare partition quicksort
#[derive(Parser, Debug)]
#[command(name = "hoare-sort", version, long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace), RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sort values given as arguments, read from a file, or read from standard input
    Sort {
        /// Values to sort
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i32>,

        /// Whitespace separated list of integers to sort
        #[arg(short, long, value_name = "PATH", conflicts_with = "values")]
        input: Option<PathBuf>,

        /// Save the original and the sorted list to this file
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Sort a randomly generated list
    Random {
        /// Number of values
        #[arg(short = 'n', long)]
        len: usize,

        /// Smallest possible value (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        min: i32,

        /// Largest possible value (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        max: i32,

        /// Save the original and the sorted list to this file
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

/// Exit code for CLI runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub u8);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// An input list and its sorted copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport {
    pub original: Vec<i32>,
    pub sorted: Vec<i32>,
}

impl SortReport {
    /// Sorts a copy of `original`.
    pub fn new(original: Vec<i32>) -> Self {
        let mut sorted = original.clone();
        quicksort::sort(&mut sorted);

        Self { original, sorted }
    }
}

/// Runs `cli` and maps the outcome to an exit code. Errors are written to `err` as
/// `error: <message>`.
pub fn main_with(
    cli: Cli,
    input: impl Read,
    out: &mut impl Write,
    err: &mut impl Write,
) -> ExitCode {
    match run_with_input(cli, input, out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            // Nothing sensible is left to do if stderr is gone.
            let _ = writeln!(err, "error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Runs `cli`, printing results to `out`. `input` stands in for standard input when the list
/// comes from neither the arguments nor a file.
pub fn run_with_input(cli: Cli, input: impl Read, out: &mut impl Write) -> Result<SortReport> {
    let (original, output) = match cli.command {
        Command::Sort {
            values,
            input: path,
            output,
        } => (load(values, path, input)?, output),
        Command::Random {
            len,
            min,
            max,
            output,
        } => (generate(len, min, max)?.1, output),
    };

    let report = SortReport::new(original);
    tracing::info!(len = report.sorted.len(), "sorted");

    finish(report, output, out)
}

/// Prints and saves `report`, then checks the sorted list.
///
/// An unsorted result is still shown and saved, the run fails afterwards.
fn finish(report: SortReport, output: Option<PathBuf>, out: &mut impl Write) -> Result<SortReport> {
    let sorted = validation::is_sorted(&report.sorted);

    print_report(&report, sorted, out).map_err(Error::Stdout)?;

    if let Some(path) = output {
        text_list::write_report(&path, &report.original, &report.sorted)?;
        tracing::info!(path = %path.display(), "saved report");
    }

    if !sorted {
        tracing::error!(len = report.sorted.len(), "sort produced unsorted output");
        return Err(Error::NotSorted {
            len: report.sorted.len(),
        });
    }

    Ok(report)
}

fn load(values: Vec<i32>, path: Option<PathBuf>, mut input: impl Read) -> Result<Vec<i32>> {
    if !values.is_empty() {
        tracing::debug!(len = values.len(), "using values from arguments");
        return Ok(values);
    }

    match path {
        Some(path) => text_list::read_list(&path),
        None => {
            tracing::debug!("reading values from standard input");
            let mut text = String::new();
            input.read_to_string(&mut text).map_err(Error::Stdin)?;

            text_list::parse_list(&text)
        }
    }
}

/// Returns the seed together with the list, the seed alone regenerates it.
fn generate(len: usize, min: i32, max: i32) -> Result<(u64, Vec<i32>)> {
    if min > max {
        return Err(Error::InvalidRange { min, max });
    }

    // Every invocation should see new values, unless OVERRIDE_SEED pins them.
    patterns::use_random_seed_each_time();
    let seed = patterns::random_init_seed();
    tracing::debug!(len, min, max, seed, "generating random values");

    Ok((seed, patterns::random_uniform_with_seed(len, min..=max, seed)))
}

fn print_report(report: &SortReport, sorted: bool, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Original: {}", text_list::format_list(&report.original))?;
    writeln!(out, "Sorted:   {}", text_list::format_list(&report.sorted))?;
    if !sorted {
        writeln!(out, "WARNING: the list is not sorted correctly!")?;
    }
    out.flush()
}
