//! # txtsearch CLI
//!
//! Command-line interface for the txtsearch tool.
//!
//! ## Example Usage
//!
//! ```bash
//! # List files in ./notes containing "todo" or "fixme" (any case)
//! txtsearch -i notes todo fixme
//!
//! # Case-sensitive, copying the matches into ./hits
//! txtsearch -i notes -o hits --cs TODO
//! ```
//!
//! Exit status is 0 on success and 1 on any usage, search, or copy error.

mod commands;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// txtsearch - Search a directory of text files for words
#[derive(Parser, Debug)]
#[command(name = "txtsearch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Words to search for; a file matches if any line contains any word
    #[arg(required = true, value_name = "WORDS")]
    words: Vec<String>,

    /// Directory containing the text files to search
    #[arg(short, long, value_name = "DIR")]
    input: PathBuf,

    /// Directory to copy matched files into (must not already exist)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Case-sensitive matching (default is case-insensitive)
    #[arg(short = 'c', long = "cs")]
    case_sensitive: bool,

    /// Case-insensitive matching, even if the config file enables --cs
    #[arg(long, conflicts_with = "case_sensitive")]
    ignore_case: bool,

    /// Copy into the output directory even if it already exists
    #[arg(long)]
    reuse_output: bool,

    /// Path to configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Command-line flags win over the config file.
    fn resolve_case_sensitive(&self, config: &txtsearch_core::Config) -> bool {
        if self.ignore_case {
            false
        } else {
            self.case_sensitive || config.search.case_sensitive
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too and are not failures.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    let config = match &cli.config {
        Some(path) => txtsearch_core::Config::load_from(path),
        None => txtsearch_core::Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            init_logging(&cli, "warn");
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&cli, &config.general.log_level);

    let case_sensitive = cli.resolve_case_sensitive(&config);
    let args = commands::search::SearchArgs {
        words: cli.words,
        input: cli.input,
        output: cli.output,
        case_sensitive,
        output_policy: if cli.reuse_output {
            txtsearch_core::OutputDirPolicy::ReuseExisting
        } else {
            config.output_policy()
        },
    };

    match commands::search::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the tracing subscriber. Logs go to stderr so stdout carries only
/// the search output.
fn init_logging(cli: &Cli, default_level: &str) {
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => default_level,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .init();
}
