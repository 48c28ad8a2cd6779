//! `gendiff` CLI — show the structural difference between two config files.
//!
//! ## Usage
//!
//! ```sh
//! # Nested diff with +/- markers (default)
//! gendiff file1.json file2.json
//!
//! # One sentence per change
//! gendiff --format plain file1.yml file2.yml
//!
//! # Machine-readable change log
//! gendiff -f json file1.json file2.yaml
//!
//! # Log what is being compared to stderr
//! gendiff -vv file1.json file2.json
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use gendiff_core::Format;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gendiff",
    version,
    about = "Compares two configuration files and shows a difference."
)]
struct Cli {
    /// The two files to compare (.json, .yaml or .yml)
    files: Vec<String>,

    /// Output format: stylish, plain or json (unknown names fall back to stylish)
    #[arg(short, long, default_value = "stylish")]
    format: String,

    /// Log progress to stderr (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let [old, new] = match <[String; 2]>::try_from(cli.files) {
        Ok(files) => files,
        Err(_) => {
            eprintln!("Error: Expected 2 file paths");
            eprintln!("{}", Cli::command().render_usage());
            process::exit(1);
        }
    };

    init_tracing(cli.verbose);

    let format = Format::from_name(&cli.format);
    if format.as_str() != cli.format {
        debug!(requested = %cli.format, "unknown format, using stylish");
    }

    match run(&old, &new, format) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            println!("Error: {:#}", err);
            process::exit(1);
        }
    }
}

fn run(old: &str, new: &str, format: Format) -> Result<String> {
    gendiff_core::gen_diff(old, new, format)
        .with_context(|| format!("Failed to compare {} with {}", old, new))
}

/// Install a stderr fmt subscriber so stdout carries only the diff.
/// `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}
