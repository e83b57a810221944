//! wirelog — convert AT&T wireless CSV billing exports to one JSON document.
//!
//! `wirelog convert <log1> [log2 ... logN]` parses each file, merges the
//! results in argument order, and prints a single JSON object to stdout.
//! Diagnostics go to stderr; stdout carries nothing but the document.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;
use wirelog_core::{aggregate, export, parser, Config, OnError, RecordSet};

#[derive(Parser)]
#[command(name = "wirelog", about = "AT&T wireless billing log converter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse billing logs and print the merged JSON document to stdout.
    Convert {
        /// CSV export files, merged in argument order.
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Pretty-print the JSON document.
        #[arg(long)]
        pretty: bool,
        /// Skip files that fail to parse instead of aborting the run.
        #[arg(long)]
        skip_bad_files: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load().unwrap_or_else(|err| {
        warn!(%err, "config load failed, using defaults");
        Config::defaults()
    });

    match cli.command {
        Command::Convert {
            files,
            pretty,
            skip_bad_files,
        } => {
            let pretty = pretty || config.convert.pretty;
            let on_error = if skip_bad_files {
                OnError::Skip
            } else {
                config.convert.on_error
            };
            convert(&files, pretty, on_error)
        }
    }
}

fn convert(files: &[PathBuf], pretty: bool, on_error: OnError) -> anyhow::Result<()> {
    let mut merged = RecordSet::new();

    for path in files {
        match parser::parse_path(path) {
            Ok(set) => merged = aggregate::merge(&merged, &set),
            Err(err) => match on_error {
                OnError::Abort => {
                    return Err(err).with_context(|| format!("parsing {}", path.display()))
                }
                OnError::Skip => {
                    warn!(file = %path.display(), %err, "skipping unparseable log")
                }
            },
        }
    }

    let document = if pretty {
        export::to_json_pretty(&merged)?
    } else {
        export::to_json(&merged)?
    };
    println!("{document}");
    Ok(())
}
