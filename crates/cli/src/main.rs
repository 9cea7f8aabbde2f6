//! # anyplace-cli: A CLI for `anyplace`
//!
//! Reads files each holding one raw nested-array place document (as captured
//! off the wire by an external fetcher) and renders the extracted listings as
//! JSON or CSV on stdout. All extraction logic lives in the `anyplace`
//! library; this binary is only the formatting and I/O collaborator.

use anyhow::{Context, Result};
use anyplace::{listing_from_json, Listing};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files each holding one raw listing document
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Keep listings that fail validation instead of skipping them
    #[arg(long)]
    keep_invalid: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Json,
    Csv,
}

// --- Main Application Entry ---

fn main() -> Result<()> {
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let mut listings = Vec::new();
    for path in &cli.inputs {
        let raw =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

        let listing = match listing_from_json(&raw) {
            Ok(listing) => listing,
            Err(e) => {
                // A bad document only costs itself, never the batch.
                warn!(input = %path.display(), "skipping document: {e}");
                continue;
            }
        };

        if let Err(e) = listing.validate() {
            if !cli.keep_invalid {
                warn!(input = %path.display(), "skipping unusable listing: {e}");
                continue;
            }
        }

        listings.push(listing);
    }

    info!(count = listings.len(), "extracted listings");

    match cli.format {
        Format::Json => write_json(&listings, cli.pretty),
        Format::Csv => write_csv(&listings),
    }
}

// --- Output Writers ---

fn write_json(listings: &[Listing], pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(listings)?
    } else {
        serde_json::to_string(listings)?
    };
    println!("{rendered}");
    Ok(())
}

fn write_csv(listings: &[Listing]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(Listing::field_labels())?;
    for listing in listings {
        writer.write_record(listing.field_values())?;
    }
    writer.flush().context("failed to flush CSV output")?;
    Ok(())
}
