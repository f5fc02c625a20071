//! # Tally Report CLI
//!
//! Generates a point-of-sale summary report from a dataset of items,
//! buyers, and transactions.
//!
//! ## Usage
//! ```bash
//! # Run against the built-in sample dataset
//! cargo run -p tally-report
//!
//! # Run against a JSON dataset file
//! cargo run -p tally-report -- --input shop.json
//!
//! # Compact output
//! cargo run -p tally-report -- --compact
//! ```
//!
//! ## Dataset Format
//! ```json
//! {
//!   "items": [
//!     { "name": "oval hat", "category": "hats",
//!       "prices": [ { "tier": "regular", "price": 20000 } ] }
//!   ],
//!   "buyers": [ { "name": "Ani", "tier": "regular" } ],
//!   "transactions": [
//!     { "itemName": "oval hat", "quantity": 1, "buyerName": "Ani" }
//!   ]
//! }
//! ```
//!
//! The summary is printed to stdout wrapped in a `Summary` key; logs go
//! to stderr. A dataset that fails validation exits with code 1 and the
//! validator's diagnostic.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tally_core::{summarize, Buyer, Item, Transaction};

mod sample;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Tally Report - point-of-sale summary generator
#[derive(Parser, Debug)]
#[command(name = "tally-report")]
#[command(about = "Aggregates a transaction log into a POS summary report", long_about = None)]
struct Args {
    /// Path to a JSON dataset file; the built-in sample dataset is used
    /// when omitted
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

// =============================================================================
// Dataset
// =============================================================================

/// The three input collections the pipeline consumes.
#[derive(Debug, Deserialize)]
pub struct Dataset {
    pub items: Vec<Item>,
    pub buyers: Vec<Buyer>,
    pub transactions: Vec<Transaction>,
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    init_tracing();

    let args = Args::parse();

    if let Err(err) = run(&args) {
        error!("{err:#}");
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let dataset = match &args.input {
        Some(path) => load_dataset(path)?,
        None => sample::dataset(),
    };

    info!(
        items = dataset.items.len(),
        buyers = dataset.buyers.len(),
        transactions = dataset.transactions.len(),
        "dataset loaded"
    );

    let summary = summarize(&dataset.items, &dataset.buyers, &dataset.transactions)
        .context("validation failed, summary cannot be generated")?;

    let report = serde_json::json!({ "Summary": summary });
    let rendered = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{rendered}");

    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

/// Reads and deserializes a JSON dataset file.
fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let file = File::open(path)
        .with_context(|| format!("cannot open dataset file '{}'", path.display()))?;
    let dataset = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot parse dataset file '{}'", path.display()))?;
    Ok(dataset)
}

/// Initializes tracing to stderr.
///
/// Default filter: INFO everywhere, DEBUG for the tally crates (shows
/// skipped transactions). Override with RUST_LOG.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally_core=debug,tally_report=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
