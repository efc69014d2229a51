//! Quote Inspector: reads a JSON quote document from disk, decodes it with the
//! strict schema, and logs a one-line summary for every quote along with any
//! cross-field inconsistencies. Unknown instrument types or market states stop
//! the run with an error instead of being skipped.
//!
//! Usage example (CLI):
//! ```bash
//! quote_inspect --path ./quotes.json --only equity --snapshot ./quotes.bin
//! ```
//!
//! Set `RUST_LOG=debug` to see per-quote decode messages from `quote_schema`.
#![warn(missing_docs)]
mod args;
mod report;

use crate::args::Args;
use clap::Parser;
use log::{error, info, warn};
use quote_schema::{Quote, Result, SchemaError, decode_quotes, encode_snapshots};
use std::fs;
use env_logger::Env;
use std::path::PathBuf;

fn main() -> Result<(), SchemaError> {
    init_logger();
    let args = Args::parse();

    let file_path = match input_document(&args.path) {
        Ok(path) => path,
        Err(e) => {
            error!("{e}");
            return Err(e);
        }
    };

    let bytes = fs::read(&file_path)?;
    let quotes = match decode_quotes(&bytes) {
        Ok(quotes) => quotes,
        Err(e) => {
            error!("Failed to decode {}: {}", file_path.display(), e);
            return Err(e);
        }
    };
    info!("Decoded {} quotes from {}", quotes.len(), file_path.display());

    let selected: Vec<Quote> = quotes
        .into_iter()
        .filter(|q| args.only.is_none_or(|only| q.instrument_type() == only))
        .collect();
    if let Some(only) = args.only {
        info!("{} quotes of type {}", selected.len(), only);
    }

    let violations = inspect(&selected);

    if let Some(snapshot) = &args.snapshot {
        let snapshot_path = unquote_path(snapshot);
        let data = encode_snapshots(&selected)?;
        fs::write(&snapshot_path, &data)?;
        info!(
            "Snapshot of {} quotes written to {} ({} bytes)",
            selected.len(),
            snapshot_path.display(),
            data.len()
        );
    }

    if args.strict_ranges && violations > 0 {
        return Err(SchemaError::Format(format!(
            "{violations} quotes have inverted price ranges"
        )));
    }
    Ok(())
}

/// Logs every quote and its inconsistencies; returns how many quotes have a
/// range violation.
fn inspect(quotes: &[Quote]) -> usize {
    let mut violations = 0;
    for quote in quotes {
        info!("QUOTE: {}", report::summary_line(quote));
        let found = quote.inconsistencies();
        for issue in &found {
            warn!("{}: {}", quote.symbol(), issue);
        }
        if found.iter().any(|issue| issue.is_range_violation()) {
            violations += 1;
        }
    }
    violations
}

/// `info` unless `RUST_LOG` says otherwise.
fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Path argument with surrounding blanks and one pair of matching quotes
/// removed, as left behind when a script quotes the value twice.
fn unquote_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let inner = ['"', '\'']
        .iter()
        .find_map(|&q| trimmed.strip_prefix(q).and_then(|s| s.strip_suffix(q)))
        .unwrap_or(trimmed);
    PathBuf::from(inner)
}

/// Resolves the `--path` argument to an existing regular file.
fn input_document(raw: &str) -> Result<PathBuf> {
    let path = unquote_path(raw);
    if !path.is_file() {
        return Err(SchemaError::Format(format!(
            "quote document not found: {}",
            path.display()
        )));
    }
    Ok(path)
}
