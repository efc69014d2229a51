//! Command-line arguments for the quote inspector.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use quote_schema::InstrumentType;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a JSON file holding one quote object or an array of quotes.
    #[clap(long)]
    pub path: String,

    /// Only report quotes of this instrument type.
    #[clap(long, value_enum)]
    pub only: Option<InstrumentType>,

    /// Write the reported quotes to this file as a binary snapshot.
    #[clap(long)]
    pub snapshot: Option<String>,

    /// Exit with an error when any quote has an inverted price range.
    #[clap(long)]
    pub strict_ranges: bool,
}
