//! Command-line interface for cinema-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **crossref**: Cross-reference the script directory against the film list
//! - **list**: List one catalog with each identifier's normalized key
//! - **normalize**: Show the normalized key for ad-hoc titles
//!
//! ## Usage
//!
//! ```text
//! # Run the cross-reference with the default layout
//! # (film-slugs.json + parsed/ in the working directory)
//! cinema-matcher crossref
//!
//! # Point at another archive and report location
//! cinema-matcher crossref --films titles.json --scripts archive/ --output out.json
//!
//! # JSON output for scripting
//! cinema-matcher crossref --format json
//!
//! # Inspect the film catalog as the matcher sees it
//! cinema-matcher list films
//!
//! # Check how a title normalizes
//! cinema-matcher normalize "Inception-2010"
//! ```

use clap::{Parser, Subcommand};

pub mod crossref;
pub mod list;
pub mod normalize;

#[derive(Parser)]
#[command(name = "cinema-matcher")]
#[command(version)]
#[command(about = "Cross-reference parsed film scripts against a film title catalog")]
#[command(
    long_about = "cinema-matcher figures out which parsed script documents correspond to which films.\n\nBoth lists are normalized (year suffix stripped, punctuation removed, lowercased) and matched exactly on the normalized key. The run prints a summary and writes a trimmed JSON report with:\n- Matched script/film pairs\n- Scripts with no film\n- Films with no script"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cross-reference scripts against the film list
    Crossref(crossref::CrossrefArgs),

    /// List a catalog with normalized keys
    List(list::ListArgs),

    /// Normalize one or more titles
    Normalize(normalize::NormalizeArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
