//! # cinema-matcher
//!
//! A library for cross-referencing parsed film scripts against a film title
//! catalog.
//!
//! Script archives accumulate faster than anyone curates them: the scraper
//! writes one parsed document per screenplay, the film list comes from a
//! different source, and nothing guarantees the two agree on naming. A title
//! might appear as "Inception-2010" on one side and "inception" on the other.
//!
//! `cinema-matcher` solves this by normalizing both lists to a shared key
//! (year suffix stripped, punctuation removed, lowercased) and computing the
//! exact-match intersection, reporting matched pairs, orphaned scripts, and
//! films with no script.
//!
//! ## Example
//!
//! ```rust
//! use cinema_matcher::{CrossrefEngine, TitleIndex};
//!
//! let films = TitleIndex::from_identifiers(vec!["Matrix-1999".to_string()]);
//! let scripts = TitleIndex::from_identifiers(vec!["matrix".to_string()]);
//!
//! let report = CrossrefEngine::new(&films, &scripts).run();
//! assert_eq!(report.matches.len(), 1);
//! assert_eq!(report.matches[0].film, "Matrix-1999");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Identifier normalization and shared data types
//! - [`catalog`]: Film list and script directory loaders, plus the
//!   normalized-key index
//! - [`matching`]: Cross-reference engine and summary statistics
//! - [`report`]: JSON snapshot artifact written after each run
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod report;

// Re-export commonly used types for convenience
pub use catalog::index::TitleIndex;
pub use catalog::CatalogError;
pub use core::normalize::normalize_key;
pub use core::types::{MatchRecord, MatchSummary};
pub use matching::engine::{CrossrefEngine, CrossrefReport};
pub use report::snapshot::ReportSnapshot;
