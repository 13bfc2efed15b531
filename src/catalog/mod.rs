//! Catalog loading and indexing.
//!
//! Two independent sources feed a cross-reference run:
//!
//! - the **film list**, a JSON array of title strings (see [`films`]);
//! - the **script directory**, scanned non-recursively for parsed script
//!   documents whose filename stems become identifiers (see [`scripts`]).
//!
//! Each list is folded into a [`TitleIndex`](index::TitleIndex) keyed by
//! normalized title, which is what the matching engine consumes.

use thiserror::Error;

pub mod films;
pub mod index;
pub mod scripts;

pub use films::load_films;
pub use index::TitleIndex;
pub use scripts::load_scripts;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse film list (expected a JSON array of strings): {0}")]
    Parse(#[from] serde_json::Error),
}
