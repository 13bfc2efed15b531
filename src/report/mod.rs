//! Report artifact written after each cross-reference run.
//!
//! The snapshot is a trimmed view of a
//! [`CrossrefReport`](crate::matching::engine::CrossrefReport): the full
//! summary statistics, but at most ten entries per example list.

pub mod snapshot;

pub use snapshot::{write_snapshot, ReportSnapshot, DEFAULT_REPORT_PATH};
