use serde::{Deserialize, Serialize};

/// A script and a film that share a normalized key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Original script identifier (filename stem)
    pub script: String,

    /// Original film identifier from the catalog
    pub film: String,

    /// The shared normalized key
    pub normalized: String,
}

/// Aggregate statistics for one cross-reference run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Raw film identifiers loaded (before normalization merges duplicates)
    pub total_films: usize,

    /// Raw script identifiers loaded
    pub total_scripts: usize,

    /// Matched normalized keys
    pub matches_found: usize,

    /// `matches_found / total_scripts * 100`, 0 when there are no scripts
    pub match_percentage: f64,

    /// Film identifiers displaced by a later film with the same key
    pub film_collisions: usize,

    /// Script identifiers displaced by a later script with the same key
    pub script_collisions: usize,
}

impl MatchSummary {
    /// Percentage of scripts that found a film, safe against empty input.
    #[must_use]
    pub fn percentage(matches_found: usize, total_scripts: usize) -> f64 {
        if total_scripts == 0 {
            return 0.0;
        }
        count_to_f64(matches_found) / count_to_f64(total_scripts) * 100.0
    }
}

/// Helper function to convert usize count to f64 with explicit precision loss allowance
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}
