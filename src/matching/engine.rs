use tracing::debug;

use crate::catalog::TitleIndex;
use crate::core::{MatchRecord, MatchSummary};

/// Result of cross-referencing the script index against the film index
#[derive(Debug, Clone)]
pub struct CrossrefReport {
    /// Script/film pairs sharing a normalized key, in script key order
    pub matches: Vec<MatchRecord>,

    /// Original script identifiers with no film, in script key order
    pub unmatched_scripts: Vec<String>,

    /// Original film identifiers with no script, in film key order
    pub unmatched_films: Vec<String>,

    /// Aggregate statistics
    pub summary: MatchSummary,
}

/// The cross-reference engine
pub struct CrossrefEngine<'a> {
    films: &'a TitleIndex,
    scripts: &'a TitleIndex,
}

impl<'a> CrossrefEngine<'a> {
    /// Create an engine over a film index and a script index
    #[must_use]
    pub fn new(films: &'a TitleIndex, scripts: &'a TitleIndex) -> Self {
        Self { films, scripts }
    }

    /// Classify every identifier on both sides.
    ///
    /// Each distinct script key lands in exactly one of `matches` or
    /// `unmatched_scripts`; each distinct film key is either matched or in
    /// `unmatched_films`.
    #[must_use]
    pub fn run(&self) -> CrossrefReport {
        let mut matches = Vec::new();
        let mut unmatched_scripts = Vec::new();
        let mut unmatched_films = Vec::new();

        for (key, script) in self.scripts.iter() {
            if let Some(film) = self.films.get(key) {
                matches.push(MatchRecord {
                    script: script.to_string(),
                    film: film.to_string(),
                    normalized: key.to_string(),
                });
            } else {
                unmatched_scripts.push(script.to_string());
            }
        }

        for (key, film) in self.films.iter() {
            if !self.scripts.contains(key) {
                unmatched_films.push(film.to_string());
            }
        }

        debug!(
            "cross-reference: {} matches, {} orphan scripts, {} films without scripts",
            matches.len(),
            unmatched_scripts.len(),
            unmatched_films.len()
        );

        let summary = MatchSummary {
            total_films: self.films.raw_count(),
            total_scripts: self.scripts.raw_count(),
            matches_found: matches.len(),
            match_percentage: MatchSummary::percentage(matches.len(), self.scripts.raw_count()),
            film_collisions: self.films.collisions(),
            script_collisions: self.scripts.collisions(),
        };

        CrossrefReport {
            matches,
            unmatched_scripts,
            unmatched_films,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(items: &[&str]) -> TitleIndex {
        TitleIndex::from_identifiers(items.iter().map(ToString::to_string))
    }

    #[test]
    fn test_single_match() {
        let films = index_of(&["Matrix-1999"]);
        let scripts = index_of(&["matrix"]);

        let report = CrossrefEngine::new(&films, &scripts).run();

        assert_eq!(
            report.matches,
            vec![MatchRecord {
                script: "matrix".to_string(),
                film: "Matrix-1999".to_string(),
                normalized: "matrix".to_string(),
            }]
        );
        assert!(report.unmatched_scripts.is_empty());
        assert!(report.unmatched_films.is_empty());
        assert!((report.summary.match_percentage - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_fully_disjoint() {
        let films = index_of(&["Matrix-1999"]);
        let scripts = index_of(&["inception"]);

        let report = CrossrefEngine::new(&films, &scripts).run();

        assert!(report.matches.is_empty());
        assert_eq!(report.unmatched_scripts, vec!["inception"]);
        assert_eq!(report.unmatched_films, vec!["Matrix-1999"]);
        assert!((report.summary.match_percentage - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_scripts_no_division_error() {
        let films = index_of(&["Matrix-1999"]);
        let scripts = TitleIndex::new();

        let report = CrossrefEngine::new(&films, &scripts).run();

        assert_eq!(report.summary.matches_found, 0);
        assert!((report.summary.match_percentage - 0.0).abs() < f64::EPSILON);
        assert_eq!(report.unmatched_films, vec!["Matrix-1999"]);
    }

    #[test]
    fn test_every_script_key_classified_once() {
        let films = index_of(&["Matrix-1999", "Alien-1979"]);
        let scripts = index_of(&["matrix", "inception", "zodiac", "alien"]);

        let report = CrossrefEngine::new(&films, &scripts).run();

        assert_eq!(
            report.matches.len() + report.unmatched_scripts.len(),
            scripts.len()
        );
        assert_eq!(report.matches.len(), 2);
        assert_eq!(report.unmatched_scripts, vec!["inception", "zodiac"]);
    }

    #[test]
    fn test_mixed_results_ordering() {
        let films = index_of(&["Zodiac-2007", "Matrix-1999", "Alien-1979"]);
        let scripts = index_of(&["matrix", "se7en"]);

        let report = CrossrefEngine::new(&films, &scripts).run();

        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].film, "Matrix-1999");
        assert_eq!(report.unmatched_scripts, vec!["se7en"]);
        // Film side keeps film-list order
        assert_eq!(report.unmatched_films, vec!["Zodiac-2007", "Alien-1979"]);
        assert!((report.summary.match_percentage - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_collisions_surface_in_summary() {
        let films = index_of(&["Heat-1995", "heat"]);
        let scripts = index_of(&["heat", "Heat-1995", "HEAT"]);

        let report = CrossrefEngine::new(&films, &scripts).run();

        assert_eq!(report.summary.film_collisions, 1);
        assert_eq!(report.summary.script_collisions, 2);
        assert_eq!(report.summary.total_films, 2);
        assert_eq!(report.summary.total_scripts, 3);
        // One distinct key on each side, and it matches
        assert_eq!(report.matches.len(), 1);
        // Percentage is over raw scripts, as loaded
        assert!((report.summary.match_percentage - (100.0 / 3.0)).abs() < 0.01);
    }

    #[test]
    fn test_year_suffix_bridges_naming_styles() {
        let films = index_of(&["The-Big-Lebowski-1998", "No Country for Old Men-2007"]);
        let scripts = index_of(&["thebiglebowski", "no country for old men"]);

        let report = CrossrefEngine::new(&films, &scripts).run();

        assert_eq!(report.matches.len(), 2);
        assert!(report.unmatched_films.is_empty());
    }
}
