use std::collections::HashMap;

use tracing::warn;

use crate::core::normalize::normalize_key;

/// An identifier list indexed by normalized key.
///
/// Normalization is lossy, so two identifiers can share a key
/// ("Heat-1995" and "heat" both index as "heat"). The index keeps
/// last-one-wins semantics for the stored original; every displacement is
/// counted and logged.
///
/// Key iteration order is the order keys were first seen, which follows
/// the input list's order.
#[derive(Debug, Default)]
pub struct TitleIndex {
    /// Distinct normalized keys in first-seen order
    keys: Vec<String>,

    /// Index: normalized key -> original identifier (latest insert wins)
    by_key: HashMap<String, String>,

    /// Raw identifiers inserted, including displaced ones
    raw_count: usize,

    /// Inserts that displaced an earlier identifier with the same key
    collisions: usize,
}

impl TitleIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from raw identifiers, in order.
    #[must_use]
    pub fn from_identifiers(identifiers: impl IntoIterator<Item = String>) -> Self {
        let mut index = Self::new();
        for raw in identifiers {
            index.insert(raw);
        }
        index
    }

    /// Insert one raw identifier.
    ///
    /// If its normalized key is already present the previous original is
    /// displaced and the collision counted.
    pub fn insert(&mut self, raw: String) {
        let key = normalize_key(&raw);
        self.raw_count += 1;

        if let Some(displaced) = self.by_key.insert(key.clone(), raw) {
            self.collisions += 1;
            warn!(
                "normalized key collision: {:?} displaces {:?} (key {:?})",
                self.by_key[&key], displaced, key
            );
        } else {
            self.keys.push(key);
        }
    }

    /// Look up the original identifier for a normalized key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.by_key.get(key).map(String::as_str)
    }

    /// Whether a normalized key is present
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Iterate `(normalized key, original identifier)` pairs in first-seen
    /// key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys
            .iter()
            .map(|key| (key.as_str(), self.by_key[key].as_str()))
    }

    /// Number of distinct normalized keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Raw identifiers inserted, including displaced ones
    #[must_use]
    pub fn raw_count(&self) -> usize {
        self.raw_count
    }

    /// Inserts that displaced an earlier identifier
    #[must_use]
    pub fn collisions(&self) -> usize {
        self.collisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(items: &[&str]) -> TitleIndex {
        TitleIndex::from_identifiers(items.iter().map(ToString::to_string))
    }

    #[test]
    fn test_index_basic_lookup() {
        let index = index_of(&["Matrix-1999", "Inception-2010"]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.raw_count(), 2);
        assert_eq!(index.get("matrix"), Some("Matrix-1999"));
        assert_eq!(index.get("inception"), Some("Inception-2010"));
        assert!(index.contains("matrix"));
        assert!(!index.contains("alien"));
    }

    #[test]
    fn test_index_empty() {
        let index = TitleIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.collisions(), 0);
    }

    #[test]
    fn test_collision_last_wins() {
        let index = index_of(&["Heat-1995", "heat"]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.raw_count(), 2);
        assert_eq!(index.collisions(), 1);
        // The later identifier holds the slot
        assert_eq!(index.get("heat"), Some("heat"));
    }

    #[test]
    fn test_collision_does_not_duplicate_key() {
        let index = index_of(&["Heat-1995", "heat", "HEAT"]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.collisions(), 2);
        let keys: Vec<&str> = index.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["heat"]);
    }

    #[test]
    fn test_iteration_follows_first_seen_order() {
        let index = index_of(&["Zodiac-2007", "Alien-1979", "Matrix-1999"]);

        let keys: Vec<&str> = index.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zodiac", "alien", "matrix"]);
    }

    #[test]
    fn test_collision_keeps_original_key_position() {
        let index = index_of(&["Heat-1995", "Alien-1979", "heat"]);

        let pairs: Vec<(&str, &str)> = index.iter().collect();
        assert_eq!(pairs, vec![("heat", "heat"), ("alien", "Alien-1979")]);
    }
}
