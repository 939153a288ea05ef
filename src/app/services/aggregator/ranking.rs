//! Insertion-ordered counting with stable top-N ranking
//!
//! Keys remember the order in which they were first seen. Ranking sorts by
//! count descending with a stable sort, so equal counts keep that first-seen
//! order, then truncates.

use indexmap::IndexMap;

/// Counter keyed by string, ranked with first-seen tie-breaking
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedCounter {
    counts: IndexMap<String, usize>,
}

impl RankedCounter {
    /// Create an empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`, inserting it if absent
    pub fn increment(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.to_owned(), 1);
            }
        }
    }

    /// Current count for `key`
    pub fn get(&self, key: &str) -> Option<usize> {
        self.counts.get(key).copied()
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when nothing has been counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Keys in first-seen order with their counts
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Highest `limit` entries, descending by count, ties in first-seen order
    pub fn into_ranked(self, limit: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self.counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter_from(keys: &[&str]) -> RankedCounter {
        let mut counter = RankedCounter::new();
        for key in keys {
            counter.increment(key);
        }
        counter
    }

    #[test]
    fn test_counts_and_first_seen_order() {
        let counter = counter_from(&["b", "a", "b", "c", "a", "b"]);

        assert_eq!(counter.get("b"), Some(3));
        assert_eq!(counter.get("a"), Some(2));
        assert_eq!(counter.get("z"), None);
        assert_eq!(counter.len(), 3);
        assert_eq!(counter.total(), 6);

        let order: Vec<_> = counter.iter().map(|(key, _)| key).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let counter = counter_from(&["x", "y", "z", "z", "y", "x", "w"]);

        let ranked = counter.into_ranked(10);
        assert_eq!(
            ranked,
            vec![
                ("x".to_string(), 2),
                ("y".to_string(), 2),
                ("z".to_string(), 2),
                ("w".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_truncates_to_limit() {
        let counter = counter_from(&["a", "b", "b", "c", "c", "c"]);
        let ranked = counter.into_ranked(2);
        assert_eq!(ranked, vec![("c".to_string(), 3), ("b".to_string(), 2)]);
    }

    #[test]
    fn test_empty_counter() {
        let counter = RankedCounter::new();
        assert!(counter.is_empty());
        assert!(counter.into_ranked(5).is_empty());
    }
}
