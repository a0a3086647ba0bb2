//! Vote tallies and top-K selection.

use serde::Serialize;

use crate::dish::names_match;

/// Accumulated vote counts keyed by dish name.
///
/// Entries keep the order in which each dish received its first vote. That
/// order is the tie-break when ranking, so equal counts always rank the
/// same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    entries: Vec<(String, u32)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tally from stored `(name, count)` pairs, dropping zero counts
    /// and folding case-insensitive repeats into the first spelling.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut tally = Self::new();
        for (name, count) in entries {
            if count > 0 {
                tally.add(name.into(), count);
            }
        }
        tally
    }

    /// Adds one vote for `name`, creating the entry on first vote.
    pub fn increment(&mut self, name: &str) {
        self.add(name.to_owned(), 1);
    }

    fn add(&mut self, name: String, count: u32) {
        match self.entries.iter_mut().find(|(n, _)| names_match(n, &name)) {
            Some((_, existing)) => *existing = existing.saturating_add(count),
            None => self.entries.push((name, count)),
        }
    }

    /// Vote count for `name` (0 when absent).
    pub fn get(&self, name: &str) -> u32 {
        self.entries
            .iter()
            .find(|(n, _)| names_match(n, name))
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// Entries in first-vote order.
    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every count.
    pub fn total_votes(&self) -> u64 {
        self.entries.iter().map(|(_, c)| u64::from(*c)).sum()
    }

    /// Entries sorted by descending count; ties keep first-vote order.
    pub fn ranking(&self) -> Vec<(String, u32)> {
        let mut ranked = self.entries.clone();
        // sort_by is stable.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Names of the `k` highest-ranked dishes.
    pub fn top_k(&self, k: usize) -> Vec<String> {
        self.ranking()
            .into_iter()
            .take(k)
            .map(|(name, _)| name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn increments_accumulate() {
        let mut tally = Tally::new();
        for name in ["A", "B", "A"] {
            tally.increment(name);
        }
        assert_eq!(tally.get("A"), 2);
        assert_eq!(tally.get("B"), 1);
        assert_eq!(tally.get("C"), 0);
        assert_eq!(tally.total_votes(), 3);
    }

    #[test]
    fn increment_is_case_insensitive() {
        let mut tally = Tally::new();
        tally.increment("Pad Thai");
        tally.increment("pad thai");
        assert_eq!(tally.len(), 1);
        assert_eq!(tally.entries()[0], ("Pad Thai".to_string(), 2));
    }

    #[test]
    fn from_entries_drops_zero_counts() {
        let tally = Tally::from_entries([("A", 3), ("B", 0), ("C", 1)]);
        assert_eq!(tally.len(), 2);
        assert_eq!(tally.get("B"), 0);
    }

    #[test]
    fn top_k_with_ties() {
        let tally = Tally::from_entries([("A", 5), ("B", 5), ("C", 3), ("D", 1)]);
        assert_eq!(tally.top_k(3), vec!["A", "B", "C"]);
    }

    #[test]
    fn ties_follow_first_vote_order() {
        let tally = Tally::from_entries([("D", 1), ("B", 5), ("A", 5)]);
        assert_eq!(tally.top_k(2), vec!["B", "A"]);
    }

    #[test]
    fn top_k_bounded_by_voted_dishes() {
        let tally = Tally::from_entries([("A", 1), ("B", 2)]);
        assert_eq!(tally.top_k(6), vec!["B", "A"]);
        assert!(Tally::new().top_k(6).is_empty());
    }

    #[test]
    fn ranking_is_descending() {
        let tally = Tally::from_entries([("A", 1), ("B", 7), ("C", 3)]);
        let counts: Vec<u32> = tally.ranking().iter().map(|(_, c)| *c).collect();
        assert_eq!(counts, vec![7, 3, 1]);
    }
}
