//! # Insertion-Ordered Map
//!
//! A string-keyed map whose iteration order is the order keys were first
//! inserted.
//!
//! The summary deriver's tie-breaks ("first encountered wins") and the
//! stable ranking of spenders are defined over first-seen order, so the
//! aggregates cannot live in a plain `HashMap`: its iteration order is
//! arbitrary. `OrderedMap` keeps a `HashMap` index for O(1) lookup and a
//! `Vec` of entries for ordered traversal.
//!
//! The API is monotonic — entries can be inserted and updated, never
//! removed — which is all the fold requires.

use std::collections::HashMap;

// =============================================================================
// OrderedMap
// =============================================================================

/// String-keyed map preserving first-insertion order on iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    /// Key → position in `entries`.
    index: HashMap<String, usize>,
    /// Entries in first-insertion order.
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        OrderedMap {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Returns the value for `key`, inserting `default()` first if absent.
    ///
    /// A key's position in iteration order is fixed by its first insertion;
    /// later updates through the returned reference do not move it.
    pub fn get_or_insert_with<F>(&mut self, key: &str, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let idx = match self.index.get(key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(key.to_owned(), i);
                self.entries.push((key.to_owned(), default()));
                i
            }
        };
        &mut self.entries[idx].1
    }

    /// Iterates `(key, value)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates values in first-insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

// Manual impl: the derived one would demand `V: Default`, which the
// aggregate value types do not and need not provide.
impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        OrderedMap::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let mut map = OrderedMap::new();
        *map.get_or_insert_with("tops", || 0) += 1;
        *map.get_or_insert_with("hats", || 0) += 1;
        *map.get_or_insert_with("shoes", || 0) += 1;

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["tops", "hats", "shoes"]);
    }

    #[test]
    fn test_update_does_not_reorder() {
        let mut map = OrderedMap::new();
        *map.get_or_insert_with("tops", || 0) += 1;
        *map.get_or_insert_with("hats", || 0) += 1;
        // Touching "tops" again must not move it behind "hats"
        *map.get_or_insert_with("tops", || 0) += 10;

        let entries: Vec<(&str, &i64)> = map.iter().collect();
        assert_eq!(entries, vec![("tops", &11), ("hats", &1)]);
    }

    #[test]
    fn test_get() {
        let mut map = OrderedMap::new();
        *map.get_or_insert_with("hats", || 0) += 5;

        assert_eq!(map.get("hats"), Some(&5));
        assert_eq!(map.get("tops"), None);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut map: OrderedMap<i64> = OrderedMap::new();
        assert!(map.is_empty());

        map.get_or_insert_with("a", || 0);
        map.get_or_insert_with("a", || 0);
        map.get_or_insert_with("b", || 0);
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
    }
}
