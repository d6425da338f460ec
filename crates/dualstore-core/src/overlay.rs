//! Sparse overlays: hash maps for records that sit outside the dense axes.
//!
//! Overlays never read or write a `DenseMatrix`. They are either rebuilt
//! wholesale from a scan of live records (`SparseOverlay::rebuild`) or fed
//! directly by callers (`NestedOverlay::insert`). Iteration order of the
//! underlying maps is unspecified; the `sorted_*` accessors give a stable
//! order for reporting.

use std::borrow::Borrow;
use std::hash::Hash;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// `key -> value` overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseOverlay<K: Eq + Hash, V> {
    entries: AHashMap<K, V>,
}

impl<K: Eq + Hash, V> Default for SparseOverlay<K, V> {
    fn default() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> SparseOverlay<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; returns the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the whole overlay with `entries`.
    pub fn rebuild<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.entries.clear();
        for (key, value) in entries {
            self.entries.insert(key, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter()
    }

    pub fn sorted_entries(&self) -> Vec<(&K, &V)>
    where
        K: Ord,
    {
        let mut out: Vec<(&K, &V)> = self.entries.iter().collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }
}

/// `outer -> inner -> value` overlay (e.g. date -> city -> reading).
///
/// An outer key is dropped as soon as its last inner entry is removed, so
/// `outer_len` only counts outer keys that still hold data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedOverlay<O: Eq + Hash, I: Eq + Hash, V> {
    entries: AHashMap<O, AHashMap<I, V>>,
}

impl<O: Eq + Hash, I: Eq + Hash, V> Default for NestedOverlay<O, I, V> {
    fn default() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }
}

impl<O: Eq + Hash, I: Eq + Hash, V> NestedOverlay<O, I, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; returns the previous value.
    pub fn insert(&mut self, outer: O, inner: I, value: V) -> Option<V> {
        self.entries.entry(outer).or_default().insert(inner, value)
    }

    pub fn remove<Q>(&mut self, outer: &O, inner: &Q) -> Option<V>
    where
        I: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let bucket = self.entries.get_mut(outer)?;
        let removed = bucket.remove(inner);
        if bucket.is_empty() {
            self.entries.remove(outer);
        }
        removed
    }

    pub fn get<Q>(&self, outer: &O, inner: &Q) -> Option<&V>
    where
        I: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(outer)?.get(inner)
    }

    pub fn bucket(&self, outer: &O) -> Option<&AHashMap<I, V>> {
        self.entries.get(outer)
    }

    /// Total number of `(outer, inner)` entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(|bucket| bucket.len()).sum()
    }

    pub fn outer_len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn sorted_entries(&self) -> Vec<(&O, &I, &V)>
    where
        O: Ord,
        I: Ord,
    {
        let mut out: Vec<(&O, &I, &V)> = self
            .entries
            .iter()
            .flat_map(|(o, bucket)| bucket.iter().map(move |(i, v)| (o, i, v)))
            .collect();
        out.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.cmp(b.1)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_insert_overwrites_and_remove_is_total() {
        let mut o = SparseOverlay::new();
        assert_eq!(o.insert(1u32, "a"), None);
        assert_eq!(o.insert(1u32, "b"), Some("a"));
        assert_eq!(o.get(&1), Some(&"b"));
        assert_eq!(o.remove(&1), Some("b"));
        assert_eq!(o.remove(&1), None);
        assert!(o.is_empty());
    }

    #[test]
    fn sparse_rebuild_replaces_contents() {
        let mut o = SparseOverlay::new();
        o.insert(9u32, 9);
        o.rebuild([(2u32, 20), (1u32, 10)]);
        assert!(!o.contains_key(&9));
        let sorted: Vec<(u32, i32)> = o.sorted_entries().into_iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(sorted, vec![(1, 10), (2, 20)]);
    }

    #[test]
    fn nested_lookup_misses_on_either_level() {
        let mut o: NestedOverlay<u32, String, f64> = NestedOverlay::new();
        o.insert(1, "x".to_string(), 1.0);
        assert_eq!(o.get(&1, "x"), Some(&1.0));
        assert_eq!(o.get(&1, "y"), None);
        assert_eq!(o.get(&2, "x"), None);
    }

    #[test]
    fn nested_remove_prunes_empty_outer_keys() {
        let mut o: NestedOverlay<u32, String, f64> = NestedOverlay::new();
        o.insert(1, "x".to_string(), 1.0);
        o.insert(1, "y".to_string(), 2.0);
        assert_eq!(o.len(), 2);
        assert_eq!(o.outer_len(), 1);

        assert_eq!(o.remove(&1, "x"), Some(1.0));
        assert_eq!(o.outer_len(), 1);
        assert_eq!(o.remove(&1, "y"), Some(2.0));
        assert_eq!(o.outer_len(), 0);
        assert_eq!(o.remove(&1, "y"), None);
        assert_eq!(o.remove(&7, "y"), None);
    }

    #[test]
    fn nested_sorted_entries_order_by_outer_then_inner() {
        let mut o: NestedOverlay<u32, String, i32> = NestedOverlay::new();
        o.insert(2, "a".to_string(), 3);
        o.insert(1, "b".to_string(), 2);
        o.insert(1, "a".to_string(), 1);
        let values: Vec<i32> = o.sorted_entries().into_iter().map(|(_, _, v)| *v).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
