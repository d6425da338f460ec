//! Ordered label axes for pre-shaped matrices.
//!
//! An `Axis` is the fixed list of labels along one dimension of a `Grid`
//! (years, cities, ...). Labels keep their construction order, which is the
//! order traversals visit them in. Lookup goes through a hash map so resolving
//! a label to its position is O(1) rather than a scan.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Ordered labels plus a label -> position lookup.
///
/// Duplicate labels still occupy a position each, but lookups resolve to the
/// first occurrence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Axis {
    labels: Vec<String>,
    positions: AHashMap<String, usize>,
}

impl Axis {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let mut positions = AHashMap::with_capacity(labels.len());
        for (pos, label) in labels.iter().enumerate() {
            positions.entry(label.clone()).or_insert(pos);
        }
        Self { labels, positions }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Position of `label`, if it is on this axis.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    pub fn label(&self, pos: usize) -> Option<&str> {
        self.labels.get(pos).map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl From<Vec<String>> for Axis {
    fn from(labels: Vec<String>) -> Self {
        Self::new(labels)
    }
}

impl From<Axis> for Vec<String> {
    fn from(axis: Axis) -> Self {
        axis.labels
    }
}

impl PartialEq for Axis {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
    }
}

impl Eq for Axis {}
