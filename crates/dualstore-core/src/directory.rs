//! RecordDirectory: one owner for slots, key indexes and the dense matrix.
//!
//! Every record lives in a numbered slot. The slot number is also the record's
//! row in the dense matrix, so the matrix and the slot list always have the
//! same length. Two hash indexes point into slots:
//!
//! - `id -> slot` (primary key; unique among live records)
//! - `label -> slot` (optional secondary label; last insert wins)
//!
//! All three structures are only mutated inside `insert` / `remove`, so no
//! caller can observe them out of sync. A removed record leaves a
//! `Slot::Tombstone` behind and its matrix row is reset to `Cell::default()`;
//! slots are never compacted, which keeps every other row position stable.
//!
//! Liveness has exactly one source of truth: presence in the id index. A slot
//! is `Live` iff some id maps to it.

use std::fmt;
use std::hash::Hash;

use ahash::AHashMap;
use roaring::RoaringBitmap;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::matrix::DenseMatrix;

/// A record that can be stored in a `RecordDirectory`.
pub trait Record {
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display;
    type Cell: Copy + Default + fmt::Debug;

    /// Number of dense cells each record occupies.
    const WIDTH: usize;

    fn id(&self) -> Self::Id;

    /// Secondary lookup label, if the record has one.
    fn label(&self) -> Option<&str> {
        None
    }

    /// Write this record's attributes into its dense row (`WIDTH` cells).
    fn write_cells(&self, row: &mut [Self::Cell]);
}

/// State of one slot in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Slot<R> {
    Live(R),
    Tombstone,
}

impl<R> Slot<R> {
    pub fn is_live(&self) -> bool {
        matches!(self, Slot::Live(_))
    }

    pub fn as_live(&self) -> Option<&R> {
        match self {
            Slot::Live(record) => Some(record),
            Slot::Tombstone => None,
        }
    }

    /// Tombstone this slot, returning the record it held.
    fn take(&mut self) -> Option<R> {
        match std::mem::replace(self, Slot::Tombstone) {
            Slot::Live(record) => Some(record),
            Slot::Tombstone => None,
        }
    }
}

/// What `RecordDirectory::insert` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was stored in a fresh slot.
    Inserted { slot: usize },
    /// The id was already live; nothing changed. `slot` holds the existing record.
    Duplicate { slot: usize },
}

impl InsertOutcome {
    pub fn is_inserted(self) -> bool {
        matches!(self, InsertOutcome::Inserted { .. })
    }

    pub fn slot(self) -> usize {
        match self {
            InsertOutcome::Inserted { slot } | InsertOutcome::Duplicate { slot } => slot,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordDirectory<R: Record> {
    slots: Vec<Slot<R>>,
    by_id: AHashMap<R::Id, usize>,
    by_label: AHashMap<String, usize>,
    matrix: DenseMatrix<R::Cell>,
}

impl<R: Record> Default for RecordDirectory<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordDirectory<R> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            by_id: AHashMap::new(),
            by_label: AHashMap::new(),
            matrix: DenseMatrix::new(R::WIDTH),
        }
    }

    /// Rebuild a directory (indexes included) from a slot list.
    ///
    /// Slots are replayed in order, so label ownership ends up exactly as it
    /// was when the slots were captured. A live slot whose id was already
    /// replayed is kept as a tombstone so positions do not shift.
    pub fn from_slots(slots: Vec<Slot<R>>) -> Self {
        let mut dir = Self::new();
        for slot in slots {
            match slot {
                Slot::Live(record) => {
                    if dir.contains(&record.id()) {
                        tracing::debug!(id = %record.id(), "duplicate id in slot list; tombstoned");
                        dir.push_tombstone();
                    } else {
                        dir.insert(record);
                    }
                }
                Slot::Tombstone => dir.push_tombstone(),
            }
        }
        dir
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Store `record` unless its id is already live.
    pub fn insert(&mut self, record: R) -> InsertOutcome {
        let id = record.id();
        if let Some(&slot) = self.by_id.get(&id) {
            tracing::debug!(%id, slot, "duplicate key ignored");
            return InsertOutcome::Duplicate { slot };
        }

        let slot = self.matrix.push_row(R::Cell::default());
        if let Some(row) = self.matrix.row_mut(slot) {
            record.write_cells(row);
        }

        self.by_id.insert(id, slot);
        if let Some(label) = record.label() {
            if let Some(previous) = self.by_label.insert(label.to_string(), slot) {
                tracing::debug!(label, previous, slot, "label remapped to newer record");
            }
        }
        self.slots.push(Slot::Live(record));

        tracing::debug!(%id, slot, "record inserted");
        InsertOutcome::Inserted { slot }
    }

    /// Like `insert`, but a live id is an error.
    pub fn try_insert(&mut self, record: R) -> StoreResult<usize> {
        match self.insert(record) {
            InsertOutcome::Inserted { slot } => Ok(slot),
            InsertOutcome::Duplicate { slot } => {
                let id = self.slots[slot]
                    .as_live()
                    .map(|r| r.id().to_string())
                    .unwrap_or_default();
                Err(StoreError::DuplicateKey { key: id })
            }
        }
    }

    /// Tombstone the record with `id`, reset its row and drop its index
    /// entries. Returns the removed record, or `None` if `id` was not live.
    pub fn remove(&mut self, id: &R::Id) -> Option<R> {
        let slot = self.by_id.remove(id)?;
        let record = self.slots.get_mut(slot)?.take()?;
        self.matrix.fill_row(slot, R::Cell::default());

        if let Some(label) = record.label() {
            // A newer record may have taken the label over; leave its entry alone.
            if self.by_label.get(label) == Some(&slot) {
                self.by_label.remove(label);
            }
        }

        tracing::debug!(%id, slot, "record removed");
        Some(record)
    }

    pub fn try_remove(&mut self, id: &R::Id) -> StoreResult<R> {
        self.remove(id).ok_or_else(|| StoreError::not_found(id))
    }

    fn push_tombstone(&mut self) {
        self.matrix.push_row(R::Cell::default());
        self.slots.push(Slot::Tombstone);
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        let slot = *self.by_id.get(id)?;
        self.slots.get(slot)?.as_live()
    }

    pub fn get_by_label(&self, label: &str) -> Option<&R> {
        let slot = *self.by_label.get(label)?;
        self.slots.get(slot)?.as_live()
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn slot_of(&self, id: &R::Id) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Number of slots ever allocated (live + tombstoned). Equals the matrix row count.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn live_count(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Slot positions currently holding a live record.
    ///
    /// The bitmap is `u32`-addressed; slots past `u32::MAX` are left out (and
    /// logged), so `iter_live` only reaches the first 2^32 slots.
    pub fn live_slots(&self) -> RoaringBitmap {
        slot_bitmap(self.by_id.values().copied())
    }

    /// Live records in slot order.
    pub fn iter_live(&self) -> impl Iterator<Item = &R> + '_ {
        self.live_slots()
            .into_iter()
            .filter_map(move |slot| self.slots.get(slot as usize).and_then(Slot::as_live))
    }

    pub fn slots(&self) -> &[Slot<R>] {
        &self.slots
    }

    // ========================================================================
    // Dense access
    // ========================================================================

    pub fn matrix(&self) -> &DenseMatrix<R::Cell> {
        &self.matrix
    }

    pub fn row_major(&self) -> Vec<R::Cell> {
        self.matrix.row_major()
    }

    pub fn column_major(&self) -> Vec<R::Cell> {
        self.matrix.column_major()
    }
}

fn slot_bitmap(slots: impl IntoIterator<Item = usize>) -> RoaringBitmap {
    slots
        .into_iter()
        .filter_map(|slot| match u32::try_from(slot) {
            Ok(pos) => Some(pos),
            Err(_) => {
                tracing::warn!(slot, "slot beyond bitmap range; skipped");
                None
            }
        })
        .collect()
}
