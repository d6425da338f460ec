//! Inventory tracker over the dualstore dense/sparse pattern.
//!
//! Items are stored in a `RecordDirectory`, indexed by numeric id and by name.
//! Each item owns one dense row `[price, quantity]`. A separate restock overlay
//! holds `(quantity, price)` for items running low; it is a snapshot taken by
//! `refresh_restock` and is not touched by inserts or deletes in between.

pub mod config;
pub mod report;


use anyhow::Result;
use dualstore_core::{
    snapshot, ComplexityEntry, ComplexityReport, InsertOutcome, Record, RecordDirectory, Slot,
    SparseOverlay, StoreResult,
};
use serde::{Deserialize, Serialize};

pub use config::InventoryConfig;

pub type ItemId = u32;

/// Dense column holding the item price.
pub const PRICE_COL: usize = 0;
/// Dense column holding the item quantity.
pub const QUANTITY_COL: usize = 1;

const SNAPSHOT_MAGIC: &[u8; 4] = b"DSIV";
const SNAPSHOT_VERSION: u32 = 1;

pub const INVENTORY_COMPLEXITY: ComplexityReport = ComplexityReport {
    title: "Complexity Analysis",
    entries: &[
        ComplexityEntry {
            operation: "Insert Item",
            cost: "Average O(1)",
        },
        ComplexityEntry {
            operation: "Delete Item",
            cost: "Average O(1)",
        },
        ComplexityEntry {
            operation: "Search Item",
            cost: "Average O(1)",
        },
        ComplexityEntry {
            operation: "Row-Major and Column-Major Access",
            cost: "O(n)",
        },
        ComplexityEntry {
            operation: "Sparse Storage Optimization",
            cost: "O(n)",
        },
        ComplexityEntry {
            operation: "Space Complexity",
            cost: "O(n)",
        },
    ],
};

// ============================================================================
// Items
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub price: f32,
}

impl InventoryItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: u32, price: f32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }
}

impl Record for InventoryItem {
    type Id = ItemId;
    type Cell = f32;
    const WIDTH: usize = 2;

    fn id(&self) -> ItemId {
        self.id
    }

    fn label(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn write_cells(&self, row: &mut [f32]) {
        row[PRICE_COL] = self.price;
        row[QUANTITY_COL] = self.quantity as f32;
    }
}

/// Restock overlay value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestockEntry {
    pub quantity: u32,
    pub price: f32,
}

// ============================================================================
// Store
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    config: InventoryConfig,
    items: RecordDirectory<InventoryItem>,
    restock: SparseOverlay<ItemId, RestockEntry>,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    config: &'a InventoryConfig,
    slots: &'a [Slot<InventoryItem>],
    restock: &'a SparseOverlay<ItemId, RestockEntry>,
}

#[derive(Deserialize)]
struct SnapshotOwned {
    config: InventoryConfig,
    slots: Vec<Slot<InventoryItem>>,
    restock: SparseOverlay<ItemId, RestockEntry>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InventoryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    pub fn complexity() -> &'static ComplexityReport {
        &INVENTORY_COMPLEXITY
    }

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Add an item. A live `id` makes this a no-op (`InsertOutcome::Duplicate`).
    pub fn insert_item(
        &mut self,
        id: ItemId,
        name: impl Into<String>,
        quantity: u32,
        price: f32,
    ) -> InsertOutcome {
        self.items
            .insert(InventoryItem::new(id, name, quantity, price))
    }

    pub fn try_insert_item(
        &mut self,
        id: ItemId,
        name: impl Into<String>,
        quantity: u32,
        price: f32,
    ) -> StoreResult<usize> {
        self.items
            .try_insert(InventoryItem::new(id, name, quantity, price))
    }

    /// Remove an item; its dense row is zeroed but kept. No-op if `id` is absent.
    pub fn delete_item(&mut self, id: ItemId) -> Option<InventoryItem> {
        self.items.remove(&id)
    }

    pub fn try_delete_item(&mut self, id: ItemId) -> StoreResult<InventoryItem> {
        self.items.try_remove(&id)
    }

    /// Rebuild the restock overlay from live items below the threshold.
    /// Returns the overlay size.
    pub fn refresh_restock(&mut self) -> usize {
        let threshold = self.config.restock_threshold;
        let low = self
            .items
            .iter_live()
            .filter(|item| item.quantity < threshold)
            .map(|item| {
                (
                    item.id,
                    RestockEntry {
                        quantity: item.quantity,
                        price: item.price,
                    },
                )
            });
        self.restock.rebuild(low);

        tracing::debug!(
            threshold,
            entries = self.restock.len(),
            "restock overlay refreshed"
        );
        self.restock.len()
    }

    // ========================================================================
    // Read Operations
    // ========================================================================

    pub fn search_by_id(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.get(&id)
    }

    pub fn search_by_name(&self, name: &str) -> Option<&InventoryItem> {
        self.items.get_by_label(name)
    }

    /// `[price, quantity]` per slot, slot by slot. Deleted slots read `0 0`.
    pub fn row_major(&self) -> Vec<f32> {
        self.items.row_major()
    }

    /// All prices (slot order), then all quantities.
    pub fn column_major(&self) -> Vec<f32> {
        self.items.column_major()
    }

    pub fn restock(&self) -> &SparseOverlay<ItemId, RestockEntry> {
        &self.restock
    }

    /// Live items in slot order.
    pub fn items(&self) -> impl Iterator<Item = &InventoryItem> + '_ {
        self.items.iter_live()
    }

    /// Dense rows ever allocated, including deleted ones.
    pub fn slot_count(&self) -> usize {
        self.items.slot_count()
    }

    pub fn live_count(&self) -> usize {
        self.items.live_count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        snapshot::encode(
            SNAPSHOT_MAGIC,
            SNAPSHOT_VERSION,
            &SnapshotRef {
                config: &self.config,
                slots: self.items.slots(),
                restock: &self.restock,
            },
        )
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let snap: SnapshotOwned = snapshot::decode(SNAPSHOT_MAGIC, SNAPSHOT_VERSION, bytes)?;
        Ok(Self {
            config: snap.config,
            items: RecordDirectory::from_slots(snap.slots),
            restock: snap.restock,
        })
    }
}
