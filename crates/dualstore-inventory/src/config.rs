//! Inventory store configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RESTOCK_THRESHOLD: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Items with `quantity` strictly below this land in the restock overlay.
    pub restock_threshold: u32,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            restock_threshold: DEFAULT_RESTOCK_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse inventory config JSON")
    }
}
