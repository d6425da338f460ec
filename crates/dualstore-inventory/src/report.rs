//! Line-oriented renderings of inventory query results.
//!
//! Floats print with Rust's shortest round-trip `Display` (`20`, `1.5`, `0.2`).

use dualstore_core::join_values;

use crate::{InventoryItem, InventoryStore, ItemId};

/// `Found: <name>, Qty: <q>, Price: <p>` or `Not found: <id>`.
pub fn search_by_id_line(hit: Option<&InventoryItem>, id: ItemId) -> String {
    match hit {
        Some(item) => format!(
            "Found: {}, Qty: {}, Price: {}",
            item.name, item.quantity, item.price
        ),
        None => format!("Not found: {id}"),
    }
}

/// `Found: <id>, Qty: <q>, Price: <p>` or `Not found: <name>`.
pub fn search_by_name_line(hit: Option<&InventoryItem>, name: &str) -> String {
    match hit {
        Some(item) => format!(
            "Found: {}, Qty: {}, Price: {}",
            item.id, item.quantity, item.price
        ),
        None => format!("Not found: {name}"),
    }
}

pub fn row_major_line(store: &InventoryStore) -> String {
    format!(
        "Row-Major Access (Price, Quantity): {}",
        join_values(store.row_major())
    )
}

pub fn column_major_line(store: &InventoryStore) -> String {
    format!(
        "Column-Major Access (Price, Quantity): {}",
        join_values(store.column_major())
    )
}

/// Restock overlay, one entry per line in ascending id order.
pub fn restock_report(store: &InventoryStore) -> String {
    let mut out = String::from("Sparse Storage (Rarely restocked items):\n");
    for (id, entry) in store.restock().sorted_entries() {
        out.push_str(&format!(
            "ItemID: {id}, Quantity: {}, Price: {}\n",
            entry.quantity, entry.price
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InventoryStore {
        let mut s = InventoryStore::new();
        s.insert_item(101, "Milk", 20, 1.5);
        s.insert_item(102, "Eggs", 10, 0.2);
        s.insert_item(103, "Bread", 3, 2.0);
        s.insert_item(104, "Butter", 1, 3.5);
        s
    }

    #[test]
    fn search_lines() {
        let s = store();
        assert_eq!(
            search_by_id_line(s.search_by_id(102), 102),
            "Found: Eggs, Qty: 10, Price: 0.2"
        );
        assert_eq!(
            search_by_name_line(s.search_by_name("Bread"), "Bread"),
            "Found: 103, Qty: 3, Price: 2"
        );
        assert_eq!(search_by_id_line(s.search_by_id(999), 999), "Not found: 999");
        assert_eq!(
            search_by_name_line(s.search_by_name("Jam"), "Jam"),
            "Not found: Jam"
        );
    }

    #[test]
    fn traversal_lines() {
        let s = store();
        assert_eq!(
            row_major_line(&s),
            "Row-Major Access (Price, Quantity): 1.5 20 0.2 10 2 3 3.5 1 "
        );
        assert_eq!(
            column_major_line(&s),
            "Column-Major Access (Price, Quantity): 1.5 0.2 2 3.5 20 10 3 1 "
        );
    }

    #[test]
    fn restock_report_after_delete_and_refresh() {
        let mut s = store();
        s.delete_item(104);
        s.refresh_restock();
        assert_eq!(
            restock_report(&s),
            "Sparse Storage (Rarely restocked items):\nItemID: 103, Quantity: 3, Price: 2\n"
        );
    }
}
