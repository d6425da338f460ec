//! Dualstore core: dense/sparse record storage primitives.
//!
//! Both stores in this workspace pair a **dense** structure (a fixed-width
//! matrix addressed by row position) with a **sparse** overlay (a hash map for
//! records that do not fit the dense axes):
//!
//! ```text
//!   RecordDirectory<R>                      SparseOverlay<K, V>
//!   ┌──────────────┐   id    -> slot        ┌──────────────────┐
//!   │ slots        │◄─ label -> slot        │ key -> value     │
//!   │ DenseMatrix  │                        │ (rebuilt or fed  │
//!   └──────────────┘                        │  directly)       │
//!                                           └──────────────────┘
//!   Grid<T> = Axis x Axis over DenseMatrix<Option<T>>
//!   NestedOverlay<O, I, V> = outer -> inner -> value
//! ```
//!
//! Overlays and dense structures never touch each other.
//!
//! ## Modules
//!
//! - `directory`: slot list + id/label indexes + dense rows, mutated as one unit
//! - `matrix`: flat row-major cell storage with both traversal orders
//! - `grid` / `axis`: pre-shaped matrices addressed by labels
//! - `overlay`: flat and nested sparse maps
//! - `snapshot`: magic/version framed `bincode` payloads
//! - `shared`: `Arc<RwLock<_>>` handle for concurrent readers
//! - `complexity`: static cost tables

pub mod axis;
pub mod complexity;
pub mod directory;
pub mod error;
pub mod grid;
pub mod matrix;
pub mod overlay;
pub mod shared;
pub mod snapshot;

pub use axis::Axis;
pub use complexity::{ComplexityEntry, ComplexityReport};
pub use directory::{InsertOutcome, Record, RecordDirectory, Slot};
pub use error::{StoreError, StoreResult};
pub use grid::Grid;
pub use matrix::DenseMatrix;
pub use overlay::{NestedOverlay, SparseOverlay};
pub use shared::SharedStore;

/// Render values space-separated, each followed by a single space.
///
/// This is the line format used by traversal reports (`"1.5 20 0.2 10 "`).
pub fn join_values<T: std::fmt::Display>(values: impl IntoIterator<Item = T>) -> String {
    let mut out = String::new();
    for value in values {
        out.push_str(&value.to_string());
        out.push(' ');
    }
    out
}
