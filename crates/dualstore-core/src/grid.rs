//! Pre-shaped dense storage addressed by two label axes.
//!
//! A `Grid` is fixed at construction to `rows.len() x cols.len()` cells, all
//! absent. Cells are addressed by `(row label, col label)`; an unknown label on
//! either axis makes the whole operation a no-op.

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::error::{StoreError, StoreResult};
use crate::matrix::DenseMatrix;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid<T>")]
pub struct Grid<T> {
    rows: Axis,
    cols: Axis,
    cells: DenseMatrix<Option<T>>,
}

#[derive(Deserialize)]
struct RawGrid<T> {
    rows: Axis,
    cols: Axis,
    cells: DenseMatrix<Option<T>>,
}

impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = StoreError;

    /// The matrix must be exactly `rows.len() x cols.len()`.
    fn try_from(raw: RawGrid<T>) -> Result<Self, StoreError> {
        let axes = (raw.rows.len(), raw.cols.len());
        if raw.cells.shape() != axes {
            return Err(StoreError::shape_mismatch(
                format!("{} x {} cells", axes.0, axes.1),
                format!("{} x {} matrix", raw.cells.rows(), raw.cells.width()),
            ));
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
        })
    }
}

impl<T: Copy> Grid<T> {
    pub fn new(rows: Axis, cols: Axis) -> Self {
        let cells = DenseMatrix::filled(rows.len(), cols.len(), None);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> &Axis {
        &self.rows
    }

    pub fn cols(&self) -> &Axis {
        &self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        self.cells.shape()
    }

    /// Resolve a label pair to matrix coordinates.
    pub fn locate(&self, row: &str, col: &str) -> Option<(usize, usize)> {
        Some((self.rows.position(row)?, self.cols.position(col)?))
    }

    fn try_locate(&self, row: &str, col: &str) -> StoreResult<(usize, usize)> {
        let r = self
            .rows
            .position(row)
            .ok_or_else(|| StoreError::unknown_label("row", row))?;
        let c = self
            .cols
            .position(col)
            .ok_or_else(|| StoreError::unknown_label("column", col))?;
        Ok((r, c))
    }

    /// Write a cell, overwriting any previous value. Returns `false` (and does
    /// nothing) when either label is unknown.
    pub fn set(&mut self, row: &str, col: &str, value: T) -> bool {
        match self.locate(row, col) {
            Some((r, c)) => self.cells.set(r, c, Some(value)),
            None => false,
        }
    }

    /// Like `set`, but names the unknown label.
    pub fn try_set(&mut self, row: &str, col: &str, value: T) -> StoreResult<Option<T>> {
        let (r, c) = self.try_locate(row, col)?;
        let previous = self.cells.get(r, c).flatten();
        self.cells.set(r, c, Some(value));
        Ok(previous)
    }

    /// Reset a cell to absent. Returns `false` when either label is unknown.
    pub fn clear(&mut self, row: &str, col: &str) -> bool {
        match self.locate(row, col) {
            Some((r, c)) => self.cells.set(r, c, None),
            None => false,
        }
    }

    pub fn get(&self, row: &str, col: &str) -> Option<T> {
        let (r, c) = self.locate(row, col)?;
        self.cells.get(r, c).flatten()
    }

    /// Number of cells currently holding a value.
    pub fn filled_count(&self) -> usize {
        self.cells.row_major().iter().filter(|cell| cell.is_some()).count()
    }

    pub fn row_major(&self) -> Vec<Option<T>> {
        self.cells.row_major()
    }

    pub fn column_major(&self) -> Vec<Option<T>> {
        self.cells.column_major()
    }
}
