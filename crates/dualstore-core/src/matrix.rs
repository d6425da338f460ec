//! Fixed-width dense matrix with row-major storage.
//!
//! Cells live in one flat `Vec<T>` laid out row after row, so a row is a
//! contiguous slice and row-major traversal is a linear read. Column-major
//! traversal visits the same cells with a stride of `width`; both orders are
//! exposed so callers can compare access patterns over identical data.
//!
//! Rows are only ever appended. Removing data means overwriting cells, which
//! keeps every row position stable for the indexes that point into it.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix<T>")]
pub struct DenseMatrix<T> {
    cells: Vec<T>,
    rows: usize,
    width: usize,
}

/// Wire form of `DenseMatrix`, checked before it becomes one.
#[derive(Deserialize)]
struct RawMatrix<T> {
    cells: Vec<T>,
    rows: usize,
    width: usize,
}

impl<T> TryFrom<RawMatrix<T>> for DenseMatrix<T> {
    type Error = StoreError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self, StoreError> {
        let expected = raw.rows.checked_mul(raw.width);
        if expected != Some(raw.cells.len()) {
            return Err(StoreError::shape_mismatch(
                format!("{} x {} cells", raw.rows, raw.width),
                format!("{} cells", raw.cells.len()),
            ));
        }
        Ok(Self {
            cells: raw.cells,
            rows: raw.rows,
            width: raw.width,
        })
    }
}

impl<T> DenseMatrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(rows, width)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.width)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<T: Copy> DenseMatrix<T> {
    /// An empty matrix whose rows will each hold `width` cells.
    pub fn new(width: usize) -> Self {
        Self {
            cells: Vec::new(),
            rows: 0,
            width,
        }
    }

    /// A `rows x width` matrix with every cell set to `fill`.
    pub fn filled(rows: usize, width: usize, fill: T) -> Self {
        Self {
            cells: vec![fill; rows * width],
            rows,
            width,
        }
    }

    /// Append a row of `fill` cells and return its position.
    pub fn push_row(&mut self, fill: T) -> usize {
        let row = self.rows;
        self.cells.extend(std::iter::repeat(fill).take(self.width));
        self.rows += 1;
        row
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        let range = self.row_range(row)?;
        Some(&self.cells[range])
    }

    pub fn row_mut(&mut self, row: usize) -> Option<&mut [T]> {
        let range = self.row_range(row)?;
        Some(&mut self.cells[range])
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if col >= self.width {
            return None;
        }
        self.row(row).map(|cells| cells[col])
    }

    /// Overwrite one cell. Returns `false` when `(row, col)` is out of shape.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        if col >= self.width {
            return false;
        }
        match self.row_mut(row) {
            Some(cells) => {
                cells[col] = value;
                true
            }
            None => false,
        }
    }

    /// Overwrite every cell of `row` with `value`.
    pub fn fill_row(&mut self, row: usize, value: T) -> bool {
        match self.row_mut(row) {
            Some(cells) => {
                cells.fill(value);
                true
            }
            None => false,
        }
    }

    /// Every cell, outer loop over rows, inner loop over columns.
    pub fn row_major(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.cells.len());
        for row in 0..self.rows {
            for col in 0..self.width {
                out.push(self.cells[row * self.width + col]);
            }
        }
        tracing::trace!(cells = out.len(), "row-major traversal");
        out
    }

    /// Every cell, outer loop over columns, inner loop over rows.
    pub fn column_major(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.cells.len());
        for col in 0..self.width {
            for row in 0..self.rows {
                out.push(self.cells[row * self.width + col]);
            }
        }
        tracing::trace!(cells = out.len(), "column-major traversal");
        out
    }

    fn row_range(&self, row: usize) -> Option<std::ops::Range<usize>> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.width;
        Some(start..start + self.width)
    }
}
