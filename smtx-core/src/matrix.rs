//! Sparse matrix storage model
//!
//! A matrix is a map from cell coordinates to non-zero integer values.
//! Memory and iteration cost are proportional to the number of stored
//! entries, never to `rows * cols`.

use hashbrown::HashMap;

/// Cell coordinate within a matrix
///
/// An explicit composite key with structural equality and hashing, used
/// to index the element map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Sparse integer matrix with fixed dimensions
///
/// Only non-zero values are stored. Setting a cell to zero removes its
/// entry, so the map never holds a zero. Dimensions are fixed at
/// construction and the matrix is never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    elements: HashMap<Coord, i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given dimensions
    ///
    /// This is one of the two construction entry points; the other is
    /// [`SparseMatrix::from_text`], which parses the text format.
    pub fn with_dims(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            elements: HashMap::new(),
        }
    }

    /// Get the value at the specified position, or 0 if not stored
    ///
    /// Never fails; positions outside the declared dimensions simply
    /// read as 0.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.elements
            .get(&Coord::new(row, col))
            .copied()
            .unwrap_or(0)
    }

    /// Set the value at the specified position
    ///
    /// A zero value removes any existing entry; anything else inserts or
    /// overwrites. Coordinates are not checked against the declared
    /// dimensions; callers are expected to stay in range.
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        let coord = Coord::new(row, col);
        if value != 0 {
            self.elements.insert(coord, value);
        } else {
            self.elements.remove(&coord);
        }
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of non-zero elements stored
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// Iterate over stored entries as (coordinate, value) pairs
    ///
    /// Iteration order is the map's order and is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, i64)> + '_ {
        self.elements.iter().map(|(&coord, &value)| (coord, value))
    }
}
