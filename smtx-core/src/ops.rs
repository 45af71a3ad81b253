//! Arithmetic over sparse matrices
//!
//! Addition, subtraction, and multiplication, plus the selector that maps
//! driver operation codes onto them. Every operation validates operand
//! dimensions before doing any work and returns a new matrix; operands
//! are never mutated.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;

impl SparseMatrix {
    /// Add two matrices of identical dimensions
    ///
    /// Visits the union of both operands' stored entries exactly once:
    /// all of the left entries summed against the right, then the
    /// right-only entries inserted directly. Cancelled sums are not
    /// stored. Sums that overflow `i64` fail with
    /// [`MatrixError::ValueOverflow`].
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        if self.dimensions() != other.dimensions() {
            return Err(MatrixError::DimensionMismatch);
        }
        let (rows, cols) = self.dimensions();
        let mut result = SparseMatrix::with_dims(rows, cols);
        for (coord, value) in self.iter() {
            let sum = value
                .checked_add(other.get(coord.row, coord.col))
                .ok_or(MatrixError::ValueOverflow)?;
            result.set(coord.row, coord.col, sum);
        }
        for (coord, value) in other.iter() {
            if self.get(coord.row, coord.col) == 0 {
                result.set(coord.row, coord.col, value);
            }
        }
        Ok(result)
    }

    /// Subtract another matrix of identical dimensions from this one
    ///
    /// Same union traversal as [`SparseMatrix::add`]; right-only entries
    /// contribute their negation. Differences that overflow `i64` fail
    /// with [`MatrixError::ValueOverflow`].
    pub fn sub(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        if self.dimensions() != other.dimensions() {
            return Err(MatrixError::DimensionMismatch);
        }
        let (rows, cols) = self.dimensions();
        let mut result = SparseMatrix::with_dims(rows, cols);
        for (coord, value) in self.iter() {
            let diff = value
                .checked_sub(other.get(coord.row, coord.col))
                .ok_or(MatrixError::ValueOverflow)?;
            result.set(coord.row, coord.col, diff);
        }
        for (coord, value) in other.iter() {
            if self.get(coord.row, coord.col) == 0 {
                let negated = value.checked_neg().ok_or(MatrixError::ValueOverflow)?;
                result.set(coord.row, coord.col, negated);
            }
        }
        Ok(result)
    }

    /// Multiply this matrix by another
    ///
    /// Requires `self.cols() == other.rows()`; the result has dimensions
    /// `(self.rows(), other.cols())`. The right operand's entries are
    /// grouped by row once, so each left entry only traverses the
    /// matching non-zero row instead of scanning every output column.
    /// Zero products and cancelled accumulations are not stored;
    /// products or accumulations that overflow `i64` fail with
    /// [`MatrixError::ValueOverflow`].
    pub fn mul(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut right_rows: HashMap<usize, Vec<(usize, i64)>> = HashMap::new();
        for (coord, value) in other.iter() {
            right_rows.entry(coord.row).or_default().push((coord.col, value));
        }

        let mut result = SparseMatrix::with_dims(self.rows(), other.cols());
        for (coord, value) in self.iter() {
            if let Some(row_entries) = right_rows.get(&coord.col) {
                for &(k, w) in row_entries {
                    let sum = value
                        .checked_mul(w)
                        .and_then(|term| result.get(coord.row, k).checked_add(term))
                        .ok_or(MatrixError::ValueOverflow)?;
                    result.set(coord.row, k, sum);
                }
            }
        }
        Ok(result)
    }
}

/// Arithmetic operation selector
///
/// Maps the driver's operation codes (`"1"` add, `"2"` subtract, `"3"`
/// multiply) to the corresponding matrix operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
}

impl Operation {
    /// Parse an operation code
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "1" => Ok(Operation::Add),
            "2" => Ok(Operation::Sub),
            "3" => Ok(Operation::Mul),
            _ => Err(MatrixError::InvalidOperation),
        }
    }

    /// Apply the operation to a pair of matrices
    pub fn apply(&self, left: &SparseMatrix, right: &SparseMatrix) -> Result<SparseMatrix> {
        match self {
            Operation::Add => left.add(right),
            Operation::Sub => left.sub(right),
            Operation::Mul => left.mul(right),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Add => write!(f, "addition"),
            Operation::Sub => write!(f, "subtraction"),
            Operation::Mul => write!(f, "multiplication"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Coord;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn matrix(rows: usize, cols: usize, entries: &[(usize, usize, i64)]) -> SparseMatrix {
        let mut m = SparseMatrix::with_dims(rows, cols);
        for &(row, col, value) in entries {
            m.set(row, col, value);
        }
        m
    }

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> SparseMatrix {
        let mut m = SparseMatrix::with_dims(rows, cols);
        for _ in 0..10 {
            let row = rng.gen_range(0..rows);
            let col = rng.gen_range(0..cols);
            let value = rng.gen_range(-5i64..=5);
            m.set(row, col, value);
        }
        m
    }

    #[test]
    fn test_add_cancellation() {
        let a = matrix(2, 2, &[(0, 0, 5), (1, 1, 3)]);
        let b = matrix(2, 2, &[(0, 0, -5), (0, 1, 7)]);

        let sum = a.add(&b).unwrap();
        // The (0,0) entries cancel and must not be stored.
        assert_eq!(sum.nnz(), 2);
        assert_eq!(sum.get(0, 1), 7);
        assert_eq!(sum.get(1, 1), 3);
        assert_eq!(sum.get(0, 0), 0);

        let mut stored: alloc::vec::Vec<(Coord, i64)> = sum.iter().collect();
        stored.sort_by_key(|(coord, _)| (coord.row, coord.col));
        assert_eq!(
            stored,
            alloc::vec![(Coord::new(0, 1), 7), (Coord::new(1, 1), 3)]
        );
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = SparseMatrix::with_dims(2, 2);
        let b = SparseMatrix::with_dims(2, 3);
        assert_eq!(a.add(&b), Err(MatrixError::DimensionMismatch));
    }

    #[test]
    fn test_sub_right_only_entries_negated() {
        let a = matrix(2, 2, &[(0, 0, 4)]);
        let b = matrix(2, 2, &[(0, 0, 1), (1, 0, 6)]);

        let diff = a.sub(&b).unwrap();
        assert_eq!(diff.get(0, 0), 3);
        assert_eq!(diff.get(1, 0), -6);
        assert_eq!(diff.nnz(), 2);
    }

    #[test]
    fn test_sub_self_is_zero() {
        let a = matrix(3, 3, &[(0, 0, 2), (1, 2, -9), (2, 2, 7)]);
        let diff = a.sub(&a).unwrap();
        assert_eq!(diff.nnz(), 0);
        assert_eq!(diff.dimensions(), (3, 3));
    }

    #[test]
    fn test_sub_dimension_mismatch() {
        let a = SparseMatrix::with_dims(3, 2);
        let b = SparseMatrix::with_dims(2, 2);
        assert_eq!(a.sub(&b), Err(MatrixError::DimensionMismatch));
    }

    #[test]
    fn test_mul_accumulates_across_inner_dimension() {
        let a = matrix(2, 3, &[(0, 0, 2), (0, 1, 3)]);
        let b = matrix(3, 2, &[(0, 0, 1), (1, 0, 4)]);

        let product = a.mul(&b).unwrap();
        assert_eq!(product.dimensions(), (2, 2));
        // (0,0) = 2*1 + 3*4
        assert_eq!(product.get(0, 0), 14);
        assert_eq!(product.nnz(), 1);
    }

    #[test]
    fn test_mul_by_zero_matrix() {
        let a = matrix(2, 3, &[(0, 0, 2), (1, 2, -8)]);
        let zero = SparseMatrix::with_dims(3, 4);

        let product = a.mul(&zero).unwrap();
        assert_eq!(product.dimensions(), (2, 4));
        assert_eq!(product.nnz(), 0);
    }

    #[test]
    fn test_mul_cancellation_not_stored() {
        // (0,0) accumulates 1*1 + 1*(-1) = 0 and must vanish.
        let a = matrix(1, 2, &[(0, 0, 1), (0, 1, 1)]);
        let b = matrix(2, 1, &[(0, 0, 1), (1, 0, -1)]);

        let product = a.mul(&b).unwrap();
        assert_eq!(product.nnz(), 0);
    }

    #[test]
    fn test_mul_dimension_mismatch() {
        let a = SparseMatrix::with_dims(2, 3);
        let b = SparseMatrix::with_dims(2, 3);
        assert_eq!(a.mul(&b), Err(MatrixError::DimensionMismatch));
    }

    #[test]
    fn test_add_overflow_detected() {
        let a = matrix(1, 1, &[(0, 0, i64::MAX)]);
        let b = matrix(1, 1, &[(0, 0, 1)]);
        assert_eq!(a.add(&b), Err(MatrixError::ValueOverflow));
    }

    #[test]
    fn test_sub_overflow_detected() {
        let a = matrix(1, 1, &[(0, 0, i64::MIN)]);
        let b = matrix(1, 1, &[(0, 0, 1)]);
        assert_eq!(a.sub(&b), Err(MatrixError::ValueOverflow));

        // Negating a right-only i64::MIN entry overflows too.
        let zero = SparseMatrix::with_dims(1, 1);
        let min = matrix(1, 1, &[(0, 0, i64::MIN)]);
        assert_eq!(zero.sub(&min), Err(MatrixError::ValueOverflow));
    }

    #[test]
    fn test_mul_overflow_detected() {
        let a = matrix(1, 1, &[(0, 0, i64::MAX)]);
        let b = matrix(1, 1, &[(0, 0, 2)]);
        assert_eq!(a.mul(&b), Err(MatrixError::ValueOverflow));
    }

    #[test]
    fn test_operands_not_mutated() {
        let a = matrix(2, 2, &[(0, 0, 5)]);
        let b = matrix(2, 2, &[(0, 0, -5)]);
        let before = a.clone();

        a.add(&b).unwrap();
        a.sub(&b).unwrap();
        assert_eq!(a, before);
    }

    #[test]
    fn test_add_commutativity() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let a = random_matrix(&mut rng, 4, 4);
            let b = random_matrix(&mut rng, 4, 4);
            assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }
    }

    #[test]
    fn test_add_sub_round_trip() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let a = random_matrix(&mut rng, 4, 4);
            let b = random_matrix(&mut rng, 4, 4);
            assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
        }
    }

    #[test]
    fn test_add_associativity() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..20 {
            let a = random_matrix(&mut rng, 3, 5);
            let b = random_matrix(&mut rng, 3, 5);
            let c = random_matrix(&mut rng, 3, 5);
            let left = a.add(&b).unwrap().add(&c).unwrap();
            let right = a.add(&b.add(&c).unwrap()).unwrap();
            assert_eq!(left, right);
        }
    }

    #[test]
    fn test_mul_matches_dense_reference() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..10 {
            let a = random_matrix(&mut rng, 3, 4);
            let b = random_matrix(&mut rng, 4, 2);
            let product = a.mul(&b).unwrap();

            for row in 0..3 {
                for col in 0..2 {
                    let mut expected = 0;
                    for k in 0..4 {
                        expected += a.get(row, k) * b.get(k, col);
                    }
                    assert_eq!(product.get(row, col), expected);
                }
            }
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Operation::from_code("1"), Ok(Operation::Add));
        assert_eq!(Operation::from_code("2"), Ok(Operation::Sub));
        assert_eq!(Operation::from_code("3"), Ok(Operation::Mul));

        assert_eq!(Operation::from_code("9"), Err(MatrixError::InvalidOperation));
        assert_eq!(Operation::from_code("0"), Err(MatrixError::InvalidOperation));
        assert_eq!(Operation::from_code(""), Err(MatrixError::InvalidOperation));
        assert_eq!(Operation::from_code("add"), Err(MatrixError::InvalidOperation));
    }

    #[test]
    fn test_apply_dispatch() {
        let a = matrix(2, 2, &[(0, 0, 6)]);
        let b = matrix(2, 2, &[(0, 0, 2)]);

        assert_eq!(Operation::Add.apply(&a, &b).unwrap().get(0, 0), 8);
        assert_eq!(Operation::Sub.apply(&a, &b).unwrap().get(0, 0), 4);
        assert_eq!(Operation::Mul.apply(&a, &b).unwrap().get(0, 0), 12);
    }
}
