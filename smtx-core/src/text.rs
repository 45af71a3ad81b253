//! Text format for sparse matrices
//!
//! This module defines the line-oriented persistence format and the pure
//! string parsing and rendering functions for it, with no I/O
//! dependencies:
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Blank lines are ignored everywhere. Any malformed line aborts the
//! whole parse; no partially-built matrix ever escapes.

use alloc::string::{String, ToString};
use core::fmt;

use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;

/// Parsed header of a matrix text file
///
/// The first two non-blank lines must be `rows=<integer>` and
/// `cols=<integer>`, in that order. Whitespace around the `=` is
/// tolerated; the key and the numeric token are both checked strictly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextHeader {
    pub rows: usize,
    pub cols: usize,
}

impl TextHeader {
    /// Parse the two header lines
    pub fn parse(rows_line: &str, cols_line: &str) -> Result<Self> {
        Ok(Self {
            rows: parse_dim(rows_line, "rows")?,
            cols: parse_dim(cols_line, "cols")?,
        })
    }
}

/// Parse the text representation of a sparse matrix
///
/// Reads non-blank trimmed lines in order: the first two form the
/// header, every remaining line must be a parenthesized
/// `(row, col, value)` triple. Fails with [`MatrixError::InvalidHeader`]
/// or [`MatrixError::InvalidEntry`] on the first malformed line.
pub fn parse_str(input: &str) -> Result<SparseMatrix> {
    let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());

    let rows_line = lines.next().ok_or(MatrixError::InvalidHeader)?;
    let cols_line = lines.next().ok_or(MatrixError::InvalidHeader)?;
    let header = TextHeader::parse(rows_line, cols_line)?;

    let mut matrix = SparseMatrix::with_dims(header.rows, header.cols);
    for line in lines {
        let (row, col, value) = parse_entry(line)?;
        matrix.set(row, col, value);
    }
    Ok(matrix)
}

/// Render a matrix in the text format
///
/// Emits the header lines, then one `(row, col, value)` line per stored
/// entry in map iteration order. Callers must not rely on a particular
/// entry ordering.
pub fn to_text(matrix: &SparseMatrix) -> String {
    matrix.to_string()
}

impl SparseMatrix {
    /// Construct a matrix by parsing the text format
    ///
    /// The file-based counterpart to [`SparseMatrix::with_dims`].
    pub fn from_text(input: &str) -> Result<Self> {
        parse_str(input)
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows={}", self.rows())?;
        writeln!(f, "cols={}", self.cols())?;
        for (coord, value) in self.iter() {
            writeln!(f, "({}, {}, {})", coord.row, coord.col, value)?;
        }
        Ok(())
    }
}

/// Parse a `key=<integer>` header line against the expected key
fn parse_dim(line: &str, key: &str) -> Result<usize> {
    let (name, value) = line.split_once('=').ok_or(MatrixError::InvalidHeader)?;
    if name.trim() != key {
        return Err(MatrixError::InvalidHeader);
    }
    let value = parse_int(value).ok_or(MatrixError::InvalidHeader)?;
    usize::try_from(value).map_err(|_| MatrixError::InvalidHeader)
}

/// Parse a single `(row, col, value)` line
///
/// The trimmed line must be wrapped in exactly one parenthesis pair and
/// split into exactly three comma-separated integer tokens.
fn parse_entry(line: &str) -> Result<(usize, usize, i64)> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(MatrixError::InvalidEntry)?;

    let mut tokens = inner.split(',');
    let row = tokens.next().and_then(parse_int).ok_or(MatrixError::InvalidEntry)?;
    let col = tokens.next().and_then(parse_int).ok_or(MatrixError::InvalidEntry)?;
    let value = tokens.next().and_then(parse_int).ok_or(MatrixError::InvalidEntry)?;
    if tokens.next().is_some() {
        return Err(MatrixError::InvalidEntry);
    }

    let row = usize::try_from(row).map_err(|_| MatrixError::InvalidEntry)?;
    let col = usize::try_from(col).map_err(|_| MatrixError::InvalidEntry)?;
    Ok((row, col, value))
}

/// Strict integer parse: surrounding whitespace trimmed, nothing else
/// tolerated (no floats, no inner whitespace, no trailing junk)
fn parse_int(token: &str) -> Option<i64> {
    token.trim().parse().ok()
}
