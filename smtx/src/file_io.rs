//! File I/O for matrix text files
//!
//! This module provides functionality for reading and writing sparse
//! matrices to/from text files on disk, mapping filesystem failures onto
//! the shared error set.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use smtx_core::{text, MatrixError, Result, SparseMatrix};

/// Load a matrix from a text file
///
/// A path that does not exist or cannot be opened yields
/// [`MatrixError::NotFound`]; a failure while reading an already-open
/// file yields [`MatrixError::Io`]. Malformed content surfaces the
/// parser's format errors unchanged.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let mut file = File::open(path.as_ref()).map_err(|_| MatrixError::NotFound)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|_| MatrixError::Io)?;
    text::parse_str(&contents)
}

/// Write a matrix to a text file
///
/// Intermediate directories on the output path are created as needed.
pub fn save_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|_| MatrixError::Io)?;
        }
    }
    fs::write(path, text::to_text(matrix)).map_err(|_| MatrixError::Io)
}
