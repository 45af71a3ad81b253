//! SMTX - Sparse Matrix Text File Toolkit
//!
//! This library reads, combines, and writes sparse integer matrices stored
//! in a line-oriented text format.
//!
//! ## Architecture
//!
//! SMTX follows a clean core/implementation separation:
//!
//! - **smtx-core**: Pure storage model, text format, and arithmetic (no I/O)
//! - **smtx**: File I/O, the batch pair-processing driver, and the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smtx::{load_matrix, save_matrix, Operation};
//!
//! fn example() -> smtx::Result<()> {
//!     let left = load_matrix("a.txt")?;
//!     let right = load_matrix("b.txt")?;
//!
//!     let sum = Operation::Add.apply(&left, &right)?;
//!     save_matrix("results/sum.txt", &sum)?;
//!     Ok(())
//! }
//! ```
//!
//! ## File format
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (<row>, <col>, <value>)
//! ...
//! ```

// Re-export the core engine
pub use smtx_core::{
    // Storage model
    Coord, SparseMatrix,
    // Text format
    TextHeader, parse_str, to_text,
    // Arithmetic dispatch
    Operation,
    // Error handling
    MatrixError, Result,
};

// Implementation modules
pub mod batch;
pub mod file_io;

// Public exports
pub use batch::{load_jobs, process_pair, run_batch, PairJob};
pub use file_io::{load_matrix, save_matrix};
