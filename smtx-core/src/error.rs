//! Error types for sparse matrix operations

/// Errors that can occur while loading, combining, or saving matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Input file does not exist or could not be opened
    NotFound,
    /// Read or write failure on an already-open source
    Io,
    /// Malformed `rows=`/`cols=` header line
    InvalidHeader,
    /// Malformed `(row, col, value)` element line
    InvalidEntry,
    /// Operand shapes incompatible for the requested operation
    DimensionMismatch,
    /// Element arithmetic overflowed the `i64` value range
    ValueOverflow,
    /// Unrecognized operation selector code
    InvalidOperation,
    /// Wrong number of input files for a batch operation
    BadArgumentCount,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            MatrixError::NotFound => "Input file not found",
            MatrixError::Io => "I/O failure while reading or writing a matrix file",
            MatrixError::InvalidHeader => "Input file has wrong format: bad rows=/cols= header",
            MatrixError::InvalidEntry => "Input file has wrong format: bad element line",
            MatrixError::DimensionMismatch => "Matrices dimensions do not match for the operation",
            MatrixError::ValueOverflow => "Element arithmetic overflowed the value range",
            MatrixError::InvalidOperation => "Invalid operation",
            MatrixError::BadArgumentCount => "There must be exactly two input files",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for MatrixError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
