//! Batch pair-processing driver
//!
//! Applies one arithmetic operation to pairs of input files, writing each
//! result to its own output file. The library layer never swallows an
//! error; the batch loop reports per-pair failures and moves on to the
//! next pair.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use smtx_core::{MatrixError, Operation, Result};

use crate::file_io::{load_matrix, save_matrix};

/// One unit of batch work: two input files and an output destination
#[derive(Debug, Clone, PartialEq)]
pub struct PairJob {
    pub left: PathBuf,
    pub right: PathBuf,
    pub output: PathBuf,
}

impl PairJob {
    pub fn new(
        left: impl Into<PathBuf>,
        right: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            output: output.into(),
        }
    }
}

/// Load exactly two matrices, apply the operation, and save the result
///
/// Anything other than exactly two input paths is
/// [`MatrixError::BadArgumentCount`], raised before any matrix is
/// constructed. No output file is written unless the whole computation
/// succeeds.
pub fn process_pair(inputs: &[PathBuf], output: &Path, operation: Operation) -> Result<()> {
    if inputs.len() != 2 {
        return Err(MatrixError::BadArgumentCount);
    }

    let left = load_matrix(&inputs[0])?;
    let right = load_matrix(&inputs[1])?;
    let result = operation.apply(&left, &right)?;
    save_matrix(output, &result)
}

/// Read a batch jobs file
///
/// One job per non-blank line, three whitespace-separated paths:
/// `<left> <right> <output>`. A line with any other field count is
/// [`MatrixError::BadArgumentCount`]; a missing jobs file is
/// [`MatrixError::NotFound`].
pub fn load_jobs<P: AsRef<Path>>(path: P) -> Result<Vec<PairJob>> {
    let mut file = File::open(path.as_ref()).map_err(|_| MatrixError::NotFound)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|_| MatrixError::Io)?;

    let mut jobs = Vec::new();
    for line in contents.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let mut fields = line.split_whitespace();
        let (Some(left), Some(right), Some(output), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(MatrixError::BadArgumentCount);
        };
        jobs.push(PairJob::new(left, right, output));
    }
    Ok(jobs)
}

/// Run a batch of pair jobs, continuing past per-pair failures
///
/// Prints progress for each pair and returns the number of failed jobs.
pub fn run_batch(jobs: &[PairJob], operation: Operation) -> usize {
    let mut failures = 0;
    for job in jobs {
        println!(
            "Processing files: {}, {}",
            job.left.display(),
            job.right.display()
        );
        let inputs = [job.left.clone(), job.right.clone()];
        match process_pair(&inputs, &job.output, operation) {
            Ok(()) => println!("Result written to {}", job.output.display()),
            Err(err) => {
                eprintln!("Skipping pair ({err})");
                failures += 1;
            }
        }
    }
    failures
}
