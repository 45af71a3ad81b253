use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use smtx::{load_jobs, process_pair, run_batch, Operation};

#[derive(Parser)]
#[command(author, version)]
#[command(about = "SMTX CLI - Add, subtract, or multiply sparse matrix text files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply one operation to a single pair of input files
    Pair {
        /// Operation code: 1 = addition, 2 = subtraction, 3 = multiplication
        operation: String,

        /// First input matrix file
        left: PathBuf,

        /// Second input matrix file
        right: PathBuf,

        /// Output file for the result
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Apply one operation to every pair listed in a jobs file
    Batch {
        /// Operation code: 1 = addition, 2 = subtraction, 3 = multiplication
        operation: String,

        /// Jobs file with one `<left> <right> <output>` line per pair
        jobs: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Pair {
            operation,
            left,
            right,
            output,
        } => {
            if let Err(err) = run_pair(operation, left, right, output) {
                eprintln!("error: {err}");
                process::exit(1);
            }
        }
        Commands::Batch { operation, jobs } => match run_jobs_file(operation, jobs) {
            Ok(0) => {}
            Ok(failures) => {
                eprintln!("error: {failures} pair(s) failed");
                process::exit(1);
            }
            Err(err) => {
                eprintln!("error: {err}");
                process::exit(1);
            }
        },
    }
}

fn run_pair(code: &str, left: &Path, right: &Path, output: &Path) -> smtx::Result<()> {
    let operation = Operation::from_code(code)?;
    println!("Processing files: {}, {}", left.display(), right.display());

    let inputs = [left.to_path_buf(), right.to_path_buf()];
    process_pair(&inputs, output, operation)?;

    println!("Result written to {}", output.display());
    Ok(())
}

fn run_jobs_file(code: &str, jobs_path: &Path) -> smtx::Result<usize> {
    let operation = Operation::from_code(code)?;
    let jobs = load_jobs(jobs_path)?;
    Ok(run_batch(&jobs, operation))
}
