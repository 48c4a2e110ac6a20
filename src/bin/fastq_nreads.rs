//! Count reads in FASTQ(.gz) files.
//!
//! Prints `<reads>\t<file>` per file. By default reads are counted from the
//! line count; `--parse` reads every record instead.

use clap::Parser;
use illumina_fastq_reader::{FastqError, FastqReader, count_reads};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "fastq_nreads", version, about = "Count reads in FASTQ(.gz) files")]
struct Args {
    /// FASTQ files; `.gz` files are decompressed
    #[arg(required = true, num_args = 1..)]
    inputs: Vec<PathBuf>,

    /// Parse every record instead of counting lines
    #[arg(long, short = 'p')]
    parse: bool,
}

fn count_by_parsing(path: &Path) -> Result<u64, FastqError> {
    let mut n = 0u64;
    for rec in FastqReader::from_path(path)? {
        rec?;
        n += 1;
    }
    Ok(n)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut status = ExitCode::SUCCESS;
    for path in &args.inputs {
        let counted = if args.parse {
            count_by_parsing(path)
        } else {
            count_reads(path)
        };
        match counted {
            Ok(n) => println!("{n}\t{}", path.display()),
            Err(err) => {
                eprintln!("{}: {err}", path.display());
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
