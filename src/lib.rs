//! Hexseq library crate
//!
//! This crate provides the core functionality for the `hexseq` CLI, which
//! writes a text file of two-digit uppercase hex byte values, one per line,
//! cycling `01, 02, ..., FF, 00, 01, ...`. It is organized into small modules:
//! `sequence` (line values and hex formatting), `writer` (file and sink
//! output), and `error` (the error type shared by both). The binary
//! `src/main.rs` calls `hexseq_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `writer::write_hex_sequence()` — write a sequence to a file.
//! - `parse_length()` — parse the length argument the way the CLI does.

pub mod error;
pub mod sequence;
pub mod writer;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::debug;

use crate::error::{HexSeqError, Result};
use crate::writer::write_hex_sequence;

const PROGRAM: &str = "hexseq";

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(
    author,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Output file (created or truncated)
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,

    /// Number of lines to write; zero or negative writes an empty file
    #[arg(allow_hyphen_values = true)]
    length: String,
}

/// The two usage lines printed when the argument count is wrong.
pub fn usage_lines() -> [String; 2] {
    [
        format!("Usage: {} <output-file> <length>", PROGRAM),
        format!("Example: {} data.hex 256", PROGRAM),
    ]
}

/// Parse the length argument into a signed line count.
///
/// Surrounding whitespace and a leading sign are accepted.
pub fn parse_length(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|source| HexSeqError::InvalidLength {
            value: input.to_string(),
            source,
        })
}

/// Run the Hexseq CLI.
///
/// This function is the high-level entrypoint used by the `hexseq` binary.
/// It takes exactly two positional arguments and no flags; anything else,
/// including `--help`, is a usage error. Argument validation happens before
/// any file is opened, so a bad invocation never touches an existing output
/// file. Log output is controlled by `RUST_LOG` and defaults to errors only.
///
/// Behavior summary:
/// - wrong argument count — print two usage lines to stdout, exit 1.
/// - invalid length or file error — print `error: ...` to stderr, exit 1.
/// - success — print a confirmation naming the file and line count.
///
/// Example:
///
/// ```no_run
/// hexseq_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::try_parse().unwrap_or_else(|_| fail(HexSeqError::Usage));

    env_logger::Builder::from_default_env().init();

    debug!("CLI: {:?}", cli);

    let length = parse_length(&cli.length).unwrap_or_else(|e| fail(e));
    let written = write_hex_sequence(&cli.output, length).unwrap_or_else(|e| fail(e));

    println!("✅ Wrote {}, {} lines total.", cli.output.display(), written);
}

fn fail(err: HexSeqError) -> ! {
    match err {
        HexSeqError::Usage => {
            for line in usage_lines() {
                println!("{}", line);
            }
        }
        e => eprintln!("error: {}", e),
    }
    process::exit(1);
}
