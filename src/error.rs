use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the hexseq library and CLI.
#[derive(Debug, Error)]
pub enum HexSeqError {
    /// Wrong number of command-line arguments
    #[error("expected exactly two arguments: <output-file> <length>")]
    Usage,

    /// The length argument is not an integer
    #[error("invalid length {value:?}: {source}")]
    InvalidLength {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The output file could not be created or written
    #[error("failed to write {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HexSeqError>;
