use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors of the shell around the sort. Sorting and validation themselves cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to write standard output: {0}")]
    Stdout(#[source] io::Error),

    #[error("non-numeric value {token:?} at position {position}")]
    NotAnInteger { token: String, position: usize },

    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("sorted output of {len} values is not in non-decreasing order")]
    NotSorted { len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
