//! Error kinds, split by how far a failure reaches.
//!
//! [`Error::Environment`] aborts the whole run before any file is touched;
//! [`Error::File`] only aborts the pipeline of the file it names.

use crate::model::Interval;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Internal-consistency failure while partitioning a file into sections.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("comment intervals overlap: lines {first} and {second}")]
    OverlappingIntervals { first: Interval, second: Interval },
}

/// Failure of the external highlighting process.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{program} produced invalid UTF-8 output")]
    InvalidOutput { program: String },
}

/// Everything that can go wrong while documenting a single file.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("failed to read source: {0}")]
    Read(#[source] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Highlight(#[from] HighlightError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required external tool is missing or broken.
    #[error("environment not ready: {0}")]
    Environment(String),

    #[error("{path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: FileError,
    },
}

impl Error {
    pub fn file(path: impl Into<PathBuf>, source: impl Into<FileError>) -> Self {
        Error::File {
            path: path.into(),
            source: source.into(),
        }
    }
}
