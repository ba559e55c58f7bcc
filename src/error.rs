use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::consensus::Cohort;

#[derive(Debug, Error)]
#[error("Expected {expected} {location} but observed: {observed}")]
pub struct ParseError {
    expected: &'static str,
    observed: String,
    location: Location,
}

#[derive(Debug)]
pub enum Location {
    Unknown,
    File { path: PathBuf, line: usize },
    Record { id: String, index: usize },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Unknown => write!(f, "at unknown location"),
            Location::File { path, line } => {
                write!(f, "in file {} on line {}", path.as_path().display(), line)
            }
            Location::Record { id, index } => {
                write!(f, "for record {} at index {}", id, index)
            }
        }
    }
}

impl ParseError {
    pub fn somewhere(expected: &'static str, observed: String) -> Self {
        Self {
            expected,
            observed,
            location: Location::Unknown,
        }
    }

    pub fn file(path: PathBuf, line: usize, expected: &'static str, observed: String) -> Self {
        Self {
            expected,
            observed,
            location: Location::File { path, line },
        }
    }

    pub fn record(id: String, index: usize, expected: &'static str, observed: String) -> Self {
        Self {
            expected,
            observed,
            location: Location::Record { id, index },
        }
    }
}

#[derive(Debug, Error)]
pub struct FileError {
    path: Option<PathBuf>,
    #[source]
    source: FileErrorSource,
}

impl FileError {
    pub fn io<P: AsRef<Path>>(path: Option<P>, error: std::io::Error) -> Self {
        Self {
            path: path.map(|p| p.as_ref().to_path_buf()),
            source: error.into(),
        }
    }

    pub fn parse<P: AsRef<Path>>(path: Option<P>, error: ParseError) -> Self {
        Self {
            path: path.map(|p| p.as_ref().to_path_buf()),
            source: error.into(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "Failed to work with file {}", path.display()),
            None => write!(f, "Failed to work with anonymous file"),
        }
    }
}

#[derive(Debug, Error)]
pub enum FileErrorSource {
    #[error("Failed to parse file")]
    Parse {
        #[from]
        source: ParseError,
    },
    #[error("Failed to read/write to file")]
    IO {
        #[from]
        source: std::io::Error,
    },
}

/// Errors raised while comparing or indexing sequences
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Cannot compare sequences of different length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("Index {index} is out of range for the {cohort} sequence of length {length}")]
    IndexOutOfRange {
        cohort: Cohort,
        index: usize,
        length: usize,
    },
}

/// Catch-all error for top-level API
#[derive(Debug, Error)]
pub enum H5Error {
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[error(transparent)]
    FileError(#[from] FileError),
    #[error(transparent)]
    SequenceError(#[from] SequenceError),
    #[error("No {0} consensus available: the cohort has no sequences")]
    MissingConsensus(Cohort),
}
