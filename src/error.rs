use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AvailabilityError>;

/// Why a single line of a hotel or booking listing was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected {expected} comma-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("hotel name is empty")]
    EmptyName,

    #[error("capacity {0:?} is not a non-negative integer")]
    Capacity(String),

    #[error("date {0:?} is not a valid YYYY-MM-DD calendar date")]
    Date(String),
}

#[derive(Debug, Error)]
pub enum AvailabilityError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {kind}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        kind: RecordError,
    },

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("{0}")]
    Config(String),

    #[error("could not encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

impl AvailabilityError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, line: usize, kind: RecordError) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            kind,
        }
    }
}
