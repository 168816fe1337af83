//! Error types for the cleaning pipeline.
//!
//! Pipeline steps return [`CleanError`]; `main` wraps it with `anyhow` context.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    /// Filesystem I/O error on open or write.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed delimited text reported by the CSV parser or writer.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row carries more fields than the header declares.
    #[error("line {line}: expected {expected} fields, saw {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A column the cleaner needs is not in the header.
    #[error("column {column:?} not found in dataset")]
    MissingColumn { column: String },
}

pub type Result<T> = std::result::Result<T, CleanError>;

impl CleanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}
