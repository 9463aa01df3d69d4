//! Error types for sheet-printer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sheet-printer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input path does not resolve to a file.
    FileNotFound,
    /// The file exists but is not a readable spreadsheet.
    Format,
    /// A sheet or column selector is out of range.
    Index,
    /// Anything else on the I/O side, including output serialization.
    Io,
}

/// Errors that can occur while reading or printing a spreadsheet.
#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Unable to parse spreadsheet file {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("No worksheets found in file: {}", path.display())]
    NoSheets { path: PathBuf },

    #[error("Sheet index {index} out of range ({count} sheets available)")]
    SheetIndex { index: usize, count: usize },

    #[error("No sheet named '{name}' (available: {})", available.join(", "))]
    SheetName { name: String, available: Vec<String> },

    #[error("Column index {index} out of range ({count} columns available)")]
    ColumnIndex { index: usize, count: usize },

    #[error("Invalid column selector: '{0}'")]
    InvalidColumn(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileNotFound { .. } => ErrorKind::FileNotFound,
            Error::Format { .. } | Error::NoSheets { .. } => ErrorKind::Format,
            Error::SheetIndex { .. }
            | Error::SheetName { .. }
            | Error::ColumnIndex { .. }
            | Error::InvalidColumn(_) => ErrorKind::Index,
            Error::Io(_) | Error::Json(_) => ErrorKind::Io,
        }
    }
}
