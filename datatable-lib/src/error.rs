//! Error types

use std::io;

/// Errors produced while loading rows or configuring a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Reading the data source failed.
    #[error("failed to read table data: {0}")]
    Io(#[from] io::Error),

    /// The data source is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level document is not an array of rows.
    #[error("expected a JSON array of rows, found {found}")]
    NotAnArray { found: &'static str },

    /// An element of the row array is not an object.
    #[error("row {index} is not a JSON object")]
    RowNotObject { index: usize },

    /// Page sizes start at 1.
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(usize),
}

/// Result alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
