// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for robolog.
//!
//! Provides error types for topic ingestion:
//! - File access and header reading
//! - Data-row format violations
//! - Line-level I/O failures

use std::fmt;
use std::path::Path;

/// Errors that can occur while loading a topic from a CSV export.
#[derive(Debug, Clone)]
pub enum LogError {
    /// Input file could not be opened
    FileOpen {
        /// Path of the file that failed to open
        path: String,
        /// Underlying OS error message
        cause: String,
    },

    /// Header line missing or unreadable
    HeaderRead {
        /// Path of the file with the bad header
        path: String,
    },

    /// Data row carries more tokens than the schema has columns
    RowFormat {
        /// Path of the file containing the bad row
        path: String,
        /// 1-based data-line number (the header line is not counted)
        line: usize,
        /// Number of tokens found on the row
        tokens: usize,
        /// Number of columns in the schema
        columns: usize,
    },

    /// I/O failure while reading data lines
    Io(String),
}

impl LogError {
    /// Create a file-open error.
    pub fn file_open(path: impl AsRef<Path>, cause: impl Into<String>) -> Self {
        LogError::FileOpen {
            path: path.as_ref().display().to_string(),
            cause: cause.into(),
        }
    }

    /// Create a header-read error.
    pub fn header_read(path: impl AsRef<Path>) -> Self {
        LogError::HeaderRead {
            path: path.as_ref().display().to_string(),
        }
    }

    /// Create a row-format error.
    pub fn row_format(path: impl AsRef<Path>, line: usize, tokens: usize, columns: usize) -> Self {
        LogError::RowFormat {
            path: path.as_ref().display().to_string(),
            line,
            tokens,
            columns,
        }
    }

    /// True if this error aborts the whole load rather than truncating it.
    pub fn is_fatal(&self) -> bool {
        matches!(self, LogError::FileOpen { .. } | LogError::HeaderRead { .. })
    }
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::FileOpen { path, cause } => {
                write!(f, "Failed to open '{path}': {cause}")
            }
            LogError::HeaderRead { path } => {
                write!(f, "Error reading the header from '{path}'")
            }
            LogError::RowFormat {
                path,
                line,
                tokens,
                columns,
            } => write!(
                f,
                "Error converting line #{line} of '{path}': {tokens} tokens against {columns} columns"
            ),
            LogError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for LogError {}

impl From<std::io::Error> for LogError {
    fn from(err: std::io::Error) -> Self {
        LogError::Io(err.to_string())
    }
}

/// Result type for robolog operations.
pub type Result<T> = std::result::Result<T, LogError>;
