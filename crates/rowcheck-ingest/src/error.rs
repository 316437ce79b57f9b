//! Error types for tabular data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a tabular source.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("could not find file {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read from a non-file stream.
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    // === Encoding Errors ===
    /// The configured encoding label is not known to `encoding_rs`.
    #[error("unsupported encoding '{label}'")]
    UnsupportedEncoding { label: String },

    // === Option Errors ===
    /// Delimiter or quote is not a single-byte ASCII character.
    #[error("{name} must be an ASCII character, got {character:?}")]
    InvalidSeparator { name: &'static str, character: char },

    // === CSV Parsing Errors ===
    /// The CSV tokenizer rejected the input.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A row could not be converted into the requested record type.
    #[error("failed to decode row at line {line}: {message}")]
    Decode { line: u64, message: String },
}

impl IngestError {
    /// Map an I/O error on `path`, distinguishing a missing file.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source: err }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
