//! File-based validation configuration.
//!
//! A JSON document naming the expected columns, the rule set and the reader
//! options:
//!
//! ```json
//! {
//!   "columns": ["CustomerId", "CustomerName", "Email", "Active"],
//!   "rules": {
//!     "not_null": { "entries": ["CustomerId", "Email"] },
//!     "yes_no": { "mode": "YN", "entries": ["Active"] },
//!     "max_findings": 20
//!   },
//!   "reader": { "delimiter": ";" }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rowcheck_ingest::{IngestError, ReaderOptions};

use crate::finding::Finding;
use crate::rules::RuleSet;
use crate::shape::{RecordShape, Row};

/// Errors loading a validation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file not found.
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read config file.
    #[error("failed to read config {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config is not valid JSON or does not match the schema.
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Config lists no columns.
    #[error("config {path} must list at least one column")]
    NoColumns { path: PathBuf },

    /// Reader options the tokenizer cannot use.
    #[error("invalid reader options in config {path}: {source}")]
    Reader {
        path: PathBuf,
        #[source]
        source: IngestError,
    },
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Columns, rules and reader options for validating one kind of file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Expected columns in canonical order.
    pub columns: Vec<String>,
    #[serde(default)]
    pub rules: RuleSet,
    #[serde(default)]
    pub reader: ReaderOptions,
}

impl ValidationConfig {
    /// Load and check a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::from_json(&text, path)
    }

    /// Parse a JSON config; `origin` is only used in error messages.
    pub fn from_json(text: &str, origin: &Path) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            source: e,
        })?;
        if config.columns.is_empty() {
            return Err(ConfigError::NoColumns {
                path: origin.to_path_buf(),
            });
        }
        config.reader.check().map_err(|e| ConfigError::Reader {
            path: origin.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(
            path = %origin.display(),
            columns = config.columns.len(),
            "loaded validation config"
        );
        Ok(config)
    }

    /// Dynamic record shape over the configured columns.
    pub fn shape(&self) -> RecordShape<Row> {
        RecordShape::from_columns(self.columns.iter().cloned())
    }

    /// Validate one file with this configuration.
    pub fn validate_file(&self, path: &Path) -> Vec<Finding> {
        self.rules.validate_file(path, &self.shape(), &self.reader)
    }
}
