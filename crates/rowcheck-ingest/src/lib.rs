//! Tabular data ingestion for rowcheck.
//!
//! This crate is the reader side of validation. It turns a delimited text
//! file into a header row plus a sequence of decoded records, and reports
//! malformed rows through a callback instead of aborting the read.
//!
//! # Features
//!
//! - **Header Reading**: Ordered header row, BOM stripped and trimmed
//! - **Record Decoding**: Rows decoded into any serde type, with header names
//!   matched to record fields case-insensitively
//! - **Malformed Rows**: Stray quotes reported per row with the raw field text
//! - **Encodings**: Any `encoding_rs` label, BOM sniffing on by default
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rowcheck_ingest::{CsvSource, ReaderOptions, TableSource};
//!
//! let mut source = CsvSource::from_path(Path::new("customers.csv"), &ReaderOptions::default())?;
//! let headers = source.headers()?;
//! let rows: Vec<Customer> = source.read_records(&["CustomerId", "Email"], &mut |bad| {
//!     eprintln!("line {}: {}", bad.line, bad.field);
//! })?;
//! ```

mod delimited;
mod error;
mod options;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reader Configuration ===
pub use options::ReaderOptions;

// === Sources ===
pub use delimited::{CsvSource, canonical_headers, malformed_fields, normalize_header};
pub use source::{MalformedRow, TableSource};
