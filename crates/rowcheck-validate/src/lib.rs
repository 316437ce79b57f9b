//! Rule-based validation of tabular data files.
//!
//! A `RuleSet` declares what a file must satisfy:
//!
//! - **Header Presence**: every record field appears in the header
//! - **Column Order**: header columns follow the record's field order
//! - **Not Null**: columns that may not be empty
//! - **Allowed Value**: columns fixed to one exact value
//! - **Max Length**: per-column character limits
//! - **Yes/No**: columns restricted to `Y`/`N` or `Yes`/`No`
//! - **Unique Across**: composite keys that may not repeat
//!
//! Running it against a file yields every finding in one pass instead of
//! stopping at the first problem.
//!
//! # Example
//!
//! ```ignore
//! use rowcheck_validate::{configure, Record, RecordShape, FieldValue, Severity, YesNoMode};
//!
//! let rules = configure()
//!     .add_not_null(Severity::Error, ["CustomerId", "Email"])
//!     .add_yes_no(Severity::Error, YesNoMode::Letters, ["Active"])
//!     .add_max_length(Severity::Error, [("CustomerName", 30)])
//!     .add_unique_across(Severity::Information, ["CustomerId", "Email"]);
//!
//! let findings = rules.validate_file(path, &Customer::shape(), &ReaderOptions::default());
//! for finding in &findings {
//!     println!("{finding}");
//! }
//! ```

mod checks;
mod config;
mod engine;
mod finding;
mod rules;
mod shape;
mod util;

pub use checks::header::{all_columns_present, is_canonical_order};
pub use config::{ConfigError, ValidationConfig};
pub use finding::{Finding, FindingKind, Severity, error_count};
pub use rules::{
    AllowedValue, ColumnOrderRule, MaxLength, RuleGroup, RuleSet, YesNoMode, YesNoRule, configure,
};
pub use shape::{FieldAccessor, FieldValue, Record, RecordShape, Row};

// Reader types callers need to drive `RuleSet::execute` directly.
pub use rowcheck_ingest::{CsvSource, IngestError, MalformedRow, ReaderOptions, TableSource};
