//! Delimited text (CSV) reading.

mod header;
mod quotes;
mod reader;

pub use header::{canonical_headers, normalize_header};
pub use quotes::malformed_fields;
pub use reader::CsvSource;
