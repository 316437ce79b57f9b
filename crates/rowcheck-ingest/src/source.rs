//! The reader capability the validation engine consumes.

use serde::de::DeserializeOwned;

use crate::error::Result;

/// A row the tokenizer could read but whose raw text was malformed.
///
/// The row is still decoded; this only records what was wrong with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRow {
    /// 1-based line number where the row starts.
    pub line: u64,
    /// Raw text of the offending field, quotes included. For a row whose
    /// field count differs from the header, the whole row.
    pub field: String,
}

/// A tabular source: a header row followed by data rows.
pub trait TableSource {
    /// Ordered header row.
    fn headers(&mut self) -> Result<Vec<String>>;

    /// Decode every data row into `R`.
    ///
    /// Header columns that match one of `fields` case-insensitively are
    /// renamed to that field before decoding, so `R` sees the canonical
    /// names regardless of source casing or column order.
    /// `on_malformed` is called once per malformed row and decoding carries
    /// on with the next row. Rows with missing fields decode them as empty;
    /// extra fields are ignored.
    fn read_records<R: DeserializeOwned>(
        &mut self,
        fields: &[&str],
        on_malformed: &mut dyn FnMut(MalformedRow),
    ) -> Result<Vec<R>>;
}
