//! Reader configuration.

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// How a delimited text source is tokenized and decoded.
///
/// Line endings are not configurable: LF, CRLF and lone CR all terminate a
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Field delimiter (default `,`).
    pub delimiter: char,
    /// Quote character (default `"`).
    pub quote: char,
    /// `encoding_rs` label of the input encoding (default `utf-8`).
    ///
    /// A byte order mark in the input always takes precedence.
    pub encoding: String,
    /// Trim surrounding whitespace from every field.
    pub trim: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            encoding: "utf-8".to_string(),
            trim: false,
        }
    }
}

impl ReaderOptions {
    /// Set the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character.
    #[must_use]
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Set the input encoding label.
    #[must_use]
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = label.into();
        self
    }

    /// Enable or disable field trimming.
    #[must_use]
    pub fn with_trim(mut self, enable: bool) -> Self {
        self.trim = enable;
        self
    }

    /// Reject separators the tokenizer cannot use.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeparator` for a non-ASCII delimiter or quote.
    pub fn check(&self) -> Result<()> {
        for (name, character) in [("delimiter", self.delimiter), ("quote", self.quote)] {
            if !character.is_ascii() {
                return Err(IngestError::InvalidSeparator { name, character });
            }
        }
        Ok(())
    }

    /// Delimiter as a byte. Non-ASCII delimiters fall back to `,`.
    pub(crate) fn delimiter_byte(&self) -> u8 {
        ascii_byte(self.delimiter).unwrap_or(b',')
    }

    /// Quote as a byte. Non-ASCII quotes fall back to `"`.
    pub(crate) fn quote_byte(&self) -> u8 {
        ascii_byte(self.quote).unwrap_or(b'"')
    }
}

fn ascii_byte(c: char) -> Option<u8> {
    if c.is_ascii() {
        Some(c as u8)
    } else {
        tracing::warn!(character = %c, "non-ASCII separator ignored");
        None
    }
}
