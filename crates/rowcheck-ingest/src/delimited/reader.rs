//! CSV source over decoded in-memory text.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use encoding_rs::Encoding;
use serde::de::DeserializeOwned;

use crate::error::{IngestError, Result};
use crate::options::ReaderOptions;
use crate::source::{MalformedRow, TableSource};

use super::header::{canonical_headers, normalize_header};
use super::quotes::malformed_fields;

/// A CSV file or stream, fully read and decoded to text on open.
///
/// The underlying file handle is closed before the constructor returns, so
/// a `CsvSource` never holds an open descriptor.
#[derive(Debug)]
pub struct CsvSource {
    text: String,
    options: ReaderOptions,
    path: Option<PathBuf>,
}

impl CsvSource {
    /// Open and decode a file.
    pub fn from_path(path: &Path, options: &ReaderOptions) -> Result<Self> {
        options.check()?;
        let mut file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| IngestError::from_io(path, e))?;
        let text = decode(&bytes, &options.encoding)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded CSV source");
        Ok(Self {
            text,
            options: options.clone(),
            path: Some(path.to_path_buf()),
        })
    }

    /// Read and decode an arbitrary stream.
    pub fn from_reader<R: Read>(mut reader: R, options: &ReaderOptions) -> Result<Self> {
        options.check()?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(IngestError::Read)?;
        Ok(Self {
            text: decode(&bytes, &options.encoding)?,
            options: options.clone(),
            path: None,
        })
    }

    /// Wrap already-decoded text.
    ///
    /// Options are not checked here; a non-ASCII separator falls back to
    /// its default.
    pub fn from_text(text: impl Into<String>, options: &ReaderOptions) -> Self {
        let text = text.into();
        let text = match text.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => text,
        };
        Self {
            text,
            options: options.clone(),
            path: None,
        }
    }

    /// Path this source was opened from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn reader(&self) -> csv::Reader<&[u8]> {
        ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.options.delimiter_byte())
            .quote(self.options.quote_byte())
            .trim(if self.options.trim { Trim::All } else { Trim::None })
            .from_reader(self.text.as_bytes())
    }
}

impl TableSource for CsvSource {
    fn headers(&mut self) -> Result<Vec<String>> {
        let mut reader = self.reader();
        let headers = reader.headers()?;
        Ok(headers.iter().map(normalize_header).collect())
    }

    fn read_records<R: DeserializeOwned>(
        &mut self,
        fields: &[&str],
        on_malformed: &mut dyn FnMut(MalformedRow),
    ) -> Result<Vec<R>> {
        let delimiter = self.options.delimiter_byte();
        let quote = self.options.quote_byte();
        let mut reader = self.reader();
        let headers = canonical_headers(reader.headers()?, fields);

        let width = headers.len();
        let mut rows = Vec::new();
        let mut record = StringRecord::new();
        while reader.read_record(&mut record)? {
            let line = record.position().map_or(0, csv::Position::line);
            let start = record.position().map_or(0, |p| p.byte() as usize);
            let end = reader.position().byte() as usize;
            let raw = self.text.get(start..end).unwrap_or_default();

            for field in malformed_fields(raw, delimiter, quote) {
                tracing::warn!(line, "malformed field in CSV row");
                on_malformed(MalformedRow { line, field });
            }

            // Ragged rows are reported whole and decoded at header width.
            let decoded = if record.len() == width {
                record.deserialize::<R>(Some(&headers))
            } else {
                tracing::warn!(line, fields = record.len(), expected = width, "ragged CSV row");
                on_malformed(MalformedRow {
                    line,
                    field: raw.trim_end_matches(['\r', '\n']).to_string(),
                });
                fit_width(&record, width).deserialize::<R>(Some(&headers))
            };
            let row = decoded.map_err(|e| IngestError::Decode {
                line,
                message: e.to_string(),
            })?;
            rows.push(row);
        }

        tracing::debug!(rows = rows.len(), "decoded CSV rows");
        Ok(rows)
    }
}

/// Cut or pad `record` with empty fields to exactly `width` fields.
fn fit_width(record: &StringRecord, width: usize) -> StringRecord {
    let mut fitted: StringRecord = record.iter().take(width).collect();
    while fitted.len() < width {
        fitted.push_field("");
    }
    fitted
}

/// Decode raw bytes, honouring a BOM before the configured label.
fn decode(bytes: &[u8], label: &str) -> Result<String> {
    let encoding =
        Encoding::for_label(label.as_bytes()).ok_or_else(|| IngestError::UnsupportedEncoding {
            label: label.to_string(),
        })?;
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(
            encoding = used.name(),
            "input contained invalid byte sequences; replaced with U+FFFD"
        );
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Person {
        id: String,
        name: Option<String>,
    }

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    fn read_people(source: &mut CsvSource) -> (Vec<Person>, Vec<MalformedRow>) {
        let mut bad = Vec::new();
        let rows = source
            .read_records::<Person>(&["id", "name"], &mut |row| bad.push(row))
            .unwrap();
        (rows, bad)
    }

    #[test]
    fn test_headers_from_file() {
        let file = create_temp_csv(b"A, B ,C\n1,2,3\n");
        let mut source = CsvSource::from_path(file.path(), &ReaderOptions::default()).unwrap();
        assert_eq!(source.headers().unwrap(), vec!["A", "B", "C"]);
        assert_eq!(source.path(), Some(file.path()));
    }

    #[test]
    fn test_headers_with_bom() {
        let file = create_temp_csv("\u{feff}A,B\n1,2\n".as_bytes());
        let mut source = CsvSource::from_path(file.path(), &ReaderOptions::default()).unwrap();
        assert_eq!(source.headers().unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_input_has_no_headers() {
        let mut source = CsvSource::from_text("", &ReaderOptions::default());
        assert!(source.headers().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = CsvSource::from_path(Path::new("/definitely/not/here.csv"), &ReaderOptions::default())
            .unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_unknown_encoding() {
        let options = ReaderOptions::default().with_encoding("no-such-charset");
        let err = CsvSource::from_reader(&b"a\n1\n"[..], &options).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedEncoding { .. }));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected_on_open() {
        let options = ReaderOptions::default().with_delimiter('§');
        let err = CsvSource::from_reader(&b"a\n1\n"[..], &options).unwrap_err();
        assert!(matches!(err, IngestError::InvalidSeparator { name: "delimiter", .. }));
    }

    #[test]
    fn test_latin1_input() {
        let options = ReaderOptions::default().with_encoding("windows-1252");
        let mut source = CsvSource::from_reader(&b"id,name\n1,Jos\xe9\n"[..], &options).unwrap();
        let (rows, _) = read_people(&mut source);
        assert_eq!(rows[0].name.as_deref(), Some("José"));
    }

    #[test]
    fn test_records_case_insensitive_any_order() {
        let mut source = CsvSource::from_text("NAME,ID\nAnn,1\n,2\n", &ReaderOptions::default());
        let (rows, bad) = read_people(&mut source);
        assert!(bad.is_empty());
        assert_eq!(
            rows,
            vec![
                Person {
                    id: "1".to_string(),
                    name: Some("Ann".to_string())
                },
                Person {
                    id: "2".to_string(),
                    name: None
                },
            ]
        );
    }

    #[test]
    fn test_crlf_and_custom_delimiter() {
        let options = ReaderOptions::default().with_delimiter(';');
        let mut source = CsvSource::from_text("id;name\r\n1;Ann\r\n2;Bob\r\n", &options);
        let (rows, _) = read_people(&mut source);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name.as_deref(), Some("Bob"));
    }

    #[test]
    fn test_malformed_row_reported_and_kept() {
        let mut source = CsvSource::from_text(
            "id,name\n1,Ann \"A\" Smith\n2,Bob\n",
            &ReaderOptions::default(),
        );
        let (rows, bad) = read_people(&mut source);
        assert_eq!(rows.len(), 2);
        assert_eq!(bad.len(), 1);
        assert_eq!(bad[0].field, "Ann \"A\" Smith");
        assert_eq!(bad[0].line, 2);
    }

    #[test]
    fn test_decode_failure_is_error() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Counted {
            id: u32,
        }
        let mut source = CsvSource::from_text("id\nabc\n", &ReaderOptions::default());
        let result = source.read_records::<Counted>(&["id"], &mut |_| {});
        assert!(matches!(result, Err(IngestError::Decode { line: 2, .. })));
    }

    #[test]
    fn test_ragged_rows_reported_and_kept() {
        let mut source = CsvSource::from_text(
            "id,name\n1\n2,Bob,extra\n3,Cy\n",
            &ReaderOptions::default(),
        );
        let (rows, bad) = read_people(&mut source);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].id, "1");
        assert_eq!(rows[0].name, None);
        assert_eq!(rows[1].name.as_deref(), Some("Bob"));
        assert_eq!(rows[2].name.as_deref(), Some("Cy"));
        assert_eq!(
            bad,
            vec![
                MalformedRow {
                    line: 2,
                    field: "1".to_string()
                },
                MalformedRow {
                    line: 3,
                    field: "2,Bob,extra".to_string()
                },
            ]
        );
    }
}
