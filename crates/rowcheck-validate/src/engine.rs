//! Validation engine.
//!
//! Runs a `RuleSet` against one tabular source in two phases:
//!
//! 1. **Structural**: header presence (the only hard stop) and column order
//! 2. **Content**: materialize records, then not-null, allowed value,
//!    max length, Yes/No and uniqueness checks
//!
//! Any fault while reading or decoding replaces the findings collected so
//! far with a single fatal finding. Nothing is ever returned as an error.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info_span, warn};

use rowcheck_ingest::{CsvSource, IngestError, ReaderOptions, TableSource};

use crate::checks::{self, header};
use crate::finding::Finding;
use crate::rules::RuleSet;
use crate::shape::RecordShape;

impl RuleSet {
    /// Validate `source` against `shape`.
    ///
    /// Findings are in discovery order and capped at `max_findings`.
    pub fn execute<R, S>(&self, source: &mut S, shape: &RecordShape<R>) -> Vec<Finding>
    where
        R: DeserializeOwned,
        S: TableSource,
    {
        let span = info_span!("execute", fields = shape.len());
        let _guard = span.enter();

        let findings = match run(self, source, shape) {
            Ok(findings) => findings,
            Err(error) => {
                warn!(%error, "validation aborted");
                vec![Finding::fatal(&error)]
            }
        };
        debug!(findings = findings.len(), "validation finished");
        self.limit(findings)
    }

    /// Open `path` and validate it.
    ///
    /// A file that cannot be opened or decoded yields the fatal finding.
    pub fn validate_file<R>(
        &self,
        path: &Path,
        shape: &RecordShape<R>,
        options: &ReaderOptions,
    ) -> Vec<Finding>
    where
        R: DeserializeOwned,
    {
        match CsvSource::from_path(path, options) {
            Ok(mut source) => self.execute(&mut source, shape),
            Err(error) => self.open_failed(&error),
        }
    }

    /// Read `reader` to the end and validate it.
    pub fn validate_reader<R, T>(
        &self,
        reader: T,
        shape: &RecordShape<R>,
        options: &ReaderOptions,
    ) -> Vec<Finding>
    where
        R: DeserializeOwned,
        T: Read,
    {
        match CsvSource::from_reader(reader, options) {
            Ok(mut source) => self.execute(&mut source, shape),
            Err(error) => self.open_failed(&error),
        }
    }

    fn open_failed(&self, error: &IngestError) -> Vec<Finding> {
        warn!(%error, "could not open source");
        self.limit(vec![Finding::fatal(error)])
    }
}

fn run<R, S>(
    rules: &RuleSet,
    source: &mut S,
    shape: &RecordShape<R>,
) -> Result<Vec<Finding>, IngestError>
where
    R: DeserializeOwned,
    S: TableSource,
{
    let mut findings = Vec::new();
    let required = shape.names();
    let headers = source.headers()?;

    // 1. Header presence (hard stop)
    if rules.header_required() && !header::all_columns_present(shape, &headers) {
        debug!(?headers, "required columns missing from header");
        findings.push(Finding::missing_headers(&required));
        return Ok(findings);
    }

    // 2. Column order
    let order = rules.column_order();
    if order.enforce && !header::is_canonical_order(shape, &headers) {
        debug!(?headers, "header not in canonical order");
        findings.push(Finding::column_order(order.severity, &required));
    }

    // 3. Materialize records; malformed rows are reported, not dropped
    let mut malformed = Vec::new();
    let records: Vec<R> = source.read_records(&required, &mut |row| malformed.push(row))?;
    debug!(
        records = records.len(),
        malformed = malformed.len(),
        "records materialized"
    );
    findings.extend(malformed.iter().map(|row| Finding::malformed_row(&row.field)));
    findings.extend(checks::unknown_fields(rules, shape));

    // 4-8. Content checks
    findings.extend(checks::run_content(rules, shape, &records));

    Ok(findings)
}
