//! CSV header normalization and field matching.

use csv::StringRecord;

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Rename header columns to the matching record field.
///
/// Each header that equals one of `fields` ignoring case is replaced by the
/// field's own spelling; other headers are kept (normalized) so that extra
/// columns do not shift positions.
pub fn canonical_headers(headers: &StringRecord, fields: &[&str]) -> StringRecord {
    headers
        .iter()
        .map(|header| {
            let header = normalize_header(header);
            let lowered = header.to_lowercase();
            fields
                .iter()
                .find(|field| field.to_lowercase() == lowered)
                .map_or(header, |field| (*field).to_string())
        })
        .collect()
}
