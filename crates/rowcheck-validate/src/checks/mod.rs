//! Validation check modules.
//!
//! Each module performs one kind of check. Structural checks look only at
//! the header; content checks look at materialized records.

pub mod header;
mod allowed;
mod length;
mod not_null;
mod unique;
mod yes_no;

use std::borrow::Cow;

use crate::finding::Finding;
use crate::rules::RuleSet;
use crate::shape::{FieldAccessor, RecordShape};
use crate::util::CaseInsensitiveSet;

/// Report configured field names the shape does not define.
///
/// One finding per distinct name (ignoring case), in check order.
pub fn unknown_fields<R>(rules: &RuleSet, shape: &RecordShape<R>) -> Vec<Finding> {
    let mut seen = CaseInsensitiveSet::new();
    rules
        .referenced_fields()
        .into_iter()
        .filter(|field| shape.accessor(field).is_none())
        .filter(|field| seen.insert(field))
        .map(Finding::unknown_field)
        .collect()
}

/// Run all content checks on materialized records.
pub fn run_content<R>(rules: &RuleSet, shape: &RecordShape<R>, records: &[R]) -> Vec<Finding> {
    let mut findings = Vec::new();

    // 1. Not-null columns
    if let Some(rule) = rules.not_null() {
        findings.extend(not_null::check(rule, shape, records));
    }

    // 2. Fixed allowed values
    if let Some(rule) = rules.allowed_values() {
        findings.extend(allowed::check(rule, shape, records));
    }

    // 3. Maximum lengths
    if let Some(rule) = rules.max_length() {
        findings.extend(length::check(rule, shape, records));
    }

    // 4. Yes/No vocabulary
    if let Some(rule) = rules.yes_no() {
        findings.extend(yes_no::check(rule, shape, records));
    }

    // 5. Composite key uniqueness
    if let Some(rule) = rules.unique_across() {
        findings.extend(unique::check(rule, shape, records));
    }

    findings
}

/// Value of an optionally resolved field. Unresolved fields read as null.
fn field_value<'a, R>(accessor: Option<&FieldAccessor<R>>, record: &'a R) -> Option<Cow<'a, str>> {
    accessor.and_then(|field| field.value(record))
}
