//! Fixed-value checks.
//!
//! Every record must carry exactly the configured value (case-sensitive).

use crate::finding::Finding;
use crate::rules::{AllowedValue, RuleGroup};
use crate::shape::RecordShape;

use super::field_value;

/// One finding per (column, value) pair with at least one differing record.
pub fn check<R>(
    rule: &RuleGroup<AllowedValue>,
    shape: &RecordShape<R>,
    records: &[R],
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for entry in &rule.entries {
        let accessor = shape.accessor(&entry.field);
        let differs = records
            .iter()
            .any(|record| field_value(accessor, record).as_deref() != Some(entry.value.as_str()));
        if differs {
            findings.push(Finding::disallowed_value(
                rule.severity,
                &entry.field,
                &entry.value,
            ));
        }
    }

    findings
}
