//! Not-null checks.
//!
//! A value is null when the field is missing or the empty string.
//! Whitespace-only values are not null.

use crate::finding::Finding;
use crate::rules::RuleGroup;
use crate::shape::RecordShape;

use super::field_value;

/// One finding per column that has at least one null value.
pub fn check<R>(rule: &RuleGroup<String>, shape: &RecordShape<R>, records: &[R]) -> Vec<Finding> {
    let mut findings = Vec::new();

    for field in &rule.entries {
        let accessor = shape.accessor(field);
        let has_null = records
            .iter()
            .any(|record| field_value(accessor, record).is_none_or(|v| v.is_empty()));
        if has_null {
            findings.push(Finding::null_value(rule.severity, field));
        }
    }

    findings
}
