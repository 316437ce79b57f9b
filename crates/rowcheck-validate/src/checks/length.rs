//! Maximum length checks.
//!
//! Length is counted in characters. Null values never exceed a limit.

use crate::finding::Finding;
use crate::rules::{MaxLength, RuleGroup};
use crate::shape::RecordShape;

use super::field_value;

/// One finding per (column, limit) pair with at least one longer value.
pub fn check<R>(rule: &RuleGroup<MaxLength>, shape: &RecordShape<R>, records: &[R]) -> Vec<Finding> {
    let mut findings = Vec::new();

    for entry in &rule.entries {
        let accessor = shape.accessor(&entry.field);
        let exceeded = records.iter().any(|record| {
            field_value(accessor, record).is_some_and(|v| v.chars().count() > entry.max)
        });
        if exceeded {
            findings.push(Finding::length_exceeded(
                rule.severity,
                &entry.field,
                entry.max,
            ));
        }
    }

    findings
}
