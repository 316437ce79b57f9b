//! Yes/No vocabulary checks.

use crate::finding::Finding;
use crate::rules::YesNoRule;
use crate::shape::RecordShape;

use super::field_value;

/// One finding per column with a value outside the vocabulary.
///
/// Null values are outside every vocabulary.
pub fn check<R>(rule: &YesNoRule, shape: &RecordShape<R>, records: &[R]) -> Vec<Finding> {
    let mut findings = Vec::new();

    for field in &rule.entries {
        let accessor = shape.accessor(field);
        let invalid = records
            .iter()
            .any(|record| !field_value(accessor, record).is_some_and(|v| rule.mode.accepts(&v)));
        if invalid {
            findings.push(Finding::yes_no(rule.severity, field, rule.mode.label()));
        }
    }

    findings
}
