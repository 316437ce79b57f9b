//! Composite key uniqueness.
//!
//! The key is the configured columns' values concatenated without a
//! separator, so `("ab", "c")` and `("a", "bc")` collide.

use std::collections::HashSet;

use crate::finding::Finding;
use crate::rules::RuleGroup;
use crate::shape::RecordShape;

use super::field_value;

/// At most one finding: the scan stops at the first repeated key.
pub fn check<R>(rule: &RuleGroup<String>, shape: &RecordShape<R>, records: &[R]) -> Vec<Finding> {
    if rule.entries.is_empty() {
        return Vec::new();
    }

    let accessors: Vec<_> = rule
        .entries
        .iter()
        .map(|field| shape.accessor(field))
        .collect();
    let mut seen = HashSet::with_capacity(records.len());

    for record in records {
        let key: String = accessors
            .iter()
            .map(|accessor| field_value(*accessor, record).unwrap_or_default())
            .collect();
        if !seen.insert(key) {
            return vec![Finding::duplicate_key(rule.severity, &rule.entries)];
        }
    }

    Vec::new()
}
