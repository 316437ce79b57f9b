//! The rule set and its builder methods.

use serde::{Deserialize, Serialize};

use super::kind::{AllowedValue, ColumnOrderRule, MaxLength, RuleGroup, YesNoMode, YesNoRule};
use crate::finding::Severity;

/// Create a rule set with the default configuration.
///
/// Header presence and column order are enforced; no content rules are
/// configured and the number of findings is unlimited.
pub fn configure() -> RuleSet {
    RuleSet::default()
}

/// The rules a file must satisfy.
///
/// Built by value: every `add_*` method consumes the set and returns the
/// updated one. Registering a rule kind again keeps the earlier entries,
/// adds the new ones and takes the new severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    header_required: bool,
    column_order: ColumnOrderRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    not_null: Option<RuleGroup<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    yes_no: Option<YesNoRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed_values: Option<RuleGroup<AllowedValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_length: Option<RuleGroup<MaxLength>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unique_across: Option<RuleGroup<String>>,
    max_findings: usize,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            header_required: true,
            column_order: ColumnOrderRule::default(),
            not_null: None,
            yes_no: None,
            allowed_values: None,
            max_length: None,
            unique_across: None,
            max_findings: 0,
        }
    }
}

impl RuleSet {
    /// Require every shape field to be present in the header.
    #[must_use]
    pub fn require_header(mut self, required: bool) -> Self {
        self.header_required = required;
        self
    }

    /// Configure the column order check.
    #[must_use]
    pub fn add_column_order(mut self, severity: Severity, enforce: bool) -> Self {
        self.column_order = ColumnOrderRule { enforce, severity };
        self
    }

    /// Columns that may not contain empty values.
    #[must_use]
    pub fn add_not_null<I, S>(mut self, severity: Severity, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RuleGroup::merge(&mut self.not_null, severity, fields.into_iter().map(Into::into));
        self
    }

    /// Columns restricted to a Yes/No vocabulary.
    ///
    /// The mode of the latest registration applies to all Yes/No columns.
    #[must_use]
    pub fn add_yes_no<I, S>(mut self, severity: Severity, mode: YesNoMode, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rule = self.yes_no.get_or_insert_with(|| YesNoRule {
            severity,
            mode,
            entries: Vec::new(),
        });
        rule.severity = severity;
        rule.mode = mode;
        for field in fields.into_iter().map(Into::into) {
            if !rule.entries.contains(&field) {
                rule.entries.push(field);
            }
        }
        self
    }

    /// Columns whose every value must equal the given one.
    #[must_use]
    pub fn add_allowed_values<I, F, V>(mut self, severity: Severity, pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, V)>,
        F: Into<String>,
        V: Into<String>,
    {
        let entries = pairs.into_iter().map(|(field, value)| AllowedValue {
            field: field.into(),
            value: value.into(),
        });
        RuleGroup::merge(&mut self.allowed_values, severity, entries);
        self
    }

    /// Maximum value length (in characters) per column.
    #[must_use]
    pub fn add_max_length<I, F>(mut self, severity: Severity, pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, usize)>,
        F: Into<String>,
    {
        let entries = pairs.into_iter().map(|(field, max)| MaxLength {
            field: field.into(),
            max,
        });
        RuleGroup::merge(&mut self.max_length, severity, entries);
        self
    }

    /// Columns that together must be unique across all records.
    #[must_use]
    pub fn add_unique_across<I, S>(mut self, severity: Severity, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RuleGroup::merge(
            &mut self.unique_across,
            severity,
            fields.into_iter().map(Into::into),
        );
        self
    }

    /// Cap the number of findings returned. 0 means unlimited.
    #[must_use]
    pub fn with_max_findings(mut self, max: usize) -> Self {
        self.max_findings = max;
        self
    }

    pub fn header_required(&self) -> bool {
        self.header_required
    }

    pub fn column_order(&self) -> ColumnOrderRule {
        self.column_order
    }

    pub fn not_null(&self) -> Option<&RuleGroup<String>> {
        self.not_null.as_ref()
    }

    pub fn yes_no(&self) -> Option<&YesNoRule> {
        self.yes_no.as_ref()
    }

    pub fn allowed_values(&self) -> Option<&RuleGroup<AllowedValue>> {
        self.allowed_values.as_ref()
    }

    pub fn max_length(&self) -> Option<&RuleGroup<MaxLength>> {
        self.max_length.as_ref()
    }

    pub fn unique_across(&self) -> Option<&RuleGroup<String>> {
        self.unique_across.as_ref()
    }

    pub fn max_findings(&self) -> usize {
        self.max_findings
    }

    /// Every field name referenced by a content rule, in check order.
    ///
    /// Names may repeat when several rules use the same column.
    pub fn referenced_fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        if let Some(rule) = &self.not_null {
            fields.extend(rule.entries.iter().map(String::as_str));
        }
        if let Some(rule) = &self.allowed_values {
            fields.extend(rule.entries.iter().map(|e| e.field.as_str()));
        }
        if let Some(rule) = &self.max_length {
            fields.extend(rule.entries.iter().map(|e| e.field.as_str()));
        }
        if let Some(rule) = &self.yes_no {
            fields.extend(rule.entries.iter().map(String::as_str));
        }
        if let Some(rule) = &self.unique_across {
            fields.extend(rule.entries.iter().map(String::as_str));
        }
        fields
    }

    /// Apply the findings cap.
    pub(crate) fn limit<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if self.max_findings > 0 {
            items.truncate(self.max_findings);
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = configure();
        assert!(rules.header_required());
        assert!(rules.column_order().enforce);
        assert_eq!(rules.column_order().severity, Severity::Error);
        assert!(rules.not_null().is_none());
        assert_eq!(rules.max_findings(), 0);
    }

    #[test]
    fn test_chaining_leaves_other_rules_untouched() {
        let rules = configure()
            .add_not_null(Severity::Error, ["Id"])
            .add_max_length(Severity::Information, [("Name", 30)])
            .add_column_order(Severity::Information, false);

        assert_eq!(rules.not_null().unwrap().entries, vec!["Id"]);
        assert_eq!(rules.not_null().unwrap().severity, Severity::Error);
        assert_eq!(rules.max_length().unwrap().entries[0].max, 30);
        assert!(!rules.column_order().enforce);
        assert!(rules.header_required());
    }

    #[test]
    fn test_repeated_yes_no_takes_last_mode() {
        let rules = configure()
            .add_yes_no(Severity::Error, YesNoMode::Letters, ["Active"])
            .add_yes_no(Severity::Information, YesNoMode::Words, ["Certified", "Active"]);
        let rule = rules.yes_no().unwrap();
        assert_eq!(rule.mode, YesNoMode::Words);
        assert_eq!(rule.severity, Severity::Information);
        assert_eq!(rule.entries, vec!["Active", "Certified"]);
    }

    #[test]
    fn test_repeated_allowed_values_keep_distinct_pairs() {
        let rules = configure()
            .add_allowed_values(Severity::Error, [("Country", "USA")])
            .add_allowed_values(Severity::Error, [("Country", "USA"), ("Country", "CAN")]);
        assert_eq!(rules.allowed_values().unwrap().entries.len(), 2);
    }

    #[test]
    fn test_referenced_fields_order() {
        let rules = configure()
            .add_unique_across(Severity::Error, ["U"])
            .add_not_null(Severity::Error, ["N"])
            .add_yes_no(Severity::Error, YesNoMode::Letters, ["Y"])
            .add_allowed_values(Severity::Error, [("A", "x")])
            .add_max_length(Severity::Error, [("L", 1)]);
        assert_eq!(rules.referenced_fields(), vec!["N", "A", "L", "Y", "U"]);
    }

    #[test]
    fn test_limit() {
        let rules = configure().with_max_findings(2);
        assert_eq!(rules.limit(vec![1, 2, 3, 4, 5]), vec![1, 2]);
        assert_eq!(configure().limit(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_json_round_trip() {
        let rules = configure()
            .add_not_null(Severity::Error, ["CustomerId"])
            .add_yes_no(Severity::Error, YesNoMode::Letters, ["Active"])
            .with_max_findings(10);
        let json = serde_json::to_string(&rules).unwrap();
        let parsed: RuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rules);
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let parsed: RuleSet =
            serde_json::from_str(r#"{"not_null": {"entries": ["Email"]}}"#).unwrap();
        assert!(parsed.header_required());
        assert!(parsed.column_order().enforce);
        assert_eq!(parsed.not_null().unwrap().severity, Severity::Error);
    }
}
