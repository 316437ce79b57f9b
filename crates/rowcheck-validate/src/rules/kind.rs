//! Individual rule definitions.

use serde::{Deserialize, Serialize};

use crate::finding::Severity;

/// Accepted vocabulary for a Yes/No column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum YesNoMode {
    /// `Y` or `N`
    #[default]
    #[serde(rename = "YN")]
    Letters,
    /// `Yes` or `No`
    #[serde(rename = "YesNo")]
    Words,
}

impl YesNoMode {
    /// Check a value against the vocabulary, ignoring case.
    pub fn accepts(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        match self {
            Self::Letters => value == "y" || value == "n",
            Self::Words => value == "yes" || value == "no",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Letters => "Y/N",
            Self::Words => "Yes/No",
        }
    }
}

/// A column whose every value must equal `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedValue {
    pub field: String,
    pub value: String,
}

/// A column whose values may not be longer than `max` characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxLength {
    pub field: String,
    pub max: usize,
}

/// Column order rule. Enabled at Error severity by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnOrderRule {
    pub enforce: bool,
    pub severity: Severity,
}

impl Default for ColumnOrderRule {
    fn default() -> Self {
        Self {
            enforce: true,
            severity: Severity::Error,
        }
    }
}

/// A content rule: one severity shared by a list of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleGroup<T> {
    #[serde(default)]
    pub severity: Severity,
    pub entries: Vec<T>,
}

impl<T: PartialEq> RuleGroup<T> {
    /// Fold a later registration into `slot`.
    ///
    /// The later severity wins; entries are appended unless already present.
    pub(crate) fn merge(
        slot: &mut Option<Self>,
        severity: Severity,
        entries: impl IntoIterator<Item = T>,
    ) {
        let group = slot.get_or_insert_with(|| Self {
            severity,
            entries: Vec::new(),
        });
        group.severity = severity;
        for entry in entries {
            if !group.entries.contains(&entry) {
                group.entries.push(entry);
            }
        }
    }
}

/// Yes/No rule: a vocabulary plus the columns it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YesNoRule {
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub mode: YesNoMode,
    pub entries: Vec<String>,
}
