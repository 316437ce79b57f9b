//! Validation findings.
//!
//! A `Finding` is one reported outcome of a run. Messages are built here so
//! every check words its result the same way.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Finding severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Severity {
    /// Hard failure
    #[default]
    Error,
    /// Advisory only
    Information,
}

impl Severity {
    /// Parse severity from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "information" | "info" => Some(Self::Information),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Information => "Information",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingKind {
    // Structural checks
    /// Header is missing one or more shape fields
    MissingHeaders,
    /// Header columns are not in canonical order
    ColumnOrder,

    // Materialization
    /// Row text contained a stray quote
    MalformedRow,
    /// A configured field does not exist on the record shape
    UnknownField,

    // Content checks
    NullValue,
    DisallowedValue,
    LengthExceeded,
    YesNoViolation,
    DuplicateKey,

    /// Unexpected fault; replaces every other finding of the run
    Fatal,
}

impl FindingKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingHeaders => "Missing headers",
            Self::ColumnOrder => "Column order",
            Self::MalformedRow => "Malformed row",
            Self::UnknownField => "Unknown field",
            Self::NullValue => "Null value",
            Self::DisallowedValue => "Disallowed value",
            Self::LengthExceeded => "Length exceeded",
            Self::YesNoViolation => "Yes/No violation",
            Self::DuplicateKey => "Duplicate key",
            Self::Fatal => "Fatal",
        }
    }
}

/// One reported validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    severity: Severity,
    kind: FindingKind,
    message: String,
}

impl Finding {
    /// Create a finding with an arbitrary message.
    pub fn new(severity: Severity, kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            severity,
            kind,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn kind(&self) -> FindingKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True for Error severity.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub(crate) fn missing_headers(required: &[&str]) -> Self {
        Self::new(
            Severity::Error,
            FindingKind::MissingHeaders,
            format!(
                "Missing one or more column headers. Required columns: {}",
                required.join(", ")
            ),
        )
    }

    pub(crate) fn column_order(severity: Severity, required: &[&str]) -> Self {
        Self::new(
            severity,
            FindingKind::ColumnOrder,
            format!(
                "Incorrect column order. Please make sure columns are in this order: {}",
                required.join(", ")
            ),
        )
    }

    pub(crate) fn malformed_row(field: &str) -> Self {
        Self::new(
            Severity::Error,
            FindingKind::MalformedRow,
            format!("Bad data: {field}. (Replace \" with \"\")"),
        )
    }

    pub(crate) fn unknown_field(field: &str) -> Self {
        Self::new(
            Severity::Information,
            FindingKind::UnknownField,
            format!("Column {field} is not defined for this record type"),
        )
    }

    pub(crate) fn null_value(severity: Severity, field: &str) -> Self {
        Self::new(
            severity,
            FindingKind::NullValue,
            format!("Value cannot be empty or null in column {field}"),
        )
    }

    pub(crate) fn disallowed_value(severity: Severity, field: &str, allowed: &str) -> Self {
        Self::new(
            severity,
            FindingKind::DisallowedValue,
            format!("Invalid data in column {field}. Allowed value: {allowed}"),
        )
    }

    pub(crate) fn length_exceeded(severity: Severity, field: &str, max: usize) -> Self {
        Self::new(
            severity,
            FindingKind::LengthExceeded,
            format!("Data length in column {field} exceeds maximum length of {max}"),
        )
    }

    pub(crate) fn yes_no(severity: Severity, field: &str, allowed: &str) -> Self {
        Self::new(
            severity,
            FindingKind::YesNoViolation,
            format!("Invalid data in column {field}. Allowed values: {allowed}"),
        )
    }

    pub(crate) fn duplicate_key(severity: Severity, fields: &[String]) -> Self {
        Self::new(
            severity,
            FindingKind::DuplicateKey,
            format!(
                "Duplicate values found for column(s): {}",
                fields.join(", ")
            ),
        )
    }

    pub(crate) fn fatal(error: &dyn fmt::Display) -> Self {
        Self::new(
            Severity::Error,
            FindingKind::Fatal,
            format!("Unknown error occurred during validation: {error}"),
        )
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.severity, self.message)
    }
}

/// Number of Error findings.
pub fn error_count(findings: &[Finding]) -> usize {
    findings.iter().filter(|f| f.is_error()).count()
}
