//! Per-file validation results and rule listings shown by the CLI.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, info_span};

use rowcheck_validate::{Finding, RuleSet, ValidationConfig, error_count};

/// Outcome of validating one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub valid: bool,
    pub findings: Vec<Finding>,
}

impl FileReport {
    /// A file is valid when it produced no Error findings.
    pub fn new(path: PathBuf, findings: Vec<Finding>) -> Self {
        let valid = error_count(&findings) == 0;
        Self {
            path,
            valid,
            findings,
        }
    }

    pub fn error_count(&self) -> usize {
        error_count(&self.findings)
    }
}

/// Validate every file with one configuration, in the given order.
pub fn validate_files(config: &ValidationConfig, files: &[PathBuf]) -> Vec<FileReport> {
    files
        .iter()
        .map(|path| validate_one(config, path))
        .collect()
}

fn validate_one(config: &ValidationConfig, path: &Path) -> FileReport {
    let span = info_span!("file", path = %path.display());
    let _guard = span.enter();
    let report = FileReport::new(path.to_path_buf(), config.validate_file(path));
    info!(
        valid = report.valid,
        findings = report.findings.len(),
        errors = report.error_count(),
        "validated"
    );
    report
}

/// One configured rule, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRow {
    pub rule: String,
    pub severity: String,
    pub detail: String,
}

impl RuleRow {
    fn new(rule: &str, severity: impl ToString, detail: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            severity: severity.to_string(),
            detail: detail.into(),
        }
    }
}

/// Rules in execution order. Disabled structural rules are listed as "off".
pub fn rule_rows(rules: &RuleSet) -> Vec<RuleRow> {
    let mut rows = Vec::new();

    let header = if rules.header_required() { "required" } else { "off" };
    rows.push(RuleRow::new("Header presence", "Error", header));

    let order = rules.column_order();
    let detail = if order.enforce { "enforced" } else { "off" };
    rows.push(RuleRow::new("Column order", order.severity, detail));

    if let Some(rule) = rules.not_null() {
        rows.push(RuleRow::new("Not null", rule.severity, rule.entries.join(", ")));
    }
    if let Some(rule) = rules.allowed_values() {
        for entry in &rule.entries {
            let detail = format!("{} = {}", entry.field, entry.value);
            rows.push(RuleRow::new("Allowed value", rule.severity, detail));
        }
    }
    if let Some(rule) = rules.max_length() {
        for entry in &rule.entries {
            let detail = format!("{} <= {}", entry.field, entry.max);
            rows.push(RuleRow::new("Max length", rule.severity, detail));
        }
    }
    if let Some(rule) = rules.yes_no() {
        let detail = format!("{} ({})", rule.entries.join(", "), rule.mode.label());
        rows.push(RuleRow::new("Yes/No", rule.severity, detail));
    }
    if let Some(rule) = rules.unique_across() {
        rows.push(RuleRow::new("Unique across", rule.severity, rule.entries.join(" + ")));
    }
    if rules.max_findings() > 0 {
        rows.push(RuleRow::new(
            "Max findings",
            "-",
            rules.max_findings().to_string(),
        ));
    }
    rows
}
