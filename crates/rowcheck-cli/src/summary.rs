use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use serde::Serialize;

use rowcheck_cli::report::{FileReport, rule_rows};
use rowcheck_validate::{Finding, Severity, ValidationConfig};

use crate::cli::OutputFormatArg;

pub fn print_reports(reports: &[FileReport], format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Json => print_json(reports),
        OutputFormatArg::Table => {
            for report in reports {
                print_report(report);
            }
            Ok(())
        }
    }
}

fn print_report(report: &FileReport) {
    if report.valid {
        println!("Valid file: {}", report.path.display());
    } else {
        println!("Invalid file: {}", report.path.display());
    }
    if report.findings.is_empty() {
        return;
    }
    println!("{}", findings_table(&report.findings));
}

fn findings_table(findings: &[Finding]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Severity"),
        header_cell("Kind"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(3)),
        ColumnConstraint::UpperBoundary(Width::Fixed(13)),
        ColumnConstraint::UpperBoundary(Width::Fixed(18)),
        ColumnConstraint::UpperBoundary(Width::Percentage(65)),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for (index, finding) in findings.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            severity_cell(finding.severity()),
            Cell::new(finding.kind().label()),
            Cell::new(finding.message()),
        ]);
    }
    table
}

pub fn print_rules(config: &ValidationConfig, format: OutputFormatArg) -> Result<()> {
    let rows = rule_rows(&config.rules);
    match format {
        OutputFormatArg::Json => print_json(&rows),
        OutputFormatArg::Table => {
            println!("Columns: {}", config.columns.join(", "));
            let mut table = Table::new();
            table.set_header(vec![
                header_cell("Rule"),
                header_cell("Severity"),
                header_cell("Detail"),
            ]);
            apply_table_style(&mut table);
            align_column(&mut table, 1, CellAlignment::Center);
            for row in rows {
                let severity = match Severity::parse(&row.severity) {
                    Some(severity) => severity_cell(severity),
                    None => dim_cell(row.severity),
                };
                let detail = if row.detail == "off" {
                    dim_cell(row.detail)
                } else {
                    Cell::new(row.detail)
                };
                table.add_row(vec![Cell::new(row.rule), severity, detail]);
            }
            println!("{table}");
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Information => Cell::new("INFO").fg(Color::Cyan),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
