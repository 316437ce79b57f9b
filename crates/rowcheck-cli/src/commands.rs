use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use rowcheck_cli::report::{FileReport, validate_files};
use rowcheck_validate::ValidationConfig;

use crate::cli::{RulesArgs, ValidateArgs};

pub fn run_validate(args: &ValidateArgs) -> Result<Vec<FileReport>> {
    let config = load_config(&args.config)?;
    let span = info_span!("validate", files = args.files.len());
    let _guard = span.enter();
    Ok(validate_files(&config, &args.files))
}

pub fn run_rules(args: &RulesArgs) -> Result<ValidationConfig> {
    load_config(&args.config)
}

fn load_config(path: &Path) -> Result<ValidationConfig> {
    let config = ValidationConfig::load(path)
        .with_context(|| format!("load config {}", path.display()))?;
    debug!(
        columns = config.columns.len(),
        max_findings = config.rules.max_findings(),
        "config ready"
    );
    Ok(config)
}
