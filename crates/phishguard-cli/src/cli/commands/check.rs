//! `phishguard check <url>` – classify one URL.

use anyhow::Result;
use phishguard_core::analyze::Analyzer;
use phishguard_core::classifier::ModelSlot;
use phishguard_core::config::{OutputFormat, PhishGuardConfig};
use std::path::Path;

use crate::cli::render::print_outcome;

/// Returns 0 for safe, 1 for phishing, 2 for warnings and failures.
pub fn run_check(
    cfg: &PhishGuardConfig,
    url: &str,
    model: Option<&Path>,
    format: Option<OutputFormat>,
) -> Result<i32> {
    let model_path = cfg.resolve_model_path(model)?;
    let analyzer = Analyzer::new(ModelSlot::load(&model_path));

    let result = analyzer.analyze(url);
    let outcome = print_outcome(url, &result, format.unwrap_or(cfg.output), true)?;
    Ok(outcome.exit_code())
}
