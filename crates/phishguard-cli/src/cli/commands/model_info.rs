//! `phishguard model-info` – describe a model artifact.

use anyhow::Result;
use phishguard_core::classifier::{load_forest, Classifier};
use phishguard_core::config::PhishGuardConfig;
use phishguard_core::features::check_schema;
use std::path::Path;

/// Exit 2 when the artifact's schema does not match the extractor.
pub fn run_model_info(cfg: &PhishGuardConfig, model: Option<&Path>) -> Result<i32> {
    let model_path = cfg.resolve_model_path(model)?;
    let loaded = load_forest(&model_path)?;
    let forest = &loaded.forest;

    let compatible = check_schema(forest.schema());
    let schema = match &compatible {
        Ok(_) => "matches extractor".to_string(),
        Err(err) => format!("INCOMPATIBLE: {err}"),
    };

    println!("Model:   {}", loaded.path.display());
    println!("Digest:  {}", loaded.digest);
    println!("Format:  {}", forest.format);
    println!("Trees:   {}", forest.tree_count());
    println!("Classes: {:?}", forest.classes);
    println!("Schema:  {}", schema);

    Ok(if compatible.is_ok() { 0 } else { 2 })
}
