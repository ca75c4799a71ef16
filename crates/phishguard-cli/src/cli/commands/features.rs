//! `phishguard features <url>` – show the extracted feature vector.

use anyhow::Result;
use phishguard_core::config::{OutputFormat, PhishGuardConfig};
use phishguard_core::features::{extract, Feature, FeatureVector};

pub fn run_features(cfg: &PhishGuardConfig, url: &str, format: Option<OutputFormat>) -> Result<i32> {
    let vector = extract(url.trim());
    match format.unwrap_or(cfg.output) {
        OutputFormat::Text => print_table(&vector),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&features_json(&vector))?);
        }
    }
    Ok(0)
}

fn print_table(vector: &FeatureVector) {
    println!("{:>4}  {:<20}  {:>6}", "SLOT", "FEATURE", "VALUE");
    for feature in Feature::ALL {
        let marker = if feature.is_neutral() { "  (neutral)" } else { "" };
        println!(
            "{:>4}  {:<20}  {:>6}{}",
            feature.index(),
            feature.column_name(),
            vector.get(feature),
            marker
        );
    }
}

fn features_json(vector: &FeatureVector) -> serde_json::Value {
    Feature::ALL
        .iter()
        .map(|&feature| {
            serde_json::json!({
                "slot": feature.index(),
                "name": feature.column_name(),
                "value": vector.get(feature),
                "neutral": feature.is_neutral(),
            })
        })
        .collect()
}
