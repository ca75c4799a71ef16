//! Shared fixtures for integration tests.

use std::path::{Path, PathBuf};

use phishguard_core::features::FEATURE_NAMES;

/// The illustrative artifact shipped at the workspace root.
pub fn example_model_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../models/example-forest.json")
}

pub fn column_names() -> Vec<String> {
    FEATURE_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Writes `artifact` as JSON into `dir` and returns its path.
pub fn write_artifact(dir: &Path, name: &str, artifact: &serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(artifact).unwrap()).unwrap();
    path
}

/// Single-stump forest on `UsingIP`: IP hosts are phishing, others safe.
pub fn ip_stump(feature_names: Option<Vec<String>>) -> serde_json::Value {
    let mut artifact = serde_json::json!({
        "format": "phishguard-forest/v1",
        "classes": [-1, 1],
        "trees": [{
            "nodes": [
                { "feature": 1, "threshold": 0.5, "left": 1, "right": 2 },
                { "value": [0.0, 4.0] },
                { "value": [4.0, 0.0] }
            ]
        }]
    });
    if let Some(names) = feature_names {
        artifact["feature_names"] = serde_json::json!(names);
    }
    artifact
}
