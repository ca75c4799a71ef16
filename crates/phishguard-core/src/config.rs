use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/phishguard/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhishGuardConfig {
    /// Forest artifact to load at startup. Defaults to
    /// `$XDG_DATA_HOME/phishguard/model.json`.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    /// Output format for `check` and `features` when no `--format` is given.
    #[serde(default)]
    pub output: OutputFormat,
}

impl PhishGuardConfig {
    /// Model path to use: explicit override, then config, then the XDG default.
    pub fn resolve_model_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(p) = override_path {
            return Ok(p.to_path_buf());
        }
        match &self.model_path {
            Some(p) => Ok(p.clone()),
            None => default_model_path(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

pub fn default_model_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishguard")?;
    Ok(xdg_dirs.place_data_file("model.json")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishGuardConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<PhishGuardConfig> {
    if !path.exists() {
        let default_cfg = PhishGuardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PhishGuardConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Like [`load_or_init`], but falls back to defaults when the config cannot
/// be read or created. For commands that work without a model.
pub fn load_or_default() -> PhishGuardConfig {
    match config_path() {
        Ok(path) => load_or_default_at(&path),
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "no config location, using defaults");
            PhishGuardConfig::default()
        }
    }
}

/// Same as [`load_or_default`] for an explicit path.
pub fn load_or_default_at(path: &Path) -> PhishGuardConfig {
    load_or_init_at(path).unwrap_or_else(|err| {
        tracing::warn!(error = %format!("{err:#}"), "config unavailable, using defaults");
        PhishGuardConfig::default()
    })
}
