//! CLI for the PhishGuard URL classifier.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use phishguard_core::config::{self, OutputFormat, PhishGuardConfig};
use std::path::PathBuf;

use commands::{
    run_check, run_completions, run_features, run_interactive, run_manpage, run_model_info,
};

/// Top-level CLI for PhishGuard.
#[derive(Debug, Parser)]
#[command(name = "phishguard")]
#[command(about = "PhishGuard: classify URLs as phishing or safe from lexical features", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output format flag; falls back to `output` in config.toml when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify one URL as phishing or safe.
    Check {
        /// URL to analyze.
        url: String,
        /// Forest artifact to load instead of the configured one.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Read URLs from stdin, one per line, and classify each.
    Interactive {
        /// Forest artifact to load instead of the configured one.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Print the lexical feature vector for a URL (no model needed).
    Features {
        /// URL to extract features from.
        url: String,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Load a model artifact and describe it.
    ModelInfo {
        /// Forest artifact to inspect instead of the configured one.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
    },

    /// Generate shell completions on stdout.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff) on stdout.
    Manpage,
}

fn load_config() -> Result<PhishGuardConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    /// Parses arguments, runs the command and returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Check { url, model, format } => {
                let cfg = load_config()?;
                run_check(&cfg, &url, model.as_deref(), format.map(Into::into))
            }
            CliCommand::Interactive { model, format } => {
                let cfg = load_config()?;
                run_interactive(&cfg, model.as_deref(), format.map(Into::into))
            }
            CliCommand::Features { url, format } => {
                let cfg = config::load_or_default();
                run_features(&cfg, &url, format.map(Into::into))
            }
            CliCommand::ModelInfo { model } => {
                let cfg = load_config()?;
                run_model_info(&cfg, model.as_deref())
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Manpage => run_manpage(),
        }
    }
}

#[cfg(test)]
mod tests;
