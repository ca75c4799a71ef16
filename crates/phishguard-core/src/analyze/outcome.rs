//! User-visible outcome of one analysis request.

use std::fmt;

use super::{AnalysisError, Verdict};

/// Display treatment for an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Warning,
    Danger,
    Success,
    Error,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Success => "success",
            Tone::Error => "error",
        }
    }
}

/// What the user sees after submitting a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    EmptyInput,
    Phishing,
    Safe,
    ModelUnavailable,
    Failed,
}

impl Outcome {
    pub fn from_result(result: &Result<Verdict, AnalysisError>) -> Self {
        match result {
            Ok(Verdict::Phishing) => Outcome::Phishing,
            Ok(Verdict::Safe) => Outcome::Safe,
            Err(AnalysisError::EmptyInput) => Outcome::EmptyInput,
            Err(AnalysisError::ModelUnavailable(_)) => Outcome::ModelUnavailable,
            Err(AnalysisError::Extraction(_)) | Err(AnalysisError::Classifier(_)) => {
                Outcome::Failed
            }
        }
    }

    /// Stable machine-readable key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::EmptyInput => "empty_input",
            Outcome::Phishing => "phishing",
            Outcome::Safe => "safe",
            Outcome::ModelUnavailable => "model_unavailable",
            Outcome::Failed => "failed",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::EmptyInput => "⚠ Enter a URL",
            Outcome::Phishing => "⚠ PHISHING",
            Outcome::Safe => "✓ SAFE",
            Outcome::ModelUnavailable => "❌ Model not loaded",
            Outcome::Failed => "❌ Analysis failed",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Outcome::EmptyInput => Tone::Warning,
            Outcome::Phishing | Outcome::ModelUnavailable => Tone::Danger,
            Outcome::Safe => Tone::Success,
            Outcome::Failed => Tone::Error,
        }
    }

    /// Foreground color as `#rrggbb`.
    pub fn color(&self) -> &'static str {
        match self {
            Outcome::EmptyInput => "#f39c12",
            Outcome::Phishing | Outcome::ModelUnavailable => "#e74c3c",
            Outcome::Safe => "#2ecc71",
            Outcome::Failed => "#e67e22",
        }
    }

    /// Process exit status for one-shot checks: 0 safe, 1 phishing, 2 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Safe => 0,
            Outcome::Phishing => 1,
            Outcome::EmptyInput | Outcome::ModelUnavailable | Outcome::Failed => 2,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
