//! Analysis orchestration: input check, extraction, schema adaptation,
//! classification, label mapping.
//!
//! Every failure along the chain comes back as an [`AnalysisError`]; nothing
//! panics and nothing is retried.

mod outcome;

pub use outcome::{Outcome, Tone};

use std::sync::Arc;

use crate::classifier::{ClassifierError, ModelLoadError, ModelSlot, PHISHING_LABEL, SAFE_LABEL};
use crate::features::{AdaptError, Extractor, FeatureFrame, LexicalExtractor};

/// Result of a successful analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Phishing,
    Safe,
}

impl Verdict {
    /// `-1` is phishing; every other raw label is treated as safe.
    pub fn from_label(label: i64) -> Self {
        if label == PHISHING_LABEL {
            Verdict::Phishing
        } else {
            if label != SAFE_LABEL {
                tracing::warn!(label, "unexpected classifier label, treating as safe");
            }
            Verdict::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Phishing => "phishing",
            Verdict::Safe => "safe",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("no URL given")]
    EmptyInput,
    #[error("model unavailable: {0}")]
    ModelUnavailable(Arc<ModelLoadError>),
    #[error("cannot shape features for the model: {0}")]
    Extraction(#[from] AdaptError),
    #[error("classification failed: {0}")]
    Classifier(#[from] ClassifierError),
}

/// Runs analysis requests against one loaded model.
///
/// The extractor is a type parameter so tests can observe or replace it.
#[derive(Debug, Clone)]
pub struct Analyzer<E = LexicalExtractor> {
    model: ModelSlot,
    extractor: E,
}

impl Analyzer<LexicalExtractor> {
    pub fn new(model: ModelSlot) -> Self {
        Self::with_extractor(model, LexicalExtractor)
    }
}

impl<E: Extractor> Analyzer<E> {
    pub fn with_extractor(model: ModelSlot, extractor: E) -> Self {
        Self { model, extractor }
    }

    pub fn model(&self) -> &ModelSlot {
        &self.model
    }

    /// Classifies one URL.
    ///
    /// Surrounding whitespace is ignored. Empty input is rejected before the
    /// model or the extractor is consulted.
    pub fn analyze(&self, raw: &str) -> Result<Verdict, AnalysisError> {
        let url = raw.trim();
        if url.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let classifier = self.model.classifier().map_err(AnalysisError::ModelUnavailable)?;

        let features = self.extractor.extract(url);
        tracing::debug!(url, features = ?features.as_slice(), "extracted features");

        let frame = FeatureFrame::for_schema(features, classifier.schema()).map_err(|err| {
            tracing::warn!(url, error = %err, "feature adaptation failed");
            AnalysisError::Extraction(err)
        })?;

        let labels = classifier.predict(&frame).map_err(|err| {
            tracing::warn!(url, error = %err, "classifier invocation failed");
            AnalysisError::Classifier(err)
        })?;
        let label = *labels.first().ok_or_else(|| {
            tracing::warn!(url, "classifier returned no rows");
            AnalysisError::Classifier(ClassifierError::NoOutput)
        })?;

        let verdict = Verdict::from_label(label);
        tracing::info!(url, label, verdict = verdict.as_str(), "analysis complete");
        Ok(verdict)
    }

    /// Classifies one URL and collapses the result into a displayable outcome.
    pub fn outcome(&self, raw: &str) -> Outcome {
        Outcome::from_result(&self.analyze(raw))
    }
}
