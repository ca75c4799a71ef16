//! Classifier boundary.
//!
//! A classifier consumes a [`FeatureFrame`] (named columns) and returns one
//! raw label per row: [`PHISHING_LABEL`] or [`SAFE_LABEL`]. The shipped
//! implementation is a random forest persisted as JSON; tests and embedders
//! can supply their own through [`ModelSlot::ready`].

mod forest;
mod slot;

pub use forest::{DecisionTree, ForestError, RandomForest, TreeNode, FOREST_FORMAT};
pub use slot::{load_forest, LoadedForest, ModelLoadError, ModelSlot};

use crate::features::FeatureFrame;

/// Raw label for a phishing URL.
pub const PHISHING_LABEL: i64 = -1;

/// Raw label for a safe URL.
pub const SAFE_LABEL: i64 = 1;

/// Errors raised while invoking a classifier.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("input columns do not match the model schema")]
    SchemaMismatch,
    #[error("classifier returned no output rows")]
    NoOutput,
    #[error("classifier failed: {reason}")]
    Internal { reason: String },
}

/// A pre-trained binary classifier. Read-only after construction.
pub trait Classifier: Send + Sync {
    /// Column names the model was trained on, if it recorded them.
    fn schema(&self) -> Option<&[String]>;

    /// Predicts one raw label per frame row.
    fn predict(&self, frame: &FeatureFrame) -> Result<Vec<i64>, ClassifierError>;
}
