//! Load-once model state.
//!
//! The model is read from disk a single time at startup. A failed load is kept
//! in the slot and handed back on every request instead of being retried.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{Classifier, ForestError, RandomForest};
use crate::checksum::sha256_hex;

/// Why the model could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("cannot read model {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model {} is not a usable forest: {source}", path.display())]
    Artifact {
        path: PathBuf,
        #[source]
        source: ForestError,
    },
}

/// A forest read from disk together with its provenance.
#[derive(Debug, Clone)]
pub struct LoadedForest {
    pub path: PathBuf,
    /// `sha256:<hex>` of the artifact bytes.
    pub digest: String,
    pub forest: RandomForest,
}

/// Reads, decodes and validates a forest artifact.
pub fn load_forest(path: &Path) -> Result<LoadedForest, ModelLoadError> {
    let bytes = fs::read(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let forest = RandomForest::from_slice(&bytes).map_err(|source| ModelLoadError::Artifact {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedForest {
        path: path.to_path_buf(),
        digest: sha256_hex(&bytes),
        forest,
    })
}

/// Either a ready classifier or the error that prevented loading one.
///
/// Cheap to clone; the classifier is shared and never mutated.
#[derive(Clone)]
pub struct ModelSlot {
    state: Result<Arc<dyn Classifier>, Arc<ModelLoadError>>,
}

impl ModelSlot {
    /// Loads the forest at `path`, caching the failure if there is one.
    pub fn load(path: &Path) -> Self {
        match load_forest(path) {
            Ok(loaded) => {
                tracing::info!(
                    path = %loaded.path.display(),
                    digest = %loaded.digest,
                    trees = loaded.forest.tree_count(),
                    "model loaded"
                );
                Self::ready(loaded.forest)
            }
            Err(err) => {
                tracing::error!(error = %err, "model unavailable");
                Self::unavailable(err)
            }
        }
    }

    pub fn ready(classifier: impl Classifier + 'static) -> Self {
        Self::shared(Arc::new(classifier))
    }

    pub fn shared(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            state: Ok(classifier),
        }
    }

    pub fn unavailable(err: ModelLoadError) -> Self {
        Self {
            state: Err(Arc::new(err)),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ok()
    }

    pub fn classifier(&self) -> Result<&dyn Classifier, Arc<ModelLoadError>> {
        match &self.state {
            Ok(c) => Ok(c.as_ref()),
            Err(e) => Err(Arc::clone(e)),
        }
    }
}

impl fmt::Debug for ModelSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Ok(_) => write!(f, "ModelSlot(ready)"),
            Err(e) => write!(f, "ModelSlot(unavailable: {e})"),
        }
    }
}
