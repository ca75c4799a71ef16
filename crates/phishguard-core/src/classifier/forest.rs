//! Random forest persisted as JSON (`phishguard-forest/v1`).
//!
//! Each tree is a flat node list rooted at index 0. A split sends a row to
//! `left` when `row[feature] <= threshold`, otherwise to `right`. Leaves hold
//! per-class weights; the forest averages the normalized leaf distributions of
//! all trees and predicts the class with the highest mean (lowest class index
//! on ties).

use serde::{Deserialize, Serialize};

use super::{Classifier, ClassifierError};
use crate::features::{FeatureFrame, FEATURE_COUNT};

/// Format tag every artifact must carry.
pub const FOREST_FORMAT: &str = "phishguard-forest/v1";

/// Why an artifact is not a usable forest.
#[derive(Debug, thiserror::Error)]
pub enum ForestError {
    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unsupported format {found:?} (expected \"phishguard-forest/v1\")")]
    Format { found: String },
    #[error("forest has no classes")]
    NoClasses,
    #[error("forest has no trees")]
    NoTrees,
    #[error("tree {tree} has no nodes")]
    EmptyTree { tree: usize },
    #[error("tree {tree} node {node}: feature {feature} out of range (width {width})")]
    FeatureOutOfRange {
        tree: usize,
        node: usize,
        feature: usize,
        width: usize,
    },
    #[error("tree {tree} node {node}: child {child} must follow the node and exist")]
    BadChild {
        tree: usize,
        node: usize,
        child: usize,
    },
    #[error("tree {tree} node {node}: threshold is not finite")]
    BadThreshold { tree: usize, node: usize },
    #[error("tree {tree} node {node}: leaf has {found} weights for {expected} classes")]
    LeafWidth {
        tree: usize,
        node: usize,
        expected: usize,
        found: usize,
    },
    #[error("tree {tree} node {node}: leaf weights must be finite, non-negative and not all zero")]
    BadLeaf { tree: usize, node: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    pub format: String,
    /// Training-time column names. Absent for models trained on bare arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    /// Raw label for each leaf weight position.
    pub classes: Vec<i64>,
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Decodes and validates an artifact.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ForestError> {
        let forest: RandomForest = serde_json::from_slice(bytes)?;
        forest.validate()?;
        Ok(forest)
    }

    /// Checks the structural invariants `predict` relies on.
    ///
    /// Children always point forward, so every walk from the root ends at a leaf.
    pub fn validate(&self) -> Result<(), ForestError> {
        if self.format != FOREST_FORMAT {
            return Err(ForestError::Format {
                found: self.format.clone(),
            });
        }
        if self.classes.is_empty() {
            return Err(ForestError::NoClasses);
        }
        if self.trees.is_empty() {
            return Err(ForestError::NoTrees);
        }

        let width = self
            .feature_names
            .as_ref()
            .map_or(FEATURE_COUNT, |names| names.len());

        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ForestError::EmptyTree { tree: t });
            }
            let len = tree.nodes.len();
            for (n, node) in tree.nodes.iter().enumerate() {
                match node {
                    TreeNode::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    } => {
                        if *feature >= width {
                            return Err(ForestError::FeatureOutOfRange {
                                tree: t,
                                node: n,
                                feature: *feature,
                                width,
                            });
                        }
                        if !threshold.is_finite() {
                            return Err(ForestError::BadThreshold { tree: t, node: n });
                        }
                        for &child in [left, right] {
                            if child <= n || child >= len {
                                return Err(ForestError::BadChild {
                                    tree: t,
                                    node: n,
                                    child,
                                });
                            }
                        }
                    }
                    TreeNode::Leaf { value } => {
                        if value.len() != self.classes.len() {
                            return Err(ForestError::LeafWidth {
                                tree: t,
                                node: n,
                                expected: self.classes.len(),
                                found: value.len(),
                            });
                        }
                        let well_formed = value.iter().all(|w| w.is_finite() && *w >= 0.0);
                        if !well_formed || value.iter().sum::<f64>() <= 0.0 {
                            return Err(ForestError::BadLeaf { tree: t, node: n });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Mean normalized class distribution for one row.
    fn distribution(&self, row: &[f64]) -> Result<Vec<f64>, ClassifierError> {
        let mut totals = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            let leaf = tree.leaf_for(row)?;
            let sum: f64 = leaf.iter().sum();
            for (total, w) in totals.iter_mut().zip(leaf) {
                *total += w / sum;
            }
        }
        let n = self.trees.len() as f64;
        Ok(totals.into_iter().map(|t| t / n).collect())
    }
}

impl DecisionTree {
    fn leaf_for(&self, row: &[f64]) -> Result<&[f64], ClassifierError> {
        let mut idx = 0;
        loop {
            let node = self.nodes.get(idx).ok_or_else(|| ClassifierError::Internal {
                reason: format!("node {idx} missing"),
            })?;
            match node {
                TreeNode::Leaf { value } => return Ok(value),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let x = row.get(*feature).ok_or_else(|| ClassifierError::Internal {
                        reason: format!("row has no feature {feature}"),
                    })?;
                    let next = if *x <= *threshold { *left } else { *right };
                    if next <= idx {
                        return Err(ClassifierError::Internal {
                            reason: format!("node {idx} points backwards to {next}"),
                        });
                    }
                    idx = next;
                }
            }
        }
    }
}

impl Classifier for RandomForest {
    fn schema(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn predict(&self, frame: &FeatureFrame) -> Result<Vec<i64>, ClassifierError> {
        if let Some(names) = &self.feature_names {
            if frame.columns() != names.as_slice() {
                return Err(ClassifierError::SchemaMismatch);
            }
        }

        frame
            .rows()
            .iter()
            .map(|row| {
                let x: Vec<f64> = row.as_slice().iter().map(|&v| v as f64).collect();
                let dist = self.distribution(&x)?;
                let mut best = 0;
                for (i, p) in dist.iter().enumerate() {
                    if *p > dist[best] {
                        best = i;
                    }
                }
                tracing::trace!(distribution = ?dist, label = self.classes[best], "forest vote");
                Ok(self.classes[best])
            })
            .collect()
    }
}
