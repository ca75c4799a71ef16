//! Named-column input for classifiers.

use super::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};

/// Why a feature vector could not be shaped for a classifier's schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdaptError {
    #[error("classifier carries no column schema")]
    MissingSchema,
    #[error("classifier expects {expected} columns, extractor produces {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("column {index}: classifier expects {expected:?}, extractor produces {found:?}")]
    ColumnMismatch {
        index: usize,
        expected: String,
        found: String,
    },
}

/// Checks that `schema` lists exactly the extractor's columns in the
/// extractor's order.
pub fn check_schema(schema: Option<&[String]>) -> Result<&[String], AdaptError> {
    let schema = schema.ok_or(AdaptError::MissingSchema)?;
    if schema.len() != FEATURE_COUNT {
        return Err(AdaptError::ColumnCount {
            expected: schema.len(),
            found: FEATURE_COUNT,
        });
    }
    if let Some((index, (expected, found))) = schema
        .iter()
        .zip(FEATURE_NAMES.iter())
        .enumerate()
        .find(|(_, (expected, found))| expected.as_str() != **found)
    {
        return Err(AdaptError::ColumnMismatch {
            index,
            expected: expected.clone(),
            found: found.to_string(),
        });
    }
    Ok(schema)
}

/// Feature rows with their column names attached.
///
/// Only built through [`FeatureFrame::for_schema`], so every frame handed to a
/// classifier carries names that match the schema it was shaped for.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFrame {
    columns: Vec<String>,
    rows: Vec<FeatureVector>,
}

impl FeatureFrame {
    /// Packages `vector` as a one-row frame for a classifier trained on `schema`.
    pub fn for_schema(vector: FeatureVector, schema: Option<&[String]>) -> Result<Self, AdaptError> {
        let schema = check_schema(schema)?;
        Ok(Self {
            columns: schema.to_vec(),
            rows: vec![vector],
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[FeatureVector] {
        &self.rows
    }
}
