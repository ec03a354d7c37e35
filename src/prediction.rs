//! Prediction record - the per-experiment input file
//!
//! ```text
//! <results-dir>/<experiment-name>/best_pred.json
//! {"y_true": [1, 0, ...], "y_pred": [1, 1, ...]}
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

/// Ground-truth and predicted binary labels for one experiment.
///
/// Construction always validates: equal length, non-empty, labels in {0, 1}.
/// The record is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRecord {
    y_true: Vec<u8>,
    y_pred: Vec<u8>,
}

/// Raw on-disk shape, before validation.
#[derive(Deserialize)]
struct RawPrediction {
    y_true: Vec<i64>,
    y_pred: Vec<i64>,
}

impl PredictionRecord {
    /// Create a validated record from two label sequences.
    ///
    /// # Errors
    ///
    /// Returns error if the lengths differ, the input is empty, or a label
    /// is neither 0 nor 1.
    pub fn new(y_true: &[i64], y_pred: &[i64]) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err(Error::LengthMismatch {
                y_true: y_true.len(),
                y_pred: y_pred.len(),
            });
        }
        if y_true.is_empty() {
            return Err(Error::EmptyInput);
        }

        Ok(Self {
            y_true: to_binary("y_true", y_true)?,
            y_pred: to_binary("y_pred", y_pred)?,
        })
    }

    /// Parse and validate a record from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns error on malformed JSON, missing keys, or invalid labels.
    pub fn from_json_str(path: &Path, json: &str) -> Result<Self> {
        let raw: RawPrediction = serde_json::from_str(json).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(&raw.y_true, &raw.y_pred)
    }

    /// Load a record from a prediction file.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` naming the path if the file does not exist,
    /// otherwise any parse or validation error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        let json = fs::read_to_string(path)?;
        let record = Self::from_json_str(path, &json)?;
        debug!(
            path = %path.display(),
            samples = record.len(),
            positives = record.positives(),
            "loaded prediction record"
        );
        Ok(record)
    }

    /// Ground-truth labels.
    #[must_use]
    pub fn y_true(&self) -> &[u8] {
        &self.y_true
    }

    /// Predicted labels.
    #[must_use]
    pub fn y_pred(&self) -> &[u8] {
        &self.y_pred
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.y_true.len()
    }

    /// Always false for a validated record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.y_true.is_empty()
    }

    /// Number of positive ground-truth labels.
    #[must_use]
    pub fn positives(&self) -> usize {
        self.y_true.iter().filter(|&&l| l == 1).count()
    }

    /// Number of negative ground-truth labels.
    #[must_use]
    pub fn negatives(&self) -> usize {
        self.len() - self.positives()
    }
}

fn to_binary(field: &'static str, labels: &[i64]) -> Result<Vec<u8>> {
    labels
        .iter()
        .enumerate()
        .map(|(index, &value)| match value {
            0 => Ok(0),
            1 => Ok(1),
            _ => Err(Error::InvalidLabel {
                field,
                index,
                value,
            }),
        })
        .collect()
}
