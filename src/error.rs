//! Error types for binclass-report
//!
//! Toyota Way: Clear error messages with actionable guidance (Respect for People)

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// binclass-report error types
#[derive(Error, Debug)]
pub enum Error {
    /// Prediction file does not exist
    #[error("File {} does not exist.", .0.display())]
    NotFound(PathBuf),

    /// Prediction file is not valid JSON or lacks `y_true`/`y_pred`
    #[error("Malformed prediction file {}: {source}", .path.display())]
    Json {
        /// File being parsed
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Label arrays differ in length
    #[error("Label length mismatch: y_true has {y_true} elements, y_pred has {y_pred}")]
    LengthMismatch {
        /// Length of `y_true`
        y_true: usize,
        /// Length of `y_pred`
        y_pred: usize,
    },

    /// No labels to evaluate
    #[error("Empty input: no labels to evaluate")]
    EmptyInput,

    /// A label outside {0, 1}
    #[error("Invalid label in {field}[{index}]: {value} (expected 0 or 1)")]
    InvalidLabel {
        /// Which array (`y_true` or `y_pred`)
        field: &'static str,
        /// Position of the offending label
        index: usize,
        /// Offending value
        value: i64,
    },

    /// One class is entirely absent from the ground truth
    #[error("Degenerate labels: no {0} samples in y_true\nRates normalised by class totals are undefined")]
    DegenerateLabels(&'static str),

    /// Brent's method failed to bracket or converge
    #[error("EER root finding failed: {0}")]
    RootNotFound(String),

    /// ROC plot rendering failed
    #[error("Plot error: {0}")]
    Plot(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
