//! Classification metrics over one prediction record
//!
//! ## Metric Overview
//!
//! ```text
//! PredictionRecord ──┬── ConfusionMatrix ──> accuracy, f1, rates
//!                    └── RocCurve ─────────> roc_auc, eer, eer_nearest
//! ```
//!
//! The two EER estimates are kept apart on purpose: the nearest-point value
//! is quantised to the curve's vertices, the interpolated one is not, so
//! they disagree on coarse curves.
//!
//! ## Usage
//!
//! ```rust
//! use binclass_report::metrics::evaluate;
//! use binclass_report::prediction::PredictionRecord;
//!
//! let record = PredictionRecord::new(&[1, 1, 0, 0], &[1, 0, 0, 1])?;
//! let evaluation = evaluate(&record)?;
//! assert!((evaluation.metrics.accuracy - 0.5).abs() < 1e-12);
//! # Ok::<(), binclass_report::Error>(())
//! ```

mod confusion;
mod eer;
mod roc;

pub use confusion::{ConfusionMatrix, ConfusionRates};
pub use eer::{brent, eer_interpolated, interpolate};
pub use roc::{trapezoidal_auc, RocCurve};

use crate::prediction::PredictionRecord;
use crate::Result;

/// Metric result for one experiment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationMetrics {
    /// Fraction of correct predictions
    pub accuracy: f64,
    /// F1 score of the positive class
    pub f1: f64,
    /// Area under the ROC curve
    pub roc_auc: f64,
    /// EER by root finding over the interpolated ROC curve
    pub eer: f64,
    /// EER at the ROC vertex nearest the FPR = FNR line
    pub eer_nearest: f64,
    /// Confusion-matrix rates over class totals
    pub rates: ConfusionRates,
    /// Raw confusion-matrix counts
    pub confusion: ConfusionMatrix,
}

/// Metrics plus the ROC curve they were derived from.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Scalar metrics
    pub metrics: EvaluationMetrics,
    /// ROC curve, for plotting
    pub roc: RocCurve,
}

/// Compute every metric for a prediction record.
///
/// Predicted labels double as ROC scores, so the curve has a single
/// operating point.
///
/// # Errors
///
/// Returns `Error::DegenerateLabels` if either class is absent from
/// `y_true`, or `Error::RootNotFound` if the interpolated EER fails.
pub fn evaluate(record: &PredictionRecord) -> Result<Evaluation> {
    let confusion = ConfusionMatrix::from_labels(record.y_true(), record.y_pred());
    let rates = confusion.rates()?;

    let scores: Vec<f64> = record.y_pred().iter().map(|&p| f64::from(p)).collect();
    let roc = RocCurve::from_scores(record.y_true(), &scores)?;
    let eer = eer_interpolated(&roc)?;

    let metrics = EvaluationMetrics {
        accuracy: confusion.accuracy(),
        f1: confusion.f1(),
        roc_auc: roc.auc(),
        eer,
        eer_nearest: roc.eer_nearest(),
        rates,
        confusion,
    };

    Ok(Evaluation { metrics, roc })
}
