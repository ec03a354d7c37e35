//! Synthetic self-test: random labels through the ROC/EER path
//!
//! The random source is always passed in. Seed it with
//! `StdRng::seed_from_u64` for reproducible output.

use rand::Rng;

use crate::metrics::RocCurve;
use crate::prediction::PredictionRecord;
use crate::Result;

/// Default seed for the demo.
pub const DEFAULT_SEED: u64 = 0;

/// Default sample count for the demo.
pub const DEFAULT_SAMPLES: usize = 500;

/// Result of a demo run.
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    /// Generated labels
    pub record: PredictionRecord,
    /// ROC curve of the generated predictions
    pub roc: RocCurve,
    /// Area under the curve
    pub roc_auc: f64,
    /// Nearest-point EER
    pub eer: f64,
}

/// Draw independent uniform 0/1 labels for `y_true` and `y_pred`.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `samples` is zero.
pub fn synthetic_record<R: Rng>(rng: &mut R, samples: usize) -> Result<PredictionRecord> {
    let y_true: Vec<i64> = (0..samples).map(|_| rng.gen_range(0..2)).collect();
    let y_pred: Vec<i64> = (0..samples).map(|_| rng.gen_range(0..2)).collect();
    PredictionRecord::new(&y_true, &y_pred)
}

/// Generate random predictions and compute their ROC curve, AUC and EER.
///
/// # Errors
///
/// Returns error if `samples` is zero or a class happens to be absent.
pub fn run_demo<R: Rng>(rng: &mut R, samples: usize) -> Result<DemoOutcome> {
    let record = synthetic_record(rng, samples)?;
    let scores: Vec<f64> = record.y_pred().iter().map(|&p| f64::from(p)).collect();
    let roc = RocCurve::from_scores(record.y_true(), &scores)?;

    Ok(DemoOutcome {
        roc_auc: roc.auc(),
        eer: roc.eer_nearest(),
        roc,
        record,
    })
}
