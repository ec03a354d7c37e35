//! Binary confusion matrix and the rates derived from it

use crate::{Error, Result};

/// Confusion-matrix rates normalised by ground-truth class totals.
///
/// `tn + fp == 1` (over negatives) and `fn_ + tp == 1` (over positives).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfusionRates {
    /// True negatives / negatives
    pub tn: f64,
    /// False positives / negatives
    pub fp: f64,
    /// False negatives / positives
    pub fn_: f64,
    /// True positives / positives
    pub tp: f64,
}

/// 2×2 confusion matrix counts for labels in {0, 1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionMatrix {
    /// Actual 0, predicted 0
    pub tn: usize,
    /// Actual 0, predicted 1
    pub fp: usize,
    /// Actual 1, predicted 0
    pub fn_: usize,
    /// Actual 1, predicted 1
    pub tp: usize,
}

impl ConfusionMatrix {
    /// Count outcomes over paired labels. Callers pass validated labels;
    /// anything non-zero is treated as positive.
    #[must_use]
    pub fn from_labels(y_true: &[u8], y_pred: &[u8]) -> Self {
        y_true
            .iter()
            .zip(y_pred)
            .fold(Self::default(), |mut cm, (&t, &p)| {
                match (t != 0, p != 0) {
                    (false, false) => cm.tn += 1,
                    (false, true) => cm.fp += 1,
                    (true, false) => cm.fn_ += 1,
                    (true, true) => cm.tp += 1,
                }
                cm
            })
    }

    /// Total number of samples.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.tn + self.fp + self.fn_ + self.tp
    }

    /// Ground-truth negatives.
    #[must_use]
    pub const fn negatives(&self) -> usize {
        self.tn + self.fp
    }

    /// Ground-truth positives.
    #[must_use]
    pub const fn positives(&self) -> usize {
        self.fn_ + self.tp
    }

    /// Fraction of correct predictions.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.tp + self.tn) as f64 / total as f64
    }

    /// F1 score of the positive class: `2TP / (2TP + FP + FN)`.
    ///
    /// Returns 0.0 when there are no true positives, false positives or
    /// false negatives.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn f1(&self) -> f64 {
        let denom = 2 * self.tp + self.fp + self.fn_;
        if denom == 0 {
            0.0
        } else {
            (2 * self.tp) as f64 / denom as f64
        }
    }

    /// Normalise counts by class totals.
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateLabels` if either class is absent from the
    /// ground truth.
    #[allow(clippy::cast_precision_loss)]
    pub fn rates(&self) -> Result<ConfusionRates> {
        let neg = self.negatives();
        let pos = self.positives();
        if neg == 0 {
            return Err(Error::DegenerateLabels("negative"));
        }
        if pos == 0 {
            return Err(Error::DegenerateLabels("positive"));
        }

        let (neg, pos) = (neg as f64, pos as f64);
        Ok(ConfusionRates {
            tn: self.tn as f64 / neg,
            fp: self.fp as f64 / neg,
            fn_: self.fn_ as f64 / pos,
            tp: self.tp as f64 / pos,
        })
    }
}
