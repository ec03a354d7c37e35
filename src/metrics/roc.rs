//! ROC curve, trapezoidal AUC and the nearest-point EER
//!
//! The curve walks the distinct score values in descending order. Collinear
//! intermediate points are dropped, then `(0, 0)` is prepended at threshold
//! `+inf`. Hard binary predictions therefore give exactly three points:
//! `(0, 0)`, the operating point, and `(1, 1)`.

use tracing::debug;

use crate::{Error, Result};

/// Receiver operating characteristic curve.
#[derive(Debug, Clone, PartialEq)]
pub struct RocCurve {
    fpr: Vec<f64>,
    tpr: Vec<f64>,
    thresholds: Vec<f64>,
}

impl RocCurve {
    /// Build the curve from ground-truth labels and per-sample scores.
    ///
    /// Predicted labels can be passed directly as scores (0.0 / 1.0).
    ///
    /// # Errors
    ///
    /// Returns error if the inputs are empty or differ in length, or if
    /// either class is absent from `y_true` (the rates are undefined).
    #[allow(clippy::cast_precision_loss)]
    pub fn from_scores(y_true: &[u8], scores: &[f64]) -> Result<Self> {
        if y_true.len() != scores.len() {
            return Err(Error::LengthMismatch {
                y_true: y_true.len(),
                y_pred: scores.len(),
            });
        }
        if y_true.is_empty() {
            return Err(Error::EmptyInput);
        }

        // Stable sort by descending score
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        // Cumulative counts at the end of each run of equal scores
        let mut tps: Vec<usize> = Vec::new();
        let mut fps: Vec<usize> = Vec::new();
        let mut thresholds: Vec<f64> = Vec::new();
        let (mut tp, mut fp) = (0usize, 0usize);

        let mut i = 0;
        while i < order.len() {
            let current = scores[order[i]];
            while i < order.len() && scores[order[i]].total_cmp(&current).is_eq() {
                if y_true[order[i]] != 0 {
                    tp += 1;
                } else {
                    fp += 1;
                }
                i += 1;
            }
            tps.push(tp);
            fps.push(fp);
            thresholds.push(current);
        }

        let keep = non_collinear_indices(&fps, &tps);

        let (total_pos, total_neg) = (tp, fp);
        if total_neg == 0 {
            return Err(Error::DegenerateLabels("negative"));
        }
        if total_pos == 0 {
            return Err(Error::DegenerateLabels("positive"));
        }

        let (p, n) = (total_pos as f64, total_neg as f64);

        let mut curve = Self {
            fpr: vec![0.0],
            tpr: vec![0.0],
            thresholds: vec![f64::INFINITY],
        };
        for idx in keep {
            curve.fpr.push(fps[idx] as f64 / n);
            curve.tpr.push(tps[idx] as f64 / p);
            curve.thresholds.push(thresholds[idx]);
        }

        debug!(fpr = ?curve.fpr, tpr = ?curve.tpr, thresholds = ?curve.thresholds, "roc curve");
        Ok(curve)
    }

    /// False-positive rates, non-decreasing from 0 to 1.
    #[must_use]
    pub fn fpr(&self) -> &[f64] {
        &self.fpr
    }

    /// True-positive rates, non-decreasing from 0 to 1.
    #[must_use]
    pub fn tpr(&self) -> &[f64] {
        &self.tpr
    }

    /// Decision thresholds; the first is `+inf`.
    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// False-negative rates (`1 - tpr`).
    #[must_use]
    pub fn fnr(&self) -> Vec<f64> {
        self.tpr.iter().map(|t| 1.0 - t).collect()
    }

    /// Number of points on the curve.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fpr.len()
    }

    /// Always false: the curve holds at least the origin.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fpr.is_empty()
    }

    /// Area under the curve (trapezoidal rule).
    #[must_use]
    pub fn auc(&self) -> f64 {
        trapezoidal_auc(&self.fpr, &self.tpr)
    }

    /// EER as the FPR of the curve point minimising `|FNR - FPR|`.
    ///
    /// Ties resolve to the first point; NaN distances are ignored.
    #[must_use]
    pub fn eer_nearest(&self) -> f64 {
        let mut best: Option<(usize, f64)> = None;
        for (i, (&fpr, &tpr)) in self.fpr.iter().zip(&self.tpr).enumerate() {
            let gap = ((1.0 - tpr) - fpr).abs();
            if gap.is_nan() {
                continue;
            }
            if best.map_or(true, |(_, b)| gap < b) {
                best = Some((i, gap));
            }
        }
        best.map_or(f64::NAN, |(i, _)| self.fpr[i])
    }
}

/// Indices of points that are not collinear with both neighbours.
///
/// The first and last points are always kept.
fn non_collinear_indices(fps: &[usize], tps: &[usize]) -> Vec<usize> {
    let n = fps.len();
    (0..n)
        .filter(|&i| {
            if i == 0 || i + 1 == n {
                return true;
            }
            let second_diff = |v: &[usize]| v[i + 1] + v[i - 1] != 2 * v[i];
            second_diff(fps) || second_diff(tps)
        })
        .collect()
}

/// Trapezoidal area: sum of trapezoids between consecutive `(x, y)` points.
#[must_use]
pub fn trapezoidal_auc(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xw, yw)| (xw[1] - xw[0]) * (yw[1] + yw[0]) / 2.0)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roc_perfect_auc() {
        let roc = RocCurve::from_scores(&[0, 0, 1, 1], &[0.0, 0.0, 1.0, 1.0]).unwrap();
        assert_eq!(roc.fpr(), &[0.0, 0.0, 1.0]);
        assert_eq!(roc.tpr(), &[0.0, 1.0, 1.0]);
        assert!((roc.auc() - 1.0).abs() < 1e-12);
        assert!(roc.eer_nearest().abs() < 1e-12);
    }

    #[test]
    fn roc_binary_has_three_points() {
        let roc = RocCurve::from_scores(&[1, 1, 0, 0], &[1.0, 0.0, 0.0, 1.0]).unwrap();
        assert_eq!(roc.len(), 3);
        assert!(roc.thresholds()[0].is_infinite());
        assert_eq!(roc.fpr(), &[0.0, 0.5, 1.0]);
        assert_eq!(roc.tpr(), &[0.0, 0.5, 1.0]);
        assert!((roc.auc() - 0.5).abs() < 1e-12);
        assert!((roc.eer_nearest() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn roc_single_threshold() {
        let roc = RocCurve::from_scores(&[1, 0, 1], &[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(roc.fpr(), &[0.0, 1.0]);
        assert_eq!(roc.tpr(), &[0.0, 1.0]);
        // Both endpoints are equally far from the EER line; first wins.
        assert!(roc.eer_nearest().abs() < f64::EPSILON);
    }

    #[test]
    fn roc_drops_collinear_points() {
        // Scores 3,2,1 each add one negative: fps 1,2,3 are collinear.
        let roc = RocCurve::from_scores(&[1, 0, 0, 0], &[4.0, 3.0, 2.0, 1.0]).unwrap();
        assert_eq!(roc.fpr(), &[0.0, 0.0, 1.0]);
        assert_eq!(roc.tpr(), &[0.0, 1.0, 1.0]);
    }

    #[test]
    fn roc_requires_both_classes() {
        assert!(matches!(
            RocCurve::from_scores(&[1, 1], &[0.0, 1.0]),
            Err(Error::DegenerateLabels("negative"))
        ));
        assert!(matches!(
            RocCurve::from_scores(&[0, 0], &[0.0, 1.0]),
            Err(Error::DegenerateLabels("positive"))
        ));
    }

    #[test]
    fn trapezoid_unit_square() {
        let auc = trapezoidal_auc(&[0.0, 0.0, 1.0], &[0.0, 1.0, 1.0]);
        assert!((auc - 1.0).abs() < 1e-12);
    }
}
