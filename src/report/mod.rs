//! Ranked result tables (Markdown and HTML)
//!
//! ## Ordering
//!
//! - Markdown: ascending F1
//! - HTML: descending F1
//!
//! Ties keep experiment-name order, so output is byte-identical across runs
//! on the same inputs.

mod html;
mod markdown;

pub use html::render_html;
pub use markdown::render_markdown;

use std::collections::BTreeMap;

use crate::metrics::EvaluationMetrics;

/// Sort order for ranked rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Lowest F1 first
    Ascending,
    /// Highest F1 first
    Descending,
}

/// Metric results keyed by experiment name.
#[derive(Debug, Default, Clone)]
pub struct ExperimentResults {
    experiments: BTreeMap<String, EvaluationMetrics>,
}

impl ExperimentResults {
    /// Create an empty result set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the metrics of an experiment.
    pub fn insert(&mut self, name: impl Into<String>, metrics: EvaluationMetrics) {
        self.experiments.insert(name.into(), metrics);
    }

    /// Metrics for one experiment.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EvaluationMetrics> {
        self.experiments.get(name)
    }

    /// Number of experiments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    /// True when no experiment has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    /// Experiments ranked by F1 score.
    ///
    /// The sort is stable over name order, so equal scores stay
    /// alphabetical in both directions.
    #[must_use]
    pub fn ranked(&self, order: SortOrder) -> Vec<(&str, &EvaluationMetrics)> {
        let mut rows: Vec<(&str, &EvaluationMetrics)> = self
            .experiments
            .iter()
            .map(|(name, metrics)| (name.as_str(), metrics))
            .collect();

        match order {
            SortOrder::Ascending => rows.sort_by(|a, b| a.1.f1.total_cmp(&b.1.f1)),
            SortOrder::Descending => rows.sort_by(|a, b| b.1.f1.total_cmp(&a.1.f1)),
        }
        rows
    }
}

impl FromIterator<(String, EvaluationMetrics)> for ExperimentResults {
    fn from_iter<I: IntoIterator<Item = (String, EvaluationMetrics)>>(iter: I) -> Self {
        Self {
            experiments: iter.into_iter().collect(),
        }
    }
}

/// Table cells for one experiment, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormattedRow {
    pub acc: String,
    pub f1: String,
    pub roc_auc: String,
    pub eer: String,
    pub eer2: String,
    pub tn: String,
    pub fp: String,
    pub fn_: String,
    pub tp: String,
}

impl From<&EvaluationMetrics> for FormattedRow {
    fn from(m: &EvaluationMetrics) -> Self {
        Self {
            acc: format!("{:.3}", m.accuracy),
            f1: format!("{:.3}", m.f1),
            roc_auc: format!("{:.4}", m.roc_auc),
            eer: format!("{:.4}", m.eer),
            eer2: format!("{:.4}", m.eer_nearest),
            tn: format!("{:.3}", m.rates.tn),
            fp: format!("{:.3}", m.rates.fp),
            fn_: format!("{:.3}", m.rates.fn_),
            tp: format!("{:.3}", m.rates.tp),
        }
    }
}
