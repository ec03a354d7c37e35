//! Report pipeline: scan → evaluate → plot → tabulate
//!
//! Toyota Way: Jidoka (stop the line on the first defect). Any load, parse
//! or metric failure aborts the run before a report is written.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::ReportConfig;
use crate::metrics::evaluate;
use crate::plot::render_roc;
use crate::prediction::PredictionRecord;
use crate::report::{render_html, render_markdown, ExperimentResults};
use crate::{Error, Result};

/// What a pipeline run produced.
#[derive(Debug)]
pub struct ReportSummary {
    /// Metrics per experiment
    pub results: ExperimentResults,
    /// Written Markdown report
    pub markdown_path: PathBuf,
    /// Written HTML report
    pub html_path: PathBuf,
    /// Written ROC plots, in experiment-name order
    pub plot_paths: Vec<PathBuf>,
}

/// Experiment names under the results directory that hold a prediction
/// file, sorted by name.
///
/// # Errors
///
/// Returns `Error::NotFound` if the results directory does not exist, or an
/// IO error if it cannot be listed.
pub fn discover_experiments(config: &ReportConfig) -> Result<Vec<String>> {
    let dir = config.results_dir();
    if !dir.is_dir() {
        return Err(Error::NotFound(dir.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str().map(ToString::to_string) else {
            warn!(path = %entry.path().display(), "skipping non UTF-8 experiment name");
            continue;
        };

        if config.prediction_path(&name).is_file() {
            names.push(name);
        } else {
            debug!(experiment = %name, "no prediction file, skipping");
        }
    }

    names.sort();
    Ok(names)
}

/// Evaluate every experiment without writing anything except plots.
///
/// # Errors
///
/// Returns the first load, metric or plot error encountered.
pub fn collect_results(config: &ReportConfig) -> Result<(ExperimentResults, Vec<PathBuf>)> {
    let mut results = ExperimentResults::new();
    let mut plot_paths = Vec::new();

    for name in discover_experiments(config)? {
        let record = PredictionRecord::load(config.prediction_path(&name))?;
        let evaluation = evaluate(&record)?;
        let m = &evaluation.metrics;
        info!(
            experiment = %name,
            samples = record.len(),
            accuracy = m.accuracy,
            f1 = m.f1,
            roc_auc = m.roc_auc,
            eer = m.eer,
            eer_nearest = m.eer_nearest,
            "evaluated experiment"
        );

        if config.render_plots() {
            info!(experiment = %name, "printing ROC");
            let path = config.plot_path(&name);
            render_roc(&path, &evaluation.roc, m.roc_auc)?;
            plot_paths.push(path);
        }

        results.insert(name, evaluation.metrics);
    }

    Ok((results, plot_paths))
}

/// Run the full pipeline and write `README.md` and `table.html`.
///
/// Both reports are regenerated wholesale, overwriting earlier files.
///
/// # Errors
///
/// Returns any evaluation error, or an IO error if a report cannot be
/// written.
pub fn generate_report(config: &ReportConfig) -> Result<ReportSummary> {
    let (results, plot_paths) = collect_results(config)?;
    if results.is_empty() {
        warn!(dir = %config.results_dir().display(), "no experiments found");
    }

    let markdown_path = config.markdown_path();
    fs::write(&markdown_path, render_markdown(&results))?;
    info!(path = %markdown_path.display(), "exported markdown report");

    let html_path = config.html_path();
    fs::write(&html_path, render_html(&results))?;
    info!(path = %html_path.display(), "exported html report");

    Ok(ReportSummary {
        results,
        markdown_path,
        html_path,
        plot_paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_experiment(root: &Path, name: &str, json: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("best_pred.json"), json).unwrap();
    }

    #[test]
    fn test_discover_skips_dirs_without_predictions() {
        let tmp = tempfile::tempdir().unwrap();
        write_experiment(tmp.path(), "b", r#"{"y_true":[1,0],"y_pred":[1,0]}"#);
        write_experiment(tmp.path(), "a", r#"{"y_true":[1,0],"y_pred":[0,0]}"#);
        fs::create_dir_all(tmp.path().join("empty")).unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();

        let config = ReportConfig::builder().results_dir(tmp.path()).build();
        assert_eq!(discover_experiments(&config).unwrap(), ["a", "b"]);
    }

    #[test]
    fn test_missing_results_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ReportConfig::builder()
            .results_dir(tmp.path().join("nope"))
            .build();
        assert!(matches!(
            discover_experiments(&config),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_malformed_experiment_aborts_before_reports() {
        let tmp = tempfile::tempdir().unwrap();
        write_experiment(tmp.path(), "good", r#"{"y_true":[1,0],"y_pred":[1,0]}"#);
        write_experiment(tmp.path(), "bad", r#"{"y_true":[1,0]"#);

        let config = ReportConfig::builder()
            .results_dir(tmp.path())
            .render_plots(false)
            .build();

        assert!(matches!(generate_report(&config), Err(Error::Json { .. })));
        assert!(!config.markdown_path().exists());
        assert!(!config.html_path().exists());
    }
}
