//! Report configuration
//!
//! ```rust
//! use binclass_report::config::ReportConfig;
//!
//! let config = ReportConfig::builder()
//!     .results_dir("saved")
//!     .render_plots(false)
//!     .build();
//! assert_eq!(config.markdown_path().to_str(), Some("saved/README.md"));
//! ```

use std::path::{Path, PathBuf};

/// Default directory scanned for experiments.
pub const DEFAULT_RESULTS_DIR: &str = "saved";

/// Default per-experiment prediction file name.
pub const DEFAULT_PREDICTION_FILE: &str = "best_pred.json";

/// Default Markdown report file name.
pub const DEFAULT_MARKDOWN_FILE: &str = "README.md";

/// Default HTML report file name.
pub const DEFAULT_HTML_FILE: &str = "table.html";

/// Where to read predictions and write reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    results_dir: PathBuf,
    prediction_file: String,
    markdown_file: String,
    html_file: String,
    plot_dir: PathBuf,
    render_plots: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            prediction_file: DEFAULT_PREDICTION_FILE.to_string(),
            markdown_file: DEFAULT_MARKDOWN_FILE.to_string(),
            html_file: DEFAULT_HTML_FILE.to_string(),
            plot_dir: PathBuf::from("."),
            render_plots: true,
        }
    }
}

impl ReportConfig {
    /// Create a builder seeded with the defaults.
    #[must_use]
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    /// Directory whose subdirectories are experiments.
    #[must_use]
    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Prediction file name looked up in each experiment directory.
    #[must_use]
    pub fn prediction_file(&self) -> &str {
        &self.prediction_file
    }

    /// Directory for `<experiment>.png` plots.
    #[must_use]
    pub fn plot_dir(&self) -> &Path {
        &self.plot_dir
    }

    /// Whether ROC plots are rendered.
    #[must_use]
    pub const fn render_plots(&self) -> bool {
        self.render_plots
    }

    /// Full path of the Markdown report.
    #[must_use]
    pub fn markdown_path(&self) -> PathBuf {
        self.results_dir.join(&self.markdown_file)
    }

    /// Full path of the HTML report.
    #[must_use]
    pub fn html_path(&self) -> PathBuf {
        self.results_dir.join(&self.html_file)
    }

    /// Prediction file path for one experiment.
    #[must_use]
    pub fn prediction_path(&self, experiment: &str) -> PathBuf {
        self.results_dir.join(experiment).join(&self.prediction_file)
    }

    /// Plot path for one experiment.
    #[must_use]
    pub fn plot_path(&self, experiment: &str) -> PathBuf {
        self.plot_dir.join(format!("{experiment}.png"))
    }
}

/// Builder for `ReportConfig`.
#[derive(Debug, Default)]
pub struct ReportConfigBuilder {
    config: ReportConfig,
}

impl ReportConfigBuilder {
    /// Set the results directory.
    #[must_use]
    pub fn results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.results_dir = dir.into();
        self
    }

    /// Set the per-experiment prediction file name.
    #[must_use]
    pub fn prediction_file(mut self, name: impl Into<String>) -> Self {
        self.config.prediction_file = name.into();
        self
    }

    /// Set the Markdown report file name.
    #[must_use]
    pub fn markdown_file(mut self, name: impl Into<String>) -> Self {
        self.config.markdown_file = name.into();
        self
    }

    /// Set the HTML report file name.
    #[must_use]
    pub fn html_file(mut self, name: impl Into<String>) -> Self {
        self.config.html_file = name.into();
        self
    }

    /// Set the plot output directory.
    #[must_use]
    pub fn plot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.plot_dir = dir.into();
        self
    }

    /// Enable or disable ROC plot rendering.
    #[must_use]
    pub const fn render_plots(mut self, enabled: bool) -> Self {
        self.config.render_plots = enabled;
        self
    }

    /// Build the `ReportConfig`.
    #[must_use]
    pub fn build(self) -> ReportConfig {
        self.config
    }
}
