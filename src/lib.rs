//! # binclass-report: Binary-Classification Evaluation Reports
//!
//! Aggregates per-experiment prediction files, computes accuracy, F1,
//! ROC AUC, two Equal Error Rate estimates and confusion-matrix rates, and
//! writes ranked Markdown and HTML tables plus one ROC plot per experiment.
//!
//! ## Layout
//!
//! ```text
//! <results-dir>/
//! ├── exp-a/best_pred.json   {"y_true": [...], "y_pred": [...]}
//! ├── exp-b/best_pred.json
//! ├── README.md              (written, ascending F1)
//! └── table.html             (written, descending F1)
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use binclass_report::config::ReportConfig;
//! use binclass_report::pipeline::generate_report;
//!
//! let config = ReportConfig::builder().results_dir("saved").build();
//! let summary = generate_report(&config)?;
//! println!("Exported: {}", summary.markdown_path.display());
//! # Ok::<(), binclass_report::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod demo;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod plot;
pub mod prediction;
pub mod report;

pub use error::{Error, Result};
