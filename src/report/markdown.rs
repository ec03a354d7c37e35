//! Markdown results table (`README.md`)

use super::{ExperimentResults, FormattedRow, SortOrder};

const PREAMBLE: [&str; 9] = [
    "# Empirical Results",
    " ",
    "-   Accuracy",
    "-   F1 score",
    "-   Area Under the Receiver Operating Characteristic Curve (ROC AUC)",
    "-   Equal Error Rate (EER)",
    " ",
    "| Experiment | Accuracy | F1 Score | ROC AUC | EER | EER2 | True negatives | False positives | False negatives | True positives |",
    "| :--------- | :------: | :------: | :-----: | :-: | :--: | :--: | :--: | :--: | :--: |",
];

/// Render the Markdown report, rows in ascending F1 order.
#[must_use]
pub fn render_markdown(results: &ExperimentResults) -> String {
    let mut lines: Vec<String> = PREAMBLE.iter().map(ToString::to_string).collect();

    for (name, metrics) in results.ranked(SortOrder::Ascending) {
        let d = FormattedRow::from(metrics);
        lines.push(format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {} |",
            escape_cell(name),
            d.acc,
            d.f1,
            d.roc_auc,
            d.eer,
            d.eer2,
            d.tn,
            d.fp,
            d.fn_,
            d.tp
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Pipes would split the cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
