//! HTML results table (`table.html`)

use super::{ExperimentResults, FormattedRow, SortOrder};

const HEAD: [&str; 9] = [
    "<!DOCTYPE html>",
    "<html>",
    "<head>",
    "<style>table, th, td { border: 1px solid black; border-collapse: collapse; } th, td { padding: 10px; }</style>",
    "</head>",
    "<body>",
    "<h1>Empirical Results</h1>",
    r#"<table  class="table has-text-centered mx-auto">"#,
    r#"<thead><tr><td>Experiment</td><td>Accuracy</td><td><abbr title="F1 score">F1</abbr></td><td><abbr title="Area Under the Receiver Operating Characteristic Curve">ROC AUC</abbr></td><td><abbr title="Equal Error Rate">EER</abbr></td><td><abbr title="True negatives">TN</abbr></td><td><abbr title="False positives">FP</abbr></td><td><abbr title="False negatives">FN</abbr></td><td><abbr title="True positives">TP</abbr></td></tr></thead>"#,
];

const TAIL: [&str; 3] = ["</table>", "</body>", "</html>"];

/// Render the HTML report, rows in descending F1 order.
///
/// The table carries a single EER column (the interpolated estimate).
#[must_use]
pub fn render_html(results: &ExperimentResults) -> String {
    let mut lines: Vec<String> = HEAD.iter().map(ToString::to_string).collect();

    for (name, metrics) in results.ranked(SortOrder::Descending) {
        let d = FormattedRow::from(metrics);
        lines.push(format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(name),
            d.acc,
            d.f1,
            d.roc_auc,
            d.eer,
            d.tn,
            d.fp,
            d.fn_,
            d.tp
        ));
    }

    lines.extend(TAIL.iter().map(ToString::to_string));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
