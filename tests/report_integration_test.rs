//! End-to-end report generation over a scratch results directory
//!
//! Toyota Way: Jidoka (Built-in Quality)

use std::fs;
use std::path::Path;

use binclass_report::config::ReportConfig;
use binclass_report::pipeline::generate_report;
use binclass_report::prediction::PredictionRecord;
use binclass_report::Error;

fn write_experiment(root: &Path, name: &str, y_true: &[u8], y_pred: &[u8]) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    let json = serde_json::json!({ "y_true": y_true, "y_pred": y_pred });
    fs::write(dir.join("best_pred.json"), json.to_string()).unwrap();
}

/// Three experiments with F1 scores 1.0, 0.5 and 0.667.
fn populate(root: &Path) {
    write_experiment(root, "perfect", &[1, 0, 1, 0], &[1, 0, 1, 0]);
    write_experiment(root, "coin", &[1, 1, 0, 0], &[1, 0, 0, 1]);
    write_experiment(root, "decent", &[1, 1, 1, 0, 0], &[1, 1, 0, 1, 0]);
    fs::create_dir_all(root.join("unfinished")).unwrap();
}

fn no_plot_config(root: &Path) -> ReportConfig {
    ReportConfig::builder()
        .results_dir(root)
        .render_plots(false)
        .build()
}

fn row_names(text: &str, prefix: &str, strip: impl Fn(&str) -> &str) -> Vec<String> {
    text.lines()
        .filter(|l| l.starts_with(prefix))
        .map(|l| strip(l).to_string())
        .collect()
}

#[test]
fn test_markdown_ascending_html_descending() {
    let tmp = tempfile::tempdir().unwrap();
    populate(tmp.path());

    let summary = generate_report(&no_plot_config(tmp.path())).unwrap();
    assert_eq!(summary.results.len(), 3);
    assert!(summary.plot_paths.is_empty());

    let md = fs::read_to_string(&summary.markdown_path).unwrap();
    let md_rows = row_names(&md, "| ", |l| l[2..].split(" |").next().unwrap());
    // header row starts with "| Experiment"
    assert_eq!(md_rows, ["Experiment", ":---------", "coin", "decent", "perfect"]);

    let html = fs::read_to_string(&summary.html_path).unwrap();
    let html_rows = row_names(&html, "<tr><td>", |l| {
        l["<tr><td>".len()..].split("</td>").next().unwrap()
    });
    assert_eq!(html_rows, ["perfect", "decent", "coin"]);
}

#[test]
fn test_fixed_example_row() {
    let tmp = tempfile::tempdir().unwrap();
    write_experiment(tmp.path(), "coin", &[1, 1, 0, 0], &[1, 0, 0, 1]);

    let summary = generate_report(&no_plot_config(tmp.path())).unwrap();
    let md = fs::read_to_string(summary.markdown_path).unwrap();
    assert!(md.contains(
        "| coin | 0.500 | 0.500 | 0.5000 | 0.5000 | 0.5000 | 0.500 | 0.500 | 0.500 | 0.500 |"
    ));

    let html = fs::read_to_string(summary.html_path).unwrap();
    assert!(html.contains(
        "<tr><td>coin</td><td>0.500</td><td>0.500</td><td>0.5000</td><td>0.5000</td><td>0.500</td><td>0.500</td><td>0.500</td><td>0.500</td></tr>"
    ));
}

#[test]
fn test_rerun_is_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    populate(tmp.path());
    let config = no_plot_config(tmp.path());

    generate_report(&config).unwrap();
    let md1 = fs::read(config.markdown_path()).unwrap();
    let html1 = fs::read(config.html_path()).unwrap();

    generate_report(&config).unwrap();
    assert_eq!(md1, fs::read(config.markdown_path()).unwrap());
    assert_eq!(html1, fs::read(config.html_path()).unwrap());
}

#[test]
fn test_plots_written_per_experiment() {
    let tmp = tempfile::tempdir().unwrap();
    let results = tmp.path().join("saved");
    let plots = tmp.path().join("plots");
    fs::create_dir_all(&plots).unwrap();
    populate(&results);

    let config = ReportConfig::builder()
        .results_dir(&results)
        .plot_dir(&plots)
        .build();
    let summary = generate_report(&config).unwrap();

    assert_eq!(summary.plot_paths.len(), 3);
    for name in ["coin", "decent", "perfect"] {
        assert!(plots.join(format!("{name}.png")).is_file());
    }
}

#[test]
fn test_degenerate_experiment_aborts_run() {
    let tmp = tempfile::tempdir().unwrap();
    populate(tmp.path());
    write_experiment(tmp.path(), "all_positive", &[1, 1, 1], &[1, 0, 1]);

    let config = no_plot_config(tmp.path());
    assert!(matches!(
        generate_report(&config),
        Err(Error::DegenerateLabels("negative"))
    ));
    assert!(!config.markdown_path().exists());
}

#[test]
fn test_load_missing_file_names_path() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("exp").join("best_pred.json");

    let err = PredictionRecord::load(&path).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(err.to_string().contains("best_pred.json"));
}

#[test]
fn test_empty_results_dir_writes_header_only() {
    let tmp = tempfile::tempdir().unwrap();
    let summary = generate_report(&no_plot_config(tmp.path())).unwrap();

    assert!(summary.results.is_empty());
    let html = fs::read_to_string(summary.html_path).unwrap();
    assert_eq!(html.lines().filter(|l| l.starts_with("<tr><td>")).count(), 0);
    assert!(html.contains("<thead><tr><td>Experiment</td>"));
    assert!(html.contains("</table>"));

    let md = fs::read_to_string(summary.markdown_path).unwrap();
    assert_eq!(md.lines().filter(|l| l.starts_with("| ")).count(), 2);
}
