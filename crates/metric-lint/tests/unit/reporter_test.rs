//! Tests for lint report generation

use metric_lint::{LintReport, MetricOpts, Reporter, lint_counter, lint_gauge};

fn sample_report() -> LintReport {
    [
        lint_counter(&MetricOpts::new("requests_total", "Requests served.")),
        lint_counter(&MetricOpts::new("errors", "")),
        lint_gauge(&MetricOpts::new("queue_count", "Items waiting.")),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_summary_counts() {
    let summary = sample_report().summary();
    assert_eq!(summary.metrics_checked, 3);
    assert_eq!(summary.metrics_with_issues, 2);
    assert_eq!(summary.total_issues, 3);
    assert_eq!(summary.issues_by_rule.get("ML001"), Some(&1));
    assert_eq!(summary.issues_by_rule.get("ML003"), Some(&1));
    assert_eq!(summary.issues_by_rule.get("ML006"), Some(&1));
    assert!(!summary.passed);
}

#[test]
fn test_empty_report_passes() {
    let report = LintReport::new();
    let summary = report.summary();
    assert_eq!(summary.metrics_checked, 0);
    assert!(summary.passed);
}

#[test]
fn test_clean_report_passes() {
    let mut report = LintReport::new();
    let requests = MetricOpts::new("requests_total", "Requests served.");
    let queue = MetricOpts::new("queue_depth", "Items waiting.");
    report.push(lint_counter(&requests));
    report.extend([lint_gauge(&queue)]);
    assert!(report.summary().passed);
    assert_eq!(report.failing().count(), 0);
}

#[test]
fn test_json_report() {
    let json = Reporter::to_json(&sample_report());
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["summary"]["total_issues"], 3);
    assert_eq!(value["summary"]["passed"], false);
    assert_eq!(value["results"][1]["metric_name"], "errors");
    assert_eq!(value["results"][1]["issues"][0]["rule_id"], "ML001");
    assert_eq!(value["results"][1]["issues"][0]["message"], "no help text");
    assert_eq!(value["results"][0]["issues"].as_array().unwrap().len(), 0);
}

#[test]
fn test_human_readable_report() {
    let output = Reporter::to_human_readable(&sample_report());
    assert!(output.contains("=== Metric Lint Report ==="));
    assert!(output.contains("Metrics checked:     3"));
    assert!(output.contains("  [ML001] no help text"));
    assert!(output.contains("queue_count\n"));
    assert!(!output.contains("requests_total\n"));
    assert!(output.ends_with("Result: FAILED\n"));
}

#[test]
fn test_ci_summary() {
    let output = Reporter::to_ci_summary(&sample_report());
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "::error title=ML001::errors: no help text");
    assert_eq!(
        lines[2],
        "::error title=ML006::queue_count: \
         non-histogram and non-summary metrics should not have \"_count\" suffix"
    );
}
