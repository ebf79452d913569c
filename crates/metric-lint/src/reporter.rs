//! Lint Report Generation
//!
//! Collects the results of linting a set of metric definitions and renders
//! them in multiple formats:
//! - JSON for CI integration
//! - Human-readable for terminal output
//! - CI summary lines (GitHub Actions annotations)

use crate::result::LintResult;
use serde::Serialize;
use std::collections::BTreeMap;

/// Lint results for a set of metric definitions
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintReport {
    /// Results in the order they were added
    pub results: Vec<LintResult>,
}

/// Summary of a lint report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintSummary {
    /// Number of metric definitions checked
    pub metrics_checked: usize,
    /// Number of definitions with at least one issue
    pub metrics_with_issues: usize,
    /// Total number of issues
    pub total_issues: usize,
    /// Issue counts per rule id
    pub issues_by_rule: BTreeMap<String, usize>,
    /// Whether no definition had any issue
    pub passed: bool,
}

impl LintReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: LintResult) {
        self.results.push(result);
    }

    /// Results that have at least one issue
    pub fn failing(&self) -> impl Iterator<Item = &LintResult> {
        self.results.iter().filter(|r| !r.is_clean())
    }

    pub fn summary(&self) -> LintSummary {
        let mut issues_by_rule: BTreeMap<String, usize> = BTreeMap::new();
        for issue in self.results.iter().flat_map(|r| &r.issues) {
            *issues_by_rule
                .entry(issue.rule_id().to_string())
                .or_insert(0) += 1;
        }
        let total_issues: usize = issues_by_rule.values().sum();

        LintSummary {
            metrics_checked: self.results.len(),
            metrics_with_issues: self.failing().count(),
            total_issues,
            issues_by_rule,
            passed: total_issues == 0,
        }
    }
}

impl FromIterator<LintResult> for LintReport {
    fn from_iter<I: IntoIterator<Item = LintResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

impl Extend<LintResult> for LintReport {
    fn extend<I: IntoIterator<Item = LintResult>>(&mut self, iter: I) {
        self.results.extend(iter);
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: LintSummary,
    results: &'a [LintResult],
}

/// Report generator
pub struct Reporter;

impl Reporter {
    /// Generate JSON report
    pub fn to_json(report: &LintReport) -> String {
        let json = JsonReport {
            summary: report.summary(),
            results: &report.results,
        };
        serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string())
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &LintReport) -> String {
        let summary = report.summary();
        let mut output = String::new();

        output.push_str("=== Metric Lint Report ===\n\n");
        output.push_str("--- Summary ---\n");
        output.push_str(&format!(
            "Metrics checked:     {}\n",
            summary.metrics_checked
        ));
        output.push_str(&format!(
            "Metrics with issues: {}\n",
            summary.metrics_with_issues
        ));
        output.push_str(&format!("Total issues:        {}\n", summary.total_issues));
        for (rule_id, count) in &summary.issues_by_rule {
            output.push_str(&format!("  {rule_id}: {count}\n"));
        }
        output.push('\n');

        for result in report.failing() {
            output.push_str(&format!("{}\n", result.metric_name));
            for issue in &result.issues {
                output.push_str(&format!("  [{}] {}\n", issue.rule_id(), issue));
            }
        }

        if summary.passed {
            output.push_str("Result: PASSED\n");
        } else {
            output.push_str("Result: FAILED\n");
        }
        output
    }

    /// Generate one annotation line per issue
    pub fn to_ci_summary(report: &LintReport) -> String {
        let mut output = String::new();
        for result in report.failing() {
            for issue in &result.issues {
                output.push_str(&format!(
                    "::error title={}::{}: {}\n",
                    issue.rule_id(),
                    result.metric_name,
                    issue
                ));
            }
        }
        output
    }
}
