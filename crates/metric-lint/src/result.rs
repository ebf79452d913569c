//! Lint result of a single metric definition

use crate::issue::LintIssue;
use serde::Serialize;
use std::fmt;

/// Issues found on one metric, keyed by its fully-qualified name
///
/// Issues keep the order the checks ran in. Identical issues raised by
/// different label sets are kept, not merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintResult {
    /// Fully-qualified metric name
    pub metric_name: String,
    /// Issues in evaluation order
    pub issues: Vec<LintIssue>,
}

impl LintResult {
    pub fn new(metric_name: impl Into<String>) -> Self {
        Self {
            metric_name: metric_name.into(),
            issues: Vec::new(),
        }
    }

    /// True when no check fired
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issue messages in order
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(LintIssue::message).collect()
    }

    /// Whether any issue carries `rule_id`
    pub fn has_rule(&self, rule_id: &str) -> bool {
        self.issues.iter().any(|issue| issue.rule_id() == rule_id)
    }

    /// `<metric_name>:<issue>,<issue>,...`
    ///
    /// A clean result renders as the name followed by a bare colon.
    pub fn render(&self) -> String {
        format!("{}:{}", self.metric_name, self.messages().join(","))
    }
}

impl fmt::Display for LintResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
