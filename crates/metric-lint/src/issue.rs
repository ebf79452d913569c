//! Lint issues
//!
//! Each issue renders to a fixed, human-readable message and carries a stable
//! rule id (`ML001`...) for filtering and CI summaries.

use crate::descriptor::MetricKind;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// A single style finding on a metric definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintIssue {
    /// Help text is empty
    NoHelp,
    /// Name uses a derived unit instead of its base unit
    NonBaseUnit { unit: String, base: String },
    /// Counter name lacks `_total`
    MissingTotalSuffix,
    /// Non-counter name ends with `_total`
    UnexpectedTotalSuffix,
    /// Non-histogram name ends with `_bucket`
    ReservedBucketSuffix,
    /// Non-histogram, non-summary name ends with `_count`
    ReservedCountSuffix,
    /// Non-histogram, non-summary name ends with `_sum`
    ReservedSumSuffix,
    /// Non-histogram metric has an `le` label
    ReservedLeLabel,
    /// Non-summary metric has a `quantile` label
    ReservedQuantileLabel,
    /// Name contains `:`
    ReservedChars,
    /// Name is camelCase
    CamelCaseName,
    /// A label name is camelCase
    CamelCaseLabel,
    /// Name repeats the metric kind word
    KindInName(MetricKind),
    /// Name contains an abbreviated unit
    AbbreviatedUnit,
}

impl LintIssue {
    /// Stable rule identifier
    pub fn rule_id(&self) -> &'static str {
        match self {
            Self::NoHelp => "ML001",
            Self::NonBaseUnit { .. } => "ML002",
            Self::MissingTotalSuffix => "ML003",
            Self::UnexpectedTotalSuffix => "ML004",
            Self::ReservedBucketSuffix => "ML005",
            Self::ReservedCountSuffix => "ML006",
            Self::ReservedSumSuffix => "ML007",
            Self::ReservedLeLabel => "ML008",
            Self::ReservedQuantileLabel => "ML009",
            Self::ReservedChars => "ML010",
            Self::CamelCaseName => "ML011",
            Self::CamelCaseLabel => "ML012",
            Self::KindInName(_) => "ML013",
            Self::AbbreviatedUnit => "ML014",
        }
    }

    /// Message text, identical to the `Display` output
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NonBaseUnit { unit, base } => {
                return write!(f, "use base unit \"{base}\" instead of \"{unit}\"");
            }
            Self::KindInName(kind) => {
                return write!(f, "metric name should not include type '{kind}'");
            }
            Self::NoHelp => "no help text",
            Self::MissingTotalSuffix => "counter metrics should have \"_total\" suffix",
            Self::UnexpectedTotalSuffix => "counter metrics should not have \"_total\" suffix",
            Self::ReservedBucketSuffix => {
                "non-histogram metrics should not have \"_bucket\" suffix"
            }
            Self::ReservedCountSuffix => {
                "non-histogram and non-summary metrics should not have \"_count\" suffix"
            }
            Self::ReservedSumSuffix => {
                "non-histogram and non-summary metrics should not have \"_sum\" suffix"
            }
            Self::ReservedLeLabel => "non-histogram metrics should not have \"le\" label",
            Self::ReservedQuantileLabel => "non-summary metrics should not have \"quantile\" label",
            Self::ReservedChars => "metric names should not contain ':'",
            Self::CamelCaseName => "metric names should be written in 'snake_case' not 'camelCase'",
            Self::CamelCaseLabel => "label names should be written in 'snake_case' not 'camelCase'",
            Self::AbbreviatedUnit => "metric names should not contain abbreviated units",
        };
        f.write_str(text)
    }
}

impl Serialize for LintIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LintIssue", 2)?;
        state.serialize_field("rule_id", self.rule_id())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}
