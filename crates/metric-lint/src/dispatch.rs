//! Kind dispatch tables
//!
//! Maps each supported metric kind to the ordered checks it runs. The order of
//! each table is the order issues appear in a lint result.
//!
//! | Check | Counter | Gauge | Histogram | Summary |
//! |---|---|---|---|---|
//! | `le` label | x | x | | x |
//! | `quantile` label | x | x | x | |
//! | `_bucket` suffix | x | x | | x |
//! | `_count` / `_sum` suffix | x | x | | |
//! | `_total` required | x | | | |
//! | `_total` forbidden | | x | x | x |

use crate::descriptor::MetricKind;
use crate::error::{LintError, Result};
use crate::issue::LintIssue;
use crate::rules;
use crate::units::UnitTable;

/// A single rule evaluated against a [`Subject`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    Help,
    BaseUnit,
    LeLabel,
    QuantileLabel,
    BucketSuffix,
    CountSuffix,
    SumSuffix,
    KindInName,
    ReservedChars,
    NameCamelCase,
    LabelCamelCase,
    Abbreviations,
    TotalRequired,
    TotalForbidden,
}

/// What a check looks at: the derived name plus one label set
///
/// For the descriptor pass `labels` are the constant label names; for the
/// vector pass they are the dynamic label names.
#[derive(Debug, Clone)]
pub struct Subject<'a> {
    pub kind: MetricKind,
    pub fq_name: &'a str,
    pub help: &'a str,
    pub labels: Vec<&'a str>,
}

impl Check {
    /// Append this check's issues for `subject` to `issues`
    pub fn evaluate(self, subject: &Subject<'_>, table: &UnitTable, issues: &mut Vec<LintIssue>) {
        let name = subject.fq_name;
        match self {
            Self::Help => issues.extend(rules::lint_help(subject.help)),
            Self::BaseUnit => issues.extend(rules::lint_units(table, name)),
            Self::LeLabel => issues.extend(rules::lint_le_labels(&subject.labels)),
            Self::QuantileLabel => issues.extend(rules::lint_quantile_labels(&subject.labels)),
            Self::BucketSuffix => issues.extend(rules::lint_bucket_suffix(name)),
            Self::CountSuffix => issues.extend(rules::lint_count_suffix(name)),
            Self::SumSuffix => issues.extend(rules::lint_sum_suffix(name)),
            Self::KindInName => issues.extend(rules::lint_kind_in_name(name, subject.kind)),
            Self::ReservedChars => issues.extend(rules::lint_reserved_chars(name)),
            Self::NameCamelCase => issues.extend(rules::lint_name_camel_case(name)),
            Self::LabelCamelCase => issues.extend(rules::lint_label_camel_case(&subject.labels)),
            Self::Abbreviations => issues.extend(rules::lint_abbreviations(table, name)),
            Self::TotalRequired => issues.extend(rules::lint_total_required(name)),
            Self::TotalForbidden => issues.extend(rules::lint_total_forbidden(name)),
        }
    }
}

const COUNTER_CHECKS: &[Check] = &[
    Check::Help,
    Check::BaseUnit,
    Check::LeLabel,
    Check::QuantileLabel,
    Check::BucketSuffix,
    Check::CountSuffix,
    Check::SumSuffix,
    Check::KindInName,
    Check::ReservedChars,
    Check::NameCamelCase,
    Check::LabelCamelCase,
    Check::Abbreviations,
    Check::TotalRequired,
];

const GAUGE_CHECKS: &[Check] = &[
    Check::Help,
    Check::BaseUnit,
    Check::LeLabel,
    Check::QuantileLabel,
    Check::BucketSuffix,
    Check::CountSuffix,
    Check::SumSuffix,
    Check::KindInName,
    Check::ReservedChars,
    Check::NameCamelCase,
    Check::LabelCamelCase,
    Check::Abbreviations,
    Check::TotalForbidden,
];

const HISTOGRAM_CHECKS: &[Check] = &[
    Check::Help,
    Check::BaseUnit,
    Check::QuantileLabel,
    Check::KindInName,
    Check::ReservedChars,
    Check::NameCamelCase,
    Check::LabelCamelCase,
    Check::Abbreviations,
    Check::TotalForbidden,
];

const SUMMARY_CHECKS: &[Check] = &[
    Check::Help,
    Check::BaseUnit,
    Check::LeLabel,
    Check::BucketSuffix,
    Check::KindInName,
    Check::ReservedChars,
    Check::NameCamelCase,
    Check::LabelCamelCase,
    Check::Abbreviations,
    Check::TotalForbidden,
];

const COUNTER_LABEL_CHECKS: &[Check] =
    &[Check::LeLabel, Check::QuantileLabel, Check::LabelCamelCase];
const GAUGE_LABEL_CHECKS: &[Check] = COUNTER_LABEL_CHECKS;
const HISTOGRAM_LABEL_CHECKS: &[Check] = &[Check::QuantileLabel, Check::LabelCamelCase];
const SUMMARY_LABEL_CHECKS: &[Check] = &[Check::LeLabel, Check::LabelCamelCase];

/// Checks run against a descriptor's name, help and constant labels
pub fn checks_for(kind: MetricKind) -> Result<&'static [Check]> {
    match kind {
        MetricKind::Counter => Ok(COUNTER_CHECKS),
        MetricKind::Gauge => Ok(GAUGE_CHECKS),
        MetricKind::Histogram => Ok(HISTOGRAM_CHECKS),
        MetricKind::Summary => Ok(SUMMARY_CHECKS),
        MetricKind::Untyped => Err(LintError::UnsupportedKind(kind)),
    }
}

/// Extra checks run against the dynamic label names of a vector metric
pub fn label_checks_for(kind: MetricKind) -> Result<&'static [Check]> {
    match kind {
        MetricKind::Counter => Ok(COUNTER_LABEL_CHECKS),
        MetricKind::Gauge => Ok(GAUGE_LABEL_CHECKS),
        MetricKind::Histogram => Ok(HISTOGRAM_LABEL_CHECKS),
        MetricKind::Summary => Ok(SUMMARY_LABEL_CHECKS),
        MetricKind::Untyped => Err(LintError::UnsupportedKind(kind)),
    }
}
