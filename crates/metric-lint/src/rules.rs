//! Lint predicates
//!
//! Every function here is pure: it looks at a name, help text or label list
//! and returns the issues it finds. Whether a predicate applies to a metric
//! kind is decided by [`crate::dispatch`], not here.

use crate::descriptor::MetricKind;
use crate::issue::LintIssue;
use crate::units::UnitTable;
use regex::Regex;
use std::sync::LazyLock;

/// Label name reserved for histogram bucket bounds
pub const LABEL_LE: &str = "le";
/// Label name reserved for summary quantiles
pub const LABEL_QUANTILE: &str = "quantile";

/// Suffix every counter name must end with, and no other kind may
pub const SUFFIX_TOTAL: &str = "_total";
/// Suffix reserved for histogram bucket series
pub const SUFFIX_BUCKET: &str = "_bucket";
/// Suffix reserved for histogram and summary observation counts
pub const SUFFIX_COUNT: &str = "_count";
/// Suffix reserved for histogram and summary observation sums
pub const SUFFIX_SUM: &str = "_sum";

static CAMEL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z][A-Z]").expect("Invalid regex"));

/// Whether `token` appears as a whole `_`-delimited segment of `name`
pub fn has_token(name: &str, token: &str) -> bool {
    name.split('_').any(|segment| segment == token)
}

pub fn is_camel_case(name: &str) -> bool {
    CAMEL_CASE.is_match(name)
}

pub fn lint_help(help: &str) -> Option<LintIssue> {
    help.is_empty().then_some(LintIssue::NoHelp)
}

/// Flag a recognised unit that is not the base unit of its dimension
pub fn lint_units(table: &UnitTable, fq_name: &str) -> Option<LintIssue> {
    let found = table.detect(fq_name)?;
    if found.is_base() {
        return None;
    }
    Some(LintIssue::NonBaseUnit {
        base: found.base.to_string(),
        unit: found.unit,
    })
}

pub fn lint_total_required(fq_name: &str) -> Option<LintIssue> {
    (!fq_name.ends_with(SUFFIX_TOTAL))
        .then_some(LintIssue::MissingTotalSuffix)
}

pub fn lint_total_forbidden(fq_name: &str) -> Option<LintIssue> {
    fq_name
        .ends_with(SUFFIX_TOTAL)
        .then_some(LintIssue::UnexpectedTotalSuffix)
}

pub fn lint_bucket_suffix(fq_name: &str) -> Option<LintIssue> {
    fq_name
        .ends_with(SUFFIX_BUCKET)
        .then_some(LintIssue::ReservedBucketSuffix)
}

pub fn lint_count_suffix(fq_name: &str) -> Option<LintIssue> {
    fq_name
        .ends_with(SUFFIX_COUNT)
        .then_some(LintIssue::ReservedCountSuffix)
}

pub fn lint_sum_suffix(fq_name: &str) -> Option<LintIssue> {
    fq_name
        .ends_with(SUFFIX_SUM)
        .then_some(LintIssue::ReservedSumSuffix)
}

/// One issue per label named exactly `le`
pub fn lint_le_labels(labels: &[&str]) -> Vec<LintIssue> {
    labels
        .iter()
        .filter(|label| **label == LABEL_LE)
        .map(|_| LintIssue::ReservedLeLabel)
        .collect()
}

/// One issue per label named exactly `quantile`
pub fn lint_quantile_labels(labels: &[&str]) -> Vec<LintIssue> {
    labels
        .iter()
        .filter(|label| **label == LABEL_QUANTILE)
        .map(|_| LintIssue::ReservedQuantileLabel)
        .collect()
}

pub fn lint_reserved_chars(fq_name: &str) -> Option<LintIssue> {
    fq_name.contains(':').then_some(LintIssue::ReservedChars)
}

pub fn lint_name_camel_case(fq_name: &str) -> Option<LintIssue> {
    is_camel_case(fq_name).then_some(LintIssue::CamelCaseName)
}

/// One issue per camelCase label name
pub fn lint_label_camel_case(labels: &[&str]) -> Vec<LintIssue> {
    labels
        .iter()
        .filter(|label| is_camel_case(label))
        .map(|_| LintIssue::CamelCaseLabel)
        .collect()
}

/// Flag a name that spells out its own kind (`foo_counter_total`).
///
/// `untyped` is never flagged.
pub fn lint_kind_in_name(fq_name: &str, kind: MetricKind) -> Option<LintIssue> {
    if kind == MetricKind::Untyped {
        return None;
    }
    has_token(&fq_name.to_lowercase(), kind.as_str())
        .then_some(LintIssue::KindInName(kind))
}

pub fn lint_abbreviations(table: &UnitTable, fq_name: &str) -> Option<LintIssue> {
    let lowered = fq_name.to_lowercase();
    lowered
        .split('_')
        .any(|segment| table.is_abbreviation(segment))
        .then_some(LintIssue::AbbreviatedUnit)
}
