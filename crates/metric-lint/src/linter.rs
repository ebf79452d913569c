//! Lint entry points
//!
//! [`Linter`] owns a shared, read-only [`UnitTable`] and runs the kind
//! dispatch tables over a metric definition. It holds no other state, so one
//! instance can serve any number of threads.
//!
//! The free functions (`lint_counter`, `lint_gauge_vector`, ...) use a
//! process-wide linter built from the default unit table.

use crate::descriptor::{MetricDescriptor, MetricKind, MetricOpts};
use crate::dispatch::{self, Subject};
use crate::error::Result;
use crate::result::LintResult;
use crate::units::UnitTable;
use std::sync::{Arc, LazyLock};
use tracing::debug;

static DEFAULT_LINTER: LazyLock<Linter> = LazyLock::new(Linter::default);

/// Rule engine for metric definitions
#[derive(Debug, Clone)]
pub struct Linter {
    table: Arc<UnitTable>,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(Arc::new(UnitTable::default()))
    }
}

impl Linter {
    /// Create a linter over a shared unit table
    pub fn new(table: Arc<UnitTable>) -> Self {
        Self { table }
    }

    /// The process-wide linter used by the free functions
    pub fn shared() -> &'static Self {
        &DEFAULT_LINTER
    }

    pub fn table(&self) -> &UnitTable {
        &self.table
    }

    /// Lint a descriptor, failing on a kind without a rule table
    pub fn try_lint(&self, descriptor: &MetricDescriptor) -> Result<LintResult> {
        self.run(descriptor.kind, &descriptor.opts, None)
    }

    /// Lint a vector descriptor and its dynamic label names
    pub fn try_lint_vector<S: AsRef<str>>(
        &self,
        descriptor: &MetricDescriptor,
        label_names: &[S],
    ) -> Result<LintResult> {
        let labels: Vec<&str> = label_names.iter().map(AsRef::as_ref).collect();
        self.run(descriptor.kind, &descriptor.opts, Some(&labels))
    }

    /// Lint a descriptor.
    ///
    /// # Panics
    ///
    /// Panics if the descriptor's kind is [`MetricKind::Untyped`]. Only the
    /// four instrument kinds can be linted; anything else is a caller bug.
    pub fn lint(&self, descriptor: &MetricDescriptor) -> LintResult {
        self.try_lint(descriptor)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Lint a vector descriptor.
    ///
    /// # Panics
    ///
    /// Panics on [`MetricKind::Untyped`], like [`Linter::lint`].
    pub fn lint_vector<S: AsRef<str>>(
        &self,
        descriptor: &MetricDescriptor,
        label_names: &[S],
    ) -> LintResult {
        self.try_lint_vector(descriptor, label_names)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn lint_counter(&self, opts: &MetricOpts) -> LintResult {
        self.lint_supported(MetricKind::Counter, opts, None)
    }

    pub fn lint_counter_vector<S: AsRef<str>>(
        &self,
        opts: &MetricOpts,
        label_names: &[S],
    ) -> LintResult {
        self.lint_supported_vector(MetricKind::Counter, opts, label_names)
    }

    pub fn lint_gauge(&self, opts: &MetricOpts) -> LintResult {
        self.lint_supported(MetricKind::Gauge, opts, None)
    }

    pub fn lint_gauge_vector<S: AsRef<str>>(
        &self,
        opts: &MetricOpts,
        label_names: &[S],
    ) -> LintResult {
        self.lint_supported_vector(MetricKind::Gauge, opts, label_names)
    }

    pub fn lint_histogram(&self, opts: &MetricOpts) -> LintResult {
        self.lint_supported(MetricKind::Histogram, opts, None)
    }

    pub fn lint_histogram_vector<S: AsRef<str>>(
        &self,
        opts: &MetricOpts,
        label_names: &[S],
    ) -> LintResult {
        self.lint_supported_vector(MetricKind::Histogram, opts, label_names)
    }

    pub fn lint_summary(&self, opts: &MetricOpts) -> LintResult {
        self.lint_supported(MetricKind::Summary, opts, None)
    }

    pub fn lint_summary_vector<S: AsRef<str>>(
        &self,
        opts: &MetricOpts,
        label_names: &[S],
    ) -> LintResult {
        self.lint_supported_vector(MetricKind::Summary, opts, label_names)
    }

    fn lint_supported_vector<S: AsRef<str>>(
        &self,
        kind: MetricKind,
        opts: &MetricOpts,
        label_names: &[S],
    ) -> LintResult {
        let labels: Vec<&str> = label_names.iter().map(AsRef::as_ref).collect();
        self.lint_supported(kind, opts, Some(&labels))
    }

    fn lint_supported(
        &self,
        kind: MetricKind,
        opts: &MetricOpts,
        labels: Option<&[&str]>,
    ) -> LintResult {
        self.run(kind, opts, labels)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Descriptor checks first, then the dynamic-label checks for vectors
    fn run(
        &self,
        kind: MetricKind,
        opts: &MetricOpts,
        label_names: Option<&[&str]>,
    ) -> Result<LintResult> {
        let checks = dispatch::checks_for(kind)?;
        let label_checks = match label_names {
            Some(_) => dispatch::label_checks_for(kind)?,
            None => &[],
        };

        let fq_name = opts.fq_name();
        let mut result = LintResult::new(fq_name.as_str());

        let subject = Subject {
            kind,
            fq_name: &fq_name,
            help: &opts.help,
            labels: opts.const_labels.keys().map(String::as_str).collect(),
        };
        for check in checks {
            check.evaluate(&subject, &self.table, &mut result.issues);
        }

        if let Some(label_names) = label_names {
            let subject = Subject {
                labels: label_names.to_vec(),
                ..subject
            };
            for check in label_checks {
                check.evaluate(&subject, &self.table, &mut result.issues);
            }
        }

        debug!(
            metric = %result.metric_name,
            kind = %kind,
            issues = result.issues.len(),
            "metric definition linted"
        );
        Ok(result)
    }
}

/// Lint counter options with the shared linter
pub fn lint_counter(opts: &MetricOpts) -> LintResult {
    Linter::shared().lint_counter(opts)
}

/// Lint counter vector options and their label names with the shared linter
pub fn lint_counter_vector<S: AsRef<str>>(opts: &MetricOpts, label_names: &[S]) -> LintResult {
    Linter::shared().lint_counter_vector(opts, label_names)
}

/// Lint gauge options with the shared linter
pub fn lint_gauge(opts: &MetricOpts) -> LintResult {
    Linter::shared().lint_gauge(opts)
}

/// Lint gauge vector options and their label names with the shared linter
pub fn lint_gauge_vector<S: AsRef<str>>(opts: &MetricOpts, label_names: &[S]) -> LintResult {
    Linter::shared().lint_gauge_vector(opts, label_names)
}

/// Lint histogram options with the shared linter
pub fn lint_histogram(opts: &MetricOpts) -> LintResult {
    Linter::shared().lint_histogram(opts)
}

/// Lint histogram vector options and their label names with the shared linter
pub fn lint_histogram_vector<S: AsRef<str>>(opts: &MetricOpts, label_names: &[S]) -> LintResult {
    Linter::shared().lint_histogram_vector(opts, label_names)
}

/// Lint summary options with the shared linter
pub fn lint_summary(opts: &MetricOpts) -> LintResult {
    Linter::shared().lint_summary(opts)
}

/// Lint summary vector options and their label names with the shared linter
pub fn lint_summary_vector<S: AsRef<str>>(opts: &MetricOpts, label_names: &[S]) -> LintResult {
    Linter::shared().lint_summary_vector(opts, label_names)
}
