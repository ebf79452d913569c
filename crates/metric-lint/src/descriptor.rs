//! Metric definition data
//!
//! The engine only ever borrows these values. They mirror the option structs a
//! metrics client takes when an instrument is defined.

use crate::error::LintError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Kind of metric instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Monotonic counter
    Counter,
    /// Value that can go up and down
    Gauge,
    /// Bucketed distribution
    Histogram,
    /// Quantile distribution
    Summary,
    /// Kind unknown. Present in the model, never a lint target.
    Untyped,
}

impl MetricKind {
    /// Kinds that have a lint rule table
    pub const SUPPORTED: [Self; 4] = [Self::Counter, Self::Gauge, Self::Histogram, Self::Summary];

    /// Lowercase kind word, as it would appear inside a metric name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::Gauge => "gauge",
            Self::Histogram => "histogram",
            Self::Summary => "summary",
            Self::Untyped => "untyped",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = LintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "counter" => Ok(Self::Counter),
            "gauge" => Ok(Self::Gauge),
            "histogram" => Ok(Self::Histogram),
            "summary" => Ok(Self::Summary),
            "untyped" => Ok(Self::Untyped),
            _ => Err(LintError::UnknownKind(s.to_string())),
        }
    }
}

/// Options shared by every metric kind
///
/// Constant labels are kept in a `BTreeMap` so that label checks always visit
/// them in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricOpts {
    /// Namespace, first component of the fully-qualified name
    #[serde(default)]
    pub namespace: String,
    /// Subsystem, second component of the fully-qualified name
    #[serde(default)]
    pub subsystem: String,
    /// Metric name, last component of the fully-qualified name
    pub name: String,
    /// Help text
    #[serde(default)]
    pub help: String,
    /// Labels with values fixed at definition time
    #[serde(default)]
    pub const_labels: BTreeMap<String, String>,
}

impl MetricOpts {
    /// Create options with a name and help text
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            ..Self::default()
        }
    }

    /// Set the namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the subsystem
    pub fn with_subsystem(mut self, subsystem: impl Into<String>) -> Self {
        self.subsystem = subsystem.into();
        self
    }

    /// Add a constant label; a repeated key replaces the earlier value
    pub fn with_const_label(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.const_labels.insert(name.into(), value.into());
        self
    }

    /// Fully-qualified name for these options
    pub fn fq_name(&self) -> String {
        crate::fq_name::build_fq_name(&self.namespace, &self.subsystem, &self.name)
    }
}

/// A metric definition: options plus the kind being defined
///
/// ```
/// use metric_lint::{MetricDescriptor, MetricKind, MetricOpts};
///
/// let descriptor = MetricDescriptor::histogram(MetricOpts::new("latency_seconds", "x"));
/// assert_eq!(descriptor.kind, MetricKind::Histogram);
/// assert_eq!(descriptor.opts.fq_name(), "latency_seconds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDescriptor {
    /// Kind selecting the rule table
    pub kind: MetricKind,
    /// Naming and help options, flattened next to `kind` when serialized
    #[serde(flatten)]
    pub opts: MetricOpts,
}

impl MetricDescriptor {
    /// Descriptor of any kind, `Untyped` included
    pub fn new(kind: MetricKind, opts: MetricOpts) -> Self {
        Self { kind, opts }
    }

    /// Counter descriptor
    pub fn counter(opts: MetricOpts) -> Self {
        Self::new(MetricKind::Counter, opts)
    }

    /// Gauge descriptor
    pub fn gauge(opts: MetricOpts) -> Self {
        Self::new(MetricKind::Gauge, opts)
    }

    /// Histogram descriptor
    pub fn histogram(opts: MetricOpts) -> Self {
        Self::new(MetricKind::Histogram, opts)
    }

    /// Summary descriptor
    pub fn summary(opts: MetricOpts) -> Self {
        Self::new(MetricKind::Summary, opts)
    }
}
