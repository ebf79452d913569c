//! Metric Definition Linter
//!
//! Checks counter, gauge, histogram and summary definitions against a house
//! style before they are registered:
//! - Help text present
//! - Base units (`seconds`, not `hours` or `milliseconds`)
//! - Kind-specific suffixes (`_total`, `_bucket`, `_count`, `_sum`)
//! - Reserved labels (`le`, `quantile`)
//! - snake_case names and label names, no `:`, no abbreviated units
//! - Names that do not repeat their own kind
//!
//! Findings are data, not errors: every call returns a [`LintResult`].
//!
//! ```
//! use metric_lint::{MetricOpts, lint_counter};
//!
//! let result = lint_counter(&MetricOpts::new("lint_test_suffix", "x"));
//! assert_eq!(
//!     result.render(),
//!     "lint_test_suffix:counter metrics should have \"_total\" suffix"
//! );
//! ```

pub mod config;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod fq_name;
pub mod issue;
pub mod linter;
pub mod reporter;
pub mod result;
pub mod rules;
pub mod units;

pub use config::{ConfigLoader, LintConfig};
pub use descriptor::{MetricDescriptor, MetricKind, MetricOpts};
pub use dispatch::Check;
pub use error::{LintError, Result};
pub use fq_name::build_fq_name;
pub use issue::LintIssue;
pub use linter::{
    Linter, lint_counter, lint_counter_vector, lint_gauge, lint_gauge_vector, lint_histogram,
    lint_histogram_vector, lint_summary, lint_summary_vector,
};
pub use reporter::{LintReport, LintSummary, Reporter};
pub use result::LintResult;
pub use units::{UnitEntry, UnitMatch, UnitTable};
