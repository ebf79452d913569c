//! Unit table and unit detection
//!
//! The table is an ordered list of `(unit, base)` pairs plus magnitude
//! prefixes and discouraged abbreviations. Detection walks units in table
//! order, then prefixes in table order (the bare unit last), then name
//! segments left to right, and returns the first exact segment match.
//!
//! The first match wins. A name that matches several unit/prefix
//! combinations reports whichever combination the walk reaches first, not the
//! most specific one.

use crate::error::{LintError, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// One row of the unit table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitEntry {
    /// Unit word as it appears in a metric name (e.g. `hours`)
    pub unit: String,
    /// Base unit of the same dimension (e.g. `seconds`)
    pub base: String,
}

impl UnitEntry {
    fn new(unit: &str, base: &str) -> Self {
        Self {
            unit: unit.to_string(),
            base: base.to_string(),
        }
    }
}

/// A unit found in a metric name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitMatch<'a> {
    /// The matched segment, prefix included (e.g. `milliseconds`)
    pub unit: String,
    /// Base unit for the matched unit's dimension
    pub base: &'a str,
}

impl UnitMatch<'_> {
    /// Whether the match already names the base unit
    pub fn is_base(&self) -> bool {
        self.unit == self.base
    }
}

/// Read-only unit, prefix and abbreviation table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitTable {
    pub units: Vec<UnitEntry>,
    pub prefixes: Vec<String>,
    pub abbreviations: Vec<String>,
}

const DEFAULT_UNITS: &[(&str, &str)] = &[
    // Base units
    ("amperes", "amperes"),
    ("bytes", "bytes"),
    ("celsius", "celsius"),
    ("grams", "grams"),
    ("joules", "joules"),
    ("kelvin", "kelvin"),
    ("meters", "meters"),
    ("metres", "metres"),
    ("seconds", "seconds"),
    ("volts", "volts"),
    // Time
    ("minutes", "seconds"),
    ("hours", "seconds"),
    ("days", "seconds"),
    ("weeks", "seconds"),
    // Temperature
    ("kelvins", "kelvin"),
    ("fahrenheit", "celsius"),
    ("rankine", "celsius"),
    // Length
    ("inches", "meters"),
    ("yards", "meters"),
    ("miles", "meters"),
    // Information
    ("bits", "bytes"),
    // Energy
    ("calories", "joules"),
    // Mass
    ("pounds", "grams"),
    ("ounces", "grams"),
];

const DEFAULT_PREFIXES: &[&str] = &[
    "pico", "nano", "micro", "milli", "centi", "deci", "deca", "hecto", "kilo", "kibi", "mega",
    "mibi", "giga", "gibi", "tera", "tebi", "peta", "pebi",
];

const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "s", "ms", "us", "ns", "sec", "b", "kb", "mb", "gb", "tb", "pb", "m", "h", "d",
];

impl Default for UnitTable {
    fn default() -> Self {
        Self {
            units: DEFAULT_UNITS
                .iter()
                .map(|(unit, base)| UnitEntry::new(unit, base))
                .collect(),
            prefixes: DEFAULT_PREFIXES.iter().map(ToString::to_string).collect(),
            abbreviations: DEFAULT_ABBREVIATIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl UnitTable {
    /// Check that no word in the table is empty.
    ///
    /// An empty unit or prefix would make every bare prefix or unit match,
    /// and an empty abbreviation would match `__`.
    pub fn validate(&self) -> Result<()> {
        if let Some(entry) = self
            .units
            .iter()
            .find(|e| e.unit.is_empty() || e.base.is_empty())
        {
            return Err(LintError::InvalidTable(format!(
                "empty unit or base in entry {:?} -> {:?}",
                entry.unit, entry.base
            )));
        }
        if self.prefixes.iter().any(String::is_empty) {
            return Err(LintError::InvalidTable("empty unit prefix".to_string()));
        }
        if self.abbreviations.iter().any(String::is_empty) {
            return Err(LintError::InvalidTable("empty abbreviation".to_string()));
        }
        Ok(())
    }

    /// Find the first unit in `fq_name`, in table search order.
    ///
    /// For each unit, every prefix is tried before the bare unit. This is
    /// deliberate: `latency_seconds_milliseconds` reports `milliseconds`
    /// even though the base `seconds` segment comes first.
    pub fn detect(&self, fq_name: &str) -> Option<UnitMatch<'_>> {
        let segments: Vec<&str> = fq_name.split('_').collect();
        let prefixes: Vec<&str> = self
            .prefixes
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(""))
            .collect();

        for entry in &self.units {
            for prefix in &prefixes {
                let candidate = format!("{prefix}{}", entry.unit);
                if segments.contains(&candidate.as_str()) {
                    trace!(metric = fq_name, unit = %candidate, base = %entry.base, "unit matched");
                    return Some(UnitMatch {
                        unit: candidate,
                        base: &entry.base,
                    });
                }
            }
        }
        None
    }

    /// Whether `token` is a discouraged abbreviation
    pub fn is_abbreviation(&self, token: &str) -> bool {
        self.abbreviations.iter().any(|a| a == token)
    }
}
