//! Lenient input collection
//!
//! The strict core rejects malformed vectors outright. Interactive
//! callers, though, feed in raw comma-separated text that is routinely
//! short, long, or out of range. This module is the explicit adapter
//! between the two worlds: it parses, pads, truncates and clamps — and
//! **records every correction it makes** instead of silently fixing the
//! input. Each correction is also emitted through `log::warn!`.
//!
//! Whether a caller should treat corrections as cosmetic or as upstream
//! bugs is a product decision; the adapter just makes them visible.
//!
//! # Example
//!
//! ```rust
//! use leslie_rs::input::Collector;
//!
//! // Survival is short and out of range; both get fixed and flagged.
//! let collected = Collector::new().collect(3, "0,4,3", "1.5", "100,100,100");
//!
//! assert_eq!(collected.survival, vec![1.0, 0.0]);
//! assert_eq!(collected.corrections.len(), 2); // clamped + padded
//! ```

use log::warn;
use nalgebra::DVector;
use std::fmt;

use crate::demography::VitalRates;
use crate::Error;

// =================================================================================================
// Corrections
// =================================================================================================

/// One fix-up the collector applied to raw input.
#[derive(Debug, Clone, PartialEq)]
pub enum Correction {
    /// A fragment did not parse as a number and became the fill value.
    Unparseable {
        which: &'static str,
        index: usize,
        fragment: String,
    },

    /// The vector was shorter than expected and was padded with the
    /// fill value.
    Padded { which: &'static str, added: usize },

    /// The vector was longer than expected and was truncated.
    Truncated { which: &'static str, removed: usize },

    /// An entry was outside its valid range and was clamped.
    Clamped {
        which: &'static str,
        index: usize,
        from: f64,
        to: f64,
    },
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Correction::Unparseable { which, index, fragment } => {
                write!(f, "{} entry {}: '{}' is not a number, using fill value", which, index, fragment)
            }
            Correction::Padded { which, added } => {
                write!(f, "{}: padded {} missing entries with fill value", which, added)
            }
            Correction::Truncated { which, removed } => {
                write!(f, "{}: dropped {} surplus entries", which, removed)
            }
            Correction::Clamped { which, index, from, to } => {
                write!(f, "{} entry {}: {} clamped to {}", which, index, from, to)
            }
        }
    }
}

// =================================================================================================
// Collected Input
// =================================================================================================

/// Core-ready vectors plus the list of corrections that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedInput {
    /// Fecundity rates, length n, entries ≥ 0.
    pub fecundity: Vec<f64>,
    /// Survival rates, length n − 1, entries in [0, 1].
    pub survival: Vec<f64>,
    /// Initial population, length n.
    pub initial: Vec<f64>,
    /// Every fix-up applied, in the order it happened.
    pub corrections: Vec<Correction>,
}

impl CollectedInput {
    /// Whether the raw input needed no correction at all.
    pub fn is_clean(&self) -> bool {
        self.corrections.is_empty()
    }

    /// Hand off to the strict core.
    ///
    /// # Errors
    ///
    /// The collector guarantees the dimension invariants, so this only
    /// fails when it was asked to collect for n == 0 classes.
    pub fn into_parts(self) -> Result<(VitalRates, DVector<f64>, Vec<Correction>), Error> {
        let rates = VitalRates::new(self.fecundity, self.survival)?;
        Ok((rates, DVector::from_vec(self.initial), self.corrections))
    }
}

// =================================================================================================
// Collector
// =================================================================================================

/// Lenient parser for comma-separated rate and population vectors.
///
/// Splits on commas, trims whitespace and skips empty fragments.
/// Unparseable and non-finite fragments become `fill`; short vectors
/// are padded with `fill`; long vectors are truncated; survival is
/// clamped to [0, 1]
/// and fecundity to ≥ 0. Population entries are not clamped — the core
/// treats counts as caller responsibility.
#[derive(Debug, Clone, Copy)]
pub struct Collector {
    /// Value used for padding and for unparseable fragments.
    pub fill: f64,
}

impl Default for Collector {
    fn default() -> Self {
        Self { fill: 0.0 }
    }
}

impl Collector {
    /// Create a collector with fill value 0.0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn three raw comma-separated strings into core-ready vectors
    /// for `n` age classes (n ≥ 1).
    pub fn collect(
        &self,
        n: usize,
        fecundity_text: &str,
        survival_text: &str,
        initial_text: &str,
    ) -> CollectedInput {
        let mut corrections = Vec::new();

        let fecundity = self.parse_list("fecundity", fecundity_text, &mut corrections);
        let mut fecundity = self.fit_length("fecundity", fecundity, n, &mut corrections);
        self.clamp("fecundity", &mut fecundity, 0.0, f64::INFINITY, &mut corrections);

        let survival = self.parse_list("survival", survival_text, &mut corrections);
        let mut survival =
            self.fit_length("survival", survival, n.saturating_sub(1), &mut corrections);
        self.clamp("survival", &mut survival, 0.0, 1.0, &mut corrections);

        let initial = self.parse_list("initial population", initial_text, &mut corrections);
        let initial = self.fit_length("initial population", initial, n, &mut corrections);

        for correction in &corrections {
            warn!("input correction: {}", correction);
        }

        CollectedInput {
            fecundity,
            survival,
            initial,
            corrections,
        }
    }

    fn parse_list(
        &self,
        which: &'static str,
        text: &str,
        corrections: &mut Vec<Correction>,
    ) -> Vec<f64> {
        text.split(',')
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .enumerate()
            .map(|(index, fragment)| match fragment.parse::<f64>() {
                // "nan" and "inf" parse as valid f64 but would leak
                // through the range clamp (f64::clamp(NaN) is NaN), so
                // only finite values count as parsed.
                Ok(value) if value.is_finite() => value,
                _ => {
                    corrections.push(Correction::Unparseable {
                        which,
                        index,
                        fragment: fragment.to_string(),
                    });
                    self.fill
                }
            })
            .collect()
    }

    fn fit_length(
        &self,
        which: &'static str,
        mut values: Vec<f64>,
        expected: usize,
        corrections: &mut Vec<Correction>,
    ) -> Vec<f64> {
        if values.len() < expected {
            corrections.push(Correction::Padded {
                which,
                added: expected - values.len(),
            });
            values.resize(expected, self.fill);
        } else if values.len() > expected {
            corrections.push(Correction::Truncated {
                which,
                removed: values.len() - expected,
            });
            values.truncate(expected);
        }
        values
    }

    fn clamp(
        &self,
        which: &'static str,
        values: &mut [f64],
        min: f64,
        max: f64,
        corrections: &mut Vec<Correction>,
    ) {
        for (index, value) in values.iter_mut().enumerate() {
            let clamped = value.clamp(min, max);
            if clamped != *value {
                corrections.push(Correction::Clamped {
                    which,
                    index,
                    from: *value,
                    to: clamped,
                });
                *value = clamped;
            }
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
