//! Cut-based signal significance
//!
//! Events at or above the cut on the classifier output are "selected".
//! Significance is `S / sqrt(B)` over the weighted selected signal and
//! background.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, Result};
use crate::math::{round_to, significance_ratio};
use crate::tables::{ClassFilter, EventClass, ProbabilityTable};
use crate::topology::Topology;

/// Weighted event counts after the cut ("now") and before it ("total")
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightedCounts {
    pub now_signal: f64,
    pub now_background: f64,
    pub total_signal: f64,
    pub total_background: f64,
}

/// Result of a significance query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignificanceReport {
    /// `S / sqrt(B)` rounded to 2 decimals; `None` when the selected
    /// background weight is not positive
    pub significance: Option<f64>,
    /// Counts rounded to 1 decimal
    pub counts: WeightedCounts,
}

impl SignificanceReport {
    /// Significance score, or `UndefinedArithmetic` for a selection
    /// without background
    pub fn score(&self) -> Result<f64> {
        self.significance
            .ok_or_else(|| ExplorerError::UndefinedArithmetic {
                reason: format!(
                    "selected background weight is {}; S/sqrt(B) is undefined",
                    self.counts.now_background
                ),
            })
    }
}

#[derive(Default)]
struct Sums {
    signal: f64,
    background: f64,
}

impl Sums {
    fn add(&mut self, class: EventClass, weight: f64) {
        match class {
            EventClass::Signal => self.signal += weight,
            EventClass::Background => self.background += weight,
        }
    }
}

/// Significance of the events passing `cut` for the topology's design
///
/// Categories outside `filter` are excluded from both the selected and the
/// total counts.
///
/// # Errors
/// Returns `KeyNotFound` if the design has no probability column.
pub fn significance(
    table: &ProbabilityTable,
    topology: &Topology,
    cut: f64,
    filter: ClassFilter,
) -> Result<SignificanceReport> {
    let key = topology.design_key();
    table.require_design(&key)?;

    let mut selected = Sums::default();
    let mut total = Sums::default();

    for row in table.rows().iter().filter(|row| filter.contains(row.true_label)) {
        total.add(row.true_label, row.weight);

        let passes = row.probability(&key).is_some_and(|p| p >= cut);
        if passes {
            selected.add(row.true_label, row.weight);
        }
    }

    let significance = significance_ratio(selected.signal, selected.background);
    if significance.is_none() {
        warn!(
            "No background passes cut {} for design {}; significance undefined",
            cut, key
        );
    }

    let counts = WeightedCounts {
        now_signal: round_to(selected.signal, 1),
        now_background: round_to(selected.background, 1),
        total_signal: round_to(total.signal, 1),
        total_background: round_to(total.background, 1),
    };

    debug!("Design {} cut {}: {:?}", key, cut, counts);

    Ok(SignificanceReport {
        significance,
        counts,
    })
}
