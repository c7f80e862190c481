//! Metrics & Significance
//!
//! Read-only computations over the probability and metrics tables:
//! - accuracy/F1 lookup for a topology
//! - cut-based significance with weighted category counts
//! - classifier-output histogram
//! - single-event prediction readout

mod histogram;
mod prediction;
mod significance;

pub use histogram::{histogram, Histogram, HistogramBin};
pub use prediction::{predict, Prediction, DECISION_THRESHOLD};
pub use significance::{significance, SignificanceReport, WeightedCounts};

use log::debug;

use crate::error::Result;
use crate::tables::{Metrics, MetricsTable};
use crate::topology::Topology;

/// Accuracy and F1 score of the topology's design
///
/// # Errors
/// Returns `KeyNotFound` if the (even-coerced) design was never evaluated.
pub fn metrics(table: &MetricsTable, topology: &Topology) -> Result<Metrics> {
    let key = topology.design_key();
    let metrics = table.get(&key)?;
    debug!("Metrics for {}: {:?}", key, metrics);
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::DesignKey;
    use std::collections::HashMap;

    #[test]
    fn test_metrics_coerces_odd_sizes() {
        let mut entries = HashMap::new();
        entries.insert(
            DesignKey::from("(4, 8)"),
            Metrics {
                accuracy: 0.87,
                f1: 0.81,
            },
        );
        let table = MetricsTable::new(entries);

        let topology = Topology::new(vec![3, 7], 5).unwrap();
        assert_eq!(metrics(&table, &topology).unwrap().accuracy, 0.87);

        let missing = Topology::new(vec![3], 5).unwrap();
        assert!(metrics(&table, &missing).is_err());
    }
}
