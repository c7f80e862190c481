//! Output-node readout for a single event.

use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, Result};
use crate::math::round_to;
use crate::tables::{EventClass, ProbabilityTable};
use crate::topology::Topology;

/// Probability at or above which an event is classified as signal
pub const DECISION_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub event_id: u32,
    pub signal_probability: f64,
    pub background_probability: f64,
    pub predicted: EventClass,
    pub truth: EventClass,
}

impl Prediction {
    pub fn is_correct(&self) -> bool {
        self.predicted == self.truth
    }
}

/// Classify one event with the topology's design
pub fn predict(table: &ProbabilityTable, event_id: u32, topology: &Topology) -> Result<Prediction> {
    let key = topology.design_key();
    table.require_design(&key)?;

    let row = table.row(event_id)?;
    let signal_probability = row
        .probability(&key)
        .ok_or_else(|| ExplorerError::KeyNotFound {
            key: key.to_string(),
        })?;

    let predicted = if signal_probability >= DECISION_THRESHOLD {
        EventClass::Signal
    } else {
        EventClass::Background
    };

    Ok(Prediction {
        event_id,
        signal_probability,
        background_probability: round_to(1.0 - signal_probability, 2),
        predicted,
        truth: row.true_label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::ProbabilityRow;
    use crate::topology::DesignKey;

    fn table() -> ProbabilityTable {
        ProbabilityTable::from_rows(vec![
            ProbabilityRow {
                event_id: 10,
                true_label: EventClass::Signal,
                weight: 1.0,
                probabilities: [(DesignKey::from("(2, 2)"), 0.5)].into_iter().collect(),
            },
            ProbabilityRow {
                event_id: 11,
                true_label: EventClass::Signal,
                weight: 1.0,
                probabilities: [(DesignKey::from("(2, 2)"), 0.237)].into_iter().collect(),
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let topology = Topology::new(vec![1, 2], 4).unwrap();
        let prediction = predict(&table(), 10, &topology).unwrap();

        assert_eq!(prediction.predicted, EventClass::Signal);
        assert_eq!(prediction.background_probability, 0.5);
        assert!(prediction.is_correct());
    }

    #[test]
    fn test_misclassified_event() {
        let topology = Topology::new(vec![2, 2], 4).unwrap();
        let prediction = predict(&table(), 11, &topology).unwrap();

        assert_eq!(prediction.predicted, EventClass::Background);
        assert_eq!(prediction.background_probability, 0.76);
        assert!(!prediction.is_correct());
    }

    #[test]
    fn test_unknown_event() {
        let topology = Topology::new(vec![2, 2], 4).unwrap();
        let err = predict(&table(), 99, &topology).unwrap_err();
        assert_eq!(err.error_code(), "EVENT_NOT_FOUND");
    }
}
