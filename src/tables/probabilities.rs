//! Per-event signal probabilities for every evaluated design.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::EventClass;
use crate::error::{ExplorerError, Result};
use crate::topology::DesignKey;

/// One test event with its MC weight and predicted signal probabilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityRow {
    pub event_id: u32,
    pub true_label: EventClass,
    pub weight: f64,
    pub probabilities: HashMap<DesignKey, f64>,
}

impl ProbabilityRow {
    /// Signal probability predicted by a design
    pub fn probability(&self, key: &DesignKey) -> Option<f64> {
        self.probabilities.get(key).copied()
    }
}

/// Ordered probability rows sharing one set of design columns
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "Vec<ProbabilityRow>")]
pub struct ProbabilityTable {
    designs: BTreeSet<DesignKey>,
    rows: Vec<ProbabilityRow>,
    by_event: HashMap<u32, usize>,
}

impl ProbabilityTable {
    /// Build the table, checking that it is rectangular
    ///
    /// # Errors
    /// Returns `InvalidTable` if:
    /// - rows disagree on the set of design columns
    /// - a probability lies outside [0, 1]
    /// - an event id appears twice
    pub fn from_rows(rows: Vec<ProbabilityRow>) -> Result<Self> {
        let designs: BTreeSet<DesignKey> = rows
            .first()
            .map(|row| row.probabilities.keys().cloned().collect())
            .unwrap_or_default();

        let mut by_event = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.probabilities.len() != designs.len()
                || !row.probabilities.keys().all(|key| designs.contains(key))
            {
                return Err(invalid(format!(
                    "event {} does not carry the same design columns as the first row",
                    row.event_id
                )));
            }

            if let Some((key, p)) = row
                .probabilities
                .iter()
                .find(|(_, p)| !(0.0..=1.0).contains(*p))
            {
                return Err(invalid(format!(
                    "event {} has probability {} for {} outside [0, 1]",
                    row.event_id, p, key
                )));
            }

            if by_event.insert(row.event_id, i).is_some() {
                return Err(invalid(format!("duplicate event id {}", row.event_id)));
            }
        }

        Ok(Self {
            designs,
            rows,
            by_event,
        })
    }

    pub fn rows(&self) -> &[ProbabilityRow] {
        &self.rows
    }

    pub fn designs(&self) -> impl Iterator<Item = &DesignKey> {
        self.designs.iter()
    }

    pub fn has_design(&self, key: &DesignKey) -> bool {
        self.designs.contains(key)
    }

    /// Fail with `KeyNotFound` unless the design column exists
    pub fn require_design(&self, key: &DesignKey) -> Result<()> {
        if self.has_design(key) {
            Ok(())
        } else {
            Err(ExplorerError::KeyNotFound {
                key: key.to_string(),
            })
        }
    }

    /// Row of a single event
    pub fn row(&self, event_id: u32) -> Result<&ProbabilityRow> {
        self.by_event
            .get(&event_id)
            .map(|&i| &self.rows[i])
            .ok_or(ExplorerError::EventNotFound { event_id })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TryFrom<Vec<ProbabilityRow>> for ProbabilityTable {
    type Error = ExplorerError;

    fn try_from(rows: Vec<ProbabilityRow>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

fn invalid(reason: String) -> ExplorerError {
    ExplorerError::InvalidTable {
        table: "probability".to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(event_id: u32, label: EventClass, columns: &[(&str, f64)]) -> ProbabilityRow {
        ProbabilityRow {
            event_id,
            true_label: label,
            weight: 1.0,
            probabilities: columns
                .iter()
                .map(|&(key, p)| (DesignKey::from(key), p))
                .collect(),
        }
    }

    #[test]
    fn test_from_rows() {
        let table = ProbabilityTable::from_rows(vec![
            row(1, EventClass::Signal, &[("(4,)", 0.9), ("(2,)", 0.7)]),
            row(2, EventClass::Background, &[("(4,)", 0.1), ("(2,)", 0.2)]),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.has_design(&DesignKey::from("(2,)")));
        assert_eq!(table.row(2).unwrap().true_label, EventClass::Background);
        assert_eq!(table.row(9).unwrap_err().error_code(), "EVENT_NOT_FOUND");
    }

    #[test]
    fn test_rejects_ragged_columns() {
        let result = ProbabilityTable::from_rows(vec![
            row(1, EventClass::Signal, &[("(4,)", 0.9)]),
            row(2, EventClass::Background, &[("(2,)", 0.2)]),
        ]);
        assert_eq!(result.unwrap_err().error_code(), "INVALID_TABLE");
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        let result =
            ProbabilityTable::from_rows(vec![row(1, EventClass::Signal, &[("(4,)", 1.5)])]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_duplicate_event() {
        let result = ProbabilityTable::from_rows(vec![
            row(1, EventClass::Signal, &[("(4,)", 0.9)]),
            row(1, EventClass::Background, &[("(4,)", 0.2)]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[
            {"event_id": 1, "true_label": 1, "weight": 2.0, "probabilities": {"(4,)": 0.9}},
            {"event_id": 2, "true_label": 0, "weight": 3.0, "probabilities": {"(4,)": 0.4}}
        ]"#;
        let table: ProbabilityTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.len(), 2);

        let ragged = r#"[
            {"event_id": 1, "true_label": 1, "weight": 2.0, "probabilities": {"(4,)": 0.9}},
            {"event_id": 2, "true_label": 0, "weight": 3.0, "probabilities": {}}
        ]"#;
        assert!(serde_json::from_str::<ProbabilityTable>(ragged).is_err());
    }

    #[test]
    fn test_empty_table_has_no_designs() {
        let table = ProbabilityTable::default();
        assert!(table.is_empty());
        assert!(table.require_design(&DesignKey::from("(4,)")).is_err());
    }
}
