//! Accuracy and F1 scores per evaluated design.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, Result};
use crate::topology::DesignKey;

/// Test-set scores of one trained design
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(alias = "Accuracy")]
    pub accuracy: f64,
    #[serde(alias = "f1-score")]
    pub f1: f64,
}

/// Mapping from design key to scores
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsTable {
    entries: HashMap<DesignKey, Metrics>,
}

impl MetricsTable {
    pub fn new(entries: HashMap<DesignKey, Metrics>) -> Self {
        Self { entries }
    }

    /// Look up the scores of a design
    ///
    /// # Errors
    /// Returns `KeyNotFound` if the design was never evaluated.
    pub fn get(&self, key: &DesignKey) -> Result<Metrics> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| ExplorerError::KeyNotFound {
                key: key.to_string(),
            })
    }

    pub fn contains(&self, key: &DesignKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_column_aliases() {
        let json = r#"{
            "(4,)": {"Accuracy": 0.91, "f1-score": 0.88},
            "(4, 8)": {"accuracy": 0.93, "f1": 0.9}
        }"#;
        let table: MetricsTable = serde_json::from_str(json).unwrap();

        assert_eq!(table.len(), 2);
        let metrics = table.get(&DesignKey::from("(4,)")).unwrap();
        assert_eq!(metrics.accuracy, 0.91);
        assert_eq!(metrics.f1, 0.88);
    }

    #[test]
    fn test_missing_key() {
        let table = MetricsTable::default();
        let err = table.get(&DesignKey::from("(2,)")).unwrap_err();
        assert_eq!(err.error_code(), "KEY_NOT_FOUND");
    }
}
