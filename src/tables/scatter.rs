//! Event table behind the scatter-plot explorer.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, Result};
use crate::math::round_to;

/// One simulated event: its process, MC weight and feature values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterRow {
    pub category: String,
    pub total_weight: f64,
    pub values: Vec<f64>,
}

/// On-disk form, validated into a [`ScatterTable`] on load
#[derive(Deserialize)]
struct ScatterTableFile {
    features: Vec<String>,
    rows: Vec<ScatterRow>,
}

#[derive(Debug, Clone, Default)]
pub struct ScatterTable {
    features: Vec<String>,
    rows: Vec<ScatterRow>,
}

impl ScatterTable {
    pub fn new(features: Vec<String>, rows: Vec<ScatterRow>) -> Result<Self> {
        if let Some(row) = rows.iter().find(|row| row.values.len() != features.len()) {
            return Err(ExplorerError::InvalidTable {
                table: "scatter".to_string(),
                reason: format!(
                    "{} row has {} values for {} features",
                    row.category,
                    row.values.len(),
                    features.len()
                ),
            });
        }
        Ok(Self { features, rows })
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn rows(&self) -> &[ScatterRow] {
        &self.rows
    }

    /// Column index of a feature
    pub fn feature_index(&self, feature: &str) -> Result<usize> {
        self.features
            .iter()
            .position(|name| name == feature)
            .ok_or_else(|| ExplorerError::FeatureNotFound {
                feature: feature.to_string(),
            })
    }

    /// Slider limits for a feature: column min and max, rounded to 2 decimals
    ///
    /// An empty table yields `[0, 0]`.
    pub fn feature_bounds(&self, feature: &str) -> Result<AxisRange> {
        let column = self.feature_index(feature)?;
        let mut values = self.rows.iter().map(|row| row.values[column]);

        let Some(first) = values.next() else {
            return Ok(AxisRange::new(0.0, 0.0));
        };
        let (low, high) = values.fold((first, first), |(low, high), v| (low.min(v), high.max(v)));

        Ok(AxisRange::new(round_to(low, 2), round_to(high, 2)))
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.category.as_str()) {
                seen.push(&row.category);
            }
        }
        seen
    }
}

impl<'de> Deserialize<'de> for ScatterTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let file = ScatterTableFile::deserialize(deserializer)?;
        Self::new(file.features, file.rows).map_err(de::Error::custom)
    }
}

/// Closed interval on one scatter-plot axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub low: f64,
    pub high: f64,
}

impl AxisRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Plot range with 1% of the span added on both sides
    pub fn padded(&self) -> AxisRange {
        let pad = (self.high - self.low) * 0.01;
        AxisRange::new(self.low - pad, self.high + pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn table() -> ScatterTable {
        let row = |category: &str, values: [f64; 2]| ScatterRow {
            category: category.to_string(),
            total_weight: 1.0,
            values: values.to_vec(),
        };
        ScatterTable::new(
            vec!["ETmiss".to_string(), "dRll".to_string()],
            vec![
                row("ZZ", [90.123, 0.5]),
                row("DM_300", [210.0, 1.25]),
                row("ZZ", [75.556, 2.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_feature_bounds() {
        let bounds = table().feature_bounds("ETmiss").unwrap();
        assert_eq!(bounds, AxisRange::new(75.56, 210.0));

        let err = table().feature_bounds("mll").unwrap_err();
        assert_eq!(err.error_code(), "FEATURE_NOT_FOUND");
    }

    #[test]
    fn test_categories_first_seen() {
        assert_eq!(table().categories(), vec!["ZZ", "DM_300"]);
    }

    #[test]
    fn test_deserialize_validates_row_width() {
        let json = r#"{"features": ["ETmiss", "dRll"],
                       "rows": [{"category": "ZZ", "total_weight": 1.0, "values": [1.0]}]}"#;
        assert!(serde_json::from_str::<ScatterTable>(json).is_err());

        let json = r#"{"features": ["ETmiss"],
                       "rows": [{"category": "ZZ", "total_weight": 1.0, "values": [1.0]}]}"#;
        let table: ScatterTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn test_padded_range() {
        let padded = AxisRange::new(0.0, 100.0).padded();
        assert_relative_eq!(padded.low, -1.0);
        assert_relative_eq!(padded.high, 101.0);
        assert!(AxisRange::new(1.0, 2.0).contains(2.0));
    }
}
