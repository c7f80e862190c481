//! Scatter-Plot Explorer
//!
//! Rectangular region and category selection over the simulated event
//! table, with per-category weighted counts and the region's significance.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, Result};
use crate::math::{round_to, significance_ratio};
use crate::tables::{AxisRange, ScatterRow, ScatterTable};

/// Region and categories chosen in the scatter panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterQuery {
    pub x_feature: String,
    pub y_feature: String,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    /// Categories shown; everything else is dropped
    pub categories: Vec<String>,
}

impl ScatterQuery {
    /// Query covering the full extent of both features and every category
    pub fn full(table: &ScatterTable, x_feature: &str, y_feature: &str) -> Result<Self> {
        Ok(Self {
            x_feature: x_feature.to_string(),
            y_feature: y_feature.to_string(),
            x_range: table.feature_bounds(x_feature)?,
            y_range: table.feature_bounds(y_feature)?,
            categories: table.categories().into_iter().map(String::from).collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub category: String,
}

/// Weighted count of one category inside the region and over the whole table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub now: f64,
    pub full: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSelection {
    pub points: Vec<ScatterPoint>,
    /// One entry per table category, in first-seen order
    pub counts: Vec<CategoryCount>,
    /// `S / sqrt(B)` of the selected events; `None` without background
    pub significance: Option<f64>,
    /// Axis ranges for plotting, padded by 1%
    pub x_view: AxisRange,
    pub y_view: AxisRange,
}

impl ScatterSelection {
    pub fn score(&self) -> Result<f64> {
        self.significance
            .ok_or_else(|| ExplorerError::UndefinedArithmetic {
                reason: "no background events in the selected region".to_string(),
            })
    }
}

/// Apply a scatter query
///
/// Rows count as signal when their category equals `signal_category`; every
/// other selected row is background.
pub fn explore(
    table: &ScatterTable,
    query: &ScatterQuery,
    signal_category: &str,
) -> Result<ScatterSelection> {
    let x = table.feature_index(&query.x_feature)?;
    let y = table.feature_index(&query.y_feature)?;

    let selected: Vec<_> = table
        .rows()
        .iter()
        .filter(|row| {
            query.x_range.contains(row.values[x])
                && query.y_range.contains(row.values[y])
                && query.categories.iter().any(|c| *c == row.category)
        })
        .collect();

    let counts = table
        .categories()
        .into_iter()
        .map(|category| CategoryCount {
            category: category.to_string(),
            now: category_weight(selected.iter().copied(), category),
            full: category_weight(table.rows().iter(), category),
        })
        .collect();

    let signal: f64 = selected
        .iter()
        .filter(|row| row.category == signal_category)
        .map(|row| row.total_weight)
        .sum();
    let total: f64 = selected.iter().map(|row| row.total_weight).sum();
    let significance = significance_ratio(signal, total - signal);

    debug!(
        "Scatter {} vs {}: {} of {} rows selected",
        query.x_feature,
        query.y_feature,
        selected.len(),
        table.rows().len()
    );

    let points = selected
        .iter()
        .map(|row| ScatterPoint {
            x: row.values[x],
            y: row.values[y],
            category: row.category.clone(),
        })
        .collect();

    Ok(ScatterSelection {
        points,
        counts,
        significance,
        x_view: query.x_range.padded(),
        y_view: query.y_range.padded(),
    })
}

/// Summed weight of one category, rounded to 1 decimal
fn category_weight<'a>(rows: impl Iterator<Item = &'a ScatterRow>, category: &str) -> f64 {
    let weight: f64 = rows
        .filter(|row| row.category == category)
        .map(|row| row.total_weight)
        .sum();
    round_to(weight, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn table() -> ScatterTable {
        let row = |category: &str, weight: f64, etmiss: f64, drll: f64| ScatterRow {
            category: category.to_string(),
            total_weight: weight,
            values: vec![etmiss, drll],
        };
        ScatterTable::new(
            vec!["ETmiss".to_string(), "dRll".to_string()],
            vec![
                row("ZZ", 4.0, 80.0, 1.0),
                row("DM_300", 3.0, 200.0, 0.5),
                row("WZ", 5.0, 150.0, 2.5),
                row("DM_300", 1.0, 40.0, 3.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_full_query_selects_everything() {
        let table = table();
        let query = ScatterQuery::full(&table, "ETmiss", "dRll").unwrap();
        let selection = explore(&table, &query, "DM_300").unwrap();

        assert_eq!(selection.points.len(), 4);
        for count in &selection.counts {
            assert_eq!(count.now, count.full);
        }
        // S = 4, B = 9
        assert_relative_eq!(selection.score().unwrap(), 1.33);
    }

    #[test]
    fn test_region_and_category_filter() {
        let table = table();
        let mut query = ScatterQuery::full(&table, "ETmiss", "dRll").unwrap();
        query.x_range = AxisRange::new(100.0, 250.0);
        query.categories = vec!["DM_300".to_string(), "ZZ".to_string()];

        let selection = explore(&table, &query, "DM_300").unwrap();
        assert_eq!(selection.points.len(), 1);
        assert_eq!(selection.points[0].category, "DM_300");

        let dm = selection.counts.iter().find(|c| c.category == "DM_300").unwrap();
        assert_eq!(dm.now, 3.0);
        assert_eq!(dm.full, 4.0);

        assert!(selection.significance.is_none());
        assert_eq!(selection.score().unwrap_err().error_code(), "UNDEFINED_ARITHMETIC");
    }

    #[test]
    fn test_unknown_feature() {
        let table = table();
        let mut query = ScatterQuery::full(&table, "ETmiss", "dRll").unwrap();
        query.y_feature = "mll".to_string();
        assert!(explore(&table, &query, "DM_300").is_err());
    }
}
