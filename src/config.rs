//! Explorer configuration
//!
//! Loaded once at start-up from an optional JSON file. Every field has a
//! default, so a partial file only overrides what it names.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, Result};
use crate::layout::LayoutConfig;

/// Slack on `1 / histogram_bin_width` being a whole number of bins
const BIN_COUNT_TOLERANCE: f64 = 1e-6;

/// File names of the lookup tables inside the data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFiles {
    pub metrics: String,
    pub probabilities: String,
    pub events: String,
    pub scatter: String,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            metrics: "metrics.json".to_string(),
            probabilities: "probabilities.json".to_string(),
            events: "events.json".to_string(),
            scatter: "scatter.json".to_string(),
        }
    }
}

/// Scatter-plot explorer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Feature on the fixed x axis
    pub x_feature: String,
    /// Feature initially chosen for the y axis
    pub default_y_feature: String,
    /// Category counted as signal in the region significance
    pub signal_category: String,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            x_feature: "ETmiss".to_string(),
            default_y_feature: "dRll".to_string(),
            signal_category: "DM_300".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Directory holding the lookup tables
    pub data_dir: PathBuf,
    pub files: DataFiles,
    pub layout: LayoutConfig,
    /// Width of the classifier-output histogram bins
    pub histogram_bin_width: f64,
    pub scatter: ScatterConfig,
    /// Seed for the diagram's edge values; entropy when unset
    pub seed: Option<u64>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            files: DataFiles::default(),
            layout: LayoutConfig::default(),
            histogram_bin_width: 0.05,
            scatter: ScatterConfig::default(),
            seed: None,
        }
    }
}

impl ExplorerConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExplorerError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| ExplorerError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: ExplorerConfig = serde_json::from_str(&content)?;
        config.validate()?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check the numeric settings
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        if !layout.x_pad.is_finite() || !(0.0..1.0).contains(&layout.x_pad) {
            return Err(invalid(format!("x_pad {} outside [0, 1)", layout.x_pad)));
        }
        if !layout.edge_value_min.is_finite()
            || !layout.edge_value_max.is_finite()
            || layout.edge_value_min < 0.0
            || layout.edge_value_min > layout.edge_value_max
        {
            return Err(invalid(format!(
                "edge value range [{}, {}] is empty, negative or not finite",
                layout.edge_value_min, layout.edge_value_max
            )));
        }

        let width = self.histogram_bin_width;
        if !(width > 0.0 && width <= 1.0) {
            return Err(invalid(format!("histogram bin width {} outside (0, 1]", width)));
        }
        let bins = 1.0 / width;
        if (bins - bins.round()).abs() > BIN_COUNT_TOLERANCE {
            return Err(invalid(format!(
                "histogram bin width {} does not divide [0, 1] evenly",
                width
            )));
        }
        Ok(())
    }

    /// Full path of a table file
    pub fn data_path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Random source for diagram edges: seeded when `seed` is set
    pub fn edge_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn invalid(reason: String) -> ExplorerError {
    ExplorerError::InvalidConfig { reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_is_valid() {
        let config = ExplorerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.data_path("metrics.json"), PathBuf::from("data/metrics.json"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("explorer.json");
        fs::write(&path, r#"{"seed": 42, "scatter": {"signal_category": "DM_500"}}"#).unwrap();

        let config = ExplorerConfig::load(&path).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.scatter.signal_category, "DM_500");
        assert_eq!(config.scatter.x_feature, "ETmiss");
        assert_eq!(config.histogram_bin_width, 0.05);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = ExplorerConfig::default();
        config.histogram_bin_width = 0.0;
        assert_eq!(config.validate().unwrap_err().error_code(), "INVALID_CONFIG");

        let mut config = ExplorerConfig::default();
        config.layout.edge_value_min = 2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bin_width_must_divide_unit_interval() {
        let mut config = ExplorerConfig::default();
        config.histogram_bin_width = 0.3;
        assert_eq!(config.validate().unwrap_err().error_code(), "INVALID_CONFIG");

        for width in [0.01, 0.02, 0.05, 0.1, 0.2, 0.25, 0.5, 1.0] {
            config.histogram_bin_width = width;
            assert!(config.validate().is_ok(), "width {} rejected", width);
        }
    }

    #[test]
    fn test_rejects_non_finite_layout_values() {
        let mut config = ExplorerConfig::default();
        config.layout.edge_value_max = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = ExplorerConfig::default();
        config.layout.edge_value_min = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = ExplorerConfig::default();
        config.layout.edge_value_max = f64::INFINITY;
        assert!(config.validate().is_err());

        let mut config = ExplorerConfig::default();
        config.layout.x_pad = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = ExplorerConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }
}
