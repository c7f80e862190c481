//! Start-up loading of every lookup table.

use std::fs;
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;

use super::{EventTable, MetricsTable, ProbabilityTable, ScatterTable};
use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, Result};

/// All tables the explorer reads, loaded once and shared by reference
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    pub metrics: MetricsTable,
    pub probabilities: ProbabilityTable,
    pub events: EventTable,
    pub scatter: ScatterTable,
}

impl DataSet {
    /// Load the tables named in the configuration from its data directory
    pub fn load(config: &ExplorerConfig) -> Result<Self> {
        let files = &config.files;

        let metrics: MetricsTable = read_json(&config.data_path(&files.metrics))?;
        let probabilities: ProbabilityTable = read_json(&config.data_path(&files.probabilities))?;
        let events: EventTable = read_json(&config.data_path(&files.events))?;
        let scatter: ScatterTable = read_json(&config.data_path(&files.scatter))?;

        info!(
            "Loaded {} designs, {} scored events, {} shortlisted events, {} scatter rows from {}",
            metrics.len(),
            probabilities.len(),
            events.events().len(),
            scatter.rows().len(),
            config.data_dir.display()
        );

        Ok(Self {
            metrics,
            probabilities,
            events,
            scatter,
        })
    }

    /// Number of model input features
    pub fn input_features(&self) -> usize {
        self.events.features().len()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(ExplorerError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| ExplorerError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_table_file() {
        let dir = tempdir().unwrap();
        let config = ExplorerConfig {
            data_dir: dir.path().to_path_buf(),
            ..ExplorerConfig::default()
        };

        let err = DataSet::load(&config).unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn test_invalid_table_surfaces_as_serialization_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("metrics.json"), "{}").unwrap();
        fs::write(
            dir.path().join("probabilities.json"),
            r#"[{"event_id": 1, "true_label": 4, "weight": 1.0, "probabilities": {}}]"#,
        )
        .unwrap();

        let config = ExplorerConfig {
            data_dir: dir.path().to_path_buf(),
            ..ExplorerConfig::default()
        };
        let err = DataSet::load(&config).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
