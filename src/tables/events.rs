//! Shortlisted events shown on the diagram's input nodes.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, Result};
use crate::math::round_to;

/// A shortlisted event with raw and standardized feature values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub event_id: u32,
    /// Physics process, e.g. `DM_300` or `ZZ`
    pub category: String,
    pub total_weight: f64,
    pub raw: Vec<f64>,
    pub scaled: Vec<f64>,
}

impl EventRecord {
    /// Dropdown label: `"<id> - <category>"`
    pub fn label(&self) -> String {
        format!("{} - {}", self.event_id, self.category)
    }
}

/// One input node value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureValue {
    pub feature: String,
    pub value: f64,
}

/// On-disk form, validated into an [`EventTable`] on load
#[derive(Deserialize)]
struct EventTableFile {
    features: Vec<String>,
    events: Vec<EventRecord>,
}

/// Feature header plus the shortlisted events
#[derive(Debug, Clone, Default)]
pub struct EventTable {
    features: Vec<String>,
    events: Vec<EventRecord>,
}

impl EventTable {
    /// Build the table, checking every value vector against the header
    pub fn new(features: Vec<String>, events: Vec<EventRecord>) -> Result<Self> {
        for event in &events {
            if event.raw.len() != features.len() || event.scaled.len() != features.len() {
                return Err(ExplorerError::InvalidTable {
                    table: "event".to_string(),
                    reason: format!(
                        "event {} has {} raw / {} scaled values for {} features",
                        event.event_id,
                        event.raw.len(),
                        event.scaled.len(),
                        features.len()
                    ),
                });
            }
        }
        Ok(Self { features, events })
    }

    /// Model input features, in network input order
    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn event(&self, event_id: u32) -> Result<&EventRecord> {
        self.events
            .iter()
            .find(|event| event.event_id == event_id)
            .ok_or(ExplorerError::EventNotFound { event_id })
    }

    /// Values for the input nodes of an event, rounded to 2 decimals
    pub fn input_values(&self, event_id: u32, scaled: bool) -> Result<Vec<FeatureValue>> {
        let event = self.event(event_id)?;
        let values = if scaled { &event.scaled } else { &event.raw };

        Ok(self
            .features
            .iter()
            .zip(values)
            .map(|(feature, &value)| FeatureValue {
                feature: feature.clone(),
                value: round_to(value, 2),
            })
            .collect())
    }

    pub fn label(&self, event_id: u32) -> Result<String> {
        Ok(self.event(event_id)?.label())
    }
}

impl<'de> Deserialize<'de> for EventTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let file = EventTableFile::deserialize(deserializer)?;
        Self::new(file.features, file.events).map_err(de::Error::custom)
    }
}
