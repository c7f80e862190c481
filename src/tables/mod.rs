//! Lookup Tables
//!
//! Immutable tables produced by the offline training pipeline. They are
//! loaded once into a [`DataSet`] and then only read.

mod dataset;
mod events;
mod metrics;
mod probabilities;
mod scatter;

pub use dataset::DataSet;
pub use events::{EventRecord, EventTable, FeatureValue};
pub use metrics::{Metrics, MetricsTable};
pub use probabilities::{ProbabilityRow, ProbabilityTable};
pub use scatter::{AxisRange, ScatterRow, ScatterTable};

use serde::{Deserialize, Serialize};

/// True class of a simulated event (`0` background, `1` signal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EventClass {
    Background,
    Signal,
}

impl EventClass {
    pub fn label(self) -> u8 {
        match self {
            EventClass::Background => 0,
            EventClass::Signal => 1,
        }
    }
}

impl TryFrom<u8> for EventClass {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(EventClass::Background),
            1 => Ok(EventClass::Signal),
            other => Err(format!("event label must be 0 or 1, got {}", other)),
        }
    }
}

impl From<EventClass> for u8 {
    fn from(class: EventClass) -> Self {
        class.label()
    }
}

/// Set of event classes enabled in the histogram legend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFilter {
    pub background: bool,
    pub signal: bool,
}

impl ClassFilter {
    pub fn all() -> Self {
        Self {
            background: true,
            signal: true,
        }
    }

    pub fn none() -> Self {
        Self {
            background: false,
            signal: false,
        }
    }

    /// Filter enabling exactly the given labels (unknown labels are ignored)
    pub fn from_labels<I: IntoIterator<Item = u8>>(labels: I) -> Self {
        let mut filter = Self::none();
        for label in labels {
            match EventClass::try_from(label) {
                Ok(EventClass::Background) => filter.background = true,
                Ok(EventClass::Signal) => filter.signal = true,
                Err(_) => {}
            }
        }
        filter
    }

    pub fn contains(&self, class: EventClass) -> bool {
        match class {
            EventClass::Background => self.background,
            EventClass::Signal => self.signal,
        }
    }
}

impl Default for ClassFilter {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_class_from_label() {
        assert_eq!(EventClass::try_from(0u8).unwrap(), EventClass::Background);
        assert_eq!(EventClass::try_from(1u8).unwrap(), EventClass::Signal);
        assert!(EventClass::try_from(2u8).is_err());
    }

    #[test]
    fn test_event_class_serde() {
        let class: EventClass = serde_json::from_str("1").unwrap();
        assert_eq!(class, EventClass::Signal);
        assert!(serde_json::from_str::<EventClass>("3").is_err());
    }

    #[test]
    fn test_class_filter() {
        let filter = ClassFilter::from_labels([1]);
        assert!(filter.contains(EventClass::Signal));
        assert!(!filter.contains(EventClass::Background));

        let empty = ClassFilter::from_labels(std::iter::empty());
        assert_eq!(empty, ClassFilter::none());
    }
}
