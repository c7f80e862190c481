//! Dashboard Facade
//!
//! One entry point per dashboard panel. Each call takes a complete
//! [`Selection`] snapshot, applies the panel gating (placeholders while the
//! model is off) and delegates to the layout, stats and scatter modules.

mod selection;

pub use selection::{ControlState, PanelMode, Selection};

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ExplorerConfig;
use crate::error::Result;
use crate::layout::{layout, DiagramLayout};
use crate::math::round_to;
use crate::scatter::{explore, ScatterQuery, ScatterSelection};
use crate::stats::{self, Histogram, Prediction, WeightedCounts};
use crate::tables::{AxisRange, DataSet, FeatureValue, Metrics};

/// Legend count shown for every class while the model is off
const PLACEHOLDER_COUNT: f64 = 50.0;

/// Network diagram together with the gating state it was built under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramView {
    pub mode: PanelMode,
    pub layout: DiagramLayout,
}

/// Immutable tables plus configuration, shared by every session
#[derive(Debug, Clone)]
pub struct Dashboard {
    data: DataSet,
    config: ExplorerConfig,
}

impl Dashboard {
    pub fn new(data: DataSet, config: ExplorerConfig) -> Self {
        Self { data, config }
    }

    /// Load the tables named in `config`
    pub fn load(config: ExplorerConfig) -> Result<Self> {
        let data = DataSet::load(&config)?;
        Ok(Self::new(data, config))
    }

    pub fn data(&self) -> &DataSet {
        &self.data
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn edge_rng(&self) -> StdRng {
        self.config.edge_rng()
    }

    /// Dropdown entries of the event shortlist
    pub fn event_options(&self) -> Vec<(u32, String)> {
        self.data
            .events
            .events()
            .iter()
            .map(|event| (event.event_id, event.label()))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Model panels
    // ------------------------------------------------------------------------

    /// Network diagram for the selected topology
    pub fn diagram<R: Rng + ?Sized>(
        &self,
        selection: &Selection,
        rng: &mut R,
    ) -> Result<DiagramView> {
        let topology = selection.topology(self.data.input_features())?;
        Ok(DiagramView {
            mode: selection.mode(),
            layout: layout(&topology, &self.config.layout, rng),
        })
    }

    /// Accuracy and F1 rounded to 2 decimals; `None` while the model is off
    pub fn metrics_readout(&self, selection: &Selection) -> Result<Option<Metrics>> {
        if !selection.mode().is_active() {
            return Ok(None);
        }
        let topology = selection.topology(self.data.input_features())?;
        let metrics = stats::metrics(&self.data.metrics, &topology)?;
        Ok(Some(Metrics {
            accuracy: round_to(metrics.accuracy, 2),
            f1: round_to(metrics.f1, 2),
        }))
    }

    /// Significance label above the histogram
    ///
    /// Reads `0.0` while the model is off. With the model on, a cut that
    /// leaves no background yields `UndefinedArithmetic`.
    pub fn significance_readout(&self, selection: &Selection) -> Result<f64> {
        if !selection.mode().is_active() {
            return Ok(0.0);
        }
        let topology = selection.topology(self.data.input_features())?;
        let report = stats::significance(
            &self.data.probabilities,
            &topology,
            selection.cut,
            selection.classes,
        )?;
        report.score()
    }

    /// Weighted counts in the histogram legend
    pub fn legend_counts(&self, selection: &Selection) -> Result<WeightedCounts> {
        if !selection.mode().is_active() {
            return Ok(WeightedCounts {
                now_signal: PLACEHOLDER_COUNT,
                now_background: PLACEHOLDER_COUNT,
                total_signal: PLACEHOLDER_COUNT,
                total_background: PLACEHOLDER_COUNT,
            });
        }
        let topology = selection.topology(self.data.input_features())?;
        let report = stats::significance(
            &self.data.probabilities,
            &topology,
            selection.cut,
            selection.classes,
        )?;
        Ok(report.counts)
    }

    /// Classifier-output histogram, or the ideal one while the model is off
    pub fn histogram(&self, selection: &Selection) -> Result<Histogram> {
        let bin_width = self.config.histogram_bin_width;
        if !selection.mode().is_active() {
            return Ok(Histogram::ideal(selection.classes, bin_width));
        }
        let topology = selection.topology(self.data.input_features())?;
        stats::histogram(&self.data.probabilities, &topology, selection.classes, bin_width)
    }

    /// Output-node readout for the selected event
    pub fn output_panel(&self, selection: &Selection) -> Result<Option<Prediction>> {
        let Some(event_id) = selection.event_id else {
            return Ok(None);
        };
        if !selection.mode().is_active() {
            return Ok(None);
        }
        let topology = selection.topology(self.data.input_features())?;
        stats::predict(&self.data.probabilities, event_id, &topology).map(Some)
    }

    /// Input-node values of the selected event, scaled or raw per the switch
    pub fn input_panel(&self, selection: &Selection) -> Result<Option<Vec<FeatureValue>>> {
        match selection.event_id {
            Some(event_id) => {
                debug!("Input panel for event {} (scaled: {})", event_id, selection.scaled);
                self.data
                    .events
                    .input_values(event_id, selection.scaled)
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    // ------------------------------------------------------------------------
    // Scatter panel
    // ------------------------------------------------------------------------

    /// Initial scatter query: configured axes, full extent, every category
    pub fn default_scatter_query(&self) -> Result<ScatterQuery> {
        let scatter = &self.config.scatter;
        ScatterQuery::full(&self.data.scatter, &scatter.x_feature, &scatter.default_y_feature)
    }

    /// Slider limits for a feature axis
    pub fn axis_bounds(&self, feature: &str) -> Result<AxisRange> {
        self.data.scatter.feature_bounds(feature)
    }

    /// Y-axis choices: every scatter feature except the fixed x feature
    pub fn y_feature_options(&self) -> Vec<&str> {
        self.data
            .scatter
            .features()
            .iter()
            .map(String::as_str)
            .filter(|feature| *feature != self.config.scatter.x_feature)
            .collect()
    }

    pub fn scatter(&self, query: &ScatterQuery) -> Result<ScatterSelection> {
        explore(&self.data.scatter, query, &self.config.scatter.signal_category)
    }
}
