//! Selection snapshot and the control gating derived from it.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tables::ClassFilter;
use crate::topology::{Topology, MAX_HIDDEN_LAYERS};

/// Everything the user has chosen at one instant
///
/// The presentation layer owns and mutates this; the library only reads
/// snapshots of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    /// Number of hidden layers (1 to 3)
    pub depth: usize,
    /// Size selectors of the three hidden layers; slots beyond `depth` are ignored
    pub layer_selectors: [usize; MAX_HIDDEN_LAYERS],
    pub scaled: bool,
    pub powered: bool,
    pub event_id: Option<u32>,
    /// Histogram cut on the classifier output
    pub cut: f64,
    /// Classes enabled in the histogram legend
    pub classes: ClassFilter,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            depth: 1,
            layer_selectors: [4, 8, 4],
            scaled: false,
            powered: false,
            event_id: None,
            cut: 0.0,
            classes: ClassFilter::all(),
        }
    }
}

impl Selection {
    pub fn topology(&self, input_features: usize) -> Result<Topology> {
        Topology::from_selectors(self.depth, self.layer_selectors, input_features)
    }

    pub fn mode(&self) -> PanelMode {
        PanelMode::from_switches(self.powered, self.scaled)
    }

    /// Enabled state of every control for this snapshot
    pub fn controls(&self) -> ControlState {
        let event_chosen = self.event_id.is_some();
        let mut hidden_layers = [false; MAX_HIDDEN_LAYERS];
        for (slot, enabled) in hidden_layers.iter_mut().enumerate() {
            *enabled = slot < self.depth;
        }

        ControlState {
            scaled_switch: event_chosen,
            power_button: event_chosen,
            cut_slider: self.mode() == PanelMode::Active,
            hidden_layers,
        }
    }
}

/// Gating state of the model panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelMode {
    /// Powered with standardized inputs: live readouts
    Active,
    /// Powered but fed unscaled inputs: diagram shown as a warning
    Unscaled,
    Off,
}

impl PanelMode {
    pub fn from_switches(powered: bool, scaled: bool) -> Self {
        match (powered, scaled) {
            (true, true) => PanelMode::Active,
            (true, false) => PanelMode::Unscaled,
            (false, _) => PanelMode::Off,
        }
    }

    pub fn is_active(self) -> bool {
        self == PanelMode::Active
    }
}

/// Which controls accept input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub scaled_switch: bool,
    pub power_button: bool,
    pub cut_slider: bool,
    pub hidden_layers: [bool; MAX_HIDDEN_LAYERS],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_mode() {
        assert_eq!(PanelMode::from_switches(true, true), PanelMode::Active);
        assert_eq!(PanelMode::from_switches(true, false), PanelMode::Unscaled);
        assert_eq!(PanelMode::from_switches(false, true), PanelMode::Off);
    }

    #[test]
    fn test_controls_follow_depth_and_event() {
        let selection = Selection {
            depth: 2,
            ..Selection::default()
        };
        let controls = selection.controls();
        assert_eq!(controls.hidden_layers, [true, true, false]);
        assert!(!controls.power_button);
        assert!(!controls.cut_slider);

        let selection = Selection {
            event_id: Some(3),
            powered: true,
            scaled: true,
            ..Selection::default()
        };
        let controls = selection.controls();
        assert!(controls.scaled_switch && controls.power_button && controls.cut_slider);
    }

    #[test]
    fn test_topology_uses_active_slots() {
        let selection = Selection {
            depth: 2,
            layer_selectors: [5, 7, 9],
            ..Selection::default()
        };
        let topology = selection.topology(6).unwrap();
        assert_eq!(topology.layer_sizes(), &[5, 7]);
        assert_eq!(topology.design_key().as_str(), "(6, 8)");
    }
}
