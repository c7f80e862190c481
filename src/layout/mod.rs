//! Network Diagram Layout
//!
//! Maps a topology onto node coordinates and edges for a flow diagram:
//! - input feature column on the left
//! - hidden layers evenly spaced in between
//! - two output nodes at x = 1
//! - a filler group anchoring the unused space on the right

mod builder;
mod diagram;

pub use builder::{layout, FILLER_EDGES, FILLER_NODES};
pub use diagram::{DiagramLayout, Edge, EdgeClass, Node, NodeGroup};

use serde::{Deserialize, Serialize};

/// Constants of the diagram geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// x coordinate of the input column
    pub x_pad: f64,
    /// Lower bound of the illustrative edge values
    pub edge_value_min: f64,
    /// Upper bound of the illustrative edge values
    pub edge_value_max: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            x_pad: 0.10,
            edge_value_min: 0.005,
            edge_value_max: 1.0,
        }
    }
}
