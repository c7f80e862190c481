//! Diagram layout types
//!
//! Plain values handed to the presentation layer. Coordinates are in the
//! diagram's unit square; the filler group sits just outside it.

use serde::{Deserialize, Serialize};

/// Node group a diagram node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeGroup {
    Input,
    /// Hidden layer, 1-based
    Hidden(usize),
    Output,
    /// Auxiliary anchor nodes with no modelling meaning
    Filler,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub group: NodeGroup,
}

/// Rendering class of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeClass {
    Positive,
    Negative,
    Filler,
}

/// Directed link between two nodes, indexed into `DiagramLayout::nodes`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    /// Link thickness, always non-negative
    pub value: f64,
    pub class: EdgeClass,
}

impl Edge {
    /// Weight shown on hover: negative edges display their value negated
    pub fn display_weight(&self) -> f64 {
        match self.class {
            EdgeClass::Negative => -self.value,
            EdgeClass::Positive | EdgeClass::Filler => self.value,
        }
    }
}

/// Node coordinates and edges of one network diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramLayout {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl DiagramLayout {
    /// Nodes of one group, in index order
    pub fn group(&self, group: NodeGroup) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |node| node.group == group)
    }

    /// Number of edges of the given class
    pub fn count_class(&self, class: EdgeClass) -> usize {
        self.edges.iter().filter(|edge| edge.class == class).count()
    }
}
