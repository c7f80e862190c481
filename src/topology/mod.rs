//! Network Topology
//!
//! The user-selected shape of the MLP and the canonical key that identifies
//! it in the pre-computed lookup tables.

mod key;

pub use key::{coerce_even, DesignKey};

use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, Result};

/// Maximum number of hidden layers the selector exposes
pub const MAX_HIDDEN_LAYERS: usize = 3;

/// Maximum number of nodes per hidden layer
pub const MAX_LAYER_SIZE: usize = 10;

/// Number of output classes (signal, background)
pub const OUTPUT_CLASSES: usize = 2;

/// Validated MLP topology
///
/// `layer_sizes` holds only the active hidden layers; selector slots beyond
/// the chosen depth are dropped at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    layer_sizes: Vec<usize>,
    input_features: usize,
}

impl Topology {
    /// Create a topology from the active hidden layer sizes
    ///
    /// # Errors
    /// Returns `InvalidTopology` if:
    /// - there are no hidden layers or more than three
    /// - a layer size is outside 1..=10
    /// - there are no input features
    pub fn new(layer_sizes: Vec<usize>, input_features: usize) -> Result<Self> {
        if layer_sizes.is_empty() || layer_sizes.len() > MAX_HIDDEN_LAYERS {
            return Err(ExplorerError::InvalidTopology {
                reason: format!(
                    "expected 1 to {} hidden layers, got {}",
                    MAX_HIDDEN_LAYERS,
                    layer_sizes.len()
                ),
            });
        }

        if let Some(size) = layer_sizes
            .iter()
            .find(|&&size| size == 0 || size > MAX_LAYER_SIZE)
        {
            return Err(ExplorerError::InvalidTopology {
                reason: format!(
                    "layer size {} outside 1..={}",
                    size, MAX_LAYER_SIZE
                ),
            });
        }

        if input_features == 0 {
            return Err(ExplorerError::InvalidTopology {
                reason: "at least one input feature is required".to_string(),
            });
        }

        Ok(Self {
            layer_sizes,
            input_features,
        })
    }

    /// Build a topology from the depth control and the three size selectors
    ///
    /// Selector slots at or beyond `depth` are ignored.
    pub fn from_selectors(
        depth: usize,
        selectors: [usize; MAX_HIDDEN_LAYERS],
        input_features: usize,
    ) -> Result<Self> {
        if depth == 0 || depth > MAX_HIDDEN_LAYERS {
            return Err(ExplorerError::InvalidTopology {
                reason: format!("depth {} outside 1..={}", depth, MAX_HIDDEN_LAYERS),
            });
        }
        Self::new(selectors[..depth].to_vec(), input_features)
    }

    /// Number of hidden layers
    pub fn hidden_layer_count(&self) -> usize {
        self.layer_sizes.len()
    }

    /// Raw hidden layer sizes, as selected
    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    pub fn input_features(&self) -> usize {
        self.input_features
    }

    pub fn output_classes(&self) -> usize {
        OUTPUT_CLASSES
    }

    /// Canonical lookup key (odd sizes coerced up to the next even size)
    pub fn design_key(&self) -> DesignKey {
        DesignKey::for_layers(&self.layer_sizes)
    }

    /// Sizes of every node group in diagram order: inputs, hidden layers, outputs
    pub fn group_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.layer_sizes.len() + 2);
        sizes.push(self.input_features);
        sizes.extend_from_slice(&self.layer_sizes);
        sizes.push(OUTPUT_CLASSES);
        sizes
    }

    /// Number of dense connections between consecutive groups
    pub fn dense_edge_count(&self) -> usize {
        self.group_sizes().windows(2).map(|w| w[0] * w[1]).sum()
    }
}
