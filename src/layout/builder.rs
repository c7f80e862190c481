//! Topology to diagram layout
//!
//! Nodes are placed column by column (inputs, hidden layers, outputs,
//! filler) and every column is densely linked to the next one.

use log::debug;
use rand::seq::index;
use rand::Rng;

use super::diagram::{DiagramLayout, Edge, EdgeClass, Node, NodeGroup};
use super::LayoutConfig;
use crate::math::round_to;
use crate::topology::{Topology, OUTPUT_CLASSES};

// ============================================================================
// Constants
// ============================================================================

/// x coordinates of the filler group
const FILLER_X: [f64; 3] = [1.2, 1.2, 1.5];

/// y coordinate shared by every filler node
const FILLER_Y: f64 = 0.5;

/// Values of the trailing filler edges
const FILLER_EDGE_VALUES: [f64; OUTPUT_CLASSES + 1] = [0.0, 0.0, 1000.0];

/// Number of nodes in the filler group
pub const FILLER_NODES: usize = FILLER_X.len();

/// Number of edges touching the filler group
pub const FILLER_EDGES: usize = FILLER_EDGE_VALUES.len();

// ============================================================================
// Layout
// ============================================================================

/// Lay out the network diagram for a topology
///
/// Edge values and the positive/negative split are drawn from `rng`; the
/// weights are illustrative only. Pass a seeded generator for a
/// reproducible diagram.
pub fn layout<R: Rng + ?Sized>(
    topology: &Topology,
    config: &LayoutConfig,
    rng: &mut R,
) -> DiagramLayout {
    let nodes = place_nodes(topology, config);
    let links = connect_groups(topology);
    let edges = assign_values(&links, config, rng);

    debug!(
        "Laid out design {}: {} nodes, {} edges",
        topology.design_key(),
        nodes.len(),
        edges.len()
    );

    DiagramLayout { nodes, edges }
}

fn place_nodes(topology: &Topology, config: &LayoutConfig) -> Vec<Node> {
    let hidden = topology.hidden_layer_count();
    let capacity =
        topology.group_sizes().iter().sum::<usize>() + FILLER_NODES;
    let mut nodes = Vec::with_capacity(capacity);

    push_column(&mut nodes, NodeGroup::Input, topology.input_features(), config.x_pad);

    let step = (1.0 - config.x_pad) / (hidden + 1) as f64;
    for (i, &size) in topology.layer_sizes().iter().enumerate() {
        let layer = i + 1;
        let x = config.x_pad + layer as f64 * step;
        push_column(&mut nodes, NodeGroup::Hidden(layer), size, x);
    }

    push_column(&mut nodes, NodeGroup::Output, topology.output_classes(), 1.0);

    nodes.extend(FILLER_X.iter().map(|&x| Node {
        x,
        y: FILLER_Y,
        group: NodeGroup::Filler,
    }));

    nodes
}

/// Spread `size` nodes evenly over (0, 1), endpoints excluded
fn push_column(nodes: &mut Vec<Node>, group: NodeGroup, size: usize, x: f64) {
    let denominator = (size + 1) as f64;
    nodes.extend((1..=size).map(|k| Node {
        x,
        y: k as f64 / denominator,
        group,
    }));
}

/// Source/target pairs: dense links between consecutive columns, then the
/// filler links
fn connect_groups(topology: &Topology) -> Vec<(usize, usize)> {
    let sizes = topology.group_sizes();
    let mut links = Vec::with_capacity(topology.dense_edge_count() + FILLER_EDGES);

    let mut start = 0;
    for pair in sizes.windows(2) {
        let next = start + pair[0];
        for source in start..next {
            links.extend((next..next + pair[1]).map(|target| (source, target)));
        }
        start = next;
    }

    // `start` is now the first output node; the filler group follows the outputs
    let filler = start + OUTPUT_CLASSES;
    links.push((start, filler));
    links.push((start + 1, filler));
    links.push((filler, filler + 1));

    links
}

fn assign_values<R: Rng + ?Sized>(
    links: &[(usize, usize)],
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<Edge> {
    let dense = links.len() - FILLER_EDGES;

    let values: Vec<f64> = (0..dense)
        .map(|_| round_to(rng.gen_range(config.edge_value_min..=config.edge_value_max), 2))
        .collect();

    let mut positive = vec![false; dense];
    for i in index::sample(rng, dense, dense / 2) {
        positive[i] = true;
    }

    let dense_edges = links[..dense].iter().enumerate().map(|(i, &(source, target))| Edge {
        source,
        target,
        value: values[i],
        class: if positive[i] {
            EdgeClass::Positive
        } else {
            EdgeClass::Negative
        },
    });

    let filler_edges = links[dense..]
        .iter()
        .zip(FILLER_EDGE_VALUES)
        .map(|(&(source, target), value)| Edge {
            source,
            target,
            value,
            class: EdgeClass::Filler,
        });

    dense_edges.chain(filler_edges).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn single_layer() -> Topology {
        Topology::new(vec![3], 2).unwrap()
    }

    #[test]
    fn test_connect_groups_order() {
        let links = connect_groups(&single_layer());
        // inputs 0..2, hidden 2..5, outputs 5..7, filler 7..10
        assert_eq!(
            &links[..6],
            &[(0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4)]
        );
        assert_eq!(&links[6..12], &[(2, 5), (2, 6), (3, 5), (3, 6), (4, 5), (4, 6)]);
        assert_eq!(&links[12..], &[(5, 7), (6, 7), (7, 8)]);
    }

    #[test]
    fn test_place_nodes_columns() {
        let nodes = place_nodes(&single_layer(), &LayoutConfig::default());
        assert_eq!(nodes.len(), 2 + 3 + 2 + FILLER_NODES);

        assert!(nodes[..2].iter().all(|n| n.x == 0.10));
        assert!(nodes[2..5].iter().all(|n| (n.x - 0.55).abs() < 1e-12));
        assert!(nodes[5..7].iter().all(|n| n.x == 1.0));

        let filler: Vec<f64> = nodes[7..].iter().map(|n| n.x).collect();
        assert_eq!(filler, vec![1.2, 1.2, 1.5]);
        assert!(nodes[7..].iter().all(|n| n.y == 0.5));
    }

    #[test]
    fn test_filler_edge_values() {
        let mut rng = StdRng::seed_from_u64(7);
        let diagram = layout(&single_layer(), &LayoutConfig::default(), &mut rng);

        let tail: Vec<f64> = diagram.edges[diagram.edges.len() - FILLER_EDGES..]
            .iter()
            .map(|e| e.value)
            .collect();
        assert_eq!(tail, FILLER_EDGE_VALUES.to_vec());
    }

    #[test]
    fn test_values_in_range_and_rounded() {
        let mut rng = StdRng::seed_from_u64(11);
        let diagram = layout(&single_layer(), &LayoutConfig::default(), &mut rng);

        for edge in diagram.edges.iter().filter(|e| e.class != EdgeClass::Filler) {
            assert!(edge.value >= 0.0 && edge.value <= 1.0);
            assert!((edge.value * 100.0 - (edge.value * 100.0).round()).abs() < 1e-9);
        }
    }
}
