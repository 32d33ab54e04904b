use crate::graph_representation::GraphModel;
use crate::types::*;
use crate::utils::binary_heap::MinBinaryHeap;

/// frontier entry ordered by distance first, equal distances are ordered by vertex label
#[derive(Copy, Clone, Eq, PartialEq, Debug, Ord, PartialOrd)]
pub struct FrontierEntry {
    pub distance: Distance,
    pub label_rank: u32,
    pub node_id: NodeId,
}

impl FrontierEntry {

    pub fn new(graph: &GraphModel, node_id: NodeId, distance: Distance) -> Self {
        FrontierEntry {
            distance,
            label_rank: graph.label_rank(node_id),
            node_id,
        }
    }
}

/// priority frontier with lazy deletion: superseded entries stay in the heap until they are popped
pub type Frontier = MinBinaryHeap<FrontierEntry>;

/// minimum path weight from start to every vertex, found by enumerating all simple paths.
/// exponential in the graph size, only meant as a reference for small graphs
pub fn exhaustive_distances(graph: &GraphModel, start: NodeId) -> Vec<TentativeDistance> {
    let mut best: Vec<TentativeDistance> = vec![None; graph.len()];
    let mut on_path: Vec<bool> = vec![false; graph.len()];

    extend_simple_paths(graph, start, Distance::ZERO, &mut on_path, &mut best);

    best
}

fn extend_simple_paths(
    graph: &GraphModel,
    node_id: NodeId,
    distance: Distance,
    on_path: &mut Vec<bool>,
    best: &mut Vec<TentativeDistance>
) {
    let slot = &mut best[node_id as usize];
    if slot.map_or(true, |known| distance < known) {
        *slot = Some(distance);
    }

    on_path[node_id as usize] = true;

    for (target_node, weight) in graph.arcs(node_id) {
        if !on_path[*target_node as usize] {
            extend_simple_paths(graph, *target_node, distance + *weight, on_path, best);
        }
    }

    on_path[node_id as usize] = false;
}
