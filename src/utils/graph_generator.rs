use rand::Rng;

use crate::error::WalkthroughResult;
use crate::graph_representation::GraphModel;

/// creates a random undirected graph with vertices `v0..v{num_vertices - 1}`.
/// every vertex pair becomes an edge with the given probability, weights are drawn from `0..=max_weight`
pub fn random_graph<R: Rng>(rng: &mut R, num_vertices: usize, edge_probability: f64, max_weight: u32) -> WalkthroughResult<GraphModel> {
    let labels: Vec<String> = (0..num_vertices).map(|index| format!("v{}", index)).collect();
    let mut edges: Vec<(String, String, f64)> = Vec::new();

    for first in 0..num_vertices {
        for second in (first + 1)..num_vertices {
            if rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(0..=max_weight);
                edges.push((labels[first].clone(), labels[second].clone(), f64::from(weight)));
            }
        }
    }

    GraphModel::build(labels, edges)
}
