use std::collections::HashMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{WalkthroughError, WalkthroughResult};
use crate::types::*;

/// undirected weighted edge as it was declared
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Weight,
}

/// immutable undirected graph with labeled vertices.
/// every edge is stored once in the weight map (keyed by the normalized pair) and twice in the adjacency lists
#[derive(Clone, Debug)]
pub struct GraphModel {

    labels: Vec<Vertex>,
    label_ranks: Vec<u32>, // position of each label in sorted label order
    index: HashMap<Vertex, NodeId>,
    edges: Vec<(NodeId, NodeId, Weight)>,
    weights: HashMap<(NodeId, NodeId), Weight>,
    adjacency: Vec<Vec<(NodeId, Weight)>>,
}

fn edge_key(first: NodeId, second: NodeId) -> (NodeId, NodeId) {
    if first <= second {
        (first, second)
    }
    else {
        (second, first)
    }
}

impl GraphModel {

    /// builds the graph from a vertex list and a list of (u, v, weight) edges.
    /// weights may be integers or floats but have to be finite and non-negative.
    /// neighbors are ordered by edge declaration, a repeated edge with the same weight is collapsed into one
    #[tracing::instrument(skip_all)]
    pub fn build<V, E, S, W>(vertices: V, edges: E) -> WalkthroughResult<GraphModel>
    where
        V: IntoIterator,
        V::Item: Into<Vertex>,
        E: IntoIterator<Item = (S, S, W)>,
        S: Into<Vertex>,
        W: Into<f64>,
    {
        let mut labels: Vec<Vertex> = Vec::new();
        let mut index: HashMap<Vertex, NodeId> = HashMap::new();

        for vertex in vertices {
            let label: Vertex = vertex.into();

            if index.contains_key(&label) {
                return Err(WalkthroughError::invalid_graph(format!("vertex {} declared twice", label)));
            }

            index.insert(label.clone(), labels.len() as NodeId);
            labels.push(label);
        }

        let mut sorted: NodeIds = (0..labels.len() as NodeId).collect();
        sorted.sort_by(|first, second| labels[*first as usize].cmp(&labels[*second as usize]));

        let mut label_ranks = vec![0; labels.len()];
        for (rank, node_id) in sorted.iter().enumerate() {
            label_ranks[*node_id as usize] = rank as u32;
        }

        let mut graph = GraphModel {
            adjacency: vec![Vec::new(); labels.len()],
            labels,
            label_ranks,
            index,
            edges: Vec::new(),
            weights: HashMap::new(),
        };

        for (from, to, raw_weight) in edges {
            let (from, to): (Vertex, Vertex) = (from.into(), to.into());
            graph.add_edge(&from, &to, raw_weight.into())?;
        }

        tracing::debug!(num_vertices = graph.len(), num_edges = graph.edge_count(), "graph built");
        Ok(graph)
    }

    fn add_edge(&mut self, from: &str, to: &str, raw_weight: f64) -> WalkthroughResult<()> {
        let start = self.declared_node(from, from, to)?;
        let end = self.declared_node(to, from, to)?;

        if start == end {
            return Err(WalkthroughError::invalid_graph(format!("self-loop on {}", from)));
        }

        if raw_weight < 0.0 {
            return Err(WalkthroughError::invalid_graph(format!("negative weight {} on edge {} - {}", raw_weight, from, to)));
        }

        let weight = Weight::new(raw_weight)
            .ok_or_else(|| WalkthroughError::invalid_graph(format!("weight {} on edge {} - {} is not a finite number", raw_weight, from, to)))?;

        let key = edge_key(start, end);
        match self.weights.get(&key) {
            Some(existing) if *existing == weight => return Ok(()),
            Some(existing) => {
                return Err(WalkthroughError::invalid_graph(format!(
                    "edge {} - {} declared with weights {} and {}", from, to, existing, weight
                )));
            }
            None => {}
        }

        self.weights.insert(key, weight);
        self.edges.push((start, end, weight));

        // undirected: both endpoints see each other
        self.adjacency[start as usize].push((end, weight));
        self.adjacency[end as usize].push((start, weight));

        Ok(())
    }

    fn declared_node(&self, label: &str, from: &str, to: &str) -> WalkthroughResult<NodeId> {
        self.index.get(label).copied().ok_or_else(|| {
            WalkthroughError::invalid_graph(format!("edge {} - {} references unknown vertex {}", from, to, label))
        })
    }

    /// ordered neighbors of the given vertex
    pub fn neighbors(&self, vertex: &str) -> WalkthroughResult<Vec<&str>> {
        let node_id = self.node_id(vertex)?;

        Ok(self.arcs(node_id).iter().map(|(target, _)| self.label(*target)).collect())
    }

    /// weight of the undirected edge between the two vertices, both orderings are accepted
    pub fn weight(&self, from: &str, to: &str) -> WalkthroughResult<Weight> {
        let start = self.node_id(from)?;
        let end = self.node_id(to)?;

        self.weights
            .get(&edge_key(start, end))
            .copied()
            .ok_or_else(|| WalkthroughError::no_such_edge(from, to))
    }

    /// vertex labels in declaration order
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// edges in declaration order, duplicates removed
    pub fn edges(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .map(|(from, to, weight)| Edge {
                from: self.label(*from).to_string(),
                to: self.label(*to).to_string(),
                weight: *weight,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_ids(&self) -> Range<NodeId> {
        0..(self.labels.len() as NodeId)
    }

    pub fn node_id(&self, vertex: &str) -> WalkthroughResult<NodeId> {
        self.index.get(vertex).copied().ok_or_else(|| WalkthroughError::unknown_vertex(vertex))
    }

    pub fn label(&self, node_id: NodeId) -> &str {
        &self.labels[node_id as usize]
    }

    /// rank of the vertex label in lexicographic order, used to order frontier entries of equal distance
    pub fn label_rank(&self, node_id: NodeId) -> u32 {
        self.label_ranks[node_id as usize]
    }

    pub fn arcs(&self, node_id: NodeId) -> &Arclist {
        &self.adjacency[node_id as usize]
    }
}
