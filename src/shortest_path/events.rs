use serde::{Deserialize, Serialize};

use crate::types::*;

/// per-vertex table in vertex declaration order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexTable<T> {
    entries: Vec<(Vertex, T)>,
}

pub type DistanceTable = VertexTable<TentativeDistance>;
pub type PredecessorTable = VertexTable<Option<Vertex>>;

impl<T> VertexTable<T> {

    pub fn new(entries: Vec<(Vertex, T)>) -> Self {
        VertexTable { entries }
    }

    /// entry of the given vertex, `None` if the vertex is not part of the table
    pub fn get(&self, vertex: &str) -> Option<&T> {
        self.entries.iter().find(|(label, _)| label == vertex).map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.entries.iter().map(|(label, value)| (label.as_str(), value))
    }
}

/// discrete algorithm step, emitted in execution order.
/// a vertex's `Visit` precedes every `Relax` sourced from it and `Completed` is always the last event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AlgorithmEvent {
    /// vertex was extracted from the frontier and its distance is final
    Visit { vertex: Vertex, distance: Distance },
    /// a strictly shorter path to `to` was found through `from`
    Relax { from: Vertex, to: Vertex, distance: Distance },
    Completed { distances: DistanceTable, predecessors: PredecessorTable },
}

impl AlgorithmEvent {

    pub fn is_completed(&self) -> bool {
        matches!(self, AlgorithmEvent::Completed { .. })
    }
}
