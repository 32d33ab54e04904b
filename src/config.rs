use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::WalkthroughResult;
use crate::graph_representation::GraphModel;
use crate::types::Vertex;
use crate::utils::io;

pub const DEFAULT_TITLE: &str = "Dijkstra's Shortest Path Algorithm";

/// edge as written in a scene file. the weight is kept as a plain number so that negative and non-finite weights are reported by graph validation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: f64,
}

/// graph data and query of one walkthrough
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_title")]
    pub title: String,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<EdgeConfig>,
    pub start: Vertex,
    pub end: Vertex,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for SceneConfig {

    /// the six vertex lecture graph, queried from A to F
    fn default() -> Self {
        let edges = [
            ("A", "B", 2.0), ("A", "C", 4.0),
            ("B", "D", 7.0), ("C", "D", 1.0),
            ("C", "E", 3.0), ("D", "F", 1.0),
            ("E", "F", 5.0),
        ];

        SceneConfig {
            title: default_title(),
            vertices: ["A", "B", "C", "D", "E", "F"].iter().map(|label| label.to_string()).collect(),
            edges: edges.iter()
                .map(|(from, to, weight)| EdgeConfig {from: from.to_string(), to: to.to_string(), weight: *weight})
                .collect(),
            start: "A".to_string(),
            end: "F".to_string(),
        }
    }
}

impl SceneConfig {

    /// loads a scene from a `.json` file or from the line based text format
    pub fn from_path(path: &dyn AsRef<Path>) -> WalkthroughResult<Self> {
        io::read_scene_config(path)
    }

    /// replaces start and/or end vertex of the query
    pub fn with_query(mut self, start: Option<Vertex>, end: Option<Vertex>) -> Self {
        if let Some(start) = start {
            self.start = start;
        }

        if let Some(end) = end {
            self.end = end;
        }

        self
    }

    pub fn build_graph(&self) -> WalkthroughResult<GraphModel> {
        GraphModel::build(
            self.vertices.iter().cloned(),
            self.edges.iter().map(|edge| (edge.from.clone(), edge.to.clone(), edge.weight)),
        )
    }
}
