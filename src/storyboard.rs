//! presentation side of a walkthrough: the event log of a finished run is turned into an ordered list of cues
//! which an external renderer consumes through the `Presenter` trait. cues describe what to show, never how

use std::io::Write;

use serde::Serialize;

use crate::error::WalkthroughResult;
use crate::graph_representation::Edge;
use crate::shortest_path::{AlgorithmEvent, ShortestPathEngine};
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "cue", rename_all = "snake_case")]
pub enum Cue {
    Title { text: String },
    ShowGraph { vertices: Vec<Vertex>, edges: Vec<Edge> },
    UpdateDistanceLabel { vertex: Vertex, label: String },
    Caption { text: String },
    MarkVisited { vertex: Vertex },
    MarkRelaxed { from: Vertex, to: Vertex },
    HighlightPath { vertices: Vec<Vertex> },
}

/// narrow interface implemented by whatever draws the walkthrough
pub trait Presenter {

    fn present(&mut self, cue: &Cue) -> WalkthroughResult<()>;

    fn present_all(&mut self, cues: &[Cue]) -> WalkthroughResult<()> {
        for cue in cues {
            self.present(cue)?;
        }

        Ok(())
    }
}

/// label shown next to a vertex, `∞` while the vertex has not been reached
pub fn distance_label(distance: TentativeDistance) -> String {
    match distance {
        Some(distance) => distance.to_string(),
        None => "∞".to_string(),
    }
}

/// runs the engine and composes the cues of the whole walkthrough.
/// the engine has to be fresh, it is done afterwards
pub fn compose(title: &str, engine: &mut ShortestPathEngine<'_>) -> WalkthroughResult<Vec<Cue>> {
    let graph = engine.graph();
    let start = engine.start().to_string();
    let end = engine.end().to_string();

    let mut cues = vec![
        Cue::Title {text: title.to_string()},
        Cue::ShowGraph {vertices: graph.vertices().map(str::to_string).collect(), edges: graph.edges()},
    ];

    for vertex in graph.vertices() {
        let initial = if vertex == start { Some(Distance::ZERO) } else { None };
        cues.push(Cue::UpdateDistanceLabel {vertex: vertex.to_string(), label: distance_label(initial)});
    }

    cues.push(Cue::Caption {text: format!("Start: {}, Distance: 0", start)});

    for event in engine.run()? {
        match event {
            AlgorithmEvent::Visit {vertex, distance} => {
                cues.push(Cue::MarkVisited {vertex: vertex.clone()});
                cues.push(Cue::Caption {text: format!("Current Node: {}, Distance: {}", vertex, distance)});
            }
            AlgorithmEvent::Relax {from, to, distance} => {
                cues.push(Cue::MarkRelaxed {from, to: to.clone()});
                cues.push(Cue::UpdateDistanceLabel {vertex: to, label: distance_label(Some(distance))});
            }
            AlgorithmEvent::Completed {..} => {}
        }
    }

    match engine.path_to_end() {
        Ok(path) => {
            let text = format!("Shortest Path: {}", path.join(" → "));
            cues.push(Cue::HighlightPath {vertices: path});
            cues.push(Cue::Caption {text});
        }
        Err(error) => {
            tracing::debug!(%error, "no path to highlight");
            cues.push(Cue::Caption {text: format!("No path from {} to {}", start, end)});
        }
    }

    Ok(cues)
}

/// writes one line per cue
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {

    pub fn new(out: W) -> Self {
        TextPresenter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {

    fn present(&mut self, cue: &Cue) -> WalkthroughResult<()> {
        match cue {
            Cue::Title {text} => writeln!(self.out, "== {} ==", text)?,
            Cue::ShowGraph {vertices, edges} => {
                writeln!(self.out, "graph: {}", vertices.join(", "))?;
                for edge in edges {
                    writeln!(self.out, "  {} - {} ({})", edge.from, edge.to, edge.weight)?;
                }
            }
            Cue::UpdateDistanceLabel {vertex, label} => writeln!(self.out, "  dist[{}] = {}", vertex, label)?,
            Cue::Caption {text} => writeln!(self.out, "{}", text)?,
            Cue::MarkVisited {vertex} => writeln!(self.out, "visit {}", vertex)?,
            Cue::MarkRelaxed {from, to} => writeln!(self.out, "  relax {} -> {}", from, to)?,
            Cue::HighlightPath {vertices} => writeln!(self.out, "path: {}", vertices.join(" -> "))?,
        }

        Ok(())
    }
}
