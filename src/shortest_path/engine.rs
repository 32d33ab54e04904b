use std::iter::FusedIterator;

use serde::Serialize;

use crate::error::{WalkthroughError, WalkthroughResult};
use crate::graph_algorithms::{Frontier, FrontierEntry};
use crate::graph_representation::GraphModel;
use crate::types::*;

use super::events::{AlgorithmEvent, DistanceTable, PredecessorTable, VertexTable};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum EngineState {
    Ready,
    Running,
    Done,
}

/// single-source dijkstra over a `GraphModel`, producing its steps as a lazy event sequence.
/// one engine performs exactly one run
pub struct ShortestPathEngine<'g> {

    graph: &'g GraphModel,
    start: NodeId,
    end: NodeId,
    state: EngineState,
    distances: Vec<TentativeDistance>,
    predecessors: Vec<Option<NodeId>>,
    visited: Vec<bool>,
    frontier: Frontier,
    expanding: Option<(NodeId, usize)>, // visited node whose arcs are being relaxed and the next arc index
}

impl<'g> ShortestPathEngine<'g> {

    #[tracing::instrument(skip(graph))]
    pub fn new(graph: &'g GraphModel, start: &str, end: &str) -> WalkthroughResult<Self> {
        let start_id = graph.node_id(start)?;
        let end_id = graph.node_id(end)?;

        let mut distances = vec![None; graph.len()];
        distances[start_id as usize] = Some(Distance::ZERO);

        let mut frontier = Frontier::with_capacity(graph.len());
        frontier.insert(FrontierEntry::new(graph, start_id, Distance::ZERO));

        Ok(ShortestPathEngine {
            graph,
            start: start_id,
            end: end_id,
            state: EngineState::Ready,
            distances,
            predecessors: vec![None; graph.len()],
            visited: vec![false; graph.len()],
            frontier,
            expanding: None,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn graph(&self) -> &'g GraphModel {
        self.graph
    }

    pub fn start(&self) -> &'g str {
        self.graph.label(self.start)
    }

    pub fn end(&self) -> &'g str {
        self.graph.label(self.end)
    }

    /// starts the run. the returned iterator drives the algorithm, each call to `next` performs just enough work to produce one event
    pub fn run(&mut self) -> WalkthroughResult<Events<'_, 'g>> {
        if self.state != EngineState::Ready {
            return Err(WalkthroughError::invalid_state(format!("run() called on an engine in state {:?}", self.state)));
        }

        self.state = EngineState::Running;
        tracing::debug!(start = self.start(), end = self.end(), "run started");

        Ok(Events { engine: self })
    }

    /// runs the algorithm to exhaustion and returns the complete event log
    pub fn run_to_completion(&mut self) -> WalkthroughResult<Vec<AlgorithmEvent>> {
        Ok(self.run()?.collect())
    }

    /// current tentative distance of the vertex, final once the engine is done
    pub fn distance_to(&self, vertex: &str) -> WalkthroughResult<TentativeDistance> {
        let node_id = self.graph.node_id(vertex)?;

        Ok(self.distances[node_id as usize])
    }

    pub fn distances(&self) -> DistanceTable {
        VertexTable::new(
            self.graph.node_ids()
                .map(|node_id| (self.graph.label(node_id).to_string(), self.distances[node_id as usize]))
                .collect()
        )
    }

    pub fn predecessors(&self) -> PredecessorTable {
        VertexTable::new(
            self.graph.node_ids()
                .map(|node_id| {
                    let predecessor = self.predecessors[node_id as usize].map(|id| self.graph.label(id).to_string());
                    (self.graph.label(node_id).to_string(), predecessor)
                })
                .collect()
        )
    }

    /// shortest path from the start vertex to `target`, in traversal order.
    /// only available once the run is done
    pub fn path_to(&self, target: &str) -> WalkthroughResult<Vec<Vertex>> {
        if self.state != EngineState::Done {
            return Err(WalkthroughError::invalid_state(format!("path_to() called on an engine in state {:?}", self.state)));
        }

        let target_id = self.graph.node_id(target)?;
        if self.distances[target_id as usize].is_none() {
            return Err(WalkthroughError::unreachable(target));
        }

        let mut path: NodeIds = vec![target_id];
        let mut current = target_id;

        while current != self.start {
            match self.predecessors[current as usize] {
                Some(predecessor) => {
                    path.push(predecessor);
                    current = predecessor;
                }
                None => break,
            }
        }

        path.reverse();
        Ok(path.into_iter().map(|node_id| self.graph.label(node_id).to_string()).collect())
    }

    pub fn path_to_end(&self) -> WalkthroughResult<Vec<Vertex>> {
        self.path_to(self.end())
    }

    fn advance(&mut self) -> Option<AlgorithmEvent> {
        if self.state != EngineState::Running {
            return None;
        }

        let graph = self.graph;

        loop {
            if let Some((node_id, arc_index)) = self.expanding {
                match graph.arcs(node_id).get(arc_index) {
                    Some(&(target_node, weight)) => {
                        self.expanding = Some((node_id, arc_index + 1));

                        if let Some(event) = self.relax(node_id, target_node, weight) {
                            return Some(event);
                        }
                    }
                    None => self.expanding = None,
                }

                continue;
            }

            match self.frontier.pop() {
                Some(FrontierEntry {distance, node_id, ..}) => {
                    if self.visited[node_id as usize] {
                        tracing::trace!(vertex = graph.label(node_id), %distance, "discarding stale frontier entry");
                        continue;
                    }

                    self.visited[node_id as usize] = true;
                    self.expanding = Some((node_id, 0));

                    tracing::debug!(vertex = graph.label(node_id), %distance, "visit");
                    return Some(AlgorithmEvent::Visit {
                        vertex: graph.label(node_id).to_string(),
                        distance,
                    });
                }
                None => {
                    self.state = EngineState::Done;

                    let reached = self.distances.iter().filter(|distance| distance.is_some()).count();
                    tracing::info!(start = self.start(), reached, num_vertices = graph.len(), "run completed");

                    return Some(AlgorithmEvent::Completed {
                        distances: self.distances(),
                        predecessors: self.predecessors(),
                    });
                }
            }
        }
    }

    /// relaxes the arc from the visited node `source`, only strict improvements update the tables
    fn relax(&mut self, source: NodeId, target_node: NodeId, weight: Weight) -> Option<AlgorithmEvent> {
        if self.visited[target_node as usize] {
            return None;
        }

        let source_distance = self.distances[source as usize]?;
        let new_distance = source_distance + weight;

        let improves = match self.distances[target_node as usize] {
            Some(old_distance) => new_distance < old_distance,
            None => true,
        };

        if !improves {
            return None;
        }

        self.distances[target_node as usize] = Some(new_distance);
        self.predecessors[target_node as usize] = Some(source);
        self.frontier.insert(FrontierEntry::new(self.graph, target_node, new_distance));

        let (from, to) = (self.graph.label(source), self.graph.label(target_node));
        tracing::debug!(from, to, distance = %new_distance, "relax");

        Some(AlgorithmEvent::Relax {
            from: from.to_string(),
            to: to.to_string(),
            distance: new_distance,
        })
    }
}

/// lazy, finite, non-restartable event sequence of one run
pub struct Events<'e, 'g> {
    engine: &'e mut ShortestPathEngine<'g>,
}

impl<'e, 'g> Events<'e, 'g> {

    /// the engine behind this sequence, e.g. to inspect the tables between events
    pub fn engine(&self) -> &ShortestPathEngine<'g> {
        self.engine
    }
}

impl<'e, 'g> Iterator for Events<'e, 'g> {

    type Item = AlgorithmEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.engine.advance()
    }
}

impl<'e, 'g> FusedIterator for Events<'e, 'g> {}
