use dijkstra_walkthrough::config::SceneConfig;
use dijkstra_walkthrough::shortest_path::{AlgorithmEvent, EngineState, ShortestPathEngine};
use dijkstra_walkthrough::types::Distance;
use dijkstra_walkthrough::{GraphModel, WalkthroughError};

//  A --2-- B
//  |       |
//  4       7
//  |       |
//  C --1-- D --1-- F
//   \             /
//    3--- E ---5-
fn lecture_graph() -> GraphModel {
    SceneConfig::default().build_graph().unwrap()
}

fn distance(value: impl Into<f64>) -> Distance {
    Distance::new(value.into()).unwrap()
}

fn visit(vertex: &str, value: impl Into<f64>) -> AlgorithmEvent {
    AlgorithmEvent::Visit {vertex: vertex.to_string(), distance: distance(value)}
}

fn relax(from: &str, to: &str, value: impl Into<f64>) -> AlgorithmEvent {
    AlgorithmEvent::Relax {from: from.to_string(), to: to.to_string(), distance: distance(value)}
}

fn path_weight(graph: &GraphModel, path: &[String]) -> Distance {
    path.windows(2).map(|pair| graph.weight(&pair[0], &pair[1]).unwrap()).sum()
}

#[test]
fn test_lecture_graph_distances_and_path() {
    let graph = lecture_graph();
    let mut engine = ShortestPathEngine::new(&graph, "A", "F").unwrap();
    assert_eq!(engine.state(), EngineState::Ready);

    engine.run_to_completion().unwrap();
    assert_eq!(engine.state(), EngineState::Done);

    let expected = [("A", 0), ("B", 2), ("C", 4), ("D", 5), ("E", 7), ("F", 6)];
    for (vertex, value) in expected {
        assert_eq!(engine.distance_to(vertex).unwrap(), Some(distance(value)), "distance of {}", vertex);
    }

    let path = engine.path_to("F").unwrap();
    assert_eq!(path, vec!["A", "C", "D", "F"]);
    assert_eq!(path_weight(&graph, &path), 6.0);
    assert_eq!(engine.path_to_end().unwrap(), path);
}

#[test]
fn test_lecture_graph_event_log() {
    let graph = lecture_graph();
    let mut engine = ShortestPathEngine::new(&graph, "A", "F").unwrap();

    let events = engine.run_to_completion().unwrap();

    let expected_steps = vec![
        visit("A", 0), relax("A", "B", 2), relax("A", "C", 4),
        visit("B", 2), relax("B", "D", 9),
        visit("C", 4), relax("C", "D", 5), relax("C", "E", 7),
        visit("D", 5), relax("D", "F", 6),
        visit("F", 6),
        visit("E", 7),
    ];

    assert_eq!(events.len(), expected_steps.len() + 1);
    assert_eq!(&events[..expected_steps.len()], &expected_steps[..]);

    match events.last() {
        Some(AlgorithmEvent::Completed {distances, predecessors}) => {
            assert_eq!(distances, &engine.distances());
            assert_eq!(predecessors, &engine.predecessors());
            assert_eq!(distances.get("D"), Some(&Some(distance(5))));
            assert_eq!(predecessors.get("A"), Some(&None));
            assert_eq!(predecessors.get("F"), Some(&Some("D".to_string())));
            assert_eq!(predecessors.get("E"), Some(&Some("C".to_string())));
        }
        other => panic!("expected completed event, found {:?}", other),
    }
}

#[test]
fn test_visit_precedes_relax_and_completed_is_last() {
    let graph = lecture_graph();

    for start in graph.vertices() {
        let mut engine = ShortestPathEngine::new(&graph, start, "F").unwrap();
        let events = engine.run_to_completion().unwrap();
        let mut visited: Vec<String> = Vec::new();

        for (index, event) in events.iter().enumerate() {
            match event {
                AlgorithmEvent::Visit {vertex, ..} => {
                    assert!(!visited.contains(vertex), "{} visited twice", vertex);
                    visited.push(vertex.clone());
                }
                AlgorithmEvent::Relax {from, to, ..} => {
                    assert_eq!(visited.last(), Some(from), "relax from {} outside of its visit", from);
                    assert!(!visited.contains(to), "relaxed the finalized vertex {}", to);
                }
                AlgorithmEvent::Completed {..} => assert_eq!(index, events.len() - 1),
            }
        }

        assert!(events.last().map_or(false, AlgorithmEvent::is_completed));
        assert_eq!(visited.len(), graph.len());
    }
}

#[test]
fn test_distances_never_increase() {
    let graph = lecture_graph();
    let mut engine = ShortestPathEngine::new(&graph, "A", "F").unwrap();
    let mut events = engine.run().unwrap();

    let mut previous = events.engine().distances();
    let mut finalized: Vec<(String, Distance)> = Vec::new();

    while let Some(event) = events.next() {
        let current = events.engine().distances();

        for ((vertex, before), (_, after)) in previous.iter().zip(current.iter()) {
            match (before, after) {
                (Some(before), Some(after)) => assert!(after <= before, "distance of {} increased", vertex),
                (Some(_), None) => panic!("distance of {} was lost", vertex),
                _ => {}
            }
        }

        if let AlgorithmEvent::Visit {vertex, distance} = event {
            assert_eq!(current.get(&vertex), Some(&Some(distance)));
            finalized.push((vertex, distance));
        }

        for (vertex, distance) in &finalized {
            assert_eq!(current.get(vertex), Some(&Some(*distance)), "finalized distance of {} changed", vertex);
        }

        previous = current;
    }
}

#[test]
fn test_events_are_produced_lazily() {
    let graph = lecture_graph();
    let mut engine = ShortestPathEngine::new(&graph, "A", "F").unwrap();
    let mut events = engine.run().unwrap();

    assert_eq!(events.next(), Some(visit("A", 0)));
    assert_eq!(events.engine().distance_to("B").unwrap(), None);

    assert_eq!(events.next(), Some(relax("A", "B", 2)));
    assert_eq!(events.engine().distance_to("B").unwrap(), Some(distance(2)));
    assert_eq!(events.engine().distance_to("C").unwrap(), None);
    assert_eq!(events.engine().state(), EngineState::Running);
}

#[test]
fn test_start_equals_end() {
    let graph = lecture_graph();
    let mut engine = ShortestPathEngine::new(&graph, "C", "C").unwrap();
    let events = engine.run_to_completion().unwrap();

    assert_eq!(events[0], visit("C", 0));
    assert!(!events.iter().any(|event| matches!(event, AlgorithmEvent::Relax {to, ..} if to == "C")));

    assert_eq!(engine.path_to("C").unwrap(), vec!["C"]);
    assert_eq!(engine.distance_to("C").unwrap(), Some(Distance::ZERO));
}

#[test]
fn test_isolated_vertex_is_unreachable() {
    let graph = GraphModel::build(
        ["A", "B", "C", "G"],
        [("A", "B", 1), ("B", "C", 2), ("A", "C", 5)],
    ).unwrap();

    let mut engine = ShortestPathEngine::new(&graph, "A", "G").unwrap();
    let events = engine.run_to_completion().unwrap();

    assert!(!events.iter().any(|event| matches!(event, AlgorithmEvent::Visit {vertex, ..} if vertex == "G")));
    assert!(matches!(engine.path_to("G"), Err(WalkthroughError::Unreachable(vertex)) if vertex == "G"));
    assert!(matches!(engine.path_to_end(), Err(WalkthroughError::Unreachable(_))));
    assert_eq!(engine.distance_to("G").unwrap(), None);

    assert_eq!(engine.path_to("C").unwrap(), vec!["A", "B", "C"]);
    assert_eq!(engine.distance_to("C").unwrap(), Some(distance(3)));
}

#[test]
fn test_ties_keep_first_found_predecessor() {
    // two paths of length 2 from A to D, B is discovered first
    let graph = GraphModel::build(
        ["A", "B", "C", "D"],
        [("A", "B", 1), ("A", "C", 1), ("C", "D", 1), ("B", "D", 1)],
    ).unwrap();

    let mut engine = ShortestPathEngine::new(&graph, "A", "D").unwrap();
    let events = engine.run_to_completion().unwrap();

    let relaxations_of_d = events.iter()
        .filter(|event| matches!(event, AlgorithmEvent::Relax {to, ..} if to == "D"))
        .count();

    assert_eq!(relaxations_of_d, 1);
    assert_eq!(engine.path_to("D").unwrap(), vec!["A", "B", "D"]);
}

#[test]
fn test_equal_distances_are_visited_in_label_order() {
    // Z is declared and relaxed before Y, but Y sorts first and is visited first
    let graph = GraphModel::build(
        ["S", "Z", "Y", "T"],
        [("S", "Z", 1), ("S", "Y", 1), ("Z", "T", 1), ("Y", "T", 1)],
    ).unwrap();

    let mut engine = ShortestPathEngine::new(&graph, "S", "T").unwrap();
    let events = engine.run_to_completion().unwrap();

    let expected_steps = vec![
        visit("S", 0), relax("S", "Z", 1), relax("S", "Y", 1),
        visit("Y", 1), relax("Y", "T", 2),
        visit("Z", 1),
        visit("T", 2),
    ];

    assert_eq!(&events[..expected_steps.len()], &expected_steps[..]);
    assert_eq!(engine.path_to_end().unwrap(), vec!["S", "Y", "T"]);
    assert_eq!(engine.predecessors().get("T"), Some(&Some("Y".to_string())));
}

#[test]
fn test_fractional_weights() {
    let graph = GraphModel::build(
        ["A", "B", "C", "D"],
        [("A", "B", 2.5), ("A", "C", 1.25), ("C", "B", 0.75), ("B", "D", 0.5)],
    ).unwrap();

    let mut engine = ShortestPathEngine::new(&graph, "A", "D").unwrap();
    let events = engine.run_to_completion().unwrap();

    assert_eq!(&events[..3], &[visit("A", 0), relax("A", "B", 2.5), relax("A", "C", 1.25)]);
    assert_eq!(engine.distance_to("B").unwrap(), Some(distance(2.0)));
    assert_eq!(engine.distance_to("D").unwrap(), Some(distance(2.5)));
    assert_eq!(engine.path_to_end().unwrap(), vec!["A", "C", "B", "D"]);

    let json = serde_json::to_value(&events).unwrap();
    assert_eq!(json[2], serde_json::json!({"event": "relax", "from": "A", "to": "C", "distance": 1.25}));
}

#[test]
fn test_zero_weight_edges() {
    let graph = GraphModel::build(["A", "B", "C"], [("A", "B", 0), ("B", "C", 0), ("A", "C", 1)]).unwrap();

    let mut engine = ShortestPathEngine::new(&graph, "A", "C").unwrap();
    engine.run_to_completion().unwrap();

    assert_eq!(engine.distance_to("C").unwrap(), Some(Distance::ZERO));
    assert_eq!(engine.path_to("C").unwrap(), vec!["A", "B", "C"]);
}

#[test]
fn test_path_reconstruction_is_idempotent() {
    let graph = lecture_graph();
    let mut engine = ShortestPathEngine::new(&graph, "A", "F").unwrap();
    engine.run_to_completion().unwrap();

    for vertex in graph.vertices() {
        let first = engine.path_to(vertex).unwrap();
        let second = engine.path_to(vertex).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.first().map(String::as_str), Some("A"));
        assert_eq!(first.last().map(String::as_str), Some(vertex));
        assert_eq!(Some(path_weight(&graph, &first)), engine.distance_to(vertex).unwrap());
    }
}

#[test]
fn test_unknown_start_or_end() {
    let graph = lecture_graph();

    assert!(matches!(ShortestPathEngine::new(&graph, "Z", "F"), Err(WalkthroughError::UnknownVertex(vertex)) if vertex == "Z"));
    assert!(matches!(ShortestPathEngine::new(&graph, "A", "Z"), Err(WalkthroughError::UnknownVertex(vertex)) if vertex == "Z"));
}

#[test]
fn test_engine_runs_only_once() {
    let graph = lecture_graph();
    let mut engine = ShortestPathEngine::new(&graph, "A", "F").unwrap();

    assert!(matches!(engine.path_to("F"), Err(WalkthroughError::InvalidState(_))));

    engine.run_to_completion().unwrap();

    assert!(matches!(engine.run(), Err(WalkthroughError::InvalidState(_))));
    assert!(matches!(engine.run_to_completion(), Err(WalkthroughError::InvalidState(_))));
    assert!(matches!(engine.path_to("Z"), Err(WalkthroughError::UnknownVertex(_))));
}

#[test]
fn test_dropping_the_event_sequence_stops_the_run() {
    let graph = lecture_graph();
    let mut engine = ShortestPathEngine::new(&graph, "A", "F").unwrap();

    let consumed: Vec<AlgorithmEvent> = engine.run().unwrap().take(3).collect();
    assert_eq!(consumed, vec![visit("A", 0), relax("A", "B", 2), relax("A", "C", 4)]);

    assert_eq!(engine.state(), EngineState::Running);
    assert_eq!(engine.distance_to("C").unwrap(), Some(distance(4)));
    assert!(matches!(engine.run(), Err(WalkthroughError::InvalidState(_))));
    assert!(matches!(engine.path_to("C"), Err(WalkthroughError::InvalidState(_))));
}

#[test]
fn test_event_log_serializes_to_json() {
    let graph = lecture_graph();
    let mut engine = ShortestPathEngine::new(&graph, "A", "F").unwrap();
    let events = engine.run_to_completion().unwrap();

    let json = serde_json::to_value(&events).unwrap();

    assert_eq!(json[0], serde_json::json!({"event": "visit", "vertex": "A", "distance": 0.0}));
    assert_eq!(json[1], serde_json::json!({"event": "relax", "from": "A", "to": "B", "distance": 2.0}));

    let completed = &json[events.len() - 1];
    assert_eq!(completed["event"], "completed");
    assert_eq!(completed["distances"][5], serde_json::json!(["F", 6.0]));
    assert_eq!(completed["predecessors"][0], serde_json::json!(["A", null]));

    let parsed: Vec<AlgorithmEvent> = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, events);
}
