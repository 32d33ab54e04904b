pub mod engine;
pub mod events;

pub use engine::{EngineState, Events, ShortestPathEngine};
pub use events::{AlgorithmEvent, DistanceTable, PredecessorTable, VertexTable};
