pub mod types;
pub mod error;

pub mod graph_representation;
pub mod graph_algorithms;
pub mod shortest_path;
pub mod storyboard;
pub mod config;
pub mod utils;

pub use error::{WalkthroughError, WalkthroughResult};
pub use graph_representation::GraphModel;
pub use shortest_path::{AlgorithmEvent, EngineState, ShortestPathEngine};
