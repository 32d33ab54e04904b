pub type WalkthroughResult<T> = Result<T, WalkthroughError>;

#[derive(thiserror::Error, Debug)]
pub enum WalkthroughError {
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("no such edge: {from} - {to}")]
    NoSuchEdge { from: String, to: String },

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("unreachable vertex: {0}")]
    Unreachable(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WalkthroughError {
    pub fn invalid_graph(msg: impl Into<String>) -> Self {
        Self::InvalidGraph(msg.into())
    }

    pub fn unknown_vertex(vertex: impl Into<String>) -> Self {
        Self::UnknownVertex(vertex.into())
    }

    pub fn no_such_edge(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::NoSuchEdge {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn unreachable(vertex: impl Into<String>) -> Self {
        Self::Unreachable(vertex.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
