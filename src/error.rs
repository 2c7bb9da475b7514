use thiserror::Error;

/// Errors reported by the network model, the matrix builder, the
/// max-flow engine and the scenario loader.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Invalid capacity on edge {from} -> {to}: finite capacities must be positive")]
    InvalidCapacity { from: String, to: String },

    #[error("Node name already in use: {0}")]
    DuplicateNodeName(String),

    #[error("Network already has a virtual source and sink")]
    AlreadyAugmented,

    #[error("Network has no virtual source and sink yet")]
    NotAugmented,

    #[error("Edge {from} -> {to} would enter the virtual source or leave the virtual sink")]
    VirtualTerminalEdge { from: String, to: String },

    #[error("Unresolved node: {0}")]
    UnresolvedNode(String),

    #[error("Invalid endpoints: source {source_index}, sink {sink_index} in a network of {node_count} nodes")]
    InvalidEndpoints {
        source_index: usize,
        sink_index: usize,
        node_count: usize,
    },

    #[error("Flow is unbounded: found an augmenting path without any finite capacity")]
    UnboundedFlow,

    #[error("Flow amount does not fit into the capacity type")]
    Overflow,

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
