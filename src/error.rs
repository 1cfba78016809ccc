use crate::diagram::{LinkId, NodeId, PortDirection};
use thiserror::Error;

/// Errors that can occur while linearizing a diagram into a pipeline.
///
/// The messages are shown to the user verbatim, so their text is part of the
/// public contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Pipelines must start with a producer block")]
    NoProducer,

    #[error("Multiple producer blocks are not supported")]
    MultipleProducers,

    #[error("Pipelines must end with a consumer block")]
    UnterminatedPipeline,

    #[error("Multiple out connections are not supported")]
    Branching,

    #[error("Pipelines cannot form a loop")]
    CycleDetected,

    #[error("Pipeline too long")]
    PipelineTooLong,

    #[error("Multiple in connections are not supported")]
    Merging,

    #[error("Link from node '{node}' points to a missing node")]
    DanglingLink { node: NodeId },
}

/// Errors raised by the node factory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("no such block: '{name}'")]
    UnknownBlock { name: String },
}

/// Errors raised by graph edits on a `DiagramModel`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    #[error("Node '{0}' not found in the diagram")]
    NodeNotFound(NodeId),

    #[error("Link '{0}' not found in the diagram")]
    LinkNotFound(LinkId),

    #[error("Node '{node}' has no port with index {port}")]
    PortNotFound { node: NodeId, port: usize },

    #[error("Port {port} of node '{node}' is an {found} port, expected an {expected} port")]
    InvalidDirection {
        node: NodeId,
        port: usize,
        expected: PortDirection,
        found: PortDirection,
    },

    #[error("Node '{node}' has no {direction} port")]
    NoPort {
        node: NodeId,
        direction: PortDirection,
    },

    #[error("Node id '{0}' is used more than once")]
    DuplicateNode(NodeId),

    #[error("Link id '{0}' is used more than once")]
    DuplicateLink(LinkId),

    #[error("Id {0} is too large to continue numbering from")]
    IdSpaceExhausted(u64),
}

/// Errors that can occur when converting a front-end diagram into a `DiagramModel`.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to parse diagram JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Link references node '{0}', which is not part of the diagram")]
    UnknownNode(String),

    #[error("Duplicate node id '{0}' in diagram")]
    DuplicateNode(String),

    #[error(transparent)]
    Diagram(#[from] DiagramError),
}

/// Errors returned by the editor controller for rejected user actions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error(transparent)]
    Factory(#[from] FactoryError),

    #[error(transparent)]
    Diagram(#[from] DiagramError),
}

/// Errors that can occur while persisting or loading a pipeline registration payload.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Could not access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid pipeline registration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
