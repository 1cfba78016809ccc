use super::Port;
use crate::catalog::ProducerKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Opaque identifier of a node inside a `DiagramModel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Canvas coordinates of a node. Carried along for the front-end, never interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A block placed on the canvas, together with its configured properties.
///
/// The node's id is the key it is stored under in the `DiagramModel` arena.
/// Ports are not serialized; they are rebuilt from `block_type` on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "NodeFields")]
pub struct NodeInstance {
    pub name: String,
    pub block_type: ProducerKind,
    pub properties: Map<String, Value>,
    pub position: Position,
    #[serde(skip)]
    ports: Vec<Port>,
}

impl NodeInstance {
    /// Creates a node with an empty property bag and the port layout of `block_type`.
    pub fn new(name: impl Into<String>, block_type: ProducerKind) -> Self {
        Self {
            name: name.into(),
            block_type,
            properties: Map::new(),
            position: Position::default(),
            ports: block_type.ports(),
        }
    }

    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn port(&self, index: usize) -> Option<&Port> {
        self.ports.get(index)
    }

    /// Index of the node's in-port, if its block type has one.
    pub fn in_port(&self) -> Option<usize> {
        self.ports.iter().position(|p| *p == Port::input())
    }

    /// Index of the node's out-port, if its block type has one.
    pub fn out_port(&self) -> Option<usize> {
        self.ports.iter().position(|p| *p == Port::output())
    }
}

/// The serialized fields of a `NodeInstance`.
#[derive(Deserialize)]
struct NodeFields {
    name: String,
    block_type: ProducerKind,
    #[serde(default)]
    properties: Map<String, Value>,
    #[serde(default)]
    position: Position,
}

impl From<NodeFields> for NodeInstance {
    fn from(fields: NodeFields) -> Self {
        NodeInstance::new(fields.name, fields.block_type)
            .with_properties(fields.properties)
            .with_position(fields.position)
    }
}
