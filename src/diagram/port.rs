use super::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a port: links leave through `Out` ports and enter through `In` ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortDirection {
    In,
    Out,
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortDirection::In => write!(f, "in"),
            PortDirection::Out => write!(f, "out"),
        }
    }
}

/// An attachment point for links on a node.
///
/// A port does not store its links; they live in the owning `DiagramModel`
/// and are looked up by `PortRef`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub direction: PortDirection,
}

impl Port {
    pub fn input() -> Self {
        Self {
            direction: PortDirection::In,
        }
    }

    pub fn output() -> Self {
        Self {
            direction: PortDirection::Out,
        }
    }
}

/// Addresses a single port: the owning node and the port's index on that node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PortRef {
    pub node: NodeId,
    pub port: usize,
}

impl PortRef {
    pub fn new(node: NodeId, port: usize) -> Self {
        Self { node, port }
    }
}

impl fmt::Display for PortRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node, self.port)
    }
}
