use super::PortRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a link inside a `DiagramModel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(pub u64);

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "link-{}", self.0)
    }
}

/// A directed edge from one node's out-port to another node's in-port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub source: PortRef,
    pub target: PortRef,
}

impl Link {
    pub fn new(source: PortRef, target: PortRef) -> Self {
        Self { source, target }
    }
}
