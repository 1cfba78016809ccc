use super::{Link, LinkId, NodeId, NodeInstance, PortDirection, PortRef, Position};
use crate::error::DiagramError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Largest node or link id a saved diagram may contain.
pub const MAX_LOADED_ID: u64 = i64::MAX as u64;

/// The full graph on the canvas: an arena of nodes keyed by `NodeId` plus the links between them.
///
/// Links are stored as `(source port, target port)` tuples, so nodes never hold
/// references to each other. Every mutation goes through a method that keeps the
/// following true:
///
/// - every link connects an existing `Out` port to an existing `In` port;
/// - removing a node removes every link touching it.
///
/// Ports may carry any number of links. Whether a graph forms a valid pipeline
/// is only decided when it is compiled.
///
/// Ids handed out by `add_node` and `add_link` are sequential. Loading a saved
/// diagram only accepts ids up to `MAX_LOADED_ID`, so the counters never wrap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DiagramSnapshot", into = "DiagramSnapshot")]
pub struct DiagramModel {
    nodes: BTreeMap<NodeId, NodeInstance>,
    links: BTreeMap<LinkId, Link>,
    next_node_id: u64,
    next_link_id: u64,
}

impl DiagramModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeInstance> {
        self.nodes.get(&id)
    }

    /// Iterates over all nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NodeInstance)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(&id)
    }

    pub fn links(&self) -> impl Iterator<Item = (LinkId, &Link)> {
        self.links.iter().map(|(id, link)| (*id, link))
    }

    /// Links leaving the given port.
    pub fn links_from(&self, port: PortRef) -> impl Iterator<Item = (LinkId, &Link)> {
        self.links().filter(move |(_, link)| link.source == port)
    }

    /// Links entering the given port.
    pub fn links_into(&self, port: PortRef) -> impl Iterator<Item = (LinkId, &Link)> {
        self.links().filter(move |(_, link)| link.target == port)
    }

    /// Links leaving any out-port of `node`.
    pub fn outgoing_links(&self, node: NodeId) -> impl Iterator<Item = &Link> {
        self.links
            .values()
            .filter(move |link| link.source.node == node)
    }

    /// The out-port of `node`, or `None` if the node is unknown or is a pure consumer.
    pub fn out_port(&self, node: NodeId) -> Option<PortRef> {
        self.node(node)?
            .out_port()
            .map(|port| PortRef::new(node, port))
    }

    /// The in-port of `node`, or `None` if the node is unknown or is a pure producer.
    pub fn in_port(&self, node: NodeId) -> Option<PortRef> {
        self.node(node)?
            .in_port()
            .map(|port| PortRef::new(node, port))
    }

    /// Inserts a node and returns the id it was stored under.
    pub fn add_node(&mut self, node: NodeInstance) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.insert(id, node);
        tracing::trace!(node = %id, "added node");
        id
    }

    /// Removes a node together with every link attached to it.
    pub fn remove_node(&mut self, id: NodeId) -> Result<NodeInstance, DiagramError> {
        let node = self
            .nodes
            .remove(&id)
            .ok_or(DiagramError::NodeNotFound(id))?;
        self.links
            .retain(|_, link| link.source.node != id && link.target.node != id);
        tracing::trace!(node = %id, "removed node");
        Ok(node)
    }

    /// Connects an out-port to an in-port.
    pub fn add_link(&mut self, source: PortRef, target: PortRef) -> Result<LinkId, DiagramError> {
        let id = LinkId(self.next_link_id);
        self.insert_link(id, Link::new(source, target))?;
        self.next_link_id += 1;
        tracing::trace!(link = %id, %source, %target, "added link");
        Ok(id)
    }

    /// Connects the out-port of `source` to the in-port of `target`.
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> Result<LinkId, DiagramError> {
        let source_port = self.require_port(source, PortDirection::Out)?;
        let target_port = self.require_port(target, PortDirection::In)?;
        self.add_link(source_port, target_port)
    }

    pub fn remove_link(&mut self, id: LinkId) -> Result<Link, DiagramError> {
        self.links.remove(&id).ok_or(DiagramError::LinkNotFound(id))
    }

    /// Replaces the property bag of a node.
    pub fn set_properties(
        &mut self,
        id: NodeId,
        properties: Map<String, Value>,
    ) -> Result<(), DiagramError> {
        self.node_mut(id)?.properties = properties;
        Ok(())
    }

    pub fn move_node(&mut self, id: NodeId, position: Position) -> Result<(), DiagramError> {
        self.node_mut(id)?.position = position;
        Ok(())
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeInstance, DiagramError> {
        self.nodes.get_mut(&id).ok_or(DiagramError::NodeNotFound(id))
    }

    fn require_port(&self, node: NodeId, direction: PortDirection) -> Result<PortRef, DiagramError> {
        if !self.nodes.contains_key(&node) {
            return Err(DiagramError::NodeNotFound(node));
        }
        let port = match direction {
            PortDirection::In => self.in_port(node),
            PortDirection::Out => self.out_port(node),
        };
        port.ok_or(DiagramError::NoPort { node, direction })
    }

    /// Validates a link against the arena and stores it under `id`.
    fn insert_link(&mut self, id: LinkId, link: Link) -> Result<(), DiagramError> {
        if self.links.contains_key(&id) {
            return Err(DiagramError::DuplicateLink(id));
        }
        self.check_port(link.source, PortDirection::Out)?;
        self.check_port(link.target, PortDirection::In)?;
        self.links.insert(id, link);
        Ok(())
    }

    fn check_port(&self, port: PortRef, expected: PortDirection) -> Result<(), DiagramError> {
        let node = self
            .node(port.node)
            .ok_or(DiagramError::NodeNotFound(port.node))?;
        let found = node
            .port(port.port)
            .ok_or(DiagramError::PortNotFound {
                node: port.node,
                port: port.port,
            })?
            .direction;
        if found != expected {
            return Err(DiagramError::InvalidDirection {
                node: port.node,
                port: port.port,
                expected,
                found,
            });
        }
        Ok(())
    }
}

/// Serialized form of a `DiagramModel`; loading it re-validates every link.
#[derive(Debug, Serialize, Deserialize)]
struct DiagramSnapshot {
    nodes: Vec<NodeEntry>,
    links: Vec<LinkEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeEntry {
    id: NodeId,
    #[serde(flatten)]
    node: NodeInstance,
}

#[derive(Debug, Serialize, Deserialize)]
struct LinkEntry {
    id: LinkId,
    #[serde(flatten)]
    link: Link,
}

impl TryFrom<DiagramSnapshot> for DiagramModel {
    type Error = DiagramError;

    fn try_from(snapshot: DiagramSnapshot) -> Result<Self, Self::Error> {
        let mut model = DiagramModel::new();
        for NodeEntry { id, node } in snapshot.nodes {
            if model.nodes.contains_key(&id) {
                return Err(DiagramError::DuplicateNode(id));
            }
            model.nodes.insert(id, node);
            model.next_node_id = model.next_node_id.max(next_id(id.0)?);
        }
        for LinkEntry { id, link } in snapshot.links {
            model.insert_link(id, link)?;
            model.next_link_id = model.next_link_id.max(next_id(id.0)?);
        }
        Ok(model)
    }
}

/// The counter value that follows a loaded id.
fn next_id(id: u64) -> Result<u64, DiagramError> {
    id.checked_add(1)
        .filter(|_| id <= MAX_LOADED_ID)
        .ok_or(DiagramError::IdSpaceExhausted(id))
}

impl From<DiagramModel> for DiagramSnapshot {
    fn from(model: DiagramModel) -> Self {
        Self {
            nodes: model
                .nodes
                .into_iter()
                .map(|(id, node)| NodeEntry { id, node })
                .collect(),
            links: model
                .links
                .into_iter()
                .map(|(id, link)| LinkEntry { id, link })
                .collect(),
        }
    }
}
