use crate::diagram::Port;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Port-capability classification of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProducerKind {
    /// Emits data only: a single out-port.
    Producer,
    /// Consumes data only: a single in-port.
    Consumer,
    /// Both: an in-port followed by an out-port.
    ProducerConsumer,
}

impl ProducerKind {
    /// The port layout of a node of this kind. The in-port, when present, comes first.
    pub fn ports(self) -> Vec<Port> {
        match self {
            ProducerKind::Producer => vec![Port::output()],
            ProducerKind::Consumer => vec![Port::input()],
            ProducerKind::ProducerConsumer => vec![Port::input(), Port::output()],
        }
    }

    pub fn has_in_port(self) -> bool {
        !matches!(self, ProducerKind::Producer)
    }

    pub fn has_out_port(self) -> bool {
        !matches!(self, ProducerKind::Consumer)
    }
}

impl fmt::Display for ProducerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProducerKind::Producer => write!(f, "producer"),
            ProducerKind::Consumer => write!(f, "consumer"),
            ProducerKind::ProducerConsumer => write!(f, "producer_consumer"),
        }
    }
}

/// A block as published by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub block_type: ProducerKind,
    /// JSON-schema-shaped description of the block's settings.
    #[serde(default)]
    pub schema: Value,
}

impl BlockDefinition {
    pub fn new(name: impl Into<String>, block_type: ProducerKind, schema: Value) -> Self {
        Self {
            name: name.into(),
            block_type,
            schema,
        }
    }

    /// Whether the block exposes any configurable settings.
    ///
    /// Blocks whose `schema.properties` is absent or empty have none.
    pub fn has_settings(&self) -> bool {
        self.schema
            .get("properties")
            .and_then(Value::as_object)
            .is_some_and(|properties| !properties.is_empty())
    }
}
