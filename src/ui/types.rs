use crate::catalog::ProducerKind;
use crate::diagram::Position;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node as saved by the dashboard canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiNode {
    pub id: String,
    pub name: String,
    #[serde(alias = "blockType")]
    pub block_type: ProducerKind,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub position: Position,
}

/// A link as saved by the dashboard canvas, from the source node's out-port
/// to the target node's in-port.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiLink {
    pub source: String,
    pub target: String,
}

/// Complete diagram as saved by the dashboard canvas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiDiagram {
    pub nodes: Vec<UiNode>,
    #[serde(default)]
    pub links: Vec<UiLink>,
}

impl UiDiagram {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
