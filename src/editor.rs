//! The layer between the canvas UI and the diagram.
//!
//! UI interactions arrive as `EditorEvent`s. Each one is applied to the owned
//! `DiagramModel` and answered with an `EditorCommand` telling the UI what to do
//! next, so the data model never stores callbacks.

use crate::compiler::Compiler;
use crate::diagram::{DiagramModel, LinkId, NodeId, PortRef, Position};
use crate::error::{DiagramError, EditorError};
use crate::factory::NodeFactory;
use serde_json::{Map, Value};

/// A user interaction on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// A block was dragged from the palette and dropped on the canvas.
    DropBlock { name: String, position: Position },
    Connect { source: PortRef, target: PortRef },
    Disconnect(LinkId),
    RemoveNode(NodeId),
    MoveNode { node: NodeId, position: Position },
    /// The settings button of a node was clicked.
    SettingsClicked(NodeId),
    /// The settings form was confirmed.
    ApplySettings {
        node: NodeId,
        properties: Map<String, Value>,
    },
    GenerateSource,
}

/// What the UI should do in response to an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    None,
    NodeAdded(NodeId),
    LinkAdded(LinkId),
    /// Open the settings form for `node`, rendered from `schema` and prefilled with `properties`.
    OpenSettings {
        node: NodeId,
        schema: Value,
        properties: Map<String, Value>,
    },
    ShowSource(String),
    /// Show the message to the user as an alert.
    Alert(String),
}

pub struct DiagramEditor {
    factory: NodeFactory,
    compiler: Compiler,
    diagram: DiagramModel,
}

impl DiagramEditor {
    pub fn new(factory: NodeFactory) -> Self {
        Self::with_diagram(factory, DiagramModel::new())
    }

    /// Opens an existing diagram for editing.
    pub fn with_diagram(factory: NodeFactory, diagram: DiagramModel) -> Self {
        Self {
            factory,
            compiler: Compiler::default(),
            diagram,
        }
    }

    pub fn with_compiler(mut self, compiler: Compiler) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn factory(&self) -> &NodeFactory {
        &self.factory
    }

    pub fn diagram(&self) -> &DiagramModel {
        &self.diagram
    }

    pub fn into_diagram(self) -> DiagramModel {
        self.diagram
    }

    /// Applies one UI event.
    ///
    /// Rejected edits are returned as errors and leave the diagram untouched.
    /// Compilation failures are not errors: they come back as `EditorCommand::Alert`
    /// carrying the message to show.
    pub fn handle(&mut self, event: EditorEvent) -> Result<EditorCommand, EditorError> {
        match event {
            EditorEvent::DropBlock { name, position } => {
                let node = self.factory.create_node_at(&name, position)?;
                Ok(EditorCommand::NodeAdded(self.diagram.add_node(node)))
            }
            EditorEvent::Connect { source, target } => {
                let link = self.diagram.add_link(source, target)?;
                Ok(EditorCommand::LinkAdded(link))
            }
            EditorEvent::Disconnect(link) => {
                self.diagram.remove_link(link)?;
                Ok(EditorCommand::None)
            }
            EditorEvent::RemoveNode(node) => {
                self.diagram.remove_node(node)?;
                Ok(EditorCommand::None)
            }
            EditorEvent::MoveNode { node, position } => {
                self.diagram.move_node(node, position)?;
                Ok(EditorCommand::None)
            }
            EditorEvent::SettingsClicked(node) => self.open_settings(node),
            EditorEvent::ApplySettings { node, properties } => {
                self.diagram.set_properties(node, properties)?;
                Ok(EditorCommand::None)
            }
            EditorEvent::GenerateSource => Ok(self.generate_source()),
        }
    }

    /// Compiles the current diagram.
    pub fn generate_source(&self) -> EditorCommand {
        match self.compiler.compile(&self.diagram) {
            Ok(source) => EditorCommand::ShowSource(source),
            Err(e) => {
                tracing::debug!(error = %e, "pipeline generation rejected");
                EditorCommand::Alert(e.to_string())
            }
        }
    }

    fn open_settings(&self, id: NodeId) -> Result<EditorCommand, EditorError> {
        let node = self
            .diagram
            .node(id)
            .ok_or(DiagramError::NodeNotFound(id))?;

        // The block may have left the catalog since the node was created.
        match self.factory.registry().definition(&node.name) {
            Some(definition) if definition.has_settings() => Ok(EditorCommand::OpenSettings {
                node: id,
                schema: definition.schema,
                properties: node.properties.clone(),
            }),
            _ => Ok(EditorCommand::None),
        }
    }
}
