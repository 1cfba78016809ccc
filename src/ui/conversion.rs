use super::UiDiagram;
use crate::diagram::{DiagramModel, NodeId, NodeInstance};
use crate::error::ConversionError;
use ahash::AHashMap;

/// A trait for diagram formats that can be converted into a `DiagramModel`.
///
/// This is the extension point for loading diagrams saved by other front-ends:
/// implement it for your own structs and hand the result to the compiler.
///
/// # Example
///
/// ```rust,no_run
/// use blockflow::prelude::*;
/// use blockflow::error::ConversionError;
///
/// struct Chain { blocks: Vec<(String, ProducerKind)> }
///
/// impl IntoDiagram for Chain {
///     fn into_diagram(self) -> std::result::Result<DiagramModel, ConversionError> {
///         let mut diagram = DiagramModel::new();
///         let mut previous = None;
///         for (name, kind) in self.blocks {
///             let id = diagram.add_node(NodeInstance::new(name, kind));
///             if let Some(previous) = previous {
///                 diagram.connect(previous, id)?;
///             }
///             previous = Some(id);
///         }
///         Ok(diagram)
///     }
/// }
/// ```
pub trait IntoDiagram {
    /// Consumes the object and converts it into a diagram the compiler can read.
    fn into_diagram(self) -> Result<DiagramModel, ConversionError>;
}

impl IntoDiagram for UiDiagram {
    fn into_diagram(self) -> Result<DiagramModel, ConversionError> {
        let mut diagram = DiagramModel::new();
        let mut ids: AHashMap<String, NodeId> = AHashMap::new();

        for ui_node in self.nodes {
            if ids.contains_key(&ui_node.id) {
                return Err(ConversionError::DuplicateNode(ui_node.id));
            }
            let node = NodeInstance::new(ui_node.name, ui_node.block_type)
                .with_properties(ui_node.properties)
                .with_position(ui_node.position);
            ids.insert(ui_node.id, diagram.add_node(node));
        }

        let resolve = |id: &str| {
            ids.get(id)
                .copied()
                .ok_or_else(|| ConversionError::UnknownNode(id.to_string()))
        };
        for link in &self.links {
            let source = resolve(&link.source)?;
            let target = resolve(&link.target)?;
            diagram.connect(source, target)?;
        }

        tracing::debug!(
            nodes = diagram.len(),
            links = self.links.len(),
            "converted canvas diagram"
        );
        Ok(diagram)
    }
}

impl IntoDiagram for DiagramModel {
    fn into_diagram(self) -> Result<DiagramModel, ConversionError> {
        Ok(self)
    }
}
