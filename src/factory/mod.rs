use crate::catalog::BlockDefinition;
use crate::diagram::{NodeInstance, Position};
use crate::error::FactoryError;
use std::sync::Arc;

mod registry;

pub use registry::BlockRegistry;

/// Manufactures `NodeInstance`s from block names.
///
/// The factory never touches a `DiagramModel`; callers insert the returned node
/// themselves. Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct NodeFactory {
    registry: Arc<BlockRegistry>,
}

impl NodeFactory {
    pub fn new(registry: Arc<BlockRegistry>) -> Self {
        Self { registry }
    }

    pub fn with_definitions(blocks: impl IntoIterator<Item = BlockDefinition>) -> Self {
        Self::new(Arc::new(BlockRegistry::with_definitions(blocks)))
    }

    pub fn registry(&self) -> &Arc<BlockRegistry> {
        &self.registry
    }

    /// Replaces the catalog the factory creates nodes from.
    pub fn update_definitions(&self, blocks: impl IntoIterator<Item = BlockDefinition>) {
        self.registry.update_definitions(blocks);
    }

    /// Creates a node for the block called `name`, with an empty property bag and
    /// the ports implied by the block's type.
    pub fn create_node(&self, name: &str) -> Result<NodeInstance, FactoryError> {
        let definitions = self.registry.snapshot();
        let definition = definitions
            .get(name)
            .ok_or_else(|| FactoryError::UnknownBlock {
                name: name.to_string(),
            })?;
        tracing::debug!(block = %definition.name, kind = %definition.block_type, "creating node");
        Ok(NodeInstance::new(&definition.name, definition.block_type))
    }

    pub fn create_node_at(
        &self,
        name: &str,
        position: Position,
    ) -> Result<NodeInstance, FactoryError> {
        self.create_node(name)
            .map(|node| node.with_position(position))
    }
}
