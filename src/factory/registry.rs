use crate::catalog::BlockDefinition;
use ahash::AHashMap;
use std::sync::{Arc, PoisonError, RwLock};

type Definitions = Arc<AHashMap<String, BlockDefinition>>;

/// The set of block definitions new nodes can be created from.
///
/// The catalog is refreshed asynchronously while the factory may be in use, so
/// the map is held as an immutable snapshot. `update_definitions` builds a new
/// map and swaps the `Arc` in one step; readers clone the `Arc` and never see a
/// partially updated catalog.
#[derive(Debug, Default)]
pub struct BlockRegistry {
    definitions: RwLock<Definitions>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definitions(blocks: impl IntoIterator<Item = BlockDefinition>) -> Self {
        let registry = Self::new();
        registry.update_definitions(blocks);
        registry
    }

    /// Replaces the whole registry. Names missing from `blocks` can no longer be
    /// used to create nodes; nodes already on a canvas are not affected.
    pub fn update_definitions(&self, blocks: impl IntoIterator<Item = BlockDefinition>) {
        let mut map = AHashMap::new();
        for block in blocks {
            if let Some(previous) = map.insert(block.name.clone(), block) {
                tracing::warn!(block = %previous.name, "duplicate block name in catalog, keeping the last definition");
            }
        }
        let count = map.len();
        *self
            .definitions
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(map);
        tracing::debug!(count, "block registry updated");
    }

    /// A consistent view of the registry at the time of the call.
    pub fn snapshot(&self) -> Definitions {
        Arc::clone(
            &self
                .definitions
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    pub fn definition(&self, name: &str) -> Option<BlockDefinition> {
        self.snapshot().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.snapshot().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// All known definitions, sorted by name.
    pub fn definitions(&self) -> Vec<BlockDefinition> {
        let mut blocks: Vec<_> = self.snapshot().values().cloned().collect();
        blocks.sort_by(|a, b| a.name.cmp(&b.name));
        blocks
    }
}
