use crate::diagram::{DiagramModel, NodeId, NodeInstance};
use crate::error::CompileError;
use ahash::AHashMap;

mod fragment;
mod linearizer;

pub use fragment::{FragmentWriter, canonical_json, write_fragment};
use linearizer::Linearizer;

/// Separator placed between the fragments of a pipeline source.
pub const SEPARATOR: &str = "\n| ";

/// Default bound on the number of links followed from the producer.
pub const DEFAULT_MAX_STEPS: usize = 50;

/// Turns a `DiagramModel` into a linear pipeline source.
///
/// Compilation is a pure function of the diagram: it performs no I/O, never
/// mutates its input, and compiling an unchanged diagram twice yields the same
/// source.
pub struct Compiler {
    max_steps: usize,
    reject_fan_in: bool,
    writers: AHashMap<String, Box<dyn FragmentWriter>>,
}

pub struct CompilerBuilder {
    max_steps: usize,
    reject_fan_in: bool,
    writers: AHashMap<String, Box<dyn FragmentWriter>>,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            reject_fan_in: false,
            writers: AHashMap::new(),
        }
    }

    /// Sets the number of links the linearizer may follow before giving up.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Rejects pipelines in which a node on the chain has more than one incoming link.
    ///
    /// Off by default: links from nodes that are not part of the chain are ignored,
    /// and a link that loops back into the chain is reported as a cycle.
    pub fn with_fan_in_rejected(mut self, reject: bool) -> Self {
        self.reject_fan_in = reject;
        self
    }

    /// Registers a custom fragment writer for the block it names.
    pub fn with_fragment_writer(mut self, writer: Box<dyn FragmentWriter>) -> Self {
        self.writers.insert(writer.block_name().to_string(), writer);
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            max_steps: self.max_steps,
            reject_fan_in: self.reject_fan_in,
            writers: self.writers,
        }
    }
}

impl Default for CompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Compiler {
    fn default() -> Self {
        CompilerBuilder::new().build()
    }
}

impl Compiler {
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Validates the diagram's structure and returns the pipeline's nodes in order.
    pub fn linearize(&self, diagram: &DiagramModel) -> Result<Vec<NodeId>, CompileError> {
        let chain = Linearizer::new(diagram, self.max_steps, self.reject_fan_in).run()?;
        Ok(chain.into_iter().map(|(id, _)| id).collect())
    }

    /// Compiles the diagram into its pipeline source.
    pub fn compile(&self, diagram: &DiagramModel) -> Result<String, CompileError> {
        let chain = Linearizer::new(diagram, self.max_steps, self.reject_fan_in).run()?;
        let source = chain
            .into_iter()
            .map(|(_, node)| self.fragment(node))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        tracing::info!(bytes = source.len(), "pipeline source generated");
        Ok(source)
    }

    /// The fragment a single node contributes to the pipeline source.
    pub fn fragment(&self, node: &NodeInstance) -> String {
        match self.writers.get(&node.name) {
            Some(writer) => writer.write(node),
            None => write_fragment(node),
        }
    }
}
