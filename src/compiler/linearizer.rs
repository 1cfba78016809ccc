use crate::catalog::ProducerKind;
use crate::diagram::{DiagramModel, NodeId, NodeInstance};
use crate::error::CompileError;
use ahash::AHashSet;

/// Walks a diagram from its producer to its consumer, following one out link per node.
pub(super) struct Linearizer<'a> {
    diagram: &'a DiagramModel,
    max_steps: usize,
    reject_fan_in: bool,
}

impl<'a> Linearizer<'a> {
    pub(super) fn new(diagram: &'a DiagramModel, max_steps: usize, reject_fan_in: bool) -> Self {
        Self {
            diagram,
            max_steps,
            reject_fan_in,
        }
    }

    /// Returns the nodes of the pipeline in traversal order, starting at the producer.
    ///
    /// Stops at the first violated rule.
    pub(super) fn run(&self) -> Result<Vec<(NodeId, &'a NodeInstance)>, CompileError> {
        let (producer, producer_node) = self.find_producer()?;

        let mut current = producer;
        let mut visited = AHashSet::from_iter([producer]);
        let mut chain = vec![(producer, producer_node)];
        let mut steps = 0usize;

        loop {
            let next = self.next_node(current)?;
            if self.reject_fan_in && self.incoming_count(next) > 1 {
                return Err(CompileError::Merging);
            }
            if !visited.insert(next) {
                return Err(CompileError::CycleDetected);
            }
            steps += 1;
            if steps > self.max_steps {
                return Err(CompileError::PipelineTooLong);
            }

            let node = self
                .diagram
                .node(next)
                .ok_or(CompileError::DanglingLink { node: current })?;
            chain.push((next, node));
            current = next;
            if node.block_type == ProducerKind::Consumer {
                break;
            }
        }

        tracing::debug!(producer = %producer, length = chain.len(), "diagram linearized");
        Ok(chain)
    }

    /// The unique `Producer` node. `ProducerConsumer` nodes never start a pipeline.
    fn find_producer(&self) -> Result<(NodeId, &'a NodeInstance), CompileError> {
        let producers: Vec<(NodeId, &'a NodeInstance)> = self
            .diagram
            .nodes()
            .filter(|(_, node)| node.block_type == ProducerKind::Producer)
            .collect();

        match producers.as_slice() {
            [] => Err(CompileError::NoProducer),
            [producer] => Ok(*producer),
            _ => Err(CompileError::MultipleProducers),
        }
    }

    /// The target of the single link leaving `node`.
    fn next_node(&self, node: NodeId) -> Result<NodeId, CompileError> {
        let mut links = self.diagram.outgoing_links(node);
        match (links.next(), links.next()) {
            (None, _) => Err(CompileError::UnterminatedPipeline),
            (Some(link), None) => Ok(link.target.node),
            (Some(_), Some(_)) => Err(CompileError::Branching),
        }
    }

    fn incoming_count(&self, node: NodeId) -> usize {
        self.diagram
            .in_port(node)
            .map_or(0, |port| self.diagram.links_into(port).count())
    }
}
