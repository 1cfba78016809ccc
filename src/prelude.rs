//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the blockflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use blockflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = parse_catalog(&std::fs::read_to_string("path/to/catalog.json")?)?;
//! let diagram = UiDiagram::from_json(&std::fs::read_to_string("path/to/diagram.json")?)?
//!     .into_diagram()?;
//!
//! let factory = NodeFactory::with_definitions(catalog);
//! println!("{} blocks available", factory.registry().len());
//!
//! let source = Compiler::default().compile(&diagram)?;
//! println!("{}", source);
//! # Ok(())
//! # }
//! ```

// Catalog and factory
pub use crate::catalog::{BlockDefinition, ProducerKind, parse_catalog};
pub use crate::factory::{BlockRegistry, NodeFactory};

// Graph model
pub use crate::diagram::{
    DiagramModel, Link, LinkId, MAX_LOADED_ID, NodeId, NodeInstance, Port, PortDirection, PortRef,
    Position,
};

// Compilation
pub use crate::compiler::{Compiler, CompilerBuilder, DEFAULT_MAX_STEPS, FragmentWriter, SEPARATOR};

// Editing and interchange
pub use crate::editor::{DiagramEditor, EditorCommand, EditorEvent};
pub use crate::pipeline::PipelineRegistration;
pub use crate::ui::{IntoDiagram, UiDiagram, UiLink, UiNode};

// Error types
pub use crate::error::{
    CompileError, ConversionError, DiagramError, EditorError, FactoryError, PipelineError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
