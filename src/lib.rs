//! # blockflow - Visual Pipeline Compiler
//!
//! **blockflow** turns a block diagram assembled on a canvas into the linear,
//! textual pipeline definition executed by a backend flow engine.
//!
//! A pipeline is a strict pipe-chain: one producer block, any number of
//! producer/consumer blocks, and one consumer block, each stage consuming the
//! previous stage's output. The compiler accepts any diagram the user can draw
//! and either emits the pipeline source or reports precisely which structural
//! rule the diagram breaks.
//!
//! ## Core Workflow
//!
//! 1.  **Load the Catalog**: Parse the block catalog into `BlockDefinition`s and hand them to a `NodeFactory`.
//! 2.  **Build the Diagram**: Create nodes with the factory and link them in a `DiagramModel`,
//!     either directly, through the `DiagramEditor`, or by converting a saved canvas with `IntoDiagram`.
//! 3.  **Compile**: Use `Compiler::compile` to produce the pipeline source, fragments joined by `"\n| "`.
//! 4.  **Register**: Wrap the source in a `PipelineRegistration` and submit it to the backend.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blockflow::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the catalog.
//!     let catalog = parse_catalog(
//!         r#"[
//!             {"name": "http_source", "type": "producer", "schema": {"properties": {"url": {"type": "string"}}}},
//!             {"name": "json_mapper", "type": "producer_consumer", "schema": {}},
//!             {"name": "mqtt_sink", "type": "consumer", "schema": {"properties": {"topic": {"type": "string"}}}}
//!         ]"#,
//!     )?;
//!     let factory = NodeFactory::with_definitions(catalog);
//!
//!     // 2. Build the diagram.
//!     let mut diagram = DiagramModel::new();
//!     let source = diagram.add_node(factory.create_node("http_source")?);
//!     let mapper = diagram.add_node(factory.create_node("json_mapper")?);
//!     let sink = diagram.add_node(factory.create_node("mqtt_sink")?);
//!     diagram.connect(source, mapper)?;
//!     diagram.connect(mapper, sink)?;
//!
//!     let mut url = serde_json::Map::new();
//!     url.insert("url".to_string(), json!("http://x"));
//!     diagram.set_properties(source, url)?;
//!
//!     // 3. Compile.
//!     let source_text = Compiler::default().compile(&diagram)?;
//!     println!("{}", source_text);
//!
//!     // 4. Build the registration payload.
//!     let registration = PipelineRegistration::new("ingest", "HTTP to MQTT", source_text);
//!     println!("{}", registration.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod compiler;
pub mod diagram;
pub mod editor;
pub mod error;
pub mod factory;
pub mod pipeline;
pub mod prelude;
pub mod ui;
