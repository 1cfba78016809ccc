use blockflow::prelude::*;
use clap::Parser;
use std::fs;
use std::time::Instant;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Compiles a saved canvas diagram into a pipeline source
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the diagram JSON saved by the canvas
    diagram_path: String,

    /// Path to the block catalog JSON; when given, every node must match a catalog block
    #[arg(short, long)]
    catalog: Option<String>,

    /// Maximum number of links followed from the producer
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Write a pipeline registration payload to this path instead of printing the source
    #[arg(short, long)]
    output: Option<String>,

    /// Pipeline name used in the registration payload
    #[arg(long, default_value = "pipeline")]
    name: String,

    /// Pipeline description used in the registration payload
    #[arg(long, default_value = "")]
    description: String,

    /// Path to a JSON schema describing the pipeline's instantiation parameters
    #[arg(long)]
    schema: Option<String>,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let start = Instant::now();

    // --- 1. Loading ---
    let diagram_json = fs::read_to_string(&cli.diagram_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read diagram file '{}': {}",
            cli.diagram_path, e
        ))
    });
    let diagram = UiDiagram::from_json(&diagram_json)
        .map_err(ConversionError::from)
        .and_then(|ui| ui.into_diagram())
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load diagram: {}", e)));

    if let Some(catalog_path) = &cli.catalog {
        let registry = load_registry(catalog_path);
        check_against_catalog(&diagram, &registry);
    }

    // --- 2. Compilation ---
    let compiler = Compiler::builder().with_max_steps(cli.max_steps).build();
    let source = compiler
        .compile(&diagram)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    tracing::info!(elapsed = ?start.elapsed(), "compiled diagram");

    // --- 3. Output ---
    match &cli.output {
        Some(path) => {
            let mut registration =
                PipelineRegistration::new(cli.name.as_str(), cli.description.as_str(), source);
            if let Some(schema_path) = &cli.schema {
                registration = registration.with_schema(load_schema(schema_path));
            }
            registration
                .save(path)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            eprintln!("Wrote pipeline registration to '{}'", path);
        }
        None => println!("{}", source),
    }
}

fn load_registry(path: &str) -> BlockRegistry {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read catalog file '{}': {}", path, e))
    });
    let blocks = parse_catalog(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse catalog JSON: {}", e)));
    BlockRegistry::with_definitions(blocks)
}

/// Rejects nodes whose name or type does not match the catalog.
fn check_against_catalog(diagram: &DiagramModel, registry: &BlockRegistry) {
    for (id, node) in diagram.nodes() {
        match registry.definition(&node.name) {
            Some(definition) if definition.block_type == node.block_type => {}
            Some(definition) => exit_with_error(&format!(
                "Node '{}' ({}) is declared as {}, but the catalog says {}",
                id, node.name, node.block_type, definition.block_type
            )),
            None => exit_with_error(&format!(
                "Node '{}' uses block '{}', which is not in the catalog",
                id, node.name
            )),
        }
    }
}

fn load_schema(path: &str) -> serde_json::Value {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read schema file '{}': {}", path, e))
    });
    serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse schema JSON: {}", e)))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
