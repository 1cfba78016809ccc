//! Common test utilities for building catalogs and diagrams.
use blockflow::prelude::*;
use serde_json::{Map, Value, json};

/// A small catalog covering every block kind.
#[allow(dead_code)]
pub fn create_catalog() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new(
            "http_source",
            ProducerKind::Producer,
            json!({"properties": {"url": {"type": "string"}}}),
        ),
        BlockDefinition::new(
            "timer_source",
            ProducerKind::Producer,
            json!({"properties": {"interval": {"type": "integer"}}}),
        ),
        BlockDefinition::new("json_mapper", ProducerKind::ProducerConsumer, json!({})),
        BlockDefinition::new(
            "filter",
            ProducerKind::ProducerConsumer,
            json!({"properties": {"expression": {"type": "string"}}}),
        ),
        BlockDefinition::new(
            "mqtt_sink",
            ProducerKind::Consumer,
            json!({"properties": {"topic": {"type": "string"}}}),
        ),
    ]
}

#[allow(dead_code)]
pub fn create_factory() -> NodeFactory {
    NodeFactory::with_definitions(create_catalog())
}

/// Turns a `json!` object literal into a property bag.
#[allow(dead_code)]
pub fn props(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

/// The `http_source -> json_mapper -> mqtt_sink` diagram.
///
/// Returns the diagram and the node ids in chain order.
#[allow(dead_code)]
pub fn create_simple_diagram() -> (DiagramModel, [NodeId; 3]) {
    let mut diagram = DiagramModel::new();
    let a = diagram.add_node(
        NodeInstance::new("http_source", ProducerKind::Producer)
            .with_properties(props(json!({"url": "http://x"}))),
    );
    let b = diagram.add_node(NodeInstance::new("json_mapper", ProducerKind::ProducerConsumer));
    let c = diagram.add_node(
        NodeInstance::new("mqtt_sink", ProducerKind::Consumer)
            .with_properties(props(json!({"topic": "t"}))),
    );
    diagram.connect(a, b).unwrap();
    diagram.connect(b, c).unwrap();
    (diagram, [a, b, c])
}

/// A linked chain of `len` nodes: one producer, `len - 2` mappers, one consumer.
///
/// Each mapper carries its position in the chain as a property so fragments differ.
#[allow(dead_code)]
pub fn create_chain(len: usize) -> (DiagramModel, Vec<NodeId>) {
    assert!(len >= 2, "a chain needs at least a producer and a consumer");
    let mut diagram = DiagramModel::new();
    let mut ids = vec![diagram.add_node(NodeInstance::new("http_source", ProducerKind::Producer))];
    for i in 1..len - 1 {
        ids.push(diagram.add_node(
            NodeInstance::new("json_mapper", ProducerKind::ProducerConsumer)
                .with_properties(props(json!({"step": i}))),
        ));
    }
    ids.push(diagram.add_node(NodeInstance::new("mqtt_sink", ProducerKind::Consumer)));
    for pair in ids.windows(2) {
        diagram.connect(pair[0], pair[1]).unwrap();
    }
    (diagram, ids)
}

/// A saved canvas diagram in the dashboard's JSON shape.
#[allow(dead_code)]
pub const SIMPLE_CANVAS_JSON: &str = r#"{
    "nodes": [
        {"id": "sink", "name": "mqtt_sink", "blockType": "consumer", "properties": {"topic": "t"}, "position": {"x": 400.0, "y": 0.0}},
        {"id": "src", "name": "http_source", "blockType": "producer", "properties": {"url": "http://x"}, "position": {"x": 0.0, "y": 0.0}},
        {"id": "map", "name": "json_mapper", "blockType": "producer_consumer"}
    ],
    "links": [
        {"source": "src", "target": "map"},
        {"source": "map", "target": "sink"}
    ]
}"#;

#[allow(dead_code)]
pub const CATALOG_JSON: &str = r#"[
    {"name": "http_source", "type": "producer", "schema": {"properties": {"url": {"type": "string"}}}},
    {"name": "json_mapper", "type": "producer_consumer", "schema": {"properties": {}}},
    {"name": "mqtt_sink", "type": "consumer"}
]"#;
