//! Tests for graph edits and diagram persistence.
mod common;
use blockflow::prelude::*;
use common::*;
use serde_json::json;

#[test]
fn test_ids_are_unique_and_stable() {
    let mut diagram = DiagramModel::new();
    let a = diagram.add_node(NodeInstance::new("http_source", ProducerKind::Producer));
    let b = diagram.add_node(NodeInstance::new("mqtt_sink", ProducerKind::Consumer));
    diagram.remove_node(a).unwrap();
    let c = diagram.add_node(NodeInstance::new("filter", ProducerKind::ProducerConsumer));

    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
    assert_eq!(diagram.len(), 2);
    assert!(diagram.node(a).is_none());
}

#[test]
fn test_connect_uses_out_and_in_ports() {
    let (diagram, [a, b, c]) = create_simple_diagram();

    let links: Vec<&Link> = diagram.links().map(|(_, link)| link).collect();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].source, PortRef::new(a, 0));
    assert_eq!(links[0].target, PortRef::new(b, 0));
    assert_eq!(links[1].source, PortRef::new(b, 1));
    assert_eq!(links[1].target, PortRef::new(c, 0));

    assert_eq!(diagram.links_from(PortRef::new(b, 1)).count(), 1);
    assert_eq!(diagram.links_into(PortRef::new(b, 0)).count(), 1);
}

#[test]
fn test_link_direction_is_enforced() {
    let (mut diagram, [a, b, c]) = create_simple_diagram();

    // Out-port to out-port.
    assert_eq!(
        diagram.add_link(PortRef::new(a, 0), PortRef::new(b, 1)),
        Err(DiagramError::InvalidDirection {
            node: b,
            port: 1,
            expected: PortDirection::In,
            found: PortDirection::Out,
        })
    );
    // Starting from an in-port.
    assert!(matches!(
        diagram.add_link(PortRef::new(c, 0), PortRef::new(b, 0)),
        Err(DiagramError::InvalidDirection { .. })
    ));
}

#[test]
fn test_link_endpoints_must_exist() {
    let (mut diagram, [a, b, _]) = create_simple_diagram();

    assert_eq!(
        diagram.add_link(PortRef::new(a, 0), PortRef::new(NodeId(99), 0)),
        Err(DiagramError::NodeNotFound(NodeId(99)))
    );
    assert_eq!(
        diagram.add_link(PortRef::new(a, 3), PortRef::new(b, 0)),
        Err(DiagramError::PortNotFound { node: a, port: 3 })
    );
}

#[test]
fn test_connect_requires_matching_ports() {
    let (mut diagram, [a, _, c]) = create_simple_diagram();

    assert_eq!(
        diagram.connect(c, a),
        Err(DiagramError::NoPort {
            node: c,
            direction: PortDirection::Out,
        })
    );
}

#[test]
fn test_remove_node_removes_its_links() {
    let (mut diagram, [a, b, c]) = create_simple_diagram();

    let removed = diagram.remove_node(b).unwrap();
    assert_eq!(removed.name, "json_mapper");
    assert_eq!(diagram.links().count(), 0);
    assert_eq!(diagram.remove_node(b), Err(DiagramError::NodeNotFound(b)));

    diagram.connect(a, c).unwrap();
    assert!(Compiler::default().compile(&diagram).is_ok());
}

#[test]
fn test_remove_link() {
    let (mut diagram, [a, _, _]) = create_simple_diagram();
    let (first, _) = diagram
        .links_from(diagram.out_port(a).unwrap())
        .map(|(id, link)| (id, *link))
        .next()
        .unwrap();

    diagram.remove_link(first).unwrap();
    assert!(diagram.link(first).is_none());
    assert_eq!(diagram.remove_link(first), Err(DiagramError::LinkNotFound(first)));
    assert_eq!(
        Compiler::default().compile(&diagram),
        Err(CompileError::UnterminatedPipeline)
    );
}

#[test]
fn test_set_properties_and_move() {
    let (mut diagram, [a, _, _]) = create_simple_diagram();

    diagram
        .set_properties(a, props(json!({"url": "http://z", "retries": 3})))
        .unwrap();
    diagram.move_node(a, Position::new(1.0, 2.0)).unwrap();

    let node = diagram.node(a).unwrap();
    assert_eq!(node.properties["retries"], json!(3));
    assert_eq!(node.position, Position::new(1.0, 2.0));
    assert_eq!(
        diagram.set_properties(NodeId(42), Default::default()),
        Err(DiagramError::NodeNotFound(NodeId(42)))
    );
}

#[test]
fn test_json_round_trip_preserves_pipeline() {
    let (diagram, _) = create_simple_diagram();
    let json = serde_json::to_string(&diagram).unwrap();

    let restored: DiagramModel = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, diagram);
    let compiler = Compiler::default();
    assert_eq!(
        compiler.compile(&restored).unwrap(),
        compiler.compile(&diagram).unwrap()
    );
    // Ports are rebuilt from the block type.
    assert_eq!(
        restored.node(NodeId(1)).unwrap().ports(),
        &[Port::input(), Port::output()]
    );
}

#[test]
fn test_loading_continues_id_sequence() {
    let (diagram, ids) = create_simple_diagram();
    let json = serde_json::to_string(&diagram).unwrap();
    let mut restored: DiagramModel = serde_json::from_str(&json).unwrap();

    let added = restored.add_node(NodeInstance::new("filter", ProducerKind::ProducerConsumer));
    assert!(!ids.contains(&added));
}

#[test]
fn test_loading_rejects_invalid_links() {
    let json = r#"{
        "nodes": [
            {"id": 0, "name": "http_source", "block_type": "producer"},
            {"id": 1, "name": "mqtt_sink", "block_type": "consumer"}
        ],
        "links": [
            {"id": 0, "source": {"node": 1, "port": 0}, "target": {"node": 0, "port": 0}}
        ]
    }"#;

    let result: std::result::Result<DiagramModel, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_loading_rejects_duplicate_ids() {
    let json = r#"{
        "nodes": [
            {"id": 0, "name": "http_source", "block_type": "producer"},
            {"id": 0, "name": "mqtt_sink", "block_type": "consumer"}
        ],
        "links": []
    }"#;

    let error = serde_json::from_str::<DiagramModel>(json).unwrap_err();
    assert!(error.to_string().contains("used more than once"));
}

#[test]
fn test_loading_rejects_ids_without_room_to_continue() {
    for id in [u64::MAX, u64::MAX - 1, MAX_LOADED_ID + 1] {
        let json = json!({
            "nodes": [{"id": id, "name": "http_source", "block_type": "producer"}],
            "links": []
        });
        let error = serde_json::from_value::<DiagramModel>(json).unwrap_err();
        assert!(error.to_string().contains("too large"), "id {}: {}", id, error);
    }

    let json = json!({
        "nodes": [
            {"id": 0, "name": "http_source", "block_type": "producer"},
            {"id": 1, "name": "mqtt_sink", "block_type": "consumer"}
        ],
        "links": [{"id": u64::MAX, "source": {"node": 0, "port": 0}, "target": {"node": 1, "port": 0}}]
    });
    assert!(serde_json::from_value::<DiagramModel>(json).is_err());
}

#[test]
fn test_loading_largest_id_still_allows_edits() {
    let json = json!({
        "nodes": [{"id": MAX_LOADED_ID, "name": "http_source", "block_type": "producer"}],
        "links": []
    });
    let mut diagram: DiagramModel = serde_json::from_value(json).unwrap();

    let sink = diagram.add_node(NodeInstance::new("mqtt_sink", ProducerKind::Consumer));
    assert_eq!(sink, NodeId(MAX_LOADED_ID + 1));
    diagram.connect(NodeId(MAX_LOADED_ID), sink).unwrap();
    assert!(Compiler::default().compile(&diagram).is_ok());
}

#[test]
fn test_deserialized_node_has_ports() {
    let mapper: NodeInstance =
        serde_json::from_str(r#"{"name": "json_mapper", "block_type": "producer_consumer"}"#)
            .unwrap();
    assert_eq!(mapper.ports(), &[Port::input(), Port::output()]);

    let mut diagram = DiagramModel::new();
    let source = diagram.add_node(NodeInstance::new("http_source", ProducerKind::Producer));
    let mapper = diagram.add_node(mapper);
    let sink = diagram.add_node(NodeInstance::new("mqtt_sink", ProducerKind::Consumer));
    diagram.connect(source, mapper).unwrap();
    diagram.connect(mapper, sink).unwrap();

    assert_eq!(
        Compiler::default().compile(&diagram).unwrap(),
        "http_source\n| json_mapper\n| mqtt_sink"
    );
}
