//! Tests for graph editing operations and import/export.
mod common;
use common::*;
use flujo::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn add_node_rejects_duplicate_ids() {
    let graph = welcome_flow();
    let result = graph.add_node(message("welcome", "otra vez"));
    assert_eq!(result, Err(EditError::DuplicateNode("welcome".to_string())));
}

#[test]
fn remove_node_cascades_edges() {
    let graph = welcome_flow();
    let next = graph.remove_node("welcome").expect("node exists");

    assert!(next.node("welcome").is_none());
    // Both edges referenced the removed node.
    assert!(next.edges.is_empty());
    // The input graph is an untouched snapshot.
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.edges.len(), 2);
}

#[test]
fn remove_missing_node_is_an_error() {
    let graph = welcome_flow();
    assert_eq!(
        graph.remove_node("nope"),
        Err(EditError::NodeNotFound("nope".to_string()))
    );
}

#[test]
fn add_edge_requires_existing_endpoints() {
    let graph = welcome_flow();
    let result = graph.add_edge(edge("e9", "welcome", "ghost"));
    assert_eq!(
        result,
        Err(EditError::DanglingEndpoint {
            edge_id: "e9".to_string(),
            node_id: "ghost".to_string(),
        })
    );
}

#[test]
fn remove_edge_by_id() {
    let graph = welcome_flow();
    let next = graph.remove_edge("e2").expect("edge exists");
    assert_eq!(next.edges.len(), 1);
    assert!(next.edge("e2").is_none());
}

#[test]
fn apply_patch_merges_rather_than_replaces() {
    let graph = welcome_flow();

    // First switch the template flag on, then patch only the text.
    let graph = graph
        .apply_patch("welcome", &serde_json::json!({ "useTemplate": true }))
        .expect("patch applies");
    let graph = graph
        .apply_patch("welcome", &serde_json::json!({ "text": "Hola!" }))
        .expect("patch applies");

    match &graph.node("welcome").expect("node exists").payload {
        NodePayload::Message(data) => {
            assert_eq!(data.text, "Hola!");
            assert!(data.use_template, "merge must keep fields absent from the patch");
        }
        other => panic!("unexpected payload: {:?}", other),
    }
}

#[test]
fn apply_patch_leaves_everything_else_identical() {
    let graph = welcome_flow();
    let patched = graph
        .apply_patch("welcome", &serde_json::json!({ "text": "Hola!" }))
        .expect("patch applies");

    assert_eq!(patched.edges, graph.edges);
    for (before, after) in graph.nodes.iter().zip(&patched.nodes) {
        if before.id != "welcome" {
            assert_eq!(before, after);
        }
    }
}

#[test]
fn apply_patch_rejects_bad_input() {
    let graph = welcome_flow();

    assert_eq!(
        graph.apply_patch("ghost", &serde_json::json!({})),
        Err(EditError::NodeNotFound("ghost".to_string()))
    );
    assert!(matches!(
        graph.apply_patch("welcome", &serde_json::json!("not an object")),
        Err(EditError::InvalidPatch { .. })
    ));
    // Wrong field type fails deserialization and leaves the graph unused.
    assert!(matches!(
        graph.apply_patch("welcome", &serde_json::json!({ "text": 5 })),
        Err(EditError::InvalidPatch { .. })
    ));
}

#[test]
fn export_import_round_trip() {
    let mut headers = indexmap::IndexMap::new();
    headers.insert("Authorization".to_string(), "Bearer token".to_string());

    let graph = FlowGraph::new(
        vec![
            trigger("start", "pedido"),
            FlowNode::new(
                "lookup",
                NodePayload::Api(ApiData {
                    name: "Buscar pedido".to_string(),
                    url: "https://api.example.com/orders".to_string(),
                    method: HttpMethod::POST,
                    headers,
                    body: "{}".to_string(),
                    assign_to: "order".to_string(),
                }),
            ),
            media("photo", MediaType::Image, "https://cdn.example.com/a.png", Some("Mira")),
            end("fin"),
        ],
        vec![
            edge("e1", "start", "lookup"),
            edge("e2", "lookup", "photo"),
            edge("e3", "photo", "fin"),
        ],
    );

    let json = export_graph(&graph);
    let back = import_graph(&json).expect("round trip imports");
    assert_eq!(back, graph);
}

#[test]
fn import_rejects_incomplete_documents() {
    assert!(matches!(import_graph("[]"), Err(ImportError::NotAnObject)));
    assert!(matches!(
        import_graph(r#"{"edges": []}"#),
        Err(ImportError::MissingNodes)
    ));
    assert!(matches!(
        import_graph(r#"{"nodes": []}"#),
        Err(ImportError::MissingEdges)
    ));
    assert!(matches!(
        import_graph(r#"{"nodes": {}, "edges": []}"#),
        Err(ImportError::MissingNodes)
    ));
    assert!(matches!(import_graph("not json"), Err(ImportError::Malformed(_))));
}

#[test]
fn import_rejects_unknown_node_types() {
    let json = r#"{
        "nodes": [
            { "id": "x", "type": "teleport", "data": { "name": "" }, "position": { "x": 0.0, "y": 0.0 } }
        ],
        "edges": []
    }"#;
    assert!(matches!(import_graph(json), Err(ImportError::Malformed(_))));
}
