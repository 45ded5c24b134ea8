use super::graph::FlowGraph;
use crate::error::ImportError;

/// Serializes a graph into its canonical JSON `{nodes, edges}` form.
///
/// This is the shape the persistence layer stores and the flow builder
/// exchanges; [`import_graph`] accepts exactly this output.
pub fn export_graph(graph: &FlowGraph) -> String {
    // FlowGraph contains no map with non-deterministic iteration order
    // (headers use IndexMap), so the output is stable for a given graph.
    // All keys are strings, which makes serialization infallible.
    match serde_json::to_string_pretty(graph) {
        Ok(json) => json,
        Err(_) => String::from("{\"nodes\":[],\"edges\":[]}"),
    }
}

/// Parses a canonical JSON document into a graph.
///
/// The document must be an object carrying both `nodes` and `edges` as
/// arrays; anything else is rejected as a unit and the caller's previously
/// loaded graph stays untouched. Unknown node types fail here too, since
/// the node vocabulary is a closed enum.
pub fn import_graph(json: &str) -> Result<FlowGraph, ImportError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| ImportError::Malformed(e.to_string()))?;

    let object = value.as_object().ok_or(ImportError::NotAnObject)?;
    if !object.get("nodes").is_some_and(|n| n.is_array()) {
        return Err(ImportError::MissingNodes);
    }
    if !object.get("edges").is_some_and(|e| e.is_array()) {
        return Err(ImportError::MissingEdges);
    }

    serde_json::from_value(value).map_err(|e| ImportError::Malformed(e.to_string()))
}
