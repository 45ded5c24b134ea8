use super::node::{FlowNode, NodePayload, Position};
use crate::error::EditError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A directed connection between two nodes.
///
/// `source_handle` names the connection point on the source node for types
/// with more than one outgoing path (Condition, Options). It is absent for
/// single-output types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
}

impl FlowEdge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            source_handle: None,
        }
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.source_handle = Some(handle.into());
        self
    }
}

/// The canonical, serializable representation of one chatbot flow.
///
/// A graph is treated as an immutable snapshot: every editing operation
/// returns a new graph and leaves the input unchanged, so an in-flight
/// simulation never observes a concurrent edit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn new(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Looks up an edge by id.
    pub fn edge(&self, id: &str) -> Option<&FlowEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Builds an id -> node lookup table for traversal.
    pub(crate) fn node_index(&self) -> AHashMap<&str, &FlowNode> {
        self.nodes.iter().map(|n| (n.id.as_str(), n)).collect()
    }

    /// Adds a node, rejecting duplicate ids.
    pub fn add_node(&self, node: FlowNode) -> Result<FlowGraph, EditError> {
        if self.node(&node.id).is_some() {
            return Err(EditError::DuplicateNode(node.id));
        }
        let mut next = self.clone();
        next.nodes.push(node);
        Ok(next)
    }

    /// Removes a node and cascades: every edge referencing it goes too.
    pub fn remove_node(&self, id: &str) -> Result<FlowGraph, EditError> {
        if self.node(id).is_none() {
            return Err(EditError::NodeNotFound(id.to_string()));
        }
        let mut next = self.clone();
        next.nodes.retain(|n| n.id != id);
        next.edges.retain(|e| e.source != id && e.target != id);
        Ok(next)
    }

    /// Adds an edge. Both endpoints must already exist.
    pub fn add_edge(&self, edge: FlowEdge) -> Result<FlowGraph, EditError> {
        if self.edge(&edge.id).is_some() {
            return Err(EditError::DuplicateEdge(edge.id));
        }
        for endpoint in [&edge.source, &edge.target] {
            if self.node(endpoint).is_none() {
                return Err(EditError::DanglingEndpoint {
                    edge_id: edge.id.clone(),
                    node_id: endpoint.clone(),
                });
            }
        }
        let mut next = self.clone();
        next.edges.push(edge);
        Ok(next)
    }

    /// Removes an edge by id.
    pub fn remove_edge(&self, id: &str) -> Result<FlowGraph, EditError> {
        if self.edge(id).is_none() {
            return Err(EditError::EdgeNotFound(id.to_string()));
        }
        let mut next = self.clone();
        next.edges.retain(|e| e.id != id);
        Ok(next)
    }

    /// Merges a partial `data` object into one node's payload.
    ///
    /// Fields present in `partial` replace the node's current values; every
    /// field absent from `partial` is kept, and all other nodes and edges
    /// are untouched. The node's type cannot be changed through a patch.
    pub fn apply_patch(
        &self,
        node_id: &str,
        partial: &serde_json::Value,
    ) -> Result<FlowGraph, EditError> {
        let position = self
            .nodes
            .iter()
            .position(|n| n.id == node_id)
            .ok_or_else(|| EditError::NodeNotFound(node_id.to_string()))?;

        let patch = partial.as_object().ok_or_else(|| EditError::InvalidPatch {
            node_id: node_id.to_string(),
            message: "patch must be a JSON object".to_string(),
        })?;

        let invalid = |message: String| EditError::InvalidPatch {
            node_id: node_id.to_string(),
            message,
        };

        // Round-trip through the tagged JSON form: serialize the current
        // payload, overlay the patch onto its "data" object, deserialize.
        let mut tagged = serde_json::to_value(&self.nodes[position].payload)
            .map_err(|e| invalid(e.to_string()))?;
        let data = tagged
            .get_mut("data")
            .and_then(|d| d.as_object_mut())
            .ok_or_else(|| invalid("payload has no data object".to_string()))?;
        for (key, value) in patch {
            data.insert(key.clone(), value.clone());
        }
        let payload: NodePayload =
            serde_json::from_value(tagged).map_err(|e| invalid(e.to_string()))?;

        let mut next = self.clone();
        next.nodes[position].payload = payload;
        Ok(next)
    }

    /// Overwrites node positions from a layout result.
    ///
    /// Nodes missing from the map keep their current position. Positions
    /// are display-only and never feed back into validation or simulation.
    pub fn apply_layout(&self, positions: &AHashMap<String, Position>) -> FlowGraph {
        let mut next = self.clone();
        for node in &mut next.nodes {
            if let Some(pos) = positions.get(&node.id) {
                node.position = *pos;
            }
        }
        next
    }
}
