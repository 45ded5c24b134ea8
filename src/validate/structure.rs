use super::payload::{validate_payload, SchemaProblem};
use crate::flow::{FlowGraph, NodePayload};
use ahash::AHashSet;
use itertools::Itertools;
use thiserror::Error;

/// A whole-graph problem found by [`validate_graph`].
///
/// The report is advisory: the builder decides whether a non-empty report
/// blocks publishing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationProblem {
    #[error("duplicate trigger keyword '{keyword}' on node {node_id}")]
    DuplicateTrigger { keyword: String, node_id: String },

    #[error("node {node_id} ({node_type}) has no outgoing edge")]
    MissingOutgoing {
        node_id: String,
        node_type: &'static str,
    },

    #[error("node {node_id} ({node_type}) has no incoming edge")]
    MissingIncoming {
        node_id: String,
        node_type: &'static str,
    },

    #[error("node {node_id} ({node_type}): {problem}")]
    Payload {
        node_id: String,
        node_type: &'static str,
        problem: SchemaProblem,
    },

    #[error("edge {edge_id} {role} references missing node '{node_id}'")]
    DanglingEdge {
        edge_id: String,
        role: &'static str,
        node_id: String,
    },

    #[error("edge {edge_id}: handle '{handle}' is not declared by {node_type} node {node_id}")]
    UnknownHandle {
        edge_id: String,
        handle: String,
        node_id: String,
        node_type: &'static str,
    },

    #[error("goto node {node_id} targets missing node '{target}'")]
    BrokenGoto { node_id: String, target: String },
}

/// Runs every structural rule over the graph and aggregates the findings.
///
/// Never fail-fast: one invocation reports every problem in the flow at
/// once. An empty result means the graph is ready to publish.
pub fn validate_graph(graph: &FlowGraph) -> Vec<ValidationProblem> {
    let mut problems = Vec::new();

    check_duplicate_triggers(graph, &mut problems);
    check_connectivity(graph, &mut problems);
    check_payloads(graph, &mut problems);
    check_edge_references(graph, &mut problems);
    check_goto_targets(graph, &mut problems);

    problems
}

/// Rule 1: trigger keywords must be unique case-insensitively.
fn check_duplicate_triggers(graph: &FlowGraph, problems: &mut Vec<ValidationProblem>) {
    let duplicates = graph
        .nodes
        .iter()
        .filter_map(|n| match &n.payload {
            NodePayload::Trigger(t) => Some((t.keyword.to_lowercase(), n)),
            _ => None,
        })
        .duplicates_by(|(keyword, _)| keyword.clone());

    for (keyword, node) in duplicates {
        problems.push(ValidationProblem::DuplicateTrigger {
            keyword,
            node_id: node.id.clone(),
        });
    }
}

/// Rules 2 and 3: local connectivity.
///
/// Options and Condition are exempt from the outgoing rule because their
/// real branching lives on per-handle edges that may be wired
/// incrementally; End is terminal. The incoming rule is a local existence
/// check, not reachability analysis from a trigger.
fn check_connectivity(graph: &FlowGraph, problems: &mut Vec<ValidationProblem>) {
    let sources: AHashSet<&str> = graph.edges.iter().map(|e| e.source.as_str()).collect();
    let targets: AHashSet<&str> = graph.edges.iter().map(|e| e.target.as_str()).collect();

    for node in &graph.nodes {
        let needs_outgoing = !matches!(
            node.payload,
            NodePayload::End(_) | NodePayload::Options(_) | NodePayload::Condition(_)
        );
        if needs_outgoing && !sources.contains(node.id.as_str()) {
            problems.push(ValidationProblem::MissingOutgoing {
                node_id: node.id.clone(),
                node_type: node.payload.type_name(),
            });
        }

        let needs_incoming = !matches!(node.payload, NodePayload::Trigger(_));
        if needs_incoming && !targets.contains(node.id.as_str()) {
            problems.push(ValidationProblem::MissingIncoming {
                node_id: node.id.clone(),
                node_type: node.payload.type_name(),
            });
        }
    }
}

/// Rule 4: every node's payload must satisfy its type schema.
fn check_payloads(graph: &FlowGraph, problems: &mut Vec<ValidationProblem>) {
    for node in &graph.nodes {
        for problem in validate_payload(&node.payload) {
            problems.push(ValidationProblem::Payload {
                node_id: node.id.clone(),
                node_type: node.payload.type_name(),
                problem,
            });
        }
    }
}

/// Edge invariants: endpoints exist, handles are declared by the source.
fn check_edge_references(graph: &FlowGraph, problems: &mut Vec<ValidationProblem>) {
    let index = graph.node_index();

    for edge in &graph.edges {
        for (role, node_id) in [("source", &edge.source), ("target", &edge.target)] {
            if !index.contains_key(node_id.as_str()) {
                problems.push(ValidationProblem::DanglingEdge {
                    edge_id: edge.id.clone(),
                    role,
                    node_id: node_id.clone(),
                });
            }
        }

        if let (Some(handle), Some(source)) =
            (&edge.source_handle, index.get(edge.source.as_str()))
        {
            if !source.payload.handles().contains(handle) {
                problems.push(ValidationProblem::UnknownHandle {
                    edge_id: edge.id.clone(),
                    handle: handle.clone(),
                    node_id: source.id.clone(),
                    node_type: source.payload.type_name(),
                });
            }
        }
    }
}

/// Goto nodes jump by node id, bypassing edges, so their targets are
/// checked here rather than by the edge rules.
fn check_goto_targets(graph: &FlowGraph, problems: &mut Vec<ValidationProblem>) {
    let index = graph.node_index();

    for node in &graph.nodes {
        if let NodePayload::Goto(data) = &node.payload {
            if !data.target_node_id.is_empty()
                && !index.contains_key(data.target_node_id.as_str())
            {
                problems.push(ValidationProblem::BrokenGoto {
                    node_id: node.id.clone(),
                    target: data.target_node_id.clone(),
                });
            }
        }
    }
}
