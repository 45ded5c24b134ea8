//! Display-position computation for the flow canvas.
//!
//! Layout is strictly advisory: its output feeds node `position` values
//! and nothing else. The validator and the simulation engine never read
//! positions, so swapping the provider can never change flow semantics.

use crate::flow::{FlowGraph, NodePayload, Position};
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

/// Computes display positions for every node of a graph.
pub trait LayoutProvider {
    fn layout(&self, graph: &FlowGraph) -> AHashMap<String, Position>;
}

/// Simple layered layout: breadth-first layers from the trigger nodes,
/// one column per layer, one row per node within a layer. Deterministic
/// for a given graph.
#[derive(Debug, Clone, Copy)]
pub struct LayeredLayout {
    pub column_gap: f64,
    pub row_gap: f64,
}

impl Default for LayeredLayout {
    fn default() -> Self {
        Self {
            column_gap: 260.0,
            row_gap: 120.0,
        }
    }
}

impl LayoutProvider for LayeredLayout {
    fn layout(&self, graph: &FlowGraph) -> AHashMap<String, Position> {
        let mut layer_of: AHashMap<&str, usize> = AHashMap::new();
        let mut visited: AHashSet<&str> = AHashSet::new();
        let mut queue: VecDeque<(&str, usize)> = VecDeque::new();

        for node in &graph.nodes {
            if matches!(node.payload, NodePayload::Trigger(_)) {
                queue.push_back((node.id.as_str(), 0));
                visited.insert(node.id.as_str());
            }
        }

        let mut max_layer = 0;
        while let Some((id, layer)) = queue.pop_front() {
            layer_of.insert(id, layer);
            max_layer = max_layer.max(layer);
            for edge in graph.edges.iter().filter(|e| e.source == id) {
                if visited.insert(edge.target.as_str()) {
                    queue.push_back((edge.target.as_str(), layer + 1));
                }
            }
        }

        // Nodes not reached from any trigger go into one trailing column
        // so they stay visible on the canvas.
        for node in &graph.nodes {
            layer_of
                .entry(node.id.as_str())
                .or_insert(max_layer + 1);
        }

        let mut row_in_layer: AHashMap<usize, usize> = AHashMap::new();
        let mut positions = AHashMap::new();
        for node in &graph.nodes {
            let layer = layer_of[node.id.as_str()];
            let row = row_in_layer.entry(layer).or_insert(0);
            positions.insert(
                node.id.clone(),
                Position::new(layer as f64 * self.column_gap, *row as f64 * self.row_gap),
            );
            *row += 1;
        }
        positions
    }
}
