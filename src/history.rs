//! Undo/redo over full graph snapshots.

use crate::flow::FlowGraph;
use std::collections::VecDeque;

/// Default bound on retained undo snapshots. Long editing sessions would
/// otherwise grow the stack without limit, one full graph per edit.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Snapshot-based editing history.
///
/// Every committed edit stores a full `{nodes, edges}` snapshot. The
/// history is seeded with the initial graph, so there is always a current
/// state to read. When the bound is exceeded the oldest snapshot is
/// dropped, which shortens how far back undo can reach but never loses
/// the present.
#[derive(Debug, Clone)]
pub struct FlowHistory {
    past: VecDeque<FlowGraph>,
    present: FlowGraph,
    future: Vec<FlowGraph>,
    limit: usize,
}

impl FlowHistory {
    /// Seeds the history with the initial graph.
    pub fn new(initial: FlowGraph) -> Self {
        Self::with_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// Seeds the history with an explicit snapshot bound (minimum 1).
    pub fn with_limit(initial: FlowGraph, limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present: initial,
            future: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// The graph as it currently stands.
    pub fn current(&self) -> &FlowGraph {
        &self.present
    }

    /// Records an edit: the previous state becomes undoable and any redo
    /// states are discarded.
    pub fn commit(&mut self, graph: FlowGraph) {
        let previous = std::mem::replace(&mut self.present, graph);
        self.past.push_back(previous);
        self.future.clear();
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
    }

    /// Steps back one snapshot, if any remain.
    pub fn undo(&mut self) -> Option<&FlowGraph> {
        let previous = self.past.pop_back()?;
        let redoable = std::mem::replace(&mut self.present, previous);
        self.future.push(redoable);
        Some(&self.present)
    }

    /// Re-applies the most recently undone snapshot, if any.
    pub fn redo(&mut self) -> Option<&FlowGraph> {
        let next = self.future.pop()?;
        let undoable = std::mem::replace(&mut self.present, next);
        self.past.push_back(undoable);
        Some(&self.present)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}
