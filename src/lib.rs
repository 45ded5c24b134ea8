//! # Flujo - Chatbot Flow Graph Model and Simulation Engine
//!
//! **Flujo** is the core behind a WhatsApp-chatbot flow builder: a typed
//! directed graph of conversation nodes (triggers, messages, conditions,
//! api calls, handoffs), a structural validator that aggregates every
//! problem in one pass, a sandboxed expression evaluator for conditional
//! branches, and a deterministic, termination-guaranteed simulation engine
//! that replays a flow against a sample message.
//!
//! The crate deliberately excludes everything around that core: no network
//! I/O, no persistence, no real delays. The production dispatch runtime
//! that actually talks to the WhatsApp Cloud API interprets the same node
//! vocabulary; the simulation engine here is its pure stand-in for the
//! builder's test panel.
//!
//! ## Core Workflow
//!
//! 1. **Build or import a graph**: editor actions produce new
//!    [`FlowGraph`](flow::FlowGraph) snapshots; [`flow::import_graph`]
//!    loads the canonical `{nodes, edges}` JSON.
//! 2. **Validate**: [`validate::validate_graph`] returns every structural
//!    and per-node schema problem at once.
//! 3. **Simulate**: [`sim::simulate`] matches the input against the
//!    trigger keywords and replays the flow into an ordered event trace.
//! 4. **Record history**: [`history::FlowHistory`] keeps bounded undo/redo
//!    snapshots of the graph between edits.
//!
//! ## Quick Start
//!
//! ```rust
//! use flujo::prelude::*;
//!
//! let graph = FlowGraph::new(
//!     vec![
//!         FlowNode::new(
//!             "start",
//!             NodePayload::Trigger(TriggerData {
//!                 keyword: "hola".to_string(),
//!                 ..Default::default()
//!             }),
//!         ),
//!         FlowNode::new(
//!             "welcome",
//!             NodePayload::Message(MessageData {
//!                 text: "Bienvenido".to_string(),
//!                 ..Default::default()
//!             }),
//!         ),
//!         FlowNode::new("fin", NodePayload::End(EndData::default())),
//!     ],
//!     vec![
//!         FlowEdge::new("e1", "start", "welcome"),
//!         FlowEdge::new("e2", "welcome", "fin"),
//!     ],
//! );
//!
//! // The report is empty, so the flow is ready to publish.
//! assert!(validate_graph(&graph).is_empty());
//!
//! // Trigger matching is case-insensitive and exact.
//! let trace = simulate(&graph, "HOLA");
//! assert_eq!(trace[0], TraceEvent::bot("Bienvenido"));
//! assert_eq!(trace[1], TraceEvent::system(END_OF_FLOW));
//! ```

pub mod error;
pub mod expr;
pub mod flow;
pub mod history;
pub mod layout;
pub mod prelude;
pub mod sim;
pub mod validate;
