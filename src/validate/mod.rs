//! Validation of flows, both per-node and whole-graph.
//!
//! Everything here is batch and advisory: validators aggregate every
//! problem they can find instead of failing fast, and callers decide what
//! a non-empty report means for publishing.

pub mod payload;
pub mod structure;

pub use payload::{validate_payload, SchemaProblem};
pub use structure::{validate_graph, ValidationProblem};
