//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions of the crate so
//! callers can bring the whole working surface in with one `use`.

// Graph model
pub use crate::flow::{
    export_graph, import_graph, ApiData, AssignData, ConditionData, DelayData, EndData, FlowEdge,
    FlowGraph, FlowNode, GotoData, HandoffData, HttpMethod, MediaData, MediaType, MessageData,
    NodePayload, OptionsData, Position, TriggerData,
};

// Validation
pub use crate::validate::{validate_graph, validate_payload, SchemaProblem, ValidationProblem};

// Expression evaluation
pub use crate::expr::{evaluate, Binding, ExecContext, Expr, Value};

// Simulation
pub use crate::sim::{simulate, TraceEvent, TraceKind, END_OF_FLOW, MAX_STEPS, NO_TRIGGER_MATCH};

// History
pub use crate::history::{FlowHistory, DEFAULT_HISTORY_LIMIT};

// Layout
pub use crate::layout::{LayeredLayout, LayoutProvider};

// Error types
pub use crate::error::{EditError, ExpressionError, ImportError};
