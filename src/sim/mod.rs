//! Deterministic flow simulation.
//!
//! The engine walks a flow from a matched trigger and replays node effects
//! into an ordered trace for the builder's test panel. It performs no
//! network calls and never suspends; everything a real runtime would do
//! externally is either inert (api) or descriptive (delay).

mod engine;
mod trace;

pub use engine::{simulate, END_OF_FLOW, MAX_STEPS, NO_TRIGGER_MATCH};
pub use trace::{TraceEvent, TraceKind};
