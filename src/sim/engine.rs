use super::trace::TraceEvent;
use crate::expr::{self, ExecContext};
use crate::flow::{FlowGraph, FlowNode, NodePayload};

/// Hard ceiling on simulation steps, bounding any graph shape including
/// goto cycles. Expiry truncates the trace silently; a trace that stops
/// mid-flow without an End event may therefore be incomplete.
pub const MAX_STEPS: usize = 200;

/// The system line emitted when no trigger keyword matches the input.
pub const NO_TRIGGER_MATCH: &str = "No trigger matches that input";

/// The terminal system line emitted by an end node.
pub const END_OF_FLOW: &str = "🏁 End";

/// Replays a flow against one inbound message and returns the event trace.
///
/// This is a pure function of `(graph, input)`: api nodes are inert, delay
/// nodes only log, and no clock, randomness or I/O is consulted, so
/// identical inputs always produce identical traces. The real dispatch
/// runtime interprets the same vocabulary against the WhatsApp Cloud API;
/// this engine is its deterministic stand-in for the builder's test panel.
pub fn simulate(graph: &FlowGraph, input: &str) -> Vec<TraceEvent> {
    let mut trace = Vec::new();

    // Entry: exact keyword match, case-insensitive. No fuzzy matching.
    let wanted = input.to_lowercase();
    let start = graph.nodes.iter().find(|n| {
        matches!(&n.payload, NodePayload::Trigger(t) if t.keyword.to_lowercase() == wanted)
    });
    let Some(start) = start else {
        trace.push(TraceEvent::system(NO_TRIGGER_MATCH));
        return trace;
    };

    let index = graph.node_index();
    let mut ctx = ExecContext::new(input);
    let mut current: Option<&FlowNode> = Some(start);
    let mut step = 0;

    while let Some(node) = current {
        if step >= MAX_STEPS {
            break;
        }
        step += 1;

        match &node.payload {
            NodePayload::Message(data) => {
                // Raw text: {{var}} interpolation is the runtime's concern.
                trace.push(TraceEvent::bot(data.text.clone()));
            }
            NodePayload::Media(data) => {
                let text = match &data.caption {
                    Some(caption) => {
                        format!("📎 [{}] {}: {}", data.media_type, data.url, caption)
                    }
                    None => format!("📎 [{}] {}", data.media_type, data.url),
                };
                trace.push(TraceEvent::bot(text));
            }
            NodePayload::Assign(data) => {
                ctx.vars.insert(data.key.clone(), data.value.clone());
            }
            NodePayload::Delay(data) => {
                // The simulation describes the wait instead of suspending.
                trace.push(TraceEvent::system(format!("⏱ Wait {}s", data.seconds)));
            }
            NodePayload::Condition(data) => {
                match expr::evaluate(&data.expression, &ctx) {
                    Ok(outcome) => {
                        let handle = if outcome { "true" } else { "false" };
                        current = graph
                            .edges
                            .iter()
                            .find(|e| {
                                e.source == node.id && e.source_handle.as_deref() == Some(handle)
                            })
                            .and_then(|e| index.get(e.target.as_str()).copied());
                    }
                    Err(err) => {
                        // Recoverable: the error becomes a trace line and the
                        // step ceiling bounds the stalled node.
                        trace.push(TraceEvent::system(format!("⚠ Expression error: {}", err)));
                    }
                }
                continue;
            }
            NodePayload::Goto(data) => {
                // Jumps by node id directly, bypassing edges.
                current = index.get(data.target_node_id.as_str()).copied();
                continue;
            }
            NodePayload::End(_) => {
                trace.push(TraceEvent::system(END_OF_FLOW));
                break;
            }
            // No per-step event. Api nodes are inert during simulation and
            // handoff is a runtime concern; both just follow their edge.
            NodePayload::Trigger(_) | NodePayload::Options(_) | NodePayload::Api(_)
            | NodePayload::Handoff(_) => {}
        }

        // Default transition: first wired edge in insertion order. Options
        // lands here too since the simulation never prompts for a choice.
        current = graph
            .edges
            .iter()
            .find(|e| e.source == node.id)
            .and_then(|e| index.get(e.target.as_str()).copied());
    }

    trace
}
