//! Common test utilities for building flow graphs.
use flujo::prelude::*;

#[allow(dead_code)]
pub fn trigger(id: &str, keyword: &str) -> FlowNode {
    FlowNode::new(
        id,
        NodePayload::Trigger(TriggerData {
            keyword: keyword.to_string(),
            ..Default::default()
        }),
    )
}

#[allow(dead_code)]
pub fn message(id: &str, text: &str) -> FlowNode {
    FlowNode::new(
        id,
        NodePayload::Message(MessageData {
            text: text.to_string(),
            ..Default::default()
        }),
    )
}

#[allow(dead_code)]
pub fn options(id: &str, entries: &[&str]) -> FlowNode {
    FlowNode::new(
        id,
        NodePayload::Options(OptionsData {
            options: entries.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }),
    )
}

#[allow(dead_code)]
pub fn delay(id: &str, seconds: u64) -> FlowNode {
    FlowNode::new(
        id,
        NodePayload::Delay(DelayData {
            seconds,
            ..Default::default()
        }),
    )
}

#[allow(dead_code)]
pub fn condition(id: &str, expression: &str) -> FlowNode {
    FlowNode::new(
        id,
        NodePayload::Condition(ConditionData {
            expression: expression.to_string(),
            ..Default::default()
        }),
    )
}

#[allow(dead_code)]
pub fn api(id: &str, url: &str, method: HttpMethod) -> FlowNode {
    FlowNode::new(
        id,
        NodePayload::Api(ApiData {
            name: String::new(),
            url: url.to_string(),
            method,
            headers: Default::default(),
            body: String::new(),
            assign_to: String::new(),
        }),
    )
}

#[allow(dead_code)]
pub fn assign(id: &str, key: &str, value: &str) -> FlowNode {
    FlowNode::new(
        id,
        NodePayload::Assign(AssignData {
            key: key.to_string(),
            value: value.to_string(),
            ..Default::default()
        }),
    )
}

#[allow(dead_code)]
pub fn media(id: &str, media_type: MediaType, url: &str, caption: Option<&str>) -> FlowNode {
    FlowNode::new(
        id,
        NodePayload::Media(MediaData {
            name: String::new(),
            media_type,
            url: url.to_string(),
            caption: caption.map(|c| c.to_string()),
        }),
    )
}

#[allow(dead_code)]
pub fn handoff(id: &str, queue: &str) -> FlowNode {
    FlowNode::new(
        id,
        NodePayload::Handoff(HandoffData {
            queue: queue.to_string(),
            ..Default::default()
        }),
    )
}

#[allow(dead_code)]
pub fn goto(id: &str, target: &str) -> FlowNode {
    FlowNode::new(
        id,
        NodePayload::Goto(GotoData {
            target_node_id: target.to_string(),
            ..Default::default()
        }),
    )
}

#[allow(dead_code)]
pub fn end(id: &str) -> FlowNode {
    FlowNode::new(id, NodePayload::End(EndData::default()))
}

#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> FlowEdge {
    FlowEdge::new(id, source, target)
}

#[allow(dead_code)]
pub fn edge_with_handle(id: &str, source: &str, target: &str, handle: &str) -> FlowEdge {
    FlowEdge::new(id, source, target).with_handle(handle)
}

/// Trigger "hola" -> Message "Bienvenido" -> End.
#[allow(dead_code)]
pub fn welcome_flow() -> FlowGraph {
    FlowGraph::new(
        vec![
            trigger("start", "hola"),
            message("welcome", "Bienvenido"),
            end("fin"),
        ],
        vec![edge("e1", "start", "welcome"), edge("e2", "welcome", "fin")],
    )
}

/// Trigger "plan" -> Condition on vars.plan with true/false branches.
#[allow(dead_code)]
pub fn condition_flow() -> FlowGraph {
    FlowGraph::new(
        vec![
            trigger("start", "plan"),
            condition("check", "vars.plan === 'premium'"),
            message("yes", "Plan premium"),
            message("no", "Plan básico"),
            end("fin"),
        ],
        vec![
            edge("e1", "start", "check"),
            edge_with_handle("e2", "check", "yes", "true"),
            edge_with_handle("e3", "check", "no", "false"),
            edge("e4", "yes", "fin"),
            edge("e5", "no", "fin"),
        ],
    )
}

/// Trigger "loop" -> Message "ping" -> Goto back to the message. Only the
/// step ceiling can stop this flow.
#[allow(dead_code)]
pub fn goto_cycle_flow() -> FlowGraph {
    FlowGraph::new(
        vec![
            trigger("start", "loop"),
            message("ping", "ping"),
            goto("back", "ping"),
        ],
        vec![edge("e1", "start", "ping"), edge("e2", "ping", "back")],
    )
}
