use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single node in a chatbot flow.
///
/// The `position` is a display hint for the canvas only; the validator and
/// the simulation engine never read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(flatten)]
    pub payload: NodePayload,
    #[serde(default)]
    pub position: Position,
}

impl FlowNode {
    pub fn new(id: impl Into<String>, payload: NodePayload) -> Self {
        Self {
            id: id.into(),
            payload,
            position: Position::default(),
        }
    }
}

/// Canvas coordinates of a node. Advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The closed vocabulary of node types.
///
/// Every node type the flow builder knows is a variant here, and both the
/// payload validator and the simulation engine match on it exhaustively.
/// Adding a twelfth type is a compile-time-checked change, not a runtime
/// string lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum NodePayload {
    Trigger(TriggerData),
    Message(MessageData),
    Options(OptionsData),
    Delay(DelayData),
    Condition(ConditionData),
    Api(ApiData),
    Assign(AssignData),
    Media(MediaData),
    Handoff(HandoffData),
    Goto(GotoData),
    End(EndData),
}

impl NodePayload {
    /// The wire name of this node type, as it appears in the `type` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodePayload::Trigger(_) => "trigger",
            NodePayload::Message(_) => "message",
            NodePayload::Options(_) => "options",
            NodePayload::Delay(_) => "delay",
            NodePayload::Condition(_) => "condition",
            NodePayload::Api(_) => "api",
            NodePayload::Assign(_) => "assign",
            NodePayload::Media(_) => "media",
            NodePayload::Handoff(_) => "handoff",
            NodePayload::Goto(_) => "goto",
            NodePayload::End(_) => "end",
        }
    }

    /// The named outgoing connection points this node type declares.
    ///
    /// Condition branches on "true"/"false"; Options exposes one handle per
    /// entry ("opt-0", "opt-1", ...). Every other type has a single unnamed
    /// output and declares no handles.
    pub fn handles(&self) -> Vec<String> {
        match self {
            NodePayload::Condition(_) => vec!["true".to_string(), "false".to_string()],
            NodePayload::Options(data) => (0..data.options.len())
                .map(|i| format!("opt-{}", i))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The operator-visible display name shared by all payloads.
    pub fn name(&self) -> &str {
        match self {
            NodePayload::Trigger(d) => &d.name,
            NodePayload::Message(d) => &d.name,
            NodePayload::Options(d) => &d.name,
            NodePayload::Delay(d) => &d.name,
            NodePayload::Condition(d) => &d.name,
            NodePayload::Api(d) => &d.name,
            NodePayload::Assign(d) => &d.name,
            NodePayload::Media(d) => &d.name,
            NodePayload::Handoff(d) => &d.name,
            NodePayload::Goto(d) => &d.name,
            NodePayload::End(d) => &d.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TriggerData {
    #[serde(default)]
    pub name: String,
    pub keyword: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageData {
    #[serde(default)]
    pub name: String,
    pub text: String,
    #[serde(default)]
    pub use_template: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionsData {
    #[serde(default)]
    pub name: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DelayData {
    #[serde(default)]
    pub name: String,
    pub seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConditionData {
    #[serde(default)]
    pub name: String,
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiData {
    #[serde(default)]
    pub name: String,
    pub url: String,
    pub method: HttpMethod,
    #[serde(default)]
    pub headers: IndexMap<String, String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub assign_to: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssignData {
    #[serde(default)]
    pub name: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaData {
    #[serde(default)]
    pub name: String,
    pub media_type: MediaType,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HandoffData {
    #[serde(default)]
    pub name: String,
    pub queue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GotoData {
    #[serde(default)]
    pub name: String,
    pub target_node_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndData {
    #[serde(default)]
    pub name: String,
    #[serde(default = "EndData::default_reason")]
    pub reason: String,
}

impl EndData {
    fn default_reason() -> String {
        "end".to_string()
    }
}

impl Default for EndData {
    fn default() -> Self {
        Self {
            name: String::new(),
            reason: Self::default_reason(),
        }
    }
}

/// HTTP methods an api node may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
        };
        write!(f, "{}", s)
    }
}

/// Media kinds the WhatsApp Cloud API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Document,
    Video,
    Audio,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaType::Image => "image",
            MediaType::Document => "document",
            MediaType::Video => "video",
            MediaType::Audio => "audio",
        };
        write!(f, "{}", s)
    }
}
