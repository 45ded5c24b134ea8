use serde::{Deserialize, Serialize};
use std::fmt;

/// Who a simulated event belongs to: the bot's visible output or the
/// simulator's own commentary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Bot,
    System,
}

/// One entry of a simulation trace, in the order the flow produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub kind: TraceKind,
    pub text: String,
}

impl TraceEvent {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            kind: TraceKind::Bot,
            text: text.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            kind: TraceKind::System,
            text: text.into(),
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            TraceKind::Bot => "bot",
            TraceKind::System => "system",
        };
        write!(f, "[{}] {}", prefix, self.text)
    }
}
