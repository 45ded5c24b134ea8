use crate::error::ExpressionError;
use crate::expr::Expr;
use crate::flow::NodePayload;
use thiserror::Error;
use url::Url;

/// A single field-level violation of a node type's schema.
///
/// The `Display` form is the human-readable string shown in the builder's
/// problem list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaProblem {
    #[error("{field} must be {min}-{max} characters, got {len}")]
    TextLength {
        field: String,
        min: usize,
        max: usize,
        len: usize,
    },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: u64,
        max: u64,
        value: u64,
    },

    #[error("{field} must have {min}-{max} entries, got {len}")]
    EntryCount {
        field: String,
        min: usize,
        max: usize,
        len: usize,
    },

    #[error("{field} is not a valid URL: {reason}")]
    InvalidUrl { field: String, reason: String },

    #[error("{field} must not be empty")]
    Empty { field: String },

    #[error("expression does not parse: {0}")]
    BadExpression(#[from] ExpressionError),
}

/// Checks one node's payload against its type's schema.
///
/// Every violated field is reported, not just the first, so the builder
/// can surface all problems of a node at once. Unknown node types do not
/// exist here: the closed [`NodePayload`] enum rejects them at import.
pub fn validate_payload(payload: &NodePayload) -> Vec<SchemaProblem> {
    let mut problems = Vec::new();

    match payload {
        NodePayload::Trigger(data) => {
            check_text(&mut problems, "keyword", &data.keyword, 1, 64);
        }
        NodePayload::Message(data) => {
            check_text(&mut problems, "text", &data.text, 1, 4096);
        }
        NodePayload::Options(data) => {
            let count = data.options.len();
            if !(2..=10).contains(&count) {
                problems.push(SchemaProblem::EntryCount {
                    field: "options".to_string(),
                    min: 2,
                    max: 10,
                    len: count,
                });
            }
            for (i, option) in data.options.iter().enumerate() {
                check_text(&mut problems, &format!("options[{}]", i), option, 1, 30);
            }
        }
        NodePayload::Delay(data) => {
            if !(1..=3600).contains(&data.seconds) {
                problems.push(SchemaProblem::OutOfRange {
                    field: "seconds".to_string(),
                    min: 1,
                    max: 3600,
                    value: data.seconds,
                });
            }
        }
        NodePayload::Condition(data) => {
            check_text(&mut problems, "expression", &data.expression, 1, 500);
            // Surface syntax errors at edit time, not only in simulation.
            if !data.expression.is_empty() {
                if let Err(err) = Expr::parse(&data.expression) {
                    problems.push(SchemaProblem::BadExpression(err));
                }
            }
        }
        NodePayload::Api(data) => {
            check_url(&mut problems, "url", &data.url);
            // The method is a closed enum and needs no range check.
        }
        NodePayload::Assign(data) => {
            check_text(&mut problems, "key", &data.key, 1, 50);
            check_text(&mut problems, "value", &data.value, 0, 500);
        }
        NodePayload::Media(data) => {
            check_url(&mut problems, "url", &data.url);
        }
        NodePayload::Handoff(data) => {
            if data.queue.is_empty() {
                problems.push(SchemaProblem::Empty {
                    field: "queue".to_string(),
                });
            }
        }
        NodePayload::Goto(data) => {
            // Whether the target actually exists is a whole-graph question
            // answered by the structural validator.
            if data.target_node_id.is_empty() {
                problems.push(SchemaProblem::Empty {
                    field: "targetNodeId".to_string(),
                });
            }
        }
        NodePayload::End(_) => {
            // The reason is free text and defaults to "end".
        }
    }

    problems
}

fn check_text(problems: &mut Vec<SchemaProblem>, field: &str, value: &str, min: usize, max: usize) {
    let len = value.chars().count();
    if len < min || len > max {
        problems.push(SchemaProblem::TextLength {
            field: field.to_string(),
            min,
            max,
            len,
        });
    }
}

fn check_url(problems: &mut Vec<SchemaProblem>, field: &str, value: &str) {
    if let Err(err) = Url::parse(value) {
        problems.push(SchemaProblem::InvalidUrl {
            field: field.to_string(),
            reason: err.to_string(),
        });
    }
}
