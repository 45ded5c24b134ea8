//! Sandboxed expression evaluation for Condition nodes.
//!
//! Condition expressions are operator-authored text, so they are parsed
//! with a restricted grammar instead of being handed to any dynamic code
//! facility. Exactly three read-only names are bound: `input` (the message
//! that triggered the flow), `vars.<name>` (values written by assign
//! nodes) and `apiResult` (the opaque payload of the last api call). The
//! grammar covers comparisons, boolean and/or/not and the string
//! predicates `contains`, `startsWith` and `endsWith`. There is no ambient
//! scope, no side effect and no I/O.

mod lexer;
mod parser;
pub mod value;

pub use value::Value;

use crate::error::ExpressionError;
use ahash::AHashMap;
use parser::Parser;

/// The read-only state a condition expression may inspect.
///
/// One fresh context is created per simulation run; the engine owns and
/// mutates it between steps, the evaluator only reads it.
#[derive(Debug, Clone, Default)]
pub struct ExecContext {
    pub input: String,
    pub vars: AHashMap<String, String>,
    pub api_result: Option<serde_json::Value>,
}

impl ExecContext {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            vars: AHashMap::new(),
            api_result: None,
        }
    }
}

/// The parsed form of a condition expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Logical
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),

    // Comparison
    Equal(Box<Expr>, Box<Expr>),
    NotEqual(Box<Expr>, Box<Expr>),
    GreaterThan(Box<Expr>, Box<Expr>),
    GreaterThanOrEqual(Box<Expr>, Box<Expr>),
    SmallerThan(Box<Expr>, Box<Expr>),
    SmallerThanOrEqual(Box<Expr>, Box<Expr>),

    // String predicates
    Contains(Box<Expr>, Box<Expr>),
    StartsWith(Box<Expr>, Box<Expr>),
    EndsWith(Box<Expr>, Box<Expr>),

    // Leaf nodes
    Literal(Value),
    Binding(Binding),
}

/// A leaf that reads from the execution context.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// The inbound message text.
    Input,
    /// One entry of the flow's variable map; unset vars read as Null.
    Var(String),
    /// The opaque result of the last api node, optionally dug into by path.
    ApiResult(Vec<String>),
}

impl Expr {
    /// Parses an expression string into its AST form.
    pub fn parse(source: &str) -> Result<Expr, ExpressionError> {
        Parser::parse(source)
    }

    /// Evaluates the expression against a context. Evaluation itself is
    /// total: mismatched operand types compare as false rather than
    /// aborting a simulation step.
    pub fn eval(&self, ctx: &ExecContext) -> Value {
        match self {
            Expr::And(l, r) => {
                // Short-circuits, so the right side never runs when the
                // left already decides the outcome.
                if !l.eval(ctx).is_truthy() {
                    Value::Bool(false)
                } else {
                    Value::Bool(r.eval(ctx).is_truthy())
                }
            }
            Expr::Or(l, r) => {
                if l.eval(ctx).is_truthy() {
                    Value::Bool(true)
                } else {
                    Value::Bool(r.eval(ctx).is_truthy())
                }
            }
            Expr::Not(inner) => Value::Bool(!inner.eval(ctx).is_truthy()),

            Expr::Equal(l, r) => Value::Bool(l.eval(ctx).loose_eq(&r.eval(ctx))),
            Expr::NotEqual(l, r) => Value::Bool(!l.eval(ctx).loose_eq(&r.eval(ctx))),
            Expr::GreaterThan(l, r) => compare(&l.eval(ctx), &r.eval(ctx), |o| o.is_gt()),
            Expr::GreaterThanOrEqual(l, r) => compare(&l.eval(ctx), &r.eval(ctx), |o| o.is_ge()),
            Expr::SmallerThan(l, r) => compare(&l.eval(ctx), &r.eval(ctx), |o| o.is_lt()),
            Expr::SmallerThanOrEqual(l, r) => compare(&l.eval(ctx), &r.eval(ctx), |o| o.is_le()),

            Expr::Contains(l, r) => {
                Value::Bool(l.eval(ctx).as_text().contains(&r.eval(ctx).as_text()))
            }
            Expr::StartsWith(l, r) => {
                Value::Bool(l.eval(ctx).as_text().starts_with(&r.eval(ctx).as_text()))
            }
            Expr::EndsWith(l, r) => {
                Value::Bool(l.eval(ctx).as_text().ends_with(&r.eval(ctx).as_text()))
            }

            Expr::Literal(value) => value.clone(),
            Expr::Binding(binding) => binding.resolve(ctx),
        }
    }
}

impl Binding {
    fn resolve(&self, ctx: &ExecContext) -> Value {
        match self {
            Binding::Input => Value::Str(ctx.input.clone()),
            Binding::Var(name) => ctx
                .vars
                .get(name)
                .map(|v| Value::Str(v.clone()))
                .unwrap_or(Value::Null),
            Binding::ApiResult(path) => {
                let Some(mut current) = ctx.api_result.as_ref() else {
                    return Value::Null;
                };
                for segment in path {
                    match current.get(segment) {
                        Some(next) => current = next,
                        None => return Value::Null,
                    }
                }
                value::from_json(current)
            }
        }
    }
}

/// Ordering comparison: numeric when both sides look numeric, otherwise
/// lexicographic over strings. Null and Bool never order.
fn compare(left: &Value, right: &Value, check: fn(std::cmp::Ordering) -> bool) -> Value {
    let ordering = match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => a.partial_cmp(&b),
        _ => match (left, right) {
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            _ => None,
        },
    };
    Value::Bool(ordering.map(check).unwrap_or(false))
}

/// Parses and evaluates a condition expression, reducing the result to the
/// boolean a Condition node branches on.
pub fn evaluate(expression: &str, ctx: &ExecContext) -> Result<bool, ExpressionError> {
    Ok(Expr::parse(expression)?.eval(ctx).is_truthy())
}
