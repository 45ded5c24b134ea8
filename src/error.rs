use thiserror::Error;

/// Errors raised while parsing a condition expression.
///
/// The expression grammar is deliberately closed: it binds only `input`,
/// `vars.<name>` and `apiResult`, so operator-authored text can never reach
/// ambient scope or perform I/O. Anything outside the grammar is rejected
/// with one of these variants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("unterminated string literal starting at position {pos}")]
    UnterminatedString { pos: usize },

    #[error("invalid number literal at position {pos}")]
    InvalidNumber { pos: usize },

    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),

    #[error("expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("trailing input after expression: '{0}'")]
    TrailingInput(String),

    #[error("unknown identifier '{0}': only input, vars and apiResult are bound")]
    UnknownIdentifier(String),

    #[error("unknown function '{0}': supported are contains, startsWith, endsWith")]
    UnknownFunction(String),

    #[error("function '{function}' takes exactly {expected} argument(s)")]
    BadArity {
        function: String,
        expected: usize,
    },

    #[error("'vars' must be followed by a field access, e.g. vars.plan")]
    BareVars,

    #[error("field access is only supported on apiResult")]
    BadFieldAccess,
}

/// Errors raised when importing a serialized graph.
///
/// An import failure never touches the caller's previously loaded graph;
/// the whole document is rejected as a unit.
#[derive(Error, Debug, Clone)]
pub enum ImportError {
    #[error("flow document is not a JSON object")]
    NotAnObject,

    #[error("flow document has no 'nodes' array")]
    MissingNodes,

    #[error("flow document has no 'edges' array")]
    MissingEdges,

    #[error("flow document is malformed: {0}")]
    Malformed(String),
}

/// Errors raised by graph editing operations.
///
/// Editing never mutates in place: each operation either returns a new
/// graph snapshot or one of these errors, leaving the input untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("node '{0}' does not exist")]
    NodeNotFound(String),

    #[error("edge '{0}' does not exist")]
    EdgeNotFound(String),

    #[error("a node with id '{0}' already exists")]
    DuplicateNode(String),

    #[error("an edge with id '{0}' already exists")]
    DuplicateEdge(String),

    #[error("edge '{edge_id}' references missing node '{node_id}'")]
    DanglingEndpoint {
        edge_id: String,
        node_id: String,
    },

    #[error("patch for node '{node_id}' is invalid: {message}")]
    InvalidPatch {
        node_id: String,
        message: String,
    },
}
