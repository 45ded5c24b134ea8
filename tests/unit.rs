//! Unit tests for expression parsing, evaluation and display types.
mod common;
use flujo::prelude::*;

fn ctx_with_input(input: &str) -> ExecContext {
    ExecContext::new(input)
}

#[test]
fn literal_comparisons() {
    let ctx = ctx_with_input("");
    assert!(evaluate("2 >= 1", &ctx).unwrap());
    assert!(evaluate("1 < 2", &ctx).unwrap());
    assert!(!evaluate("'a' == 'b'", &ctx).unwrap());
    assert!(evaluate("'a' != 'b'", &ctx).unwrap());
}

#[test]
fn triple_equals_is_a_synonym() {
    let mut ctx = ctx_with_input("");
    ctx.vars.insert("plan".to_string(), "premium".to_string());
    assert!(evaluate("vars.plan === 'premium'", &ctx).unwrap());
    assert!(!evaluate("vars.plan !== 'premium'", &ctx).unwrap());
}

#[test]
fn unset_var_is_null_and_never_equal() {
    let ctx = ctx_with_input("");
    assert!(!evaluate("vars.plan === 'premium'", &ctx).unwrap());
    assert!(evaluate("vars.plan == null", &ctx).unwrap());
}

#[test]
fn numeric_strings_compare_numerically() {
    let ctx = ctx_with_input("10");
    assert!(evaluate("input > 9", &ctx).unwrap());
    // Lexicographically "10" < "9" would hold; numeric comparison wins.
    assert!(!evaluate("input < 9", &ctx).unwrap());
}

#[test]
fn string_predicates() {
    let ctx = ctx_with_input("hola mundo");
    assert!(evaluate("input.contains('mundo')", &ctx).unwrap());
    assert!(evaluate("input.startsWith('hola')", &ctx).unwrap());
    assert!(evaluate("input.endsWith('mundo')", &ctx).unwrap());
    assert!(!evaluate("input.contains('adios')", &ctx).unwrap());
}

#[test]
fn boolean_precedence_and_word_operators() {
    let ctx = ctx_with_input("");
    // && binds tighter than ||.
    assert!(evaluate("false && false || true", &ctx).unwrap());
    assert!(evaluate("true and not false", &ctx).unwrap());
    assert!(!evaluate("not (true or false)", &ctx).unwrap());
}

#[test]
fn truthiness_of_bare_bindings() {
    assert!(evaluate("input", &ctx_with_input("algo")).unwrap());
    assert!(!evaluate("input", &ctx_with_input("")).unwrap());
}

#[test]
fn api_result_path_access() {
    let mut ctx = ctx_with_input("");
    ctx.api_result = Some(serde_json::json!({ "status": "ok", "count": 3 }));
    assert!(evaluate("apiResult.status == 'ok'", &ctx).unwrap());
    assert!(evaluate("apiResult.count >= 3", &ctx).unwrap());
    // Missing paths resolve to null, and null is falsy.
    assert!(!evaluate("apiResult.missing.deeper", &ctx).unwrap());
}

#[test]
fn unknown_names_are_rejected() {
    let ctx = ctx_with_input("");
    assert_eq!(
        evaluate("window == 1", &ctx),
        Err(ExpressionError::UnknownIdentifier("window".to_string()))
    );
    assert_eq!(
        evaluate("input.reverse()", &ctx),
        Err(ExpressionError::UnknownFunction("reverse".to_string()))
    );
    assert_eq!(evaluate("vars == 1", &ctx), Err(ExpressionError::BareVars));
}

#[test]
fn malformed_expressions_are_rejected() {
    let ctx = ctx_with_input("");
    assert!(matches!(
        evaluate("true true", &ctx),
        Err(ExpressionError::TrailingInput(_))
    ));
    assert!(matches!(
        evaluate("'unterminated", &ctx),
        Err(ExpressionError::UnterminatedString { .. })
    ));
    assert!(matches!(
        evaluate("input.contains('a', 'b')", &ctx),
        Err(ExpressionError::BadArity { .. })
    ));
    assert!(matches!(
        evaluate("(true", &ctx),
        Err(ExpressionError::UnexpectedEnd)
    ));
}

#[test]
fn value_display() {
    assert_eq!(format!("{}", Value::Num(42.0)), "42");
    assert_eq!(format!("{}", Value::Num(1.5)), "1.5");
    assert_eq!(format!("{}", Value::Bool(true)), "true");
    assert_eq!(format!("{}", Value::Null), "null");
    assert_eq!(format!("{}", Value::Str("hola".to_string())), "hola");
}

#[test]
fn trace_event_serde_shape() {
    let event = TraceEvent::bot("Bienvenido");
    let json = serde_json::to_value(&event).expect("serializes");
    assert_eq!(json, serde_json::json!({ "kind": "bot", "text": "Bienvenido" }));

    let event = TraceEvent::system("algo");
    let json = serde_json::to_value(&event).expect("serializes");
    assert_eq!(json["kind"], "system");
}

#[test]
fn error_display() {
    let err = EditError::NodeNotFound("n42".to_string());
    assert!(err.to_string().contains("n42"));

    let err = ImportError::MissingNodes;
    assert!(err.to_string().contains("nodes"));

    let err = ExpressionError::UnknownIdentifier("document".to_string());
    assert!(err.to_string().contains("document"));
    assert!(err.to_string().contains("apiResult"));
}
