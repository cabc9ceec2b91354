use fql_builder::cli::{
    CheckOptions, CliError, check_document, execute_check, get_doc_category, get_docs_overview,
};
use fql_builder::{Expr, args, func, q};
use serde_json::json;

fn check(input: &str) -> Result<fql_builder::cli::CheckReport, CliError> {
    execute_check(&CheckOptions {
        input: Some(input.to_string()),
        pretty: false,
    })
}

// ============================================================================
// Section: check
// ============================================================================

#[test]
fn test_let_expression_passes() {
    let expr = q::let_(
        [("x", q::add([1, 2]))],
        func(|x: Expr| q::multiply(args![x, 2])),
    )
    .unwrap();

    let report = check_document(&expr.to_wire());
    assert!(report.is_ok(), "{:?}", report.issues);
    assert_eq!(report.operations, 4);
}

#[test]
fn test_lambda_expression_passes() {
    let expr = q::map(vec![1], func(|x: Expr| q::abs(x))).unwrap();

    let report = check_document(&expr.to_wire());
    assert!(report.is_ok(), "{:?}", report.issues);
    assert_eq!(report.operations, 4);
}

#[test]
fn test_object_literals_hide_operator_keys() {
    let params = json!({"data": {"add": 1, "name": "x"}});
    let expr = q::create(q::collection("users", None), Some(params.into())).unwrap();

    let report = check_document(&expr.to_wire());
    assert!(report.is_ok(), "{:?}", report.issues);
    assert_eq!(report.operations, 2);
}

#[test]
fn test_unwrapped_data_is_reported() {
    let report =
        check(r#"{"create": {"collection": "users"}, "params": {"data": {"name": "x"}}}"#).unwrap();

    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].path, "$.params");
    assert!(report.issues[0].message.contains("[data]"));
}

#[test]
fn test_empty_operand_list_is_reported() {
    let report = check(r#"{"do": [{"add": []}, 1]}"#).unwrap();

    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].path, "$.do[0].add");
}

#[test]
fn test_invalid_json() {
    assert!(matches!(check("{not json"), Err(CliError::Json(_))));
}

#[test]
fn test_report_serializes() {
    let report = check(r#"{"union": []}"#).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(
        value,
        json!({
            "operations": 1,
            "issues": [{"path": "$.union", "message": "union needs at least one operand"}]
        })
    );
}

// ============================================================================
// Section: docs
// ============================================================================

#[test]
fn test_overview_mentions_conventions() {
    let overview = get_docs_overview();
    assert!(overview.contains("DOCUMENTATION CATEGORIES"));
    assert!(overview.contains("fql doc <category>"));
}

#[test]
fn test_category_docs_list_signatures() {
    let math = get_doc_category("math").unwrap();
    assert!(math.contains("add(values...)"));

    let basic = get_doc_category("basic").unwrap();
    assert!(basic.contains("let_(bindings, body)"));
}

#[test]
fn test_unknown_category_message() {
    let err = get_doc_category("nope").unwrap_err();
    assert!(err.to_string().starts_with("Unknown category: 'nope'"));
}
