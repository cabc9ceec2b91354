use fql_builder::q::{self, PaginateOptions};
use fql_builder::{Arg, BuildError, Expr, args, catalog, func};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

/// Asserts the wire form of a built node and that its tag is catalogued.
fn assert_wire(expr: Result<Expr, BuildError>, expected: Value) {
    let expr = expr.unwrap();
    if let Some(tag) = expr.tag() {
        assert!(catalog::lookup(tag).is_some(), "{tag} missing from catalog");
    }
    assert_eq!(expr.to_wire(), expected);
}

fn users() -> Result<Expr, BuildError> {
    q::collection("users", None)
}

// ============================================================================
// Section: Basic
// ============================================================================

#[test]
fn test_references() {
    assert_wire(
        q::ref_(users(), "42"),
        json!({"ref": {"collection": "users"}, "id": "42"}),
    );
    assert_wire(
        Ok(q::ref_path("collections/users/42")),
        json!({"@ref": "collections/users/42"}),
    );
}

#[test]
fn test_time_literals() {
    assert_wire(
        Ok(q::timestamp_literal("2024-05-01T10:00:00Z")),
        json!({"@ts": "2024-05-01T10:00:00Z"}),
    );
    assert_wire(Ok(q::date_literal("2024-05-01")), json!({"@date": "2024-05-01"}));
}

#[test]
fn test_control_flow() {
    assert_wire(
        q::if_(q::exists(q::var("r"), None), q::get(q::var("r"), None), ()),
        json!({
            "if": {"exists": {"var": "r"}},
            "then": {"get": {"var": "r"}},
            "else": null
        }),
    );
    assert_wire(
        q::do_(args![q::delete(q::var("r")), true]),
        json!({"do": [{"delete": {"var": "r"}}, true]}),
    );
    assert_wire(q::abort("stop"), json!({"abort": "stop"}));
    assert_wire(
        q::at(q::time("2024-01-01T00:00:00Z"), q::get(q::var("r"), None)),
        json!({"at": {"time": "2024-01-01T00:00:00Z"}, "expr": {"get": {"var": "r"}}}),
    );
}

#[test]
fn test_call_with_arguments() {
    assert_wire(
        q::call(q::function("greet", None), args!["Ann", 3]),
        json!({"call": {"function": "greet"}, "arguments": ["Ann", 3]}),
    );
}

// ============================================================================
// Section: Collections
// ============================================================================

#[test]
fn test_collection_functions() {
    assert_wire(
        q::take(2, vec![1, 2, 3]),
        json!({"take": 2, "collection": [1, 2, 3]}),
    );
    assert_wire(
        q::drop(1, vec![1, 2]),
        json!({"drop": 1, "collection": [1, 2]}),
    );
    assert_wire(
        q::prepend(vec![0], vec![1]),
        json!({"prepend": [0], "collection": [1]}),
    );
    assert_wire(
        q::append(vec![2], vec![1]),
        json!({"append": [2], "collection": [1]}),
    );
    assert_wire(q::is_empty(Vec::<i64>::new()), json!({"is_empty": []}));
    assert_wire(q::reverse(vec!["a", "b"]), json!({"reverse": ["a", "b"]}));
}

// ============================================================================
// Section: Reads
// ============================================================================

#[test]
fn test_paginate_with_no_options() {
    assert_wire(
        q::paginate(q::documents(users()), PaginateOptions::new()),
        json!({"paginate": {"documents": {"collection": "users"}}}),
    );
}

#[test]
fn test_paginate_with_options() {
    let options = PaginateOptions::new()
        .size(25)
        .after(q::var("cursor"))
        .events(true);
    let page = q::paginate(q::documents(users()), options).unwrap();
    assert_eq!(page.field_names(), vec!["paginate", "size", "after", "events"]);
    assert_wire(
        Ok(page),
        json!({
            "paginate": {"documents": {"collection": "users"}},
            "size": 25,
            "after": {"var": "cursor"},
            "events": true
        }),
    );
}

#[test]
fn test_key_from_secret() {
    assert_wire(q::key_from_secret("s3cr3t"), json!({"key_from_secret": "s3cr3t"}));
}

// ============================================================================
// Section: Writes
// ============================================================================

#[test]
fn test_document_writes() {
    let data = json!({"data": {"name": "Ann"}});
    let wrapped = json!({"object": {"data": {"object": {"name": "Ann"}}}});
    let doc = || q::ref_(users(), "1");

    assert_wire(
        q::create(users(), None),
        json!({"create": {"collection": "users"}}),
    );
    assert_wire(
        q::update(doc(), data.clone()),
        json!({"update": {"ref": {"collection": "users"}, "id": "1"}, "params": wrapped}),
    );
    assert_wire(
        q::replace(doc(), data.clone()),
        json!({"replace": {"ref": {"collection": "users"}, "id": "1"}, "params": wrapped}),
    );
    assert_wire(
        q::insert(doc(), 1, "create", data),
        json!({
            "insert": {"ref": {"collection": "users"}, "id": "1"},
            "ts": 1,
            "action": "create",
            "params": wrapped
        }),
    );
    assert_wire(
        q::remove(doc(), 1, "create"),
        json!({
            "remove": {"ref": {"collection": "users"}, "id": "1"},
            "ts": 1,
            "action": "create"
        }),
    );
}

#[test]
fn test_schema_creation() {
    assert_wire(
        q::create_collection(json!({"name": "users"})),
        json!({"create_collection": {"object": {"name": "users"}}}),
    );
    assert_wire(
        q::move_database(q::database("a", None), q::database("b", None)),
        json!({"move_database": {"database": "a"}, "to": {"database": "b"}}),
    );
}

// ============================================================================
// Section: Sets
// ============================================================================

#[test]
fn test_match_without_terms() {
    let expr = q::match_(q::index("all_users", None), Vec::<Arg>::new()).unwrap();
    assert_eq!(expr.field_names(), vec!["match"]);
    assert_wire(Ok(expr), json!({"match": {"index": "all_users"}}));
}

#[test]
fn test_match_with_terms() {
    assert_wire(
        q::match_(q::index("by_name", None), args!["Ann", 30]),
        json!({"match": {"index": "by_name"}, "terms": ["Ann", 30]}),
    );
}

#[test]
fn test_set_operations() {
    let a = q::match_(q::index("a", None), args![]).unwrap();
    let b = q::match_(q::index("b", None), args![]).unwrap();
    assert_wire(
        q::union(args![&a, &b]),
        json!({"union": [{"match": {"index": "a"}}, {"match": {"index": "b"}}]}),
    );
    assert_wire(
        q::range(&a, 1, 10),
        json!({"range": {"match": {"index": "a"}}, "from": 1, "to": 10}),
    );
    assert_wire(
        q::merge(json!({"a": 1}), json!({"b": 2}), None),
        json!({"merge": {"object": {"a": 1}}, "with": {"object": {"b": 2}}}),
    );
    assert_wire(q::distinct(&a), json!({"distinct": {"match": {"index": "a"}}}));
}

// ============================================================================
// Section: Auth
// ============================================================================

#[test]
fn test_auth_functions() {
    assert_wire(
        q::login(q::ref_(users(), "1"), json!({"password": "pw"})),
        json!({
            "login": {"ref": {"collection": "users"}, "id": "1"},
            "params": {"object": {"password": "pw"}}
        }),
    );
    assert_wire(q::logout(true), json!({"logout": true}));
    assert_wire(
        q::identify(q::var("r"), "pw"),
        json!({"identify": {"var": "r"}, "password": "pw"}),
    );
}

#[test]
fn test_nullary_functions_carry_null() {
    let nullary = [
        q::identity(),
        q::current_identity(),
        q::has_identity(),
        q::has_current_identity(),
        q::current_token(),
        q::has_current_token(),
        q::now(),
        q::new_id(),
        q::next_id(),
    ];
    for expr in nullary {
        let tag = expr.tag().unwrap();
        assert_wire(Ok(expr), json!({ tag: null }));
    }
}

// ============================================================================
// Section: Strings
// ============================================================================

#[test]
fn test_string_tags_drop_underscores() {
    assert_wire(
        q::contains_str("hello", "ell"),
        json!({"containsstr": "hello", "search": "ell"}),
    );
    assert_wire(
        q::starts_with("hello", "he"),
        json!({"startswith": "hello", "search": "he"}),
    );
    assert_wire(
        q::replace_str("aXa", "X", "-"),
        json!({"replacestr": "aXa", "find": "X", "replace": "-"}),
    );
    assert_wire(q::regex_escape("a.b"), json!({"regexescape": "a.b"}));
}

#[test]
fn test_string_optionals() {
    assert_wire(
        q::concat(vec!["a", "b"], None),
        json!({"concat": ["a", "b"]}),
    );
    assert_wire(
        q::concat(vec!["a", "b"], Some(", ".into())),
        json!({"concat": ["a", "b"], "separator": ", "}),
    );
    assert_wire(
        q::find_str_regex("abcabc", "b", None, Some(2.into())),
        json!({"findstrregex": "abcabc", "pattern": "b", "num_results": 2}),
    );
    assert_wire(
        q::substring("hello", Some(1.into()), None),
        json!({"substring": "hello", "start": 1}),
    );
    assert_wire(
        q::ngram("abc", None, Some(2.into())),
        json!({"ngram": "abc", "max": 2}),
    );
}

#[test]
fn test_format_values() {
    assert_wire(
        q::format("%s is %d", args!["Ann", 30]),
        json!({"format": "%s is %d", "values": ["Ann", 30]}),
    );
    assert_wire(q::format("plain", args![]), json!({"format": "plain"}));
}

// ============================================================================
// Section: Time
// ============================================================================

#[test]
fn test_time_functions() {
    assert_wire(
        q::epoch(0, "second"),
        json!({"epoch": 0, "unit": "second"}),
    );
    assert_wire(
        q::time_add(q::now(), 1, "day"),
        json!({"time_add": {"now": null}, "offset": 1, "unit": "day"}),
    );
    assert_wire(
        q::time_diff(q::var("a"), q::var("b"), "hour"),
        json!({"time_diff": {"var": "a"}, "other": {"var": "b"}, "unit": "hour"}),
    );
    assert_wire(q::year(q::now()), json!({"year": {"now": null}}));
}

// ============================================================================
// Section: Schema
// ============================================================================

#[test]
fn test_scoped_references() {
    assert_wire(
        q::index("by_name", Some(q::database("app", None).into())),
        json!({"index": "by_name", "scope": {"database": "app"}}),
    );
    assert_wire(q::role("admin", None), json!({"role": "admin"}));
}

#[test]
fn test_listings_without_scope_carry_null() {
    assert_wire(q::collections(None), json!({"collections": null}));
    assert_wire(q::keys(None), json!({"keys": null}));
    assert_wire(
        q::indexes(Some(q::database("app", None).into())),
        json!({"indexes": {"database": "app"}}),
    );
}

// ============================================================================
// Section: Objects
// ============================================================================

#[test]
fn test_select_and_contains() {
    let doc = q::var("doc");
    assert_wire(
        q::select(args!["data", "name"], &doc, None),
        json!({"select": ["data", "name"], "from": {"var": "doc"}}),
    );
    assert_wire(
        q::select("x", &doc, Some(Arg::null())),
        json!({"select": "x", "from": {"var": "doc"}, "default": null}),
    );
    assert_wire(
        q::contains_path(args!["data", "x"], &doc),
        json!({"contains_path": ["data", "x"], "in": {"var": "doc"}}),
    );
    assert_wire(q::equals(args![1, 1.0]), json!({"equals": [1, 1.0]}));
}

// ============================================================================
// Section: Math, logic and types
// ============================================================================

#[test]
fn test_math_functions() {
    assert_wire(q::pow(2, Some(10.into())), json!({"pow": 2, "exp": 10}));
    assert_wire(q::hypot(3, None), json!({"hypot": 3}));
    assert_wire(q::bit_and(args![6, 3]), json!({"bitand": [6, 3]}));
    assert_wire(q::bit_not(6), json!({"bitnot": 6}));
    assert_wire(q::sqrt(16), json!({"sqrt": 16}));
    assert_wire(q::mean(vec![1, 2, 3]), json!({"mean": [1, 2, 3]}));
}

#[test]
fn test_logic_functions() {
    assert_wire(
        q::and(args![q::lt(args![1, q::var("x"), 10]), q::not(false)]),
        json!({"and": [{"lt": [1, {"var": "x"}, 10]}, {"not": false}]}),
    );
}

#[test]
fn test_type_functions() {
    assert_wire(q::is_string("a"), json!({"is_string": "a"}));
    assert_wire(q::to_object(vec![args!["a", 1]]), json!({"to_object": [["a", 1]]}));
    assert_wire(q::to_string(1), json!({"to_string": 1}));
    assert_eq!(
        q::to_string(func(|x: Expr| x)),
        Err(BuildError::FunctionNotAllowed {
            function: "to_string"
        })
    );
}

// ============================================================================
// Section: Composition
// ============================================================================

#[test]
fn test_realistic_query() {
    let expr = q::map(
        q::paginate(
            q::match_(q::index("users_by_team", None), args!["core"]),
            PaginateOptions::new().size(10),
        ),
        func(|r: Expr| {
            q::let_(
                [("doc", q::get(r, None))],
                q::select(args!["data", "name"], q::var("doc"), Some("unknown".into())),
            )
        }),
    );

    assert_wire(
        expr,
        json!({
            "map": {
                "lambda": "_implicit0",
                "expr": {
                    "let": [{"doc": {"get": {"var": "_implicit0"}}}],
                    "in": {"select": ["data", "name"], "from": {"var": "doc"}, "default": "unknown"}
                }
            },
            "collection": {
                "paginate": {"match": {"index": "users_by_team"}, "terms": ["core"]},
                "size": 10
            }
        }),
    );
}
