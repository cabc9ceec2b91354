//! Catalog of builder functions.
//!
//! One entry per builder in [`crate::query`], recording its wire tag and
//! category. The CLI uses it to render documentation and to recognize
//! operation nodes when checking a wire document.

use serde::Serialize;

/// Groups of builder functions, mirroring the `query` submodules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Basic,
    Collections,
    Types,
    Read,
    Write,
    Sets,
    Auth,
    Strings,
    Time,
    Schema,
    Objects,
    Math,
    Logic,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Basic,
        Category::Collections,
        Category::Types,
        Category::Read,
        Category::Write,
        Category::Sets,
        Category::Auth,
        Category::Strings,
        Category::Time,
        Category::Schema,
        Category::Objects,
        Category::Math,
        Category::Logic,
    ];

    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "basic" | "core" => Some(Self::Basic),
            "collections" | "collection" | "arrays" => Some(Self::Collections),
            "types" | "type" | "conversions" => Some(Self::Types),
            "read" | "reads" => Some(Self::Read),
            "write" | "writes" => Some(Self::Write),
            "sets" | "set" => Some(Self::Sets),
            "auth" | "authentication" => Some(Self::Auth),
            "strings" | "string" => Some(Self::Strings),
            "time" | "dates" => Some(Self::Time),
            "schema" | "refs" => Some(Self::Schema),
            "objects" | "object" | "paths" => Some(Self::Objects),
            "math" | "arithmetic" => Some(Self::Math),
            "logic" | "comparison" => Some(Self::Logic),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Basic => "basic",
            Category::Collections => "collections",
            Category::Types => "types",
            Category::Read => "read",
            Category::Write => "write",
            Category::Sets => "sets",
            Category::Auth => "auth",
            Category::Strings => "strings",
            Category::Time => "time",
            Category::Schema => "schema",
            Category::Objects => "objects",
            Category::Math => "math",
            Category::Logic => "logic",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Category::Basic => "References, bindings, control flow, lambdas and literals",
            Category::Collections => "Map, filter and slice arrays, pages and sets",
            Category::Types => "Type predicates and conversions",
            Category::Read => "Fetch documents and paginate sets",
            Category::Write => "Create, update and remove documents and schema",
            Category::Sets => "Index matches and set algebra",
            Category::Auth => "Login, logout and identity",
            Category::Strings => "Search, transform and format strings",
            Category::Time => "Timestamps, dates and their components",
            Category::Schema => "References to databases, collections, indexes and more",
            Category::Objects => "Equality, containment and path selection",
            Category::Math => "Arithmetic, rounding, trigonometry and aggregates",
            Category::Logic => "Chained comparisons and boolean logic",
        }
    }
}

/// Description of one builder function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunctionSpec {
    /// Builder name in `fql_builder::q`
    pub name: &'static str,
    /// Operator tag on the wire
    pub tag: &'static str,
    pub category: Category,
    /// Rust-side signature, `?` marking optional and `...` variadic parameters
    pub signature: &'static str,
    /// The tag holds an operand list that must not be empty
    pub variadic: bool,
}

const fn f(
    category: Category,
    name: &'static str,
    tag: &'static str,
    signature: &'static str,
) -> FunctionSpec {
    FunctionSpec {
        name,
        tag,
        category,
        signature,
        variadic: false,
    }
}

const fn v(
    category: Category,
    name: &'static str,
    tag: &'static str,
    signature: &'static str,
) -> FunctionSpec {
    FunctionSpec {
        name,
        tag,
        category,
        signature,
        variadic: true,
    }
}

use Category::*;

pub static FUNCTIONS: &[FunctionSpec] = &[
    // Basic
    f(Basic, "ref_", "ref", "ref_(collection, id)"),
    f(Basic, "ref_path", "@ref", "ref_path(path)"),
    f(Basic, "bytes", "@bytes", "bytes(data)"),
    f(Basic, "timestamp_literal", "@ts", "timestamp_literal(iso)"),
    f(Basic, "date_literal", "@date", "date_literal(iso)"),
    f(Basic, "abort", "abort", "abort(message)"),
    f(Basic, "at", "at", "at(timestamp, expr)"),
    f(Basic, "let_", "let", "let_(bindings, body)"),
    f(Basic, "var", "var", "var(name)"),
    f(Basic, "if_", "if", "if_(condition, then, otherwise)"),
    v(Basic, "do_", "do", "do_(exprs...)"),
    f(Basic, "object", "object", "object(fields)"),
    f(Basic, "lambda", "lambda", "lambda(vars, body) | lambda_fn(f)"),
    f(Basic, "call", "call", "call(function, arguments...)"),
    f(Basic, "query", "query", "query(lambda)"),
    // Collections
    f(Collections, "map", "map", "map(collection, lambda)"),
    f(Collections, "foreach", "foreach", "foreach(collection, lambda)"),
    f(Collections, "filter", "filter", "filter(collection, lambda)"),
    f(Collections, "take", "take", "take(number, collection)"),
    f(Collections, "drop", "drop", "drop(number, collection)"),
    f(Collections, "prepend", "prepend", "prepend(elements, collection)"),
    f(Collections, "append", "append", "append(elements, collection)"),
    f(Collections, "is_empty", "is_empty", "is_empty(collection)"),
    f(Collections, "is_nonempty", "is_nonempty", "is_nonempty(collection)"),
    f(Collections, "reverse", "reverse", "reverse(source)"),
    // Types
    f(Types, "is_number", "is_number", "is_number(value)"),
    f(Types, "is_double", "is_double", "is_double(value)"),
    f(Types, "is_integer", "is_integer", "is_integer(value)"),
    f(Types, "is_boolean", "is_boolean", "is_boolean(value)"),
    f(Types, "is_null", "is_null", "is_null(value)"),
    f(Types, "is_bytes", "is_bytes", "is_bytes(value)"),
    f(Types, "is_timestamp", "is_timestamp", "is_timestamp(value)"),
    f(Types, "is_date", "is_date", "is_date(value)"),
    f(Types, "is_string", "is_string", "is_string(value)"),
    f(Types, "is_array", "is_array", "is_array(value)"),
    f(Types, "is_object", "is_object", "is_object(value)"),
    f(Types, "is_ref", "is_ref", "is_ref(value)"),
    f(Types, "is_set", "is_set", "is_set(value)"),
    f(Types, "is_doc", "is_doc", "is_doc(value)"),
    f(Types, "is_lambda", "is_lambda", "is_lambda(value)"),
    f(Types, "is_collection", "is_collection", "is_collection(value)"),
    f(Types, "is_database", "is_database", "is_database(value)"),
    f(Types, "is_index", "is_index", "is_index(value)"),
    f(Types, "is_function", "is_function", "is_function(value)"),
    f(Types, "is_key", "is_key", "is_key(value)"),
    f(Types, "is_token", "is_token", "is_token(value)"),
    f(Types, "is_credentials", "is_credentials", "is_credentials(value)"),
    f(Types, "is_role", "is_role", "is_role(value)"),
    f(Types, "to_string", "to_string", "to_string(value)"),
    f(Types, "to_number", "to_number", "to_number(value)"),
    f(Types, "to_object", "to_object", "to_object(pairs)"),
    f(Types, "to_array", "to_array", "to_array(object)"),
    f(Types, "to_double", "to_double", "to_double(value)"),
    f(Types, "to_integer", "to_integer", "to_integer(value)"),
    f(Types, "to_time", "to_time", "to_time(value)"),
    f(Types, "to_date", "to_date", "to_date(value)"),
    // Read
    f(Read, "get", "get", "get(reference, ts?)"),
    f(Read, "exists", "exists", "exists(reference, ts?)"),
    f(Read, "key_from_secret", "key_from_secret", "key_from_secret(secret)"),
    f(Read, "reduce", "reduce", "reduce(lambda, initial, collection)"),
    f(
        Read,
        "paginate",
        "paginate",
        "paginate(set, {size?, after?, before?, ts?, events?, sources?})",
    ),
    // Write
    f(Write, "create", "create", "create(collection, params?)"),
    f(Write, "update", "update", "update(reference, params)"),
    f(Write, "replace", "replace", "replace(reference, params)"),
    f(Write, "delete", "delete", "delete(reference)"),
    f(Write, "insert", "insert", "insert(reference, ts, action, params)"),
    f(Write, "remove", "remove", "remove(reference, ts, action)"),
    f(Write, "move_database", "move_database", "move_database(from, to)"),
    f(Write, "create_class", "create_class", "create_class(params)"),
    f(Write, "create_collection", "create_collection", "create_collection(params)"),
    f(Write, "create_database", "create_database", "create_database(params)"),
    f(Write, "create_index", "create_index", "create_index(params)"),
    f(Write, "create_key", "create_key", "create_key(params)"),
    f(Write, "create_function", "create_function", "create_function(params)"),
    f(Write, "create_role", "create_role", "create_role(params)"),
    f(
        Write,
        "create_access_provider",
        "create_access_provider",
        "create_access_provider(params)",
    ),
    // Sets
    f(Sets, "singleton", "singleton", "singleton(reference)"),
    f(Sets, "events", "events", "events(reference_or_set)"),
    f(Sets, "match_", "match", "match_(index, terms...)"),
    v(Sets, "union", "union", "union(sets...)"),
    f(Sets, "merge", "merge", "merge(merge, with, lambda?)"),
    v(Sets, "intersection", "intersection", "intersection(sets...)"),
    v(Sets, "difference", "difference", "difference(sets...)"),
    f(Sets, "distinct", "distinct", "distinct(set)"),
    f(Sets, "join", "join", "join(source, target)"),
    f(Sets, "range", "range", "range(set, from, to)"),
    f(Sets, "documents", "documents", "documents(collection)"),
    // Auth
    f(Auth, "login", "login", "login(reference, params)"),
    f(Auth, "logout", "logout", "logout(all_tokens)"),
    f(Auth, "identify", "identify", "identify(reference, password)"),
    f(Auth, "identity", "identity", "identity()"),
    f(Auth, "current_identity", "current_identity", "current_identity()"),
    f(Auth, "has_identity", "has_identity", "has_identity()"),
    f(Auth, "has_current_identity", "has_current_identity", "has_current_identity()"),
    f(Auth, "current_token", "current_token", "current_token()"),
    f(Auth, "has_current_token", "has_current_token", "has_current_token()"),
    // Strings
    f(Strings, "concat", "concat", "concat(strings, separator?)"),
    f(Strings, "casefold", "casefold", "casefold(value, normalizer?)"),
    f(Strings, "contains_str", "containsstr", "contains_str(value, search)"),
    f(Strings, "contains_str_regex", "containsstrregex", "contains_str_regex(value, pattern)"),
    f(Strings, "starts_with", "startswith", "starts_with(value, search)"),
    f(Strings, "ends_with", "endswith", "ends_with(value, search)"),
    f(Strings, "regex_escape", "regexescape", "regex_escape(value)"),
    f(Strings, "find_str", "findstr", "find_str(value, find, start?)"),
    f(
        Strings,
        "find_str_regex",
        "findstrregex",
        "find_str_regex(value, pattern, start?, num_results?)",
    ),
    f(Strings, "length", "length", "length(value)"),
    f(Strings, "lowercase", "lowercase", "lowercase(value)"),
    f(Strings, "ltrim", "ltrim", "ltrim(value)"),
    f(Strings, "ngram", "ngram", "ngram(terms, min?, max?)"),
    f(Strings, "repeat", "repeat", "repeat(value, number?)"),
    f(Strings, "replace_str", "replacestr", "replace_str(value, find, replace)"),
    f(
        Strings,
        "replace_str_regex",
        "replacestrregex",
        "replace_str_regex(value, pattern, replace, first?)",
    ),
    f(Strings, "rtrim", "rtrim", "rtrim(value)"),
    f(Strings, "space", "space", "space(count)"),
    f(Strings, "substring", "substring", "substring(value, start?, length?)"),
    f(Strings, "titlecase", "titlecase", "titlecase(value)"),
    f(Strings, "trim", "trim", "trim(value)"),
    f(Strings, "uppercase", "uppercase", "uppercase(value)"),
    f(Strings, "format", "format", "format(format, values...)"),
    // Time
    f(Time, "time", "time", "time(iso)"),
    f(Time, "epoch", "epoch", "epoch(number, unit)"),
    f(Time, "time_add", "time_add", "time_add(base, offset, unit)"),
    f(Time, "time_subtract", "time_subtract", "time_subtract(base, offset, unit)"),
    f(Time, "time_diff", "time_diff", "time_diff(start, finish, unit)"),
    f(Time, "date", "date", "date(iso)"),
    f(Time, "now", "now", "now()"),
    f(Time, "to_seconds", "to_seconds", "to_seconds(time)"),
    f(Time, "to_millis", "to_millis", "to_millis(time)"),
    f(Time, "to_micros", "to_micros", "to_micros(time)"),
    f(Time, "day_of_week", "day_of_week", "day_of_week(time)"),
    f(Time, "day_of_year", "day_of_year", "day_of_year(time)"),
    f(Time, "day_of_month", "day_of_month", "day_of_month(time)"),
    f(Time, "hour", "hour", "hour(time)"),
    f(Time, "minute", "minute", "minute(time)"),
    f(Time, "second", "second", "second(time)"),
    f(Time, "month", "month", "month(time)"),
    f(Time, "year", "year", "year(time)"),
    // Schema
    f(Schema, "new_id", "new_id", "new_id()"),
    f(Schema, "next_id", "next_id", "next_id()"),
    f(Schema, "database", "database", "database(name, scope?)"),
    f(Schema, "index", "index", "index(name, scope?)"),
    f(Schema, "class", "class", "class(name, scope?)"),
    f(Schema, "collection", "collection", "collection(name, scope?)"),
    f(Schema, "function", "function", "function(name, scope?)"),
    f(Schema, "role", "role", "role(name, scope?)"),
    f(Schema, "access_provider", "access_provider", "access_provider(name, scope?)"),
    f(Schema, "databases", "databases", "databases(scope?)"),
    f(Schema, "indexes", "indexes", "indexes(scope?)"),
    f(Schema, "classes", "classes", "classes(scope?)"),
    f(Schema, "collections", "collections", "collections(scope?)"),
    f(Schema, "functions", "functions", "functions(scope?)"),
    f(Schema, "roles", "roles", "roles(scope?)"),
    f(Schema, "keys", "keys", "keys(scope?)"),
    f(Schema, "tokens", "tokens", "tokens(scope?)"),
    f(Schema, "credentials", "credentials", "credentials(scope?)"),
    f(Schema, "access_providers", "access_providers", "access_providers(scope?)"),
    // Objects
    v(Objects, "equals", "equals", "equals(values...)"),
    f(Objects, "contains", "contains", "contains(path, within)"),
    f(Objects, "contains_path", "contains_path", "contains_path(path, within)"),
    f(Objects, "contains_field", "contains_field", "contains_field(field, within)"),
    f(Objects, "contains_value", "contains_value", "contains_value(value, within)"),
    f(Objects, "select", "select", "select(path, from, default?)"),
    f(Objects, "select_all", "select_all", "select_all(path, from)"),
    // Math
    f(Math, "abs", "abs", "abs(value)"),
    v(Math, "add", "add", "add(values...)"),
    v(Math, "bit_and", "bitand", "bit_and(values...)"),
    f(Math, "bit_not", "bitnot", "bit_not(value)"),
    v(Math, "bit_or", "bitor", "bit_or(values...)"),
    v(Math, "bit_xor", "bitxor", "bit_xor(values...)"),
    f(Math, "ceil", "ceil", "ceil(value)"),
    v(Math, "divide", "divide", "divide(values...)"),
    f(Math, "floor", "floor", "floor(value)"),
    v(Math, "max", "max", "max(values...)"),
    v(Math, "min", "min", "min(values...)"),
    v(Math, "modulo", "modulo", "modulo(values...)"),
    v(Math, "multiply", "multiply", "multiply(values...)"),
    f(Math, "round", "round", "round(value, precision?)"),
    v(Math, "subtract", "subtract", "subtract(values...)"),
    f(Math, "sign", "sign", "sign(value)"),
    f(Math, "sqrt", "sqrt", "sqrt(value)"),
    f(Math, "trunc", "trunc", "trunc(value, precision?)"),
    f(Math, "count", "count", "count(collection)"),
    f(Math, "sum", "sum", "sum(collection)"),
    f(Math, "mean", "mean", "mean(collection)"),
    f(Math, "any", "any", "any(collection)"),
    f(Math, "all", "all", "all(collection)"),
    f(Math, "acos", "acos", "acos(value)"),
    f(Math, "asin", "asin", "asin(value)"),
    f(Math, "atan", "atan", "atan(value)"),
    f(Math, "cos", "cos", "cos(value)"),
    f(Math, "cosh", "cosh", "cosh(value)"),
    f(Math, "degrees", "degrees", "degrees(value)"),
    f(Math, "exp", "exp", "exp(value)"),
    f(Math, "hypot", "hypot", "hypot(a, b?)"),
    f(Math, "ln", "ln", "ln(value)"),
    f(Math, "log", "log", "log(value)"),
    f(Math, "pow", "pow", "pow(base, exp?)"),
    f(Math, "radians", "radians", "radians(value)"),
    f(Math, "sin", "sin", "sin(value)"),
    f(Math, "sinh", "sinh", "sinh(value)"),
    f(Math, "tan", "tan", "tan(value)"),
    f(Math, "tanh", "tanh", "tanh(value)"),
    // Logic
    v(Logic, "lt", "lt", "lt(values...)"),
    v(Logic, "lte", "lte", "lte(values...)"),
    v(Logic, "gt", "gt", "gt(values...)"),
    v(Logic, "gte", "gte", "gte(values...)"),
    v(Logic, "and", "and", "and(values...)"),
    v(Logic, "or", "or", "or(values...)"),
    f(Logic, "not", "not", "not(value)"),
];

/// Wire-only special forms the engine may send back, beyond those in [`FUNCTIONS`].
pub const SPECIAL_TAGS: &[&str] = &["@obj", "@set", "@query"];

/// Finds the builder that emits `tag`.
pub fn lookup(tag: &str) -> Option<&'static FunctionSpec> {
    FUNCTIONS.iter().find(|spec| spec.tag == tag)
}

pub fn is_known_tag(tag: &str) -> bool {
    lookup(tag).is_some() || SPECIAL_TAGS.contains(&tag)
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static FunctionSpec> {
    FUNCTIONS.iter().filter(move |spec| spec.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tags_are_unique() {
        let mut seen = HashSet::new();
        for spec in FUNCTIONS {
            assert!(seen.insert(spec.tag), "duplicate tag {}", spec.tag);
        }
    }

    #[test]
    fn test_every_category_has_functions() {
        for category in Category::ALL {
            assert!(by_category(category).next().is_some(), "{:?} is empty", category);
        }
    }

    #[test]
    fn test_category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name("Math"), Some(Category::Math));
        assert_eq!(Category::from_name("nope"), None);
    }

    #[test]
    fn test_lookup_by_tag() {
        assert_eq!(lookup("containsstr").map(|s| s.name), Some("contains_str"));
        assert!(lookup("add").is_some_and(|s| s.variadic));
        assert!(is_known_tag("@set"));
        assert!(!is_known_tag("frobnicate"));
    }
}
