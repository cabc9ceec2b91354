//! Core forms: references, bindings, control flow, lambdas and literals.

use crate::{
    ast::{Arg, Expr, IntoFunc},
    error::Result,
    normalize::{self, Op, unary, variadic},
    value::{Bytes, Literal},
};

/// A reference to the document `id` inside `collection`.
///
/// ```text
/// {"ref": collection, "id": id}
/// ```
pub fn ref_(collection: impl Into<Arg>, id: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("ref", collection)?.arg("id", id)?.build())
}

/// A reference written as a path string, e.g. `"collections/users/1"`.
pub fn ref_path(path: impl Into<String>) -> Expr {
    Op::with_expr("@ref", Expr::string(path)).build()
}

/// A bytes literal, sent base64-encoded.
pub fn bytes(data: impl Into<Bytes>) -> Expr {
    Expr::literal(Literal::Bytes(data.into().0))
}

/// A timestamp literal (`@ts`) from an ISO-8601 string.
pub fn timestamp_literal(iso: impl Into<String>) -> Expr {
    Op::with_expr("@ts", Expr::string(iso)).build()
}

/// A date literal (`@date`) from an ISO-8601 date string.
pub fn date_literal(iso: impl Into<String>) -> Expr {
    Op::with_expr("@date", Expr::string(iso)).build()
}

pub fn abort(message: impl Into<Arg>) -> Result<Expr> {
    unary("abort", message)
}

/// Evaluates `expr` as of `timestamp`.
pub fn at(timestamp: impl Into<Arg>, expr: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("at", timestamp)?.arg("expr", expr)?.build())
}

/// Binds names to values for the scope of `body`.
///
/// Bindings keep their order; later bindings may refer to earlier ones with
/// [`var`]. A native function as `body` is called with one `Var` per
/// binding and must take exactly as many parameters as there are bindings.
///
/// ```
/// use fql_builder::{Expr, args, func, q};
///
/// let expr = q::let_(
///     [("x", 1), ("y", 2)],
///     func(|x: Expr, y: Expr| q::add(args![x, y])),
/// ).unwrap();
///
/// assert_eq!(
///     expr.to_string(),
///     r#"{"let":[{"x":1},{"y":2}],"in":{"add":[{"var":"x"},{"var":"y"}]}}"#
/// );
/// ```
pub fn let_<I, K, V>(bindings: I, body: impl Into<Arg>) -> Result<Expr>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Arg>,
{
    let mut names = Vec::new();
    let mut nodes = Vec::new();
    for (name, value) in bindings {
        let name = name.into();
        let value = normalize::normalize(value.into(), "let")?;
        names.push(name.clone());
        nodes.push(Expr::binding(name, value));
    }

    let body = match body.into() {
        Arg::Function(f) => normalize::apply_named(f, &names, "let")?,
        other => normalize::normalize(other, "let")?,
    };

    Ok(Op::with_expr("let", Expr::array(nodes)).expr("in", body).build())
}

/// A reference to a variable bound by `let_` or a lambda.
pub fn var(name: impl Into<String>) -> Expr {
    normalize::variable(name)
}

pub fn if_(
    condition: impl Into<Arg>,
    then: impl Into<Arg>,
    otherwise: impl Into<Arg>,
) -> Result<Expr> {
    Ok(Op::with("if", condition)?
        .arg("then", then)?
        .arg("else", otherwise)?
        .build())
}

/// Evaluates expressions in order, yielding the last. Needs at least one.
pub fn do_<I>(exprs: I) -> Result<Expr>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    variadic("do", exprs)
}

/// An object literal.
///
/// The fields are always marked as data, so keys that happen to match
/// operator tags are never read as operations.
pub fn object<I, K, V>(fields: I) -> Result<Expr>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Arg>,
{
    normalize::normalize(Arg::object(fields), "object")
}

/// A lambda with explicit bindings.
///
/// `vars` is a name or a list of names (to destructure positional values).
/// `body` is any expression, or a native function taking one parameter per
/// name.
pub fn lambda(vars: impl Into<Arg>, body: impl Into<Arg>) -> Result<Expr> {
    normalize::explicit_lambda(vars.into(), body.into(), "lambda")
}

/// A lambda reified from a native function.
///
/// ```
/// use fql_builder::{Expr, args, q};
///
/// let expr = q::lambda_fn(|x: Expr, y: Expr| q::add(args![x, y])).unwrap();
/// assert_eq!(
///     expr.to_string(),
///     r#"{"lambda":["_implicit0","_implicit1"],"expr":{"add":[{"var":"_implicit0"},{"var":"_implicit1"}]}}"#
/// );
/// ```
pub fn lambda_fn<P>(f: impl IntoFunc<P>) -> Result<Expr> {
    normalize::reify(f.into_func(), "lambda")
}

/// Calls a user-defined function with any number of arguments.
pub fn call<I>(function: impl Into<Arg>, arguments: I) -> Result<Expr>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    let arguments = normalize::operands("call", 0, arguments)?;
    Ok(Op::with("call", function)?.expr("arguments", arguments).build())
}

/// Wraps a lambda so it can be stored as a function body.
pub fn query(lambda: impl Into<Arg>) -> Result<Expr> {
    Op::with_lambda("query", lambda).map(Op::build)
}
