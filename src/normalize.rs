//! The expression normalizer.
//!
//! Every builder funnels its raw arguments through this module. It is the
//! single place that decides how an [`Arg`] becomes an [`Expr`]:
//!
//! - expressions pass through unchanged
//! - scalars and bytes become literal nodes
//! - lists become array nodes, element by element, order and length kept
//! - keyed containers become object literals, recursively
//! - native functions are only accepted in lambda positions, where they are
//!   reified into `{"lambda": ..., "expr": ...}` nodes
//!
//! [`Op`] then assembles normalized operands under an operator tag, leaving
//! out optional operands the caller did not supply.

use std::{cell::Cell, collections::BTreeMap};

use tracing::{debug, trace};

use crate::{
    ast::{Arg, Expr, Func},
    error::{BuildError, Result},
    value::Literal,
};

/// Prefix of the variable names synthesized for native lambdas.
pub const IMPLICIT_PREFIX: &str = "_implicit";

thread_local! {
    /// Number of implicit variables bound by the native lambdas currently
    /// being reified on this thread.
    static BOUND: Cell<usize> = const { Cell::new(0) };
}

/// Binds `count` more implicit variables until dropped.
struct ScopeGuard {
    previous: usize,
}

impl ScopeGuard {
    fn enter(count: usize) -> (Self, usize) {
        let base = BOUND.get();
        BOUND.set(base + count);
        (ScopeGuard { previous: base }, base)
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        BOUND.set(self.previous);
    }
}

/// Normalizes a raw argument in a value position.
///
/// `function` is the tag of the calling builder, reported in errors.
pub fn normalize(arg: Arg, function: &'static str) -> Result<Expr> {
    match arg {
        Arg::Expr(expr) => Ok(expr),
        Arg::Literal(lit) => Ok(Expr::literal(lit)),
        Arg::Array(items) => items
            .into_iter()
            .map(|item| normalize(item, function))
            .collect::<Result<Vec<_>>>()
            .map(Expr::array),
        Arg::Object(fields) => normalize_fields(fields, function).map(Expr::object),
        Arg::Function(f) => {
            debug!(function, arity = f.arity(), "function passed in a value position");
            Err(BuildError::FunctionNotAllowed { function })
        }
        Arg::Failed(err) => Err(err),
    }
}

/// Normalizes a raw argument in a position that also accepts a lambda.
///
/// A native function is reified; anything else takes the value path.
pub fn normalize_lambda(arg: Arg, function: &'static str) -> Result<Expr> {
    match arg {
        Arg::Function(f) => reify(f, function),
        other => normalize(other, function),
    }
}

/// Keys come out sorted; a repeated name keeps its last value.
fn normalize_fields(
    fields: Vec<(String, Arg)>,
    function: &'static str,
) -> Result<BTreeMap<String, Expr>> {
    fields
        .into_iter()
        .map(|(name, value)| Ok((name, normalize(value, function)?)))
        .collect()
}

/// A `{"var": name}` node.
pub(crate) fn variable(name: impl Into<String>) -> Expr {
    Expr::op(vec![("var", Expr::string(name))])
}

fn lambda_node(params: Expr, body: Expr) -> Expr {
    Expr::op(vec![("lambda", params), ("expr", body)])
}

fn implicit_name(index: usize) -> String {
    format!("{IMPLICIT_PREFIX}{index}")
}

/// Turns a native function into a lambda node.
///
/// The function is called once with a `Var` for each synthesized name.
/// Names continue numbering from the variables bound by enclosing native
/// lambdas, so nested callbacks never shadow outer parameters, and a
/// top-level lambda always starts at `_implicit0`.
pub(crate) fn reify(f: Func, function: &'static str) -> Result<Expr> {
    let arity = f.arity();
    if arity == 0 {
        return Err(BuildError::EmptyLambda { function });
    }

    let (guard, base) = ScopeGuard::enter(arity);
    trace!(function, arity, first = base, "reifying native lambda");

    let names: Vec<String> = (base..base + arity).map(implicit_name).collect();
    let vars = names.iter().map(variable).collect();
    // A returned function is curried into a nested lambda while our names are still bound
    let body = normalize_lambda(f.call(vars), function)?;
    drop(guard);

    let params = match names.as_slice() {
        [single] => Expr::string(single.as_str()),
        _ => Expr::array(names.into_iter().map(Expr::string).collect()),
    };
    Ok(lambda_node(params, body))
}

/// Validates a binding position: a name or a list of names.
///
/// Returns the normalized binding node and the names it declares. Plain
/// strings are taken as the names themselves.
pub(crate) fn binding_names(arg: Arg, function: &'static str) -> Result<(Expr, Vec<String>)> {
    let invalid = |found| BuildError::InvalidBinding { function, found };

    match arg {
        Arg::Literal(Literal::String(name)) => Ok((Expr::string(name.as_str()), vec![name])),
        Arg::Array(items) => {
            let names = items
                .into_iter()
                .map(|item| match item {
                    Arg::Literal(Literal::String(name)) => Ok(name),
                    Arg::Expr(expr) => match expr.as_literal() {
                        Some(Literal::String(name)) => Ok(name.clone()),
                        _ => Err(invalid("expression")),
                    },
                    Arg::Failed(err) => Err(err),
                    other => Err(invalid(other.type_name())),
                })
                .collect::<Result<Vec<_>>>()?;
            let params = Expr::array(names.iter().map(|n| Expr::string(n.as_str())).collect());
            Ok((params, names))
        }
        Arg::Expr(expr) => {
            if let Some(Literal::String(name)) = expr.as_literal() {
                let name = name.clone();
                return Ok((expr, vec![name]));
            }
            let names = expr
                .elements()
                .ok_or_else(|| invalid("expression"))?
                .iter()
                .map(|e| match e.as_literal() {
                    Some(Literal::String(name)) => Ok(name.clone()),
                    _ => Err(invalid("expression")),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok((expr, names))
        }
        Arg::Failed(err) => Err(err),
        other => Err(invalid(other.type_name())),
    }
}

/// Calls a native function with `Var`s referencing explicitly declared names.
///
/// Used when a function is the body of a form that already names its
/// bindings (`lambda(vars, body)`, `let`). The arity must match exactly.
pub(crate) fn apply_named(f: Func, names: &[String], function: &'static str) -> Result<Expr> {
    if f.arity() != names.len() {
        return Err(BuildError::LambdaArity {
            function,
            expected: names.len(),
            found: f.arity(),
        });
    }
    let vars = names.iter().map(|n| variable(n.as_str())).collect();
    normalize_lambda(f.call(vars), function)
}

/// Builds a lambda node from explicit bindings and a body.
pub(crate) fn explicit_lambda(vars: Arg, body: Arg, function: &'static str) -> Result<Expr> {
    let (params, names) = binding_names(vars, function)?;
    let body = match body {
        Arg::Function(f) => apply_named(f, &names, function)?,
        other => normalize(other, function)?,
    };
    Ok(lambda_node(params, body))
}

/// Normalizes variadic operands into one array node.
///
/// Fails with [`BuildError::Arity`] when fewer than `min` operands are given.
pub(crate) fn operands<I>(function: &'static str, min: usize, values: I) -> Result<Expr>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    let args: Vec<Arg> = values.into_iter().map(Into::into).collect();
    if args.len() < min {
        return Err(BuildError::Arity {
            function,
            min,
            given: args.len(),
        });
    }
    normalize(Arg::Array(args), function)
}

/// Assembles a tagged operation node.
///
/// The tag is always the first field; further operands follow in the order
/// they are added.
#[derive(Debug)]
pub(crate) struct Op {
    tag: &'static str,
    fields: Vec<(&'static str, Expr)>,
}

impl Op {
    /// Tag with a normalized value operand.
    pub fn with(tag: &'static str, value: impl Into<Arg>) -> Result<Self> {
        let operand = normalize(value.into(), tag)?;
        Ok(Op::with_expr(tag, operand))
    }

    /// Tag whose operand may be a lambda.
    pub fn with_lambda(tag: &'static str, value: impl Into<Arg>) -> Result<Self> {
        let operand = normalize_lambda(value.into(), tag)?;
        Ok(Op::with_expr(tag, operand))
    }

    /// Tag with an operand that is already normalized.
    pub fn with_expr(tag: &'static str, operand: Expr) -> Self {
        Op {
            tag,
            fields: vec![(tag, operand)],
        }
    }

    /// Tag that takes no operand; emitted as `{"tag": null}`.
    pub fn nullary(tag: &'static str) -> Self {
        Op::with_expr(tag, Expr::null())
    }

    pub fn arg(self, name: &'static str, value: impl Into<Arg>) -> Result<Self> {
        let value = normalize(value.into(), self.tag)?;
        Ok(self.expr(name, value))
    }

    pub fn lambda_arg(self, name: &'static str, value: impl Into<Arg>) -> Result<Self> {
        let value = normalize_lambda(value.into(), self.tag)?;
        Ok(self.expr(name, value))
    }

    /// Adds the operand only when supplied.
    pub fn optional(self, name: &'static str, value: Option<Arg>) -> Result<Self> {
        match value {
            Some(value) => self.arg(name, value),
            None => Ok(self),
        }
    }

    pub fn optional_lambda(self, name: &'static str, value: Option<Arg>) -> Result<Self> {
        match value {
            Some(value) => self.lambda_arg(name, value),
            None => Ok(self),
        }
    }

    pub fn expr(mut self, name: &'static str, value: Expr) -> Self {
        self.fields.push((name, value));
        self
    }

    pub fn build(self) -> Expr {
        Expr::op(self.fields)
    }
}

/// `{"tag": value}`
pub(crate) fn unary(tag: &'static str, value: impl Into<Arg>) -> Result<Expr> {
    Op::with(tag, value).map(Op::build)
}

/// `{"tag": [values...]}` with at least one operand.
pub(crate) fn variadic<I>(tag: &'static str, values: I) -> Result<Expr>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    let operands = operands(tag, 1, values)?;
    Ok(Op::with_expr(tag, operands).build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_guard_restores_depth() {
        assert_eq!(BOUND.get(), 0);
        {
            let (_outer, base) = ScopeGuard::enter(2);
            assert_eq!(base, 0);
            {
                let (_inner, base) = ScopeGuard::enter(1);
                assert_eq!(base, 2);
                assert_eq!(BOUND.get(), 3);
            }
            assert_eq!(BOUND.get(), 2);
        }
        assert_eq!(BOUND.get(), 0);
    }

    #[test]
    fn test_depth_restored_after_failed_body() {
        let f = Func::with_arity(2, |_| Arg::Failed(BuildError::EmptyLambda { function: "x" }));
        assert!(reify(f, "lambda").is_err());
        assert_eq!(BOUND.get(), 0);
    }

    #[test]
    fn test_depth_restored_after_panicking_body() {
        let f = Func::with_arity(2, |_| -> Arg { panic!("callback failed") });
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| reify(f, "map")));
        assert!(result.is_err());
        assert_eq!(BOUND.get(), 0);
    }

    #[test]
    fn test_zero_arity_function_rejected() {
        let f = Func::with_arity(0, |_| Arg::null());
        assert_eq!(
            reify(f, "map"),
            Err(BuildError::EmptyLambda { function: "map" })
        );
    }

    #[test]
    fn test_binding_names_rejects_numbers() {
        let err = binding_names(Arg::from(5), "lambda").unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidBinding {
                function: "lambda",
                found: "integer"
            }
        );
    }

    #[test]
    fn test_binding_names_accepts_string_expression() {
        let (params, names) = binding_names(Arg::Expr(Expr::string("x")), "lambda").unwrap();
        assert_eq!(params, Expr::string("x"));
        assert_eq!(names, vec!["x".to_string()]);
    }

    #[test]
    fn test_operands_checks_minimum_before_normalizing() {
        let err = operands("add", 1, Vec::<Arg>::new()).unwrap_err();
        assert_eq!(
            err,
            BuildError::Arity {
                function: "add",
                min: 1,
                given: 0
            }
        );
    }

    #[test]
    fn test_optional_none_leaves_field_out() {
        let expr = Op::with("round", 1.5)
            .and_then(|op| op.optional("precision", None))
            .map(Op::build)
            .unwrap();
        assert_eq!(expr.field_names(), vec!["round"]);
    }
}
