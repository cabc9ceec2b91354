use crate::{
    ast::{Arg, Expr},
    error::Result,
    normalize::{self, Op},
};

/// The set of index entries matching `terms`.
///
/// With no terms the `terms` field is left out and the whole index matches.
pub fn match_<I>(index: impl Into<Arg>, terms: I) -> Result<Expr>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    let terms: Vec<Arg> = terms.into_iter().map(Into::into).collect();
    let op = Op::with("match", index)?;
    if terms.is_empty() {
        return Ok(op.build());
    }
    let terms = normalize::operands("match", 1, terms)?;
    Ok(op.expr("terms", terms).build())
}

/// Merges `with` into `merge`; an optional `lambda` resolves conflicting keys.
pub fn merge(
    merge: impl Into<Arg>,
    with: impl Into<Arg>,
    lambda: Option<Arg>,
) -> Result<Expr> {
    Ok(Op::with("merge", merge)?
        .arg("with", with)?
        .optional_lambda("lambda", lambda)?
        .build())
}

/// Joins `source` with `target`, which is an index or a lambda.
pub fn join(source: impl Into<Arg>, target: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("join", source)?.lambda_arg("with", target)?.build())
}

pub fn range(set: impl Into<Arg>, from: impl Into<Arg>, to: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("range", set)?.arg("from", from)?.arg("to", to)?.build())
}

unary_builders! {
    singleton => "singleton";
    events => "events";
    distinct => "distinct";
    /// All documents of a collection.
    documents => "documents";
}

variadic_builders! {
    union => "union";
    intersection => "intersection";
    difference => "difference";
}
