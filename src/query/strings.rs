//! String functions.
//!
//! Wire tags here follow the engine's grammar, which drops the underscores
//! for most string functions (`containsstr`, `findstrregex`, ...).

use crate::{
    ast::{Arg, Expr},
    error::Result,
    normalize::{self, Op},
};

/// Joins `strings`, optionally with a `separator`.
pub fn concat(strings: impl Into<Arg>, separator: Option<Arg>) -> Result<Expr> {
    Ok(Op::with("concat", strings)?
        .optional("separator", separator)?
        .build())
}

/// Normalizes case; `normalizer` picks the Unicode form (`NFKCCaseFold` by default).
pub fn casefold(value: impl Into<Arg>, normalizer: Option<Arg>) -> Result<Expr> {
    Ok(Op::with("casefold", value)?
        .optional("normalizer", normalizer)?
        .build())
}

pub fn contains_str(value: impl Into<Arg>, search: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("containsstr", value)?.arg("search", search)?.build())
}

pub fn contains_str_regex(value: impl Into<Arg>, pattern: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("containsstrregex", value)?
        .arg("pattern", pattern)?
        .build())
}

pub fn starts_with(value: impl Into<Arg>, search: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("startswith", value)?.arg("search", search)?.build())
}

pub fn ends_with(value: impl Into<Arg>, search: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("endswith", value)?.arg("search", search)?.build())
}

pub fn find_str(value: impl Into<Arg>, find: impl Into<Arg>, start: Option<Arg>) -> Result<Expr> {
    Ok(Op::with("findstr", value)?
        .arg("find", find)?
        .optional("start", start)?
        .build())
}

pub fn find_str_regex(
    value: impl Into<Arg>,
    pattern: impl Into<Arg>,
    start: Option<Arg>,
    num_results: Option<Arg>,
) -> Result<Expr> {
    Ok(Op::with("findstrregex", value)?
        .arg("pattern", pattern)?
        .optional("start", start)?
        .optional("num_results", num_results)?
        .build())
}

/// Tokenizes `terms` into n-grams between `min` and `max` characters long.
pub fn ngram(terms: impl Into<Arg>, min: Option<Arg>, max: Option<Arg>) -> Result<Expr> {
    Ok(Op::with("ngram", terms)?
        .optional("min", min)?
        .optional("max", max)?
        .build())
}

pub fn repeat(value: impl Into<Arg>, number: Option<Arg>) -> Result<Expr> {
    Ok(Op::with("repeat", value)?.optional("number", number)?.build())
}

pub fn replace_str(
    value: impl Into<Arg>,
    find: impl Into<Arg>,
    replace: impl Into<Arg>,
) -> Result<Expr> {
    Ok(Op::with("replacestr", value)?
        .arg("find", find)?
        .arg("replace", replace)?
        .build())
}

/// Replaces matches of `pattern`; `first` limits it to the first match.
pub fn replace_str_regex(
    value: impl Into<Arg>,
    pattern: impl Into<Arg>,
    replace: impl Into<Arg>,
    first: Option<Arg>,
) -> Result<Expr> {
    Ok(Op::with("replacestrregex", value)?
        .arg("pattern", pattern)?
        .arg("replace", replace)?
        .optional("first", first)?
        .build())
}

pub fn substring(value: impl Into<Arg>, start: Option<Arg>, length: Option<Arg>) -> Result<Expr> {
    Ok(Op::with("substring", value)?
        .optional("start", start)?
        .optional("length", length)?
        .build())
}

/// Formats `values` into the `format` string (printf-style conversions).
///
/// With no values the `values` field is left out.
pub fn format<I>(format: impl Into<Arg>, values: I) -> Result<Expr>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    let values: Vec<Arg> = values.into_iter().map(Into::into).collect();
    let op = Op::with("format", format)?;
    if values.is_empty() {
        return Ok(op.build());
    }
    let values = normalize::operands("format", 1, values)?;
    Ok(op.expr("values", values).build())
}

unary_builders! {
    regex_escape => "regexescape";
    length => "length";
    lowercase => "lowercase";
    ltrim => "ltrim";
    rtrim => "rtrim";
    /// A string of `n` spaces.
    space => "space";
    titlecase => "titlecase";
    trim => "trim";
    uppercase => "uppercase";
}
