//! Equality, containment and path selection.

use crate::{
    ast::{Arg, Expr},
    error::Result,
    normalize::Op,
};

/// Deprecated form of [`contains_path`].
pub fn contains(path: impl Into<Arg>, within: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("contains", path)?.arg("in", within)?.build())
}

pub fn contains_path(path: impl Into<Arg>, within: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("contains_path", path)?.arg("in", within)?.build())
}

pub fn contains_field(field: impl Into<Arg>, within: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("contains_field", field)?.arg("in", within)?.build())
}

pub fn contains_value(value: impl Into<Arg>, within: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("contains_value", value)?.arg("in", within)?.build())
}

/// Extracts the value at `path` from `from`.
///
/// Without `default`, a missing path is an error on the engine side; with
/// it, the default is returned instead.
pub fn select(path: impl Into<Arg>, from: impl Into<Arg>, default: Option<Arg>) -> Result<Expr> {
    Ok(Op::with("select", path)?
        .arg("from", from)?
        .optional("default", default)?
        .build())
}

pub fn select_all(path: impl Into<Arg>, from: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("select_all", path)?.arg("from", from)?.build())
}

variadic_builders! {
    /// True when all values are equal.
    equals => "equals";
}
