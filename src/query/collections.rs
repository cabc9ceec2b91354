use crate::{
    ast::{Arg, Expr},
    error::Result,
    normalize::Op,
};

/// Applies `lambda` to every element of `collection`.
pub fn map(collection: impl Into<Arg>, lambda: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with_lambda("map", lambda)?
        .arg("collection", collection)?
        .build())
}

/// Like [`map`], for side effects; yields the original collection.
pub fn foreach(collection: impl Into<Arg>, lambda: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with_lambda("foreach", lambda)?
        .arg("collection", collection)?
        .build())
}

/// Keeps the elements for which `lambda` returns true.
pub fn filter(collection: impl Into<Arg>, lambda: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with_lambda("filter", lambda)?
        .arg("collection", collection)?
        .build())
}

pub fn take(number: impl Into<Arg>, collection: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("take", number)?.arg("collection", collection)?.build())
}

pub fn drop(number: impl Into<Arg>, collection: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("drop", number)?.arg("collection", collection)?.build())
}

pub fn prepend(elements: impl Into<Arg>, collection: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("prepend", elements)?
        .arg("collection", collection)?
        .build())
}

pub fn append(elements: impl Into<Arg>, collection: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("append", elements)?
        .arg("collection", collection)?
        .build())
}

unary_builders! {
    is_empty => "is_empty";
    is_nonempty => "is_nonempty";
    /// Reverses an array, page or set.
    reverse => "reverse";
}
