//! Document writes and schema creation.

use crate::{
    ast::{Arg, Expr},
    error::Result,
    normalize::{Op, unary},
};

/// Creates a document in `collection`; `params` may be left out.
pub fn create(collection: impl Into<Arg>, params: Option<Arg>) -> Result<Expr> {
    Ok(Op::with("create", collection)?
        .optional("params", params)?
        .build())
}

pub fn update(reference: impl Into<Arg>, params: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("update", reference)?.arg("params", params)?.build())
}

pub fn replace(reference: impl Into<Arg>, params: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("replace", reference)?.arg("params", params)?.build())
}

pub fn delete(reference: impl Into<Arg>) -> Result<Expr> {
    unary("delete", reference)
}

/// Adds an event to a document's history.
pub fn insert(
    reference: impl Into<Arg>,
    ts: impl Into<Arg>,
    action: impl Into<Arg>,
    params: impl Into<Arg>,
) -> Result<Expr> {
    Ok(Op::with("insert", reference)?
        .arg("ts", ts)?
        .arg("action", action)?
        .arg("params", params)?
        .build())
}

/// Removes an event from a document's history.
pub fn remove(
    reference: impl Into<Arg>,
    ts: impl Into<Arg>,
    action: impl Into<Arg>,
) -> Result<Expr> {
    Ok(Op::with("remove", reference)?
        .arg("ts", ts)?
        .arg("action", action)?
        .build())
}

pub fn move_database(from: impl Into<Arg>, to: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("move_database", from)?.arg("to", to)?.build())
}

unary_builders! {
    /// Deprecated alias of [`create_collection`].
    create_class => "create_class";
    create_collection => "create_collection";
    create_database => "create_database";
    create_index => "create_index";
    create_key => "create_key";
    create_function => "create_function";
    create_role => "create_role";
    create_access_provider => "create_access_provider";
}
