//! References to schema documents and their listings.
//!
//! The single-document forms take a `name` plus an optional `scope`
//! (a database reference). The listings take only the optional scope; with
//! none the tag carries `null`.

use crate::{
    ast::{Arg, Expr},
    error::Result,
    normalize::{Op, unary},
};

/// A fresh unique id.
pub fn new_id() -> Expr {
    Op::nullary("new_id").build()
}

/// Deprecated alias of [`new_id`].
pub fn next_id() -> Expr {
    Op::nullary("next_id").build()
}

fn scoped(tag: &'static str, name: impl Into<Arg>, scope: Option<Arg>) -> Result<Expr> {
    Ok(Op::with(tag, name)?.optional("scope", scope)?.build())
}

fn listing(tag: &'static str, scope: Option<Arg>) -> Result<Expr> {
    match scope {
        Some(scope) => unary(tag, scope),
        None => Ok(Op::nullary(tag).build()),
    }
}

pub fn database(name: impl Into<Arg>, scope: Option<Arg>) -> Result<Expr> {
    scoped("database", name, scope)
}

pub fn index(name: impl Into<Arg>, scope: Option<Arg>) -> Result<Expr> {
    scoped("index", name, scope)
}

/// Deprecated alias of [`collection`].
pub fn class(name: impl Into<Arg>, scope: Option<Arg>) -> Result<Expr> {
    scoped("class", name, scope)
}

pub fn collection(name: impl Into<Arg>, scope: Option<Arg>) -> Result<Expr> {
    scoped("collection", name, scope)
}

pub fn function(name: impl Into<Arg>, scope: Option<Arg>) -> Result<Expr> {
    scoped("function", name, scope)
}

pub fn role(name: impl Into<Arg>, scope: Option<Arg>) -> Result<Expr> {
    scoped("role", name, scope)
}

pub fn access_provider(name: impl Into<Arg>, scope: Option<Arg>) -> Result<Expr> {
    scoped("access_provider", name, scope)
}

pub fn databases(scope: Option<Arg>) -> Result<Expr> {
    listing("databases", scope)
}

pub fn indexes(scope: Option<Arg>) -> Result<Expr> {
    listing("indexes", scope)
}

pub fn classes(scope: Option<Arg>) -> Result<Expr> {
    listing("classes", scope)
}

pub fn collections(scope: Option<Arg>) -> Result<Expr> {
    listing("collections", scope)
}

pub fn functions(scope: Option<Arg>) -> Result<Expr> {
    listing("functions", scope)
}

pub fn roles(scope: Option<Arg>) -> Result<Expr> {
    listing("roles", scope)
}

pub fn keys(scope: Option<Arg>) -> Result<Expr> {
    listing("keys", scope)
}

pub fn tokens(scope: Option<Arg>) -> Result<Expr> {
    listing("tokens", scope)
}

pub fn credentials(scope: Option<Arg>) -> Result<Expr> {
    listing("credentials", scope)
}

pub fn access_providers(scope: Option<Arg>) -> Result<Expr> {
    listing("access_providers", scope)
}
