use crate::{
    ast::{Arg, Expr},
    error::Result,
    normalize::{Op, unary},
};

pub fn login(reference: impl Into<Arg>, params: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("login", reference)?.arg("params", params)?.build())
}

/// Ends the current session; `all_tokens` also revokes every other token.
pub fn logout(all_tokens: impl Into<Arg>) -> Result<Expr> {
    unary("logout", all_tokens)
}

pub fn identify(reference: impl Into<Arg>, password: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("identify", reference)?
        .arg("password", password)?
        .build())
}

pub fn identity() -> Expr {
    Op::nullary("identity").build()
}

pub fn current_identity() -> Expr {
    Op::nullary("current_identity").build()
}

pub fn has_identity() -> Expr {
    Op::nullary("has_identity").build()
}

pub fn has_current_identity() -> Expr {
    Op::nullary("has_current_identity").build()
}

pub fn current_token() -> Expr {
    Op::nullary("current_token").build()
}

pub fn has_current_token() -> Expr {
    Op::nullary("has_current_token").build()
}
