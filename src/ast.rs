//! # Expression nodes and raw arguments
//!
//! This module defines the two sides of every builder call:
//!
//! - **[arg]** - [`Arg`], the raw inputs a caller hands to a builder
//! - **[expressions]** - [`Expr`], the immutable node a builder returns
//! - **[lambda]** - [`Func`], native functions used as lambda bodies
//!
//! ## Core Concepts
//!
//! An `Arg` is anything a caller may pass: a scalar, a list, a keyed
//! container, an expression that is already built, or a native function.
//! Builders normalize each `Arg` into an `Expr` and assemble the results
//! under a fixed operator tag.
//!
//! ```text
//! add(1, var("x"))   ->   {"add": [1, {"var": "x"}]}
//! ```
//!
//! ### Data vs. operations
//!
//! Keyed containers passed as data are always wrapped in an object literal,
//! so `{"add": 1}` given as data never reads as an `add` operation:
//!
//! ```text
//! object({"add": 1})   ->   {"object": {"add": 1}}
//! ```
//!
//! ### Lambdas
//!
//! A native function in a lambda position is called once at construction
//! time with one `Var` per declared parameter. Its return value becomes the
//! lambda body.
//!
//! ```text
//! map(coll, |x| add(x, 1))
//!   -> {"map": {"lambda": "_implicit0", "expr": {"add": [{"var": "_implicit0"}, 1]}},
//!       "collection": coll}
//! ```
pub mod arg;
pub mod expressions;
pub mod lambda;

pub use arg::Arg;
pub use expressions::{Expr, ExprKind};
pub use lambda::{Func, IntoFunc, func};

pub(crate) use expressions::Node;
