//! # Query builders
//!
//! One function per query-language function. Every builder normalizes its
//! arguments through [`crate::normalize`] and returns an immutable [`Expr`].
//!
//! The module is re-exported at the crate root as `q`:
//!
//! ```
//! use fql_builder::{args, q};
//!
//! let expr = q::if_(
//!     q::gt(args![q::var("age"), 17]),
//!     "adult",
//!     "minor",
//! ).unwrap();
//!
//! assert_eq!(
//!     expr.to_string(),
//!     r#"{"if":{"gt":[{"var":"age"},17]},"then":"adult","else":"minor"}"#
//! );
//! ```
//!
//! ## Conventions
//!
//! - Value parameters take `impl Into<Arg>`; nested builder results can be
//!   passed directly, errors included
//! - Variadic parameters take any iterator of values (see [`crate::args!`])
//! - Trailing optional parameters take `Option<Arg>`: `None` leaves the field
//!   out of the node, `Some(Arg::null())` sends an explicit null
//! - Names that collide with Rust keywords carry a trailing underscore
//!   (`if_`, `let_`, `do_`, `match_`, `ref_`)
//!
//! [`Expr`]: crate::Expr

/// Builders of the form `{"tag": value}`.
macro_rules! unary_builders {
    ($($(#[$meta:meta])* $name:ident => $tag:literal;)+) => {
        $(
            $(#[$meta])*
            pub fn $name(value: impl Into<$crate::Arg>) -> $crate::error::Result<$crate::Expr> {
                $crate::normalize::unary($tag, value)
            }
        )+
    };
}

/// Builders of the form `{"tag": [values...]}`, requiring at least one value.
macro_rules! variadic_builders {
    ($($(#[$meta:meta])* $name:ident => $tag:literal;)+) => {
        $(
            $(#[$meta])*
            pub fn $name<I>(values: I) -> $crate::error::Result<$crate::Expr>
            where
                I: IntoIterator,
                I::Item: Into<$crate::Arg>,
            {
                $crate::normalize::variadic($tag, values)
            }
        )+
    };
}

pub mod auth;
pub mod basic;
pub mod collections;
pub mod logic;
pub mod math;
pub mod objects;
pub mod read;
pub mod schema;
pub mod sets;
pub mod strings;
pub mod time;
pub mod types;
pub mod write;

pub use auth::*;
pub use basic::*;
pub use collections::*;
pub use logic::*;
pub use math::*;
pub use objects::*;
pub use read::*;
pub use schema::*;
pub use sets::*;
pub use strings::*;
pub use time::*;
pub use types::*;
pub use write::*;
