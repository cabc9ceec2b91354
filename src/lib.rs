pub mod ast;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod normalize;
pub mod output;
pub mod query;
pub mod value;

pub use ast::{Arg, Expr, ExprKind, Func, IntoFunc, func};
pub use error::BuildError;
pub use output::{to_json, to_json_pretty};
pub use query as q;
pub use value::{Bytes, Literal};
