use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use crate::{
    ast::{Expr, Func},
    error::BuildError,
    value::{Bytes, Literal},
};

/// A raw argument handed to a builder function.
///
/// This is the closed set of shapes a caller can pass. Every builder runs
/// its arguments through the normalizer, which matches on these variants
/// to produce an [`Expr`].
#[derive(Debug)]
pub enum Arg {
    /// Plain scalar (or bytes) meant as data
    Literal(Literal),

    /// Ordered list meant as data; elements are normalized recursively
    Array(Vec<Arg>),

    /// Keyed container meant as data; always emitted as an object literal
    Object(Vec<(String, Arg)>),

    /// Already-built expression, passed through unchanged
    Expr(Expr),

    /// Native function, only valid in lambda positions
    Function(Func),

    /// A nested builder call that already failed
    Failed(BuildError),
}

impl Arg {
    /// An explicit null, distinct from leaving an optional argument out.
    pub fn null() -> Self {
        Arg::Literal(Literal::Null)
    }

    /// Builds a keyed container from name/value pairs.
    ///
    /// Normalization sorts the keys; when a name repeats, the last value wins.
    pub fn object<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Arg>,
    {
        Arg::Object(fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Literal(lit) => lit.type_name(),
            Arg::Array(_) => "array",
            Arg::Object(_) => "object",
            Arg::Expr(_) => "expression",
            Arg::Function(_) => "function",
            Arg::Failed(_) => "failed expression",
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Arg::Function(_))
    }
}

/// Builds a `Vec<Arg>` from heterogeneous values.
///
/// # Examples
///
/// ```
/// use fql_builder::{args, q};
///
/// let sum = q::add(args![1, 2.5, q::var("x")]).unwrap();
/// assert_eq!(sum.to_string(), r#"{"add":[1,2.5,{"var":"x"}]}"#);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),+]
    };
}

impl From<Literal> for Arg {
    fn from(lit: Literal) -> Self {
        Arg::Literal(lit)
    }
}

macro_rules! literal_from {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Arg {
                fn from(v: $ty) -> Self {
                    Arg::Literal(Literal::from(v))
                }
            }
        )+
    };
}

literal_from!(bool, i32, i64, u32, usize, f32, f64, &str, String, Bytes, Decimal);

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Literal(Literal::String(s.clone()))
    }
}

impl From<()> for Arg {
    fn from(_: ()) -> Self {
        Arg::null()
    }
}

impl From<Expr> for Arg {
    fn from(expr: Expr) -> Self {
        Arg::Expr(expr)
    }
}

impl From<&Expr> for Arg {
    fn from(expr: &Expr) -> Self {
        Arg::Expr(expr.clone())
    }
}

impl From<Func> for Arg {
    fn from(f: Func) -> Self {
        Arg::Function(f)
    }
}

impl From<BuildError> for Arg {
    fn from(err: BuildError) -> Self {
        Arg::Failed(err)
    }
}

/// Lets builder calls nest without unwrapping each level; a failure is
/// reported when the enclosing builder normalizes it.
impl<T: Into<Arg>> From<Result<T, BuildError>> for Arg {
    fn from(result: Result<T, BuildError>) -> Self {
        match result {
            Ok(v) => v.into(),
            Err(err) => Arg::Failed(err),
        }
    }
}

/// `None` is an explicit null here. Optional builder parameters use
/// `Option<Arg>` directly, where `None` means "leave the field out".
impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Arg::null(),
        }
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(items: Vec<T>) -> Self {
        Arg::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Arg>, const N: usize> From<[T; N]> for Arg {
    fn from(items: [T; N]) -> Self {
        Arg::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Arg>> From<BTreeMap<K, V>> for Arg {
    fn from(map: BTreeMap<K, V>) -> Self {
        Arg::object(map)
    }
}

impl<K: Into<String>, V: Into<Arg>> From<HashMap<K, V>> for Arg {
    fn from(map: HashMap<K, V>) -> Self {
        Arg::object(map)
    }
}

impl From<serde_json::Value> for Arg {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Arg::null(),
            serde_json::Value::Bool(b) => b.into(),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Arg::Literal(Literal::Integer(i))
                } else {
                    n.as_f64()
                        .map(|f| Arg::Literal(Literal::Float(f)))
                        .unwrap_or_else(Arg::null)
                }
            }
            serde_json::Value::String(s) => s.into(),
            serde_json::Value::Array(arr) => Arg::Array(arr.into_iter().map(Arg::from).collect()),
            serde_json::Value::Object(obj) => Arg::object(obj),
        }
    }
}
