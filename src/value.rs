use rust_decimal::{Decimal, prelude::ToPrimitive};

/// A scalar literal carried by an expression node.
///
/// Integers and floats stay distinct so that `1` and `1.0` reach the wire
/// exactly as the caller wrote them.
///
/// # Examples
///
/// ```
/// use fql_builder::Literal;
///
/// let null = Literal::Null;
/// let integer = Literal::Integer(42);
/// let string = Literal::String("hello".to_string());
///
/// assert_eq!(null.type_name(), "null");
/// assert_eq!(integer.type_name(), "integer");
/// assert_eq!(string.type_name(), "string");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// UTF-8 string
    String(String),

    /// Raw byte sequence, emitted as a distinguished bytes literal
    Bytes(Vec<u8>),
}

impl Literal {
    /// Returns a short name for the literal's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::Null => "null",
            Literal::Boolean(_) => "boolean",
            Literal::Integer(_) => "integer",
            Literal::Float(_) => "float",
            Literal::String(_) => "string",
            Literal::Bytes(_) => "bytes",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }
}

/// A byte buffer meant as data.
///
/// Wrapping the bytes keeps them apart from a list of small integers: a
/// `Bytes` value normalizes to a bytes literal, a `Vec<i64>` to an array.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bytes(pub Vec<u8>);

impl From<Vec<u8>> for Bytes {
    fn from(data: Vec<u8>) -> Self {
        Bytes(data)
    }
}

impl From<&[u8]> for Bytes {
    fn from(data: &[u8]) -> Self {
        Bytes(data.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Bytes {
    fn from(data: [u8; N]) -> Self {
        Bytes(data.to_vec())
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Integer(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Integer(n.into())
    }
}

impl From<u32> for Literal {
    fn from(n: u32) -> Self {
        Literal::Integer(n.into())
    }
}

impl From<usize> for Literal {
    fn from(n: usize) -> Self {
        // Beyond i64::MAX a count can only be carried as a float
        match i64::try_from(n) {
            Ok(n) => Literal::Integer(n),
            Err(_) => Literal::Float(n as f64),
        }
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Float(n)
    }
}

impl From<f32> for Literal {
    fn from(n: f32) -> Self {
        Literal::Float(n.into())
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<Bytes> for Literal {
    fn from(b: Bytes) -> Self {
        Literal::Bytes(b.0)
    }
}

/// Whole decimals that fit an `i64` stay integers; everything else becomes a float.
impl From<Decimal> for Literal {
    fn from(d: Decimal) -> Self {
        if d.fract().is_zero() {
            if let Some(n) = d.to_i64() {
                return Literal::Integer(n);
            }
        }
        d.to_f64().map(Literal::Float).unwrap_or(Literal::Null)
    }
}
