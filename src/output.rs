//! Wire serialization for expression trees.
//!
//! An [`Expr`] serializes to the JSON document the remote engine expects:
//!
//! - **Literals** map to JSON scalars; integers and floats stay distinct
//! - **Bytes** become `{"@bytes": "<base64>"}`
//! - **Arrays** map to JSON arrays
//! - **Object literals** become `{"object": {...}}` with sorted keys
//! - **Operations** become a JSON object whose first key is the operator tag
//!
//! # Examples
//!
//! ```
//! use fql_builder::q;
//! use fql_builder::output::{to_json, to_json_pretty};
//!
//! let expr = q::if_(true, "a", "b").unwrap();
//!
//! assert_eq!(to_json(&expr), r#"{"if":true,"then":"a","else":"b"}"#);
//! assert!(to_json_pretty(&expr).contains("\n  \"then\": \"a\""));
//! ```

use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{
    ast::{Expr, Node},
    value::Literal,
};

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Literal::Null => serializer.serialize_unit(),
            Literal::Boolean(b) => serializer.serialize_bool(*b),
            Literal::Integer(n) => serializer.serialize_i64(*n),
            Literal::Float(n) => serializer.serialize_f64(*n),
            Literal::String(s) => serializer.serialize_str(s),
            Literal::Bytes(data) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("@bytes", &STANDARD.encode(data))?;
                map.end()
            }
        }
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.node() {
            Node::Literal(lit) => lit.serialize(serializer),
            Node::Array(items) => serializer.collect_seq(items),
            Node::Object(fields) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("object", fields)?;
                map.end()
            }
            Node::Binding(name, value) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(name, value)?;
                map.end()
            }
            Node::Op(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}

impl Expr {
    /// Serializes the tree into the JSON value handed to the transport.
    ///
    /// Keys keep the same order as [`to_json`], the operator tag first.
    pub fn to_wire(&self) -> serde_json::Value {
        // Keys are always strings and floats never fail, so this cannot error
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Compact JSON, as sent over the wire.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Converts an expression to a compact JSON string.
///
/// Field order follows construction order: the operator tag first, then its
/// operands. Object literal keys are sorted.
pub fn to_json(expr: &Expr) -> String {
    expr.to_string()
}

/// Converts an expression to pretty-printed JSON with 2-space indentation.
pub fn to_json_pretty(expr: &Expr) -> String {
    serde_json::to_string_pretty(expr).unwrap_or_default()
}
