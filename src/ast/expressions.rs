use std::{collections::BTreeMap, sync::Arc};

use crate::value::Literal;

/// Internal representation of an expression node.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    /// Scalar or bytes literal
    Literal(Literal),

    /// Ordered sequence of nested expressions
    Array(Vec<Expr>),

    /// Object literal; emitted under the `object` marker
    Object(BTreeMap<String, Expr>),

    /// One `name: value` entry of a let-binding list
    Binding(String, Expr),

    /// Tagged operation. The first field is the operator tag, the rest are
    /// named operands in declaration order.
    Op(Vec<(&'static str, Expr)>),
}

/// The coarse shape of an expression, for callers that need to inspect a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprKind {
    Literal,
    Array,
    Object,
    Binding,
    Operation,
}

/// An immutable expression node.
///
/// Cloning is cheap: nodes share their children, and nothing ever mutates a
/// node after construction, so the same `Expr` can be embedded in any number
/// of parent trees.
///
/// # Examples
///
/// ```
/// use fql_builder::{q, ExprKind};
///
/// let sum = q::add([1, 2]).unwrap();
/// assert_eq!(sum.kind(), ExprKind::Operation);
/// assert_eq!(sum.tag(), Some("add"));
/// assert_eq!(sum.to_string(), r#"{"add":[1,2]}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr(Arc<Node>);

impl Expr {
    pub(crate) fn from_node(node: Node) -> Self {
        Expr(Arc::new(node))
    }

    pub(crate) fn node(&self) -> &Node {
        &self.0
    }

    pub(crate) fn literal(literal: Literal) -> Self {
        Expr::from_node(Node::Literal(literal))
    }

    pub(crate) fn null() -> Self {
        Expr::literal(Literal::Null)
    }

    pub(crate) fn string(s: impl Into<String>) -> Self {
        Expr::literal(Literal::String(s.into()))
    }

    pub(crate) fn array(items: Vec<Expr>) -> Self {
        Expr::from_node(Node::Array(items))
    }

    pub(crate) fn object(fields: BTreeMap<String, Expr>) -> Self {
        Expr::from_node(Node::Object(fields))
    }

    pub(crate) fn binding(name: String, value: Expr) -> Self {
        Expr::from_node(Node::Binding(name, value))
    }

    pub(crate) fn op(fields: Vec<(&'static str, Expr)>) -> Self {
        Expr::from_node(Node::Op(fields))
    }

    pub fn kind(&self) -> ExprKind {
        match self.node() {
            Node::Literal(_) => ExprKind::Literal,
            Node::Array(_) => ExprKind::Array,
            Node::Object(_) => ExprKind::Object,
            Node::Binding(..) => ExprKind::Binding,
            Node::Op(_) => ExprKind::Operation,
        }
    }

    /// Operator tag of an operation node; `None` for data nodes.
    pub fn tag(&self) -> Option<&'static str> {
        match self.node() {
            Node::Op(fields) => fields.first().map(|(tag, _)| *tag),
            _ => None,
        }
    }

    /// Looks up a named operand of an operation node (the tag included).
    pub fn field(&self, name: &str) -> Option<&Expr> {
        match self.node() {
            Node::Op(fields) => fields.iter().find(|(k, _)| *k == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Field names of an operation node, in wire order.
    pub fn field_names(&self) -> Vec<&'static str> {
        match self.node() {
            Node::Op(fields) => fields.iter().map(|(k, _)| *k).collect(),
            _ => Vec::new(),
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self.node() {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Elements of an array node.
    pub fn elements(&self) -> Option<&[Expr]> {
        match self.node() {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Fields of an object literal.
    pub fn object_fields(&self) -> Option<&BTreeMap<String, Expr>> {
        match self.node() {
            Node::Object(fields) => Some(fields),
            _ => None,
        }
    }
}
