//! Opaque node shapes.
//!
//! A [`Composite`] stands in for any node kind the AST does not model:
//! wrapper nodes, notes, directives, or kinds a newer parser might add. It
//! keeps the node's fields as [`Value`]s so elements nested anywhere inside
//! it stay reachable.

use indexmap::IndexMap;

use crate::ast::Element;

/// An unrecognized node with named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    kind: String,
    fields: IndexMap<String, Value>,
}

impl Composite {
    /// Create a new Composite with no fields.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: IndexMap::new(),
        }
    }

    /// Append a field, keeping insertion order.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The node kind as reported by the parser.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Iterate over fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// A field value inside a [`Composite`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Element(Box<Element>),
    List(Vec<Value>),
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        Value::Element(Box::new(element))
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values)
    }
}

impl From<Vec<Element>> for Value {
    fn from(elements: Vec<Element>) -> Self {
        Value::List(elements.into_iter().map(Value::from).collect())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Scalar(Scalar::Text(text.to_string()))
    }
}

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}
