//! Element records and the raw element marker.

use std::ops::Deref;

use crate::attributes::{AttrValue, Attributes};
use crate::primitive::Primitive;
use crate::{Error, Result};

/// A plain element record: name, attributes and ordered children.
///
/// Having this shape does not make a value a raw element; see [`RawElement`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    /// Element name, e.g. `span`
    pub name: String,

    /// Named attributes
    pub attributes: Attributes,

    /// Child elements and primitives, in document order
    pub children: Vec<Value>,
}

impl Node {
    /// Create an element with no attributes and no children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style child append
    pub fn with_child(mut self, child: impl Into<Value>) -> Self {
        self.add_child(child);
        self
    }

    pub fn with_children<I, V>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Add a child
    pub fn add_child(&mut self, child: impl Into<Value>) {
        self.children.push(child.into());
    }

    /// Get only element children (raw or plain)
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(Value::as_node)
    }
}

/// A canonical raw element.
///
/// The type itself is the recognition marker: every `RawElement` was built
/// through [`RawElement::new`] or by an adapter conversion, never inferred from
/// a value's shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawElement(Node);

impl RawElement {
    pub fn new(node: Node) -> Self {
        RawElement(node)
    }

    pub fn as_node(&self) -> &Node {
        &self.0
    }

    pub fn into_node(self) -> Node {
        self.0
    }
}

impl Deref for RawElement {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.0
    }
}

impl From<Node> for RawElement {
    fn from(node: Node) -> Self {
        RawElement(node)
    }
}

/// Anything that can sit in a child list or be handed to an adapter
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A marked canonical element
    Raw(RawElement),
    /// An element-shaped record without the marker
    Plain(Node),
    /// Text, number, boolean or null
    Primitive(Primitive),
}

impl Value {
    /// True only for values carrying the raw element marker
    pub fn is_raw_element(&self) -> bool {
        matches!(self, Value::Raw(_))
    }

    /// True for raw and plain elements alike
    pub fn is_element(&self) -> bool {
        !self.is_primitive()
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Value::Primitive(_))
    }

    /// The element record, regardless of marker
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Raw(raw) => Some(raw.as_node()),
            Value::Plain(node) => Some(node),
            Value::Primitive(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&RawElement> {
        match self {
            Value::Raw(raw) => Some(raw),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Value::Primitive(p) => Some(p),
            _ => None,
        }
    }

    /// The element record, or `InvalidNode` for primitives
    pub fn try_node(&self) -> Result<&Node> {
        self.as_node().ok_or_else(|| {
            Error::InvalidNode(format!("expected an element, found primitive {:?}", self))
        })
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Primitive(Primitive::Null)
    }
}

impl From<RawElement> for Value {
    fn from(value: RawElement) -> Self {
        Value::Raw(value)
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Value::Plain(value)
    }
}

impl From<Primitive> for Value {
    fn from(value: Primitive) -> Self {
        Value::Primitive(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Primitive(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Primitive(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Primitive(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Primitive(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Primitive(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_node() {
        let node = Node::new("span")
            .with_attr("className", "foo")
            .with_child("Hello ")
            .with_child(Node::new("b").with_child("world"));

        assert_eq!(node.name, "span");
        assert_eq!(node.attr("className"), Some(&AttrValue::from("foo")));
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.element_children().count(), 1);
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut node = Node::new("div").with_attr("id", "a");
        node.set_attr("id", "b");
        assert_eq!(node.attributes.len(), 1);
        assert_eq!(node.attr("id").and_then(AttrValue::as_str), Some("b"));
    }

    #[test]
    fn test_plain_shape_is_not_raw() {
        let node = Node::new("span").with_attr("className", "foo");
        assert!(!Value::from(node.clone()).is_raw_element());
        assert!(Value::from(RawElement::new(node)).is_raw_element());
        assert!(!Value::from("span").is_raw_element());
    }

    #[test]
    fn test_raw_derefs_to_node() {
        let raw = RawElement::new(Node::new("div").with_child(42));
        assert_eq!(raw.name, "div");
        assert_eq!(raw.children, vec![Value::from(42)]);
    }

    #[test]
    fn test_value_accessors() {
        let raw = Value::from(RawElement::new(Node::new("div")));
        let plain = Value::from(Node::new("div"));
        let text = Value::from("t");

        assert_eq!(raw.as_raw().map(|r| r.name.as_str()), Some("div"));
        assert_eq!(plain.as_raw(), None);
        assert_eq!(raw.as_node(), plain.as_node());
        assert_eq!(text.as_primitive(), Some(&Primitive::from("t")));
        assert_eq!(raw.as_primitive(), None);
    }

    #[test]
    fn test_into_node_drops_marker() {
        let node = Node::new("div").with_attr("id", "a").with_child("x");
        let raw = RawElement::new(node.clone());
        assert!(Value::from(raw.clone()).is_raw_element());

        let unwrapped = raw.into_node();
        assert_eq!(unwrapped, node);
        assert!(!Value::from(unwrapped).is_raw_element());
    }

    #[test]
    fn test_try_node_on_primitive() {
        let err = Value::from(42).try_node().unwrap_err();
        assert!(matches!(err, Error::InvalidNode(_)));
        assert!(Value::from(Node::new("p")).try_node().is_ok());
    }
}
