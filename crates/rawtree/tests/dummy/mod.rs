//! A foreign tree format for exercising conversion.
//!
//! Structurally the same as the raw shape, but every field is `x_`-prefixed
//! and lives in its own types, so nothing about it is a raw element.

use rawtree::{Attributes, Child, Node, Primitive, Result, TreeAdapter, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct DummyElement {
    pub x_type: String,
    pub x_props: Attributes,
    pub x_children: Vec<DummyChild>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DummyChild {
    Element(DummyElement),
    Native(Primitive),
}

#[derive(Debug, Default)]
pub struct DummyAdapter;

impl DummyAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Turn a node and all its children into dummy elements
    pub fn make_dummy(&self, node: &Node) -> DummyElement {
        DummyElement {
            x_type: node.name.clone(),
            x_props: node.attributes.clone(),
            x_children: node
                .children
                .iter()
                .map(|child| match child {
                    Value::Primitive(p) => DummyChild::Native(p.clone()),
                    Value::Raw(raw) => DummyChild::Element(self.make_dummy(raw)),
                    Value::Plain(node) => DummyChild::Element(self.make_dummy(node)),
                })
                .collect(),
        }
    }
}

impl TreeAdapter for DummyAdapter {
    type Node = DummyElement;

    fn get_name(&self, node: &DummyElement) -> Result<String> {
        Ok(node.x_type.clone())
    }

    fn get_attributes(&self, node: &DummyElement) -> Result<Attributes> {
        Ok(node.x_props.clone())
    }

    fn get_children(&self, node: &DummyElement) -> Result<Vec<Child<DummyElement>>> {
        Ok(node
            .x_children
            .iter()
            .map(|child| match child {
                DummyChild::Element(element) => Child::Node(element.clone()),
                DummyChild::Native(p) => Child::Primitive(p.clone()),
            })
            .collect())
    }
}
