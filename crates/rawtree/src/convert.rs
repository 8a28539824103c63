//! Conversion between foreign trees and raw elements

use rawtree_core::{AttrValue, Attributes, Child, Node, RawElement, Result, TreeAdapter, Value};

/// Read `node` through `adapter` and build a raw element tree from it.
///
/// Whatever normalization the foreign adapter applies in its own reads is
/// kept. Every element at every depth is marked raw.
pub fn serialize<A>(adapter: &A, node: &A::Node) -> Result<RawElement>
where
    A: TreeAdapter + ?Sized,
{
    let name = adapter.get_name(node)?;
    let attributes = adapter.get_attributes(node)?;
    let children = adapter
        .get_children(node)?
        .into_iter()
        .map(|child| match child {
            Child::Node(child) => serialize(adapter, &child).map(Value::Raw),
            Child::Primitive(p) => Ok(Value::Primitive(p)),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RawElement::new(Node {
        name,
        attributes,
        children,
    }))
}

/// Rebuild `node` as a raw element tree, wrapping function attributes.
pub fn deserialize(node: &Node) -> RawElement {
    let children = node
        .children
        .iter()
        .map(|child| match child.as_node() {
            Some(element) => Value::Raw(deserialize(element)),
            None => child.clone(),
        })
        .collect();

    RawElement::new(Node {
        name: node.name.clone(),
        attributes: wrap_functions(&node.attributes),
        children,
    })
}

fn wrap_functions(attributes: &Attributes) -> Attributes {
    attributes
        .iter()
        .map(|(key, value)| {
            let value = match value {
                AttrValue::Function(f) => AttrValue::Function(f.deserialized_wrapper()),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}
