//! The adapter contract any tree representation implements.

use crate::attributes::Attributes;
use crate::primitive::Primitive;
use crate::Result;

/// A child as reported by an adapter: either a node of the adapter's own tree
/// type or a primitive value.
#[derive(Debug, Clone, PartialEq)]
pub enum Child<N> {
    Node(N),
    Primitive(Primitive),
}

impl<N> Child<N> {
    pub fn as_node(&self) -> Option<&N> {
        match self {
            Child::Node(node) => Some(node),
            Child::Primitive(_) => None,
        }
    }

    /// Map the node variant, leaving primitives alone
    pub fn map<M, F>(self, f: F) -> Child<M>
    where
        F: FnOnce(N) -> M,
    {
        match self {
            Child::Node(node) => Child::Node(f(node)),
            Child::Primitive(p) => Child::Primitive(p),
        }
    }
}

/// Read access to a tree of `Self::Node` values.
///
/// Implementations may normalize what they return (e.g. coerce text); callers
/// converting a tree see exactly what the adapter reports.
pub trait TreeAdapter {
    type Node;

    /// The element name of `node`
    fn get_name(&self, node: &Self::Node) -> Result<String>;

    /// The attributes of `node`
    fn get_attributes(&self, node: &Self::Node) -> Result<Attributes>;

    /// The children of `node`, in order
    fn get_children(&self, node: &Self::Node) -> Result<Vec<Child<Self::Node>>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_map() {
        let child: Child<u32> = Child::Node(2);
        assert_eq!(child.map(|n| n * 2), Child::Node(4));

        let text: Child<u32> = Child::Primitive(Primitive::from("x"));
        assert_eq!(text.clone().map(|n| n * 2), Child::Primitive(Primitive::from("x")));
        assert_eq!(text.as_node(), None);
    }
}
