//! rawtree-core - canonical element model and adapter contract
//!
//! This crate defines the "raw" tree shape shared by every adapter: an element
//! name, a map of named attributes, and an ordered list of children that are
//! either elements or primitive values. It also defines [`TreeAdapter`], the
//! three-method contract any foreign tree type implements to be converted into
//! the raw shape.
//!
//! # Raw vs plain
//!
//! A [`Node`] is only a structural record. A value counts as a canonical raw
//! element when it is a [`RawElement`], which only the construction paths of
//! this crate and the `rawtree` adapter produce:
//!
//! ```text
//! Value::Raw(RawElement)    ── is_raw_element() == true
//! Value::Plain(Node)        ── same shape, is_raw_element() == false
//! Value::Primitive(..)      ── text, number, boolean, null
//! ```
//!
//! # Example
//!
//! ```rust
//! use rawtree_core::{Node, RawElement, Value};
//!
//! let node = Node::new("span").with_attr("className", "foo").with_child("hello");
//! assert!(!Value::from(node.clone()).is_raw_element());
//! assert!(Value::from(RawElement::new(node)).is_raw_element());
//! ```

mod adapter;
mod attributes;
mod node;
mod primitive;

pub use adapter::{Child, TreeAdapter};
pub use attributes::{AttrValue, Attributes, Callable};
pub use node::{Node, RawElement, Value};
pub use primitive::Primitive;

/// Error type for raw tree operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    #[error("Adapter error: {0}")]
    Adapter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
