//! # rawtree
//!
//! Normalize element trees into one canonical "raw" shape and convert between
//! that shape and any other tree representation.
//!
//! ## Design
//!
//! Any tree type can take part by implementing [`TreeAdapter`]: three reads
//! returning a node's name, attributes and children. [`RawAdapter`] is that
//! contract for the raw shape itself, with configurable child normalization,
//! plus conversion in both directions:
//!
//! - **serialize**: read a foreign tree through its adapter into [`RawElement`]s
//! - **deserialize**: rebuild a raw or plain element as a [`RawElement`] tree,
//!   flagging function attributes as deserialized wrappers
//!
//! Raw elements are recognized by type ([`Value::Raw`]), never by shape.
//!
//! ## Example
//!
//! ```rust
//! use rawtree::{Node, OptionsUpdate, RawAdapter, Value};
//!
//! let mut adapter = RawAdapter::new();
//! adapter.set_options(OptionsUpdate::new().concat_text_content(true));
//!
//! let tree = Value::from(Node::new("span").with_child("Hello ").with_child(42));
//! assert_eq!(adapter.get_children(&tree).unwrap(), vec![Value::from("Hello 42")]);
//!
//! let raw = adapter.deserialize(&tree).unwrap();
//! assert!(adapter.is_raw_element(&Value::from(raw)));
//! ```

mod convert;
mod normalize;
mod options;
mod raw;

pub use normalize::normalize_children;
pub use options::{Options, OptionsUpdate};
pub use raw::{RawAdapter, CLASS_ATTRIBUTE_NAME};
pub use rawtree_core::{
    AttrValue, Attributes, Callable, Child, Error, Node, Primitive, RawElement, Result,
    TreeAdapter, Value,
};
