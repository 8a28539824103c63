//! RawAdapter - the main entry point for reading and converting raw trees.

use rawtree_core::{Attributes, Child, RawElement, Result, TreeAdapter, Value};
use tracing::debug;

use crate::convert;
use crate::normalize::normalize_children;
use crate::options::{Options, OptionsUpdate};

/// Attribute name carrying an element's style class
pub const CLASS_ATTRIBUTE_NAME: &str = "className";

/// Reads raw element trees and converts other trees into them
#[derive(Debug, Clone, Default)]
pub struct RawAdapter {
    options: Options,
}

impl RawAdapter {
    /// Create a new RawAdapter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RawAdapter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Merge `update` into the current options.
    ///
    /// Keys not present in `update` keep their previous value.
    pub fn set_options(&mut self, update: OptionsUpdate) -> &mut Self {
        self.options = self.options.merged(&update);
        debug!(options = ?self.options, "options updated");
        self
    }

    pub fn get_options(&self) -> &Options {
        &self.options
    }

    /// The attribute name used for style classes, independent of options
    pub fn class_attribute_name(&self) -> &'static str {
        CLASS_ATTRIBUTE_NAME
    }

    /// The element name of `node`
    pub fn get_name<'a>(&self, node: &'a Value) -> Result<&'a str> {
        Ok(&node.try_node()?.name)
    }

    /// The attributes of `node`, as stored
    pub fn get_attributes<'a>(&self, node: &'a Value) -> Result<&'a Attributes> {
        Ok(&node.try_node()?.attributes)
    }

    /// The children of `node`, normalized according to the current options
    pub fn get_children(&self, node: &Value) -> Result<Vec<Value>> {
        let node = node.try_node()?;
        Ok(normalize_children(&node.children, &self.options))
    }

    /// Check whether `value` carries the raw element marker
    pub fn is_raw_element(&self, value: &Value) -> bool {
        value.is_raw_element()
    }

    /// Convert a foreign tree, read through `adapter`, into a raw element
    pub fn serialize<A>(&self, adapter: &A, node: &A::Node) -> Result<RawElement>
    where
        A: TreeAdapter + ?Sized,
    {
        let raw = convert::serialize(adapter, node)?;
        debug!(name = %raw.name, children = raw.children.len(), "serialized tree");
        Ok(raw)
    }

    /// Rebuild an element (raw or plain) as a raw element tree.
    ///
    /// Function attributes come back flagged as deserialized wrappers.
    pub fn deserialize(&self, node: &Value) -> Result<RawElement> {
        let raw = convert::deserialize(node.try_node()?);
        debug!(name = %raw.name, children = raw.children.len(), "deserialized tree");
        Ok(raw)
    }
}

impl TreeAdapter for RawAdapter {
    type Node = Value;

    fn get_name(&self, node: &Value) -> Result<String> {
        RawAdapter::get_name(self, node).map(str::to_string)
    }

    fn get_attributes(&self, node: &Value) -> Result<Attributes> {
        RawAdapter::get_attributes(self, node).cloned()
    }

    fn get_children(&self, node: &Value) -> Result<Vec<Child<Value>>> {
        let children = RawAdapter::get_children(self, node)?;
        Ok(children
            .into_iter()
            .map(|child| match child {
                Value::Primitive(p) => Child::Primitive(p),
                element => Child::Node(element),
            })
            .collect())
    }
}
