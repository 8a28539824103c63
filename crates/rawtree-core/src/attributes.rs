//! Attribute values, including nested objects and callables.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::primitive::Primitive;

/// Named attributes of an element. Equality ignores insertion order.
pub type Attributes = IndexMap<String, AttrValue>;

type CallableFn = dyn Fn(&[AttrValue]) -> AttrValue + Send + Sync;

/// A function-valued attribute.
///
/// Cloning shares the underlying function. A callable produced by
/// deserialization carries the `is_deserialized_wrapper` marker, which lets a
/// round-tripped tree be told apart from one whose functions were never
/// converted.
#[derive(Clone)]
pub struct Callable {
    func: Arc<CallableFn>,
    is_deserialized_wrapper: bool,
}

impl Callable {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[AttrValue]) -> AttrValue + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            is_deserialized_wrapper: false,
        }
    }

    /// Invoke the wrapped function
    pub fn call(&self, args: &[AttrValue]) -> AttrValue {
        (self.func)(args)
    }

    pub fn is_deserialized_wrapper(&self) -> bool {
        self.is_deserialized_wrapper
    }

    /// Wrap this function with the deserialized marker set.
    ///
    /// The wrapper calls the same function; wrapping twice is a no-op.
    pub fn deserialized_wrapper(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
            is_deserialized_wrapper: true,
        }
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("is_deserialized_wrapper", &self.is_deserialized_wrapper)
            .finish_non_exhaustive()
    }
}

/// The value of a single attribute
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttrValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Object(Attributes),
    Function(Callable),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Attributes> {
        match self {
            AttrValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Callable> {
        match self {
            AttrValue::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Build an object value from key/value pairs
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        AttrValue::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<Primitive> for AttrValue {
    fn from(value: Primitive) -> Self {
        match value {
            Primitive::Null => AttrValue::Null,
            Primitive::Bool(b) => AttrValue::Bool(b),
            Primitive::Number(n) => AttrValue::Number(n),
            Primitive::String(s) => AttrValue::String(s),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(f64::from(value))
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<Attributes> for AttrValue {
    fn from(value: Attributes) -> Self {
        AttrValue::Object(value)
    }
}

impl From<Callable> for AttrValue {
    fn from(value: Callable) -> Self {
        AttrValue::Function(value)
    }
}
