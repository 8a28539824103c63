//! Child list normalization
//!
//! Applied by `RawAdapter::get_children` at read time, in this order:
//!
//! 1. `concat_text_content`: collapse every primitive child into one string.
//! 2. `convert_to_string`: drop nulls, stringify every other primitive.
//! 3. otherwise `convert_multiple_raw_to_strings`: drop nulls, then stringify
//!    the primitives only if more than one is left.
//!
//! Element children are never touched or reordered.

use rawtree_core::{Primitive, Value};
use tracing::trace;

use crate::options::Options;

/// Normalize a child list according to `options`, returning a new list
pub fn normalize_children(children: &[Value], options: &Options) -> Vec<Value> {
    let mut result = children.to_vec();

    if options.concat_text_content {
        result = concat_text(result);
        trace!(len = result.len(), "concatenated text children");
    }

    if options.convert_to_string {
        result = drop_nulls(result);
        stringify_primitives(&mut result);
        trace!(len = result.len(), "converted children to strings");
    } else if options.convert_multiple_raw_to_strings {
        result = drop_nulls(result);
        let primitives = result.iter().filter(|child| child.is_primitive()).count();
        if primitives > 1 {
            stringify_primitives(&mut result);
        }
        trace!(primitives, "converted multiple raw children");
    }

    result
}

/// Join all primitive children into a single string placed where the first
/// primitive was. Nulls contribute nothing; if every primitive is null, no
/// string is emitted.
fn concat_text(children: Vec<Value>) -> Vec<Value> {
    let mut text: Option<String> = None;
    let mut text_index: Option<usize> = None;
    let mut result = Vec::with_capacity(children.len());

    for child in children {
        match child {
            Value::Primitive(p) => {
                text_index.get_or_insert(result.len());
                if !p.is_null() {
                    text.get_or_insert_with(String::new).push_str(&p.to_text());
                }
            }
            element => result.push(element),
        }
    }

    if let (Some(text), Some(index)) = (text, text_index) {
        result.insert(index, Value::Primitive(Primitive::String(text)));
    }
    result
}

fn drop_nulls(children: Vec<Value>) -> Vec<Value> {
    children
        .into_iter()
        .filter(|child| !matches!(child, Value::Primitive(Primitive::Null)))
        .collect()
}

fn stringify_primitives(children: &mut [Value]) {
    for child in children.iter_mut() {
        if let Value::Primitive(p) = child {
            *p = std::mem::take(p).into_string_primitive();
        }
    }
}
