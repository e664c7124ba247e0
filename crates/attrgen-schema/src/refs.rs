//! `$ref` expansion for local JSON pointers.

use serde_json::{Map, Value};

use crate::error::{Result, SchemaError};

const REF_KEY: &str = "$ref";

/// Return a copy of `document` with every `{"$ref": "#/..."}` object
/// replaced by the (recursively expanded) node it points to.
///
/// Sibling keys of a `$ref` are dropped, the same as a plain JSON reference
/// proxy would. Only document-local references are supported.
pub fn resolve_refs(document: &Value) -> Result<Value> {
    let mut stack = Vec::new();
    expand(document, document, &mut stack)
}

fn expand(root: &Value, node: &Value, stack: &mut Vec<String>) -> Result<Value> {
    match node {
        Value::Object(map) => match map.get(REF_KEY) {
            Some(Value::String(reference)) => follow(root, reference, stack),
            _ => {
                let mut expanded = Map::with_capacity(map.len());
                for (key, value) in map {
                    expanded.insert(key.clone(), expand(root, value, stack)?);
                }
                Ok(Value::Object(expanded))
            }
        },
        Value::Array(items) => items
            .iter()
            .map(|item| expand(root, item, stack))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        other => Ok(other.clone()),
    }
}

fn follow(root: &Value, reference: &str, stack: &mut Vec<String>) -> Result<Value> {
    let Some(pointer) = reference.strip_prefix('#') else {
        return Err(SchemaError::UnsupportedRef {
            reference: reference.to_string(),
        });
    };
    if stack.iter().any(|seen| seen == reference) {
        return Err(SchemaError::RefCycle {
            reference: reference.to_string(),
        });
    }
    let target = root
        .pointer(pointer)
        .ok_or_else(|| SchemaError::UnresolvedRef {
            reference: reference.to_string(),
        })?;
    stack.push(reference.to_string());
    let expanded = expand(root, target, stack);
    stack.pop();
    expanded
}
