//! Typed, null-safe getters over dotted paths.
//!
//! Every getter resolves the path with [`resolve`] and then checks the
//! variant of the node it finds. A missing key, an absent starting node, or
//! a node of the wrong shape all yield `None`; nothing here panics or
//! returns an error, so callers substitute defaults with `unwrap_or`.
//!
//! Numbers are never converted across variants (a string `"42"` is not a
//! number), and the integral/fractional storage form is respected:
//!
//! | getter | accepts |
//! |---|---|
//! | `get_i32` `get_u32` `get_i64` `get_u64` | integral numbers that fit the target |
//! | `get_f32` | integral or fractional numbers |
//! | `get_f64` | fractional numbers only |
//!
//! ```
//! use serde_json::json;
//! use hjsonx_core::{get_bool, get_i32, get_str_at};
//!
//! let root = json!({"window": {"width": 800, "title": "main", "resizable": true}});
//! assert_eq!(get_i32(&root, "window.width"), Some(800));
//! assert_eq!(get_str_at(&root, "window.title"), Some("main"));
//! assert!(get_bool(&root, "window.resizable").unwrap_or(false));
//! assert_eq!(get_bool(&root, "window.fullscreen"), None);
//! ```

use crate::path::resolve;
use crate::types::NumberForm;
use serde_json::{Map, Number, Value};

pub fn get_bool<'a>(node: impl Into<Option<&'a Value>>, path: &str) -> Option<bool> {
    resolve(node, path)?.as_bool()
}

pub fn get_i32<'a>(node: impl Into<Option<&'a Value>>, path: &str) -> Option<i32> {
    integral_number(resolve(node, path)?)?
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
}

pub fn get_u32<'a>(node: impl Into<Option<&'a Value>>, path: &str) -> Option<u32> {
    integral_number(resolve(node, path)?)?
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
}

pub fn get_i64<'a>(node: impl Into<Option<&'a Value>>, path: &str) -> Option<i64> {
    integral_number(resolve(node, path)?)?.as_i64()
}

pub fn get_u64<'a>(node: impl Into<Option<&'a Value>>, path: &str) -> Option<u64> {
    integral_number(resolve(node, path)?)?.as_u64()
}

/// Single-precision read. Integral numbers are promoted, fractional ones
/// narrowed (with the usual `f64 -> f32` rounding).
pub fn get_f32<'a>(node: impl Into<Option<&'a Value>>, path: &str) -> Option<f32> {
    match resolve(node, path)? {
        Value::Number(n) => n.as_f64().map(|v| v as f32),
        _ => None,
    }
}

/// Double-precision read of a fractional number.
///
/// An integral number (`3`, as opposed to `3.0`) yields `None`; use
/// [`get_i64`] for those.
pub fn get_f64<'a>(node: impl Into<Option<&'a Value>>, path: &str) -> Option<f64> {
    match resolve(node, path)? {
        Value::Number(n) if NumberForm::of(n) == NumberForm::Fractional => n.as_f64(),
        _ => None,
    }
}

/// String content of an already-resolved node.
pub fn get_str<'a>(node: impl Into<Option<&'a Value>>) -> Option<&'a str> {
    node.into()?.as_str()
}

/// String content of the node at `path`.
pub fn get_str_at<'a>(node: impl Into<Option<&'a Value>>, path: &str) -> Option<&'a str> {
    get_str(resolve(node, path))
}

/// The array at `path`, borrowed from the tree.
pub fn get_array<'a>(node: impl Into<Option<&'a Value>>, path: &str) -> Option<&'a Vec<Value>> {
    resolve(node, path)?.as_array()
}

/// The object at `path`, borrowed from the tree.
pub fn get_object<'a>(
    node: impl Into<Option<&'a Value>>,
    path: &str,
) -> Option<&'a Map<String, Value>> {
    resolve(node, path)?.as_object()
}

fn integral_number(value: &Value) -> Option<&Number> {
    match value {
        Value::Number(n) if NumberForm::of(n) == NumberForm::Integral => Some(n),
        _ => None,
    }
}
