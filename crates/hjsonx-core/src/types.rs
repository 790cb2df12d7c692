//! Shared value helpers: the empty container singletons and number forms.
//!
//! The value tree itself is `serde_json::Value` (with `preserve_order`, so
//! object keys keep their insertion order). This module only adds the few
//! pieces the query layer needs on top of it.

use serde_json::{Map, Number, Value};
use std::sync::LazyLock;

static EMPTY_ARRAY: LazyLock<Value> = LazyLock::new(|| Value::Array(Vec::new()));
static EMPTY_OBJECT: LazyLock<Value> = LazyLock::new(|| Value::Object(Map::new()));

/// A process-wide empty array, for callers that need a non-null default.
///
/// ```
/// let root = serde_json::json!({"name": "demo"});
/// let tags = hjsonx_core::get_array(&root, "tags")
///     .or_else(|| hjsonx_core::empty_array().as_array());
/// assert_eq!(tags.map(Vec::len), Some(0));
/// ```
pub fn empty_array() -> &'static Value {
    &EMPTY_ARRAY
}

/// A process-wide empty object, for callers that need a non-null default.
pub fn empty_object() -> &'static Value {
    &EMPTY_OBJECT
}

/// How a `Number` is stored: as an integer or as a float.
///
/// `serde_json` keeps the two apart (`1` vs `1.0`), and the typed getters
/// depend on the distinction: integer getters never read a fractional
/// number, and `get_f64` never reads an integral one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberForm {
    /// Stored as `i64` or `u64`.
    Integral,
    /// Stored as `f64`.
    Fractional,
}

impl NumberForm {
    /// The storage form of `n`.
    pub fn of(n: &Number) -> Self {
        if n.is_f64() {
            NumberForm::Fractional
        } else {
            NumberForm::Integral
        }
    }
}
