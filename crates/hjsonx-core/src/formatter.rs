//! Formatter: renders a value tree as Hjson-style config text.
//!
//! The output is deterministic and byte-for-byte stable:
//!
//! - **Indentation**: one tab per nesting level
//! - **Bare keys**: object keys are written as-is, followed by `: `
//! - **Trailing commas**: every value ends with `,` except the outermost one
//! - **Multiline strings**: strings containing `\n` become `'''` blocks with
//!   raw, indented content and the closer glued to the comma
//! - **Empty containers**: `{}` keeps a blank interior (two newlines), `[]` does not
//!
//! # Example
//! ```
//! use serde_json::json;
//! let text = hjsonx_core::render(&json!({"a": 1, "b": {"c": true}}));
//! assert_eq!(text, "{\n\ta: 1,\n\tb: {\n\t\tc: true,\n\t},\n}");
//! ```

use crate::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Render a value tree into config text.
///
/// Never fails: every variant of `Value` has a textual form. The result
/// never ends with the `,` separator.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    render_node(value, 0, &mut out);
    // The outermost value must not end with a dangling separator.
    if out.ends_with(',') {
        out.pop();
    }
    out
}

/// Parse a JSON string and render it as config text.
///
/// Returns an error only if the input is not valid JSON.
pub fn encode(json: &str) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    Ok(render(&value))
}

/// Render any serializable value as config text.
///
/// The value is first converted to a `serde_json::Value`; this fails for
/// inputs JSON cannot represent (e.g. maps with non-string keys).
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let tree = serde_json::to_value(value)?;
    Ok(render(&tree))
}

/// Emit one node at the given depth, including its trailing `,`.
/// Children of containers are emitted at `depth + 1`.
fn render_node(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str("null,"),
        Value::Bool(b) => {
            out.push_str(if *b { "true" } else { "false" });
            out.push(',');
        }
        Value::Number(n) => {
            out.push_str(&n.to_string());
            out.push(',');
        }
        Value::String(s) if s.contains('\n') => render_multiline(s, depth, out),
        Value::String(s) => {
            push_quoted(s, out);
            out.push(',');
        }
        Value::Object(map) => render_object(map, depth, out),
        Value::Array(arr) => render_array(arr, depth, out),
    }
}

/// `{` + one `key: value` line per entry at `depth + 1` + `}`.
///
/// An empty object keeps two newlines between the braces so it reads as a
/// visually blank block.
fn render_object(map: &Map<String, Value>, depth: usize, out: &mut String) {
    out.push('{');
    if map.is_empty() {
        out.push_str("\n\n");
    } else {
        let child_indent = make_indent(depth + 1);
        for (key, child) in map {
            out.push('\n');
            out.push_str(&child_indent);
            out.push_str(key);
            out.push_str(": ");
            render_node(child, depth + 1, out);
        }
        out.push('\n');
    }
    out.push_str(&make_indent(depth));
    out.push_str("},");
}

/// `[` + one element line per item at `depth + 1` + `]`. Empty arrays are `[],`.
fn render_array(arr: &[Value], depth: usize, out: &mut String) {
    out.push('[');
    if !arr.is_empty() {
        let child_indent = make_indent(depth + 1);
        for item in arr {
            out.push('\n');
            out.push_str(&child_indent);
            render_node(item, depth + 1, out);
        }
        out.push('\n');
        out.push_str(&make_indent(depth));
    }
    out.push_str("],");
}

/// Emit a `'''` block. Content lines are raw (no escaping) and each carries
/// `depth` tabs; the closing `'''` follows the last line directly.
fn render_multiline(s: &str, depth: usize, out: &mut String) {
    let indent = make_indent(depth);
    out.push_str("'''\n");
    for (i, line) in s.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&indent);
        out.push_str(line);
    }
    out.push_str("''',");
}

/// Emit a single-line string in double quotes with JSON escaping.
fn push_quoted(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// One tab per nesting level.
fn make_indent(depth: usize) -> String {
    "\t".repeat(depth)
}
