//! # hjsonx-core
//!
//! Hjson-style config text writer and null-safe queries over
//! `serde_json::Value` trees.
//!
//! Two pieces make up the crate: a deterministic [`render`] that writes a
//! value tree as tab-indented, comma-terminated config text, and a family of
//! typed getters that resolve dotted key-paths (`"window.size.width"`) and
//! return `None` instead of failing when a key is missing or a value has the
//! wrong type.
//!
//! ## Quick start
//!
//! ```rust
//! use hjsonx_core::{encode, get_i32, get_str_at};
//!
//! // JSON → config text
//! let json = r#"{"name":"Alice","scores":[95,87]}"#;
//! let text = encode(json).unwrap();
//! assert_eq!(text, "{\n\tname: \"Alice\",\n\tscores: [\n\t\t95,\n\t\t87,\n\t],\n}");
//!
//! // Dotted-path queries
//! let root: serde_json::Value = serde_json::from_str(json).unwrap();
//! assert_eq!(get_str_at(&root, "name"), Some("Alice"));
//! assert_eq!(get_i32(&root, "age"), None);
//! ```
//!
//! ## Modules
//!
//! - [`formatter`] — value tree → config text
//! - [`path`] — dotted key-path resolution
//! - [`accessors`] — typed getters (`get_bool`, `get_i32`, … `get_array`)
//! - [`types`] — empty container singletons, integral/fractional number form
//! - [`io`] — parse Hjson text, load files (BOM-aware), save config text files
//! - [`error`] — error types for parsing and file I/O

pub mod accessors;
pub mod error;
pub mod formatter;
pub mod io;
pub mod path;
pub mod types;

pub use accessors::{
    get_array, get_bool, get_f32, get_f64, get_i32, get_i64, get_object, get_str, get_str_at,
    get_u32, get_u64,
};
pub use error::{HjsonxError, Result};
pub use formatter::{encode, render, to_string};
pub use io::{load, parse, save};
pub use path::resolve;
pub use types::{empty_array, empty_object, NumberForm};
