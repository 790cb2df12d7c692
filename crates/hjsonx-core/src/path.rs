//! Dotted key-path resolution.
//!
//! A path is a `.`-separated list of object keys: `"server.tls.cert"`
//! addresses `root["server"]["tls"]["cert"]`. Segments are matched exactly
//! (no trimming, no escaping), so a key that itself contains `.` cannot be
//! addressed. Arrays are not indexable by path.

use serde_json::Value;

/// Walk `path` from `node`, returning the node it addresses.
///
/// Returns `None` when the starting node is absent, when a segment is not a
/// key of the current object, or when the walk reaches a non-object before
/// the path is exhausted. Never fails otherwise.
///
/// `node` accepts either `&Value` or `Option<&Value>`, so lookups chain:
///
/// ```
/// use serde_json::json;
/// use hjsonx_core::resolve;
///
/// let root = json!({"server": {"tls": {"port": 8443}}});
/// let tls = resolve(&root, "server.tls");
/// assert_eq!(resolve(tls, "port"), Some(&json!(8443)));
/// assert_eq!(resolve(&root, "server.tcp.port"), None);
/// ```
pub fn resolve<'a>(node: impl Into<Option<&'a Value>>, path: &str) -> Option<&'a Value> {
    let mut current = node.into()?;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
