//! File adapters: load a value tree from disk, save one as config text.
//!
//! Loading treats a missing file as absence (`Ok(None)`), consistent with the
//! query layer. The text encoding is detected from the byte-order mark:
//! UTF-8 (BOM optional) and UTF-16 LE/BE (BOM required). Text is parsed as
//! Hjson, so plain JSON and files written by [`save`] both load.

use crate::error::{HjsonxError, Result};
use crate::formatter::render;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Read and parse the Hjson (or JSON) file at `path`.
///
/// Returns `Ok(None)` if the file does not exist. Any other read failure,
/// an encoding error, or invalid Hjson is an error.
pub fn load(path: impl AsRef<Path>) -> Result<Option<Value>> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "file not found, nothing loaded");
            return Ok(None);
        }
        Err(source) => {
            return Err(HjsonxError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let text = decode_text(&bytes)?;
    parse(&text).map(Some)
}

/// Parse Hjson text into a value tree. Object keys keep their source order.
///
/// ```
/// use serde_json::json;
/// let value = hjsonx_core::parse("{\n\ta: 1,\n\ts: '''\n\tx\n\ty''',\n}").unwrap();
/// assert_eq!(value, json!({"a": 1, "s": "x\ny"}));
/// ```
pub fn parse(text: &str) -> Result<Value> {
    Ok(deser_hjson::from_str::<Value>(text)?)
}

/// Decode file bytes to text, honouring a leading byte-order mark.
///
/// Without a BOM the bytes must be UTF-8.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        debug!("detected UTF-8 BOM");
        return utf8(rest);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        debug!("detected UTF-16LE BOM");
        return utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        debug!("detected UTF-16BE BOM");
        return utf16(rest, u16::from_be_bytes);
    }
    utf8(bytes)
}

/// Render `value` and write it to `path`, creating the parent directory
/// first if it does not exist.
pub fn save(value: &Value, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    // A bare file name has an empty parent: write into the current directory.
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "creating directory");
            fs::create_dir_all(dir).map_err(|source| HjsonxError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }
    let text = render(value);
    fs::write(path, &text).map_err(|source| HjsonxError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "wrote config text");
    Ok(())
}

fn utf8(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| HjsonxError::Encoding(e.to_string()))
}

fn utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(HjsonxError::Encoding(format!(
            "UTF-16 input has an odd number of bytes ({})",
            bytes.len()
        )));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| HjsonxError::Encoding(e.to_string()))
}
