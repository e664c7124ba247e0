//! Raw JSON document access.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::error::{Result, SchemaError};

/// Default schema document, relative to the working directory.
pub const DEFAULT_SCHEMA_FILE: &str = "./attributes.json";

/// Project selected when none is given.
pub const DEFAULT_PROJECT: &str = "MG100";

/// Indent used when the document is written back.
pub const JSON_INDENT: &[u8] = b"  ";

/// Device parameter list.
pub const PARAMETERS_POINTER: &str =
    "/components/contentDescriptors/deviceParams/x-device-parameters";

/// RPC methods scanned for enumerations.
pub const METHODS_POINTER: &str = "/methods/sentrius";

pub fn read_document(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path).map_err(|source| SchemaError::io(path, source))?;
    serde_json::from_str(&text).map_err(|source| SchemaError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Pretty-print `document` with [`JSON_INDENT`], keeping key order.
pub fn render_document(document: &Value) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));
    document
        .serialize(&mut serializer)
        .map_err(|source| SchemaError::Serialize { source })?;
    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Replace the document at `path` through a sibling temp file; the old
/// document stays intact until the rename.
pub fn write_document(path: &Path, document: &Value) -> Result<()> {
    let text = render_document(document)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp =
        tempfile::NamedTempFile::new_in(dir).map_err(|source| SchemaError::io(path, source))?;
    temp.write_all(text.as_bytes())
        .map_err(|source| SchemaError::io(path, source))?;
    temp.persist(path)
        .map_err(|err| SchemaError::io(path, err.error))?;
    Ok(())
}

pub(crate) fn node<'a>(document: &'a Value, pointer: &str) -> Result<&'a Value> {
    document
        .pointer(pointer)
        .ok_or_else(|| SchemaError::MissingNode {
            pointer: pointer.to_string(),
        })
}
