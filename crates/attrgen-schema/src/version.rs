//! API version bookkeeping inside the schema document.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde_json::Value;
use tracing::{info, warn};

use crate::document::{PARAMETERS_POINTER, read_document, write_document};
use crate::error::{Result, SchemaError};

/// Canonical location of the API version string.
pub const VERSION_POINTER: &str = "/info/version";

/// Index of the parameter whose default mirrors the API version into the
/// generated table.
pub const VERSION_MIRROR_INDEX: usize = 93;

/// Dotted `major.minor.build` version. Only the build component is
/// interpreted; major and minor are carried as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersion {
    pub major: String,
    pub minor: String,
    pub build: u64,
}

impl ApiVersion {
    pub fn next_build(&self) -> Result<Self> {
        let build = self
            .build
            .checked_add(1)
            .ok_or_else(|| SchemaError::InvalidVersion {
                version: self.to_string(),
            })?;
        Ok(Self {
            build,
            ..self.clone()
        })
    }
}

impl FromStr for ApiVersion {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SchemaError::InvalidVersion {
            version: s.to_string(),
        };
        let parts: Vec<&str> = s.split('.').collect();
        let [major, minor, build] = parts.as_slice() else {
            return Err(invalid());
        };
        let build = build.trim().parse::<u64>().map_err(|_| invalid())?;
        Ok(Self {
            major: (*major).to_string(),
            minor: (*minor).to_string(),
            build,
        })
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

/// Increment the build component in `document`, including the mirrored
/// default value when it can be found. Returns the new version.
pub fn bump_document_version(document: &mut Value) -> Result<ApiVersion> {
    let current = document
        .pointer(VERSION_POINTER)
        .ok_or_else(|| SchemaError::MissingNode {
            pointer: VERSION_POINTER.to_string(),
        })?;
    let current = current
        .as_str()
        .ok_or_else(|| SchemaError::InvalidVersion {
            version: current.to_string(),
        })?
        .parse::<ApiVersion>()?;
    let next = current.next_build()?;
    let rendered = next.to_string();

    if let Some(slot) = document.pointer_mut(VERSION_POINTER) {
        *slot = Value::String(rendered.clone());
    }
    if !mirror_version(document, &rendered) {
        warn!(
            index = VERSION_MIRROR_INDEX,
            "unable to write api version into parameter default"
        );
    }
    Ok(next)
}

fn mirror_version(document: &mut Value, version: &str) -> bool {
    let pointer = format!("{PARAMETERS_POINTER}/{VERSION_MIRROR_INDEX}/schema");
    match document.pointer_mut(&pointer) {
        Some(Value::Object(schema)) => {
            schema.insert("x-default".to_string(), Value::String(version.to_string()));
            true
        }
        _ => false,
    }
}

/// Read the document at `path`, bump its build number, and write it back.
///
/// Every call increments; running it twice adds two.
pub fn bump_and_persist_version(path: &Path) -> Result<ApiVersion> {
    let mut document = read_document(path)?;
    let version = bump_document_version(&mut document)?;
    write_document(path, &document)?;
    info!(path = %path.display(), version = %version, "api version bumped");
    Ok(version)
}
