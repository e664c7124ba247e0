//! Reading the JSON API document: `$ref` expansion, project filtering, and
//! the API version bump that precedes every generation run.

#![deny(unsafe_code)]

pub mod document;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod raw;
pub mod refs;
pub mod version;

pub use crate::document::{DEFAULT_PROJECT, DEFAULT_SCHEMA_FILE};
pub use crate::error::{Result, SchemaError};
pub use crate::loader::{attribute_set_from_document, load_for_project};
pub use crate::normalize::{filter_for_project, method_enums, normalize_parameter};
pub use crate::version::{ApiVersion, bump_and_persist_version, bump_document_version};
