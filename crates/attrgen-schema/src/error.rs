use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to access file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON document {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize JSON document: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("missing node in API document: {pointer}")]
    MissingNode { pointer: String },

    #[error("invalid parameter at index {index}: {source}")]
    InvalidParameter {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid API version {version:?} (expected major.minor.build)")]
    InvalidVersion { version: String },

    #[error("unsupported reference {reference} (only local '#/...' pointers resolve)")]
    UnsupportedRef { reference: String },

    #[error("unresolvable reference {reference}")]
    UnresolvedRef { reference: String },

    #[error("reference cycle through {reference}")]
    RefCycle { reference: String },

    #[error("attribute {attribute} is missing required field {field}")]
    MissingField {
        attribute: String,
        field: &'static str,
    },

    #[error("attribute {attribute} has malformed field {field}: {message}")]
    MalformedField {
        attribute: String,
        field: &'static str,
        message: String,
    },

    #[error("project {project} has no attributes")]
    EmptyProject { project: String },
}

impl SchemaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(
        attribute: impl Into<String>,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            attribute: attribute.into(),
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
