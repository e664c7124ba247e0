//! Serde shapes of the API document's parameter entries.

use serde::Deserialize;
use serde_json::{Number, Value};

/// One entry of the device parameter list. Identity fields are required
/// for every entry; the schema is only interpreted for selected entries.
#[derive(Debug, Clone, Deserialize)]
pub struct RawParameter {
    pub name: String,
    #[serde(rename = "x-id")]
    pub id: u32,
    #[serde(rename = "x-projects")]
    pub projects: Vec<String>,
    #[serde(default)]
    pub schema: Value,
}

impl RawParameter {
    pub fn in_project(&self, project: &str) -> bool {
        self.projects.iter().any(|tag| tag == project)
    }
}

/// Schema sub-record of a parameter. `x-ctype` and `x-default` are
/// required by contract but optional here so their absence can be reported
/// against the attribute name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSchema {
    #[serde(rename = "x-ctype")]
    pub ctype: Option<String>,
    #[serde(rename = "x-default")]
    pub default: Option<Value>,
    #[serde(rename = "x-array-size")]
    pub array_size: Option<Number>,
    pub minimum: Option<Number>,
    pub maximum: Option<Number>,
    #[serde(rename = "x-lockable")]
    pub lockable: Option<bool>,
    #[serde(rename = "x-broadcast")]
    pub broadcast: Option<bool>,
    #[serde(rename = "x-readable")]
    pub readable: Option<bool>,
    #[serde(rename = "x-writeable")]
    pub writable: Option<bool>,
    #[serde(rename = "x-savable")]
    pub savable: Option<bool>,
    #[serde(rename = "x-deprecated")]
    pub deprecated: Option<bool>,
    #[serde(rename = "x-validator")]
    pub validator: Option<String>,
    #[serde(rename = "x-prepare")]
    pub prepare: Option<bool>,
    #[serde(rename = "enum")]
    pub enumeration: Option<Value>,
    #[serde(rename = "x-enum-include-errno")]
    pub enum_include_errno: Option<bool>,
}
