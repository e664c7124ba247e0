//! Project filtering and field normalization. Pure, no I/O.

use serde_json::{Number, Value};
use tracing::{debug, warn};

use attrgen_model::{EnumMember, MethodEnum, Numeric, ProjectAttribute};

use crate::error::{Result, SchemaError};
use crate::raw::{RawParameter, RawSchema};

/// Normalize every parameter tagged with `project`, in document order.
pub fn filter_for_project(
    parameters: &[RawParameter],
    project: &str,
) -> Result<Vec<ProjectAttribute>> {
    parameters
        .iter()
        .filter(|parameter| parameter.in_project(project))
        .map(normalize_parameter)
        .collect()
}

/// Flatten one parameter into a [`ProjectAttribute`], defaulting optional
/// fields. Missing `x-ctype` or `x-default` is an error.
pub fn normalize_parameter(parameter: &RawParameter) -> Result<ProjectAttribute> {
    let name = parameter.name.as_str();
    if parameter.schema.is_null() {
        return Err(SchemaError::MissingField {
            attribute: name.to_string(),
            field: "schema",
        });
    }
    let schema: RawSchema = serde_json::from_value(parameter.schema.clone())
        .map_err(|error| SchemaError::malformed(name, "schema", error.to_string()))?;

    let ctype = schema.ctype.ok_or_else(|| SchemaError::MissingField {
        attribute: name.to_string(),
        field: "x-ctype",
    })?;
    let default = schema
        .default
        .as_ref()
        .ok_or_else(|| SchemaError::MissingField {
            attribute: name.to_string(),
            field: "x-default",
        })
        .and_then(|value| default_text(name, value))?;
    let enumeration = match &schema.enumeration {
        Some(value) => enum_members(name, value)?,
        None => Vec::new(),
    };

    let attribute = ProjectAttribute {
        id: parameter.id,
        name: name.to_string(),
        ctype,
        default,
        array_size: schema.array_size.as_ref().map_or(0, |n| numeric(n).as_count()),
        minimum: schema.minimum.as_ref().map_or(Numeric::ABSENT, numeric),
        maximum: schema.maximum.as_ref().map_or(Numeric::ABSENT, numeric),
        lockable: schema.lockable.unwrap_or(false),
        broadcast: schema.broadcast.unwrap_or(false),
        readable: schema.readable.unwrap_or(false),
        writable: schema.writable.unwrap_or(false),
        savable: schema.savable.unwrap_or(false),
        deprecated: schema.deprecated.unwrap_or(false),
        validator: schema.validator.unwrap_or_default(),
        prepare: schema.prepare.unwrap_or(false),
        enumeration,
        enum_include_errno: schema.enum_include_errno.unwrap_or(false),
    };
    debug!(id = attribute.id, name, kind = %attribute.kind(), "attribute normalized");
    Ok(attribute)
}

/// Collect enumerations declared on the first parameter of each method.
///
/// Methods without an enum are skipped silently; an enum without
/// `x-enum-name` cannot be generated and is skipped with a warning.
pub fn method_enums(methods: &[Value]) -> Result<Vec<MethodEnum>> {
    let mut enums = Vec::new();
    for (index, method) in methods.iter().enumerate() {
        let Some(schema) = method.pointer("/params/0/schema") else {
            continue;
        };
        let Some(declared) = schema.get("enum") else {
            continue;
        };
        let method_name = method
            .get("name")
            .and_then(Value::as_str)
            .map_or_else(|| format!("method #{index}"), str::to_string);
        let Some(name) = schema.get("x-enum-name").and_then(Value::as_str) else {
            warn!(method = %method_name, "method enum not found");
            continue;
        };
        enums.push(MethodEnum {
            name: name.to_string(),
            members: enum_members(&method_name, declared)?,
            include_errno: schema
                .get("x-enum-include-errno")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        });
    }
    Ok(enums)
}

fn numeric(number: &Number) -> Numeric {
    if let Some(value) = number.as_i64() {
        Numeric::Int(value)
    } else if let Some(value) = number.as_u64() {
        Numeric::UInt(value)
    } else {
        Numeric::Float(number.as_f64().unwrap_or(0.0))
    }
}

fn default_text(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(SchemaError::malformed(
            name,
            "x-default",
            format!("expected a string, number or bool, found {other}"),
        )),
    }
}

fn enum_members(name: &str, value: &Value) -> Result<Vec<EnumMember>> {
    let Value::Object(map) = value else {
        return Err(SchemaError::malformed(
            name,
            "enum",
            "expected an object of name/value pairs",
        ));
    };
    map.iter()
        .map(|(key, value)| {
            value
                .as_i64()
                .map(|value| EnumMember::new(key.clone(), value))
                .ok_or_else(|| {
                    SchemaError::malformed(name, "enum", format!("{key} is not an integer"))
                })
        })
        .collect()
}
