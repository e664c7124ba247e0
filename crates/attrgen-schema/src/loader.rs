use std::path::Path;

use serde_json::Value;
use tracing::{info, info_span};

use attrgen_model::{ApiEntry, AttributeSet};

use crate::document::{METHODS_POINTER, PARAMETERS_POINTER, node, read_document};
use crate::error::{Result, SchemaError};
use crate::normalize::{filter_for_project, method_enums};
use crate::raw::RawParameter;
use crate::refs::resolve_refs;

/// Load the schema at `path` and build the attribute set for `project`.
pub fn load_for_project(path: &Path, project: &str) -> Result<AttributeSet> {
    let span = info_span!("load", path = %path.display(), project);
    let _guard = span.enter();
    let document = read_document(path)?;
    let set = attribute_set_from_document(&document, project)?;
    info!(
        api_total = set.api_total(),
        project_count = set.project_count(),
        max_id = set.max_id(),
        method_enums = set.method_enums.len(),
        "schema loaded"
    );
    Ok(set)
}

/// Build the attribute set from an already parsed document.
pub fn attribute_set_from_document(document: &Value, project: &str) -> Result<AttributeSet> {
    let document = resolve_refs(document)?;
    let parameters = parse_parameters(node(&document, PARAMETERS_POINTER)?)?;

    let mut set = AttributeSet::new(project);
    set.api = parameters
        .iter()
        .map(|parameter| ApiEntry {
            id: parameter.id,
            name: parameter.name.clone(),
        })
        .collect();
    set.attributes = filter_for_project(&parameters, project)?;
    if set.attributes.is_empty() {
        return Err(SchemaError::EmptyProject {
            project: project.to_string(),
        });
    }
    set.method_enums = match document.pointer(METHODS_POINTER) {
        Some(Value::Array(methods)) => method_enums(methods)?,
        _ => Vec::new(),
    };
    Ok(set)
}

fn parse_parameters(list: &Value) -> Result<Vec<RawParameter>> {
    let Value::Array(items) = list else {
        return Err(SchemaError::MissingNode {
            pointer: PARAMETERS_POINTER.to_string(),
        });
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item.clone())
                .map_err(|source| SchemaError::InvalidParameter { index, source })
        })
        .collect()
}
