//! RW/RO storage structures and their default initializers.

use attrgen_model::{AttributeSet, DEFAULT_NOT_APPLICABLE, ProjectAttribute};

use crate::format::strip_last_comma;
use crate::inflect::underscore;

/// Which storage structure an attribute lives in.
///
/// Writable but non-savable attributes go into the volatile (RO) structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    /// `rw`: savable attributes, persisted to flash.
    Persisted,
    /// `ro`: everything else.
    Volatile,
}

impl Partition {
    pub fn contains(self, attribute: &ProjectAttribute) -> bool {
        match self {
            Self::Persisted => attribute.savable,
            Self::Volatile => !attribute.savable,
        }
    }
}

/// C declaration kind and element count for one member.
fn member_kind(attribute: &ProjectAttribute) -> (String, usize) {
    if attribute.is_string() {
        ("char".to_string(), attribute.string_max())
    } else if attribute.has_enum() {
        (
            format!("enum {}", underscore(&attribute.name)),
            attribute.array_size,
        )
    } else {
        (attribute.ctype.clone(), attribute.array_size)
    }
}

fn dimensions(kind: &str, count: usize) -> String {
    if kind == "char" {
        // room for the terminator
        format!("[{count} + 1]")
    } else if count != 0 {
        format!("[{count}]")
    } else {
        String::new()
    }
}

fn default_value(kind: &str, default: &str) -> String {
    match (kind, default == DEFAULT_NOT_APPLICABLE) {
        ("char", true) => "\"\"".to_string(),
        ("float", true) => "0.0".to_string(),
        (_, true) => "0".to_string(),
        ("char", false) => format!("\"{default}\""),
        (_, false) => default.to_string(),
    }
}

/// Member declarations of one storage structure.
pub fn struct_members(set: &AttributeSet, partition: Partition) -> String {
    set.attributes
        .iter()
        .filter(|attribute| partition.contains(attribute))
        .map(|attribute| {
            let (kind, count) = member_kind(attribute);
            format!(
                "\t{kind} {}{};\n",
                attribute.name,
                dimensions(&kind, count)
            )
        })
        .collect()
}

/// Designated initializers holding the defaults of one storage structure.
pub fn struct_defaults(set: &AttributeSet, partition: Partition) -> String {
    let defaults: String = set
        .attributes
        .iter()
        .filter(|attribute| partition.contains(attribute))
        .map(|attribute| {
            let (kind, _) = member_kind(attribute);
            format!(
                "\t.{} = {},\n",
                attribute.name,
                default_value(&kind, &attribute.default)
            )
        })
        .collect();
    strip_last_comma(defaults)
}

pub fn rw_attributes(set: &AttributeSet) -> String {
    struct_members(set, Partition::Persisted)
}

pub fn rw_defaults(set: &AttributeSet) -> String {
    struct_defaults(set, Partition::Persisted)
}

pub fn ro_attributes(set: &AttributeSet) -> String {
    struct_members(set, Partition::Volatile)
}

pub fn ro_defaults(set: &AttributeSet) -> String {
    struct_defaults(set, Partition::Volatile)
}
