//! Attribute table rows and the id-to-entry map.

use attrgen_model::{AttributeSet, ProjectAttribute};

use crate::format::{
    AP_WIDTH, AV_FIELD_WIDTH, MIN_MAX_WIDTH, NAME_MACRO_WIDTH, TYPE_WIDTH, strip_last_comma,
    yes_no,
};

/// Table shorthand macro for the entry (`RW_ATTRS(name)`, `RO_ATTRE(name)`, ...).
///
/// Strings pass the array itself, enums also wire up their string accessor.
pub fn attribute_macro(attribute: &ProjectAttribute) -> String {
    let prefix = match (attribute.is_string(), attribute.savable, attribute.has_enum()) {
        (true, true, _) => "RW_ATTRS",
        (true, false, _) => "RO_ATTRS",
        (false, true, true) => "RW_ATTRE",
        (false, true, false) => "RW_ATTRX",
        (false, false, true) => "RO_ATTRE",
        (false, false, false) => "RO_ATTRX",
    };
    format!("{prefix}({})", attribute.name)
}

/// Custom validator when declared, otherwise the type's default one.
pub fn validator_name(attribute: &ProjectAttribute) -> String {
    if !attribute.validator.is_empty() {
        format!("av_{}", attribute.validator)
    } else if attribute.is_string() {
        "av_string".to_string()
    } else if attribute.array_size != 0 {
        "av_array".to_string()
    } else {
        format!("av_{}", attribute.ctype.replace("_t", ""))
    }
}

/// Name of the prepare-for-read hook, or `NULL`.
pub fn prepare_name(attribute: &ProjectAttribute) -> String {
    if attribute.prepare {
        prepare_function(attribute)
    } else {
        "NULL".to_string()
    }
}

pub(crate) fn prepare_function(attribute: &ProjectAttribute) -> String {
    format!("attr_prepare_{}", attribute.name)
}

/// Min/max initializers. For strings these are lengths.
///
/// Floats keep their source literal; integers are truncated and use the
/// signed union member when either bound is negative.
pub fn min_max(attribute: &ProjectAttribute) -> String {
    let (min, max) = if attribute.ctype == "float" {
        (
            format!(".min.fx = {}", attribute.minimum),
            format!(".max.fx = {}", attribute.maximum),
        )
    } else {
        let low = attribute.minimum.truncate();
        let high = attribute.maximum.truncate();
        let member = if low < 0 || high < 0 { "sx" } else { "ux" };
        (
            format!(".min.{member} = {low}"),
            format!(".max.{member} = {high}"),
        )
    };
    format!("{min:<MIN_MAX_WIDTH$}, {max:<MIN_MAX_WIDTH$}")
}

/// One designated initializer of `ATTR_TABLE`.
pub fn table_row(index: usize, attribute: &ProjectAttribute) -> String {
    format!(
        "\t[{index:<3}] = {{ {id:<3}, {macro_name:<NAME_MACRO_WIDTH$}, {kind:<TYPE_WIDTH$}, \
         {savable}, {writable}, {readable}, {lockable}, {broadcast}, {deprecated}, \
         {validator:<AV_FIELD_WIDTH$}, {prepare:<AP_WIDTH$}, {min_max} }},\n",
        id = attribute.id,
        macro_name = attribute_macro(attribute),
        kind = attribute.kind().type_tag(),
        savable = yes_no(attribute.savable),
        writable = yes_no(attribute.writable),
        readable = yes_no(attribute.readable),
        lockable = yes_no(attribute.lockable),
        broadcast = yes_no(attribute.broadcast),
        deprecated = yes_no(attribute.deprecated),
        validator = validator_name(attribute),
        prepare = prepare_name(attribute),
        min_max = min_max(attribute),
    )
}

/// Body of `ATTR_TABLE`, one row per project attribute.
pub fn attribute_table(set: &AttributeSet) -> String {
    let mut table: String = set
        .attributes
        .iter()
        .enumerate()
        .map(|(index, attribute)| table_row(index, attribute))
        .collect();
    table.push('\n');
    strip_last_comma(table)
}

/// Body of `ATTR_MAP`: id -> table entry. Unused ids are left out and so
/// stay NULL.
pub fn attribute_map(set: &AttributeSet) -> String {
    let map: String = (0..=set.max_id())
        .filter_map(|id| {
            set.index_of_id(id)
                .map(|index| format!("\t[{id:<3}] = &ATTR_TABLE[{index:<3}],\n"))
        })
        .collect();
    strip_last_comma(map)
}
