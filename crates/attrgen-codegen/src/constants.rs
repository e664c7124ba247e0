//! Header `#define`s: ids, special indices, table limits and sizes.

use attrgen_model::AttributeSet;

use crate::format::{DEFINE_WIDTH, ID_WIDTH, INDEX_NAME_WIDTH};
use crate::inflect::underscore;

/// Attributes whose table index the firmware needs directly.
pub const INDEXED_ATTRIBUTES: &[&str] = &["lock", "loadPath"];

pub fn attribute_ids(set: &AttributeSet) -> String {
    set.attributes
        .iter()
        .map(|attribute| {
            let define = format!("#define ATTR_ID_{}", attribute.name);
            format!("{define:<ID_WIDTH$}{}\n", attribute.id)
        })
        .collect()
}

pub fn attribute_indices(set: &AttributeSet) -> String {
    set.attributes
        .iter()
        .enumerate()
        .filter(|(_, attribute)| INDEXED_ATTRIBUTES.contains(&attribute.name.as_str()))
        .map(|(index, attribute)| {
            format!(
                "#define ATTR_INDEX_{:<INDEX_NAME_WIDTH$} {index}\n",
                attribute.name
            )
        })
        .collect()
}

/// Table limits, then per-attribute string and byte array sizes.
///
/// Names are padded to the longest attribute name plus [`DEFINE_WIDTH`].
pub fn attribute_constants(set: &AttributeSet) -> String {
    let width = set.max_name_len() + DEFINE_WIDTH;
    let define = |name: &str, value: usize| format!("#define ATTR_{name:<width$} {value}\n");

    let mut out = String::new();
    out.push_str(&define("TABLE_SIZE", set.project_count()));
    out.push_str(&define("TABLE_MAX_ID", set.max_id() as usize));
    out.push_str(&define("TABLE_WRITABLE_COUNT", set.writable_count()));
    out.push_str(&define("MAX_STR_LENGTH", set.max_string_len()));
    out.push_str(&define("MAX_STR_SIZE", set.max_string_len() + 1));
    out.push_str(&define("MAX_BIN_SIZE", set.max_array_size()));

    out.push_str("\n/* Attribute Max String Lengths */\n");
    for attribute in set.attributes.iter().filter(|a| a.is_string()) {
        let name = format!("{}_MAX_STR_SIZE", underscore(&attribute.name).to_uppercase());
        out.push_str(&define(&name, attribute.string_max() + 1));
    }

    out.push_str("\n/* Attribute Byte Array Lengths */\n");
    for attribute in set.attributes.iter().filter(|a| a.array_size != 0) {
        let name = format!("{}_SIZE", underscore(&attribute.name).to_uppercase());
        out.push_str(&define(&name, attribute.array_size));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use attrgen_model::{Numeric, ProjectAttribute};

    fn sample() -> AttributeSet {
        let mut location = ProjectAttribute::new(1, "location", "string", "");
        location.maximum = Numeric::Int(32);
        location.writable = true;
        let mut lock = ProjectAttribute::new(4, "lock", "bool", "false");
        lock.writable = true;
        let mut key = ProjectAttribute::new(9, "rootKey", "uint8_t", "NA");
        key.array_size = 16;
        let mut set = AttributeSet::new("MG100");
        set.attributes = vec![location, lock, key];
        set
    }

    #[test]
    fn ids_are_column_aligned() {
        let ids = attribute_ids(&sample());
        let first = ids.lines().next().unwrap_or_default();
        assert_eq!(first.len(), ID_WIDTH + 1);
        assert!(first.starts_with("#define ATTR_ID_location "));
        assert!(first.ends_with(" 1"));
    }

    #[test]
    fn only_special_names_get_indices() {
        assert_eq!(
            attribute_indices(&sample()),
            format!("#define ATTR_INDEX_{:<34} 1\n", "lock")
        );
    }

    #[test]
    fn constants_block() {
        // longest name is "location" (8), so keys are padded to 28
        let expected = "\
#define ATTR_TABLE_SIZE                   3
#define ATTR_TABLE_MAX_ID                 9
#define ATTR_TABLE_WRITABLE_COUNT         2
#define ATTR_MAX_STR_LENGTH               32
#define ATTR_MAX_STR_SIZE                 33
#define ATTR_MAX_BIN_SIZE                 16

/* Attribute Max String Lengths */
#define ATTR_LOCATION_MAX_STR_SIZE        33

/* Attribute Byte Array Lengths */
#define ATTR_ROOT_KEY_SIZE                16
";
        assert_eq!(attribute_constants(&sample()), expected);
    }
}
