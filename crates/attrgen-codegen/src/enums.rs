//! Enumerations, their size assertions and the string accessors.

use attrgen_model::{AttributeSet, EnumView, ProjectAttribute};

use crate::format::{GS_CASE_WIDTH, REMAP_WIDTH};
use crate::inflect::{apply_acronym_fixes, titleize, underscore};

/// C enum definitions for every named enumeration, in the given order.
pub fn enumerations<'a>(views: impl IntoIterator<Item = EnumView<'a>>) -> String {
    let mut out = String::new();
    for view in views {
        let snake = underscore(view.name);
        let prefix = snake.to_uppercase();
        out.push_str(&format!("enum {snake} {{\n"));
        if view.include_errno {
            out.push_str(&format!("\t{prefix}_INCLUDE_ERRNO = INT32_MIN,\n"));
        }
        for member in view.members {
            out.push_str(&format!("\t{prefix}_{} = {},\n", member.key, member.value));
        }
        out.push_str("};\n\n");
    }
    out
}

/// Attribute enums followed by method enums.
pub fn all_enumerations(set: &AttributeSet) -> String {
    enumerations(set.enum_views())
}

fn enum_attributes(set: &AttributeSet) -> impl Iterator<Item = &ProjectAttribute> {
    set.attributes.iter().filter(|attribute| attribute.has_enum())
}

/// Build-time checks that each enum fits the storage of its attribute.
pub fn enum_size_checks(set: &AttributeSet) -> String {
    enum_attributes(set)
        .map(|attribute| {
            format!(
                "BUILD_ASSERT(sizeof(enum {}) == {});\n",
                underscore(&attribute.name),
                attribute.kind().size_tag()
            )
        })
        .collect()
}

/// One `switch` per enum attribute mapping values to display labels.
pub fn get_string_functions(set: &AttributeSet) -> String {
    enum_attributes(set)
        .filter_map(ProjectAttribute::enum_view)
        .map(get_string_function)
        .collect()
}

fn get_string_function(view: EnumView<'_>) -> String {
    let mut function = format!(
        "const char *const attr_get_string_{}(int value)\n{{\n\tswitch (value) {{\n",
        underscore(view.name)
    );
    for member in view.members {
        let case = format!("case {}:", member.value);
        function.push_str(&format!(
            "\t\t{case:<GS_CASE_WIDTH$}return \"{}\";\n",
            titleize(&member.key)
        ));
    }
    function.push_str(&format!("\t\t{:<GS_CASE_WIDTH$}", "default:"));
    if view.include_errno {
        function.push_str("return errno_str_get(value);\n");
    } else {
        function.push_str("return \"?\";\n");
    }
    function.push_str("\t}\n}\n\n");
    apply_acronym_fixes(&function)
}

pub fn get_string_prototypes(set: &AttributeSet) -> String {
    enum_attributes(set)
        .map(|attribute| {
            format!(
                "const char *const attr_get_string_{}(int value);\n",
                underscore(&attribute.name)
            )
        })
        .collect()
}

/// Aliases from the camelCase accessor names to the snake_case functions.
pub fn get_string_remap(set: &AttributeSet) -> String {
    enum_attributes(set)
        .map(|attribute| {
            let camel = format!("attr_get_string_{} ", attribute.name);
            format!(
                "#define {camel:<REMAP_WIDTH$}attr_get_string_{}\n",
                underscore(&attribute.name)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use attrgen_model::{EnumMember, MethodEnum};

    fn led_mode_set() -> AttributeSet {
        let mut mode = ProjectAttribute::new(5, "ledMode", "uint8_t", "0");
        mode.enumeration = vec![EnumMember::new("OFF", 0), EnumMember::new("ON", 1)];
        let mut set = AttributeSet::new("MG100");
        set.attributes = vec![ProjectAttribute::new(1, "plain", "uint8_t", "0"), mode];
        set
    }

    #[test]
    fn enum_definition() {
        assert_eq!(
            all_enumerations(&led_mode_set()),
            "enum led_mode {\n\tLED_MODE_OFF = 0,\n\tLED_MODE_ON = 1,\n};\n\n"
        );
    }

    #[test]
    fn method_enums_follow_attribute_enums() {
        let mut set = led_mode_set();
        set.method_enums.push(MethodEnum {
            name: "resetMode".to_string(),
            members: vec![EnumMember::new("SOFT", 0)],
            include_errno: true,
        });
        let text = all_enumerations(&set);
        let reset = text.find("enum reset_mode {\n\tRESET_MODE_INCLUDE_ERRNO = INT32_MIN,\n");
        assert!(reset.is_some_and(|position| position > text.find("enum led_mode").unwrap_or(0)));
        assert!(text.ends_with("\tRESET_MODE_SOFT = 0,\n};\n\n"));
    }

    #[test]
    fn size_check_uses_storage_type() {
        assert_eq!(
            enum_size_checks(&led_mode_set()),
            "BUILD_ASSERT(sizeof(enum led_mode) == ATTR_SIZE_U8);\n"
        );
    }

    #[test]
    fn accessor_switch() {
        assert_eq!(
            get_string_functions(&led_mode_set()),
            "const char *const attr_get_string_led_mode(int value)\n\
             {\n\
             \tswitch (value) {\n\
             \t\tcase 0:           return \"Off\";\n\
             \t\tcase 1:           return \"On\";\n\
             \t\tdefault:          return \"?\";\n\
             \t}\n\
             }\n\n"
        );
    }

    #[test]
    fn accessor_labels_keep_acronyms() {
        let mut mode = ProjectAttribute::new(9, "ipMode", "uint8_t", "0");
        mode.enum_include_errno = true;
        mode.enumeration = vec![
            EnumMember::new("DHCP_FAILED", 0),
            EnumMember::new("IPV6_ONLY", 1),
        ];
        let mut set = AttributeSet::new("MG100");
        set.attributes = vec![mode];
        let text = get_string_functions(&set);
        assert!(text.contains("return \"DHCP Failed\";"));
        assert!(text.contains("return \"IPv6 Only\";"));
        assert!(text.contains("\t\tdefault:          return errno_str_get(value);\n"));
    }

    #[test]
    fn prototypes_and_remap() {
        let set = led_mode_set();
        assert_eq!(
            get_string_prototypes(&set),
            "const char *const attr_get_string_led_mode(int value);\n"
        );
        assert_eq!(
            get_string_remap(&set),
            "#define attr_get_string_ledMode             attr_get_string_led_mode\n"
        );
    }
}
