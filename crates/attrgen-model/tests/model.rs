//! Tests for attrgen-model types.

use attrgen_model::{
    ApiEntry, AttributeKind, AttributeSet, EnumMember, MethodEnum, Numeric, ProjectAttribute,
};
use proptest::prelude::*;

fn api(entries: &[(u32, &str)]) -> Vec<ApiEntry> {
    entries
        .iter()
        .map(|(id, name)| ApiEntry {
            id: *id,
            name: (*name).to_string(),
        })
        .collect()
}

#[test]
fn string_max_only_for_strings() {
    let mut location = ProjectAttribute::new(1, "location", "string", "");
    location.maximum = Numeric::Int(32);
    let mut passkey = ProjectAttribute::new(4, "passkey", "uint32_t", "123456");
    passkey.maximum = Numeric::Int(999_999);

    assert_eq!(location.string_max(), 32);
    assert_eq!(passkey.string_max(), 0);
}

#[test]
fn set_aggregates() {
    let mut set = AttributeSet::new("MG100");
    let mut location = ProjectAttribute::new(1, "location", "string", "");
    location.maximum = Numeric::Int(32);
    location.writable = true;
    let mut key = ProjectAttribute::new(7, "clientKey", "uint8_t", "NA");
    key.array_size = 64;
    set.attributes = vec![location, key];

    assert_eq!(set.project_count(), 2);
    assert_eq!(set.max_id(), 7);
    assert_eq!(set.writable_count(), 1);
    assert_eq!(set.max_string_len(), 32);
    assert_eq!(set.max_array_size(), 64);
    assert_eq!(set.max_name_len(), "clientKey".len());
    assert_eq!(set.index_of_id(7), Some(1));
}

#[test]
fn available_ids_are_unused_slots_below_total() {
    let mut set = AttributeSet::new("MG100");
    set.api = api(&[(0, "a"), (2, "b"), (3, "c"), (9, "d")]);
    assert_eq!(set.available_ids(), vec![1]);
}

#[test]
fn enum_views_list_attributes_before_methods() {
    let mut set = AttributeSet::new("MG100");
    let mut led = ProjectAttribute::new(5, "ledMode", "uint8_t", "0");
    led.enumeration = vec![EnumMember::new("OFF", 0), EnumMember::new("ON", 1)];
    set.attributes = vec![ProjectAttribute::new(1, "plain", "uint8_t", "0"), led];
    set.method_enums = vec![MethodEnum {
        name: "factoryReset".to_string(),
        members: vec![EnumMember::new("NOW", 1)],
        include_errno: true,
    }];

    let names: Vec<&str> = set.enum_views().map(|view| view.name).collect();
    assert_eq!(names, vec!["ledMode", "factoryReset"]);
    assert!(set.enum_views().nth(1).unwrap().include_errno);
}

const CTYPES: &[&str] = &[
    "string", "float", "bool", "int8_t", "int16_t", "int32_t", "int64_t", "uint8_t", "uint16_t",
    "uint32_t", "uint64_t", "char", "double", "",
];

proptest! {
    #[test]
    fn classify_is_total(ctype in "[a-z0-9_]{0,10}", array_size in 0usize..512) {
        let kind = AttributeKind::classify(&ctype, array_size);
        if ctype == "string" {
            prop_assert_eq!(kind, AttributeKind::String);
        } else if array_size != 0 {
            prop_assert_eq!(kind, AttributeKind::ByteArray);
        }
        prop_assert!(kind.type_tag().starts_with("ATTR_TYPE_"));
    }

    #[test]
    fn array_length_always_makes_byte_array(index in 0usize..CTYPES.len(), array_size in 1usize..512) {
        let ctype = CTYPES[index];
        let kind = AttributeKind::classify(ctype, array_size);
        if ctype == "string" {
            prop_assert_eq!(kind, AttributeKind::String);
        } else {
            prop_assert_eq!(kind, AttributeKind::ByteArray);
        }
    }
}
