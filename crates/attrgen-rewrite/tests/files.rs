//! File-level rewrites against temporary files.

use std::fs;

use attrgen_rewrite::{
    AppVersion, RenumberOptions, RewriteError, bump_app_version, renumber_file,
};
use tempfile::TempDir;

#[test]
fn app_version_rewrites_header_and_writes_version_file() {
    let temp = TempDir::new().unwrap();
    let header = temp.path().join("app_version.h");
    let output = temp.path().join("version.txt");
    fs::write(
        &header,
        "#define APP_VERSION_MAJOR 1\n#define APP_VERSION_MINOR 5\n#define APP_VERSION_PATCH 9\n",
    )
    .unwrap();

    let version = bump_app_version(&header, &output).unwrap();

    assert_eq!(
        version,
        AppVersion {
            major: 1,
            minor: 5,
            patch: 10
        }
    );
    assert_eq!(
        fs::read_to_string(&header).unwrap(),
        "#define APP_VERSION_MAJOR 1\n#define APP_VERSION_MINOR 5\n#define APP_VERSION_PATCH 10\n"
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), "version=1.5.10");
}

#[test]
fn missing_header_is_a_read_error() {
    let temp = TempDir::new().unwrap();
    let err = bump_app_version(
        &temp.path().join("absent.h"),
        &temp.path().join("version.txt"),
    )
    .unwrap_err();
    assert!(matches!(err, RewriteError::Read { .. }));
    assert!(!temp.path().join("version.txt").exists());
}

#[test]
fn renumber_file_in_place() {
    let temp = TempDir::new().unwrap();
    let schema = temp.path().join("attributes.json");
    fs::write(
        &schema,
        "[\n  { \"name\": \"a\",\n    \"x-id\": 12,\n  },\n  {\n    \"x-id\": 145,\n  }\n]\n",
    )
    .unwrap();

    let count = renumber_file(
        &schema,
        RenumberOptions {
            base: 10,
            offset: 20,
        },
    )
    .unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        fs::read_to_string(&schema).unwrap(),
        "[\n  { \"name\": \"a\",\n    \"x-id\": 20,\n  },\n  {\n    \"x-id\": 21,\n  }\n]\n"
    );
}

#[test]
fn renumber_overflow_leaves_schema_untouched() {
    let temp = TempDir::new().unwrap();
    let schema = temp.path().join("attributes.json");
    let original = "[\n  {\n    \"x-id\": 150,\n  },\n  {\n    \"x-id\": 151,\n  }\n]\n";
    fs::write(&schema, original).unwrap();

    let err = renumber_file(
        &schema,
        RenumberOptions {
            base: 140,
            offset: u32::MAX,
        },
    )
    .unwrap_err();

    assert!(matches!(err, RewriteError::IdOverflow { line: 6, .. }));
    assert_eq!(fs::read_to_string(&schema).unwrap(), original);
}
