//! Region tags and the generator bound to each, per target file.

use std::fmt;

use attrgen_model::AttributeSet;

use crate::constants::{attribute_constants, attribute_ids, attribute_indices};
use crate::enums::{
    all_enumerations, enum_size_checks, get_string_functions, get_string_prototypes,
    get_string_remap,
};
use crate::prepare::{prepare_prototypes, prepare_weak_implementations};
use crate::structs::{ro_attributes, ro_defaults, rw_attributes, rw_defaults};
use crate::table::{attribute_map, attribute_table};

/// A named generated region.
#[derive(Clone, Copy)]
pub struct Region {
    /// Text identifying the region on its `pystart` line.
    pub tag: &'static str,
    pub render: fn(&AttributeSet) -> String,
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region").field("tag", &self.tag).finish()
    }
}

const fn region(tag: &'static str, render: fn(&AttributeSet) -> String) -> Region {
    Region { tag, render }
}

/// Source file regions. Order matters: the first tag found on a start line
/// wins.
pub const SOURCE_REGIONS: &[Region] = &[
    region("attribute table", attribute_table),
    region("attribute map", attribute_map),
    region("rw attributes", rw_attributes),
    region("rw defaults", rw_defaults),
    region("ro attributes", ro_attributes),
    region("ro defaults", ro_defaults),
    region(
        "prepare for read - weak implementations",
        prepare_weak_implementations,
    ),
    region("get string", get_string_functions),
    region("remap", get_string_remap),
];

/// Header file regions, first match wins.
pub const HEADER_REGIONS: &[Region] = &[
    region("attribute ids", attribute_ids),
    region("attribute indices", attribute_indices),
    region("attribute constants", attribute_constants),
    region("prepare for read", prepare_prototypes),
    region("enumerations", all_enumerations),
    region("enum size check", enum_size_checks),
    region("get string", get_string_prototypes),
];

/// The two generated files of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFile {
    Source,
    Header,
}

impl TargetFile {
    pub const ALL: [Self; 2] = [Self::Header, Self::Source];

    pub fn regions(self) -> &'static [Region] {
        match self {
            Self::Source => SOURCE_REGIONS,
            Self::Header => HEADER_REGIONS,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Source => "attr_table.c",
            Self::Header => "attr_table.h",
        }
    }

    /// The region whose tag appears on `start_line`, if any.
    pub fn region_for(self, start_line: &str) -> Option<&'static Region> {
        self.regions()
            .iter()
            .find(|region| start_line.contains(region.tag))
    }

    /// Generated text for the region opened by `start_line`.
    pub fn render_region(self, set: &AttributeSet, start_line: &str) -> Option<String> {
        self.region_for(start_line)
            .map(|region| (region.render)(set))
    }
}

impl fmt::Display for TargetFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weak_implementations_win_over_get_string_in_source() {
        let region = TargetFile::Source
            .region_for("/* pystart - prepare for read - weak implementations */");
        assert_eq!(
            region.map(|r| r.tag),
            Some("prepare for read - weak implementations")
        );
    }

    #[test]
    fn header_prepare_is_prototypes() {
        let region = TargetFile::Header.region_for("/* pystart - prepare for read */");
        assert_eq!(region.map(|r| r.tag), Some("prepare for read"));
    }

    #[test]
    fn unknown_tags_match_nothing() {
        assert!(TargetFile::Header.region_for("/* pystart - remap */").is_none());
        assert!(TargetFile::Source.region_for("/* pystart - enumerations */").is_none());
    }
}
