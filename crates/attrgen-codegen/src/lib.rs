//! Generators for the C fragments spliced into `attr_table.c` and
//! `attr_table.h`.
//!
//! Every generator is a pure function of the [`AttributeSet`]; the same set
//! always yields byte-identical text. [`TargetFile`] binds region tags to
//! generators for the splicer.
//!
//! [`AttributeSet`]: attrgen_model::AttributeSet

pub mod constants;
pub mod enums;
pub mod format;
pub mod inflect;
pub mod prepare;
pub mod regions;
pub mod structs;
pub mod table;

pub use crate::regions::{HEADER_REGIONS, Region, SOURCE_REGIONS, TargetFile};
