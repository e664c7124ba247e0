//! Data model for the attribute table generator.
//!
//! A run loads an [`AttributeSet`] for one project and hands it to the text
//! generators. Nothing here performs I/O.

pub mod attribute;
pub mod kind;
pub mod numeric;
pub mod set;

pub use attribute::{DEFAULT_NOT_APPLICABLE, EnumMember, EnumView, MethodEnum, ProjectAttribute};
pub use kind::AttributeKind;
pub use numeric::Numeric;
pub use set::{ApiEntry, AttributeSet};
