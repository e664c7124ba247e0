//! Line-oriented maintenance rewrites that sit next to the generator: the
//! firmware patch version bump and attribute id renumbering.
//!
//! Both copy unrecognized lines through untouched and log lines that look
//! relevant but cannot be parsed.

pub mod app_version;
pub mod error;
mod lines;
pub mod renumber;

pub use crate::app_version::{AppVersion, DEFAULT_VERSION_OUTPUT, bump_app_version};
pub use crate::error::{Result, RewriteError};
pub use crate::renumber::{RenumberOptions, renumber_file};
