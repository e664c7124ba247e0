//! Splicing generated regions into a project's `attr_table.c` and
//! `attr_table.h`.
//!
//! A region runs from a line containing `pystart` to the next line
//! containing `pyend`. Both sentinel lines and everything outside regions
//! are preserved byte for byte; the region body is replaced.

pub mod error;
pub mod paths;
pub mod splice;
pub mod template;

pub use crate::error::{OutputError, Result};
pub use crate::paths::{ProjectPaths, ROOT_ENV_VAR, output_root};
pub use crate::splice::{
    RenderedFile, SpliceReport, ensure_targets_exist, render_file, splice_file,
    update_project_files, write_atomically,
};
pub use crate::template::{Segment, Template};
