use std::path::PathBuf;

use attrgen_output::SpliceReport;
use attrgen_schema::ApiVersion;

/// Inputs of one `generate` run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub schema: PathBuf,
    pub project: String,
    /// Output root; falls back to `ATTRGEN_ROOT`, then the current directory.
    pub root: Option<PathBuf>,
    /// Render everything, write nothing (the schema version included).
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct GenerateResult {
    pub project: String,
    pub schema: PathBuf,
    /// New API version; in a dry run, the version a real run would write.
    pub version: ApiVersion,
    pub dry_run: bool,
    pub api_total: usize,
    pub project_count: usize,
    pub max_id: u32,
    pub method_enums: usize,
    pub available_ids: Vec<u32>,
    /// False when a duplicate id or name was logged.
    pub duplicates_clean: bool,
    pub files: Vec<SpliceReport>,
}
