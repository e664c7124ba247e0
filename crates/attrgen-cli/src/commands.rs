use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use attrgen_output::{ProjectPaths, ensure_targets_exist, output_root, update_project_files};
use attrgen_rewrite::{AppVersion, RenumberOptions, bump_app_version, renumber_file};
use attrgen_schema::{
    ApiVersion, bump_and_persist_version, bump_document_version, load_for_project,
};
use attrgen_validate::check_duplicates;

use crate::types::{GenerateOptions, GenerateResult};

/// Bump the schema version, load the project subset, check it and splice
/// the generated regions into the project's table files.
pub fn run_generate(options: &GenerateOptions) -> Result<GenerateResult> {
    let span = info_span!("generate", project = %options.project);
    let _guard = span.enter();

    let root = output_root(options.root.as_deref());
    let paths = ProjectPaths::new(&root, &options.project);
    // fail before the schema is touched
    ensure_targets_exist(&paths)?;

    let version = if options.dry_run {
        next_version(&options.schema)?
    } else {
        bump_and_persist_version(&options.schema)
            .with_context(|| format!("bump version in {}", options.schema.display()))?
    };
    info!(version = %version, dry_run = options.dry_run, "api version");

    let set = load_for_project(&options.schema, &options.project)
        .with_context(|| format!("load {}", options.schema.display()))?;

    let duplicates_clean = check_duplicates(&set);
    if !duplicates_clean {
        warn!("continuing despite duplicate ids or names");
    }

    let files = update_project_files(&set, &paths, options.dry_run)
        .with_context(|| format!("update files under {}", paths.base().display()))?;

    Ok(GenerateResult {
        project: set.project.clone(),
        schema: options.schema.clone(),
        version,
        dry_run: options.dry_run,
        api_total: set.api_total(),
        project_count: set.project_count(),
        max_id: set.max_id(),
        method_enums: set.method_enums.len(),
        available_ids: set.available_ids(),
        duplicates_clean,
        files,
    })
}

/// The version a bump would produce, computed without writing.
fn next_version(schema: &Path) -> Result<ApiVersion> {
    let mut document = attrgen_schema::document::read_document(schema)
        .with_context(|| format!("read {}", schema.display()))?;
    Ok(bump_document_version(&mut document)?)
}

pub fn run_bump_version(schema: &Path) -> Result<ApiVersion> {
    let span = info_span!("bump_version", schema = %schema.display());
    let _guard = span.enter();
    bump_and_persist_version(schema)
        .with_context(|| format!("bump version in {}", schema.display()))
}

pub fn run_bump_app_version(header: &Path, output: &Path) -> Result<AppVersion> {
    bump_app_version(header, output)
        .with_context(|| format!("bump application version in {}", header.display()))
}

pub fn run_renumber(schema: &Path, options: RenumberOptions) -> Result<u32> {
    renumber_file(schema, options).with_context(|| format!("renumber {}", schema.display()))
}
