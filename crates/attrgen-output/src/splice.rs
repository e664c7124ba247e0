//! Rewriting target files with freshly generated regions.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span, warn};

use attrgen_codegen::TargetFile;
use attrgen_model::AttributeSet;

use crate::error::{OutputError, Result};
use crate::paths::ProjectPaths;
use crate::template::{FILL_MARKER, Segment, Template};

/// Outcome of splicing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceReport {
    pub target: TargetFile,
    pub path: PathBuf,
    /// Regions found in the file.
    pub regions: usize,
    /// Regions that received generated text.
    pub filled: usize,
    /// Whether the new content differs from what was on disk.
    pub changed: bool,
    /// Whether the file was actually rewritten.
    pub written: bool,
}

/// Rendered file content, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub target: TargetFile,
    pub path: PathBuf,
    pub original: String,
    pub content: String,
    pub regions: usize,
    pub filled: usize,
}

/// Read `path` and render it with the generators of `target`.
pub fn render_file(set: &AttributeSet, target: TargetFile, path: &Path) -> Result<RenderedFile> {
    let original = fs::read_to_string(path).map_err(|source| OutputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let template = Template::parse(&original).map_err(|err| OutputError::UnterminatedRegion {
        path: path.to_path_buf(),
        line: err.line,
    })?;

    for segment in template.segments() {
        if let Segment::Hole { start_line, line } = segment
            && start_line.contains(FILL_MARKER)
            && target.region_for(start_line).is_none()
        {
            warn!(path = %path.display(), line, "no generator for region: {}", start_line.trim());
        }
    }

    let mut filled = 0;
    let content = template.render(|start_line| {
        let body = target.render_region(set, start_line)?;
        filled += 1;
        Some(body)
    });

    Ok(RenderedFile {
        target,
        path: path.to_path_buf(),
        original,
        content,
        regions: template.hole_count(),
        filled,
    })
}

/// Replace `path` with `content` in one step: write a sibling temp file,
/// then rename it over the target.
pub fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let write_err = |source: std::io::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(content.as_bytes()).map_err(write_err)?;
    temp.flush().map_err(write_err)?;
    temp.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}

/// Render and rewrite one file in place.
pub fn splice_file(set: &AttributeSet, target: TargetFile, path: &Path) -> Result<SpliceReport> {
    let span = info_span!("splice", file = %target, path = %path.display());
    let _guard = span.enter();

    let rendered = render_file(set, target, path)?;
    write_atomically(path, &rendered.content)?;
    let summary = report(&rendered, true);
    info!(
        regions = summary.regions,
        filled = summary.filled,
        changed = summary.changed,
        "wrote {}",
        path.display()
    );
    Ok(summary)
}

fn report(rendered: &RenderedFile, written: bool) -> SpliceReport {
    SpliceReport {
        target: rendered.target,
        path: rendered.path.clone(),
        regions: rendered.regions,
        filled: rendered.filled,
        changed: rendered.content != rendered.original,
        written,
    }
}

/// Both target files must exist before anything is touched.
pub fn ensure_targets_exist(paths: &ProjectPaths) -> Result<()> {
    for target in TargetFile::ALL {
        let path = paths.target(target);
        if !path.is_file() {
            return Err(OutputError::MissingTarget {
                kind: match target {
                    TargetFile::Header => "header",
                    TargetFile::Source => "source",
                },
                project: paths.project().to_string(),
                path,
            });
        }
    }
    Ok(())
}

/// Regenerate the project's source and header files.
///
/// With `dry_run` everything is rendered but nothing is written.
pub fn update_project_files(
    set: &AttributeSet,
    paths: &ProjectPaths,
    dry_run: bool,
) -> Result<Vec<SpliceReport>> {
    ensure_targets_exist(paths)?;
    let mut reports = Vec::new();
    for target in [TargetFile::Source, TargetFile::Header] {
        let path = paths.target(target);
        if dry_run {
            let rendered = render_file(set, target, &path)?;
            debug!(path = %path.display(), filled = rendered.filled, "dry run, not writing");
            reports.push(report(&rendered, false));
        } else {
            reports.push(splice_file(set, target, &path)?);
        }
    }
    Ok(reports)
}
