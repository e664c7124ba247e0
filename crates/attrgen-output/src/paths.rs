//! Where a project's generated files live.

use std::path::{Path, PathBuf};

use attrgen_codegen::TargetFile;

/// Environment variable overriding the output root.
pub const ROOT_ENV_VAR: &str = "ATTRGEN_ROOT";

/// Resolve the output root: explicit value, then [`ROOT_ENV_VAR`], then the
/// current directory.
pub fn output_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(root) = explicit {
        return root.to_path_buf();
    }
    if let Ok(root) = std::env::var(ROOT_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(".")
}

/// `custom/<project>/{include,source}` under the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    project: String,
    base: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl AsRef<Path>, project: impl Into<String>) -> Self {
        let project = project.into();
        let base = root.as_ref().join("custom").join(&project);
        Self { project, base }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn header(&self) -> PathBuf {
        self.target(TargetFile::Header)
    }

    pub fn source(&self) -> PathBuf {
        self.target(TargetFile::Source)
    }

    pub fn target(&self, target: TargetFile) -> PathBuf {
        let dir = match target {
            TargetFile::Header => "include",
            TargetFile::Source => "source",
        };
        self.base.join(dir).join(target.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_under_custom() {
        let paths = ProjectPaths::new("/fw", "MG100");
        assert_eq!(
            paths.header(),
            PathBuf::from("/fw/custom/MG100/include/attr_table.h")
        );
        assert_eq!(
            paths.source(),
            PathBuf::from("/fw/custom/MG100/source/attr_table.c")
        );
        assert_eq!(paths.project(), "MG100");
    }

    #[test]
    fn explicit_root_wins() {
        assert_eq!(
            output_root(Some(Path::new("/explicit"))),
            PathBuf::from("/explicit")
        );
    }
}
