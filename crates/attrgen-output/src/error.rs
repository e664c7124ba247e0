use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("missing {kind} file for project {project} at {path}")]
    MissingTarget {
        kind: &'static str,
        project: String,
        path: PathBuf,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: region opened on line {line} is never closed with `pyend`")]
    UnterminatedRegion { path: PathBuf, line: usize },
}

pub type Result<T> = std::result::Result<T, OutputError>;
