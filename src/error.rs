use std::path::PathBuf;

/// Conditions that stop a run before any output is produced.
#[derive(Debug, thiserror::Error)]
pub enum DocsetError {
    #[error("source {0:?} is not a directory")]
    SourceNotDirectory(PathBuf),

    #[error("source entry {0:?} has no file name")]
    MissingFileName(PathBuf),
}
