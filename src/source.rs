use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::error::DocsetError;

/// One file of the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFile {
    /// Reference page to parse and index.
    Page {
        path: PathBuf,
        name: String,
        basename: String,
    },
    /// Stylesheet, image or anything else copied through untouched.
    Asset { path: PathBuf, name: String },
}

impl SourceFile {
    pub fn name(&self) -> &str {
        match self {
            SourceFile::Page { name, .. } | SourceFile::Asset { name, .. } => name,
        }
    }
}

/// Regular files of `dir`, sorted by file name. Sub-directories are skipped.
pub fn list(dir: &Path) -> Result<Vec<SourceFile>> {
    if !dir.is_dir() {
        return Err(DocsetError::SourceNotDirectory(dir.to_path_buf()).into());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("Failed to read {:?}", dir))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        files.push(classify(path)?);
    }
    files.sort_by(|a, b| a.name().cmp(b.name()));

    let pages = files
        .iter()
        .filter(|f| matches!(f, SourceFile::Page { .. }))
        .count();
    info!("Found {} pages and {} assets in {:?}", pages, files.len() - pages, dir);
    Ok(files)
}

fn classify(path: PathBuf) -> Result<SourceFile> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| DocsetError::MissingFileName(path.clone()))?;

    let is_page = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"));
    if !is_page {
        return Ok(SourceFile::Asset { path, name });
    }

    let basename = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(SourceFile::Page {
        path,
        name,
        basename,
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_and_assets_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["sql-select.html", "functions-string.html", "stylesheet.css", "index.HTM"] {
            std::fs::write(dir.path().join(name), "<html></html>").unwrap();
        }
        std::fs::create_dir(dir.path().join("images")).unwrap();

        let files = list(dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec!["functions-string.html", "index.HTM", "sql-select.html", "stylesheet.css"]
        );
        assert!(matches!(
            &files[0],
            SourceFile::Page { basename, .. } if basename == "functions-string"
        ));
        assert!(matches!(&files[3], SourceFile::Asset { .. }));
    }

    #[test]
    fn file_is_not_a_source_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("page.html");
        std::fs::write(&file, "").unwrap();
        let err = list(&file).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }
}
