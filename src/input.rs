//! Locating and loading documents from the filesystem.

use crate::document::Document;
use crate::error::Result;
use crate::formats::markdown::MarkdownFormat;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Expands files and directories into the list of matching files.
///
/// Paths are expanded in the order given. Directories are walked recursively in sorted order,
/// keeping files whose extension is in `extensions`. Paths named explicitly are kept
/// regardless of extension.
///
/// # Errors
///
/// Returns an error if a path or directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk(&path, extensions, &mut found)?;
        } else if path.is_file() {
            found.push(path);
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ));
        }
    }
    Ok(found)
}

fn walk(dir: &Path, extensions: &[String], found: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();
    for path in entries {
        if path.is_dir() {
            walk(&path, extensions, found)?;
        } else if has_extension(&path, extensions) {
            found.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

#[must_use]
/// Route name for a document: its file stem.
pub fn document_name(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| path.display().to_string(), |stem| stem.to_string_lossy().into_owned())
}

/// Reads and parses a markdown file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the parser cannot be set up.
pub fn load_document(path: &Path) -> Result<Document> {
    let source = fs::read_to_string(path)?;
    MarkdownFormat.parse(&document_name(path), &source)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
