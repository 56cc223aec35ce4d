use std::path::Path;

use crate::parser;
use crate::resolver::{self, Project};
use crate::types::error::SpecError;

/// Errors that prevent the document from being read at all, plus the
/// configuration errors surfaced while resolving it.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("I/O error reading {0}: {1}")]
    Io(String, std::io::Error),

    #[error(transparent)]
    Spec(#[from] SpecError),
}

/// Read, parse and resolve a document from disk.
pub fn load_document(path: &Path) -> Result<Project, LoadError> {
    if !path.is_file() {
        return Err(LoadError::InputNotFound(
            path.to_string_lossy().into_owned(),
        ));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| LoadError::Io(path.to_string_lossy().into_owned(), e))?;

    let display = path.to_string_lossy().into_owned();
    let raw = parser::parse_document(&content, &display)?;
    Ok(resolver::resolve(raw)?)
}
