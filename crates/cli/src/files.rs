use std::path::{Path, PathBuf};

use glob::MatchOptions;
use serde_json::Value;

use crate::EditError;

/// Expands a glob pattern into the matching paths, in lexicographic order.
///
/// Like shell globbing, wildcards do not match a leading `.` in a file name.
pub(crate) fn find_files(pattern: &str) -> Result<Vec<PathBuf>, EditError> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let paths = glob::glob_with(pattern, options).map_err(|source| EditError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => files.push(path),
            Err(err) => {
                tracing::warn!(
                    path = %err.path().display(),
                    error = %err.error(),
                    "skipping unreadable path"
                );
            }
        }
    }

    Ok(files)
}

pub(crate) fn load_document(path: &Path) -> Result<Value, EditError> {
    let data = std::fs::read(path).map_err(|source| EditError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| EditError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the document with 2-space indentation and no trailing newline.
pub(crate) fn store_document(path: &Path, document: &Value) -> Result<(), EditError> {
    let data = serde_json::to_vec_pretty(document).map_err(|source| EditError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| EditError::Write {
        path: path.to_path_buf(),
        source,
    })
}
