//! Input discovery: expanding directories into CSV files.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// CSV files directly inside `dir`, ordered by file name.
///
/// The extension match ignores case; subdirectories are not searched.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let read_error = |source: std::io::Error| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = std::fs::read_dir(dir)
        .map_err(read_error)?
        .map(|entry| entry.map(|entry| entry.path()).map_err(read_error))
        .filter(|path| !matches!(path, Ok(path) if !is_csv_file(path)))
        .collect::<Result<Vec<_>>>()?;
    files.sort_unstable_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn is_csv_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Expands input paths: files are kept as given, directories are replaced by
/// the CSV files inside them. Order follows the arguments.
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let found = list_csv_files(input)?;
            debug!(dir = %input.display(), file_count = found.len(), "expanded directory");
            files.extend(found);
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(IngestError::NotFound {
                path: input.clone(),
            });
        }
    }
    Ok(files)
}
