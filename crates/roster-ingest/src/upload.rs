//! Loading export files into [`UploadedFile`] values.

use std::path::Path;

use roster_model::UploadedFile;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Reads one file as text. Invalid UTF-8 is replaced rather than rejected.
pub fn read_upload(path: &Path) -> Result<UploadedFile> {
    if !path.exists() {
        return Err(IngestError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let size = bytes.len() as u64;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map_or_else(|| path.display().to_string(), str::to_string);
    let text = String::from_utf8_lossy(&bytes).into_owned();
    debug!(file = %name, size_bytes = size, "read upload");
    Ok(UploadedFile::new(name, text).with_size(size))
}

/// Reads every path before returning, so callers receive the whole batch or
/// an error and never a partial list.
pub fn read_uploads(paths: &[impl AsRef<Path>]) -> Result<Vec<UploadedFile>> {
    paths.iter().map(|path| read_upload(path.as_ref())).collect()
}
