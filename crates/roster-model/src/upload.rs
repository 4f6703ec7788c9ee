use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_FILE_ID: AtomicU64 = AtomicU64::new(1);

/// Session-unique identifier for an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileId(u64);

impl FileId {
    /// Allocates an identifier that has not been handed out in this process.
    pub fn next() -> Self {
        Self(NEXT_FILE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Raw contents of one selected input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub id: FileId,
    /// Display name, usually the file name without directories.
    pub name: String,
    pub raw_text: String,
    pub size_bytes: u64,
}

impl UploadedFile {
    /// Builds an upload with a fresh id; the size is the text length in bytes.
    pub fn new(name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let size_bytes = raw_text.len() as u64;
        Self {
            id: FileId::next(),
            name: name.into(),
            raw_text,
            size_bytes,
        }
    }

    /// Overrides the recorded size, e.g. with the on-disk length.
    #[must_use]
    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = size_bytes;
        self
    }
}
