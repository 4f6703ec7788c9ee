//! Per-session application state owned by the front end.
//!
//! The analysis itself is [`roster_analyze::analyze_inputs`]; the session only
//! tracks what the user supplied and the last successful result.

use roster_analyze::{AnalyzeError, analyze_inputs};
use roster_model::{AnalysisRun, FileId, UploadedFile};
use tracing::{debug, warn};

/// Which screen the front end shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Input,
    Dashboard,
}

#[derive(Debug, Default)]
pub struct Session {
    files: Vec<UploadedFile>,
    pasted_text: String,
    results: Option<AnalysisRun>,
    mode: ViewMode,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    /// Appends a fully-read batch of files in one step.
    pub fn add_files(&mut self, batch: Vec<UploadedFile>) {
        debug!(file_count = batch.len(), "adding file batch");
        self.files.extend(batch);
    }

    /// Removes the file with `id`, returning it if it was present.
    pub fn remove_file(&mut self, id: FileId) -> Option<UploadedFile> {
        let idx = self.files.iter().position(|file| file.id == id)?;
        Some(self.files.remove(idx))
    }

    /// Removes every file called `name` and returns how many were dropped.
    pub fn remove_files_named(&mut self, name: &str) -> usize {
        let before = self.files.len();
        self.files.retain(|file| file.name != name);
        let removed = before - self.files.len();
        if removed == 0 {
            warn!(file = %name, "excluded file was not loaded");
        } else {
            debug!(file = %name, removed, "excluded file");
        }
        removed
    }

    pub fn pasted_text(&self) -> &str {
        &self.pasted_text
    }

    pub fn set_pasted_text(&mut self, text: impl Into<String>) {
        self.pasted_text = text.into();
    }

    pub fn results(&self) -> Option<&AnalysisRun> {
        self.results.as_ref()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Recomputes every analysis from the current inputs.
    ///
    /// On error nothing changes. On success the previous results are replaced
    /// wholesale and the dashboard view is selected.
    pub fn analyze(&mut self) -> Result<&AnalysisRun, AnalyzeError> {
        let run = analyze_inputs(&self.files, Some(self.pasted_text.as_str()))?;
        self.mode = ViewMode::Dashboard;
        Ok(&*self.results.insert(run))
    }

    /// Clears inputs and results and returns to the input view.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
