//! Master Document List — the authoritative list of document series and codes.
//!
//! Authored by the quality team, one `CODE - Description` entry per line.
//! Loaded once at startup and never mutated; the text is interpolated verbatim
//! into the assessment prompt, so nothing is parsed beyond counting entries
//! for the startup log.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

#[derive(Debug, Clone)]
pub struct MasterList {
    text: String,
}

impl MasterList {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// Reads the master list from disk. A missing or unreadable file is fatal
    /// to startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).with_context(|| {
            format!(
                "Failed to read master document list at '{}'",
                path.display()
            )
        })?;

        let list = Self::new(text);
        info!(
            "Master document list loaded: {} entries from {}",
            list.entry_count(),
            path.display()
        );
        Ok(list)
    }

    /// The verbatim file contents, exactly as interpolated into the prompt.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of non-empty lines.
    pub fn entry_count(&self) -> usize {
        self.text.lines().filter(|l| !l.trim().is_empty()).count()
    }
}
