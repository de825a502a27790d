//! The open document: text, backing file, and snapshot history.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tiny_pad_mod_history::SnapshotHistory;

use crate::encoding::{
    apply_line_ending, decode_bytes, detect_encoding, detect_line_ending, encode_string,
    normalize_line_endings, LineEnding, TextEncoding,
};

/// Title used for documents that were never saved.
pub const UNTITLED: &str = "Untitled";

/// A single text document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Current text with `\n` line endings.
    pub text: String,
    pub file_path: Option<PathBuf>,
    pub title: String,
    pub encoding: TextEncoding,
    pub line_ending: LineEnding,
    /// Whether the text differs from what was last written or read.
    pub modified: bool,
    pub last_saved_at: Option<DateTime<Local>>,
    pub history: SnapshotHistory,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty, untitled document.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            file_path: None,
            title: UNTITLED.to_string(),
            encoding: TextEncoding::default(),
            line_ending: LineEnding::default(),
            modified: false,
            last_saved_at: None,
            history: SnapshotHistory::new(),
        }
    }

    /// Opens a document from a file, detecting encoding and line endings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read file: {}", path.display()))?;

        let encoding = detect_encoding(&bytes);
        let raw_text = decode_bytes(&bytes, encoding)
            .with_context(|| format!("failed to decode file: {}", path.display()))?;
        let line_ending = detect_line_ending(&raw_text);

        tracing::debug!(
            path = %path.display(),
            %encoding,
            %line_ending,
            "opened document"
        );

        Ok(Self {
            text: normalize_line_endings(&raw_text),
            file_path: Some(path.to_path_buf()),
            title: title_for(path),
            encoding,
            line_ending,
            modified: false,
            last_saved_at: None,
            history: SnapshotHistory::new(),
        })
    }

    /// Saves to the remembered file path.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is set or the write fails.
    pub fn save(&mut self) -> Result<()> {
        let path = self
            .file_path
            .clone()
            .context("no file path set for this document")?;
        self.save_to(&path)
    }

    /// Writes the text to `path`, remembers it, and records a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be encoded or written.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        self.write_to(path)?;
        self.history.record_snapshot(self.text.clone());
        Ok(())
    }

    /// Writes the text to `path` and remembers it, without touching history.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be encoded or written.
    pub fn write_to(&mut self, path: &Path) -> Result<()> {
        let with_endings = apply_line_ending(&self.text, self.line_ending);
        let bytes = encode_string(&with_endings, self.encoding)
            .context("failed to encode document for saving")?;
        std::fs::write(path, bytes)
            .with_context(|| format!("failed to write file: {}", path.display()))?;

        self.file_path = Some(path.to_path_buf());
        self.title = title_for(path);
        self.modified = false;
        self.last_saved_at = Some(Local::now());
        tracing::debug!(path = %path.display(), "saved document");
        Ok(())
    }

    /// Steps back to the previous saved snapshot, if there is one.
    pub fn undo(&mut self) {
        if let Some(text) = self.history.undo() {
            self.adopt(text);
        }
    }

    /// Steps forward to the next saved snapshot, or re-applies the latest one.
    pub fn redo(&mut self) {
        if let Some(text) = self.history.redo() {
            self.adopt(text);
        }
    }

    /// Replaces the whole text, as an edit.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.modified = true;
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn adopt(&mut self, text: String) {
        if self.text != text {
            self.text = text;
            self.modified = true;
        }
    }
}

fn title_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| UNTITLED.to_string())
}
