//! The editor session: all state behind one editor window.
//!
//! The front end owns a single `EditorSession` and calls one method per user
//! action. Anything needing a native dialog or process takes a [`Platform`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tiny_pad_config::{AppConfig, ArgbColor, FontSpec};

use crate::clipboard::{ClipboardSlot, Selection};
use crate::document::Document;
use crate::platform::Platform;
use crate::word_count::{count_words, format_word_count, INITIAL_LABEL};

pub const AUTOSAVE_ON_TOOLTIP: &str = "Autosave : ON";
pub const AUTOSAVE_OFF_TOOLTIP: &str = "Autosave : OFF";

/// Result of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// The user dismissed the save dialog; nothing was written.
    Cancelled,
}

/// What the shell should do after an exit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    Close,
    /// The save-before-exit failed; keep the window open.
    Stay,
}

#[derive(Debug)]
pub struct EditorSession {
    pub document: Document,
    pub clipboard: ClipboardSlot,
    /// Current selection in the text widget, in characters.
    pub selection: Selection,
    /// Preferences, including the applied font and text color.
    pub config: AppConfig,
    pub word_count_label: String,
    pub word_count_open: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl EditorSession {
    pub fn new(config: AppConfig) -> Self {
        Self {
            document: Document::new(),
            clipboard: ClipboardSlot::new(),
            selection: Selection::default(),
            config,
            word_count_label: INITIAL_LABEL.to_string(),
            word_count_open: false,
        }
    }

    // ── File ────────────────────────────────────────────────────────

    /// Asks for a file and loads it, replacing the current document.
    ///
    /// Returns `Ok(false)` if the dialog was cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be read or decoded.
    pub fn open(&mut self, platform: &mut dyn Platform) -> Result<bool> {
        let start_dir = self.config.resolve_work_folder();
        let Some(path) = platform.pick_open_path(start_dir.as_deref()) else {
            tracing::debug!("open cancelled");
            return Ok(false);
        };
        self.config.remember_folder_of(&path);
        self.open_path(&path)?;
        Ok(true)
    }

    /// Loads `path` as the current document. Saved snapshots carry over.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn open_path(&mut self, path: &Path) -> Result<()> {
        let mut document = Document::open(path)?;
        document.history = std::mem::take(&mut self.document.history);
        self.document = document;
        self.selection = Selection::default();
        tracing::info!("Opened {}", path.display());
        Ok(())
    }

    /// Saves to the remembered path, asking for one first if there is none.
    ///
    /// Every save request records a snapshot of the text, including one whose
    /// dialog was cancelled. A failed write records nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&mut self, platform: &mut dyn Platform) -> Result<SaveOutcome> {
        let path = match self.document.file_path.clone() {
            Some(path) => path,
            None => match self.ask_save_path(platform) {
                Some(path) => path,
                None => {
                    self.document
                        .history
                        .record_snapshot(self.document.text.clone());
                    return Ok(SaveOutcome::Cancelled);
                }
            },
        };
        self.document.save_to(&path)?;
        tracing::info!("Saved {}", path.display());
        Ok(SaveOutcome::Saved(path))
    }

    /// Always asks for a target, then writes there and remembers it.
    ///
    /// Unlike [`save`](Self::save), no snapshot is recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_as(&mut self, platform: &mut dyn Platform) -> Result<SaveOutcome> {
        let Some(path) = self.ask_save_path(platform) else {
            return Ok(SaveOutcome::Cancelled);
        };
        self.document.write_to(&path)?;
        tracing::info!("Saved as {}", path.display());
        Ok(SaveOutcome::Saved(path))
    }

    fn ask_save_path(&mut self, platform: &mut dyn Platform) -> Option<PathBuf> {
        let start_dir = self.config.resolve_work_folder();
        let path = platform.pick_save_path(start_dir.as_deref(), &self.suggested_file_name())?;
        self.config.remember_folder_of(&path);
        Some(path)
    }

    fn suggested_file_name(&self) -> String {
        if self.document.file_path.is_some() {
            self.document.title.clone()
        } else {
            format!("{}.txt", self.document.title)
        }
    }

    /// Saves first when "save on exit" is checked, then asks the shell to close.
    ///
    /// A cancelled save dialog still closes; a failed write keeps the window
    /// open after reporting the error.
    pub fn exit(&mut self, platform: &mut dyn Platform) -> ExitDecision {
        if self.config.save_on_exit {
            if let Err(e) = self.save(platform) {
                tracing::error!("Save on exit failed: {e:#}");
                platform.report_error("Save failed", &format!("{e:#}"));
                return ExitDecision::Stay;
            }
        }
        ExitDecision::Close
    }

    /// Launches an unrelated second editor instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started.
    pub fn new_window(&mut self, platform: &mut dyn Platform) -> Result<()> {
        platform
            .spawn_new_window()
            .context("failed to open a new window")
    }

    // ── History ─────────────────────────────────────────────────────

    pub fn undo(&mut self) {
        self.document.undo();
        self.selection = self.selection.clamped(&self.document.text);
    }

    pub fn redo(&mut self) {
        self.document.redo();
        self.selection = self.selection.clamped(&self.document.text);
    }

    /// Whether redo has an effect. With nothing undone it re-applies the
    /// latest snapshot, so any recorded snapshot is enough.
    pub fn can_redo(&self) -> bool {
        let history = &self.document.history;
        history.can_redo() || history.can_undo()
    }

    // ── Clipboard ───────────────────────────────────────────────────

    pub fn copy(&mut self) {
        self.clipboard.copy(&self.document.text, self.selection);
    }

    pub fn cut(&mut self) {
        self.selection = self.clipboard.cut(&mut self.document.text, self.selection);
        self.document.modified = true;
    }

    /// Inserts the slot at the selection start. No-op while the slot is empty.
    pub fn paste(&mut self) {
        if let Some(caret) = self
            .clipboard
            .paste(&mut self.document.text, self.selection.start)
        {
            self.selection = Selection::caret(caret);
            self.document.modified = true;
        }
    }

    pub fn select_all(&mut self) {
        self.selection = Selection::all(&self.document.text);
    }

    // ── Tools & appearance ──────────────────────────────────────────

    /// Counts the words in the document and opens the popup showing the result.
    pub fn count_words(&mut self) -> usize {
        let count = count_words(&self.document.text);
        self.word_count_label = format_word_count(count);
        self.word_count_open = true;
        count
    }

    /// Stores the autosave toggle and returns the tooltip to show for it.
    pub fn set_auto_save(&mut self, enabled: bool) -> &'static str {
        self.config.auto_save_enabled = enabled;
        self.auto_save_tooltip()
    }

    pub fn auto_save_tooltip(&self) -> &'static str {
        if self.config.auto_save_enabled {
            AUTOSAVE_ON_TOOLTIP
        } else {
            AUTOSAVE_OFF_TOOLTIP
        }
    }

    pub fn apply_font(&mut self, mut font: FontSpec) {
        font.sanitize();
        tracing::debug!(?font, "font changed");
        self.config.font = font;
    }

    pub fn apply_color(&mut self, color: ArgbColor) {
        tracing::debug!(color = %color.to_hex(), "text color changed");
        self.config.text_color = color;
    }

    pub fn font(&self) -> &FontSpec {
        &self.config.font
    }

    pub fn text_color(&self) -> ArgbColor {
        self.config.text_color
    }

    /// Title shown in the OS window, with a marker for unsaved changes.
    pub fn window_title(&self) -> String {
        let marker = if self.document.modified { " *" } else { "" };
        format!("{}{marker} - tiny-pad", self.document.title)
    }
}
