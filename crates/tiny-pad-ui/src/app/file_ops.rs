//! File and window actions: open, save, save as, new window, exit.
//!
//! Each action runs through the session and reports failures to the user
//! instead of propagating them into the frame loop.

use tiny_pad_core::{ExitDecision, SaveOutcome};

use super::App;

impl App {
    /// Opens a file dialog and loads the selected file.
    pub(crate) fn open_file_dialog(&mut self) {
        match self.session.open(self.platform.as_mut()) {
            Ok(true) => self.sync_selection_to_widget(),
            Ok(false) => {}
            Err(e) => self.report_failure("Failed to open file", &e),
        }
    }

    /// Saves the document, asking for a target first if it has none.
    pub(crate) fn save_active(&mut self) {
        match self.session.save(self.platform.as_mut()) {
            Ok(SaveOutcome::Saved(_)) | Ok(SaveOutcome::Cancelled) => {}
            Err(e) => self.report_failure("Failed to save", &e),
        }
    }

    /// Opens a save-as dialog and writes the document to the chosen path.
    pub(crate) fn save_as_dialog(&mut self) {
        if let Err(e) = self.session.save_as(self.platform.as_mut()) {
            self.report_failure("Failed to save", &e);
        }
    }

    /// Starts a second, independent editor process.
    pub(crate) fn new_window(&mut self) {
        if let Err(e) = self.session.new_window(self.platform.as_mut()) {
            self.report_failure("Failed to open a new window", &e);
        }
    }

    /// Runs the exit action. Returns true if the window should close.
    pub(crate) fn request_exit(&mut self) -> bool {
        self.session.exit(self.platform.as_mut()) == ExitDecision::Close
    }

    /// Steps back to the previous save point.
    pub(crate) fn undo(&mut self) {
        self.session.undo();
        self.sync_selection_to_widget();
    }

    /// Steps forward to the next save point.
    pub(crate) fn redo(&mut self) {
        self.session.redo();
        self.sync_selection_to_widget();
    }
}
