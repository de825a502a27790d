//! Clipboard operations (cut, copy, paste) through the session's slot.

use super::App;

impl App {
    /// Cuts selected text into the slot.
    pub(crate) fn cut(&mut self) {
        self.session.cut();
        self.sync_selection_to_widget();
    }

    /// Copies selected text into the slot.
    pub(crate) fn copy(&mut self) {
        self.session.copy();
    }

    /// Pastes the slot at the caret.
    pub(crate) fn paste(&mut self) {
        self.session.paste();
        self.sync_selection_to_widget();
    }

    pub(crate) fn select_all(&mut self) {
        self.session.select_all();
        self.sync_selection_to_widget();
    }
}
