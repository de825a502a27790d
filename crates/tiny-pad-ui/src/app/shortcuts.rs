//! Global keyboard shortcut handling.
//!
//! Shortcuts are consumed before the text area runs, so the widget's own
//! undo and system-clipboard handling never see them.

use eframe::egui::{self, Key, Modifiers};

use super::App;

/// Clipboard requests found in this frame's input.
#[derive(Debug, Default, Clone, Copy)]
struct ClipboardEvents {
    cut: bool,
    copy: bool,
    paste: bool,
}

impl App {
    /// Handles global keyboard shortcuts.
    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &egui::Context) {
        // A focused text widget turns Ctrl+X/C/V into semantic events; strip
        // them so the text is only changed through the session.
        let clipboard = ctx.input_mut(|i| {
            let mut found = ClipboardEvents::default();
            i.events.retain(|e| match e {
                egui::Event::Cut => {
                    found.cut = true;
                    false
                }
                egui::Event::Copy => {
                    found.copy = true;
                    false
                }
                egui::Event::Paste(_) => {
                    found.paste = true;
                    false
                }
                _ => true,
            });
            found
        });

        if clipboard.copy {
            self.copy();
        }
        if clipboard.cut {
            self.cut();
        }
        if clipboard.paste {
            self.paste();
        }

        let command_shift = Modifiers::COMMAND | Modifiers::SHIFT;
        let pressed = |mods: Modifiers, key: Key| ctx.input_mut(|i| i.consume_key(mods, key));

        // Shifted variants first: plain COMMAND patterns also match with Shift held.
        if pressed(command_shift, Key::S) {
            self.save_as_dialog();
        } else if pressed(Modifiers::COMMAND, Key::S) {
            self.save_active();
        }

        if pressed(command_shift, Key::N) {
            self.new_window();
        }

        if pressed(Modifiers::COMMAND, Key::O) {
            self.open_file_dialog();
        }

        if pressed(command_shift, Key::Z) || pressed(Modifiers::COMMAND, Key::Y) {
            self.redo();
        } else if pressed(Modifiers::COMMAND, Key::Z) {
            self.undo();
        }

        if self.session.word_count_open && pressed(Modifiers::NONE, Key::Escape) {
            self.session.word_count_open = false;
        }
    }
}
