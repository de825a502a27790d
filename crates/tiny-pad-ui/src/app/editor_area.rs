//! The central text area.
//!
//! A multiline `TextEdit` bound directly to the document text, drawn with
//! the session's font and color. Selection flows both ways: the widget's
//! cursor is read into the session every frame, and session edits (cut,
//! paste, undo) push their resulting selection back into the widget.

use eframe::egui;
use egui::text::{CCursor, CCursorRange, LayoutJob};
use egui::{FontId, TextFormat};
use tiny_pad_core::clipboard::Selection;

use super::App;
use crate::dialogs::{egui_family, to_color32};

pub(crate) const EDITOR_ID: &str = "editor_text";

impl App {
    /// Renders the text area inside a scroll area filling the panel.
    pub(crate) fn show_editor_area(&mut self, ui: &mut egui::Ui) {
        let font = self.session.font().clone();
        let font_id = FontId::new(font.device_size(), egui_family(&font));
        let color = to_color32(self.session.text_color());
        let italics = font.italic;

        let mut layouter = |ui: &egui::Ui, text: &dyn egui::TextBuffer, wrap_width: f32| {
            let mut job = LayoutJob::single_section(
                text.as_str().to_owned(),
                TextFormat {
                    font_id: font_id.clone(),
                    color,
                    italics,
                    ..Default::default()
                },
            );
            job.wrap.max_width = wrap_width;
            ui.fonts_mut(|f| f.layout_job(job))
        };

        let id = egui::Id::new(EDITOR_ID);
        let dialog_open = self.is_dialog_open();

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let mut output = egui::TextEdit::multiline(&mut self.session.document.text)
                    .id(id)
                    .frame(false)
                    .lock_focus(true)
                    .desired_width(f32::INFINITY)
                    .desired_rows(30)
                    .layouter(&mut layouter)
                    .show(ui);

                if output.response.changed() {
                    self.session.document.modified = true;
                }

                if let Some(selection) = self.pending_selection.take() {
                    let range = CCursorRange::two(
                        CCursor::new(selection.start),
                        CCursor::new(selection.end()),
                    );
                    output.state.cursor.set_char_range(Some(range));
                    output.state.store(ui.ctx(), id);
                    if !dialog_open {
                        output.response.request_focus();
                    }
                } else if let Some(range) = output.cursor_range {
                    self.session.selection =
                        Selection::between(range.primary.index, range.secondary.index);
                }
            });
    }
}
