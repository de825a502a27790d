//! Status bar rendering for the editor application.
//!
//! Shows the autosave toggle, character count, font, encoding, line ending,
//! last saved time, and file path.

use eframe::egui;
use egui::{Color32, RichText};

use super::App;

/// Formats a character count, abbreviating large values.
fn format_char_count(count: usize) -> String {
    if count < 1_000 {
        format!("{count} chars")
    } else if count < 1_000_000 {
        format!("~{:.1}K chars", count as f64 / 1_000.0)
    } else {
        format!("~{:.1}M chars", count as f64 / 1_000_000.0)
    }
}

/// Formats a font as e.g. `Monospace 11pt Bold Italic`.
fn format_font(font: &tiny_pad_config::FontSpec) -> String {
    let mut label = format!("{} {}pt", font.family, font.size_pt);
    if font.bold {
        label.push_str(" Bold");
    }
    if font.italic {
        label.push_str(" Italic");
    }
    label
}

impl App {
    /// Renders the status bar.
    pub(crate) fn show_status_bar(&mut self, ui: &mut egui::Ui) {
        let sep_color = ui.visuals().weak_text_color();
        let separator = |ui: &mut egui::Ui| {
            ui.label(RichText::new("|").color(sep_color));
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;

            let mut auto_save = self.session.config.auto_save_enabled;
            let response = ui.checkbox(&mut auto_save, "Autosave");
            if response.changed() {
                let tooltip = self.session.set_auto_save(auto_save);
                tracing::debug!("{tooltip}");
            }
            response.on_hover_text(self.session.auto_save_tooltip());

            separator(ui);
            ui.label(format_char_count(self.session.document.char_count()));
            separator(ui);
            ui.label(format_font(self.session.font()));
            separator(ui);
            ui.label(self.session.document.encoding.to_string());
            separator(ui);
            ui.label(self.session.document.line_ending.to_string());

            if let Some(saved_at) = self.session.document.last_saved_at {
                separator(ui);
                ui.label(format!("Saved {}", saved_at.format("%H:%M:%S")));
            }

            if let Some(path) = &self.session.document.file_path {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(path.display().to_string()).color(Color32::GRAY),
                    );
                });
            }
        });
    }
}
