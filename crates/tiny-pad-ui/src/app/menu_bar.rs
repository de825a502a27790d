//! Menu bar rendering for the editor application.
//!
//! Contains the File, Edit, Format, and Tools menus.

use eframe::egui;

use super::App;

impl App {
    /// Renders the menu bar with File, Edit, Format, and Tools menus.
    pub(crate) fn show_menu_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New Window   Ctrl+Shift+N").clicked() {
                    self.new_window();
                    ui.close();
                }
                if ui.button("Open...              Ctrl+O").clicked() {
                    self.open_file_dialog();
                    ui.close();
                }
                ui.separator();
                if ui.button("Save                 Ctrl+S").clicked() {
                    self.save_active();
                    ui.close();
                }
                if ui.button("Save As...     Ctrl+Shift+S").clicked() {
                    self.save_as_dialog();
                    ui.close();
                }
                ui.separator();
                ui.checkbox(&mut self.session.config.save_on_exit, "Save on exit");
                if ui.button("Exit").clicked() {
                    if self.request_exit() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                let can_undo = self.session.document.history.can_undo();
                let can_redo = self.session.can_redo();

                if ui
                    .add_enabled(can_undo, egui::Button::new("Undo            Ctrl+Z"))
                    .clicked()
                {
                    self.undo();
                    ui.close();
                }
                if ui
                    .add_enabled(can_redo, egui::Button::new("Redo            Ctrl+Y"))
                    .clicked()
                {
                    self.redo();
                    ui.close();
                }
                ui.separator();
                if ui.button("Cut              Ctrl+X").clicked() {
                    self.cut();
                    ui.close();
                }
                if ui.button("Copy             Ctrl+C").clicked() {
                    self.copy();
                    ui.close();
                }
                let can_paste = self.session.clipboard.value().is_some();
                if ui
                    .add_enabled(can_paste, egui::Button::new("Paste            Ctrl+V"))
                    .clicked()
                {
                    self.paste();
                    ui.close();
                }
                ui.separator();
                if ui.button("Select All       Ctrl+A").clicked() {
                    self.select_all();
                    ui.close();
                }
            });

            ui.menu_button("Format", |ui| {
                if ui.button("Font...").clicked() {
                    self.open_font_picker();
                    ui.close();
                }
                if ui.button("Color...").clicked() {
                    self.open_color_picker();
                    ui.close();
                }
            });

            ui.menu_button("Tools", |ui| {
                if ui.button("Word Count").clicked() {
                    let count = self.session.count_words();
                    tracing::debug!(count, "counted words");
                    ui.close();
                }
            });
        });
    }

    pub(crate) fn open_font_picker(&mut self) {
        self.font_picker.open(self.session.font());
    }

    pub(crate) fn open_color_picker(&mut self) {
        self.color_picker.open(self.session.text_color());
    }
}
