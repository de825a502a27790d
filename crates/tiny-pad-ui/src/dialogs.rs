/// Font and color picker windows.
///
/// Each picker edits a draft and only hands a value back when the user
/// confirms; closing or cancelling returns nothing.
use egui::{Color32, ComboBox, Context, DragValue, RichText, Window};
use tiny_pad_config::font::{FAMILIES, MAX_POINT_SIZE, MIN_POINT_SIZE};
use tiny_pad_config::{ArgbColor, FontSpec};

const PREVIEW_TEXT: &str = "The quick brown fox jumps over the lazy dog";

/// Maps a configured family name onto an egui font family.
pub(crate) fn egui_family(font: &FontSpec) -> egui::FontFamily {
    if font.is_monospace() {
        egui::FontFamily::Monospace
    } else {
        egui::FontFamily::Proportional
    }
}

pub(crate) fn to_color32(color: ArgbColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// State for the Font window.
#[derive(Debug, Default)]
pub struct FontPickerDialog {
    pub visible: bool,
    draft: FontSpec,
}

impl FontPickerDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the picker seeded with the font currently in use.
    pub fn open(&mut self, current: &FontSpec) {
        self.draft = current.clone();
        self.visible = true;
    }

    /// Shows the window. Returns the chosen font when OK is pressed.
    pub fn show(&mut self, ctx: &Context) -> Option<FontSpec> {
        if !self.visible {
            return None;
        }

        let mut chosen = None;
        let mut open = true;
        let mut cancelled = false;

        Window::new("Font")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.y = 8.0;

                ui.horizontal(|ui| {
                    ui.label("Family:");
                    ComboBox::from_id_salt("font_family")
                        .selected_text(self.draft.family.clone())
                        .show_ui(ui, |ui| {
                            for family in FAMILIES {
                                ui.selectable_value(
                                    &mut self.draft.family,
                                    (*family).to_string(),
                                    *family,
                                );
                            }
                        });
                });

                ui.horizontal(|ui| {
                    ui.label("Size (pt):");
                    ui.add(
                        DragValue::new(&mut self.draft.size_pt)
                            .range(MIN_POINT_SIZE..=MAX_POINT_SIZE)
                            .speed(0.5),
                    );
                });

                ui.horizontal(|ui| {
                    ui.checkbox(&mut self.draft.bold, "Bold");
                    ui.checkbox(&mut self.draft.italic, "Italic");
                });

                ui.separator();
                let mut preview = RichText::new(PREVIEW_TEXT).font(egui::FontId::new(
                    self.draft.device_size(),
                    egui_family(&self.draft),
                ));
                if self.draft.italic {
                    preview = preview.italics();
                }
                if self.draft.bold {
                    preview = preview.strong();
                }
                ui.label(preview);
                ui.separator();

                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 8.0;
                    if ui.button("  OK  ").clicked() {
                        chosen = Some(self.draft.clone());
                    }
                    if ui.button("  Cancel  ").clicked() {
                        cancelled = true;
                    }
                });
            });

        if !open || cancelled || chosen.is_some() {
            self.visible = false;
        }
        chosen
    }
}

/// State for the Color window.
#[derive(Debug)]
pub struct ColorPickerDialog {
    pub visible: bool,
    /// Unmultiplied RGBA, as the egui color button edits it.
    draft: [u8; 4],
}

impl Default for ColorPickerDialog {
    fn default() -> Self {
        Self {
            visible: false,
            draft: [0, 0, 0, 255],
        }
    }
}

impl ColorPickerDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, current: ArgbColor) {
        self.draft = [current.r, current.g, current.b, current.a];
        self.visible = true;
    }

    /// Shows the window. Returns the chosen color when OK is pressed.
    pub fn show(&mut self, ctx: &Context) -> Option<ArgbColor> {
        if !self.visible {
            return None;
        }

        let mut chosen = None;
        let mut open = true;
        let mut cancelled = false;

        Window::new("Color")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.y = 8.0;

                ui.horizontal(|ui| {
                    ui.label("Text color:");
                    ui.color_edit_button_srgba_unmultiplied(&mut self.draft);
                });

                let [r, g, b, a] = self.draft;
                let picked = ArgbColor::argb(a, r, g, b);
                ui.label(RichText::new(picked.to_hex()).monospace());
                ui.label(RichText::new(PREVIEW_TEXT).color(to_color32(picked)));

                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 8.0;
                    if ui.button("  OK  ").clicked() {
                        chosen = Some(picked);
                    }
                    if ui.button("  Cancel  ").clicked() {
                        cancelled = true;
                    }
                });
            });

        if !open || cancelled || chosen.is_some() {
            self.visible = false;
        }
        chosen
    }
}
