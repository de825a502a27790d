//! Top-level application tying together the session, menus, dialogs, and text area.

mod clipboard;
mod editor_area;
mod file_ops;
mod menu_bar;
mod shortcuts;
mod status_bar;

use std::path::PathBuf;

use eframe::egui;

use tiny_pad_config::AppConfig;
use tiny_pad_core::clipboard::Selection;
use tiny_pad_core::{EditorSession, Platform};

use crate::dialogs::{ColorPickerDialog, FontPickerDialog};
use crate::platform::DesktopPlatform;

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// File to open on startup.
    pub file: Option<PathBuf>,
}

/// The main application state.
pub struct App {
    pub session: EditorSession,
    platform: Box<dyn Platform>,
    config_path: PathBuf,
    pub font_picker: FontPickerDialog,
    pub color_picker: ColorPickerDialog,
    /// Selection to push into the text widget on the next frame.
    pending_selection: Option<Selection>,
    last_window_title: String,
}

impl App {
    /// Creates the application with native dialogs and the config next to the executable.
    pub fn new(cc: &eframe::CreationContext<'_>, args: StartupArgs) -> Self {
        Self::with_platform(cc, args, Box::new(DesktopPlatform), AppConfig::config_path())
    }

    /// Creates the application with a caller-supplied platform and config location.
    pub fn with_platform(
        _cc: &eframe::CreationContext<'_>,
        args: StartupArgs,
        platform: Box<dyn Platform>,
        config_path: PathBuf,
    ) -> Self {
        let config = AppConfig::load_or_create(&config_path);
        let mut app = Self::from_parts(config, platform, config_path);

        if let Some(path) = args.file {
            let abs_path = if path.is_absolute() {
                path
            } else {
                std::env::current_dir().unwrap_or_default().join(path)
            };
            if let Err(e) = app.session.open_path(&abs_path) {
                tracing::warn!("Failed to open '{}': {e:#}", abs_path.display());
            }
        }

        app
    }

    fn from_parts(config: AppConfig, platform: Box<dyn Platform>, config_path: PathBuf) -> Self {
        Self {
            session: EditorSession::new(config),
            platform,
            config_path,
            font_picker: FontPickerDialog::new(),
            color_picker: ColorPickerDialog::new(),
            pending_selection: None,
            last_window_title: String::new(),
        }
    }

    /// Returns true if any window is open above the text area.
    pub(crate) fn is_dialog_open(&self) -> bool {
        self.font_picker.visible || self.color_picker.visible || self.session.word_count_open
    }

    /// Logs a failed action and shows it to the user.
    pub(crate) fn report_failure(&mut self, title: &str, err: &anyhow::Error) {
        tracing::error!("{title}: {err:#}");
        self.platform.report_error(title, &format!("{err:#}"));
    }

    /// Pushes the session's selection back into the text widget.
    pub(crate) fn sync_selection_to_widget(&mut self) {
        self.pending_selection = Some(self.session.selection);
    }

    /// Updates the OS window title, only when it actually changes.
    fn update_window_title(&mut self, ctx: &egui::Context) {
        let title = self.session.window_title();
        if title != self.last_window_title {
            self.last_window_title.clone_from(&title);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }
    }

    /// Shows the font, color, and word count windows.
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(font) = self.font_picker.show(ctx) {
            self.session.apply_font(font);
        }
        if let Some(color) = self.color_picker.show(ctx) {
            self.session.apply_color(color);
        }
        self.show_word_count(ctx);
    }

    fn show_word_count(&mut self, ctx: &egui::Context) {
        if !self.session.word_count_open {
            return;
        }
        let mut open = true;
        let mut dismissed = false;
        egui::Window::new("Word Count")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.y = 8.0;
                ui.label(&self.session.word_count_label);
                if ui.button("  OK  ").clicked() {
                    dismissed = true;
                }
            });
        if !open || dismissed {
            self.session.word_count_open = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Must run before the text area so it never sees our shortcuts
        self.handle_global_shortcuts(ctx);

        self.update_window_title(ctx);

        let panel_fill = ctx.style().visuals.panel_fill;
        let extreme_bg = ctx.style().visuals.extreme_bg_color;

        egui::TopBottomPanel::top("menu_bar")
            .frame(
                egui::Frame::new()
                    .fill(panel_fill)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                self.show_menu_bar(ui, ctx);
            });

        egui::TopBottomPanel::bottom("status_bar")
            .max_height(24.0)
            .frame(
                egui::Frame::new()
                    .fill(extreme_bg)
                    .inner_margin(egui::Margin::symmetric(8, 3)),
            )
            .show(ctx, |ui| {
                self.show_status_bar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_editor_area(ui);
        });

        self.show_dialogs(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.session.config.save(&self.config_path) {
            tracing::warn!("Failed to save config on exit: {e:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;

    use tiny_pad_config::{ArgbColor, FontSpec};

    use super::*;

    /// Records errors and answers every dialog with "cancel".
    #[derive(Default, Clone)]
    struct SilentPlatform {
        errors: Rc<RefCell<Vec<String>>>,
    }

    impl Platform for SilentPlatform {
        fn pick_open_path(&mut self, _: Option<&Path>) -> Option<PathBuf> {
            None
        }

        fn pick_save_path(&mut self, _: Option<&Path>, _: &str) -> Option<PathBuf> {
            None
        }

        fn report_error(&mut self, _title: &str, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }

        fn spawn_new_window(&mut self) -> anyhow::Result<()> {
            anyhow::bail!("spawning disabled in tests")
        }
    }

    /// Helper: create an App for unit-testing (no rendering needed).
    fn test_app() -> (App, SilentPlatform) {
        let platform = SilentPlatform::default();
        let app = App::from_parts(
            AppConfig::default(),
            Box::new(platform.clone()),
            PathBuf::from("tiny-pad.json"),
        );
        (app, platform)
    }

    #[test]
    fn test_no_dialog_open_initially() {
        let (app, _) = test_app();
        assert!(!app.is_dialog_open());
    }

    #[test]
    fn test_word_count_counts_as_dialog() {
        let (mut app, _) = test_app();
        app.session.count_words();
        assert!(app.is_dialog_open());
    }

    #[test]
    fn test_new_window_failure_is_reported() {
        let (mut app, platform) = test_app();
        app.new_window();
        let errors = platform.errors.borrow();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("spawning disabled in tests"));
    }

    #[test]
    fn test_cut_pushes_selection_to_widget() {
        let (mut app, _) = test_app();
        app.session.document.text = "hello world".to_string();
        app.session.selection = Selection::new(0, 6);
        app.cut();
        assert_eq!(app.session.document.text, "world");
        assert_eq!(app.pending_selection, Some(Selection::caret(0)));
    }

    #[test]
    fn test_select_all_pushes_selection_to_widget() {
        let (mut app, _) = test_app();
        app.session.document.text = "abc".to_string();
        app.select_all();
        assert_eq!(app.pending_selection, Some(Selection::new(0, 3)));
    }

    #[test]
    fn test_font_and_color_pickers_open_with_current_values() {
        let (mut app, _) = test_app();
        app.session.apply_font(FontSpec {
            size_pt: 30.0,
            ..Default::default()
        });
        app.session.apply_color(ArgbColor::rgb(200, 0, 0));
        app.open_font_picker();
        app.open_color_picker();
        assert!(app.font_picker.visible);
        assert!(app.color_picker.visible);
        assert!(app.is_dialog_open());
    }

    #[test]
    fn test_exit_request_without_save_on_exit_closes() {
        let (mut app, _) = test_app();
        assert!(app.request_exit());
    }
}
