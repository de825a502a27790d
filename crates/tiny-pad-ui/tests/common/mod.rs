use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use egui_kittest::Harness;
use tiny_pad_core::Platform;
use tiny_pad_ui::{App, StartupArgs};

/// Platform double: cancels opens, answers saves with a fixed path.
#[derive(Clone, Default)]
pub struct FakePlatform {
    pub save_path: Option<PathBuf>,
    pub errors: Arc<Mutex<Vec<String>>>,
}

impl Platform for FakePlatform {
    fn pick_open_path(&mut self, _start_dir: Option<&Path>) -> Option<PathBuf> {
        None
    }

    fn pick_save_path(&mut self, _start_dir: Option<&Path>, _suggested: &str) -> Option<PathBuf> {
        self.save_path.clone()
    }

    fn report_error(&mut self, _title: &str, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn spawn_new_window(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Ctrl on every platform egui-winit reports as both `ctrl` and `command`.
pub fn ctrl() -> egui::Modifiers {
    egui::Modifiers {
        ctrl: true,
        command: true,
        ..Default::default()
    }
}

/// Creates a test harness at 1024x768 with its config in `dir`.
pub fn create_harness_with(dir: &Path, platform: FakePlatform) -> Harness<'static, App> {
    let config_path = dir.join("tiny-pad.json");
    Harness::builder()
        .with_size(egui::Vec2::new(1024.0, 768.0))
        .build_eframe(move |cc| {
            App::with_platform(cc, StartupArgs::default(), Box::new(platform), config_path)
        })
}
