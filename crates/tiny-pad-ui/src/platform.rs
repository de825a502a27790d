//! Native dialogs and process spawning for the desktop build.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tiny_pad_core::platform::{Platform, TEXT_FILTER_EXTENSIONS, TEXT_FILTER_NAME};

/// [`Platform`] backed by `rfd` dialogs and the current executable.
#[derive(Debug, Default)]
pub struct DesktopPlatform;

impl Platform for DesktopPlatform {
    fn pick_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().set_title("Open File");
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.pick_file()
    }

    fn pick_save_path(
        &mut self,
        start_dir: Option<&Path>,
        suggested_name: &str,
    ) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save As")
            .add_filter(TEXT_FILTER_NAME, TEXT_FILTER_EXTENSIONS)
            .set_file_name(suggested_name);
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file()
    }

    fn report_error(&mut self, title: &str, message: &str) {
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    fn spawn_new_window(&mut self) -> Result<()> {
        let exe = std::env::current_exe().context("failed to locate the running executable")?;
        let child = std::process::Command::new(&exe)
            .spawn()
            .with_context(|| format!("failed to start {}", exe.display()))?;
        tracing::info!(pid = child.id(), "Started new window");
        Ok(())
    }
}
