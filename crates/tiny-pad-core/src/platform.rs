//! Native services the session needs but cannot provide itself.

use std::path::{Path, PathBuf};

use anyhow::Result;

/// File filter applied to save dialogs.
pub const TEXT_FILTER_NAME: &str = "Text file";
pub const TEXT_FILTER_EXTENSIONS: &[&str] = &["txt"];

/// Dialogs and process control supplied by the hosting front end.
///
/// Every method blocks until the user answers. `None` means the user
/// cancelled; the caller skips the action.
pub trait Platform {
    /// Asks for a file to open.
    fn pick_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;

    /// Asks for a save target, restricted to `*.txt`.
    fn pick_save_path(&mut self, start_dir: Option<&Path>, suggested_name: &str)
        -> Option<PathBuf>;

    /// Shows an error to the user.
    fn report_error(&mut self, title: &str, message: &str);

    /// Starts another, independent instance of the editor.
    fn spawn_new_window(&mut self) -> Result<()>;
}
