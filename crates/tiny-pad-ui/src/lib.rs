//! egui front end for tiny-pad.

mod app;
mod dialogs;
mod platform;

pub use app::{App, StartupArgs};
pub use platform::DesktopPlatform;
