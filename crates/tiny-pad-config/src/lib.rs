pub mod color;
pub mod config;
pub mod font;

pub use color::ArgbColor;
pub use config::AppConfig;
pub use font::FontSpec;
