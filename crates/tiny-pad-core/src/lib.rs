//! UI-independent editor logic for tiny-pad.
//!
//! The front end owns one [`EditorSession`] and routes every user action
//! through it, passing a [`Platform`] for anything that needs a native
//! dialog or process.

pub mod clipboard;
pub mod document;
pub mod encoding;
pub mod platform;
pub mod session;
pub mod word_count;

pub use clipboard::{ClipboardSlot, Selection};
pub use document::Document;
pub use platform::Platform;
pub use session::{EditorSession, ExitDecision, SaveOutcome};
