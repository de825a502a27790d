/// Snapshot-based undo/redo history.
///
/// Provides a `SnapshotHistory` that keeps whole-document snapshots taken at
/// each save point, with a separate redo stack fed by undo. History lives in
/// memory only and is dropped with the document.
pub mod manager;

pub use manager::SnapshotHistory;
