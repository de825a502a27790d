/// Undo/redo manager over full-text snapshots.
///
/// Snapshots are pushed at save points. Undo moves the newest snapshot to
/// the redo stack and hands back the one beneath it; redo moves it back.
/// The manager never owns the live document text: every operation returns
/// the text the host should adopt, or `None` when the host keeps its own.

/// Manages the undo/redo snapshot stacks for a single document.
#[derive(Clone, Default)]
pub struct SnapshotHistory {
    /// Saved snapshots, oldest first; the last element is the top.
    undo_stack: Vec<String>,
    /// Undone snapshots, with the most recently undone on top.
    redo_stack: Vec<String>,
}

impl std::fmt::Debug for SnapshotHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotHistory")
            .field("undo_len", &self.undo_stack.len())
            .field("redo_len", &self.redo_stack.len())
            .finish()
    }
}

impl SnapshotHistory {
    /// Creates a history with both stacks empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a snapshot onto the undo stack.
    ///
    /// Duplicates of the current top are kept. The redo stack is left alone.
    pub fn record_snapshot(&mut self, text: impl Into<String>) {
        self.undo_stack.push(text.into());
        tracing::trace!(depth = self.undo_stack.len(), "recorded snapshot");
    }

    /// Steps back one snapshot.
    ///
    /// Returns the new top of the undo stack, which the host should adopt as
    /// its text. Returns `None` if there was nothing to undo, or if the undo
    /// stack is empty after the pop (the host keeps its current text).
    pub fn undo(&mut self) -> Option<String> {
        let popped = self.undo_stack.pop()?;
        self.redo_stack.push(popped);
        tracing::trace!(
            undo = self.undo_stack.len(),
            redo = self.redo_stack.len(),
            "undo"
        );
        self.undo_stack.last().cloned()
    }

    /// Steps forward one snapshot.
    ///
    /// With nothing to redo, the stacks are untouched and the current top of
    /// the undo stack is returned so the host can re-affirm it.
    pub fn redo(&mut self) -> Option<String> {
        if let Some(snapshot) = self.redo_stack.pop() {
            self.undo_stack.push(snapshot);
            tracing::trace!(
                undo = self.undo_stack.len(),
                redo = self.redo_stack.len(),
                "redo"
            );
        }
        self.undo_stack.last().cloned()
    }

    /// Whether an undo would change the stacks.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether a redo would change the stacks.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots waiting to be redone.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// The most recently recorded (or redone) snapshot.
    pub fn latest_snapshot(&self) -> Option<&str> {
        self.undo_stack.last().map(String::as_str)
    }

    /// Drops every snapshot from both stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
