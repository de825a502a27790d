// Integration tests for the snapshot history.
//
// These drive the history the way a host does: it keeps its own text and
// adopts whatever undo/redo hands back.

use tiny_pad_mod_history::SnapshotHistory;

/// Minimal host that mirrors how a document applies history results.
struct Host {
    text: String,
    history: SnapshotHistory,
}

impl Host {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            history: SnapshotHistory::new(),
        }
    }

    fn save(&mut self, text: &str) {
        self.text = text.to_string();
        self.history.record_snapshot(self.text.clone());
    }

    fn undo(&mut self) {
        if let Some(text) = self.history.undo() {
            self.text = text;
        }
    }

    fn redo(&mut self) {
        if let Some(text) = self.history.redo() {
            self.text = text;
        }
    }
}

// ── Stack walk ─────────────────────────────────────────────────────────

#[test]
fn test_undo_walks_back_through_saves() {
    let saves = ["t1", "t2", "t3", "t4", "t5"];
    let mut host = Host::new("");
    for s in saves {
        host.save(s);
    }

    let n = saves.len();
    for i in 1..n {
        host.undo();
        assert_eq!(host.text, saves[n - i - 1], "after undo #{i}");
    }

    // Final undo exhausts the history and leaves the text alone
    let before = host.text.clone();
    host.undo();
    assert_eq!(host.text, before);
    assert!(!host.history.can_undo());

    // Further undos stay no-ops
    host.undo();
    assert_eq!(host.text, before);
}

#[test]
fn test_undo_then_redo_restores_text() {
    let mut host = Host::new("");
    host.save("first");
    host.save("second");
    host.save("third");

    let before = host.text.clone();
    host.undo();
    assert_ne!(host.text, before);
    host.redo();
    assert_eq!(host.text, before);
}

#[test]
fn test_fresh_history_operations_keep_text() {
    let mut host = Host::new("untouched");
    host.undo();
    assert_eq!(host.text, "untouched");
    host.redo();
    assert_eq!(host.text, "untouched");
    assert_eq!(host.history.undo_depth(), 0);
    assert_eq!(host.history.redo_depth(), 0);
}

#[test]
fn test_abc_scenario() {
    let mut host = Host::new("");
    host.save("A");
    host.save("B");
    host.save("C");

    host.undo();
    assert_eq!(host.text, "B");
    host.undo();
    assert_eq!(host.text, "A");
    host.redo();
    assert_eq!(host.text, "B");
}

// ── Invariants ─────────────────────────────────────────────────────────

#[test]
fn test_text_matches_top_after_effective_operations() {
    let mut host = Host::new("");
    for i in 0..10 {
        host.save(&format!("rev{i}"));
    }
    for step in 0..20 {
        if step % 3 == 2 {
            host.redo();
        } else {
            host.undo();
        }
        if let Some(top) = host.history.latest_snapshot() {
            assert_eq!(host.text, top, "step {step}");
        }
    }
}

#[test]
fn test_redo_without_pending_reaffirms_saved_text() {
    let mut host = Host::new("");
    host.save("saved");
    host.text = "edited but not saved".to_string();
    host.redo();
    assert_eq!(host.text, "saved");
}

#[test]
fn test_saves_between_undos_do_not_clear_redo() {
    let mut host = Host::new("");
    host.save("A");
    host.save("B");
    host.undo();
    host.save("C");
    assert_eq!(host.history.redo_depth(), 1);

    // Redo brings back B on top of C
    host.redo();
    assert_eq!(host.text, "B");
    assert_eq!(host.history.undo_depth(), 3);
}

#[test]
fn test_large_snapshots() {
    let mut host = Host::new("");
    let big = "x".repeat(100_000);
    host.save(&big);
    host.save("small");
    host.undo();
    assert_eq!(host.text.len(), 100_000);
}
