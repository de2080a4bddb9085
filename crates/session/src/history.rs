//! Undo/redo snapshot stacks
//!
//! Edits arrive as whole documents, so history is a pair of snapshot
//! stacks rather than a command log. The undo stack is capped; the redo
//! stack can never outgrow it.

use doc_model::Document;

/// Maximum number of undo snapshots kept
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// Wholesale document snapshots for undo and redo
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    undo_stack: Vec<Document>,
    redo_stack: Vec<Document>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pre-edit document.
    ///
    /// Clears the redo stack; evicts the oldest snapshot past the cap.
    pub fn push(&mut self, document: Document) {
        self.redo_stack.clear();
        self.undo_stack.push(document);
        while self.undo_stack.len() > MAX_HISTORY_ENTRIES {
            self.undo_stack.remove(0);
        }
    }

    /// Pops the last snapshot for undo, saving `current` for redo
    pub fn pop_undo(&mut self, current: &Document) -> Option<Document> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current.clone());
        Some(previous)
    }

    /// Pops a snapshot for redo, saving `current` for undo
    pub fn pop_redo(&mut self, current: &Document) -> Option<Document> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current.clone());
        Some(next)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undo snapshots held
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::from_text(text)
    }

    #[test]
    fn test_push_then_undo_returns_snapshot() {
        let mut history = History::new();
        history.push(doc("before"));

        let current = doc("after");
        let previous = history.pop_undo(&current).unwrap();
        assert_eq!(previous, doc("before"));
        assert!(history.can_redo());
        assert!(!history.can_undo());
    }

    #[test]
    fn test_redo_restores_what_undo_replaced() {
        let mut history = History::new();
        history.push(doc("v1"));

        let previous = history.pop_undo(&doc("v2")).unwrap();
        assert_eq!(previous, doc("v1"));

        let next = history.pop_redo(&previous).unwrap();
        assert_eq!(next, doc("v2"));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_push_clears_redo() {
        let mut history = History::new();
        history.push(doc("v1"));
        history.pop_undo(&doc("v2")).unwrap();
        assert!(history.can_redo());

        history.push(doc("v3"));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_empty_stacks_pop_nothing() {
        let mut history = History::new();
        assert!(history.pop_undo(&doc("x")).is_none());
        assert!(history.pop_redo(&doc("x")).is_none());
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut history = History::new();
        for i in 0..(MAX_HISTORY_ENTRIES + 5) {
            history.push(doc(&format!("snapshot {i}")));
        }
        assert_eq!(history.undo_depth(), MAX_HISTORY_ENTRIES);

        // Drain to the bottom: the oldest surviving snapshot is #5
        let mut last = None;
        let current = doc("current");
        while let Some(previous) = history.pop_undo(&current) {
            last = Some(previous);
        }
        assert_eq!(last.unwrap(), doc("snapshot 5"));
    }

    #[test]
    fn test_clear_drops_both_stacks() {
        let mut history = History::new();
        history.push(doc("a"));
        history.pop_undo(&doc("b")).unwrap();
        history.push(doc("c"));

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
