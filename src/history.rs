use crate::glyph::Glyph;

/// Snapshot-based undo/redo for glyph edits.
///
/// Operations record a snapshot of the glyph *before* mutating it. Undo
/// takes the caller's current state onto the redo stack and hands back the
/// most recent snapshot; redo mirrors that. Recording anything new clears
/// the redo stack.
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    undo_stack: Vec<Glyph>,
    redo_stack: Vec<Glyph>,
    max_depth: usize,
}

impl EditHistory {
    pub fn with_depth(max_depth: usize) -> Self {
        EditHistory {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Push a pre-edit snapshot. Oldest snapshots fall off once the depth
    /// limit is reached; a depth of zero disables recording.
    pub fn record(&mut self, snapshot: Glyph) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
    }

    /// Step back one edit. `current` is the state being displaced; it
    /// moves onto the redo stack.
    pub fn undo(&mut self, current: Glyph) -> Option<Glyph> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(snapshot)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: Glyph) -> Option<Glyph> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(snapshot)
    }
}
