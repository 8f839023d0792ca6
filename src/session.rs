use crate::guide::Guideline;
use crate::history::EditHistory;
use crate::notification::NotificationCenter;
use crate::representations::Representations;

/// Default number of undo snapshots kept per session.
pub const DEFAULT_UNDO_DEPTH: usize = 64;

/// Everything an editing operation needs besides the glyph itself:
/// observers to notify, an undo trail, the representation cache, and the
/// parent font's guidelines, which glyph-level batch edits treat the same
/// as the glyph's own.
///
/// Passed explicitly to the operations in [`edit`](crate::edit); there is
/// no ambient application state.
#[derive(Debug, Default)]
pub struct EditSession {
    pub notifications: NotificationCenter,
    pub history: EditHistory,
    pub representations: Representations,
    pub font_guidelines: Vec<Guideline>,
}

impl EditSession {
    pub fn new() -> Self {
        EditSession {
            notifications: NotificationCenter::new(),
            history: EditHistory::with_depth(DEFAULT_UNDO_DEPTH),
            representations: Representations::new(),
            font_guidelines: Vec::new(),
        }
    }
}
