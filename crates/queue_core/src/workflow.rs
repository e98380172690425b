use crate::entry::{EntryId, QueueEntry};

/// Transient editing state: at most one entry is being created, edited,
/// or archive-toggled at any time.
///
/// Editing an existing entry works on a cloned draft, never on the row in
/// the collection, so cancelling needs no rollback of the live data. Any
/// non-idle state returns to `Idle` on cancel or on a successful submit;
/// a failed submit leaves the state (and thus the host's dialog) as is.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Workflow {
    #[default]
    Idle,
    /// Add dialog holding an unsaved draft (`id` 0).
    EditingNew { draft: QueueEntry },
    /// Edit dialog holding a working copy of an existing entry.
    EditingExisting { draft: QueueEntry },
    /// Archive confirmation for one entry, with its current flag.
    ConfirmingArchive { id: EntryId, archived: bool },
}

impl Workflow {
    pub fn is_idle(&self) -> bool {
        matches!(self, Workflow::Idle)
    }

    /// The draft currently open in the add or edit dialog, if any.
    pub fn draft(&self) -> Option<&QueueEntry> {
        match self {
            Workflow::EditingNew { draft } | Workflow::EditingExisting { draft } => Some(draft),
            _ => None,
        }
    }

    pub(crate) fn draft_mut(&mut self) -> Option<&mut QueueEntry> {
        match self {
            Workflow::EditingNew { draft } | Workflow::EditingExisting { draft } => Some(draft),
            _ => None,
        }
    }
}
