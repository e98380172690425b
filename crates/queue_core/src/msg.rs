use crate::collection::{EntryFilter, EntrySort};
use crate::entry::{EntryId, QueueEntry};

/// Transport-level failure reported back into the state machine. The
/// core never inspects it beyond logging surfaces; the previous state
/// stays visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFailure {
    pub message: String,
}

/// One field edit applied to the draft currently open in the add or edit
/// dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    Staff(String),
    Customer(String),
    Contact(String),
    FileRef(String),
    Note(String),
    Cost(f64),
    Prepaid(bool),
    /// Chosen catalog label; resolved back to an index, first match.
    PrintTypeLabel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The queue panel became visible or hidden.
    ViewActivated(bool),
    /// Printer state snapshot from the host.
    PrinterState { printing: bool },
    /// Refresh the collection from the remote store.
    RefreshRequested { force: bool },
    /// A refresh finished. A failure leaves the collection untouched.
    FetchCompleted(Result<Vec<QueueEntry>, RemoteFailure>),
    /// A create/modify/archive command finished. Success carries the full
    /// updated collection.
    MutationCompleted(Result<Vec<QueueEntry>, RemoteFailure>),
    /// Open the add dialog with a fresh draft.
    AddRequested,
    /// Host reported a newly added file; opens the add dialog with the
    /// file reference pre-filled as `storage:path`.
    FileAdded { storage: String, path: String },
    /// Open the edit dialog for an existing entry.
    EditRequested { id: EntryId },
    /// Open the archive confirmation for one entry.
    ArchiveRequested { id: EntryId },
    /// Edit one field of the open draft.
    DraftEdited(DraftField),
    /// Submit the add-dialog draft as a create command.
    SubmitCreate,
    /// Submit the edit-dialog draft as a full-record update.
    SubmitModify,
    /// Toggle the archived flag of the entry under confirmation.
    SubmitArchiveToggle,
    /// Close the add/edit dialog, discarding local edits.
    CancelEdit,
    /// Close the archive confirmation.
    CancelArchive,
    /// Ask the host to load the file referenced by an entry.
    LoadFileRequested { id: EntryId },
    /// Switch the active filter. Resets the page.
    FilterChanged(EntryFilter),
    SortChanged(EntrySort),
    PageChanged(usize),
    /// Append a print-type label to the catalog.
    PrintTypeAdded(String),
    /// Remove the first matching label from the catalog.
    PrintTypeRemoved(String),
    PrintTypeMovedUp(usize),
    PrintTypeMovedDown(usize),
    /// Host restored the persisted catalog.
    PrintTypesRestored(Vec<String>),
    /// Host lifecycle hook: settings are about to be saved.
    SettingsSaving,
}
