use crate::collection::{EntryFilter, EntrySort};
use crate::entry::EntryId;

/// Render snapshot of the queue panel.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueViewModel {
    /// Current page of the filtered, sorted working set.
    pub rows: Vec<EntryRowView>,
    /// True iff no non-archived entry exists at all.
    pub queue_empty: bool,
    /// A refresh is in flight (the host shows its spinner).
    pub refreshing: bool,
    /// No fetch attempt has completed yet.
    pub initializing: bool,
    pub filter: EntryFilter,
    pub sort: EntrySort,
    pub page: usize,
    pub page_count: usize,
    pub print_types: Vec<String>,
    pub dialog: Option<DialogView>,
}

/// One rendered queue row with all derived presentation fields resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRowView {
    pub id: EntryId,
    pub staff: String,
    pub customer: String,
    pub contact: String,
    /// File reference without its origin prefix.
    pub file_display: String,
    pub cost: f64,
    pub note: String,
    pub archived: bool,
    pub prepaid: bool,
    /// Resolved catalog label; empty when the stored index is out of
    /// range.
    pub print_type_label: String,
    /// Seconds since submission.
    pub age_secs: i64,
}

/// The dialog the workflow currently holds open.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogView {
    Add(EntryFormView),
    Edit(EntryFormView),
    ConfirmArchive { id: EntryId, archived: bool },
}

/// Field values of the add/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFormView {
    pub id: EntryId,
    pub staff: String,
    pub customer: String,
    pub contact: String,
    pub file_ref: String,
    pub cost: f64,
    pub note: String,
    pub prepaid: bool,
    pub archived: bool,
    pub print_type_label: String,
}
