use crate::entry::EntryId;

/// Side effects requested by [`crate::update`], executed by the host
/// adapter. Remote effects go to the queue endpoint; `LoadFile` and
/// `PersistPrintTypes` go to host-provided collaborators.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// GET the queue collection; `force` bypasses the remote cache.
    FetchQueue { force: bool },
    /// PUT a new entry. The response is the full updated collection.
    CreateEntry(NewEntry),
    /// PUT a full-record overwrite of an existing entry.
    ModifyEntry(EntryUpdate),
    /// PUT an archived-flag change for one entry.
    SetArchived { id: EntryId, archived: bool },
    /// Hand an `{origin, path}` pair to the host file-loading service.
    LoadFile { origin: String, path: String },
    /// Hand the catalog snapshot to the host settings store.
    PersistPrintTypes(Vec<String>),
}

/// Create payload built from an add-dialog draft. Carries no identifier
/// (the remote store assigns one) and no archived flag (a new entry is
/// never archived; the wire layer pins it to 0).
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub staff: String,
    pub customer: String,
    pub contact: String,
    pub file_ref: String,
    pub note: String,
    pub cost: f64,
    pub prepaid: bool,
    pub print_type: usize,
}

/// Full-record update payload for an existing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryUpdate {
    pub id: EntryId,
    pub staff: String,
    pub customer: String,
    pub contact: String,
    pub file_ref: String,
    pub note: String,
    pub cost: f64,
    pub prepaid: bool,
    pub archived: bool,
    pub print_type: usize,
}
