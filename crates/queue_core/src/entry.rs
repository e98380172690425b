use chrono::{DateTime, Duration, Utc};

use crate::catalog::PrintTypeCatalog;

pub type EntryId = u64;

/// One print-job request record, either pending or archived.
///
/// `id` 0 marks an unsaved draft; the remote store assigns the real
/// identifier when a create command is accepted. Entries are never
/// deleted, only flagged archived.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueEntry {
    pub id: EntryId,
    pub staff: String,
    pub customer: String,
    pub contact: String,
    /// Encoded as `origin:path`, or a bare path on the default storage.
    pub file_ref: String,
    pub cost: f64,
    pub note: String,
    pub archived: bool,
    pub prepaid: bool,
    /// Index into the print-type catalog. May be out of range if the
    /// catalog shrank after this entry was created; resolve with
    /// [`QueueEntry::print_type_label`], never by direct indexing.
    pub print_type: usize,
    pub submitted_at: DateTime<Utc>,
}

impl Default for QueueEntry {
    fn default() -> Self {
        Self {
            id: 0,
            staff: String::new(),
            customer: String::new(),
            contact: String::new(),
            file_ref: String::new(),
            cost: 0.0,
            note: String::new(),
            archived: false,
            prepaid: false,
            print_type: 0,
            submitted_at: DateTime::UNIX_EPOCH,
        }
    }
}

/// An `{origin, path}` pair understood by the host file-loading service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRequest {
    pub origin: String,
    pub path: String,
}

impl QueueEntry {
    pub fn new_draft() -> Self {
        Self::default()
    }

    /// True until the remote store has assigned an identifier.
    pub fn is_draft(&self) -> bool {
        self.id == 0
    }

    /// The part of the file reference after the first `:`, or the whole
    /// reference when no origin prefix is present.
    pub fn display_name(&self) -> &str {
        match self.file_ref.split_once(':') {
            Some((_, path)) => path,
            None => &self.file_ref,
        }
    }

    /// Splits the file reference for the host file-loading service.
    /// Bare paths belong to the `local` storage.
    pub fn file_request(&self) -> FileRequest {
        match self.file_ref.split_once(':') {
            Some((origin, path)) => FileRequest {
                origin: origin.to_string(),
                path: path.to_string(),
            },
            None => FileRequest {
                origin: "local".to_string(),
                path: self.file_ref.clone(),
            },
        }
    }

    /// How long ago the entry was submitted.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.submitted_at
    }

    /// Resolves the print-type index against the catalog. An index the
    /// catalog no longer covers yields an empty label.
    pub fn print_type_label<'a>(&self, catalog: &'a PrintTypeCatalog) -> &'a str {
        catalog.label_at(self.print_type)
    }

    /// Write-back mapping: re-resolves the index from a chosen label,
    /// first match wins. An unknown label leaves the index unchanged.
    pub fn set_print_type_label(&mut self, catalog: &PrintTypeCatalog, label: &str) {
        if let Some(index) = catalog.index_of(label) {
            self.print_type = index;
        }
    }
}
