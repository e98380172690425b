use chrono::{DateTime, Utc};

use crate::catalog::PrintTypeCatalog;
use crate::collection::{CollectionStore, EntryFilter, EntrySort, DEFAULT_PAGE_SIZE};
use crate::effect::{Effect, EntryUpdate, NewEntry};
use crate::entry::{EntryId, QueueEntry};
use crate::msg::{DraftField, RemoteFailure};
use crate::sync::SyncState;
use crate::view_model::{DialogView, EntryFormView, EntryRowView, QueueViewModel};
use crate::workflow::Workflow;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    collection: CollectionStore,
    sync: SyncState,
    workflow: Workflow,
    catalog: PrintTypeCatalog,
    filter: EntryFilter,
    sort: EntrySort,
    page: usize,
    page_size: usize,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            collection: CollectionStore::new(),
            sync: SyncState::default(),
            workflow: Workflow::Idle,
            catalog: PrintTypeCatalog::default(),
            filter: EntryFilter::Queue,
            sort: EntrySort::TypeThenDate,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection(&self) -> &CollectionStore {
        &self.collection
    }

    pub fn sync(&self) -> &SyncState {
        &self.sync
    }

    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    pub fn catalog(&self) -> &PrintTypeCatalog {
        &self.catalog
    }

    /// Returns the dirty flag and clears it. The host renders only when
    /// this reports true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Snapshot of everything the presentation layer needs. `now` feeds
    /// the relative-age fields so the render stays a pure function.
    pub fn view(&self, now: DateTime<Utc>) -> QueueViewModel {
        let rows = self
            .collection
            .view(self.filter, self.sort, self.page, self.page_size)
            .map(|entry| self.row_view(entry, now))
            .collect();
        let filtered = self.collection.filtered_len(self.filter);
        QueueViewModel {
            rows,
            queue_empty: self.collection.queue_is_empty(),
            refreshing: self.sync.is_fetching(),
            initializing: self.sync.is_initializing(),
            filter: self.filter,
            sort: self.sort,
            page: self.page,
            page_count: filtered.div_ceil(self.page_size),
            print_types: self.catalog.labels().to_vec(),
            dialog: self.dialog_view(),
        }
    }

    fn row_view(&self, entry: &QueueEntry, now: DateTime<Utc>) -> EntryRowView {
        EntryRowView {
            id: entry.id,
            staff: entry.staff.clone(),
            customer: entry.customer.clone(),
            contact: entry.contact.clone(),
            file_display: entry.display_name().to_string(),
            cost: entry.cost,
            note: entry.note.clone(),
            archived: entry.archived,
            prepaid: entry.prepaid,
            print_type_label: entry.print_type_label(&self.catalog).to_string(),
            age_secs: entry.age(now).num_seconds(),
        }
    }

    fn dialog_view(&self) -> Option<DialogView> {
        match &self.workflow {
            Workflow::Idle => None,
            Workflow::EditingNew { draft } => Some(DialogView::Add(self.form_view(draft))),
            Workflow::EditingExisting { draft } => Some(DialogView::Edit(self.form_view(draft))),
            Workflow::ConfirmingArchive { id, archived } => Some(DialogView::ConfirmArchive {
                id: *id,
                archived: *archived,
            }),
        }
    }

    fn form_view(&self, draft: &QueueEntry) -> EntryFormView {
        EntryFormView {
            id: draft.id,
            staff: draft.staff.clone(),
            customer: draft.customer.clone(),
            contact: draft.contact.clone(),
            file_ref: draft.file_ref.clone(),
            cost: draft.cost,
            note: draft.note.clone(),
            prepaid: draft.prepaid,
            archived: draft.archived,
            print_type_label: draft.print_type_label(&self.catalog).to_string(),
        }
    }

    // ---- Sync controller ----

    /// Issues a fetch unless the panel is hidden (defer, mark stale) or a
    /// fetch is already in flight (single-flight).
    pub(crate) fn request_refresh(&mut self, force: bool) -> Vec<Effect> {
        if self.sync.begin_refresh() {
            self.mark_dirty();
            vec![Effect::FetchQueue { force }]
        } else {
            Vec::new()
        }
    }

    pub(crate) fn set_view_active(&mut self, active: bool) -> Vec<Effect> {
        if self.sync.set_view_active(active) {
            self.request_refresh(false)
        } else {
            Vec::new()
        }
    }

    pub(crate) fn observe_printing(&mut self, printing: bool) -> Vec<Effect> {
        if self.sync.observe_printing(printing) {
            self.request_refresh(false)
        } else {
            Vec::new()
        }
    }

    pub(crate) fn apply_fetch(&mut self, result: Result<Vec<QueueEntry>, RemoteFailure>) {
        match result {
            Ok(entries) => {
                self.collection.replace_all(entries);
                self.sync.finish_refresh(true);
            }
            Err(_) => {
                // Previous collection stays displayed; the caller may retry
                // through the normal refresh path.
                self.sync.finish_refresh(false);
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn apply_mutation(&mut self, result: Result<Vec<QueueEntry>, RemoteFailure>) {
        match result {
            Ok(entries) => {
                self.collection.replace_all(entries);
                self.sync.mark_fresh();
                self.workflow = Workflow::Idle;
                self.mark_dirty();
            }
            Err(_) => {
                // The dialog stays open so the user may retry; nothing was
                // applied remotely, so there is nothing to roll back.
            }
        }
    }

    // ---- Edit/archive workflow ----

    pub(crate) fn open_add(&mut self) {
        self.workflow = Workflow::EditingNew {
            draft: QueueEntry::new_draft(),
        };
        self.mark_dirty();
    }

    pub(crate) fn open_add_with_file(&mut self, storage: &str, path: &str) {
        let mut draft = QueueEntry::new_draft();
        draft.file_ref = format!("{storage}:{path}");
        self.workflow = Workflow::EditingNew { draft };
        self.mark_dirty();
    }

    pub(crate) fn open_edit(&mut self, id: EntryId) {
        if let Some(entry) = self.collection.get(id) {
            self.workflow = Workflow::EditingExisting {
                draft: entry.clone(),
            };
            self.mark_dirty();
        }
    }

    pub(crate) fn open_archive(&mut self, id: EntryId) {
        if let Some(entry) = self.collection.get(id) {
            self.workflow = Workflow::ConfirmingArchive {
                id,
                archived: entry.archived,
            };
            self.mark_dirty();
        }
    }

    pub(crate) fn edit_draft(&mut self, field: DraftField) {
        // Resolve the label before borrowing the draft mutably.
        let label_index = match &field {
            DraftField::PrintTypeLabel(label) => self.catalog.index_of(label),
            _ => None,
        };
        let Some(draft) = self.workflow.draft_mut() else {
            return;
        };
        match field {
            DraftField::Staff(value) => draft.staff = value,
            DraftField::Customer(value) => draft.customer = value,
            DraftField::Contact(value) => draft.contact = value,
            DraftField::FileRef(value) => draft.file_ref = value,
            DraftField::Note(value) => draft.note = value,
            DraftField::Cost(value) => draft.cost = value,
            DraftField::Prepaid(value) => draft.prepaid = value,
            DraftField::PrintTypeLabel(_) => {
                // Unknown labels leave the stored index alone, first
                // match wins otherwise.
                if let Some(index) = label_index {
                    draft.print_type = index;
                }
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn submit_create(&self) -> Vec<Effect> {
        let Workflow::EditingNew { draft } = &self.workflow else {
            return Vec::new();
        };
        vec![Effect::CreateEntry(NewEntry {
            staff: draft.staff.clone(),
            customer: draft.customer.clone(),
            contact: draft.contact.clone(),
            file_ref: draft.file_ref.clone(),
            note: draft.note.clone(),
            cost: draft.cost,
            prepaid: draft.prepaid,
            print_type: draft.print_type,
        })]
    }

    pub(crate) fn submit_modify(&self) -> Vec<Effect> {
        let Workflow::EditingExisting { draft } = &self.workflow else {
            return Vec::new();
        };
        vec![Effect::ModifyEntry(EntryUpdate {
            id: draft.id,
            staff: draft.staff.clone(),
            customer: draft.customer.clone(),
            contact: draft.contact.clone(),
            file_ref: draft.file_ref.clone(),
            note: draft.note.clone(),
            cost: draft.cost,
            prepaid: draft.prepaid,
            archived: draft.archived,
            print_type: draft.print_type,
        })]
    }

    pub(crate) fn submit_archive_toggle(&self) -> Vec<Effect> {
        let Workflow::ConfirmingArchive { id, archived } = self.workflow else {
            return Vec::new();
        };
        vec![Effect::SetArchived {
            id,
            archived: !archived,
        }]
    }

    /// Discards in-progress edits. Local changes are never persisted
    /// unless submitted, so closing the dialog just forces a refresh.
    pub(crate) fn cancel_edit(&mut self) -> Vec<Effect> {
        self.workflow = Workflow::Idle;
        self.sync.mark_stale();
        self.mark_dirty();
        self.request_refresh(false)
    }

    pub(crate) fn cancel_archive(&mut self) {
        if let Workflow::ConfirmingArchive { .. } = self.workflow {
            self.workflow = Workflow::Idle;
            self.mark_dirty();
        }
    }

    pub(crate) fn load_file(&self, id: EntryId) -> Vec<Effect> {
        match self.collection.get(id) {
            Some(entry) => {
                let request = entry.file_request();
                vec![Effect::LoadFile {
                    origin: request.origin,
                    path: request.path,
                }]
            }
            None => Vec::new(),
        }
    }

    // ---- Presentation preferences ----

    pub(crate) fn change_filter(&mut self, filter: EntryFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.page = 0;
            self.mark_dirty();
        }
    }

    pub(crate) fn change_sort(&mut self, sort: EntrySort) {
        if self.sort != sort {
            self.sort = sort;
            self.mark_dirty();
        }
    }

    pub(crate) fn change_page(&mut self, page: usize) {
        if self.page != page {
            self.page = page;
            self.mark_dirty();
        }
    }

    // ---- Print-type catalog ----

    pub(crate) fn catalog_add(&mut self, label: String) {
        self.catalog.add(label);
        self.mark_dirty();
    }

    pub(crate) fn catalog_remove(&mut self, label: &str) {
        if self.catalog.remove(label) {
            self.mark_dirty();
        }
    }

    pub(crate) fn catalog_move_up(&mut self, index: usize) {
        if self.catalog.move_up(index) {
            self.mark_dirty();
        }
    }

    pub(crate) fn catalog_move_down(&mut self, index: usize) {
        if self.catalog.move_down(index) {
            self.mark_dirty();
        }
    }

    pub(crate) fn catalog_restore(&mut self, labels: Vec<String>) {
        self.catalog = PrintTypeCatalog::new(labels);
        self.mark_dirty();
    }

    pub(crate) fn catalog_snapshot(&self) -> Vec<Effect> {
        vec![Effect::PersistPrintTypes(self.catalog.labels().to_vec())]
    }
}
