use std::cmp::Ordering;

use crate::entry::{EntryId, QueueEntry};

/// Default page size of the list view.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Named filter over the working set. `Queue` and `Archive` form an
/// exclusive group: a view applies exactly one of them, so no entry can
/// appear in both filtered views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFilter {
    /// Pending entries (`archived == false`).
    Queue,
    /// Archived entries.
    Archive,
}

impl EntryFilter {
    fn matches(self, entry: &QueueEntry) -> bool {
        match self {
            EntryFilter::Queue => !entry.archived,
            EntryFilter::Archive => entry.archived,
        }
    }
}

/// Named sort order for views. Both comparators are applied with a
/// stable sort: equal keys keep their relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySort {
    /// Print-type index ascending, then submission timestamp ascending.
    TypeThenDate,
    /// Submission timestamp ascending.
    DateOnly,
}

impl EntrySort {
    fn compare(self, a: &QueueEntry, b: &QueueEntry) -> Ordering {
        match self {
            EntrySort::TypeThenDate => a
                .print_type
                .cmp(&b.print_type)
                .then(a.submitted_at.cmp(&b.submitted_at)),
            EntrySort::DateOnly => a.submitted_at.cmp(&b.submitted_at),
        }
    }
}

/// Authoritative in-memory set of queue entries.
///
/// The set only changes wholesale: every sync or mutation response
/// replaces it via [`CollectionStore::replace_all`]. Views never mutate
/// the set; callers needing a snapshot must copy.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionStore {
    entries: Vec<QueueEntry>,
    queue_empty: bool,
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            queue_empty: true,
        }
    }
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replaces the working set and recomputes the
    /// queue-is-empty indicator.
    pub fn replace_all(&mut self, entries: Vec<QueueEntry>) {
        self.entries = entries;
        self.queue_empty = !self.entries.iter().any(|entry| !entry.archived);
    }

    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&QueueEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// True iff no non-archived entry exists.
    pub fn queue_is_empty(&self) -> bool {
        self.queue_empty
    }

    /// Number of entries matching `filter`.
    pub fn filtered_len(&self, filter: EntryFilter) -> usize {
        self.entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .count()
    }

    /// Lazy, paginated, filtered, sorted view over the working set.
    pub fn view(
        &self,
        filter: EntryFilter,
        sort: EntrySort,
        page: usize,
        page_size: usize,
    ) -> impl Iterator<Item = &QueueEntry> {
        let mut rows: Vec<&QueueEntry> = self
            .entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .collect();
        // Vec::sort_by is stable, which the comparators rely on.
        rows.sort_by(|a, b| sort.compare(a, b));
        rows.into_iter().skip(page * page_size).take(page_size)
    }
}
