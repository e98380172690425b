//! Queue core: pure state machine and view-model helpers.
mod catalog;
mod collection;
mod effect;
mod entry;
mod msg;
mod state;
mod sync;
mod update;
mod view_model;
mod workflow;

pub use catalog::PrintTypeCatalog;
pub use collection::{CollectionStore, EntryFilter, EntrySort, DEFAULT_PAGE_SIZE};
pub use effect::{Effect, EntryUpdate, NewEntry};
pub use entry::{EntryId, FileRequest, QueueEntry};
pub use msg::{DraftField, Msg, RemoteFailure};
pub use state::AppState;
pub use sync::{SyncPhase, SyncState};
pub use update::update;
pub use view_model::{DialogView, EntryFormView, EntryRowView, QueueViewModel};
pub use workflow::Workflow;
