//! Queue client: remote-store access and effect execution.
mod api;
mod handle;
mod types;
mod wire;

pub use api::{ClientSettings, QueueApi, ReqwestQueueApi};
pub use handle::{RemoteCommand, RemoteQueueHandle};
pub use types::{ApiError, MutationKind, RemoteEvent};
pub use wire::EntryRecord;
