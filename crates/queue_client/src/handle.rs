use std::sync::{mpsc, Arc};
use std::thread;

use queue_core::{EntryId, EntryUpdate, NewEntry};

use crate::api::{ClientSettings, QueueApi, ReqwestQueueApi};
use crate::types::{MutationKind, RemoteEvent};

/// One remote command, mirroring the remote effects of the core state
/// machine.
#[derive(Debug)]
pub enum RemoteCommand {
    Fetch { force: bool },
    Create(NewEntry),
    Modify(EntryUpdate),
    SetArchived { id: EntryId, archived: bool },
}

/// Owns the worker thread talking to the remote store.
///
/// Commands are executed strictly one at a time, in submission order:
/// together with the core's single-flight rule this removes any
/// interleaving between a refresh and a pending mutation. Completion
/// events are delivered through [`RemoteQueueHandle::try_recv`] on the
/// caller's thread; there is no cancellation, so a late response still
/// carries its full collection.
pub struct RemoteQueueHandle {
    cmd_tx: mpsc::Sender<RemoteCommand>,
    event_rx: mpsc::Receiver<RemoteEvent>,
}

impl RemoteQueueHandle {
    pub fn new(settings: &ClientSettings) -> Result<Self, crate::ApiError> {
        let api = Arc::new(ReqwestQueueApi::new(settings)?);
        Ok(Self::with_api(api))
    }

    /// Runs against any [`QueueApi`], which is the seam tests use.
    pub fn with_api(api: Arc<dyn QueueApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<RemoteCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let event = runtime.block_on(run_command(api.as_ref(), command));
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn send(&self, command: RemoteCommand) {
        let _ = self.cmd_tx.send(command);
    }

    pub fn try_recv(&self) -> Option<RemoteEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn run_command(api: &dyn QueueApi, command: RemoteCommand) -> RemoteEvent {
    match command {
        RemoteCommand::Fetch { force } => {
            log::debug!("fetching queue (force={force})");
            RemoteEvent::FetchFinished(api.fetch_queue(force).await)
        }
        RemoteCommand::Create(entry) => {
            let result = api.add_to_queue(&entry).await;
            if let Err(err) = &result {
                log::warn!("create failed: {err}");
            }
            RemoteEvent::MutationFinished {
                kind: MutationKind::Create,
                result,
            }
        }
        RemoteCommand::Modify(update) => {
            let result = api.modify_item(&update).await;
            if let Err(err) = &result {
                log::warn!("modify failed: {err}");
            }
            RemoteEvent::MutationFinished {
                kind: MutationKind::Modify,
                result,
            }
        }
        RemoteCommand::SetArchived { id, archived } => {
            let result = api.set_archived(id, archived).await;
            if let Err(err) = &result {
                log::warn!("archive toggle failed for {id}: {err}");
            }
            RemoteEvent::MutationFinished {
                kind: MutationKind::Archive,
                result,
            }
        }
    }
}
