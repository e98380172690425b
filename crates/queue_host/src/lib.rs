//! Host adapter: glues the pure queue state machine to the remote client
//! and the host-provided collaborators.
//!
//! The embedding application registers its two external signals here
//! (panel visibility and printer state), forwards its file-added event,
//! and polls [`QueueController::pump`] from its event loop. Rendering is
//! the host's business: [`QueueController::take_view`] yields a fresh
//! view model only when the state actually changed.

use chrono::Utc;
use queue_client::{RemoteCommand, RemoteEvent, RemoteQueueHandle};
use queue_core::{update, AppState, Effect, Msg, QueueViewModel, RemoteFailure};

/// Collaborators the host application provides; consumed, not
/// implemented, by this crate.
pub trait HostServices {
    /// File-loading service: receives the `{origin, path}` pair of an
    /// entry's file reference.
    fn load_file(&mut self, origin: &str, path: &str);
    /// Persists the print-type catalog on the host's settings store.
    fn persist_print_types(&mut self, labels: &[String]);
}

/// Owns the application state, the remote worker, and the host seam.
///
/// Single-threaded by design: every message is applied on the caller's
/// thread, remote completions included, so the state is never shared.
pub struct QueueController<H: HostServices> {
    state: AppState,
    remote: RemoteQueueHandle,
    host: H,
}

impl<H: HostServices> QueueController<H> {
    pub fn new(remote: RemoteQueueHandle, host: H) -> Self {
        Self {
            state: AppState::new(),
            remote,
            host,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies one message and executes whatever effects it produced.
    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchQueue { force } => self.remote.send(RemoteCommand::Fetch { force }),
            Effect::CreateEntry(entry) => self.remote.send(RemoteCommand::Create(entry)),
            Effect::ModifyEntry(entry) => self.remote.send(RemoteCommand::Modify(entry)),
            Effect::SetArchived { id, archived } => {
                self.remote.send(RemoteCommand::SetArchived { id, archived })
            }
            Effect::LoadFile { origin, path } => self.host.load_file(&origin, &path),
            Effect::PersistPrintTypes(labels) => self.host.persist_print_types(&labels),
        }
    }

    /// Drains completed remote work back into the state machine. Call
    /// from the host's event loop.
    pub fn pump(&mut self) {
        while let Some(event) = self.remote.try_recv() {
            let msg = match event {
                RemoteEvent::FetchFinished(result) => {
                    Msg::FetchCompleted(result.map_err(to_failure))
                }
                RemoteEvent::MutationFinished { kind, result } => {
                    log::debug!("{kind:?} command finished");
                    Msg::MutationCompleted(result.map_err(to_failure))
                }
            };
            self.dispatch(msg);
        }
    }

    /// Subscription point for the host's view-visibility signal.
    pub fn on_view_visibility(&mut self, visible: bool) {
        self.dispatch(Msg::ViewActivated(visible));
    }

    /// Subscription point for the host's printer-state signal.
    pub fn on_printer_state(&mut self, printing: bool) {
        self.dispatch(Msg::PrinterState { printing });
    }

    /// Host event: a file was just added to storage; opens the add
    /// dialog pre-filled with `storage:path`.
    pub fn on_file_added(&mut self, storage: &str, path: &str) {
        self.dispatch(Msg::FileAdded {
            storage: storage.to_string(),
            path: path.to_string(),
        });
    }

    /// A fresh view model when the state changed since the last call.
    pub fn take_view(&mut self) -> Option<QueueViewModel> {
        if self.state.consume_dirty() {
            Some(self.state.view(Utc::now()))
        } else {
            None
        }
    }
}

fn to_failure(err: queue_client::ApiError) -> RemoteFailure {
    RemoteFailure {
        message: err.to_string(),
    }
}
