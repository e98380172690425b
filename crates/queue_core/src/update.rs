use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ViewActivated(active) => state.set_view_active(active),
        Msg::PrinterState { printing } => state.observe_printing(printing),
        Msg::RefreshRequested { force } => state.request_refresh(force),
        Msg::FetchCompleted(result) => {
            state.apply_fetch(result);
            Vec::new()
        }
        Msg::MutationCompleted(result) => {
            state.apply_mutation(result);
            Vec::new()
        }
        Msg::AddRequested => {
            state.open_add();
            Vec::new()
        }
        Msg::FileAdded { storage, path } => {
            state.open_add_with_file(&storage, &path);
            Vec::new()
        }
        Msg::EditRequested { id } => {
            state.open_edit(id);
            Vec::new()
        }
        Msg::ArchiveRequested { id } => {
            state.open_archive(id);
            Vec::new()
        }
        Msg::DraftEdited(field) => {
            state.edit_draft(field);
            Vec::new()
        }
        Msg::SubmitCreate => state.submit_create(),
        Msg::SubmitModify => state.submit_modify(),
        Msg::SubmitArchiveToggle => state.submit_archive_toggle(),
        Msg::CancelEdit => state.cancel_edit(),
        Msg::CancelArchive => {
            state.cancel_archive();
            Vec::new()
        }
        Msg::LoadFileRequested { id } => state.load_file(id),
        Msg::FilterChanged(filter) => {
            state.change_filter(filter);
            Vec::new()
        }
        Msg::SortChanged(sort) => {
            state.change_sort(sort);
            Vec::new()
        }
        Msg::PageChanged(page) => {
            state.change_page(page);
            Vec::new()
        }
        Msg::PrintTypeAdded(label) => {
            state.catalog_add(label);
            Vec::new()
        }
        Msg::PrintTypeRemoved(label) => {
            state.catalog_remove(&label);
            Vec::new()
        }
        Msg::PrintTypeMovedUp(index) => {
            state.catalog_move_up(index);
            Vec::new()
        }
        Msg::PrintTypeMovedDown(index) => {
            state.catalog_move_down(index);
            Vec::new()
        }
        Msg::PrintTypesRestored(labels) => {
            state.catalog_restore(labels);
            Vec::new()
        }
        Msg::SettingsSaving => state.catalog_snapshot(),
    };

    (state, effects)
}
