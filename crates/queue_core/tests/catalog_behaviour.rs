use std::sync::Once;

use chrono::Utc;
use queue_core::{update, AppState, Effect, Msg, PrintTypeCatalog, QueueEntry};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(queue_logging::initialize_for_tests);
}

#[test]
fn default_catalog_matches_plugin_defaults() {
    init_logging();
    let catalog = PrintTypeCatalog::default();
    assert_eq!(
        catalog.labels(),
        ["Urgent", "Customer", "Student", "Internal", "Other"]
    );
}

#[test]
fn out_of_range_index_resolves_to_empty_label() {
    init_logging();
    let catalog = PrintTypeCatalog::new(vec![
        "A".to_string(),
        "B".to_string(),
        "C".to_string(),
    ]);
    let entry = QueueEntry {
        print_type: 5,
        ..QueueEntry::default()
    };

    assert_eq!(entry.print_type_label(&catalog), "");
    assert_eq!(catalog.label_at(2), "C");
}

#[test]
fn label_write_back_takes_the_first_match() {
    init_logging();
    let catalog = PrintTypeCatalog::new(vec![
        "A".to_string(),
        "B".to_string(),
        "B".to_string(),
    ]);
    let mut entry = QueueEntry::default();

    entry.set_print_type_label(&catalog, "B");
    assert_eq!(entry.print_type, 1);

    // Unknown labels leave the stored index alone.
    entry.set_print_type_label(&catalog, "missing");
    assert_eq!(entry.print_type, 1);
}

#[test]
fn display_name_strips_the_origin_prefix() {
    init_logging();
    let mut entry = QueueEntry::default();

    entry.file_ref = "sdcard:models/cube.gcode".to_string();
    assert_eq!(entry.display_name(), "models/cube.gcode");

    entry.file_ref = "cube.gcode".to_string();
    assert_eq!(entry.display_name(), "cube.gcode");
}

#[test]
fn catalog_edits_reorder_and_remove() {
    init_logging();
    let mut catalog = PrintTypeCatalog::new(vec!["A".to_string(), "B".to_string()]);

    catalog.add("C".to_string());
    assert_eq!(catalog.labels(), ["A", "B", "C"]);

    assert!(catalog.move_up(2));
    assert_eq!(catalog.labels(), ["A", "C", "B"]);

    assert!(catalog.move_down(0));
    assert_eq!(catalog.labels(), ["C", "A", "B"]);

    // Edges are no-ops.
    assert!(!catalog.move_up(0));
    assert!(!catalog.move_down(2));
    assert!(!catalog.move_up(17));

    assert!(catalog.remove("A"));
    assert!(!catalog.remove("A"));
    assert_eq!(catalog.labels(), ["C", "B"]);
}

#[test]
fn settings_save_emits_catalog_snapshot() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::PrintTypeAdded("Bulk".to_string()));
    let (_, effects) = update(state, Msg::SettingsSaving);

    assert_eq!(
        effects,
        vec![Effect::PersistPrintTypes(vec![
            "Urgent".to_string(),
            "Customer".to_string(),
            "Student".to_string(),
            "Internal".to_string(),
            "Other".to_string(),
            "Bulk".to_string(),
        ])]
    );
}

#[test]
fn restored_catalog_replaces_the_defaults() {
    init_logging();
    let state = AppState::new();
    let (mut state, effects) = update(
        state,
        Msg::PrintTypesRestored(vec!["Member".to_string(), "Guest".to_string()]),
    );

    assert!(effects.is_empty());
    assert_eq!(state.catalog().labels(), ["Member", "Guest"]);
    assert!(state.consume_dirty());

    let view = state.view(Utc::now());
    assert_eq!(view.print_types, vec!["Member", "Guest"]);
}

#[test]
fn shrunken_catalog_degrades_row_labels() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::ViewActivated(true));
    let stale_index = QueueEntry {
        id: 1,
        print_type: 4,
        ..QueueEntry::default()
    };
    let (state, _) = update(state, Msg::FetchCompleted(Ok(vec![stale_index])));

    // Catalog shrinks below the stored index.
    let (state, _) = update(
        state,
        Msg::PrintTypesRestored(vec!["Only".to_string()]),
    );

    let view = state.view(Utc::now());
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].print_type_label, "");
}
