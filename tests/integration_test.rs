//! Integration tests for picklist
//!
//! These tests drive the public API the way a front end does: build a
//! modal from caller state, feed it interactions, and react to the events
//! it returns.

use picklist::{
    config::{OutputFormat, PicklistConfig},
    filter::{DisplayRow, FilterRules, filter_rows},
    modal::{ModalEvent, SelectionModal},
    selection::{SelectAllState, SelectionController, SelectionMode},
    source,
};
use std::fs;
use tempfile::TempDir;

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn row_labels(rows: &[DisplayRow]) -> Vec<&str> {
    rows.iter().map(|r| r.label.as_str()).collect()
}

fn committed(modal: &SelectionModal) -> Vec<String> {
    match modal.controller() {
        SelectionController::Multi(multi) => multi.committed().to_vec(),
        SelectionController::Single(_) => panic!("Expected multi-select modal"),
    }
}

/// Feed a query through the modal's query-changed signal, as a caller would
fn type_query(modal: &mut SelectionModal, text: &str) {
    if let ModalEvent::QueryChanged(query) = modal.edit_query(text) {
        modal.set_query(query);
    } else {
        panic!("Expected QueryChanged");
    }
}

#[test]
fn test_filter_correctness() {
    let options = labels(&["Shell", "add station", "Petron", "ADDITIVES Depot", "Seaoil"]);
    let rules = FilterRules::default();

    // Empty query returns the options unmodified, reserved labels included
    let rows = filter_rows(&options, "", SelectionMode::Multi, &rules);
    assert_eq!(rows, options.iter().map(DisplayRow::option).collect::<Vec<_>>());

    // Substring, ignoring case
    let rows = filter_rows(&options, "EL", SelectionMode::Multi, &rules);
    assert_eq!(row_labels(&rows), vec!["Shell"]);

    // Reserved prefix dropped from filtered results
    let rows = filter_rows(&options, "d", SelectionMode::Multi, &rules);
    assert!(rows.is_empty());

    let rows = filter_rows(&options, "d", SelectionMode::Multi, &FilterRules::permissive());
    assert_eq!(row_labels(&rows), vec!["add station", "ADDITIVES Depot"]);
}

#[test]
fn test_create_row_only_in_single_mode_without_exact_match() {
    let options = labels(&["Shell", "Petron"]);
    let rules = FilterRules::default();

    let rows = filter_rows(&options, "pet", SelectionMode::Single, &rules);
    assert!(rows[0].is_create());
    assert_eq!(rows[0].label, "pet");
    assert_eq!(row_labels(&rows), vec!["pet", "Petron"]);

    // Exact match ignoring case suppresses the create row
    let rows = filter_rows(&options, "PETRON", SelectionMode::Single, &rules);
    assert_eq!(rows, vec![DisplayRow::option("Petron")]);

    // Multi-select never creates
    let rows = filter_rows(&options, "pet", SelectionMode::Multi, &rules);
    assert!(rows.iter().all(|r| !r.is_create()));

    // Empty query never creates
    let rows = filter_rows(&options, "", SelectionMode::Single, &rules);
    assert!(rows.iter().all(|r| !r.is_create()));
}

#[test]
fn test_cancel_leaves_committed_unchanged() {
    let original = labels(&["Shell", "Caltex"]);
    let mut modal = SelectionModal::multi(
        "Brands",
        labels(&["Shell", "Petron", "Caltex", "Seaoil"]),
        original.clone(),
    );
    modal.set_visible(true);

    assert!(modal.tap(0).is_none());
    assert!(modal.tap(1).is_none());
    assert!(modal.is_selected("Petron"));
    assert!(!modal.is_selected("Shell"));

    assert_eq!(modal.request_dismiss(), ModalEvent::DismissRequested);
    modal.set_visible(false);

    assert_eq!(committed(&modal), original);
}

#[test]
fn test_reopen_after_cancel_shows_committed() {
    let mut modal = SelectionModal::multi(
        "Brands",
        labels(&["Shell", "Petron", "Caltex"]),
        labels(&["Caltex"]),
    );
    modal.set_visible(true);
    modal.tap(0);
    modal.tap(2);
    modal.set_visible(false);

    modal.set_visible(true);
    assert!(!modal.is_selected("Shell"));
    assert!(modal.is_selected("Caltex"));
    assert_eq!(modal.selected_count(), 1);
}

#[test]
fn test_select_all_scoped_to_visible_rows() {
    let mut modal = SelectionModal::multi(
        "Produce",
        labels(&["Apple", "Banana", "Cabbage", "Date"]),
        labels(&["Apple"]),
    );
    modal.set_visible(true);
    type_query(&mut modal, "ba");
    assert_eq!(row_labels(modal.rows()), vec!["Banana", "Cabbage"]);
    assert_eq!(modal.select_all_state(), Some(SelectAllState::None));

    assert!(modal.toggle_select_all());
    assert_eq!(modal.select_all_state(), Some(SelectAllState::All));
    assert_eq!(
        modal.apply(),
        Some(ModalEvent::CommitMulti(labels(&["Apple", "Banana", "Cabbage"])))
    );

    assert!(modal.toggle_select_all());
    assert_eq!(
        modal.apply(),
        Some(ModalEvent::CommitMulti(labels(&["Apple"])))
    );
}

#[test]
fn test_select_all_with_municipalities() {
    let mut modal = SelectionModal::multi(
        "Municipalities",
        labels(&[
            "Batangas City",
            "Lipa City",
            "Santo Tomas",
            "Malvar",
            "San Jose",
            "San Juan",
        ]),
        labels(&["Malvar", "San Jose"]),
    );
    modal.set_visible(true);
    type_query(&mut modal, "san");
    assert_eq!(modal.select_all_state(), Some(SelectAllState::Partial));

    // Partial selects every visible row
    modal.toggle_select_all();
    assert_eq!(modal.selected_count(), 4);

    modal.toggle_select_all();
    assert_eq!(
        modal.apply(),
        Some(ModalEvent::CommitMulti(labels(&["Malvar"])))
    );
}

#[test]
fn test_single_select_commits_immediately() {
    let mut modal = SelectionModal::single(
        "Brand",
        labels(&["Shell", "Petron", "Caltex"]),
        Some("Shell".into()),
    );
    modal.set_visible(true);

    assert_eq!(modal.tap(2), Some(ModalEvent::CommitSingle("Caltex".into())));
    // The current value is caller-owned and does not move on its own
    assert!(modal.is_selected("Shell"));
    assert!(!modal.is_selected("Caltex"));

    // Free text through the create row
    type_query(&mut modal, "Flying V");
    assert_eq!(modal.tap(0), Some(ModalEvent::CommitSingle("Flying V".into())));
    assert_eq!(modal.apply(), None);
}

#[test]
fn test_empty_state() {
    let mut modal = SelectionModal::multi("Brands", labels(&["Shell", "Caltex"]), vec![]);
    modal.set_visible(true);
    type_query(&mut modal, "zz");

    assert!(modal.rows().is_empty());
    assert!(modal.is_empty_state());
    assert_eq!(PicklistConfig::default().empty_message, "No results found");

    // Select-all over nothing changes nothing
    assert!(!modal.toggle_select_all());
    assert_eq!(modal.apply(), Some(ModalEvent::CommitMulti(vec![])));
}

#[test]
fn test_hidden_modal_ignores_interactions() {
    let mut modal = SelectionModal::single("Brand", labels(&["Shell"]), None);
    assert_eq!(modal.tap(0), None);

    let mut multi = SelectionModal::multi("Brands", labels(&["Shell"]), vec![]);
    assert!(!multi.toggle_select_all());
    assert_eq!(multi.apply(), None);
}

#[test]
fn test_options_from_file_feed_filter() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("brands.json");
    fs::write(&path, r#"["Shell", "Petron", "Add Brand", "Phoenix Petroleum"]"#).unwrap();

    let options = source::load_options(Some(&path)).unwrap();
    let rows = filter_rows(&options, "p", SelectionMode::Single, &FilterRules::default());

    assert_eq!(row_labels(&rows), vec!["p", "Petron", "Phoenix Petroleum"]);
}

#[test]
fn test_config_rules_round_trip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    let mut config = PicklistConfig::load_from(&path).unwrap();
    config.set("reserved_prefix", "").unwrap();
    config.set("output_format", "json").unwrap();
    config.save_to(&path).unwrap();

    let loaded = PicklistConfig::load_from(&path).unwrap();
    assert_eq!(loaded.output_format, OutputFormat::Json);
    assert_eq!(loaded.filter_rules(), FilterRules::permissive());

    let options = labels(&["Add Brand", "Shell"]);
    let rows = filter_rows(&options, "a", SelectionMode::Multi, &loaded.filter_rules());
    assert_eq!(row_labels(&rows), vec!["Add Brand"]);
}
