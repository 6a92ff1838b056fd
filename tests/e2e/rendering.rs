use crate::common::fixtures::{events_table, hollow_tables};
use crate::common::harness::AppTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::BTreeSet;
use tabletop::config::Config;
use tabletop::model::{ColumnMetadata, RowRecord, TableSession, Workspace};
use tabletop::primitives::str_width;

#[test]
fn test_initial_screen_layout() {
    let harness = AppTestHarness::new(80, 24).unwrap();

    let tab_bar = harness.get_row_text(0);
    assert!(tab_bar.contains("Data (d)"), "tab bar: {tab_bar}");
    assert!(tab_bar.contains("Structure (s)"));
    assert!(tab_bar.contains("Indices (i)"));

    assert_eq!(harness.get_cell(0, 1).as_deref(), Some("╭"));
    harness.assert_screen_contains("Tables");
    harness.assert_screen_contains("● users");

    let status = harness.get_row_text(23);
    assert!(status.contains("TABLES"), "status bar: {status}");
    assert!(status.contains("users"));
}

#[test]
fn test_every_line_fills_the_terminal_width() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness.type_text("2").unwrap();
    for line in harness.screen_to_string().lines() {
        assert_eq!(str_width(line), 80, "line {line:?}");
    }
}

#[test]
fn test_status_bar_tracks_cursor() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness.press('2').unwrap();
    harness.assert_screen_contains("R1/5 C1/4");
    harness.type_text("jjl").unwrap();
    harness.assert_screen_contains("R3/5 C2/4");
}

#[test]
fn test_source_label_in_status_bar() {
    let harness = AppTestHarness::new(120, 24).unwrap();
    let status = harness.get_row_text(23);
    assert!(status.contains("test data"), "status bar: {status}");
    assert!(status.contains("q quit"));
}

#[test]
fn test_help_toggle() {
    let mut harness = AppTestHarness::with_workspace(events_table(30), 120, 24).unwrap();
    harness.press('2').unwrap();
    harness.assert_screen_not_contains("Quit: q");
    harness.assert_screen_contains("Rows 1-18 of 30");

    harness.press('?').unwrap();
    harness.assert_screen_contains("Quit: q");
    harness.assert_screen_contains("Edit: e or Enter");
    harness.assert_screen_contains("Rows 1-16 of 30");

    harness.press('e').unwrap();
    harness.assert_screen_contains("Cancel: Esc");
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();

    harness.press('?').unwrap();
    harness.assert_screen_not_contains("Quit: q");
}

#[test]
fn test_help_enabled_from_config() {
    let mut config = Config::default();
    config.ui.show_help = true;
    let harness = AppTestHarness::with_config(events_table(3), config, 120, 24).unwrap();
    harness.assert_screen_contains("Tabs: d/s/i");
}

#[test]
fn test_placeholders_for_hollow_tables() {
    let mut harness = AppTestHarness::with_workspace(hollow_tables(), 80, 24).unwrap();
    harness.assert_screen_contains("No data available for table: empty_rows");

    harness.press('2').unwrap();
    harness.press('i').unwrap();
    harness.assert_screen_contains("No index information available for table: empty_rows");

    harness.press('1').unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.press('2').unwrap();
    harness.press('s').unwrap();
    harness.assert_screen_contains("No metadata available for table: no_columns");
    harness.press('d').unwrap();
    harness.assert_screen_contains("No data available for table: no_columns");
}

#[test]
fn test_empty_workspace() {
    let harness = AppTestHarness::with_workspace(Workspace::default(), 80, 24).unwrap();
    harness.assert_screen_contains("No tables");
    harness.assert_screen_contains("0-0 of 0");
}

#[test]
fn test_wide_characters_keep_columns_aligned() {
    let columns = vec![
        ColumnMetadata::new("id", "int", false, "PRI"),
        ColumnMetadata::new("title", "varchar(12)", false, ""),
        ColumnMetadata::new("n", "int", false, ""),
    ];
    let rows = vec![
        RowRecord::new()
            .with_field("id", 1i64)
            .with_field("title", "日本語のタイトルです")
            .with_field("n", 7i64),
        RowRecord::new()
            .with_field("id", 2i64)
            .with_field("title", "plain")
            .with_field("n", 8i64),
    ];
    let table = TableSession::new("books", columns, rows, BTreeSet::new());
    let mut harness =
        AppTestHarness::with_workspace(Workspace::new(vec![table]), 80, 24).unwrap();
    harness.press('2').unwrap();

    let first = harness.get_row_text(3);
    let second = harness.get_row_text(4);
    assert!(first.contains("日本"), "row: {first}");
    let bar_columns = |line: &str| -> Vec<usize> {
        let mut width = 0;
        let mut positions = Vec::new();
        for ch in line.chars() {
            if ch == '│' {
                positions.push(width);
            }
            width += str_width(&ch.to_string());
        }
        positions
    };
    assert_eq!(bar_columns(&first), bar_columns(&second));
}

#[test]
fn test_long_values_are_truncated_with_ellipsis() {
    let table = TableSession::new(
        "notes",
        vec![
            ColumnMetadata::new("id", "int", false, "PRI"),
            ColumnMetadata::new("body", "varchar(10)", false, ""),
        ],
        vec![RowRecord::new()
            .with_field("id", 1i64)
            .with_field("body", "a very long note that cannot fit")],
        BTreeSet::new(),
    );
    let mut config = Config::default();
    config.ui.sidebar_percent = 50;
    let harness = AppTestHarness::with_config(Workspace::new(vec![table]), config, 60, 12).unwrap();
    harness.assert_screen_contains("...");
    harness.assert_screen_not_contains("cannot fit");
}

#[test]
fn test_too_small_then_restored() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness.resize(30, 6).unwrap();
    harness.assert_screen_contains("Terminal too small");
    harness.assert_screen_not_contains("users");

    harness.resize(80, 24).unwrap();
    harness.assert_screen_not_contains("Terminal too small");
    harness.assert_screen_contains("users");
}
