use crate::common::fixtures::events_table;
use crate::common::harness::AppTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use tabletop::app::EditMode;
use tabletop::model::RowValue;

/// `events` table with the main panel focused on the data tab
fn events_harness() -> AppTestHarness {
    let mut harness = AppTestHarness::with_workspace(events_table(5), 80, 24).unwrap();
    harness.press('2').unwrap();
    harness
}

fn cell(harness: &AppTestHarness, row: usize, col: usize) -> RowValue {
    harness
        .app()
        .active_table()
        .and_then(|t| t.cell(row, col))
        .cloned()
        .unwrap_or(RowValue::Null)
}

#[test]
fn test_inline_edit_appends_and_commits() {
    let mut harness = events_harness();
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    harness.press('e').unwrap();
    assert_eq!(harness.app().edit_state().mode(), EditMode::Inline);
    harness.assert_screen_contains("EDIT");

    harness.type_text("-x").unwrap();
    harness.assert_screen_contains("event-1-x");
    assert_eq!(cell(&harness, 0, 1), RowValue::from("event-1"));

    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(cell(&harness, 0, 1), RowValue::from("event-1-x"));
    assert_eq!(
        harness.app().status_message(),
        Some("Updated events.label (row 1) to event-1-x")
    );
    harness.assert_screen_contains("event-1-x");
    harness.assert_screen_not_contains("EDIT");
}

#[test]
fn test_inline_edit_places_terminal_cursor() {
    let mut harness = events_harness();
    harness.press('e').unwrap();
    let caret = harness.cursor_position().unwrap();
    // tab bar, panel border, header, then the first row
    assert_eq!(caret.y, 3);
    assert!(caret.x > 20, "caret should sit inside the main panel");
}

#[test]
fn test_escape_discards_buffer() {
    let mut harness = events_harness();
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    harness.press('e').unwrap();
    harness
        .send_key_repeat(KeyCode::Backspace, KeyModifiers::NONE, 20)
        .unwrap();
    harness.type_text("gone").unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();

    assert!(!harness.app().edit_state().is_editing());
    assert_eq!(cell(&harness, 0, 1), RowValue::from("event-1"));
    harness.assert_screen_contains("event-1");
    harness.assert_screen_contains("Edit cancelled");
}

#[test]
fn test_modal_edit_to_null() {
    let mut harness = events_harness();
    harness
        .send_key_repeat(KeyCode::Right, KeyModifiers::NONE, 2)
        .unwrap();
    harness
        .send_key(KeyCode::Char('e'), KeyModifiers::CONTROL)
        .unwrap();
    assert_eq!(harness.app().edit_state().mode(), EditMode::Modal);
    harness.assert_screen_contains("Edit events.score");
    harness.assert_screen_contains("Type: float  NULL");
    harness.assert_screen_contains("> 0");

    harness.type_text("abc").unwrap();
    harness.assert_screen_contains("> 0abc");
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    assert_eq!(cell(&harness, 0, 2), RowValue::Null);
    harness.assert_screen_not_contains("Edit events.score");
    harness.assert_screen_contains("NULL");
}

#[test]
fn test_typed_command_keys_go_into_buffer() {
    let mut harness = events_harness();
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    harness.press('e').unwrap();
    harness.type_text("q1?s").unwrap();
    assert!(!harness.app().should_quit());
    assert_eq!(harness.app().edit_state().buffer(), "event-1q1?s");
    assert!(!harness.app().show_help());
}

#[test]
fn test_ctrl_c_quits_while_editing() {
    let mut harness = events_harness();
    harness.press('e').unwrap();
    harness
        .send_key(KeyCode::Char('c'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.app().should_quit());
}

#[test]
fn test_integer_edit_rejects_garbage() {
    let mut harness = events_harness();
    harness.press('e').unwrap();
    harness.type_text("x").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    assert_eq!(cell(&harness, 0, 0), RowValue::Integer(1));
    assert!(harness
        .app()
        .status_message()
        .unwrap()
        .contains("value unchanged"));
}

#[test]
fn test_boolean_column_displays_yes_no() {
    let mut harness = events_harness();
    harness.assert_screen_contains("Yes");
    harness.assert_screen_contains("No");

    harness
        .send_key_repeat(KeyCode::Right, KeyModifiers::NONE, 3)
        .unwrap();
    harness.press('e').unwrap();
    harness
        .send_key_repeat(KeyCode::Backspace, KeyModifiers::NONE, 3)
        .unwrap();
    harness.type_text("maybe").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(cell(&harness, 0, 3), RowValue::Boolean(false));
}

#[test]
fn test_set_null_respects_nullability() {
    let mut harness = events_harness();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
    assert_eq!(cell(&harness, 0, 0), RowValue::Integer(1));
    assert_eq!(harness.app().status_message(), Some("id is NOT NULL"));

    harness
        .send_key_repeat(KeyCode::Right, KeyModifiers::NONE, 2)
        .unwrap();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
    assert_eq!(cell(&harness, 0, 2), RowValue::Null);
}

#[test]
fn test_edit_keys_ignored_outside_data_grid() {
    let mut harness = AppTestHarness::with_workspace(events_table(5), 80, 24).unwrap();
    // sidebar focus: Enter activates instead of editing
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert!(!harness.app().edit_state().is_editing());

    harness.type_text("2i").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness
        .send_key(KeyCode::Char('e'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(!harness.app().edit_state().is_editing());
}

#[test]
fn test_edits_survive_table_switch() {
    let mut harness = AppTestHarness::new(100, 24).unwrap();
    harness.type_text("2l").unwrap();
    harness.press('e').unwrap();
    harness
        .send_key_repeat(KeyCode::Backspace, KeyModifiers::NONE, 10)
        .unwrap();
    harness.type_text("renamed").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    harness.press('1').unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    harness.assert_screen_contains("renamed");
    harness.assert_screen_not_contains("johndoe");
}

#[test]
fn test_tinyint_flag_column_takes_integers() {
    let mut harness = AppTestHarness::new(100, 24).unwrap();
    harness.type_text("2lll").unwrap();
    harness.press('e').unwrap();
    assert_eq!(harness.app().edit_state().buffer(), "Yes");
    harness
        .send_key_repeat(KeyCode::Backspace, KeyModifiers::NONE, 3)
        .unwrap();
    harness.type_text("1").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(cell(&harness, 0, 3), RowValue::Integer(1));

    harness.press('e').unwrap();
    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    harness.type_text("yes").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(cell(&harness, 0, 3), RowValue::Integer(1));
    assert!(harness
        .app()
        .status_message()
        .unwrap()
        .contains("value unchanged"));
}
