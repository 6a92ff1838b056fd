use crate::common::fixtures::{events_table, numbered_tables};
use crate::common::harness::AppTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::BTreeSet;
use tabletop::app::{Focus, MainTab};
use tabletop::model::{ColumnMetadata, RowRecord, TableSession, Workspace};

/// 50 tables in a sidebar whose content area is 13 lines tall
fn fifty_tables() -> AppTestHarness {
    // 13 content lines + 2 border + tab bar + status bar
    AppTestHarness::with_workspace(numbered_tables(50), 80, 17).unwrap()
}

#[test]
fn test_sidebar_first_page() {
    let harness = fifty_tables();
    let vp = harness.app().sidebar_viewport();
    assert_eq!(vp.height(), 13);
    assert_eq!(vp.visible_count(), 10);
    assert!(vp.show_down_indicator());

    harness.assert_screen_contains("table_00");
    harness.assert_screen_contains("table_09");
    harness.assert_screen_not_contains("table_10");
    harness.assert_screen_contains("↓ more");
    harness.assert_screen_contains("1-10 of 50");
}

#[test]
fn test_sidebar_page_down_moves_selection_into_view() {
    let mut harness = fifty_tables();
    harness
        .send_key(KeyCode::PageDown, KeyModifiers::NONE)
        .unwrap();

    let vp = harness.app().sidebar_viewport();
    assert_eq!(vp.offset(), 10);
    assert_eq!(harness.app().selected_table(), 10);
    harness.assert_screen_contains("↑ more");
    harness.assert_screen_contains("> table_10");
    harness.assert_screen_not_contains("table_09");
}

#[test]
fn test_sidebar_end_and_home() {
    let mut harness = fifty_tables();
    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().sidebar_viewport().offset(), 40);
    assert_eq!(harness.app().selected_table(), 49);
    harness.assert_screen_contains("41-50 of 50");
    harness.assert_screen_not_contains("↓ more");

    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().sidebar_viewport().offset(), 0);
    assert_eq!(harness.app().selected_table(), 0);
    harness.assert_screen_contains("1-10 of 50");
}

#[test]
fn test_arrowing_past_the_window_scrolls() {
    let mut harness = fifty_tables();
    harness
        .send_key_repeat(KeyCode::Down, KeyModifiers::NONE, 12)
        .unwrap();
    assert_eq!(harness.app().selected_table(), 12);
    let range = harness.app().sidebar_viewport().visible_range();
    assert!(range.contains(&12), "selection outside {range:?}");
    harness.assert_screen_contains("> table_12");
}

#[test]
fn test_enter_opens_table_in_main_panel() {
    let mut harness = AppTestHarness::new(100, 24).unwrap();
    harness.assert_screen_contains("users · Data");

    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().active_table_index(), 1);
    assert_eq!(harness.app().active_table().unwrap().name, "orders");
    harness.assert_screen_contains("orders · Data");
    harness.assert_screen_contains("TOTALPRICE");
    harness.assert_screen_contains("Completed");
}

#[test]
fn test_selection_alone_does_not_switch_table() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness
        .send_key_repeat(KeyCode::Down, KeyModifiers::NONE, 2)
        .unwrap();
    assert_eq!(harness.app().selected_table(), 2);
    assert_eq!(harness.app().active_table().unwrap().name, "users");
}

#[test]
fn test_tabs_show_structure_and_indices() {
    let mut harness = AppTestHarness::new(100, 24).unwrap();
    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().focus(), Focus::Main);

    harness.press('s').unwrap();
    assert_eq!(harness.app().tab(), MainTab::Structure);
    harness.assert_screen_contains("users Structure");
    harness.assert_screen_contains("varchar(100)");
    harness.assert_screen_contains("NOT NULL");

    harness.press('i').unwrap();
    assert_eq!(harness.app().tab(), MainTab::Indices);
    harness.assert_screen_contains("users Indices");
    harness.assert_screen_contains("PRIMARY");
    harness.assert_screen_contains("idx_username");

    harness.press('d').unwrap();
    harness.assert_screen_contains("johndoe");
}

#[test]
fn test_data_paging_through_long_table() {
    let mut harness = AppTestHarness::with_workspace(events_table(100), 80, 24).unwrap();
    harness.press('2').unwrap();
    // 20 content lines: header, 18 rows, footer
    assert_eq!(harness.app().data_viewport().visible_count(), 18);
    harness.assert_screen_contains("Rows 1-18 of 100  ↓ More");

    harness
        .send_key(KeyCode::PageDown, KeyModifiers::NONE)
        .unwrap();
    assert_eq!(harness.app().data_viewport().offset(), 18);
    assert_eq!(harness.app().cursor().row, 18);
    harness.assert_screen_contains("Rows 19-36 of 100  ↑ Prev  ↓ More");

    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().cursor().row, 99);
    assert_eq!(harness.app().data_viewport().offset(), 82);
    harness.assert_screen_contains("Rows 83-100 of 100  ↑ Prev");
    harness.assert_screen_contains("event-100");

    harness.send_key(KeyCode::PageUp, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().data_viewport().offset(), 64);
    assert_eq!(harness.app().cursor().row, 81);
}

#[test]
fn test_cursor_moves_with_vim_keys() {
    let mut harness = AppTestHarness::with_workspace(events_table(5), 80, 24).unwrap();
    harness.press('2').unwrap();
    harness.type_text("jjl").unwrap();
    assert_eq!(harness.app().cursor().row, 2);
    assert_eq!(harness.app().cursor().col, 1);
    harness.type_text("kh").unwrap();
    assert_eq!(harness.app().cursor().row, 1);
    assert_eq!(harness.app().cursor().col, 0);
}

#[test]
fn test_structure_scrolls_one_line_at_a_time() {
    let columns: Vec<ColumnMetadata> = (0..40)
        .map(|i| ColumnMetadata::new(format!("col_{i:02}"), "int", true, ""))
        .collect();
    let table = TableSession::new(
        "wide",
        columns,
        vec![RowRecord::new()],
        BTreeSet::new(),
    );
    let mut harness =
        AppTestHarness::with_workspace(Workspace::new(vec![table]), 80, 24).unwrap();
    harness.type_text("2s").unwrap();
    harness.assert_screen_contains("col_00");
    harness.assert_screen_contains("↓ more");

    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().structure_viewport().offset(), 1);
    harness.assert_screen_contains("↑ more");
    harness.assert_screen_not_contains("col_00");

    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    harness.assert_screen_contains("col_39");
    harness.assert_screen_not_contains("↓ more");
}

#[test]
fn test_switching_table_resets_main_scroll_only() {
    let mut workspace = events_table(60);
    workspace.tables.extend(numbered_tables(1).tables);
    let mut harness = AppTestHarness::with_workspace(workspace, 80, 24).unwrap();

    harness.press('2').unwrap();
    harness
        .send_key(KeyCode::PageDown, KeyModifiers::NONE)
        .unwrap();
    assert!(harness.app().data_viewport().offset() > 0);

    harness.press('1').unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().data_viewport().offset(), 0);
    assert_eq!(harness.app().cursor().row, 0);
    assert_eq!(harness.app().selected_table(), 1);
}

#[test]
fn test_resize_keeps_selection_visible() {
    let mut harness = fifty_tables();
    harness
        .send_key_repeat(KeyCode::Down, KeyModifiers::NONE, 30)
        .unwrap();
    harness.resize(80, 10).unwrap();
    let range = harness.app().sidebar_viewport().visible_range();
    assert!(range.contains(&30), "selection outside {range:?}");

    harness.resize(80, 40).unwrap();
    let vp = harness.app().sidebar_viewport();
    assert!(vp.offset() <= vp.max_offset());
    assert!(vp.visible_range().contains(&30));
}

#[test]
fn test_smallest_terminal_keeps_selection_on_screen() {
    let mut harness = AppTestHarness::new(40, 8).unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();

    let vp = harness.app().sidebar_viewport();
    assert_eq!(vp.visible_count(), 1);
    assert!(vp.visible_range().contains(&1));
    harness.assert_screen_contains("> orders");

    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    assert!(harness.app().sidebar_viewport().visible_range().contains(&3));
    harness.assert_screen_contains("> categories");
}

#[test]
fn test_smallest_terminal_data_grid_with_help() {
    let mut harness = AppTestHarness::new(40, 8).unwrap();
    harness.type_text("2?").unwrap();
    assert!(harness.app().show_help());

    let vp = harness.app().data_viewport();
    assert!(vp.visible_count() >= 1);
    assert!(vp.visible_range().contains(&harness.app().cursor().row));
    harness.assert_screen_contains("Rows 1-2 of 5");

    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().cursor().row, 4);
    assert!(harness.app().data_viewport().visible_range().contains(&4));
    harness.assert_screen_contains("Rows 4-5 of 5");
}
