use crate::common::harness::AppTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use tabletop::config::Config;
use tabletop::provider::{open_configured, LoadedWorkspace};
use tempfile::TempDir;

const INVENTORY: &str = r#"{
    "tables": [
        {
            "name": "items",
            "columns": [
                {"name": "sku", "type": "varchar(12)", "nullable": false, "key": "PRI"},
                {"name": "qty", "type": "int", "nullable": true},
                {"name": "price", "type": "decimal(8,2)"},
                {"name": "tags", "type": "json", "nullable": true}
            ],
            "indices": ["idx_qty", "PRIMARY"],
            "rows": [
                {"sku": "A-100", "qty": 4, "price": 2.5, "tags": ["new", "sale"]},
                {"sku": "B-200", "qty": null, "price": 10, "tags": null},
                {"sku": "C-300", "qty": 9, "price": 0.75}
            ]
        },
        {
            "name": "suppliers",
            "columns": [{"name": "id", "type": "int", "key": "PRI"}],
            "rows": []
        }
    ]
}"#;

fn load(contents: &str, row_limit: usize) -> (TempDir, LoadedWorkspace) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(&path, contents).unwrap();
    let config = Config {
        data_file: Some(path),
        row_limit,
        ..Config::default()
    };
    let loaded = open_configured(&config);
    (dir, loaded)
}

#[test]
fn test_json_dataset_is_browsable() {
    let (_dir, loaded) = load(INVENTORY, 100);
    assert_eq!(loaded.source_label, "inventory.json");
    assert!(loaded.notice.is_none());

    let mut harness = AppTestHarness::with_workspace(loaded.workspace, 100, 24).unwrap();
    harness.assert_screen_contains("items");
    harness.assert_screen_contains("suppliers");
    harness.assert_screen_contains("A-100");
    harness.assert_screen_contains("NULL");
    harness.assert_screen_contains("[\"new\",\"sale\"]");

    harness.type_text("2i").unwrap();
    let screen = harness.screen_to_string();
    let primary = screen.find("PRIMARY").unwrap();
    let secondary = screen.find("idx_qty").unwrap();
    assert!(primary < secondary, "PRIMARY should be listed first");
}

#[test]
fn test_row_limit_applies_to_data_file() {
    let (_dir, loaded) = load(INVENTORY, 2);
    let items = &loaded.workspace.tables[0];
    assert_eq!(items.row_count(), 2);

    let mut harness = AppTestHarness::with_workspace(loaded.workspace, 100, 24).unwrap();
    harness.press('2').unwrap();
    harness.assert_screen_contains("Rows 1-2 of 2");
    harness.assert_screen_not_contains("C-300");
}

#[test]
fn test_table_without_rows_shows_placeholder() {
    let (_dir, loaded) = load(INVENTORY, 100);
    let mut harness = AppTestHarness::with_workspace(loaded.workspace, 100, 24).unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.assert_screen_contains("No data available for table: suppliers");
}

#[test]
fn test_broken_data_file_falls_back_to_sample() {
    let (_dir, loaded) = load(r#"{"tables": [{"name": "a"}, {"name": "a"}]}"#, 100);
    let notice = loaded.notice.unwrap();
    assert!(notice.contains("duplicate table"), "notice: {notice}");

    let names: Vec<&str> = loaded
        .workspace
        .tables
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, vec!["users", "orders", "products", "categories"]);
}

#[test]
fn test_fallback_notice_reaches_status_bar() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        data_file: Some(dir.path().join("missing.json")),
        ..Config::default()
    };
    let loaded = open_configured(&config);
    assert!(loaded.notice.is_some());

    let app = tabletop::app::App::new(loaded.workspace, config, loaded.source_label, 200, 24)
        .with_status_message(loaded.notice);
    let screen = app.render_to_string();
    assert!(screen.contains("missing.json"));
    assert!(screen.contains("showing sample data"));
}
