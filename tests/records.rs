use chrono::NaiveDate;
use filterdesk::records::{format_amount, load_records, parse_records, records_for_panel, RecordKind};
use filterdesk::ui::core::Panel;
use std::fs;

const SAMPLE: &str = r#"[
    {"id": "p-1", "kind": "purchase", "seller": "Acme Corp", "date": "2023-01-05", "summary": "Anvil", "amount_cents": 129900},
    {"id": "r-1", "kind": "return", "seller": "Acme Corp", "date": "2023-01-20", "amount_cents": -129900},
    {"id": "m-1", "kind": "message", "seller": "Globex", "date": "2023-02-01", "summary": "Where is my order?"}
]"#;

#[test]
fn test_parse_records() {
    let records = parse_records(SAMPLE).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].kind, RecordKind::Purchase);
    assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2023, 1, 5).unwrap());
    assert_eq!(records[1].summary, "");
    assert_eq!(records[2].amount_cents, None);
}

#[test]
fn test_unknown_kind_is_rejected() {
    let json = r#"[{"id": "x", "kind": "promotion", "seller": "Acme", "date": "2023-01-01"}]"#;
    assert!(parse_records(json).is_err());
}

#[test]
fn test_records_for_panel() {
    let records = parse_records(SAMPLE).unwrap();
    let returns = records_for_panel(&records, Panel::Returns);
    assert_eq!(returns.len(), 1);
    assert_eq!(returns[0].id, "r-1");
    assert_eq!(RecordKind::Message.panel(), Panel::Messages);
}

#[test]
fn test_badges_are_distinct() {
    assert_ne!(RecordKind::Purchase.badge(), RecordKind::Return.badge());
    assert_ne!(RecordKind::Return.badge(), RecordKind::Message.badge());
}

#[test]
fn test_format_amount() {
    assert_eq!(format_amount(129900), "1299.00");
    assert_eq!(format_amount(5), "0.05");
    assert_eq!(format_amount(-1250), "-12.50");
}

#[test]
fn test_load_records_from_file() {
    let dir = std::env::temp_dir().join("filterdesk_test_records");
    let _ = fs::create_dir_all(&dir);
    let path = dir.join("records.json");
    fs::write(&path, SAMPLE).unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 3);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_load_records_missing_file() {
    let err = load_records("/nonexistent/filterdesk/records.json").unwrap_err();
    assert!(err.to_string().contains("Failed to read records file"));
}
