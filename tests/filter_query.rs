use chrono::NaiveDate;
use filterdesk::filter::{apply, DateRange, FilterQuery, Filterable, QueryKind};

struct Item {
    seller: &'static str,
    date: NaiveDate,
}

impl Filterable for Item {
    fn seller(&self) -> &str {
        self.seller
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn items() -> Vec<Item> {
    vec![
        Item {
            seller: "Acme Corp",
            date: date(2023, 1, 1),
        },
        Item {
            seller: "Globex",
            date: date(2023, 1, 15),
        },
        Item {
            seller: "ACME Outlet",
            date: date(2023, 1, 31),
        },
        Item {
            seller: "Initech",
            date: date(2023, 2, 1),
        },
    ]
}

#[test]
fn test_kind_and_accessors() {
    let term = FilterQuery::ByTerm {
        term: "Acme".to_string(),
    };
    assert_eq!(term.kind(), QueryKind::ByTerm);
    assert_eq!(term.term(), Some("Acme"));
    assert_eq!(term.range(), None);

    let range = DateRange::new(date(2023, 1, 1), date(2023, 1, 31));
    let by_date = FilterQuery::ByDateRange { range };
    assert_eq!(by_date.kind(), QueryKind::ByDateRange);
    assert_eq!(by_date.term(), None);
    assert_eq!(by_date.range(), Some(range));
}

#[test]
fn test_term_match_is_case_insensitive_substring() {
    let query = FilterQuery::ByTerm {
        term: "acme".to_string(),
    };
    let sellers: Vec<&str> = apply(&items(), Some(&query)).iter().map(|i| i.seller).collect();
    assert_eq!(sellers, vec!["Acme Corp", "ACME Outlet"]);
}

#[test]
fn test_range_match_is_inclusive() {
    let query = FilterQuery::ByDateRange {
        range: DateRange::new(date(2023, 1, 1), date(2023, 1, 31)),
    };
    let sellers: Vec<&str> = apply(&items(), Some(&query)).iter().map(|i| i.seller).collect();
    assert_eq!(sellers, vec!["Acme Corp", "Globex", "ACME Outlet"]);
}

#[test]
fn test_reversed_range_matches_nothing() {
    let range = DateRange::new(date(2023, 1, 31), date(2023, 1, 1));
    assert!(range.is_reversed());
    let query = FilterQuery::ByDateRange { range };
    assert!(apply(&items(), Some(&query)).is_empty());
}

#[test]
fn test_no_query_keeps_everything() {
    assert_eq!(apply(&items(), None).len(), 4);
}

#[test]
fn test_display() {
    let term = FilterQuery::ByTerm {
        term: "Acme".to_string(),
    };
    assert_eq!(term.to_string(), "seller contains \"Acme\"");

    let by_date = FilterQuery::ByDateRange {
        range: DateRange::new(date(2023, 1, 1), date(2023, 1, 31)),
    };
    assert_eq!(by_date.to_string(), "date in 2023-01-01 .. 2023-01-31");
}

#[test]
fn test_query_serializes_with_kind_tag() {
    let by_date = FilterQuery::ByDateRange {
        range: DateRange::new(date(2023, 1, 1), date(2023, 1, 31)),
    };
    let json = serde_json::to_value(&by_date).unwrap();
    assert_eq!(json["kind"], "by_date_range");
    assert_eq!(json["range"]["start"], "2023-01-01");
    assert_eq!(json["range"]["end"], "2023-01-31");

    let term: FilterQuery = serde_json::from_str(r#"{"kind":"by_term","term":"Acme"}"#).unwrap();
    assert_eq!(term.term(), Some("Acme"));
}
