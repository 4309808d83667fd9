use chrono::NaiveDate;
use filterdesk::filter::{CallbackHost, DateRange, FilterCoordinator, FilterHost, FilterQuery};
use std::cell::RefCell;

#[derive(Debug, Default)]
struct RecordingHost {
    searches: Vec<FilterQuery>,
    resets: usize,
}

impl FilterHost for RecordingHost {
    fn on_search(&mut self, query: &FilterQuery) {
        self.searches.push(query.clone());
    }

    fn on_reset(&mut self) {
        self.resets += 1;
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn coordinator() -> FilterCoordinator<RecordingHost> {
    FilterCoordinator::new(RecordingHost::default())
}

#[test]
fn test_blank_terms_emit_nothing() {
    for blank in ["", " ", "   ", "\t", "\n", " \t \r\n "] {
        let mut coordinator = coordinator();
        coordinator.set_seller_term(blank);
        assert_eq!(coordinator.submit_term_search(), None, "blank term {:?} should not emit", blank);
        assert!(coordinator.host().searches.is_empty());
        assert_eq!(coordinator.host().resets, 0);
    }
}

#[test]
fn test_term_is_trimmed_on_submit() {
    for (raw, expected) in [("Acme", "Acme"), ("  Acme Corp  ", "Acme Corp"), ("\tBolt & Nut\n", "Bolt & Nut")] {
        let mut coordinator = coordinator();
        coordinator.set_seller_term(raw);
        let query = coordinator.submit_term_search();
        let expected_query = FilterQuery::ByTerm {
            term: expected.to_string(),
        };
        assert_eq!(query.as_ref(), Some(&expected_query));
        assert_eq!(coordinator.host().searches, vec![expected_query]);
    }
}

#[test]
fn test_term_is_stored_verbatim() {
    let mut coordinator = coordinator();
    coordinator.set_seller_term("  padded  ");
    assert_eq!(coordinator.input().seller_term, "  padded  ");

    coordinator.submit_term_search();
    assert_eq!(coordinator.input().seller_term, "  padded  ", "submission must not mutate input");
}

#[test]
fn test_incomplete_range_emits_nothing() {
    let cases = [
        (None, None),
        (Some(date(2023, 1, 1)), None),
        (None, Some(date(2023, 1, 31))),
    ];
    for (start, end) in cases {
        let mut coordinator = coordinator();
        coordinator.set_start_date(start);
        coordinator.set_end_date(end);
        assert_eq!(coordinator.submit_date_range_search(), None);
        assert!(coordinator.host().searches.is_empty());
    }
}

#[test]
fn test_reversed_range_passes_through() {
    let mut coordinator = coordinator();
    coordinator.set_start_date(Some(date(2023, 3, 1)));
    coordinator.set_end_date(Some(date(2023, 1, 1)));

    let query = coordinator.submit_date_range_search().unwrap();
    assert_eq!(
        query,
        FilterQuery::ByDateRange {
            range: DateRange::new(date(2023, 3, 1), date(2023, 1, 1)),
        }
    );
    assert_eq!(coordinator.host().searches.len(), 1);
}

#[test]
fn test_dates_can_be_set_and_cleared_in_any_order() {
    let mut coordinator = coordinator();
    coordinator.set_end_date(Some(date(2023, 1, 31)));
    coordinator.set_start_date(Some(date(2023, 1, 1)));
    coordinator.set_end_date(None);
    assert_eq!(coordinator.submit_date_range_search(), None);

    coordinator.set_end_date(Some(date(2023, 2, 28)));
    let query = coordinator.submit_date_range_search().unwrap();
    assert_eq!(query.range(), Some(DateRange::new(date(2023, 1, 1), date(2023, 2, 28))));
}

#[test]
fn test_reset_fires_once_and_clears_input() {
    let mut coordinator = coordinator();
    coordinator.set_seller_term("Acme");
    coordinator.set_start_date(Some(date(2023, 1, 1)));
    coordinator.set_end_date(Some(date(2023, 1, 31)));

    coordinator.reset();
    assert_eq!(coordinator.host().resets, 1);
    assert!(coordinator.host().searches.is_empty(), "reset must not emit a query");
    assert!(coordinator.input().is_empty());

    assert_eq!(coordinator.submit_term_search(), None);
    assert_eq!(coordinator.submit_date_range_search(), None);
    assert!(coordinator.host().searches.is_empty());
}

#[test]
fn test_reset_on_empty_input_still_signals() {
    let mut coordinator = coordinator();
    coordinator.reset();
    coordinator.reset();
    assert_eq!(coordinator.host().resets, 2);
}

#[test]
fn test_identical_submissions_are_not_deduplicated() {
    let mut coordinator = coordinator();
    coordinator.set_seller_term("Acme");
    coordinator.submit_term_search();
    coordinator.submit_term_search();
    assert_eq!(coordinator.host().searches.len(), 2);
    assert_eq!(coordinator.host().searches[0], coordinator.host().searches[1]);
}

#[test]
fn test_term_then_reset_scenario() {
    let mut coordinator = coordinator();
    coordinator.set_seller_term("  Acme Corp  ");
    assert_eq!(
        coordinator.submit_term_search(),
        Some(FilterQuery::ByTerm {
            term: "Acme Corp".to_string()
        })
    );

    coordinator.reset();
    assert_eq!(coordinator.host().resets, 1);
    assert_eq!(coordinator.input().seller_term, "");

    assert_eq!(coordinator.submit_term_search(), None);
    assert_eq!(coordinator.host().searches.len(), 1);
}

#[test]
fn test_partial_then_full_range_scenario() {
    let mut coordinator = coordinator();
    coordinator.set_start_date(Some(date(2023, 1, 1)));
    assert_eq!(coordinator.submit_date_range_search(), None);

    coordinator.set_end_date(Some(date(2023, 1, 31)));
    assert_eq!(
        coordinator.submit_date_range_search(),
        Some(FilterQuery::ByDateRange {
            range: DateRange::new(date(2023, 1, 1), date(2023, 1, 31)),
        })
    );
    assert_eq!(coordinator.host().searches.len(), 1);
}

#[test]
fn test_callback_host_invokes_closures() {
    let searches = RefCell::new(Vec::new());
    let resets = RefCell::new(0);

    let host = CallbackHost::new(
        |query: &FilterQuery| searches.borrow_mut().push(query.clone()),
        || *resets.borrow_mut() += 1,
    );
    let mut coordinator = FilterCoordinator::new(host);
    coordinator.set_seller_term("Globex");
    coordinator.submit_term_search();
    coordinator.reset();
    drop(coordinator);

    assert_eq!(
        searches.into_inner(),
        vec![FilterQuery::ByTerm {
            term: "Globex".to_string()
        }]
    );
    assert_eq!(resets.into_inner(), 1);
}

#[test]
fn test_borrowed_host_and_independent_instances() {
    let mut shared = RecordingHost::default();
    {
        let mut purchases = FilterCoordinator::new(&mut shared);
        purchases.set_seller_term("Acme");
        purchases.submit_term_search();
    }

    let mut returns = coordinator();
    returns.set_seller_term("Initech");
    assert_eq!(returns.input().seller_term, "Initech");
    returns.reset();

    assert_eq!(shared.searches.len(), 1);
    assert_eq!(shared.resets, 0);
    assert_eq!(returns.into_host().resets, 1);
}
