use chrono::NaiveDate;
use filterdesk::utils::date::*;

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
    assert_eq!(format_ymd(date), "2023-12-25");
    assert_eq!(format_with(date, "%d/%m/%Y"), "25/12/2023");
}

#[test]
fn test_parse_date_input() {
    let expected = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
    assert_eq!(parse_date_input("2023-01-31", DEFAULT_DATE_FORMAT), Ok(expected));
    assert_eq!(parse_date_input("  2023-01-31 ", DEFAULT_DATE_FORMAT), Ok(expected));
    assert_eq!(parse_date_input("31/01/2023", "%d/%m/%Y"), Ok(expected));
}

#[test]
fn test_parse_date_input_errors() {
    assert_eq!(parse_date_input("   ", DEFAULT_DATE_FORMAT), Err(DateInputError::Empty));
    assert_eq!(
        parse_date_input("2023-02-30", DEFAULT_DATE_FORMAT),
        Err(DateInputError::Malformed {
            input: "2023-02-30".to_string(),
            format: DEFAULT_DATE_FORMAT.to_string(),
        })
    );
    assert!(parse_date_input("2023-01", DEFAULT_DATE_FORMAT).is_err());
}

#[test]
fn test_is_valid_date_format() {
    assert!(is_valid_date_format("%Y-%m-%d"));
    assert!(is_valid_date_format("%d.%m.%Y"));
    assert!(!is_valid_date_format("%Y-%m"));
    assert!(!is_valid_date_format("%H:%M"));
}
