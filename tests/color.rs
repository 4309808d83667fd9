use filterdesk::utils::color::parse_color;
use ratatui::style::Color;

#[test]
fn test_parse_named_colors() {
    assert_eq!(parse_color("red"), Some(Color::Red));
    assert_eq!(parse_color("Dark_Gray"), Some(Color::DarkGray));
    assert_eq!(parse_color("grey"), Some(Color::Gray));
}

#[test]
fn test_parse_hex_colors() {
    assert_eq!(parse_color("#ff8800"), Some(Color::Rgb(255, 136, 0)));
    assert_eq!(parse_color("#ff88"), None);
    assert_eq!(parse_color("#gg0000"), None);
}

#[test]
fn test_unknown_color() {
    assert_eq!(parse_color("sparkly"), None);
}
