//! Tests for color parsing and validation.

use super::*;

#[test]
fn parse_hex_6_digit() {
    let c = parse_color("#808080").unwrap();
    assert_eq!(c, Color::GRAY);
}

#[test]
fn parse_hex_8_digit_clear() {
    let c = parse_color("#00000000").unwrap();
    assert_eq!(c, Color::CLEAR);
}

#[test]
fn parse_hex_3_digit() {
    let c = parse_color("#f00").unwrap();
    assert_eq!(c, Color::from_rgba(255, 0, 0, 255));
}

#[test]
fn parse_rgba_float_alpha() {
    let c = parse_color("rgba(0,0,0,0.25)").unwrap();
    // 0.25 * 255 = 63.75 -> 64
    assert_eq!(c, Color::from_rgba(0, 0, 0, 64));
}

#[test]
fn parse_rgba_integer_alpha() {
    let c = parse_color("rgba(10,20,30,255)").unwrap();
    assert_eq!(c, Color::from_rgba(10, 20, 30, 255));
}

#[test]
fn parse_rgba_with_spaces() {
    let c = parse_color("rgba( 100 , 180 , 255 , 0.5 )").unwrap();
    assert_eq!(c, Color::from_rgba(100, 180, 255, 128));
}

#[test]
fn parse_trims_surrounding_whitespace() {
    assert_eq!(parse_color("  #808080 ").unwrap(), Color::GRAY);
}

#[test]
fn parse_color_invalid_format() {
    assert!(parse_color("not-a-color").is_err());
    assert!(parse_color("").is_err());
    assert!(parse_color("#xyz").is_err());
    assert!(parse_color("rgba(300,0,0,1.0)").is_err());
}

#[test]
fn validate_color_accepts_valid() {
    assert!(validate_color("#808080"));
    assert!(validate_color("#00000000"));
    assert!(validate_color("#f00"));
    assert!(validate_color("rgba(0,0,0,0.25)"));
}

#[test]
fn validate_color_rejects_invalid() {
    assert!(!validate_color(""));
    assert!(!validate_color("chartreuse"));
    assert!(!validate_color("#12345"));
    assert!(!validate_color("rgb(10,20)"));
}

#[test]
fn parse_rgb_without_alpha_is_opaque() {
    let c = parse_color("rgb(1, 2, 3)").unwrap();
    assert_eq!(c, Color::from_rgba(1, 2, 3, 255));
}

#[test]
fn parse_keywords() {
    assert_eq!(parse_color("clear").unwrap(), Color::CLEAR);
    assert_eq!(parse_color("Gray").unwrap(), Color::GRAY);
    assert_eq!(parse_color("grey").unwrap(), Color::GRAY);
}

#[test]
fn parse_error_names_input() {
    let err = parse_color("mauve").unwrap_err();
    assert!(err.to_string().contains("\"mauve\""));
}

#[test]
fn parse_all_default_colors() {
    let defaults = crate::schema::AppearanceConfig::default();
    for c in [&defaults.separator_color, &defaults.border_color] {
        assert!(parse_color(c).is_ok(), "failed to parse default color: {c}");
    }
}
