//! Tests for color parsing and validation.

use super::*;

#[test]
fn parse_hex_6_digit() {
    let c = parse_color("#ed5a34").unwrap();
    assert_eq!(c, Color::from_rgba(0xed, 0x5a, 0x34, 255));
}

#[test]
fn parse_hex_8_digit() {
    let c = parse_color("#f93a7e80").unwrap();
    assert_eq!(c, Color::from_rgba(0xf9, 0x3a, 0x7e, 128));
}

#[test]
fn parse_hex_3_digit() {
    let c = parse_color("#f0a").unwrap();
    assert_eq!(c, Color::from_rgba(255, 0, 170, 255));
}

#[test]
fn parse_rgba_float_alpha() {
    let c = parse_color("rgba(247,101,131,0.5)").unwrap();
    assert_eq!((c.r, c.g, c.b), (247, 101, 131));
    // 0.5 * 255 = 127.5 -> 128
    assert_eq!(c.a, 128);
}

#[test]
fn parse_rgba_integer_alpha() {
    let c = parse_color("rgba(1,2,3,200)").unwrap();
    assert_eq!(c.a, 200);
}

#[test]
fn parse_rgba_with_spaces() {
    let c = parse_color("rgba( 253 , 200 , 221 , 1.0 )").unwrap();
    assert_eq!(c, Color::from_rgba(253, 200, 221, 255));
}

#[test]
fn parse_color_invalid_format() {
    assert!(parse_color("not-a-color").is_err());
    assert!(parse_color("").is_err());
    assert!(parse_color("#xyz").is_err());
    assert!(parse_color("rgba(300,0,0,1.0)").is_err());
    assert!(parse_color("rgba(0,0,0,1.5)").is_err());
}

#[test]
fn validate_color_accepts_valid() {
    assert!(validate_color("#ed5a34"));
    assert!(validate_color("#ed5a3480"));
    assert!(validate_color("#f0a"));
    assert!(validate_color("rgba(0,212,255,0.12)"));
}

#[test]
fn validate_color_rejects_invalid() {
    assert!(!validate_color(""));
    assert!(!validate_color("pink"));
    assert!(!validate_color("#12345"));
    assert!(!validate_color("rgb(10,20)"));
}

#[test]
fn default_palette_parses() {
    for c in crate::schema::DEFAULT_PALETTE {
        assert!(parse_color(c).is_ok(), "failed to parse palette color: {c}");
    }
}

#[test]
fn parse_linear_rgb_black_and_white() {
    let black = parse_linear_rgb("#000000").unwrap();
    assert_eq!(black, [0.0, 0.0, 0.0]);
    let white = parse_linear_rgb("#ffffff").unwrap();
    for c in white {
        assert!((c - 1.0).abs() < 1e-6);
    }
}

#[test]
fn parse_linear_rgb_darkens_midtones() {
    let [r, _, _] = parse_linear_rgb("#808080").unwrap();
    assert!(r < 0.5 && r > 0.2);
}
