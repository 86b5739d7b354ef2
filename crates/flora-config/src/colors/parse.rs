//! Low-level hex and `rgba()` parsing behind [`parse_color`](super::parse_color).

use flora_common::types::Color;
use regex::Regex;
use std::sync::LazyLock;

/// `#RGB`, `#RRGGBB`, or `#RRGGBBAA`.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// `rgb(r,g,b,a)` / `rgba(r,g,b,a)` with an integer or float alpha.
pub(crate) static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*([0-9]*\.?[0-9]+)\s*\)$",
    )
    .unwrap()
});

pub(super) fn parse_hex(s: &str) -> Option<Color> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    let hex = &s[1..];
    if hex.len() == 3 {
        // Each nibble doubles: #f0a -> #ff00aa
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        return Some(Color::from_rgba(nibble(0)?, nibble(1)?, nibble(2)?, 255));
    }
    Color::from_hex(s)
}

/// Float alpha is CSS-style 0.0-1.0; integer alpha is 0-255.
pub(super) fn parse_rgba(s: &str) -> Option<Color> {
    let caps = RGBA_RE.captures(s)?;
    let channel = |i: usize| caps[i].parse::<u8>().ok();
    let alpha = &caps[4];

    let a = if alpha.contains('.') {
        let a: f64 = alpha.parse().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        (a * 255.0).round() as u8
    } else {
        alpha.parse::<u8>().ok()?
    };

    Some(Color::from_rgba(channel(1)?, channel(2)?, channel(3)?, a))
}
