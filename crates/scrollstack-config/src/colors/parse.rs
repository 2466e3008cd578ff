//! The individual color syntaxes.

use std::sync::LazyLock;

use regex::Regex;
use scrollstack_common::Color;

static HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?P<digits>[[:xdigit:]]{3}|[[:xdigit:]]{6}|[[:xdigit:]]{8})$").unwrap()
});

static FUNCTIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(?P<r>\d{1,3})\s*,\s*(?P<g>\d{1,3})\s*,\s*(?P<b>\d{1,3})\s*(?:,\s*(?P<a>\d*\.?\d+)\s*)?\)$",
    )
    .unwrap()
});

pub(super) fn keyword(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "clear" | "transparent" => Some(Color::CLEAR),
        "gray" | "grey" => Some(Color::GRAY),
        _ => None,
    }
}

/// `#RGB` expands each digit, so `#f80` is `#ff8800`.
pub(super) fn hex(s: &str) -> Option<Color> {
    let digits = HEX.captures(s)?.name("digits")?.as_str();
    if digits.len() == 3 {
        let doubled: String = digits.chars().flat_map(|c| [c, c]).collect();
        Color::from_hex(&doubled)
    } else {
        Color::from_hex(digits)
    }
}

/// `rgb(...)`/`rgba(...)`. A missing alpha is opaque.
pub(super) fn functional(s: &str) -> Option<Color> {
    let caps = FUNCTIONAL.captures(s)?;
    let channel = |name: &str| caps.name(name)?.as_str().parse::<u8>().ok();
    let alpha = match caps.name("a") {
        Some(m) => alpha(m.as_str())?,
        None => u8::MAX,
    };
    Some(Color::from_rgba(channel("r")?, channel("g")?, channel("b")?, alpha))
}

fn alpha(s: &str) -> Option<u8> {
    if s.contains('.') {
        let fraction: f64 = s.parse().ok()?;
        (0.0..=1.0)
            .contains(&fraction)
            .then(|| (fraction * 255.0).round() as u8)
    } else {
        s.parse().ok()
    }
}
