//! Color strings accepted in the config file.
//!
//! Hex (`#RGB`, `#RRGGBB`, `#RRGGBBAA`), `rgb(r, g, b)` / `rgba(r, g, b, a)`
//! where alpha is either a 0.0-1.0 fraction or a 0-255 integer, and the
//! keywords `clear` and `gray`.

mod parse;

#[cfg(test)]
mod tests;

use scrollstack_common::{Color, ConfigError};

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();
    parse::keyword(s)
        .or_else(|| parse::hex(s))
        .or_else(|| parse::functional(s))
        .ok_or_else(|| {
            ConfigError::ParseError(format!(
                "unrecognized color {s:?} (expected #RRGGBB[AA], rgba(r, g, b, a), clear or gray)"
            ))
        })
}

/// Whether `s` parses as a color.
pub fn validate_color(s: &str) -> bool {
    parse_color(s).is_ok()
}
