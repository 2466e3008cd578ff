//! Shared validation helpers used by all section validators.

use crate::colors::validate_color;

/// Push an error if `value` is outside `[min, max]`. NaN is always out of range.
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a recognized color string.
pub(crate) fn validate_color_field(errors: &mut Vec<String>, name: &str, value: &str) {
    if !validate_color(value) {
        errors.push(format!("{name} = {value:?} is not a valid color"));
    }
}
