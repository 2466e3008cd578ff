//! Appearance validation (separator and border).

use crate::schema::ScrollStackConfig;

use super::helpers::{validate_color_field, validate_range_f64};

pub(crate) fn validate_appearance(errors: &mut Vec<String>, config: &ScrollStackConfig) {
    let appearance = &config.appearance;
    validate_color_field(
        errors,
        "appearance.separator_color",
        &appearance.separator_color,
    );
    validate_range_f64(
        errors,
        "appearance.separator_thickness",
        appearance.separator_thickness,
        0.0,
        20.0,
    );
    validate_color_field(errors, "appearance.border_color", &appearance.border_color);
    validate_range_f64(
        errors,
        "appearance.border_width",
        appearance.border_width,
        0.0,
        10.0,
    );
}
