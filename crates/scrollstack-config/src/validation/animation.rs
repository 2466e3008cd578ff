//! Animation curve validation.

use crate::schema::{ScrollStackConfig, SpringCurve};

use super::helpers::validate_range_f64;

pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &ScrollStackConfig) {
    validate_curve(errors, "animation.visibility", config.animation.visibility.curve());
    validate_curve(errors, "animation.scroll", config.animation.scroll.curve());
}

fn validate_curve(errors: &mut Vec<String>, prefix: &str, curve: SpringCurve) {
    validate_range_f64(errors, &format!("{prefix}.duration"), curve.duration, 0.0, 5.0);
    validate_range_f64(errors, &format!("{prefix}.delay"), curve.delay, 0.0, 5.0);
    validate_range_f64(errors, &format!("{prefix}.damping"), curve.damping, 0.0, 1.0);
    validate_range_f64(
        errors,
        &format!("{prefix}.initial_velocity"),
        curve.initial_velocity,
        0.0,
        10.0,
    );
}
