//! Animation curve configuration types.

use serde::{Deserialize, Serialize};

/// A resolved spring animation curve handed to the host's animation engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringCurve {
    pub duration: f64,
    pub delay: f64,
    pub damping: f64,
    pub initial_velocity: f64,
}

// Each curve gets its own type so a partial table (e.g. only `damping`)
// falls back to that curve's defaults rather than a shared one.
macro_rules! curve_config {
    ($(#[$meta:meta])* $name:ident, duration = $duration:expr, damping = $damping:expr, velocity = $velocity:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            /// Seconds (valid range: 0.0-5.0).
            pub duration: f64,
            /// Seconds before the animation starts (valid range: 0.0-5.0).
            pub delay: f64,
            /// Damping ratio; 1.0 settles without oscillation (valid range: 0.0-1.0).
            pub damping: f64,
            /// Initial spring velocity (valid range: 0.0-10.0).
            pub initial_velocity: f64,
        }

        impl $name {
            pub fn curve(&self) -> SpringCurve {
                SpringCurve {
                    duration: self.duration,
                    delay: self.delay,
                    damping: self.damping,
                    initial_velocity: self.initial_velocity,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    duration: $duration,
                    delay: 0.0,
                    damping: $damping,
                    initial_velocity: $velocity,
                }
            }
        }
    };
}

curve_config!(
    /// Curve used for fading panels in and out.
    FadeCurveConfig,
    duration = 0.5,
    damping = 1.0,
    velocity = 0.0
);

curve_config!(
    /// Curve used when moving the content offset.
    ScrollCurveConfig,
    duration = 0.75,
    damping = 0.7,
    velocity = 0.25
);

/// Animation settings for show/hide/remove and scroll-to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub visibility: FadeCurveConfig,
    pub scroll: ScrollCurveConfig,
    /// Whether scroll-to animates at all.
    pub animate_scroll: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            visibility: FadeCurveConfig::default(),
            scroll: ScrollCurveConfig::default(),
            animate_scroll: true,
        }
    }
}
