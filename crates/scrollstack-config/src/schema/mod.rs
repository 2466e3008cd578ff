//! Configuration schema types for scrollstack.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the stack's stock look: a vertical stack,
//! clear separators and a thin gray border.

mod animation;
mod appearance;
mod system;

pub use animation::*;
pub use appearance::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for a scrolling stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ScrollStackConfig {
    pub appearance: AppearanceConfig,
    pub animation: AnimationConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use scrollstack_common::Axis;

    #[test]
    fn default_config_has_stock_appearance() {
        let config = ScrollStackConfig::default();
        assert_eq!(config.appearance.axis, Axis::Vertical);
        assert_eq!(config.appearance.separator_color, "#00000000");
        assert_eq!(config.appearance.separator_thickness, 0.0);
        assert_eq!(config.appearance.border_color, "#808080");
        assert!((config.appearance.border_width - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_has_spring_curves() {
        let config = ScrollStackConfig::default();
        assert!((config.animation.visibility.duration - 0.5).abs() < f64::EPSILON);
        assert!((config.animation.visibility.damping - 1.0).abs() < f64::EPSILON);
        assert!((config.animation.scroll.duration - 0.75).abs() < f64::EPSILON);
        assert!((config.animation.scroll.damping - 0.7).abs() < f64::EPSILON);
        assert!((config.animation.scroll.initial_velocity - 0.25).abs() < f64::EPSILON);
        assert!(config.animation.animate_scroll);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config: ScrollStackConfig = toml::from_str("").unwrap();
        assert_eq!(config.appearance.border_color, "#808080");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let toml_str = r#"
[appearance]
axis = "horizontal"
separator_thickness = 1.0

[animation.scroll]
duration = 0.3
"#;
        let config: ScrollStackConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.appearance.axis, Axis::Horizontal);
        assert_eq!(config.appearance.separator_thickness, 1.0);
        assert_eq!(config.appearance.border_color, "#808080");
        assert!((config.animation.scroll.duration - 0.3).abs() < f64::EPSILON);
        assert!((config.animation.scroll.damping - 0.7).abs() < f64::EPSILON);
        assert!((config.animation.visibility.duration - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn serialization_roundtrip() {
        let config = ScrollStackConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: ScrollStackConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.appearance.separator_color, config.appearance.separator_color);
        assert_eq!(parsed.animation.animate_scroll, config.animation.animate_scroll);
    }
}
