//! Stack appearance configuration types.

use scrollstack_common::Axis;
use serde::{Deserialize, Serialize};

/// How the stack and its surrounding frame are drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Stacking direction.
    pub axis: Axis,
    /// Color shown through the gaps between panels.
    pub separator_color: String,
    /// Gap between panels in points (valid range: 0.0-20.0).
    pub separator_thickness: f64,
    /// Color of the frame around the stack.
    pub border_color: String,
    /// Frame width in points; the stack is inset by this on every edge
    /// (valid range: 0.0-10.0).
    pub border_width: f64,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            separator_color: "#00000000".into(),
            separator_thickness: 0.0,
            border_color: "#808080".into(),
            border_width: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appearance_config_partial_toml() {
        let toml_str = r##"
separator_color = "#ff0000"
border_width = 2.0
"##;
        let config: AppearanceConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.separator_color, "#ff0000");
        assert!((config.border_width - 2.0).abs() < f64::EPSILON);
        // Defaults preserved
        assert_eq!(config.axis, Axis::Vertical);
        assert_eq!(config.border_color, "#808080");
        assert_eq!(config.separator_thickness, 0.0);
    }
}
