//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# scrollstack configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[appearance]
# axis = "vertical"            # vertical, horizontal
# separator_color = "#00000000" # #RGB, #RRGGBB[AA], rgba(r, g, b, a), clear, gray
# separator_thickness = 0.0    # 0.0-20.0
# border_color = "#808080"
# border_width = 0.5           # 0.0-10.0

[animation]
# animate_scroll = true

[animation.visibility]
# duration = 0.5               # 0.0-5.0 seconds
# delay = 0.0
# damping = 1.0                # 0.0-1.0
# initial_velocity = 0.0

[animation.scroll]
# duration = 0.75
# delay = 0.0
# damping = 0.7
# initial_velocity = 0.25

[logging]
# level = "info"               # trace, debug, info, warn, error
"##
    .to_string()
}
