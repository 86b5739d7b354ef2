//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Flora Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Flora"
# width = 1280
# height = 800

[model]
# path = ""                      # .glb / .gltf; empty = built-in sphere
# decoder_path = "assets/draco/"
# fallback_latitudes = 100       # 2-1024
# fallback_longitudes = 100      # 3-1024

[camera]
# strategy = "autonomous"        # autonomous, orbit
# fov_deg = 35.0                 # 10-120
# near = 0.1
# far = 100.0
# radius = 8.0
# theta_range_deg = 30.0         # 0-90
# phi_min_deg = 0.0              # 0-180
# phi_max_deg = 60.0             # 0-180
# initial_phi_deg = 45.0
# smoothing = 0.1                # 0.0-1.0 per frame
# narrow_width = 800             # logical px
# narrow_position = [4.5, 7.0, 9.0]
# rest_position = [3.0, 4.0, 5.0]

[camera.orbit]
# damping = 0.05                 # 0.0-1.0
# rotate_speed = 1.0
# min_polar_deg = 20.0
# max_polar_deg = 80.0

[simulation]
# flow_field_influence = 0.3     # 0.0-1.0 (default from camera preset)
# flow_field_strength = 1.8      # 0.0-10.0 (default from camera preset)
# flow_field_frequency = 1.0     # 0.0-10.0 (default from camera preset)
# life_decay = 0.3
# time_scale = 0.5
# max_delta = 0.1
# seed = 42

[particles]
# size = 0.04                    # default from camera preset
# colors = ["#ed5a34", "#f93a7e", "#f76583", "#fdc8dd"]
# clear_color = "#000000"

[performance]
# max_pixel_ratio = 2.0          # 1.0-4.0
# vsync = true

[logging]
# level = "info"                 # trace, debug, info, warn, error
"##
    .to_string()
}
