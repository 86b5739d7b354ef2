use flora_common::ConfigError;
use flora_config::colors::parse_linear_rgb;

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat, particles: u32) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?}, particles={})",
            width,
            height,
            format,
            particles,
        );
    }
}

/// Parse the four palette stops into linear RGB.
pub(crate) fn parse_palette(colors: &[String]) -> Result<[[f32; 3]; 4], ConfigError> {
    if colors.len() != 4 {
        return Err(ConfigError::ValidationError(format!(
            "particles.colors must have exactly 4 entries, got {}",
            colors.len()
        )));
    }
    let mut palette = [[0.0f32; 3]; 4];
    for (dst, src) in palette.iter_mut().zip(colors) {
        *dst = parse_linear_rgb(src)?;
    }
    Ok(palette)
}

/// Opaque clear color from a config color string.
pub(crate) fn parse_clear_color(s: &str) -> Result<wgpu::Color, ConfigError> {
    let [r, g, b] = parse_linear_rgb(s)?;
    Ok(wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: 1.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flora_config::schema::DEFAULT_PALETTE;

    #[test]
    fn default_palette_parses() {
        let colors: Vec<String> = DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect();
        let palette = parse_palette(&colors).unwrap();
        // #fdc8dd is the lightest stop
        assert!(palette[3].iter().all(|c| *c > 0.5));
        assert!(palette.iter().flatten().all(|c| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn palette_needs_four_stops() {
        let colors = vec!["#ffffff".to_string(); 3];
        assert!(matches!(
            parse_palette(&colors),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn clear_color_black() {
        let c = parse_clear_color("#000000").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0.0, 0.0, 0.0, 1.0));
    }
}
