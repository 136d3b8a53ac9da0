use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting at `hue_offset` degrees.
pub fn generate_palette(n: usize, hue_offset: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = hue_offset + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.6);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// One colour per spatial axis: reddish x, greenish y, bluish z.
pub fn axis_palette() -> [Color32; 3] {
    let colors = generate_palette(3, 0.0);
    [colors[0], colors[1], colors[2]]
}

/// Slightly dimmed variant of an axis colour for its label text.
pub fn label_color(axis_color: Color32) -> Color32 {
    axis_color.gamma_multiply(0.85)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0, 0.0).is_empty());
        assert_eq!(generate_palette(5, 30.0).len(), 5);
    }

    #[test]
    fn axis_colors_are_distinct() {
        let [x, y, z] = axis_palette();
        assert_ne!(x, y);
        assert_ne!(y, z);
        assert_ne!(x, z);
        // hue 0 is red-dominant
        assert!(x.r() > x.g() && x.r() > x.b());
    }
}
