use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const LABEL_FONT: &str = "axis_label";

/// Register the configured label font and return the family to draw labels with.
///
/// Fonts are loaded before the first frame, so labels are always drawn with
/// the final font. Falls back to the proportional family on any failure.
pub fn install_label_font(ctx: &egui::Context, font_path: Option<&Path>) -> FontFamily {
    let Some(path) = font_path else {
        return FontFamily::Proportional;
    };
    match read_font(path) {
        Ok(data) => {
            let mut fonts = FontDefinitions::default();
            fonts.font_data.insert(LABEL_FONT.to_owned(), Arc::new(data));
            // keep the default fonts as glyph fallbacks
            let mut family = vec![LABEL_FONT.to_owned()];
            family.extend(
                fonts
                    .families
                    .get(&FontFamily::Proportional)
                    .cloned()
                    .unwrap_or_default(),
            );
            fonts.families.insert(FontFamily::Name(LABEL_FONT.into()), family);
            ctx.set_fonts(fonts);
            log::info!("Using label font {}", path.display());
            FontFamily::Name(LABEL_FONT.into())
        }
        Err(e) => {
            log::warn!("Label font unavailable, using default: {e:#}");
            FontFamily::Proportional
        }
    }
}

fn read_font(path: &Path) -> Result<FontData> {
    let bytes = std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    Ok(FontData::from_owned(bytes))
}
