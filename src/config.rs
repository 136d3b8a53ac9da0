//! Plot configuration, loaded once at startup.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

use crate::plot::LOG_SCALE_THRESHOLD;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ENTITY_SCATTER_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "entity_scatter.json";

// ---------------------------------------------------------------------------
// Missing-value policy
// ---------------------------------------------------------------------------

/// What to do with a record whose value for a plotted axis is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Keep the point and leave that coordinate at 0.
    #[default]
    ZeroAxis,
    /// Drop the whole point and report it as skipped.
    ExcludePoint,
}

impl MissingPolicy {
    pub fn label(self) -> &'static str {
        match self {
            MissingPolicy::ZeroAxis => "Place at 0",
            MissingPolicy::ExcludePoint => "Exclude point",
        }
    }
}

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub radius: f32,
    /// `"#rrggbb"` (or `"#rgb"`), e.g. `"#20b2aa"`. Alpha comes from `opacity`.
    pub color: String,
    pub opacity: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 1.0,
            color: "#20b2aa".to_string(),
            opacity: 0.8,
        }
    }
}

impl MarkerStyle {
    /// Marker color with the opacity folded into alpha.
    pub fn color32(&self) -> Color32 {
        let rgb = Color32::from_hex(&self.color).unwrap_or(Color32::from_rgb(0x20, 0xb2, 0xaa));
        let alpha = (self.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(rgb.r(), rgb.g(), rgb.b(), alpha)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    /// Glyph height in scene units.
    pub size: f32,
    /// Extrusion depth in scene units.
    pub depth: f32,
    /// Offset into the neighbouring plane.
    pub offset: f32,
    /// Average glyph advance as a fraction of `size`, used to estimate label width.
    pub advance_ratio: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            size: 5.0,
            depth: 0.5,
            offset: 5.0,
            advance_ratio: 0.6,
        }
    }
}

// ---------------------------------------------------------------------------
// PlotConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Values above this are log-scaled; values at or below it are plotted as-is.
    pub log_scale_threshold: f64,
    pub missing_policy: MissingPolicy,
    pub marker: MarkerStyle,
    pub label: LabelStyle,
    /// Color per axis (x, y, z). Generated from the palette when absent.
    pub axis_colors: Option<[String; 3]>,
    /// TTF/OTF file used for axis labels; egui's default font otherwise.
    pub font_path: Option<PathBuf>,
    /// Start in 3D mode (otherwise the 2D x/y view).
    pub three_d: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            log_scale_threshold: LOG_SCALE_THRESHOLD,
            missing_policy: MissingPolicy::default(),
            marker: MarkerStyle::default(),
            label: LabelStyle::default(),
            axis_colors: None,
            font_path: None,
            three_d: true,
        }
    }
}

impl PlotConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// `$ENTITY_SCATTER_CONFIG`, else `./entity_scatter.json`, else defaults.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_path(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::from_path(local);
        }
        Ok(Self::default())
    }

    /// Axis colors: configured ones where they parse, palette colors otherwise.
    pub fn axis_colors(&self) -> [Color32; 3] {
        let generated = crate::color::axis_palette();
        match &self.axis_colors {
            Some(hex) => {
                std::array::from_fn(|i| Color32::from_hex(&hex[i]).unwrap_or(generated[i]))
            }
            None => generated,
        }
    }
}
