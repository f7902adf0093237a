use serde::{Deserialize, Serialize};

use crate::api::error::VisError;
use crate::api::types::{Color, LabelFont};

/// View configuration, fixed at startup.
///
/// Every field has a default, so a JSON document only needs to name the
/// values it changes:
///
/// ```
/// use solar_vis::ViewConfig;
///
/// let cfg = ViewConfig::from_json(r#"{ "space_width": 800, "header_font": "Courier-12" }"#).unwrap();
/// assert_eq!(cfg.space_width, 800);
/// assert_eq!(cfg.space_height, 600);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Main view width in pixels.
    pub space_width: u32,
    /// Main view height in pixels. Also the telemetry panel height.
    pub space_height: u32,
    /// Telemetry panel width in pixels, shared by all three strips.
    pub graphics_width: u32,
    /// Font of the system name label.
    pub header_font: LabelFont,
    /// Anchor of the system name label on the main view.
    pub header_pos: [f64; 2],
    /// Tag identifying the system name label on the surface.
    pub header_tag: String,
    /// Color of telemetry axes and curves.
    pub plot_color: Color,
    /// Fill used by `clear_all` on the telemetry panel.
    pub plot_background: Color,
    /// Axis line width in pixels.
    pub axis_width: f64,
    /// Curve stroke width in pixels.
    pub stroke_width: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            space_width: 600,
            space_height: 600,
            graphics_width: 400,
            header_font: LabelFont::default(),
            header_pos: [30.0, 80.0],
            header_tag: "header".to_string(),
            plot_color: Color::WHITE,
            plot_background: Color::BLACK,
            axis_width: 2.0,
            stroke_width: 1.0,
        }
    }
}

impl ViewConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, VisError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject dimensions the transforms cannot work with.
    pub fn validate(&self) -> Result<(), VisError> {
        if self.space_width == 0 || self.space_height == 0 {
            return Err(VisError::InvalidConfig(format!(
                "main view must be non-empty, got {}x{}",
                self.space_width, self.space_height
            )));
        }
        // Strips are H/3 tall with a 5px inset on both sides of the curve area.
        if self.space_height < 30 {
            return Err(VisError::InvalidConfig(format!(
                "space_height {} leaves no room for three telemetry strips",
                self.space_height
            )));
        }
        if self.graphics_width <= 5 {
            return Err(VisError::InvalidConfig(format!(
                "graphics_width {} is inside the 5px axis inset",
                self.graphics_width
            )));
        }
        if !(self.axis_width > 0.0 && self.axis_width.is_finite())
            || !(self.stroke_width > 0.0 && self.stroke_width.is_finite())
        {
            return Err(VisError::InvalidConfig(
                "line widths must be positive".to_string(),
            ));
        }
        if self.header_tag.is_empty() {
            return Err(VisError::InvalidConfig("header_tag is empty".to_string()));
        }
        Ok(())
    }

    /// Height of the whole telemetry panel.
    pub fn telemetry_height(&self) -> f64 {
        self.space_height as f64
    }

    /// Height of one telemetry strip.
    pub fn strip_height(&self) -> f64 {
        self.telemetry_height() / 3.0
    }
}
