//! Style configuration for the scatter adapter
//!
//! Every color, scale multiplier and polyline constant the attribute
//! generators use lives here, so a host can restyle the plot from a TOML or
//! JSON file without touching the generation code.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ScatterError, ScatterResult};

/// Complete adapter style
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScatterStyle {
    /// Point colors
    pub points: PointPalette,
    /// Point scale multipliers
    pub scales: PointScales,
    /// Label colors, scales and font size
    pub labels: LabelStyle,
    /// Polyline hue ramp, opacities and widths
    pub polylines: PolylineStyle,
}

/// Point colors for each interaction role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointPalette {
    pub unselected: Color,
    pub no_selection: Color,
    pub selected: Color,
    pub hover: Color,
    /// Baseline overrides when labels are drawn in 3D
    pub labels_3d_unselected: Color,
    pub labels_3d_no_selection: Color,
    /// Baseline overrides when points are drawn as sprites
    pub sprite_unselected: Color,
    pub sprite_no_selection: Color,
}

impl Default for PointPalette {
    fn default() -> Self {
        Self {
            unselected: Color::from_rgb_u32(0xE3E3E3),
            no_selection: Color::from_rgb_u32(0x7575D9),
            selected: Color::from_rgb_u32(0xFA6666),
            hover: Color::from_rgb_u32(0x760B4F),
            labels_3d_unselected: Color::from_rgb_u32(0xFFFFFF),
            labels_3d_no_selection: Color::from_rgb_u32(0xFFFFFF),
            sprite_unselected: Color::from_rgb_u32(0xFFFFFF),
            sprite_no_selection: Color::from_rgb_u32(0xFFFFFF),
        }
    }
}

/// Point scale multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointScales {
    pub default: f32,
    pub selected: f32,
    pub neighbor: f32,
    pub hover: f32,
}

impl Default for PointScales {
    fn default() -> Self {
        Self {
            default: 1.0,
            selected: 1.2,
            neighbor: 1.2,
            hover: 1.2,
        }
    }
}

/// Label appearance for the hover, selected and neighbor passes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub default_font_size: f32,
    pub scale_default: f32,
    pub scale_large: f32,
    pub fill_hover: Color,
    pub stroke_hover: Color,
    pub fill_selected: Color,
    pub stroke_selected: Color,
    pub fill_neighbor: Color,
    pub stroke_neighbor: Color,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            default_font_size: 10.0,
            scale_default: 1.0,
            scale_large: 2.0,
            fill_hover: Color::from_rgb_u32(0x000000),
            stroke_hover: Color::from_rgb_u32(0xFFFFFF),
            fill_selected: Color::from_rgb_u32(0x000000),
            stroke_selected: Color::from_rgb_u32(0xFFFFFF),
            fill_neighbor: Color::from_rgb_u32(0x000000),
            stroke_neighbor: Color::from_rgb_u32(0xFFFFFF),
        }
    }
}

/// Sequence polyline appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylineStyle {
    /// Hue (degrees) at the start of a sequence
    pub start_hue: f32,
    /// Hue (degrees) at the end of a sequence
    pub end_hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub default_opacity: f32,
    pub selected_opacity: f32,
    pub deselected_opacity: f32,
    pub default_width: f32,
    pub selected_width: f32,
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            start_hue: 60.0,
            end_hue: 360.0,
            saturation: 1.0,
            lightness: 0.3,
            default_opacity: 0.2,
            selected_opacity: 0.9,
            deselected_opacity: 0.05,
            default_width: 2.0,
            selected_width: 3.0,
        }
    }
}

impl ScatterStyle {
    /// Create a style with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a style from a TOML string
    pub fn from_toml(toml_str: &str) -> ScatterResult<Self> {
        let style: Self = toml::from_str(toml_str)?;
        style.validate()?;
        Ok(style)
    }

    /// Serialize the style to TOML
    pub fn to_toml(&self) -> ScatterResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a style from a JSON string
    pub fn from_json(json_str: &str) -> ScatterResult<Self> {
        let style: Self = serde_json::from_str(json_str)?;
        style.validate()?;
        Ok(style)
    }

    /// Serialize the style to JSON
    pub fn to_json(&self) -> ScatterResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate style values
    pub fn validate(&self) -> ScatterResult<()> {
        let p = &self.polylines;
        for (name, opacity) in [
            ("default_opacity", p.default_opacity),
            ("selected_opacity", p.selected_opacity),
            ("deselected_opacity", p.deselected_opacity),
        ] {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(ScatterError::InvalidConfig(format!(
                    "polylines.{} must be between 0.0 and 1.0",
                    name
                )));
            }
        }

        let positive = [
            ("polylines.default_width", p.default_width),
            ("polylines.selected_width", p.selected_width),
            ("scales.default", self.scales.default),
            ("scales.selected", self.scales.selected),
            ("scales.neighbor", self.scales.neighbor),
            ("scales.hover", self.scales.hover),
            ("labels.scale_default", self.labels.scale_default),
            ("labels.scale_large", self.labels.scale_large),
            ("labels.default_font_size", self.labels.default_font_size),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ScatterError::InvalidConfig(format!(
                    "{} must be positive",
                    name
                )));
            }
        }

        if !(0.0..=1.0).contains(&p.saturation) || !(0.0..=1.0).contains(&p.lightness) {
            return Err(ScatterError::InvalidConfig(
                "polyline saturation and lightness must be between 0.0 and 1.0".to_string(),
            ));
        }

        Ok(())
    }
}
