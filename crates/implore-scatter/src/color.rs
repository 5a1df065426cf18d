//! Color utilities for point-cloud rendering
//!
//! Provides:
//! - `Color`: an RGB triple (0.0 to 1.0) with hex, CSS and HSL conversions
//! - `ColorScale`: a piecewise-linear scalar -> color scale with clamping
//! - `nearest_neighbor_scale`: the fixed scale used to tint neighbors by closeness
//!
//! Interpolation happens in RGB space.

use serde::{Deserialize, Serialize};

/// A color in RGB format (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a color from RGB components
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value
    pub fn from_rgb_u32(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as f32 / 255.0,
            ((hex >> 8) & 0xFF) as f32 / 255.0,
            (hex & 0xFF) as f32 / 255.0,
        )
    }

    /// Create a color from hex string (e.g., "#FF5733" or "FF5733")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(Self::from_rgb_u32)
    }

    /// Create a color from hue (degrees), saturation and lightness (0.0 to 1.0)
    pub fn from_hsl(hue_degrees: f32, saturation: f32, lightness: f32) -> Self {
        let h = (hue_degrees / 360.0).rem_euclid(1.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::rgb(l, l, l);
        }

        let high = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let low = 2.0 * l - high;

        Self::rgb(
            hue_to_channel(low, high, h + 1.0 / 3.0),
            hue_to_channel(low, high, h),
            hue_to_channel(low, high, h - 1.0 / 3.0),
        )
    }

    /// Parse a CSS color string: `#rrggbb`, `rgb(r, g, b)` or `hsl(h, s%, l%)`
    pub fn parse_css(css: &str) -> Option<Self> {
        let css = css.trim();
        if css.starts_with('#') {
            return Self::from_hex(css);
        }

        let (name, args) = css.split_once('(')?;
        let args = args.strip_suffix(')')?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return None;
        }

        match name.trim().to_lowercase().as_str() {
            "rgb" => {
                let mut channels = [0.0f32; 3];
                for (slot, part) in channels.iter_mut().zip(&parts) {
                    *slot = part.parse::<f32>().ok()?.clamp(0.0, 255.0) / 255.0;
                }
                Some(Self::rgb(channels[0], channels[1], channels[2]))
            }
            "hsl" => {
                let hue = parts[0].parse::<f32>().ok()?;
                let saturation = parse_percent(parts[1])?;
                let lightness = parse_percent(parts[2])?;
                Some(Self::from_hsl(hue, saturation, lightness))
            }
            _ => None,
        }
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb_bytes();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Convert to a CSS `rgb(r, g, b)` string
    pub fn to_css(&self) -> String {
        let [r, g, b] = self.to_rgb_bytes();
        format!("rgb({}, {}, {})", r, g, b)
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
        }
    }

    /// Convert to array [r, g, b]
    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to 8-bit channels, rounding to nearest
    pub fn to_rgb_bytes(&self) -> [u8; 3] {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b)]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0.5, 0.5, 0.5)
    }
}

fn hue_to_channel(low: f32, high: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return low + (high - low) * 6.0 * t;
    }
    if t < 0.5 {
        return high;
    }
    if t < 2.0 / 3.0 {
        return low + (high - low) * 6.0 * (2.0 / 3.0 - t);
    }
    low
}

fn parse_percent(s: &str) -> Option<f32> {
    let value = s.strip_suffix('%')?.trim().parse::<f32>().ok()?;
    Some(value / 100.0)
}

/// A piecewise-linear scale from a scalar domain to colors
///
/// Stops may be given in any order; values outside the domain clamp to the
/// nearest end stop.
#[derive(Clone, Debug)]
pub struct ColorScale {
    /// Color stops sorted by ascending domain value
    stops: Vec<(f64, Color)>,
}

impl ColorScale {
    /// Create a scale from (domain value, color) stops
    pub fn from_stops(mut stops: Vec<(f64, Color)>) -> Self {
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { stops }
    }

    /// Create a scale from parallel domain and CSS color lists
    ///
    /// Returns `None` if the lengths differ or a color fails to parse.
    pub fn from_css(domain: &[f64], range: &[&str]) -> Option<Self> {
        if domain.len() != range.len() {
            return None;
        }
        let stops = domain
            .iter()
            .zip(range)
            .map(|(d, css)| Color::parse_css(css).map(|c| (*d, c)))
            .collect::<Option<Vec<_>>>()?;
        Some(Self::from_stops(stops))
    }

    /// Sample the scale at a domain value
    ///
    /// Non-finite input maps to the low end of the domain.
    pub fn sample(&self, value: f64) -> Color {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::default();
        };

        if !value.is_finite() || value <= first.0 {
            return first.1;
        }
        if value >= last.0 {
            return last.1;
        }

        for pair in self.stops.windows(2) {
            let (d0, c0) = &pair[0];
            let (d1, c1) = &pair[1];
            if value >= *d0 && value <= *d1 {
                let span = d1 - d0;
                let local_t = if span > 0.0 { (value - d0) / span } else { 0.0 };
                return Color::lerp(c0, c1, local_t as f32);
            }
        }

        last.1
    }
}

/// The neighbor closeness scale: 1.0 (closest) is purple, 0.7 red, 0.4 and below gold
pub fn nearest_neighbor_scale() -> ColorScale {
    ColorScale::from_stops(vec![
        (1.0, Color::from_hsl(285.0, 0.8, 0.4)),
        (0.7, Color::from_hsl(0.0, 0.8, 0.65)),
        (0.4, Color::from_hsl(40.0, 0.7, 0.6)),
    ])
}
