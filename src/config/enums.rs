//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use crate::util;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "black"
///
/// # Hex string
/// background_color = "#FFFFFF"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (black, white, gray, red, ...) or `#RRGGBB` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Hex strings are parsed first, then named colors. Unknown values
    /// default to black with a warning. RGB arrays are converted from
    /// 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => Color::from_hex(name)
                .or_else(|| util::name_to_color(name))
                .unwrap_or_else(|| {
                    warn!("Unknown color '{}', using black", name);
                    BLACK
                }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}

/// Where session files are stored.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SessionStorageMode {
    /// Platform data directory (`~/.local/share/fingerpaint` on Linux)
    Auto,
    /// Next to the config file
    Config,
    /// The directory named by `session.custom_directory`
    Custom,
}

/// Compression preference for session files.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SessionCompression {
    /// Compress when the payload exceeds the configured threshold
    Auto,
    /// Always write gzip-compressed JSON
    On,
    /// Always write plain JSON
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{ORANGE, WHITE};

    #[test]
    fn color_spec_accepts_names_hex_and_rgb() {
        assert_eq!(ColorSpec::Name("white".into()).to_color(), WHITE);
        assert_eq!(ColorSpec::Name("#FFA500".into()).to_color(), ORANGE);
        assert_eq!(ColorSpec::Rgb([255, 165, 0]).to_color(), ORANGE);
    }

    #[test]
    fn unknown_color_spec_falls_back_to_black() {
        assert_eq!(ColorSpec::Name("mauve-ish".into()).to_color(), BLACK);
    }
}
