//! Configuration type definitions.

use super::enums::{ColorSpec, SessionCompression, SessionStorageMode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the default state of the drawing tools when a canvas session
/// starts. Users change these at runtime through the toolbar.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pencil color - a named color, `#RRGGBB` hex string, or an
    /// RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush size in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_brush_size")]
    pub default_brush_size: f64,

    /// Seed for the recently-used pencil sizes list (at most 3 entries)
    #[serde(default = "default_recent_sizes")]
    pub recent_sizes: Vec<f64>,

    /// Colors offered by the picker, in display order
    #[serde(default = "default_palette")]
    pub palette: Vec<ColorSpec>,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_brush_size: default_brush_size(),
            recent_sizes: default_recent_sizes(),
            palette: default_palette(),
        }
    }
}

/// Canvas appearance settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas clear color; the eraser paints in this color
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,

    /// Smallest accepted background image scale factor
    /// (valid range: 0.05 - 1.0)
    #[serde(default = "default_min_background_scale")]
    pub min_background_scale: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            min_background_scale: default_min_background_scale(),
        }
    }
}

/// Session persistence settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SessionConfig {
    /// Persist the scene across sessions
    #[serde(default)]
    pub enabled: bool,

    /// Restore tool selection (color, brush size, mode) alongside the scene
    #[serde(default = "default_restore_tool_state")]
    pub restore_tool_state: bool,

    /// Where session files live
    #[serde(default = "default_session_storage")]
    pub storage: SessionStorageMode,

    /// Directory used when `storage = "custom"`
    #[serde(default)]
    pub custom_directory: Option<String>,

    /// Gzip compression policy for session files
    #[serde(default = "default_session_compression")]
    pub compress: SessionCompression,

    /// Maximum strokes + shapes restored from a session file
    #[serde(default = "default_max_scene_entities")]
    pub max_scene_entities: usize,

    /// Refuse to read or write session files above this size
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,

    /// Payload size that triggers compression in `auto` mode
    #[serde(default = "default_auto_compress_threshold_kb")]
    pub auto_compress_threshold_kb: u64,

    /// How many rotated `.bak` files to keep (0 disables backups)
    #[serde(default = "default_backup_retention")]
    pub backup_retention: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            restore_tool_state: default_restore_tool_state(),
            storage: default_session_storage(),
            custom_directory: None,
            compress: default_session_compression(),
            max_scene_entities: default_max_scene_entities(),
            max_file_size_mb: default_max_file_size_mb(),
            auto_compress_threshold_kb: default_auto_compress_threshold_kb(),
            backup_retention: default_backup_retention(),
        }
    }
}

/// Gallery export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported drawings are saved to; defaults to the platform
    /// pictures directory under `Fingerpaint/`
    #[serde(default)]
    pub save_directory: Option<String>,

    /// Filename template (supports chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// File extension for raw (un-stylized) exports
    #[serde(default = "default_export_format")]
    pub format: String,

    /// Command handed each exported file for sharing (the file path is
    /// appended as the last argument)
    #[serde(default)]
    pub share_command: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: None,
            filename_template: default_filename_template(),
            format: default_export_format(),
            share_command: None,
        }
    }
}

/// Remote style-transfer service settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StyleTransferConfig {
    /// Base URL of the style-transfer HTTP service
    #[serde(default = "default_style_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds (valid range: 1 - 300)
    #[serde(default = "default_style_timeout_secs")]
    pub timeout_secs: u64,

    /// Styles offered to the user
    #[serde(default = "default_styles")]
    pub styles: Vec<StylePreset>,
}

impl Default for StyleTransferConfig {
    fn default() -> Self {
        Self {
            endpoint: default_style_endpoint(),
            timeout_secs: default_style_timeout_secs(),
            styles: default_styles(),
        }
    }
}

/// One selectable art style.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StylePreset {
    /// Identifier sent to the service
    pub id: String,
    /// Human-readable display name
    pub name: String,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_brush_size() -> f64 {
    5.0
}

fn default_recent_sizes() -> Vec<f64> {
    vec![5.0, 10.0, 15.0]
}

fn default_palette() -> Vec<ColorSpec> {
    [
        "#000000", "#FFFFFF", "#808080", // Black, white, gray
        "#FF0000", "#FF4500", "#FF6347", // Red shades
        "#FFA500", "#FFD700", "#FFFF00", // Orange and yellow
        "#32CD32", "#00FF00", "#008000", // Green shades
        "#00FFFF", "#00BFFF", "#0000FF", // Blue shades
        "#800080", "#9370DB", "#FF00FF", // Purple shades
        "#FFDAB9", // Peach
        "#A52A2A", "#8B4513", "#CD853F", // Brown shades
    ]
    .into_iter()
    .map(|hex| ColorSpec::Name(hex.to_string()))
    .collect()
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("#FFFFFF".to_string())
}

fn default_min_background_scale() -> f64 {
    0.1
}

fn default_restore_tool_state() -> bool {
    true
}

fn default_session_storage() -> SessionStorageMode {
    SessionStorageMode::Auto
}

fn default_session_compression() -> SessionCompression {
    SessionCompression::Auto
}

fn default_max_scene_entities() -> usize {
    10_000
}

fn default_max_file_size_mb() -> u64 {
    10
}

fn default_auto_compress_threshold_kb() -> u64 {
    100
}

fn default_backup_retention() -> usize {
    1
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}

fn default_export_format() -> String {
    "svg".to_string()
}

fn default_style_endpoint() -> String {
    "http://127.0.0.1:9301".to_string()
}

fn default_style_timeout_secs() -> u64 {
    30
}

fn default_styles() -> Vec<StylePreset> {
    let preset = |id: &str, name: &str| StylePreset {
        id: id.to_string(),
        name: name.to_string(),
    };
    vec![
        preset("anime", "Anime"),
        preset("oil-painting", "Oil Painting"),
        preset("watercolor", "Watercolor"),
        preset("pencil-sketch", "Pencil Sketch"),
        preset("pop-art", "Pop Art"),
    ]
}
