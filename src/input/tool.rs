//! Drawing mode selection.

use serde::{Deserialize, Serialize};

/// The active tool mode governing gesture interpretation.
///
/// Exactly one mode is active at a time; modes are selected from the
/// toolbar, never by the gestures themselves. Modeled as an enum rather
/// than parallel boolean flags so shape mode cannot be half-represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Freehand drawing in the active color (default)
    Pencil,
    /// Freehand erasing - draws in the canvas background color
    Eraser,
    /// Two-point shape dragging; requires a shape kind to be selected
    Shape,
}
