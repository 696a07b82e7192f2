//! Scene container: committed strokes, shapes, and the background layer.

use super::shape::Shape;
use super::stroke::Stroke;
use serde::{Deserialize, Serialize};

/// How a background image fits the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Letterbox: the whole image stays visible inside the canvas
    #[default]
    Contain,
    /// Fill: the image covers the canvas, cropping overflow
    Cover,
}

/// Background image layer.
///
/// At most one background is alive at a time; setting a new one replaces
/// the previous one entirely (there is no background stack).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Background {
    /// Opaque resource handle understood by the host renderer
    pub uri: String,
    /// Display scale factor; callers clamp this to the configured minimum
    pub scale: f64,
    /// Fit policy
    pub fit: FitMode,
}

impl Background {
    pub fn new(uri: impl Into<String>, scale: f64, fit: FitMode) -> Self {
        Self {
            uri: uri.into(),
            scale,
            fit,
        }
    }
}

/// All committed drawing entities in render order.
///
/// Strokes and shapes are independent append-ordered sequences; the
/// renderer draws the background first, then every stroke, then every
/// shape. The scene is created empty at session start and is only mutated
/// through the append, clear, and undo operations below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Committed freehand strokes, bottom layer first
    pub strokes: Vec<Stroke>,
    /// Committed shapes, drawn above all strokes, bottom first
    pub shapes: Vec<Shape>,
    /// Optional background image under everything else
    #[serde(default)]
    pub background: Option<Background>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a committed stroke on top of existing strokes.
    pub fn push_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Appends a committed shape on top of existing shapes.
    pub fn push_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Sets or replaces the background image.
    pub fn set_background(&mut self, background: Background) {
        self.background = Some(background);
    }

    /// Removes the background image. Returns whether one was present.
    pub fn clear_background(&mut self) -> bool {
        self.background.take().is_some()
    }

    /// Drops strokes, shapes, and background unconditionally.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.shapes.clear();
        self.background = None;
    }

    /// Removes the most recent entity, in strict priority order: the last
    /// shape if any, else the last stroke, else the background.
    ///
    /// Returns `false` (a no-op, not an error) when the scene is empty.
    pub fn undo(&mut self) -> bool {
        if self.shapes.pop().is_some() {
            return true;
        }
        if self.strokes.pop().is_some() {
            return true;
        }
        self.clear_background()
    }

    /// Whether the scene holds no entities and no background.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.shapes.is_empty() && self.background.is_none()
    }

    /// Total committed entity count (strokes + shapes), used by session
    /// persistence limits.
    pub fn entity_count(&self) -> usize {
        self.strokes.len() + self.shapes.len()
    }
}
