//! Tool selection state: mode, colors, brush size, and recent sizes.

use super::tool::DrawMode;
use crate::draw::{Color, ShapeKind, StrokeTool};
use serde::{Deserialize, Serialize};

/// Maximum brush/outline size accepted at runtime, in pixels.
pub const MAX_BRUSH_SIZE: f64 = 100.0;

/// Minimum brush/outline size accepted at runtime, in pixels.
pub const MIN_BRUSH_SIZE: f64 = 1.0;

/// How many recently used pencil sizes are remembered.
pub const RECENT_SIZE_SLOTS: usize = 3;

/// Current tool selection shared by gesture dispatch and rendering.
///
/// Invariant: while `mode` is [`DrawMode::Eraser`], `active_color` equals
/// the canvas background color and the color the user actually picked is
/// preserved in `last_pencil_color`. Leaving eraser mode restores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolState {
    /// Active tool mode
    pub mode: DrawMode,
    /// Color applied to new strokes and shapes
    pub active_color: Color,
    /// The user-chosen color preserved across eraser use
    pub last_pencil_color: Color,
    /// Stroke thickness / shape outline width in pixels
    pub brush_size: f64,
    /// Shape kind the next shape gesture will create, if any
    pub active_shape: Option<ShapeKind>,
    /// Most-recently-used pencil sizes, deduplicated, capped at
    /// [`RECENT_SIZE_SLOTS`]
    pub recent_sizes: Vec<f64>,
}

impl ToolState {
    /// Creates a tool state starting in pencil mode.
    ///
    /// # Arguments
    /// * `color` - Initial pencil color
    /// * `brush_size` - Initial brush size in pixels
    /// * `recent_sizes` - Seed for the recent-size list (truncated to
    ///   [`RECENT_SIZE_SLOTS`])
    pub fn with_defaults(color: Color, brush_size: f64, mut recent_sizes: Vec<f64>) -> Self {
        recent_sizes.truncate(RECENT_SIZE_SLOTS);
        Self {
            mode: DrawMode::Pencil,
            active_color: color,
            last_pencil_color: color,
            brush_size: clamp_size(brush_size),
            active_shape: None,
            recent_sizes,
        }
    }

    /// Picks an explicit drawing color. Always switches to pencil mode
    /// first, so a color tap while erasing resumes drawing.
    pub fn select_color(&mut self, color: Color) {
        self.mode = DrawMode::Pencil;
        self.active_color = color;
        self.last_pencil_color = color;
    }

    /// Switches to pencil mode, restoring the color stashed while erasing.
    pub fn select_pencil(&mut self) {
        if self.mode == DrawMode::Eraser {
            self.active_color = self.last_pencil_color;
        }
        self.mode = DrawMode::Pencil;
    }

    /// Switches to eraser mode.
    ///
    /// Forces `active_color` to `background` and stashes the previous
    /// color in `last_pencil_color` - unless the user was already drawing
    /// in the background color, which would destroy the stash.
    pub fn select_eraser(&mut self, background: Color) {
        if self.mode != DrawMode::Eraser {
            if self.active_color != background {
                self.last_pencil_color = self.active_color;
            }
            self.active_color = background;
        }
        self.mode = DrawMode::Eraser;
    }

    /// Switches to shape mode with the given shape kind.
    ///
    /// Coming out of eraser mode restores the stashed pencil color, so
    /// shapes are never silently drawn in the background color.
    pub fn select_shape(&mut self, kind: ShapeKind) {
        if self.mode == DrawMode::Eraser {
            self.active_color = self.last_pencil_color;
        }
        self.mode = DrawMode::Shape;
        self.active_shape = Some(kind);
    }

    /// Updates the brush size, clamped to the accepted range.
    ///
    /// Sizes chosen while in pencil mode are promoted into the
    /// recent-sizes list.
    pub fn set_brush_size(&mut self, size: f64) {
        self.brush_size = clamp_size(size);
        if self.mode == DrawMode::Pencil {
            self.remember_size(self.brush_size);
        }
    }

    /// The stroke tool a freehand gesture in the current mode produces.
    ///
    /// Shape mode never reaches stroke commit; it maps to pencil here only
    /// for completeness.
    pub fn stroke_tool(&self) -> StrokeTool {
        match self.mode {
            DrawMode::Eraser => StrokeTool::Eraser,
            DrawMode::Pencil | DrawMode::Shape => StrokeTool::Pencil,
        }
    }

    fn remember_size(&mut self, size: f64) {
        self.recent_sizes.retain(|&s| s != size);
        self.recent_sizes.insert(0, size);
        self.recent_sizes.truncate(RECENT_SIZE_SLOTS);
    }
}

fn clamp_size(size: f64) -> f64 {
    size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, WHITE};

    fn tools() -> ToolState {
        ToolState::with_defaults(BLACK, 5.0, vec![5.0, 10.0, 15.0])
    }

    #[test]
    fn eraser_stashes_and_pencil_restores_the_color() {
        let mut t = tools();
        t.select_color(RED);

        t.select_eraser(WHITE);
        assert_eq!(t.mode, DrawMode::Eraser);
        assert_eq!(t.active_color, WHITE);
        assert_eq!(t.last_pencil_color, RED);

        t.select_pencil();
        assert_eq!(t.mode, DrawMode::Pencil);
        assert_eq!(t.active_color, RED);
    }

    #[test]
    fn erasing_in_the_background_color_keeps_the_stash() {
        let mut t = tools();
        t.select_color(RED);
        t.active_color = WHITE; // host forced the background color directly

        t.select_eraser(WHITE);
        // Stash keeps the last real pencil color rather than white.
        assert_eq!(t.last_pencil_color, RED);
    }

    #[test]
    fn repeated_eraser_selection_does_not_clobber_the_stash() {
        let mut t = tools();
        t.select_color(RED);
        t.select_eraser(WHITE);
        t.select_eraser(WHITE);
        t.select_pencil();
        assert_eq!(t.active_color, RED);
    }

    #[test]
    fn selecting_a_color_leaves_eraser_mode() {
        let mut t = tools();
        t.select_eraser(WHITE);
        t.select_color(RED);

        assert_eq!(t.mode, DrawMode::Pencil);
        assert_eq!(t.active_color, RED);
        assert_eq!(t.last_pencil_color, RED);
    }

    #[test]
    fn shape_selection_restores_the_pencil_color() {
        let mut t = tools();
        t.select_color(RED);
        t.select_eraser(WHITE);
        t.select_shape(crate::draw::ShapeKind::Circle);

        assert_eq!(t.mode, DrawMode::Shape);
        assert_eq!(t.active_color, RED);
        assert_eq!(t.active_shape, Some(crate::draw::ShapeKind::Circle));
    }

    #[test]
    fn recent_sizes_are_mru_deduplicated_and_capped() {
        let mut t = tools();
        assert_eq!(t.recent_sizes, vec![5.0, 10.0, 15.0]);

        t.set_brush_size(10.0);
        assert_eq!(t.recent_sizes, vec![10.0, 5.0, 15.0]);

        t.set_brush_size(22.0);
        assert_eq!(t.recent_sizes, vec![22.0, 10.0, 5.0]);

        t.set_brush_size(22.0);
        assert_eq!(t.recent_sizes, vec![22.0, 10.0, 5.0]);
    }

    #[test]
    fn eraser_sizes_are_not_remembered() {
        let mut t = tools();
        t.select_eraser(WHITE);
        t.set_brush_size(40.0);

        assert_eq!(t.brush_size, 40.0);
        assert_eq!(t.recent_sizes, vec![5.0, 10.0, 15.0]);
    }

    #[test]
    fn brush_size_is_clamped() {
        let mut t = tools();
        t.set_brush_size(0.0);
        assert_eq!(t.brush_size, MIN_BRUSH_SIZE);
        t.set_brush_size(500.0);
        assert_eq!(t.brush_size, MAX_BRUSH_SIZE);
    }
}
