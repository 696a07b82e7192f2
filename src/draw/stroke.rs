//! Freehand stroke accumulation and committed stroke records.

use super::color::Color;
use super::path;
use crate::util::Point;
use serde::{Deserialize, Serialize};

/// Which freehand tool produced a stroke.
///
/// Eraser strokes keep their own variant; the renderer substitutes the
/// canvas background color at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeTool {
    /// Normal pencil drawing in the active color
    Pencil,
    /// Erasing - paints in the canvas background color
    Eraser,
}

/// A committed freehand stroke.
///
/// Invariant: `points` is non-empty. A single-point stroke has an empty
/// `path` and renders as a filled dot of diameter equal to `thickness`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    /// Normalized samples in the order they were drawn
    pub points: Vec<Point>,
    /// Stroke color chosen when the gesture ended
    pub color: Color,
    /// Line thickness in pixels
    pub thickness: f64,
    /// Tool that produced the stroke
    pub tool: StrokeTool,
    /// SVG path data cached at commit time; empty for single-point strokes.
    /// Always reproducible from `points` via [`path::smooth_path`].
    pub path: String,
}

impl Stroke {
    /// Whether this stroke renders as a dot rather than a path.
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }

    /// Recomputes the smoothed path from the raw samples.
    ///
    /// Yields the same bytes as the cached `path` for any committed stroke.
    pub fn recompute_path(&self) -> String {
        path::smooth_path(&self.points)
    }
}

/// In-progress point accumulation for one pencil/eraser gesture.
///
/// The buffer holds normalized samples only; color, thickness, and tool
/// are bound once, at commit time.
#[derive(Debug, Clone, Default)]
pub struct StrokeBuffer {
    points: Vec<Point>,
}

impl StrokeBuffer {
    /// Starts a buffer with the gesture's first sample.
    pub fn begin(point: Point) -> Self {
        Self {
            points: vec![point],
        }
    }

    /// Feeds one raw move sample through the interpolator.
    ///
    /// Appends all derived samples; a no-op when the move is rejected as
    /// jitter. Returns the number of samples appended.
    pub fn extend(&mut self, raw: Point) -> usize {
        match self.points.last().copied() {
            Some(last) => {
                let samples = path::interpolate(last, raw);
                let added = samples.len();
                self.points.extend(samples);
                added
            }
            None => {
                self.points.push(raw);
                1
            }
        }
    }

    /// Samples accumulated so far, for live preview rendering.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Finalizes the gesture into an immutable [`Stroke`], computing the
    /// smoothed path once.
    pub fn commit(self, color: Color, thickness: f64, tool: StrokeTool) -> Stroke {
        let path = path::smooth_path(&self.points);
        Stroke {
            points: self.points,
            color,
            thickness,
            tool,
            path,
        }
    }
}
