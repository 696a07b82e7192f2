//! Utility types for canvas geometry and color name mapping.
//!
//! This module provides:
//! - The [`Point`] sample type shared by strokes, shapes, and gestures
//! - Distance/midpoint helpers used by the interpolator and shape math
//! - Name-to-color mapping used by the configuration system

use crate::draw::{Color, color::*};
use serde::{Deserialize, Serialize};

/// A touch sample in canvas-local pixel coordinates.
///
/// Points are immutable once recorded; gesture handling only ever appends
/// new samples or replaces a shape's drag endpoint wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position in pixels
    pub x: f64,
    /// Vertical position in pixels
    pub y: f64,
}

impl Point {
    /// Creates a point from pixel coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two samples.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Midpoint of the segment between two samples.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Converts a drag vector (any corner to any corner) into a normalized
/// bounding box.
///
/// # Returns
/// Tuple `(x, y, width, height)` where `(x, y)` is the top-left corner and
/// both extents are non-negative regardless of drag direction.
pub fn drag_bounds(start: Point, end: Point) -> (f64, f64, f64, f64) {
    let x = start.x.min(end.x);
    let y = start.y.min(end.y);
    let width = (end.x - start.x).abs();
    let height = (end.y - start.y).abs();
    (x, y, width, height)
}

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config
/// file. Hex strings are handled separately by [`Color::from_hex`].
///
/// # Supported Names (case-insensitive)
/// - "black", "white", "gray", "red", "orange", "yellow", "green", "blue",
///   "cyan", "purple", "magenta", "brown"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "gray" | "grey" => Some(GRAY),
        "red" => Some(RED),
        "orange" => Some(ORANGE),
        "yellow" => Some(YELLOW),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "cyan" => Some(CYAN),
        "purple" => Some(PURPLE),
        "magenta" | "pink" => Some(MAGENTA),
        "brown" => Some(BROWN),
        _ => None,
    }
}
