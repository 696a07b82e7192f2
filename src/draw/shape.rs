//! Two-point geometric shapes and their normalized render geometry.

use super::color::Color;
use crate::util::{self, Point};
use serde::{Deserialize, Serialize};

/// Stable identity assigned to a shape when its gesture starts.
///
/// Ids are unique within a session and survive until the shape is committed
/// or discarded; they are never reassigned after an undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

/// Shape palette offered by the picker.
///
/// Only the first five kinds have render geometry today; the remaining
/// picker entries normalize to [`Geometry::None`] and draw nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle outline spanning the drag box
    Rectangle,
    /// Circle through the two drag endpoints (diameter = drag length)
    Circle,
    /// Ellipse inscribed in the drag box
    Ellipse,
    /// Straight line between the drag endpoints
    Line,
    /// Isoceles triangle inscribed in the drag box
    Triangle,
    /// Reserved picker entry, no geometry yet
    Arrow,
    /// Reserved picker entry, no geometry yet
    Star,
    /// Reserved picker entry, no geometry yet
    Heart,
    /// Reserved picker entry, no geometry yet
    Pentagon,
    /// Reserved picker entry, no geometry yet
    Hexagon,
}

/// A geometric shape defined by the two endpoints of a drag gesture.
///
/// Geometry (bounding box, center, radii) is always derived from
/// `start`/`end` at render time via [`Shape::normalize`], never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Identity token assigned at gesture start
    pub id: ShapeId,
    /// Which primitive this shape renders as
    pub kind: ShapeKind,
    /// Where the drag began (fixed for the whole gesture)
    pub start: Point,
    /// Current/final drag endpoint
    pub end: Point,
    /// Outline color
    pub color: Color,
    /// Outline width in pixels
    pub stroke_width: f64,
}

impl Shape {
    /// Creates a provisional shape at the gesture's first touch, with
    /// `start == end`.
    pub fn begin(id: ShapeId, kind: ShapeKind, at: Point, color: Color, stroke_width: f64) -> Self {
        Self {
            id,
            kind,
            start: at,
            end: at,
            color,
            stroke_width,
        }
    }

    /// Moves the drag endpoint. `start` and `id` never change.
    pub fn drag(&mut self, to: Point) {
        self.end = to;
    }

    /// Derives the concrete geometry for rendering.
    ///
    /// Kinds without render support yield [`Geometry::None`] rather than
    /// failing, so committed shapes of those kinds are retained (and count
    /// for undo) but draw nothing.
    pub fn normalize(&self) -> Geometry {
        let (x, y, width, height) = util::drag_bounds(self.start, self.end);

        match self.kind {
            ShapeKind::Rectangle => Geometry::Rect {
                x,
                y,
                width,
                height,
            },
            ShapeKind::Circle => {
                let center = util::midpoint(self.start, self.end);
                Geometry::Circle {
                    cx: center.x,
                    cy: center.y,
                    radius: util::distance(self.start, self.end) / 2.0,
                }
            }
            ShapeKind::Ellipse => {
                let center = util::midpoint(self.start, self.end);
                Geometry::Ellipse {
                    cx: center.x,
                    cy: center.y,
                    rx: width / 2.0,
                    ry: height / 2.0,
                }
            }
            ShapeKind::Line => Geometry::Line {
                x1: self.start.x,
                y1: self.start.y,
                x2: self.end.x,
                y2: self.end.y,
            },
            ShapeKind::Triangle => Geometry::Triangle {
                apex: Point::new(x + width / 2.0, y),
                base_left: Point::new(x, y + height),
                base_right: Point::new(x + width, y + height),
            },
            ShapeKind::Arrow
            | ShapeKind::Star
            | ShapeKind::Heart
            | ShapeKind::Pentagon
            | ShapeKind::Hexagon => Geometry::None,
        }
    }
}

/// Concrete geometry derived from a shape's drag endpoints at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Axis-aligned rectangle with top-left corner and non-negative extents
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Circle centered on the drag midpoint
    Circle { cx: f64, cy: f64, radius: f64 },
    /// Axis-aligned ellipse inscribed in the drag box
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
    },
    /// The drag endpoints verbatim
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    /// Apex at the top-center of the drag box, base along its bottom edge
    Triangle {
        apex: Point,
        base_left: Point,
        base_right: Point,
    },
    /// Nothing to draw
    None,
}
