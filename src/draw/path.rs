//! Touch sample interpolation and smooth path construction.
//!
//! Raw touch events arrive at whatever rate the host delivers them. Fast
//! finger motion leaves visible gaps between samples, while a resting
//! finger floods the stream with near-identical ones. [`interpolate`]
//! normalizes a raw sample stream into evenly spaced points, and
//! [`smooth_path`] turns an ordered point list into SVG path data using
//! quadratic segments through sample midpoints.

use crate::util::{Point, distance, midpoint};
use std::fmt::Write;

/// Moves smaller than this on both axes are treated as finger jitter and
/// dropped entirely.
pub const JITTER_THRESHOLD: f64 = 3.0;

/// Moves shorter than this (Euclidean) are appended as-is without
/// subdivision.
pub const SUBDIVISION_THRESHOLD: f64 = 5.0;

/// Target spacing between subdivided samples, in pixels.
pub const SUBDIVISION_SPACING: f64 = 3.0;

/// Expands the move from `last` to `next` into the samples to append.
///
/// - Returns an empty sequence when the move is below
///   [`JITTER_THRESHOLD`] on both axes (the caller appends nothing).
/// - Returns `[next]` for short moves below [`SUBDIVISION_THRESHOLD`].
/// - Otherwise subdivides the straight segment into
///   `floor(distance / 3)` evenly spaced points ending exactly at `next`,
///   so no gap in the rendered stroke is wider than ~3px.
///
/// Pure function; always succeeds for finite inputs.
pub fn interpolate(last: Point, next: Point) -> Vec<Point> {
    let dx = next.x - last.x;
    let dy = next.y - last.y;

    if dx.abs() < JITTER_THRESHOLD && dy.abs() < JITTER_THRESHOLD {
        return Vec::new();
    }

    let dist = distance(last, next);
    if dist < SUBDIVISION_THRESHOLD {
        return vec![next];
    }

    let steps = (dist / SUBDIVISION_SPACING).floor() as usize;
    let mut samples = Vec::with_capacity(steps);
    for i in 1..steps {
        let t = i as f64 / steps as f64;
        samples.push(Point::new(last.x + dx * t, last.y + dy * t));
    }
    // The final sample is the raw endpoint, never a lerp result.
    samples.push(next);
    samples
}

/// Builds SVG path data from an ordered point sequence.
///
/// The first point becomes a move-to anchor. Each interior point `i` emits
/// a quadratic segment with `points[i]` as control point, ending at the
/// midpoint of `points[i]` and `points[i + 1]`; the final segment is a
/// straight line to the last point. Fewer than two points produce an empty
/// string (such strokes render as dots instead).
///
/// Output is byte-identical for identical input sequences.
pub fn smooth_path(points: &[Point]) -> String {
    if points.len() < 2 {
        return String::new();
    }

    let mut path = format!("M {} {}", points[0].x, points[0].y);

    for i in 1..points.len() {
        if i < points.len() - 1 {
            let m = midpoint(points[i], points[i + 1]);
            let _ = write!(path, " Q {} {}, {} {}", points[i].x, points[i].y, m.x, m.y);
        } else {
            let _ = write!(path, " L {} {}", points[i].x, points[i].y);
        }
    }

    path
}
