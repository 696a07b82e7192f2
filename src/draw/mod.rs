//! Drawing data model: colors, paths, strokes, shapes, scenes, and the SVG
//! renderer.

pub mod color;
pub mod path;
pub mod render;
pub mod scene;
pub mod shape;
pub mod stroke;

pub use color::Color;
pub use render::Provisional;
pub use scene::{Background, FitMode, Scene};
pub use shape::{Geometry, Shape, ShapeId, ShapeKind};
pub use stroke::{Stroke, StrokeBuffer, StrokeTool};
