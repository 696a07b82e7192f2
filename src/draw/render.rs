//! SVG rendering of scenes and live gesture previews.
//!
//! Hosts hand the produced document to whatever displays or exports it;
//! the engine itself never rasterizes. Output is deterministic: the same
//! scene and preview always produce the same bytes.

use super::color::Color;
use super::scene::{Background, FitMode, Scene};
use super::shape::{Geometry, Shape};
use super::stroke::StrokeTool;
use crate::util::Point;
use std::fmt::Write;

/// Live entity under the user's finger, drawn above all committed content.
#[derive(Debug, Clone, Copy)]
pub enum Provisional<'a> {
    /// An in-progress freehand stroke
    Stroke {
        points: &'a [Point],
        color: Color,
        thickness: f64,
        tool: StrokeTool,
    },
    /// An in-progress shape drag
    Shape(&'a Shape),
}

/// Renders the scene into a standalone SVG document.
///
/// Layering, bottom to top: canvas background color, optional background
/// image, every committed stroke in append order, every committed shape in
/// append order, then the live preview if any. Eraser strokes are drawn in
/// the canvas background color.
pub fn render_scene(
    scene: &Scene,
    background_color: Color,
    width: f64,
    height: f64,
    preview: Option<Provisional<'_>>,
) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    );

    let _ = writeln!(
        svg,
        "  <rect width=\"{width}\" height=\"{height}\" fill=\"{}\"/>",
        background_color.to_hex()
    );

    if let Some(background) = &scene.background {
        write_background(&mut svg, background, width, height);
    }

    for stroke in &scene.strokes {
        write_stroke(
            &mut svg,
            &stroke.points,
            &stroke.path,
            stroke.color,
            stroke.thickness,
            stroke.tool,
            background_color,
        );
    }

    for shape in &scene.shapes {
        write_shape(&mut svg, shape);
    }

    match preview {
        Some(Provisional::Stroke {
            points,
            color,
            thickness,
            tool,
        }) => {
            let path = super::path::smooth_path(points);
            write_stroke(&mut svg, points, &path, color, thickness, tool, background_color);
        }
        Some(Provisional::Shape(shape)) => write_shape(&mut svg, shape),
        None => {}
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_background(svg: &mut String, background: &Background, width: f64, height: f64) {
    let w = width * background.scale;
    let h = height * background.scale;
    let x = (width - w) / 2.0;
    let y = (height - h) / 2.0;
    let ratio = match background.fit {
        FitMode::Contain => "xMidYMid meet",
        FitMode::Cover => "xMidYMid slice",
    };
    let _ = writeln!(
        svg,
        "  <image href=\"{}\" x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" preserveAspectRatio=\"{ratio}\"/>",
        escape_xml(&background.uri)
    );
}

fn write_stroke(
    svg: &mut String,
    points: &[Point],
    path: &str,
    color: Color,
    thickness: f64,
    tool: StrokeTool,
    background_color: Color,
) {
    let color = match tool {
        StrokeTool::Pencil => color,
        StrokeTool::Eraser => background_color,
    };

    match points {
        [] => {}
        [point] => {
            // Single-sample tap: a filled dot of diameter = thickness.
            let _ = writeln!(
                svg,
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                point.x,
                point.y,
                thickness / 2.0,
                color.to_hex()
            );
        }
        _ => {
            let _ = writeln!(
                svg,
                "  <path d=\"{path}\" stroke=\"{}\" stroke-width=\"{thickness}\" stroke-linecap=\"round\" stroke-linejoin=\"round\" fill=\"none\"/>",
                color.to_hex()
            );
        }
    }
}

fn write_shape(svg: &mut String, shape: &Shape) {
    let color = shape.color.to_hex();
    let stroke_width = shape.stroke_width;

    match shape.normalize() {
        Geometry::Rect {
            x,
            y,
            width,
            height,
        } => {
            let _ = writeln!(
                svg,
                "  <rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" stroke=\"{color}\" stroke-width=\"{stroke_width}\" fill=\"none\"/>"
            );
        }
        Geometry::Circle { cx, cy, radius } => {
            let _ = writeln!(
                svg,
                "  <circle cx=\"{cx}\" cy=\"{cy}\" r=\"{radius}\" stroke=\"{color}\" stroke-width=\"{stroke_width}\" fill=\"none\"/>"
            );
        }
        Geometry::Ellipse { cx, cy, rx, ry } => {
            let _ = writeln!(
                svg,
                "  <ellipse cx=\"{cx}\" cy=\"{cy}\" rx=\"{rx}\" ry=\"{ry}\" stroke=\"{color}\" stroke-width=\"{stroke_width}\" fill=\"none\"/>"
            );
        }
        Geometry::Line { x1, y1, x2, y2 } => {
            let _ = writeln!(
                svg,
                "  <line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{color}\" stroke-width=\"{stroke_width}\" stroke-linecap=\"round\"/>"
            );
        }
        Geometry::Triangle {
            apex,
            base_left,
            base_right,
        } => {
            let _ = writeln!(
                svg,
                "  <polygon points=\"{},{} {},{} {},{}\" stroke=\"{color}\" stroke-width=\"{stroke_width}\" stroke-linejoin=\"round\" fill=\"none\"/>",
                apex.x, apex.y, base_left.x, base_left.y, base_right.x, base_right.y
            );
        }
        Geometry::None => {}
    }
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, WHITE};
    use crate::draw::scene::Background;
    use crate::draw::shape::{ShapeId, ShapeKind};
    use crate::draw::stroke::StrokeBuffer;

    fn scene_with_one_of_each() -> Scene {
        let mut scene = Scene::new();

        let mut buffer = StrokeBuffer::begin(Point::new(0.0, 0.0));
        buffer.extend(Point::new(20.0, 20.0));
        scene.push_stroke(buffer.commit(BLACK, 5.0, StrokeTool::Pencil));

        let mut shape = Shape::begin(
            ShapeId(1),
            ShapeKind::Circle,
            Point::new(0.0, 0.0),
            RED,
            2.0,
        );
        shape.drag(Point::new(10.0, 0.0));
        scene.push_shape(shape);

        scene
    }

    #[test]
    fn document_layers_strokes_under_shapes() {
        let svg = render_scene(&scene_with_one_of_each(), WHITE, 100.0, 100.0, None);

        let path_at = svg.find("<path").expect("stroke path present");
        let circle_at = svg.find("<circle").expect("shape circle present");
        assert!(path_at < circle_at);
        assert!(svg.contains("r=\"5\""));
    }

    #[test]
    fn eraser_strokes_take_the_background_color() {
        let mut scene = Scene::new();
        let mut buffer = StrokeBuffer::begin(Point::new(0.0, 0.0));
        buffer.extend(Point::new(30.0, 0.0));
        scene.push_stroke(buffer.commit(RED, 8.0, StrokeTool::Eraser));

        let svg = render_scene(&scene, WHITE, 100.0, 100.0, None);
        assert!(svg.contains("stroke=\"#FFFFFF\""));
        assert!(!svg.contains("stroke=\"#FF0000\""));
    }

    #[test]
    fn tap_renders_as_a_dot() {
        let mut scene = Scene::new();
        scene.push_stroke(StrokeBuffer::begin(Point::new(7.0, 9.0)).commit(
            BLACK,
            6.0,
            StrokeTool::Pencil,
        ));

        let svg = render_scene(&scene, WHITE, 100.0, 100.0, None);
        assert!(svg.contains("<circle cx=\"7\" cy=\"9\" r=\"3\" fill=\"#000000\"/>"));
    }

    #[test]
    fn background_image_is_under_all_strokes() {
        let mut scene = scene_with_one_of_each();
        scene.set_background(Background::new("gallery://42", 1.0, FitMode::Contain));

        let svg = render_scene(&scene, WHITE, 100.0, 100.0, None);
        let image_at = svg.find("<image").expect("background image present");
        assert!(image_at < svg.find("<path").unwrap());
        assert!(svg.contains("preserveAspectRatio=\"xMidYMid meet\""));
    }

    #[test]
    fn uri_is_xml_escaped() {
        let mut scene = Scene::new();
        scene.set_background(Background::new(
            "https://host/img?w=10&h=10",
            1.0,
            FitMode::Cover,
        ));

        let svg = render_scene(&scene, WHITE, 100.0, 100.0, None);
        assert!(svg.contains("img?w=10&amp;h=10"));
    }

    #[test]
    fn preview_draws_on_top() {
        let scene = scene_with_one_of_each();
        let points = [Point::new(1.0, 1.0), Point::new(9.0, 9.0)];
        let svg = render_scene(
            &scene,
            WHITE,
            100.0,
            100.0,
            Some(Provisional::Stroke {
                points: &points,
                color: RED,
                thickness: 2.0,
                tool: StrokeTool::Pencil,
            }),
        );

        let preview_at = svg.rfind("<path").unwrap();
        assert!(preview_at > svg.find("<circle").unwrap());
    }

    #[test]
    fn rendering_is_deterministic() {
        let scene = scene_with_one_of_each();
        assert_eq!(
            render_scene(&scene, WHITE, 100.0, 100.0, None),
            render_scene(&scene, WHITE, 100.0, 100.0, None)
        );
    }
}
