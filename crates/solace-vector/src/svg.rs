//! Deterministic SVG output.
//!
//! [`write_svg`] turns a [`DrawingTree`] into SVG markup with one element
//! per shape. The output is byte-stable for equal trees: fixed element and
//! attribute order, numbers in shortest round-trip form, and no whitespace
//! that depends on anything but the tree. Snapshot tests and download
//! caches key on the exact bytes.
//!
//! Colors are written as uppercase hex (`#RRGGBB`, or `#RRGGBBAA` when the
//! alpha channel is below 1.0); absent paint is written as `none`.

use std::fmt::Write;

use crate::paint::{Paint, ShapeStyle};
use crate::tree::{DrawingTree, Geometry};

/// Render a drawing tree as an SVG 1.1 document string.
pub fn write_svg(tree: &DrawingTree) -> String {
    let mut out = String::with_capacity(256 + tree.shapes.len() * 128);

    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        tree.size, tree.size, tree.view_box, tree.view_box
    );

    for shape in &tree.shapes {
        out.push('\n');
        write_shape(&mut out, &shape.geometry, &shape.style);
    }

    out.push_str("\n</svg>");
    out
}

fn write_shape(out: &mut String, geometry: &Geometry, style: &ShapeStyle) {
    match geometry {
        Geometry::Path(data) => {
            let _ = write!(out, "  <path d=\"{}\"", data.to_svg());
        }
        Geometry::Circle { center, radius } => {
            let _ = write!(
                out,
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
                center.x, center.y, radius
            );
        }
        Geometry::Ellipse { center, rx, ry } => {
            let _ = write!(
                out,
                "  <ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\"",
                center.x, center.y, rx, ry
            );
        }
        Geometry::Rect {
            origin,
            width,
            height,
            corner_radius,
        } => {
            let _ = write!(
                out,
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                origin.x, origin.y, width, height
            );
            if *corner_radius > 0.0 {
                let _ = write!(out, " rx=\"{}\"", corner_radius);
            }
        }
        Geometry::Line { from, to } => {
            let _ = write!(
                out,
                "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
                from.x, from.y, to.x, to.y
            );
        }
    }

    write_style(out, style);
    out.push_str("/>");
}

fn write_style(out: &mut String, style: &ShapeStyle) {
    let _ = write!(out, " fill=\"{}\"", paint_value(&style.fill));

    // Stroke attributes only appear on shapes that actually stroke,
    // keeping fill-only output minimal.
    if let Paint::Solid(color) = &style.stroke {
        let _ = write!(
            out,
            " stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"{}\" stroke-linejoin=\"{}\"",
            color.to_hex(),
            style.stroke_width,
            style.cap.as_str(),
            style.join.as_str()
        );
    }
}

fn paint_value(paint: &Paint) -> String {
    match paint {
        Paint::None => "none".to_string(),
        Paint::Solid(color) => color.to_hex(),
    }
}
