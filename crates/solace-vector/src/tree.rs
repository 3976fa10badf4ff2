//! Shapes and drawing trees.
//!
//! A [`DrawingTree`] is the output of every icon renderer: a flat, ordered
//! list of styled shapes on a square design grid. Order is paint order
//! (later shapes draw over earlier ones), and equality is structural, so
//! two renders of the same request compare equal.

use crate::paint::ShapeStyle;
use crate::path::PathData;
use crate::types::Point;

/// Geometric primitives a shape can carry.
///
/// Circles, ellipses, rects, and lines stay first-class rather than being
/// lowered to paths: they map to dedicated SVG elements and keep authored
/// geometry inspectable in tests.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    /// An arbitrary path.
    Path(PathData),
    /// A circle.
    Circle { center: Point, radius: f32 },
    /// An axis-aligned ellipse.
    Ellipse { center: Point, rx: f32, ry: f32 },
    /// An axis-aligned rectangle, optionally with rounded corners.
    Rect {
        origin: Point,
        width: f32,
        height: f32,
        /// Corner radius; 0.0 means square corners.
        corner_radius: f32,
    },
    /// A straight line segment. Only ever stroked.
    Line { from: Point, to: Point },
}

/// One styled primitive in a drawing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub geometry: Geometry,
    pub style: ShapeStyle,
}

impl Shape {
    /// Create a new shape.
    pub fn new(geometry: Geometry, style: ShapeStyle) -> Self {
        Self { geometry, style }
    }
}

/// A complete drawing: styled shapes on a square design grid.
///
/// `view_box` is the grid the geometry was authored on (24.0 for the
/// built-in icon set); `size` is the target raster size in pixels. The
/// two are independent, which is how one authored glyph serves every
/// size preset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawingTree {
    /// Target raster size in pixels (width and height).
    pub size: f32,
    /// Design grid extent; the viewBox is `0 0 view_box view_box`.
    pub view_box: f32,
    /// Shapes in paint order.
    pub shapes: Vec<Shape>,
}

impl DrawingTree {
    /// Create an empty tree where the raster size equals the design grid.
    pub fn new(size: f32) -> Self {
        Self {
            size,
            view_box: size,
            shapes: Vec::new(),
        }
    }

    /// Set the design grid extent.
    pub fn with_view_box(mut self, view_box: f32) -> Self {
        self.view_box = view_box;
        self
    }

    /// Append a shape, returning the tree for chaining.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Append a shape in place.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Check if the tree has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of shapes in the tree.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Paint;
    use crate::types::Color;

    #[test]
    fn new_tree_uses_size_as_view_box() {
        let tree = DrawingTree::new(24.0);
        assert_eq!(tree.size, 24.0);
        assert_eq!(tree.view_box, 24.0);
        assert!(tree.is_empty());
    }

    #[test]
    fn view_box_is_independent_of_size() {
        let tree = DrawingTree::new(32.0).with_view_box(24.0);
        assert_eq!(tree.size, 32.0);
        assert_eq!(tree.view_box, 24.0);
    }

    #[test]
    fn equal_trees_compare_equal() {
        let build = || {
            DrawingTree::new(24.0).with_shape(Shape::new(
                Geometry::Circle {
                    center: Point::new(12.0, 12.0),
                    radius: 10.0,
                },
                ShapeStyle::stroked(Color::BLACK, 2.0),
            ))
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn shapes_keep_paint_order() {
        let mut tree = DrawingTree::new(24.0);
        tree.push(Shape::new(
            Geometry::Circle {
                center: Point::ZERO,
                radius: 1.0,
            },
            ShapeStyle::filled(Color::BLACK),
        ));
        tree.push(Shape::new(
            Geometry::Line {
                from: Point::ZERO,
                to: Point::new(1.0, 1.0),
            },
            ShapeStyle::stroked(Color::WHITE, 1.0),
        ));

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.shapes[1].style.stroke, Paint::Solid(Color::WHITE));
    }
}
