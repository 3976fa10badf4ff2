//! Drawing primitives and SVG output for the Solace icon engine.
//!
//! This crate is the geometry layer that icon renderers build on: colors,
//! points, path data, and shape trees, plus a deterministic SVG writer for
//! export and snapshot testing. It knows nothing about themes or icons;
//! higher layers resolve colors first and hand finished [`ShapeStyle`]s down.
//!
//! # Building a drawing
//!
//! ```
//! use solace_vector::{Color, DrawingTree, Geometry, PathData, Point, Shape, ShapeStyle};
//!
//! let check = PathData::new()
//!     .move_to(Point::new(5.0, 12.5))
//!     .line_to(Point::new(10.0, 17.5))
//!     .line_to(Point::new(19.0, 7.0));
//!
//! let tree = DrawingTree::new(24.0).with_shape(Shape::new(
//!     Geometry::Path(check),
//!     ShapeStyle::stroked(Color::BLACK, 2.0),
//! ));
//!
//! let svg = solace_vector::write_svg(&tree);
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Determinism
//!
//! [`write_svg`] emits byte-identical output for equal trees: fixed attribute
//! order, fixed shape order, and numbers formatted the same way everywhere.
//! Snapshot tests and content-addressed caches rely on this.

mod paint;
mod path;
mod svg;
mod tree;
mod types;

// Drawing types
pub use paint::{LineCap, LineJoin, Paint, ShapeStyle};
pub use path::{PathCommand, PathData};
pub use tree::{DrawingTree, Geometry, Shape};
pub use types::{Color, Point};

// SVG export
pub use svg::write_svg;
