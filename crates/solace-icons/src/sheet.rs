//! The authoring surface for icon renderers.
//!
//! Every built-in renderer draws on an [`IconSheet`]: a 24-unit design
//! grid plus the request's [`ResolvedProps`]. The sheet decides how each
//! element reacts to the variant so individual renderers do not repeat
//! that logic:
//!
//! - **Variant-driven** elements ([`path`](IconSheet::path),
//!   [`circle`](IconSheet::circle), [`ellipse`](IconSheet::ellipse),
//!   [`rect`](IconSheet::rect)) take the composed fill/stroke pair as is:
//!   stroked when outline, solid when filled.
//! - **Always-stroked** elements ([`line`](IconSheet::line),
//!   [`stroke_path`](IconSheet::stroke_path)) keep a stroke in the
//!   resolved color under both variants. Hairline details like clock
//!   hands would otherwise vanish from the filled variant.
//! - **Always-filled** dots ([`dot`](IconSheet::dot)) keep a solid fill
//!   in the resolved color under both variants.
//! - **Contrast** elements ([`contrast_dot`](IconSheet::contrast_dot),
//!   [`contrast_ring`](IconSheet::contrast_ring),
//!   [`contrast_line`](IconSheet::contrast_line),
//!   [`contrast_stroke_path`](IconSheet::contrast_stroke_path)) switch to
//!   white when the variant is filled, so details stay visible against a
//!   solid glyph body (the eyes of a mood face, the exclamation mark of
//!   an alert).

use solace_theme::{ResolvedProps, Variant};
use solace_vector::{
    Color, DrawingTree, Geometry, PathData, Point, Shape, ShapeStyle,
};

/// The design grid all built-in icons are authored on.
pub const ICON_GRID: f32 = 24.0;

/// A drawing in progress: the design grid plus the request's resolved
/// props.
#[derive(Debug, Clone)]
pub struct IconSheet {
    props: ResolvedProps,
    tree: DrawingTree,
}

impl IconSheet {
    /// Start a sheet for one render call.
    pub fn new(props: &ResolvedProps) -> Self {
        Self {
            props: *props,
            tree: DrawingTree {
                size: props.size,
                view_box: ICON_GRID,
                shapes: Vec::new(),
            },
        }
    }

    /// Finish the sheet.
    pub fn build(self) -> DrawingTree {
        self.tree
    }

    fn variant_style(&self) -> ShapeStyle {
        ShapeStyle {
            fill: self.props.fill,
            stroke: self.props.stroke,
            stroke_width: self.props.stroke_width,
            ..ShapeStyle::default()
        }
    }

    fn contrast_color(&self) -> Color {
        match self.props.variant {
            Variant::Filled => Color::WHITE,
            Variant::Outline => self.props.color(),
        }
    }

    fn push(mut self, geometry: Geometry, style: ShapeStyle) -> Self {
        self.tree.push(Shape::new(geometry, style));
        self
    }

    // ------------------------------------------------------------------
    // Variant-driven elements
    // ------------------------------------------------------------------

    /// A path drawn with the variant's fill/stroke pair.
    pub fn path(self, data: PathData) -> Self {
        let style = self.variant_style();
        self.push(Geometry::Path(data), style)
    }

    /// A circle drawn with the variant's fill/stroke pair.
    pub fn circle(self, cx: f32, cy: f32, radius: f32) -> Self {
        let style = self.variant_style();
        self.push(
            Geometry::Circle {
                center: Point::new(cx, cy),
                radius,
            },
            style,
        )
    }

    /// An ellipse drawn with the variant's fill/stroke pair.
    pub fn ellipse(self, cx: f32, cy: f32, rx: f32, ry: f32) -> Self {
        let style = self.variant_style();
        self.push(
            Geometry::Ellipse {
                center: Point::new(cx, cy),
                rx,
                ry,
            },
            style,
        )
    }

    /// A rectangle drawn with the variant's fill/stroke pair.
    pub fn rect(self, x: f32, y: f32, width: f32, height: f32, corner_radius: f32) -> Self {
        let style = self.variant_style();
        self.push(
            Geometry::Rect {
                origin: Point::new(x, y),
                width,
                height,
                corner_radius,
            },
            style,
        )
    }

    // ------------------------------------------------------------------
    // Always-stroked elements
    // ------------------------------------------------------------------

    /// A line stroked in the resolved color under both variants.
    pub fn line(self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let style = ShapeStyle::stroked(self.props.color(), self.props.stroke_width);
        self.push(
            Geometry::Line {
                from: Point::new(x1, y1),
                to: Point::new(x2, y2),
            },
            style,
        )
    }

    /// A path stroked in the resolved color under both variants.
    pub fn stroke_path(self, data: PathData) -> Self {
        let style = ShapeStyle::stroked(self.props.color(), self.props.stroke_width);
        self.push(Geometry::Path(data), style)
    }

    // ------------------------------------------------------------------
    // Always-filled elements
    // ------------------------------------------------------------------

    /// A dot filled in the resolved color under both variants.
    pub fn dot(self, cx: f32, cy: f32, radius: f32) -> Self {
        let style = ShapeStyle::filled(self.props.color());
        self.push(
            Geometry::Circle {
                center: Point::new(cx, cy),
                radius,
            },
            style,
        )
    }

    // ------------------------------------------------------------------
    // Contrast elements (invert against a filled body)
    // ------------------------------------------------------------------

    /// A dot that fills white when the variant is filled.
    pub fn contrast_dot(self, cx: f32, cy: f32, radius: f32) -> Self {
        let style = ShapeStyle::filled(self.contrast_color());
        self.push(
            Geometry::Circle {
                center: Point::new(cx, cy),
                radius,
            },
            style,
        )
    }

    /// A circle outline that strokes white when the variant is filled.
    pub fn contrast_ring(self, cx: f32, cy: f32, radius: f32) -> Self {
        let style = ShapeStyle::stroked(self.contrast_color(), self.props.stroke_width);
        self.push(
            Geometry::Circle {
                center: Point::new(cx, cy),
                radius,
            },
            style,
        )
    }

    /// A line that strokes white when the variant is filled.
    pub fn contrast_line(self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let style = ShapeStyle::stroked(self.contrast_color(), self.props.stroke_width);
        self.push(
            Geometry::Line {
                from: Point::new(x1, y1),
                to: Point::new(x2, y2),
            },
            style,
        )
    }

    /// A path that strokes white when the variant is filled.
    pub fn contrast_stroke_path(self, data: PathData) -> Self {
        let style = ShapeStyle::stroked(self.contrast_color(), self.props.stroke_width);
        self.push(Geometry::Path(data), style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_theme::{ThemeContext, TherapeuticTheme};
    use solace_vector::Paint;

    fn props(variant: Variant) -> ResolvedProps {
        ResolvedProps::derive(
            24.0,
            2.0,
            None,
            Some(TherapeuticTheme::Calming),
            variant,
            &ThemeContext::standard(),
        )
    }

    #[test]
    fn variant_circle_strokes_under_outline() {
        let tree = IconSheet::new(&props(Variant::Outline))
            .circle(12.0, 12.0, 10.0)
            .build();

        let style = tree.shapes[0].style;
        assert!(style.fill.is_none());
        assert_eq!(style.stroke.as_solid().unwrap().to_hex(), "#4A90B8");
    }

    #[test]
    fn variant_circle_fills_under_filled() {
        let tree = IconSheet::new(&props(Variant::Filled))
            .circle(12.0, 12.0, 10.0)
            .build();

        let style = tree.shapes[0].style;
        assert_eq!(style.fill.as_solid().unwrap().to_hex(), "#4A90B8");
        assert!(style.stroke.is_none());
    }

    #[test]
    fn line_keeps_its_stroke_under_filled() {
        let tree = IconSheet::new(&props(Variant::Filled))
            .line(12.0, 6.0, 12.0, 12.0)
            .build();

        let style = tree.shapes[0].style;
        assert_eq!(style.stroke.as_solid().unwrap().to_hex(), "#4A90B8");
        assert_eq!(style.stroke_width, 2.0);
    }

    #[test]
    fn contrast_dot_inverts_only_when_filled() {
        let filled = IconSheet::new(&props(Variant::Filled))
            .contrast_dot(12.0, 16.0, 1.0)
            .build();
        assert_eq!(filled.shapes[0].style.fill, Paint::Solid(Color::WHITE));

        let outline = IconSheet::new(&props(Variant::Outline))
            .contrast_dot(12.0, 16.0, 1.0)
            .build();
        assert_eq!(
            outline.shapes[0].style.fill.as_solid().unwrap().to_hex(),
            "#4A90B8"
        );
    }

    #[test]
    fn sheet_uses_the_design_grid_and_request_size() {
        let mut p = props(Variant::Outline);
        p.size = 48.0;
        let tree = IconSheet::new(&p).build();
        assert_eq!(tree.size, 48.0);
        assert_eq!(tree.view_box, ICON_GRID);
    }
}
