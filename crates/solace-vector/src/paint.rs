//! Paint styles for filling and stroking shapes.
//!
//! Icon geometry carries fully resolved paint: by the time a shape reaches
//! this crate, every theme and variant decision has already been made, so
//! paint is either a concrete color or explicitly absent.

use crate::types::Color;

/// A paint source for a fill or a stroke.
///
/// `None` is a real value, not a missing one: an outline icon has
/// `fill: Paint::None`, and the SVG writer emits `fill="none"` for it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Paint {
    /// No paint; the corresponding fill or stroke is not drawn.
    #[default]
    None,
    /// Solid color.
    Solid(Color),
}

impl Paint {
    /// Create a solid color paint.
    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    /// Check if this paint draws nothing.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Get the solid color, if any.
    #[inline]
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Self::Solid(c) => Some(*c),
            Self::None => None,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// Line cap style.
///
/// Defaults to `Round`: the icon grid is authored around soft terminals,
/// and every stroked glyph in the set uses round caps unless it opts out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineCap {
    /// Flat cap at the exact endpoint.
    Butt,
    /// Rounded cap extending past the endpoint.
    #[default]
    Round,
    /// Square cap extending past the endpoint.
    Square,
}

impl LineCap {
    /// The SVG `stroke-linecap` keyword for this cap.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineJoin {
    /// Sharp corner.
    Miter,
    /// Rounded corner.
    #[default]
    Round,
    /// Beveled corner.
    Bevel,
}

impl LineJoin {
    /// The SVG `stroke-linejoin` keyword for this join.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// Complete visual style for one shape: fill, stroke, and stroke geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeStyle {
    /// Fill paint.
    pub fill: Paint,
    /// Stroke paint.
    pub stroke: Paint,
    /// Stroke width in grid units. Ignored when `stroke` is `None`.
    pub stroke_width: f32,
    /// Line cap style.
    pub cap: LineCap,
    /// Line join style.
    pub join: LineJoin,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Paint::None,
            stroke: Paint::None,
            stroke_width: 0.0,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }
}

impl ShapeStyle {
    /// Create a fill-only style.
    #[inline]
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Paint::Solid(color),
            ..Default::default()
        }
    }

    /// Create a stroke-only style with round caps and joins.
    #[inline]
    pub fn stroked(color: Color, width: f32) -> Self {
        Self {
            stroke: Paint::Solid(color),
            stroke_width: width,
            ..Default::default()
        }
    }

    /// Set the fill paint.
    #[inline]
    pub fn with_fill(mut self, fill: impl Into<Paint>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Set the stroke paint.
    #[inline]
    pub fn with_stroke(mut self, stroke: impl Into<Paint>, width: f32) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = width;
        self
    }

    /// Set the line cap style.
    #[inline]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set the line join style.
    #[inline]
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// Check if this style draws anything at all.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.fill.is_none() || !self.stroke.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_style_has_no_stroke() {
        let style = ShapeStyle::filled(Color::BLACK);
        assert_eq!(style.fill, Paint::Solid(Color::BLACK));
        assert!(style.stroke.is_none());
        assert!(style.is_visible());
    }

    #[test]
    fn stroked_style_defaults_to_round_caps() {
        let style = ShapeStyle::stroked(Color::WHITE, 2.0);
        assert!(style.fill.is_none());
        assert_eq!(style.stroke_width, 2.0);
        assert_eq!(style.cap, LineCap::Round);
        assert_eq!(style.join, LineJoin::Round);
    }

    #[test]
    fn empty_style_is_invisible() {
        assert!(!ShapeStyle::default().is_visible());
    }

    #[test]
    fn paint_from_color_is_solid() {
        let paint: Paint = Color::BLACK.into();
        assert_eq!(paint.as_solid(), Some(Color::BLACK));
    }
}
