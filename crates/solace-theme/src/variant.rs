//! Variant composition.
//!
//! A variant is how one authored glyph becomes two shipped styles: the
//! same geometry draws as an outline or as a solid fill depending on which
//! side of the [`PaintPair`] carries the resolved color. Renderers receive
//! the finished [`ResolvedProps`] and never look at the context themselves.

use std::fmt;

use solace_vector::{Color, Paint};

use crate::context::ThemeContext;
use crate::resolver::{resolve_color, FALLBACK_COLOR};
use crate::therapeutic::TherapeuticTheme;

/// Icon rendering variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Variant {
    /// Stroked geometry, transparent interior. The default everywhere.
    #[default]
    Outline,
    /// Solid geometry, no stroke.
    Filled,
}

impl Variant {
    /// The kebab-case name used in settings files and test identifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::Filled => "filled",
        }
    }

    /// Parse a kebab-case variant name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "outline" => Some(Self::Outline),
            "filled" => Some(Self::Filled),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fill/stroke pair produced by composing a color with a variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintPair {
    pub fill: Paint,
    pub stroke: Paint,
}

/// Compose a resolved color with a variant.
///
/// `Filled` puts the color in the fill and leaves the stroke empty;
/// `Outline` does the reverse. Exactly one side ever carries paint, which
/// is what lets [`ResolvedProps::color`] recover the resolved color
/// without re-running the cascade.
pub fn compose(resolved: Color, variant: Variant) -> PaintPair {
    match variant {
        Variant::Filled => PaintPair {
            fill: Paint::Solid(resolved),
            stroke: Paint::None,
        },
        Variant::Outline => PaintPair {
            fill: Paint::None,
            stroke: Paint::Solid(resolved),
        },
    }
}

/// Everything a renderer needs for one render call.
///
/// Derived once per request and passed by reference; never cached, never
/// shared across calls. Renderers treat it as read-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedProps {
    /// Target raster size in pixels.
    pub size: f32,
    /// Stroke width in grid units.
    pub stroke_width: f32,
    /// Fill paint after variant composition.
    pub fill: Paint,
    /// Stroke paint after variant composition.
    pub stroke: Paint,
    /// The variant that produced the paints.
    pub variant: Variant,
}

impl ResolvedProps {
    /// Run the color cascade and variant composition for one request.
    pub fn derive(
        size: f32,
        stroke_width: f32,
        explicit: Option<Color>,
        theme: Option<TherapeuticTheme>,
        variant: Variant,
        context: &ThemeContext,
    ) -> Self {
        let resolved = resolve_color(explicit, theme, context);
        let paints = compose(resolved, variant);
        Self {
            size,
            stroke_width,
            fill: paints.fill,
            stroke: paints.stroke,
            variant,
        }
    }

    /// The resolved color, regardless of which side of the pair holds it.
    pub fn color(&self) -> Color {
        self.fill
            .as_solid()
            .or_else(|| self.stroke.as_solid())
            .unwrap_or(FALLBACK_COLOR)
    }
}
