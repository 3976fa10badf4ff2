//! The icon front door.
//!
//! [`render`] is what application code calls: build an [`IconRequest`],
//! hand it a theme context, get back a [`RenderedIcon`]. Rendering is
//! total - an unknown name substitutes the fallback glyph and logs a
//! warning rather than failing, because a missing icon should show up in
//! logs and on screen, not crash a session mid-exercise.

use solace_theme::{
    IconSize, ResolvedProps, ThemeContext, TherapeuticTheme, Variant, DEFAULT_STROKE_WIDTH,
};
use solace_vector::{write_svg, Color, DrawingTree};

use crate::category::IconCategory;
use crate::name::IconName;
use crate::registry::{builtin, IconRegistry};
use crate::sheet::ICON_GRID;

/// The glyph substituted for unknown names.
pub const FALLBACK_ICON: &str = IconName::HELP_CIRCLE;

/// A render request.
///
/// Only the name is required; everything else has the documented default
/// (standard size, outline variant, collection-agnostic color cascade).
///
/// # Examples
///
/// ```
/// use solace_icons::{render, IconRequest};
/// use solace_theme::{IconSize, ThemeContext, TherapeuticTheme, Variant};
///
/// let request = IconRequest::new("heart")
///     .with_theme(TherapeuticTheme::Nurturing)
///     .with_variant(Variant::Filled)
///     .with_size(IconSize::Lg);
///
/// let icon = render(&request, &ThemeContext::standard());
/// assert!(!icon.fallback_used);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IconRequest {
    name: IconName,
    size: f32,
    color: Option<Color>,
    theme: Option<TherapeuticTheme>,
    variant: Variant,
    stroke_width: f32,
    label: Option<String>,
    test_id: Option<String>,
}

impl IconRequest {
    /// Create a request for an icon by name.
    pub fn new(name: impl Into<IconName>) -> Self {
        Self {
            name: name.into(),
            size: IconSize::Md.as_pixels(),
            color: None,
            theme: None,
            variant: Variant::default(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            label: None,
            test_id: None,
        }
    }

    /// Set the size from a preset.
    pub fn with_size(mut self, size: IconSize) -> Self {
        self.size = size.as_pixels();
        self
    }

    /// Set an exact pixel size.
    pub fn with_size_pixels(mut self, pixels: f32) -> Self {
        self.size = pixels;
        self
    }

    /// Set an explicit color, short-circuiting the theme cascade.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the therapeutic theme to resolve through.
    pub fn with_theme(mut self, theme: TherapeuticTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the stroke width in grid units.
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Attach an accessibility label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attach an explicit test identifier, replacing the derived one.
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    /// The requested icon name.
    pub fn name(&self) -> &IconName {
        &self.name
    }

    /// The requested pixel size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The explicit color, if any.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// The requested theme, if any.
    pub fn theme(&self) -> Option<TherapeuticTheme> {
        self.theme
    }

    /// The requested variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The stroke width in grid units.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// The accessibility label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The explicit test identifier, if any.
    pub fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref()
    }
}

/// The result of a render call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedIcon {
    /// The name that actually rendered. Differs from the request's name
    /// exactly when `fallback_used` is set.
    pub name: IconName,
    /// The rendered icon's category.
    pub category: IconCategory,
    /// The drawing.
    pub tree: DrawingTree,
    /// Stable identifier for UI tests: the caller's, or
    /// `{category}-icon-{name}` derived from what rendered.
    pub test_id: String,
    /// Whether the fallback glyph was substituted.
    pub fallback_used: bool,
}

impl RenderedIcon {
    /// Render the drawing as an SVG document string.
    pub fn to_svg(&self) -> String {
        write_svg(&self.tree)
    }
}

/// Render against the built-in registry.
pub fn render(request: &IconRequest, context: &ThemeContext) -> RenderedIcon {
    render_with(request, context, builtin())
}

/// Render against a caller-supplied registry.
///
/// Unknown names substitute [`FALLBACK_ICON`] from the same registry. If
/// the registry lacks the fallback too (possible with hand-built
/// registries), the result is an empty drawing at the requested size -
/// logged loudly both times, but still never a failure.
pub fn render_with(
    request: &IconRequest,
    context: &ThemeContext,
    registry: &IconRegistry,
) -> RenderedIcon {
    let props = ResolvedProps::derive(
        request.size,
        request.stroke_width,
        request.color,
        request.theme,
        request.variant,
        context,
    );

    let (def, fallback_used) = match registry.resolve(&request.name) {
        Some(def) => (Some(def), false),
        None => {
            tracing::warn!(
                target: "solace::icon",
                icon = %request.name,
                fallback = FALLBACK_ICON,
                "unknown icon name, substituting fallback glyph"
            );
            let fallback = registry.resolve(&IconName::new(FALLBACK_ICON));
            if fallback.is_none() {
                tracing::warn!(
                    target: "solace::icon",
                    fallback = FALLBACK_ICON,
                    "registry has no fallback glyph, rendering empty"
                );
            }
            (fallback, true)
        }
    };

    match def {
        Some(def) => {
            let name = def.name().clone();
            let category = registry
                .category_of(&name)
                .unwrap_or(IconCategory::Interface);
            let test_id = request
                .test_id
                .clone()
                .unwrap_or_else(|| format!("{}-icon-{}", category.as_str(), name));
            RenderedIcon {
                name,
                category,
                tree: def.render(&props),
                test_id,
                fallback_used,
            }
        }
        None => {
            let test_id = request
                .test_id
                .clone()
                .unwrap_or_else(|| format!("icon-{}", request.name));
            RenderedIcon {
                name: request.name.clone(),
                category: IconCategory::Interface,
                tree: DrawingTree {
                    size: request.size,
                    view_box: ICON_GRID,
                    shapes: Vec::new(),
                },
                test_id,
                fallback_used,
            }
        }
    }
}
