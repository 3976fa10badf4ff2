//! Cascading color resolution.

use solace_vector::Color;

use crate::context::ThemeContext;
use crate::therapeutic::TherapeuticTheme;

/// The color of last resort, a calming blue matching `#4A90B8`.
///
/// Every resolution path terminates here, so icons stay visible even
/// against an empty [`ThemeContext`]. Kept bit-identical to
/// `Color::from_hex("#4A90B8")` so tests can compare either form.
pub const FALLBACK_COLOR: Color =
    Color::new(74.0 / 255.0, 144.0 / 255.0, 184.0 / 255.0, 1.0);

/// Resolve the single color a render call will draw with.
///
/// The cascade is ordered and first-match-wins:
///
/// 1. An explicit color always wins, untouched.
/// 2. A requested theme resolves through its scale in the context,
///    preferring shade 600 and degrading to 500.
/// 3. The context's primary scale, same shade preference.
/// 4. [`FALLBACK_COLOR`].
///
/// Total over its whole domain: sparse scales, missing themes, and empty
/// contexts all degrade down the cascade instead of erroring. No side
/// effects; identical inputs give identical output.
pub fn resolve_color(
    explicit: Option<Color>,
    theme: Option<TherapeuticTheme>,
    context: &ThemeContext,
) -> Color {
    if let Some(color) = explicit {
        return color;
    }

    if let Some(theme) = theme
        && let Some(scale) = context.therapeutic_scale(theme)
        && let Some(color) = scale.shade(600).or_else(|| scale.shade(500))
    {
        return color;
    }

    let primary = &context.colors.primary;
    primary
        .shade(600)
        .or_else(|| primary.shade(500))
        .unwrap_or(FALLBACK_COLOR)
}
