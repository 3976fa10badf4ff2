//! Accessibility advisories.
//!
//! Validation is advisory: it reports problems a request will cause for
//! assistive technology or touch interaction, and the host decides what
//! to do with them. Nothing here blocks rendering.

use std::fmt;

use crate::icon::IconRequest;
use crate::name::IconName;

/// Minimum recommended touch target size in pixels, per the mobile
/// accessibility guidelines the app follows.
pub const MIN_TOUCH_TARGET: f32 = 44.0;

/// One advisory about a render request.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessibilityWarning {
    /// The icon is smaller than the recommended touch target. Fine for
    /// decorative icons; a problem when the icon *is* the tap area.
    TouchTargetTooSmall { size: f32, minimum: f32 },
    /// The request carries neither an accessibility label nor a test
    /// identifier, so screen readers and UI tests both see an anonymous
    /// glyph.
    MissingLabel { name: IconName },
}

impl fmt::Display for AccessibilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TouchTargetTooSmall { size, minimum } => write!(
                f,
                "icon size {size}px is below the {minimum}px minimum touch target; \
                 ensure the surrounding tap area meets the minimum"
            ),
            Self::MissingLabel { name } => write!(
                f,
                "icon '{name}' has no accessibility label or test identifier"
            ),
        }
    }
}

/// Validate a request, returning all advisories that apply.
///
/// An empty vec means no advisories. Order is stable: size advisories
/// before labeling advisories.
pub fn validate(request: &IconRequest) -> Vec<AccessibilityWarning> {
    let mut warnings = Vec::new();

    if request.size() < MIN_TOUCH_TARGET {
        warnings.push(AccessibilityWarning::TouchTargetTooSmall {
            size: request.size(),
            minimum: MIN_TOUCH_TARGET,
        });
    }

    if request.label().is_none() && request.test_id().is_none() {
        warnings.push(AccessibilityWarning::MissingLabel {
            name: request.name().clone(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_theme::IconSize;

    #[test]
    fn small_unlabeled_icon_gets_both_advisories() {
        let warnings = validate(&IconRequest::new("heart"));
        assert_eq!(warnings.len(), 2);
        assert!(matches!(
            warnings[0],
            AccessibilityWarning::TouchTargetTooSmall { size, minimum }
                if size == 24.0 && minimum == MIN_TOUCH_TARGET
        ));
        assert!(matches!(
            warnings[1],
            AccessibilityWarning::MissingLabel { ref name } if name.as_str() == "heart"
        ));
    }

    #[test]
    fn large_labeled_icon_is_clean() {
        let request = IconRequest::new("heart")
            .with_size_pixels(44.0)
            .with_label("Favorites");
        assert!(validate(&request).is_empty());
    }

    #[test]
    fn test_id_counts_as_labeling() {
        let request = IconRequest::new("heart")
            .with_size(IconSize::Xl)
            .with_test_id("favorites-button");
        assert!(validate(&request).is_empty());
    }

    #[test]
    fn boundary_size_is_not_flagged() {
        let request = IconRequest::new("heart")
            .with_size_pixels(MIN_TOUCH_TARGET)
            .with_label("ok");
        assert!(validate(&request).is_empty());
    }

    #[test]
    fn advisories_render_readable_text() {
        let warnings = validate(&IconRequest::new("breathing").with_size(IconSize::Sm));
        let text = warnings[0].to_string();
        assert!(text.contains("16px"));
        assert!(text.contains("44px"));
    }
}
