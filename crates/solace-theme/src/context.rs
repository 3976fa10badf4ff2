//! Theme context.
//!
//! The context is the complete palette set a render call resolves against.
//! It is owned by the host application and treated as read-only here; the
//! engine never caches or mutates it, so hosts can swap contexts per
//! screen (or per test) freely.

use std::collections::BTreeMap;

use solace_vector::Color;

use crate::palette::ShadeScale;
use crate::palettes;
use crate::therapeutic::TherapeuticTheme;

/// Text colors, carried alongside the scales so icon labels and captions
/// draw from the same context as the glyphs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextColors {
    pub primary: Color,
    pub secondary: Color,
    pub muted: Color,
}

impl Default for TextColors {
    fn default() -> Self {
        Self {
            primary: Color::from_hex("#2E3A43").unwrap(),
            secondary: Color::from_hex("#5C6B76").unwrap(),
            muted: Color::from_hex("#8CA0AC").unwrap(),
        }
    }
}

/// The full color system: one primary scale, one scale per therapeutic
/// theme, and text colors.
///
/// The therapeutic map may be partial or empty; resolution degrades to the
/// primary scale and then to the hard fallback rather than failing.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeColors {
    pub primary: ShadeScale,
    pub therapeutic: BTreeMap<TherapeuticTheme, ShadeScale>,
    pub text: TextColors,
}

/// The palette set a render call resolves against.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeContext {
    pub colors: ThemeColors,
}

impl ThemeContext {
    /// The application's built-in palette set: the shared primary scale and
    /// all six therapeutic scales, fully populated.
    pub fn standard() -> Self {
        let mut therapeutic = BTreeMap::new();
        for theme in TherapeuticTheme::ALL {
            therapeutic.insert(theme, palettes::for_theme(theme));
        }

        Self {
            colors: ThemeColors {
                primary: palettes::primary(),
                therapeutic,
                text: TextColors::default(),
            },
        }
    }

    /// Look up the scale for a therapeutic theme, if this context has one.
    pub fn therapeutic_scale(&self, theme: TherapeuticTheme) -> Option<&ShadeScale> {
        self.colors.therapeutic.get(&theme)
    }
}
