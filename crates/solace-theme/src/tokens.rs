//! Design tokens for icon sizing.

/// Default stroke width in grid units, tuned for the 24-unit grid.
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// The icon size presets used across the application.
///
/// Raw pixel sizes are also accepted everywhere a preset is; the presets
/// exist so screens agree on a small set of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum IconSize {
    /// 12px; dense chart annotations.
    Xs,
    /// 16px; inline with body text.
    Sm,
    /// 24px; the standard size.
    #[default]
    Md,
    /// 32px; section headers, tab bars.
    Lg,
    /// 48px; feature highlights, empty states.
    Xl,
}

impl IconSize {
    /// All presets, ascending.
    pub const ALL: [IconSize; 5] = [
        IconSize::Xs,
        IconSize::Sm,
        IconSize::Md,
        IconSize::Lg,
        IconSize::Xl,
    ];

    /// The preset's pixel size.
    pub fn as_pixels(&self) -> f32 {
        match self {
            Self::Xs => 12.0,
            Self::Sm => 16.0,
            Self::Md => 24.0,
            Self::Lg => 32.0,
            Self::Xl => 48.0,
        }
    }

    /// The preset matching an exact pixel size, if there is one.
    pub fn from_pixels(pixels: u32) -> Option<Self> {
        match pixels {
            12 => Some(Self::Xs),
            16 => Some(Self::Sm),
            24 => Some(Self::Md),
            32 => Some(Self::Lg),
            48 => Some(Self::Xl),
            _ => None,
        }
    }
}
