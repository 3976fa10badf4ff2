//! Therapeutic theme identifiers.

use std::fmt;

/// The six therapeutic color themes of the application.
///
/// Each theme names a mood register, not a widget state: screens pick the
/// theme that matches the emotional context of the content (breathing
/// exercises run Calming, streak celebrations run Energizing), and every
/// icon on that screen resolves through the matching palette.
///
/// Ordering exists so themes can key a `BTreeMap`; it follows declaration
/// order and carries no semantic weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TherapeuticTheme {
    /// Soft blue; grounding exercises, breathing, sleep.
    Calming,
    /// Warm rose; self-compassion, journaling, support.
    Nurturing,
    /// Sage green; reflection, nature, balance.
    Peaceful,
    /// Warm earth; stability, routines, habits.
    Grounding,
    /// Amber; achievements, streaks, celebration.
    Energizing,
    /// Violet; concentration, insights, learning.
    Focus,
}

impl TherapeuticTheme {
    /// All themes in declaration order.
    pub const ALL: [TherapeuticTheme; 6] = [
        TherapeuticTheme::Calming,
        TherapeuticTheme::Nurturing,
        TherapeuticTheme::Peaceful,
        TherapeuticTheme::Grounding,
        TherapeuticTheme::Energizing,
        TherapeuticTheme::Focus,
    ];

    /// The kebab-case name used in settings files and log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calming => "calming",
            Self::Nurturing => "nurturing",
            Self::Peaceful => "peaceful",
            Self::Grounding => "grounding",
            Self::Energizing => "energizing",
            Self::Focus => "focus",
        }
    }

    /// Parse a kebab-case theme name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "calming" => Some(Self::Calming),
            "nurturing" => Some(Self::Nurturing),
            "peaceful" => Some(Self::Peaceful),
            "grounding" => Some(Self::Grounding),
            "energizing" => Some(Self::Energizing),
            "focus" => Some(Self::Focus),
            _ => None,
        }
    }
}

impl fmt::Display for TherapeuticTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
