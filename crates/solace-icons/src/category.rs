//! Icon categories.

use std::fmt;

/// The eight icon categories, one per built-in collection.
///
/// Categories drive discovery (settings screens list icons per category)
/// and the derived test identifiers; they do not affect rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum IconCategory {
    /// Mood tracking, wellness, therapeutic content
    Health,
    /// General UI chrome
    Interface,
    /// Tab bars and wayfinding
    Navigation,
    /// Progress and insight visualizations
    Charts,
    /// Messaging, community, support
    Communication,
    /// States, alerts, confirmations
    Status,
    /// Meditation and breathing practice
    Mindfulness,
    /// Directional affordances
    Arrows,
}

impl IconCategory {
    /// All categories in declaration order.
    pub const ALL: [IconCategory; 8] = [
        IconCategory::Health,
        IconCategory::Interface,
        IconCategory::Navigation,
        IconCategory::Charts,
        IconCategory::Communication,
        IconCategory::Status,
        IconCategory::Mindfulness,
        IconCategory::Arrows,
    ];

    /// The kebab-case category name used in test identifiers and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Interface => "interface",
            Self::Navigation => "navigation",
            Self::Charts => "charts",
            Self::Communication => "communication",
            Self::Status => "status",
            Self::Mindfulness => "mindfulness",
            Self::Arrows => "arrows",
        }
    }
}

impl fmt::Display for IconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
