//! Icon names.

/// Symbolic icon name.
///
/// Icon names are flat kebab-case keys organized by semantic meaning
/// rather than visual appearance: "mood-happy" names the feeling being
/// logged, not the circle with the curve in it. The full key set lives in
/// the collections; the constants here cover the names application code
/// reaches for directly.
///
/// # Examples
///
/// ```
/// use solace_icons::IconName;
///
/// let icon = IconName::new("breathing");
/// assert_eq!(icon.as_str(), "breathing");
///
/// // Using a standard constant
/// let icon = IconName::new(IconName::HEART);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IconName(String);

impl IconName {
    // ========================================================================
    // Health & Mindfulness
    // ========================================================================

    /// Favorites, gratitude, self-care
    pub const HEART: &'static str = "heart";
    /// Insights, cognitive exercises
    pub const BRAIN: &'static str = "brain";
    /// Meditation sessions
    pub const MEDITATION: &'static str = "meditation";
    /// Mindfulness home
    pub const LOTUS: &'static str = "lotus";
    /// Activity and progress
    pub const ACTIVITY: &'static str = "activity";

    // ========================================================================
    // Interface
    // ========================================================================

    /// Home tab
    pub const HOME: &'static str = "home";
    /// Settings screen
    pub const SETTINGS: &'static str = "settings";
    /// Search field
    pub const SEARCH: &'static str = "search";
    /// Dismiss/close
    pub const CLOSE: &'static str = "close";
    /// Confirmation check
    pub const CHECK: &'static str = "check";
    /// Add/create
    pub const PLUS: &'static str = "plus";
    /// Profile
    pub const USER: &'static str = "user";
    /// Scheduling
    pub const CALENDAR: &'static str = "calendar";
    /// Reminders
    pub const BELL: &'static str = "bell";

    // ========================================================================
    // Status
    // ========================================================================

    /// Attention required
    pub const ALERT_CIRCLE: &'static str = "alert-circle";
    /// Completed state
    pub const CHECK_CIRCLE: &'static str = "check-circle";
    /// Help, and the global fallback glyph
    pub const HELP_CIRCLE: &'static str = "help-circle";

    // ========================================================================
    // Arrows
    // ========================================================================

    /// Back navigation
    pub const ARROW_LEFT: &'static str = "arrow-left";
    /// Forward navigation
    pub const ARROW_RIGHT: &'static str = "arrow-right";
    /// Expand disclosure
    pub const CHEVRON_DOWN: &'static str = "chevron-down";

    /// Create an icon name.
    ///
    /// Accepts any string; nothing is normalized or rejected here. The
    /// registry builder checks [`is_well_formed`](Self::is_well_formed)
    /// when collections are folded, so ill-formed names fail at build
    /// time rather than at lookup time.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the name follows the kebab-case convention:
    /// non-empty, lowercase ASCII letters and digits, single hyphens
    /// between runs, no hyphen at either end.
    pub fn is_well_formed(&self) -> bool {
        if self.0.is_empty() || self.0.starts_with('-') || self.0.ends_with('-') {
            return false;
        }
        if self.0.contains("--") {
            return false;
        }
        self.0
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl From<&str> for IconName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for IconName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for IconName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_names() {
        for name in ["heart", "alert-circle", "mood-happy", "chart-bar-2"] {
            assert!(IconName::new(name).is_well_formed(), "{name} should pass");
        }
    }

    #[test]
    fn ill_formed_names() {
        for name in ["", "Heart", "alert circle", "-alert", "alert-", "a--b", "café"] {
            assert!(!IconName::new(name).is_well_formed(), "{name:?} should fail");
        }
    }

    #[test]
    fn constants_are_well_formed() {
        for name in [
            IconName::HEART,
            IconName::BRAIN,
            IconName::ALERT_CIRCLE,
            IconName::HELP_CIRCLE,
            IconName::CHEVRON_DOWN,
        ] {
            assert!(IconName::new(name).is_well_formed());
        }
    }

    #[test]
    fn display_and_from_round_trip() {
        let name: IconName = "check-circle".into();
        assert_eq!(name.to_string(), "check-circle");
        assert_eq!(IconName::from(String::from("check-circle")), name);
    }
}
