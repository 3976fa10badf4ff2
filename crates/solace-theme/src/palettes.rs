//! Built-in palette data.
//!
//! The shipped shade scales for the six therapeutic themes plus the shared
//! primary scale. Values are the design team's approved ramps; shade 600 is
//! the reference tone of each theme and the one the resolver reaches for
//! first.

use solace_vector::Color;

use crate::palette::ShadeScale;
use crate::therapeutic::TherapeuticTheme;

fn hex(s: &str) -> Color {
    // Palette literals are compile-time constants; a typo here is a bug,
    // not a runtime condition.
    Color::from_hex(s).unwrap()
}

/// The shared primary scale (slate blue).
pub(crate) fn primary() -> ShadeScale {
    ShadeScale::new()
        .with(50, hex("#EDF4F8"))
        .with(100, hex("#D3E4EE"))
        .with(300, hex("#8FBBD4"))
        .with(500, hex("#5290B5"))
        .with(600, hex("#417FA3"))
        .with(700, hex("#346684"))
        .with(900, hex("#1E3B4D"))
}

/// The built-in scale for a therapeutic theme.
pub(crate) fn for_theme(theme: TherapeuticTheme) -> ShadeScale {
    match theme {
        // Soft blue
        TherapeuticTheme::Calming => ShadeScale::new()
            .with(50, hex("#EEF5F9"))
            .with(100, hex("#D6E7F0"))
            .with(300, hex("#94C0D9"))
            .with(500, hex("#5B9EC4"))
            .with(600, hex("#4A90B8"))
            .with(700, hex("#3B7698"))
            .with(900, hex("#234659")),

        // Warm rose
        TherapeuticTheme::Nurturing => ShadeScale::new()
            .with(50, hex("#FAF0F4"))
            .with(100, hex("#F2DAE4"))
            .with(300, hex("#DEA8BC"))
            .with(500, hex("#CC7F9B"))
            .with(600, hex("#C06B8A"))
            .with(700, hex("#A35271"))
            .with(900, hex("#5E2E40")),

        // Sage green
        TherapeuticTheme::Peaceful => ShadeScale::new()
            .with(50, hex("#F1F7F3"))
            .with(100, hex("#DEEDE3"))
            .with(300, hex("#AECFBA"))
            .with(500, hex("#7FAD92"))
            .with(600, hex("#6B9A7C"))
            .with(700, hex("#567E64"))
            .with(900, hex("#2F4A39")),

        // Warm earth
        TherapeuticTheme::Grounding => ShadeScale::new()
            .with(50, hex("#F8F4ED"))
            .with(100, hex("#EDE3D2"))
            .with(300, hex("#D2BB97"))
            .with(500, hex("#A98A5F"))
            .with(600, hex("#9A7B4F"))
            .with(700, hex("#7E6340"))
            .with(900, hex("#46371F")),

        // Amber
        TherapeuticTheme::Energizing => ShadeScale::new()
            .with(50, hex("#FCF6EA"))
            .with(100, hex("#F7E8C8"))
            .with(300, hex("#EDCB88"))
            .with(500, hex("#E0AF53"))
            .with(600, hex("#DA9E3B"))
            .with(700, hex("#B57F2A"))
            .with(900, hex("#6B4A16")),

        // Violet
        TherapeuticTheme::Focus => ShadeScale::new()
            .with(50, hex("#F3F1FA"))
            .with(100, hex("#E4DFF3"))
            .with(300, hex("#BFB3E0"))
            .with(500, hex("#8F7FC4"))
            .with(600, hex("#7C6BB8"))
            .with(700, hex("#65539B"))
            .with(900, hex("#392E59")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_scale_carries_the_resolver_shades() {
        for theme in TherapeuticTheme::ALL {
            let scale = for_theme(theme);
            assert!(
                scale.shade(600).is_some(),
                "{theme} scale is missing shade 600"
            );
            assert!(
                scale.shade(500).is_some(),
                "{theme} scale is missing shade 500"
            );
        }
    }

    #[test]
    fn calming_reference_tone_is_the_signature_blue() {
        let calming = for_theme(TherapeuticTheme::Calming);
        assert_eq!(calming.shade(600).unwrap().to_hex(), "#4A90B8");
    }

    #[test]
    fn primary_scale_has_both_preferred_shades() {
        let scale = primary();
        assert!(scale.shade(600).is_some());
        assert!(scale.shade(500).is_some());
    }
}
