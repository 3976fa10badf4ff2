//! Status and feedback icons.
//!
//! This collection's `alert-circle` is the one the built-in registry
//! serves; the declared override points at it because alerts read as
//! status, not chrome. Its mark is slightly heavier than the interface
//! rendition.

use solace_theme::{ResolvedProps, TherapeuticTheme};
use solace_vector::{DrawingTree, PathData};

use crate::category::IconCategory;
use crate::registry::Collection;
use crate::sheet::IconSheet;

/// The status collection.
pub fn collection() -> Collection {
    Collection::builder("status", IconCategory::Status)
        .default_theme(TherapeuticTheme::Energizing)
        .fallback("info")
        .icon("alert-circle", alert_circle)
        .icon("check-circle", check_circle)
        .icon("x-circle", x_circle)
        .icon("alert-triangle", alert_triangle)
        .icon("info", info)
        .icon("clock", clock)
        .icon("hourglass", hourglass)
        .icon("loader", loader)
        .icon("battery", battery)
        .icon("battery-low", battery_low)
        .icon("wifi", wifi)
        .icon("wifi-off", wifi_off)
        .icon("zap", zap)
        .build()
        .expect("status collection is statically consistent")
}

fn alert_circle(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.0)
        .contrast_line(12.0, 7.5, 12.0, 12.5)
        .contrast_dot(12.0, 16.5, 1.25)
        .build()
}

fn check_circle(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.0)
        .contrast_stroke_path(
            PathData::new()
                .move_to((8.0, 12.5))
                .line_to((11.0, 15.5))
                .line_to((16.5, 9.5)),
        )
        .build()
}

fn x_circle(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.0)
        .contrast_line(9.0, 9.0, 15.0, 15.0)
        .contrast_line(15.0, 9.0, 9.0, 15.0)
        .build()
}

fn alert_triangle(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 3.5))
                .line_to((21.5, 20.0))
                .line_to((2.5, 20.0))
                .close(),
        )
        .contrast_line(12.0, 9.5, 12.0, 14.5)
        .contrast_dot(12.0, 17.0, 1.1)
        .build()
}

fn info(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.0)
        .contrast_line(12.0, 11.5, 12.0, 16.0)
        .contrast_dot(12.0, 8.0, 1.25)
        .build()
}

fn clock(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.0)
        .contrast_line(12.0, 7.0, 12.0, 12.5)
        .contrast_line(12.0, 12.5, 15.5, 14.5)
        .build()
}

fn hourglass(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((6.5, 3.5))
                .line_to((17.5, 3.5))
                .line_to((17.5, 7.0))
                .cubic_to((17.5, 9.5), (15.0, 11.0), (12.0, 12.0))
                .cubic_to((15.0, 13.0), (17.5, 14.5), (17.5, 17.0))
                .line_to((17.5, 20.5))
                .line_to((6.5, 20.5))
                .line_to((6.5, 17.0))
                .cubic_to((6.5, 14.5), (9.0, 13.0), (12.0, 12.0))
                .cubic_to((9.0, 11.0), (6.5, 9.5), (6.5, 7.0))
                .close(),
        )
        .build()
}

// Spinner frame; hosts rotate it themselves.
fn loader(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(12.0, 2.5, 12.0, 6.0)
        .line(12.0, 18.0, 12.0, 21.5)
        .line(2.5, 12.0, 6.0, 12.0)
        .line(18.0, 12.0, 21.5, 12.0)
        .line(5.3, 5.3, 7.8, 7.8)
        .line(16.2, 16.2, 18.7, 18.7)
        .line(5.3, 18.7, 7.8, 16.2)
        .line(16.2, 7.8, 18.7, 5.3)
        .build()
}

fn battery(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .rect(2.5, 8.0, 17.0, 8.5, 2.0)
        .line(21.5, 10.5, 21.5, 14.0)
        .contrast_line(6.5, 10.5, 6.5, 14.0)
        .contrast_line(10.0, 10.5, 10.0, 14.0)
        .contrast_line(13.5, 10.5, 13.5, 14.0)
        .build()
}

fn battery_low(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .rect(2.5, 8.0, 17.0, 8.5, 2.0)
        .line(21.5, 10.5, 21.5, 14.0)
        .contrast_line(6.5, 10.5, 6.5, 14.0)
        .build()
}

fn wifi(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((3.0, 9.5))
                .cubic_to((8.0, 4.8), (16.0, 4.8), (21.0, 9.5)),
        )
        .stroke_path(
            PathData::new()
                .move_to((6.5, 13.0))
                .cubic_to((9.7, 10.2), (14.3, 10.2), (17.5, 13.0)),
        )
        .stroke_path(
            PathData::new()
                .move_to((9.5, 16.3))
                .cubic_to((11.0, 15.2), (13.0, 15.2), (14.5, 16.3)),
        )
        .dot(12.0, 19.5, 1.5)
        .build()
}

fn wifi_off(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((3.0, 9.5))
                .cubic_to((5.0, 7.6), (7.5, 6.3), (10.2, 5.7)),
        )
        .stroke_path(
            PathData::new()
                .move_to((14.8, 6.0))
                .cubic_to((17.1, 6.7), (19.2, 7.9), (21.0, 9.5)),
        )
        .stroke_path(
            PathData::new()
                .move_to((9.5, 16.3))
                .cubic_to((11.0, 15.2), (13.0, 15.2), (14.5, 16.3)),
        )
        .dot(12.0, 19.5, 1.5)
        .line(4.0, 4.0, 20.0, 20.0)
        .build()
}

fn zap(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((13.0, 2.5))
                .line_to((4.5, 13.5))
                .line_to((10.5, 13.5))
                .line_to((11.0, 21.5))
                .line_to((19.5, 10.5))
                .line_to((13.5, 10.5))
                .close(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_theme::{ThemeContext, Variant};
    use solace_vector::{Color, Geometry, Paint};

    fn props(variant: Variant) -> ResolvedProps {
        ResolvedProps::derive(
            24.0,
            2.0,
            None,
            Some(TherapeuticTheme::Energizing),
            variant,
            &ThemeContext::standard(),
        )
    }

    #[test]
    fn collection_metadata() {
        let c = collection();
        assert_eq!(c.id(), "status");
        assert_eq!(c.category(), IconCategory::Status);
        assert_eq!(c.default_theme(), TherapeuticTheme::Energizing);
        assert_eq!(c.fallback().as_str(), "info");
        assert_eq!(c.len(), 13);
    }

    #[test]
    fn every_renderer_draws_something_in_both_variants() {
        let c = collection();
        for variant in [Variant::Outline, Variant::Filled] {
            let p = props(variant);
            for def in c.iter() {
                let tree = def.render(&p);
                assert!(!tree.is_empty(), "{} drew nothing ({variant})", def.name());
            }
        }
    }

    #[test]
    fn alert_circle_uses_the_nine_unit_disc() {
        // Distinguishes this rendition from the interface collection's,
        // which draws a ten-unit disc.
        let tree = alert_circle(&props(Variant::Outline));
        match tree.shapes[0].geometry {
            Geometry::Circle { radius, .. } => assert_eq!(radius, 9.0),
            ref other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn alert_mark_inverts_when_filled() {
        let tree = alert_circle(&props(Variant::Filled));
        assert_eq!(tree.shapes[1].style.stroke, Paint::Solid(Color::WHITE));
        assert_eq!(tree.shapes[2].style.fill, Paint::Solid(Color::WHITE));
    }

    #[test]
    fn battery_low_shows_a_single_charge_bar() {
        let full = battery(&props(Variant::Outline));
        let low = battery_low(&props(Variant::Outline));
        assert_eq!(full.len(), 5);
        assert_eq!(low.len(), 3);
    }
}
