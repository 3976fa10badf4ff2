//! Navigation and wayfinding icons.

use solace_theme::{ResolvedProps, TherapeuticTheme};
use solace_vector::{DrawingTree, PathData};

use crate::category::IconCategory;
use crate::registry::Collection;
use crate::sheet::IconSheet;

/// The navigation collection.
pub fn collection() -> Collection {
    Collection::builder("navigation", IconCategory::Navigation)
        .default_theme(TherapeuticTheme::Grounding)
        .fallback("compass")
        .icon("compass", compass)
        .icon("map", map)
        .icon("map-pin", map_pin)
        .icon("globe", globe)
        .icon("route", route)
        .icon("signpost", signpost)
        .icon("layers", layers)
        .icon("crosshair", crosshair)
        .icon("anchor", anchor)
        .icon("flag", flag)
        .icon("milestone", milestone)
        .icon("footprints", footprints)
        .icon("location", location)
        .build()
        .expect("navigation collection is statically consistent")
}

fn compass(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.5)
        .contrast_stroke_path(
            PathData::new()
                .move_to((15.5, 8.5))
                .line_to((13.5, 13.5))
                .line_to((8.5, 15.5))
                .line_to((10.5, 10.5))
                .close(),
        )
        .build()
}

fn map(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((3.5, 5.5))
                .line_to((9.0, 3.5))
                .line_to((15.0, 5.5))
                .line_to((20.5, 3.5))
                .line_to((20.5, 18.5))
                .line_to((15.0, 20.5))
                .line_to((9.0, 18.5))
                .line_to((3.5, 20.5))
                .close(),
        )
        .contrast_line(9.0, 3.5, 9.0, 18.5)
        .contrast_line(15.0, 5.5, 15.0, 20.5)
        .build()
}

fn map_pin(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 21.0))
                .cubic_to((8.0, 16.5), (5.5, 13.0), (5.5, 9.5))
                .cubic_to((5.5, 5.9), (8.4, 3.0), (12.0, 3.0))
                .cubic_to((15.6, 3.0), (18.5, 5.9), (18.5, 9.5))
                .cubic_to((18.5, 13.0), (16.0, 16.5), (12.0, 21.0))
                .close(),
        )
        .contrast_ring(12.0, 9.5, 2.5)
        .build()
}

fn globe(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.0)
        .contrast_line(3.0, 12.0, 21.0, 12.0)
        .contrast_stroke_path(
            PathData::new()
                .move_to((12.0, 3.0))
                .cubic_to((8.5, 7.5), (8.5, 16.5), (12.0, 21.0)),
        )
        .contrast_stroke_path(
            PathData::new()
                .move_to((12.0, 3.0))
                .cubic_to((15.5, 7.5), (15.5, 16.5), (12.0, 21.0)),
        )
        .build()
}

fn route(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(5.5, 18.5, 2.5)
        .circle(18.5, 5.5, 2.5)
        .stroke_path(
            PathData::new()
                .move_to((7.3, 16.7))
                .cubic_to((12.0, 13.0), (12.0, 11.0), (16.7, 7.3)),
        )
        .build()
}

fn signpost(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(12.0, 3.0, 12.0, 5.0)
        .line(12.0, 9.5, 12.0, 12.5)
        .line(12.0, 17.0, 12.0, 21.0)
        .path(
            PathData::new()
                .move_to((6.0, 5.0))
                .line_to((17.5, 5.0))
                .line_to((20.0, 7.25))
                .line_to((17.5, 9.5))
                .line_to((6.0, 9.5))
                .close(),
        )
        .path(
            PathData::new()
                .move_to((18.0, 12.5))
                .line_to((6.5, 12.5))
                .line_to((4.0, 14.75))
                .line_to((6.5, 17.0))
                .line_to((18.0, 17.0))
                .close(),
        )
        .build()
}

fn layers(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 3.5))
                .line_to((21.0, 8.5))
                .line_to((12.0, 13.5))
                .line_to((3.0, 8.5))
                .close(),
        )
        .stroke_path(
            PathData::new()
                .move_to((3.0, 12.5))
                .line_to((12.0, 17.5))
                .line_to((21.0, 12.5)),
        )
        .stroke_path(
            PathData::new()
                .move_to((3.0, 16.5))
                .line_to((12.0, 21.5))
                .line_to((21.0, 16.5)),
        )
        .build()
}

fn crosshair(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 8.0)
        .line(12.0, 2.5, 12.0, 6.5)
        .line(12.0, 17.5, 12.0, 21.5)
        .line(2.5, 12.0, 6.5, 12.0)
        .line(17.5, 12.0, 21.5, 12.0)
        .contrast_dot(12.0, 12.0, 1.5)
        .build()
}

fn anchor(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 5.5, 2.5)
        .line(12.0, 8.0, 12.0, 20.5)
        .line(8.5, 11.0, 15.5, 11.0)
        .stroke_path(
            PathData::new()
                .move_to((4.5, 13.5))
                .cubic_to((5.0, 17.5), (8.0, 20.5), (12.0, 20.5))
                .cubic_to((16.0, 20.5), (19.0, 17.5), (19.5, 13.5)),
        )
        .build()
}

fn flag(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(5.5, 3.5, 5.5, 21.0)
        .path(
            PathData::new()
                .move_to((5.5, 4.5))
                .cubic_to((8.0, 3.0), (10.0, 3.0), (12.0, 4.5))
                .cubic_to((14.0, 6.0), (16.0, 6.0), (18.5, 4.5))
                .line_to((18.5, 13.0))
                .cubic_to((16.0, 14.5), (14.0, 14.5), (12.0, 13.0))
                .cubic_to((10.0, 11.5), (8.0, 11.5), (5.5, 13.0))
                .close(),
        )
        .build()
}

fn milestone(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((5.5, 4.0))
                .line_to((16.0, 4.0))
                .line_to((19.0, 7.5))
                .line_to((16.0, 11.0))
                .line_to((5.5, 11.0))
                .close(),
        )
        .line(12.0, 11.0, 12.0, 20.5)
        .line(8.5, 20.5, 15.5, 20.5)
        .build()
}

fn footprints(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .ellipse(8.0, 7.5, 2.5, 4.5)
        .rect(6.5, 13.5, 3.0, 3.0, 1.5)
        .ellipse(16.0, 12.5, 2.5, 4.5)
        .rect(14.5, 18.5, 3.0, 3.0, 1.5)
        .build()
}

fn location(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 2.5))
                .line_to((20.5, 21.0))
                .line_to((12.0, 16.5))
                .line_to((3.5, 21.0))
                .close(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_theme::{ThemeContext, Variant};
    use solace_vector::{Color, Paint};

    fn props(variant: Variant) -> ResolvedProps {
        ResolvedProps::derive(
            24.0,
            2.0,
            None,
            Some(TherapeuticTheme::Grounding),
            variant,
            &ThemeContext::standard(),
        )
    }

    #[test]
    fn collection_metadata() {
        let c = collection();
        assert_eq!(c.id(), "navigation");
        assert_eq!(c.category(), IconCategory::Navigation);
        assert_eq!(c.default_theme(), TherapeuticTheme::Grounding);
        assert_eq!(c.fallback().as_str(), "compass");
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
    fn compass_needle_inverts_when_filled() {
        let tree = compass(&props(Variant::Filled));
        assert_eq!(tree.shapes[1].style.stroke, Paint::Solid(Color::WHITE));
        assert!(tree.shapes[1].style.fill.is_none());
    }

    #[test]
    fn compass_needle_matches_the_dial_when_outlined() {
        let tree = compass(&props(Variant::Outline));
        let dial = tree.shapes[0].style.stroke.as_solid().unwrap();
        let needle = tree.shapes[1].style.stroke.as_solid().unwrap();
        assert_eq!(dial, needle);
        assert_eq!(dial.to_hex(), "#9A7B4F");
    }
}
