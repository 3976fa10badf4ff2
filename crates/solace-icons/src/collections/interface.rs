//! General interface icons.
//!
//! The workhorse collection: chrome, affordances, and the `help-circle`
//! fallback every unknown name ends up rendering. This collection also
//! authors an `alert-circle`, which the status collection overrides in
//! the built-in registry.

use solace_theme::{ResolvedProps, TherapeuticTheme};
use solace_vector::{DrawingTree, PathData};

use crate::category::IconCategory;
use crate::registry::Collection;
use crate::sheet::IconSheet;

/// The interface collection.
pub fn collection() -> Collection {
    Collection::builder("interface", IconCategory::Interface)
        .default_theme(TherapeuticTheme::Peaceful)
        .fallback("help-circle")
        .icon("home", home)
        .icon("settings", settings)
        .icon("search", search)
        .icon("close", close)
        .icon("check", check)
        .icon("plus", plus)
        .icon("minus", minus)
        .icon("user", user)
        .icon("calendar", calendar)
        .icon("bell", bell)
        .icon("help-circle", help_circle)
        .icon("info-circle", info_circle)
        .icon("alert-circle", alert_circle)
        .icon("edit", edit)
        .icon("trash", trash)
        .icon("star", star)
        .icon("bookmark", bookmark)
        .icon("share", share)
        .icon("download", download)
        .icon("upload", upload)
        .icon("lock", lock)
        .icon("unlock", unlock)
        .icon("eye", eye)
        .icon("eye-off", eye_off)
        .icon("filter", filter)
        .icon("refresh", refresh)
        .build()
        .expect("interface collection is statically consistent")
}

fn home(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((4.5, 10.5))
                .line_to((12.0, 3.5))
                .line_to((19.5, 10.5))
                .line_to((19.5, 20.0))
                .line_to((14.5, 20.0))
                .line_to((14.5, 14.5))
                .line_to((9.5, 14.5))
                .line_to((9.5, 20.0))
                .line_to((4.5, 20.0))
                .close(),
        )
        .build()
}

// Sliders rather than a gear; gears need too many teeth for a 24 grid.
fn settings(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(4.0, 6.5, 20.0, 6.5)
        .line(4.0, 12.0, 20.0, 12.0)
        .line(4.0, 17.5, 20.0, 17.5)
        .dot(9.0, 6.5, 2.0)
        .dot(15.0, 12.0, 2.0)
        .dot(7.0, 17.5, 2.0)
        .build()
}

fn search(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(14.5, 9.5, 6.0)
        .line(3.5, 20.5, 10.2, 13.8)
        .build()
}

fn close(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(6.5, 6.5, 17.5, 17.5)
        .line(17.5, 6.5, 6.5, 17.5)
        .build()
}

fn check(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((4.5, 12.5))
                .line_to((9.5, 17.5))
                .line_to((19.5, 7.0)),
        )
        .build()
}

fn plus(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(12.0, 4.5, 12.0, 19.5)
        .line(4.5, 12.0, 19.5, 12.0)
        .build()
}

fn minus(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props).line(4.5, 12.0, 19.5, 12.0).build()
}

fn user(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 7.5, 3.5)
        .path(
            PathData::new()
                .move_to((4.5, 20.5))
                .cubic_to((4.5, 16.0), (7.8, 13.5), (12.0, 13.5))
                .cubic_to((16.2, 13.5), (19.5, 16.0), (19.5, 20.5))
                .close(),
        )
        .build()
}

fn calendar(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .rect(4.0, 5.0, 16.0, 16.0, 2.0)
        .line(8.5, 3.0, 8.5, 6.5)
        .line(15.5, 3.0, 15.5, 6.5)
        .contrast_line(4.0, 9.5, 20.0, 9.5)
        .contrast_dot(12.0, 14.5, 1.25)
        .build()
}

fn bell(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 3.5))
                .cubic_to((8.5, 3.5), (6.5, 6.0), (6.5, 9.5))
                .cubic_to((6.5, 13.0), (5.5, 15.0), (4.5, 16.5))
                .line_to((19.5, 16.5))
                .cubic_to((18.5, 15.0), (17.5, 13.0), (17.5, 9.5))
                .cubic_to((17.5, 6.0), (15.5, 3.5), (12.0, 3.5))
                .close(),
        )
        .stroke_path(
            PathData::new()
                .move_to((10.0, 19.5))
                .cubic_to((10.6, 20.3), (13.4, 20.3), (14.0, 19.5)),
        )
        .build()
}

fn help_circle(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 10.0)
        .contrast_stroke_path(
            PathData::new()
                .move_to((9.0, 9.5))
                .cubic_to((9.0, 7.8), (10.3, 6.5), (12.0, 6.5))
                .cubic_to((13.7, 6.5), (15.0, 7.8), (15.0, 9.2))
                .cubic_to((15.0, 10.6), (13.9, 11.4), (12.0, 12.0))
                .line_to((12.0, 14.0)),
        )
        .contrast_dot(12.0, 17.5, 1.25)
        .build()
}

fn info_circle(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 10.0)
        .contrast_line(12.0, 11.0, 12.0, 16.5)
        .contrast_dot(12.0, 7.5, 1.25)
        .build()
}

// Superseded by the status collection's alert-circle in the built-in
// registry; still reachable through this collection directly.
fn alert_circle(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 10.0)
        .contrast_line(12.0, 8.0, 12.0, 13.0)
        .contrast_dot(12.0, 16.5, 1.0)
        .build()
}

fn edit(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((16.5, 3.5))
                .line_to((20.5, 7.5))
                .line_to((8.0, 20.0))
                .line_to((3.5, 20.5))
                .line_to((4.0, 16.0))
                .close(),
        )
        .contrast_line(14.5, 5.5, 18.5, 9.5)
        .build()
}

fn trash(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((6.0, 6.5))
                .line_to((7.0, 20.5))
                .line_to((17.0, 20.5))
                .line_to((18.0, 6.5))
                .close(),
        )
        .line(4.0, 6.5, 20.0, 6.5)
        .stroke_path(
            PathData::new()
                .move_to((9.5, 6.5))
                .line_to((9.5, 4.0))
                .line_to((14.5, 4.0))
                .line_to((14.5, 6.5)),
        )
        .contrast_line(10.0, 10.0, 10.0, 17.0)
        .contrast_line(14.0, 10.0, 14.0, 17.0)
        .build()
}

fn star(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 3.0))
                .line_to((14.7, 8.9))
                .line_to((21.0, 9.7))
                .line_to((16.4, 14.1))
                .line_to((17.6, 20.5))
                .line_to((12.0, 17.3))
                .line_to((6.4, 20.5))
                .line_to((7.6, 14.1))
                .line_to((3.0, 9.7))
                .line_to((9.3, 8.9))
                .close(),
        )
        .build()
}

fn bookmark(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((6.5, 3.5))
                .line_to((17.5, 3.5))
                .line_to((17.5, 20.5))
                .line_to((12.0, 16.5))
                .line_to((6.5, 20.5))
                .close(),
        )
        .build()
}

fn share(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(6.0, 12.0, 2.5)
        .circle(17.0, 5.5, 2.5)
        .circle(17.0, 18.5, 2.5)
        .line(8.2, 10.8, 14.8, 6.7)
        .line(8.2, 13.2, 14.8, 17.3)
        .build()
}

fn download(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(12.0, 3.5, 12.0, 14.5)
        .stroke_path(
            PathData::new()
                .move_to((7.5, 10.5))
                .line_to((12.0, 15.0))
                .line_to((16.5, 10.5)),
        )
        .stroke_path(
            PathData::new()
                .move_to((4.0, 15.5))
                .line_to((4.0, 19.5))
                .line_to((20.0, 19.5))
                .line_to((20.0, 15.5)),
        )
        .build()
}

fn upload(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(12.0, 4.5, 12.0, 15.5)
        .stroke_path(
            PathData::new()
                .move_to((7.5, 9.0))
                .line_to((12.0, 4.5))
                .line_to((16.5, 9.0)),
        )
        .stroke_path(
            PathData::new()
                .move_to((4.0, 15.5))
                .line_to((4.0, 19.5))
                .line_to((20.0, 19.5))
                .line_to((20.0, 15.5)),
        )
        .build()
}

fn lock(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .rect(5.0, 10.5, 14.0, 10.0, 2.0)
        .stroke_path(
            PathData::new()
                .move_to((8.0, 10.5))
                .line_to((8.0, 7.5))
                .cubic_to((8.0, 5.3), (9.8, 3.5), (12.0, 3.5))
                .cubic_to((14.2, 3.5), (16.0, 5.3), (16.0, 7.5))
                .line_to((16.0, 10.5)),
        )
        .contrast_dot(12.0, 15.5, 1.5)
        .build()
}

fn unlock(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .rect(5.0, 10.5, 14.0, 10.0, 2.0)
        .stroke_path(
            PathData::new()
                .move_to((8.0, 10.5))
                .line_to((8.0, 7.5))
                .cubic_to((8.0, 5.3), (9.8, 3.5), (12.0, 3.5))
                .cubic_to((14.2, 3.5), (16.0, 5.3), (16.0, 7.5)),
        )
        .contrast_dot(12.0, 15.5, 1.5)
        .build()
}

fn eye(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((2.5, 12.0))
                .cubic_to((5.5, 6.5), (8.5, 4.5), (12.0, 4.5))
                .cubic_to((15.5, 4.5), (18.5, 6.5), (21.5, 12.0))
                .cubic_to((18.5, 17.5), (15.5, 19.5), (12.0, 19.5))
                .cubic_to((8.5, 19.5), (5.5, 17.5), (2.5, 12.0))
                .close(),
        )
        .contrast_ring(12.0, 12.0, 3.0)
        .build()
}

fn eye_off(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((2.5, 12.0))
                .cubic_to((5.5, 6.5), (8.5, 4.5), (12.0, 4.5))
                .cubic_to((15.5, 4.5), (18.5, 6.5), (21.5, 12.0))
                .cubic_to((18.5, 17.5), (15.5, 19.5), (12.0, 19.5))
                .cubic_to((8.5, 19.5), (5.5, 17.5), (2.5, 12.0))
                .close(),
        )
        .contrast_ring(12.0, 12.0, 3.0)
        .contrast_line(4.5, 19.5, 19.5, 4.5)
        .build()
}

fn filter(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((3.5, 4.5))
                .line_to((20.5, 4.5))
                .line_to((14.0, 12.5))
                .line_to((14.0, 19.5))
                .line_to((10.0, 17.5))
                .line_to((10.0, 12.5))
                .close(),
        )
        .build()
}

fn refresh(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((20.0, 12.0))
                .cubic_to((20.0, 16.4), (16.4, 20.0), (12.0, 20.0))
                .cubic_to((7.6, 20.0), (4.0, 16.4), (4.0, 12.0))
                .cubic_to((4.0, 7.6), (7.6, 4.0), (12.0, 4.0))
                .cubic_to((14.8, 4.0), (17.3, 5.4), (18.7, 7.6)),
        )
        .stroke_path(
            PathData::new()
                .move_to((19.0, 3.5))
                .line_to((19.0, 8.0))
                .line_to((14.5, 8.0)),
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
            Some(TherapeuticTheme::Peaceful),
            variant,
            &ThemeContext::standard(),
        )
    }

    #[test]
    fn collection_metadata() {
        let c = collection();
        assert_eq!(c.id(), "interface");
        assert_eq!(c.category(), IconCategory::Interface);
        assert_eq!(c.fallback().as_str(), "help-circle");
        assert_eq!(c.len(), 26);
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
    fn help_circle_glyph_and_mark_contrast_when_filled() {
        let tree = help_circle(&props(Variant::Filled));
        assert_eq!(tree.len(), 3);
        assert_eq!(
            tree.shapes[0].style.fill.as_solid().unwrap().to_hex(),
            "#6B9A7C"
        );
        // Question hook strokes white over the solid disc.
        assert_eq!(tree.shapes[1].style.stroke, Paint::Solid(Color::WHITE));
        assert_eq!(tree.shapes[2].style.fill, Paint::Solid(Color::WHITE));
    }

    #[test]
    fn minus_is_a_single_line() {
        let tree = minus(&props(Variant::Outline));
        assert_eq!(tree.len(), 1);
        assert!(matches!(tree.shapes[0].geometry, Geometry::Line { .. }));
    }

    #[test]
    fn calendar_posts_keep_the_resolved_color_when_filled() {
        let tree = calendar(&props(Variant::Filled));
        // Binding posts sit outside the body, so they stay resolved-colored
        // while the divider inverts.
        let post_stroke = tree.shapes[1].style.stroke.as_solid().unwrap();
        assert_eq!(post_stroke.to_hex(), "#6B9A7C");
        assert_eq!(tree.shapes[3].style.stroke, Paint::Solid(Color::WHITE));
    }
}
