//! Health and wellness icons.
//!
//! Mood faces, vitals, and daily-rhythm glyphs for the tracking screens.
//! The mood faces are the canonical examples of contrast sub-elements:
//! their eyes and mouths invert to white under the filled variant so the
//! expression survives a solid face.

use solace_theme::{ResolvedProps, TherapeuticTheme};
use solace_vector::{DrawingTree, PathData};

use crate::category::IconCategory;
use crate::registry::Collection;
use crate::sheet::IconSheet;

/// The health collection.
pub fn collection() -> Collection {
    Collection::builder("health", IconCategory::Health)
        .default_theme(TherapeuticTheme::Calming)
        .fallback("heart")
        .icon("heart", heart)
        .icon("brain", brain)
        .icon("meditation", meditation)
        .icon("lotus", lotus)
        .icon("activity", activity)
        .icon("mood-happy", mood_happy)
        .icon("mood-sad", mood_sad)
        .icon("mood-calm", mood_calm)
        .icon("mood-anxious", mood_anxious)
        .icon("sleep", sleep)
        .icon("energy", energy)
        .icon("pulse", pulse)
        .icon("journal", journal)
        .icon("pill", pill)
        .icon("leaf", leaf)
        .icon("sun", sun)
        .icon("moon", moon)
        .icon("droplet", droplet)
        .icon("flame", flame)
        .icon("shield", shield)
        .build()
        .expect("health collection is statically consistent")
}

fn heart(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 20.0))
                .cubic_to((7.0, 16.0), (3.0, 12.5), (3.0, 8.5))
                .cubic_to((3.0, 5.5), (5.5, 3.0), (8.5, 3.0))
                .cubic_to((10.0, 3.0), (11.2, 3.6), (12.0, 4.6))
                .cubic_to((12.8, 3.6), (14.0, 3.0), (15.5, 3.0))
                .cubic_to((18.5, 3.0), (21.0, 5.5), (21.0, 8.5))
                .cubic_to((21.0, 12.5), (17.0, 16.0), (12.0, 20.0))
                .close(),
        )
        .build()
}

fn brain(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 3.5))
                .cubic_to((10.5, 2.5), (8.0, 2.8), (6.8, 4.2))
                .cubic_to((5.0, 4.5), (3.8, 6.2), (4.2, 8.0))
                .cubic_to((3.0, 9.2), (3.0, 11.2), (4.2, 12.4))
                .cubic_to((3.9, 14.4), (5.2, 16.3), (7.2, 16.6))
                .cubic_to((7.8, 18.6), (10.0, 19.7), (12.0, 19.0))
                .cubic_to((14.0, 19.7), (16.2, 18.6), (16.8, 16.6))
                .cubic_to((18.8, 16.3), (20.1, 14.4), (19.8, 12.4))
                .cubic_to((21.0, 11.2), (21.0, 9.2), (19.8, 8.0))
                .cubic_to((20.2, 6.2), (19.0, 4.5), (17.2, 4.2))
                .cubic_to((16.0, 2.8), (13.5, 2.5), (12.0, 3.5))
                .close(),
        )
        .contrast_line(12.0, 3.5, 12.0, 19.0)
        .build()
}

fn meditation(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 6.0, 2.5)
        .path(
            PathData::new()
                .move_to((7.0, 18.5))
                .cubic_to((7.5, 15.0), (9.5, 13.0), (12.0, 13.0))
                .cubic_to((14.5, 13.0), (16.5, 15.0), (17.0, 18.5))
                .close(),
        )
        .line(4.5, 18.5, 19.5, 18.5)
        .build()
}

fn lotus(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 4.0))
                .cubic_to((10.5, 6.5), (10.5, 9.5), (12.0, 12.0))
                .cubic_to((13.5, 9.5), (13.5, 6.5), (12.0, 4.0))
                .close(),
        )
        .path(
            PathData::new()
                .move_to((5.5, 6.5))
                .cubic_to((5.0, 9.5), (6.5, 12.5), (9.8, 13.8))
                .cubic_to((9.2, 10.8), (8.0, 8.2), (5.5, 6.5))
                .close(),
        )
        .path(
            PathData::new()
                .move_to((18.5, 6.5))
                .cubic_to((19.0, 9.5), (17.5, 12.5), (14.2, 13.8))
                .cubic_to((14.8, 10.8), (16.0, 8.2), (18.5, 6.5))
                .close(),
        )
        .path(
            PathData::new()
                .move_to((4.5, 13.5))
                .cubic_to((6.0, 17.5), (8.8, 19.5), (12.0, 19.5))
                .cubic_to((15.2, 19.5), (18.0, 17.5), (19.5, 13.5))
                .cubic_to((17.0, 14.8), (14.5, 15.2), (12.0, 15.2))
                .cubic_to((9.5, 15.2), (7.0, 14.8), (4.5, 13.5))
                .close(),
        )
        .build()
}

// Line glyph; stays stroked under both variants.
fn activity(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((3.0, 12.0))
                .line_to((7.0, 12.0))
                .line_to((10.0, 5.0))
                .line_to((14.0, 19.0))
                .line_to((17.0, 12.0))
                .line_to((21.0, 12.0)),
        )
        .build()
}

fn mood_happy(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.0)
        .contrast_dot(9.0, 10.0, 1.25)
        .contrast_dot(15.0, 10.0, 1.25)
        .contrast_stroke_path(
            PathData::new()
                .move_to((8.0, 14.5))
                .cubic_to((9.0, 16.5), (10.4, 17.5), (12.0, 17.5))
                .cubic_to((13.6, 17.5), (15.0, 16.5), (16.0, 14.5)),
        )
        .build()
}

fn mood_sad(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.0)
        .contrast_dot(9.0, 10.0, 1.25)
        .contrast_dot(15.0, 10.0, 1.25)
        .contrast_stroke_path(
            PathData::new()
                .move_to((8.0, 17.0))
                .cubic_to((9.0, 15.0), (10.4, 14.0), (12.0, 14.0))
                .cubic_to((13.6, 14.0), (15.0, 15.0), (16.0, 17.0)),
        )
        .build()
}

// Closed eyes, soft smile.
fn mood_calm(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.0)
        .contrast_line(8.0, 10.5, 10.0, 10.5)
        .contrast_line(14.0, 10.5, 16.0, 10.5)
        .contrast_stroke_path(
            PathData::new()
                .move_to((9.0, 15.5))
                .cubic_to((10.0, 16.5), (14.0, 16.5), (15.0, 15.5)),
        )
        .build()
}

fn mood_anxious(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.0)
        .contrast_dot(9.0, 10.0, 1.25)
        .contrast_dot(15.0, 10.0, 1.25)
        .contrast_stroke_path(
            PathData::new()
                .move_to((8.0, 16.0))
                .quad_to((10.0, 14.5), (12.0, 16.0))
                .quad_to((14.0, 17.5), (16.0, 16.0)),
        )
        .build()
}

fn sleep(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((20.5, 14.5))
                .cubic_to((19.2, 15.1), (17.7, 15.4), (16.2, 15.2))
                .cubic_to((11.9, 14.7), (8.8, 10.8), (9.3, 6.5))
                .cubic_to((9.4, 5.4), (9.8, 4.3), (10.3, 3.4))
                .cubic_to((6.2, 4.2), (3.2, 7.9), (3.5, 12.2))
                .cubic_to((3.9, 16.9), (8.0, 20.4), (12.7, 20.0))
                .cubic_to((16.1, 19.7), (19.1, 17.6), (20.5, 14.5))
                .close(),
        )
        .dot(17.0, 5.0, 1.0)
        .dot(20.0, 8.5, 0.75)
        .build()
}

fn energy(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 3.0))
                .line_to((6.0, 13.0))
                .line_to((11.0, 13.0))
                .line_to((10.0, 21.0))
                .line_to((18.0, 10.0))
                .line_to((12.8, 10.0))
                .close(),
        )
        .build()
}

fn pulse(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.0)
        .contrast_stroke_path(
            PathData::new()
                .move_to((6.5, 12.0))
                .line_to((9.5, 12.0))
                .line_to((11.0, 9.0))
                .line_to((13.0, 15.0))
                .line_to((14.5, 12.0))
                .line_to((17.5, 12.0)),
        )
        .build()
}

fn journal(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .rect(5.0, 3.5, 14.0, 17.0, 1.5)
        .contrast_line(9.0, 3.5, 9.0, 20.5)
        .contrast_line(11.5, 8.0, 16.0, 8.0)
        .contrast_line(11.5, 11.5, 16.0, 11.5)
        .build()
}

fn pill(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .rect(3.5, 9.0, 17.0, 6.0, 3.0)
        .contrast_line(12.0, 9.0, 12.0, 15.0)
        .build()
}

fn leaf(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((5.5, 20.5))
                .cubic_to((6.5, 12.5), (11.0, 6.5), (20.0, 4.0))
                .cubic_to((19.0, 13.0), (13.5, 18.5), (5.5, 20.5))
                .close(),
        )
        .contrast_stroke_path(
            PathData::new()
                .move_to((5.5, 20.5))
                .cubic_to((9.0, 16.0), (13.0, 11.5), (17.5, 8.0)),
        )
        .build()
}

fn sun(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 4.5)
        .line(12.0, 2.5, 12.0, 5.0)
        .line(12.0, 19.0, 12.0, 21.5)
        .line(2.5, 12.0, 5.0, 12.0)
        .line(19.0, 12.0, 21.5, 12.0)
        .line(5.3, 5.3, 7.0, 7.0)
        .line(17.0, 17.0, 18.7, 18.7)
        .line(5.3, 18.7, 7.0, 17.0)
        .line(17.0, 7.0, 18.7, 5.3)
        .build()
}

fn moon(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((20.0, 13.5))
                .cubic_to((18.6, 14.4), (16.9, 14.8), (15.1, 14.5))
                .cubic_to((10.9, 13.8), (8.1, 9.8), (8.8, 5.7))
                .cubic_to((8.9, 4.9), (9.2, 4.1), (9.5, 3.4))
                .cubic_to((5.7, 4.5), (3.0, 8.1), (3.5, 12.2))
                .cubic_to((4.0, 16.8), (8.2, 20.2), (12.8, 19.6))
                .cubic_to((16.2, 19.2), (18.9, 16.8), (20.0, 13.5))
                .close(),
        )
        .build()
}

fn droplet(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 3.0))
                .cubic_to((12.0, 3.0), (5.5, 10.2), (5.5, 14.5))
                .cubic_to((5.5, 18.1), (8.4, 21.0), (12.0, 21.0))
                .cubic_to((15.6, 21.0), (18.5, 18.1), (18.5, 14.5))
                .cubic_to((18.5, 10.2), (12.0, 3.0), (12.0, 3.0))
                .close(),
        )
        .build()
}

fn flame(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 2.5))
                .cubic_to((13.0, 5.5), (15.0, 7.7), (17.0, 10.0))
                .cubic_to((18.5, 11.8), (19.0, 13.5), (19.0, 15.0))
                .cubic_to((19.0, 18.9), (15.9, 21.5), (12.0, 21.5))
                .cubic_to((8.1, 21.5), (5.0, 18.9), (5.0, 15.0))
                .cubic_to((5.0, 12.5), (6.5, 10.5), (8.0, 8.5))
                .cubic_to((9.6, 6.4), (11.2, 4.6), (12.0, 2.5))
                .close(),
        )
        .contrast_stroke_path(
            PathData::new()
                .move_to((9.5, 15.5))
                .cubic_to((9.5, 17.5), (10.6, 18.8), (12.0, 18.8))
                .cubic_to((13.4, 18.8), (14.5, 17.6), (14.5, 16.0))
                .cubic_to((14.5, 14.8), (13.5, 13.5), (12.0, 12.0))
                .cubic_to((10.8, 13.3), (9.5, 14.3), (9.5, 15.5)),
        )
        .build()
}

fn shield(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 2.5))
                .line_to((20.0, 5.5))
                .cubic_to((20.0, 12.5), (17.3, 18.3), (12.0, 21.5))
                .cubic_to((6.7, 18.3), (4.0, 12.5), (4.0, 5.5))
                .close(),
        )
        .contrast_stroke_path(
            PathData::new()
                .move_to((8.5, 11.5))
                .line_to((11.0, 14.0))
                .line_to((15.5, 9.5)),
        )
        .build()
}
