//! Mindfulness and meditation icons.
//!
//! The breathing trio shares one language: a disc, a white inner ring,
//! and a direction mark. `breathing` is also the collection fallback and
//! the anchor of the exercise screens.

use solace_theme::{ResolvedProps, TherapeuticTheme};
use solace_vector::{DrawingTree, PathData};

use crate::category::IconCategory;
use crate::registry::Collection;
use crate::sheet::IconSheet;

/// The mindfulness collection.
pub fn collection() -> Collection {
    Collection::builder("mindfulness", IconCategory::Mindfulness)
        .default_theme(TherapeuticTheme::Grounding)
        .fallback("breathing")
        .icon("breathing", breathing)
        .icon("breath-in", breath_in)
        .icon("breath-out", breath_out)
        .icon("zen-circle", zen_circle)
        .icon("candle", candle)
        .icon("incense", incense)
        .icon("singing-bowl", singing_bowl)
        .icon("body-scan", body_scan)
        .icon("stretch", stretch)
        .icon("yoga", yoga)
        .icon("walk", walk)
        .icon("tree", tree)
        .icon("mountain", mountain)
        .icon("wave", wave)
        .icon("cloud", cloud)
        .icon("stars", stars)
        .icon("timer", timer)
        .icon("sound", sound)
        .icon("quiet", quiet)
        .icon("sunrise", sunrise)
        .build()
        .expect("mindfulness collection is statically consistent")
}

fn breathing(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.5)
        .contrast_ring(12.0, 12.0, 6.0)
        .contrast_dot(12.0, 12.0, 2.5)
        .build()
}

fn breath_in(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.5)
        .contrast_ring(12.0, 12.0, 5.5)
        .contrast_line(12.0, 4.5, 12.0, 9.5)
        .contrast_stroke_path(
            PathData::new()
                .move_to((10.0, 7.5))
                .line_to((12.0, 9.5))
                .line_to((14.0, 7.5)),
        )
        .build()
}

fn breath_out(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.5)
        .contrast_ring(12.0, 12.0, 5.5)
        .contrast_line(12.0, 9.5, 12.0, 4.5)
        .contrast_stroke_path(
            PathData::new()
                .move_to((10.0, 6.5))
                .line_to((12.0, 4.5))
                .line_to((14.0, 6.5)),
        )
        .build()
}

// An enso; the gap is the point.
fn zen_circle(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((12.0, 3.5))
                .cubic_to((7.3, 3.5), (3.5, 7.3), (3.5, 12.0))
                .cubic_to((3.5, 16.7), (7.3, 20.5), (12.0, 20.5))
                .cubic_to((16.7, 20.5), (20.5, 16.7), (20.5, 12.0))
                .cubic_to((20.5, 9.0), (19.0, 6.4), (16.7, 4.9)),
        )
        .build()
}

fn candle(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 3.0))
                .cubic_to((13.2, 4.5), (14.0, 5.8), (14.0, 7.0))
                .cubic_to((14.0, 8.4), (13.1, 9.5), (12.0, 9.5))
                .cubic_to((10.9, 9.5), (10.0, 8.4), (10.0, 7.0))
                .cubic_to((10.0, 5.8), (10.8, 4.5), (12.0, 3.0))
                .close(),
        )
        .rect(8.5, 11.0, 7.0, 9.5, 1.0)
        .contrast_line(12.0, 13.5, 12.0, 16.5)
        .build()
}

fn incense(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(12.0, 8.0, 12.0, 20.5)
        .line(7.5, 20.5, 16.5, 20.5)
        .stroke_path(
            PathData::new()
                .move_to((12.0, 7.0))
                .cubic_to((10.5, 6.0), (10.5, 4.5), (12.0, 3.5)),
        )
        .build()
}

fn singing_bowl(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((4.5, 11.0))
                .line_to((19.5, 11.0))
                .cubic_to((19.5, 15.5), (16.2, 18.5), (12.0, 18.5))
                .cubic_to((7.8, 18.5), (4.5, 15.5), (4.5, 11.0))
                .close(),
        )
        .line(9.0, 21.0, 15.0, 21.0)
        .line(16.5, 9.0, 20.0, 5.5)
        .dot(20.3, 5.2, 1.2)
        .build()
}

fn body_scan(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 5.0, 2.0)
        .line(12.0, 7.5, 12.0, 14.0)
        .line(12.0, 9.5, 8.5, 12.5)
        .line(12.0, 9.5, 15.5, 12.5)
        .line(12.0, 14.0, 9.0, 19.5)
        .line(12.0, 14.0, 15.0, 19.5)
        .line(3.5, 11.0, 20.5, 11.0)
        .build()
}

fn stretch(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(16.5, 4.5, 2.0)
        .stroke_path(
            PathData::new()
                .move_to((5.5, 20.5))
                .cubic_to((6.5, 13.5), (10.0, 8.5), (15.0, 6.0)),
        )
        .line(9.5, 12.5, 15.5, 14.5)
        .build()
}

fn yoga(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 4.5, 2.5)
        .line(12.0, 7.5, 12.0, 14.0)
        .line(12.0, 9.5, 6.5, 13.0)
        .line(12.0, 9.5, 17.5, 13.0)
        .stroke_path(
            PathData::new()
                .move_to((4.5, 18.5))
                .cubic_to((8.0, 15.5), (16.0, 15.5), (19.5, 18.5)),
        )
        .build()
}

fn walk(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(13.5, 4.5, 2.0)
        .stroke_path(
            PathData::new()
                .move_to((13.0, 7.5))
                .line_to((11.5, 12.5))
                .line_to((14.5, 15.5))
                .line_to((14.5, 20.5)),
        )
        .stroke_path(
            PathData::new()
                .move_to((11.5, 12.5))
                .line_to((10.0, 16.0))
                .line_to((7.5, 20.5)),
        )
        .line(12.5, 9.5, 16.5, 12.0)
        .line(12.5, 9.5, 9.0, 11.0)
        .build()
}

fn tree(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 3.0))
                .cubic_to((14.0, 3.0), (15.5, 4.5), (15.8, 6.3))
                .cubic_to((17.7, 6.8), (19.0, 8.5), (19.0, 10.5))
                .cubic_to((19.0, 13.0), (17.0, 15.0), (14.5, 15.0))
                .line_to((9.5, 15.0))
                .cubic_to((7.0, 15.0), (5.0, 13.0), (5.0, 10.5))
                .cubic_to((5.0, 8.5), (6.3, 6.8), (8.2, 6.3))
                .cubic_to((8.5, 4.5), (10.0, 3.0), (12.0, 3.0))
                .close(),
        )
        .line(12.0, 15.0, 12.0, 20.5)
        .build()
}

fn mountain(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((3.0, 19.5))
                .line_to((9.5, 7.0))
                .line_to((13.5, 14.0))
                .line_to((16.0, 10.0))
                .line_to((21.0, 19.5))
                .close(),
        )
        .dot(18.5, 5.5, 1.5)
        .build()
}

fn wave(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((2.5, 8.0))
                .cubic_to((5.5, 4.0), (8.5, 4.0), (11.5, 8.0))
                .cubic_to((14.5, 12.0), (17.5, 12.0), (20.5, 8.0)),
        )
        .stroke_path(
            PathData::new()
                .move_to((2.5, 16.0))
                .cubic_to((5.5, 12.0), (8.5, 12.0), (11.5, 16.0))
                .cubic_to((14.5, 20.0), (17.5, 20.0), (20.5, 16.0)),
        )
        .build()
}

fn cloud(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((7.0, 18.5))
                .cubic_to((4.5, 18.5), (2.5, 16.5), (2.5, 14.0))
                .cubic_to((2.5, 11.8), (4.0, 10.0), (6.1, 9.6))
                .cubic_to((6.7, 6.7), (9.1, 4.5), (12.1, 4.5))
                .cubic_to((15.3, 4.5), (17.9, 6.9), (18.3, 10.0))
                .cubic_to((20.1, 10.4), (21.5, 12.0), (21.5, 14.0))
                .cubic_to((21.5, 16.5), (19.5, 18.5), (17.0, 18.5))
                .close(),
        )
        .build()
}

fn stars(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 3.5))
                .line_to((13.8, 9.2))
                .line_to((19.5, 11.0))
                .line_to((13.8, 12.8))
                .line_to((12.0, 18.5))
                .line_to((10.2, 12.8))
                .line_to((4.5, 11.0))
                .line_to((10.2, 9.2))
                .close(),
        )
        .dot(18.5, 5.0, 1.2)
        .dot(5.5, 18.5, 1.2)
        .build()
}

fn timer(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(10.0, 2.5, 14.0, 2.5)
        .line(12.0, 2.5, 12.0, 6.0)
        .circle(12.0, 13.5, 7.5)
        .contrast_line(12.0, 13.5, 14.5, 11.0)
        .build()
}

fn sound(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((4.0, 9.5))
                .line_to((4.0, 14.5))
                .line_to((7.5, 14.5))
                .line_to((12.5, 18.5))
                .line_to((12.5, 5.5))
                .line_to((7.5, 9.5))
                .close(),
        )
        .stroke_path(
            PathData::new()
                .move_to((15.5, 9.0))
                .cubic_to((17.0, 10.6), (17.0, 13.4), (15.5, 15.0)),
        )
        .stroke_path(
            PathData::new()
                .move_to((18.0, 6.5))
                .cubic_to((20.7, 9.5), (20.7, 14.5), (18.0, 17.5)),
        )
        .build()
}

fn quiet(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((4.0, 9.5))
                .line_to((4.0, 14.5))
                .line_to((7.5, 14.5))
                .line_to((12.5, 18.5))
                .line_to((12.5, 5.5))
                .line_to((7.5, 9.5))
                .close(),
        )
        .line(15.5, 9.5, 20.5, 14.5)
        .line(20.5, 9.5, 15.5, 14.5)
        .build()
}

fn sunrise(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((7.5, 16.0))
                .arc_to((4.5, 4.5), 0.0, false, true, (16.5, 16.0))
                .close(),
        )
        .line(2.5, 16.0, 21.5, 16.0)
        .line(12.0, 4.5, 12.0, 7.5)
        .line(5.0, 8.5, 7.0, 10.5)
        .line(19.0, 8.5, 17.0, 10.5)
        .build()
}
