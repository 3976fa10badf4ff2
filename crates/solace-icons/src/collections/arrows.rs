//! Directional arrow and chevron icons.
//!
//! Every glyph here is a line figure, so the filled variant renders
//! identically to the outline. That is deliberate: a "filled" chevron is
//! still a chevron.

use solace_theme::{ResolvedProps, TherapeuticTheme};
use solace_vector::{DrawingTree, PathData};

use crate::category::IconCategory;
use crate::registry::Collection;
use crate::sheet::IconSheet;

/// The arrows collection.
pub fn collection() -> Collection {
    Collection::builder("arrows", IconCategory::Arrows)
        .default_theme(TherapeuticTheme::Focus)
        .fallback("arrow-right")
        .icon("arrow-up", arrow_up)
        .icon("arrow-down", arrow_down)
        .icon("arrow-left", arrow_left)
        .icon("arrow-right", arrow_right)
        .icon("arrow-up-right", arrow_up_right)
        .icon("arrow-down-left", arrow_down_left)
        .icon("chevron-up", chevron_up)
        .icon("chevron-down", chevron_down)
        .icon("chevron-left", chevron_left)
        .icon("chevron-right", chevron_right)
        .icon("chevrons-right", chevrons_right)
        .icon("expand", expand)
        .icon("collapse", collapse)
        .icon("return", return_arrow)
        .build()
        .expect("arrows collection is statically consistent")
}

fn arrow_up(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(12.0, 20.0, 12.0, 4.5)
        .stroke_path(
            PathData::new()
                .move_to((5.5, 11.0))
                .line_to((12.0, 4.5))
                .line_to((18.5, 11.0)),
        )
        .build()
}

fn arrow_down(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(12.0, 4.0, 12.0, 19.5)
        .stroke_path(
            PathData::new()
                .move_to((5.5, 13.0))
                .line_to((12.0, 19.5))
                .line_to((18.5, 13.0)),
        )
        .build()
}

fn arrow_left(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(20.0, 12.0, 4.5, 12.0)
        .stroke_path(
            PathData::new()
                .move_to((11.0, 5.5))
                .line_to((4.5, 12.0))
                .line_to((11.0, 18.5)),
        )
        .build()
}

fn arrow_right(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(4.0, 12.0, 19.5, 12.0)
        .stroke_path(
            PathData::new()
                .move_to((13.0, 5.5))
                .line_to((19.5, 12.0))
                .line_to((13.0, 18.5)),
        )
        .build()
}

fn arrow_up_right(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(6.0, 18.0, 17.5, 6.5)
        .stroke_path(
            PathData::new()
                .move_to((9.0, 6.5))
                .line_to((17.5, 6.5))
                .line_to((17.5, 15.0)),
        )
        .build()
}

fn arrow_down_left(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(18.0, 6.0, 6.5, 17.5)
        .stroke_path(
            PathData::new()
                .move_to((15.0, 17.5))
                .line_to((6.5, 17.5))
                .line_to((6.5, 9.0)),
        )
        .build()
}

fn chevron_up(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((5.5, 15.0))
                .line_to((12.0, 8.5))
                .line_to((18.5, 15.0)),
        )
        .build()
}

fn chevron_down(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((5.5, 9.0))
                .line_to((12.0, 15.5))
                .line_to((18.5, 9.0)),
        )
        .build()
}

fn chevron_left(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((15.0, 5.5))
                .line_to((8.5, 12.0))
                .line_to((15.0, 18.5)),
        )
        .build()
}

fn chevron_right(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((9.0, 5.5))
                .line_to((15.5, 12.0))
                .line_to((9.0, 18.5)),
        )
        .build()
}

fn chevrons_right(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((6.0, 6.5))
                .line_to((11.5, 12.0))
                .line_to((6.0, 17.5)),
        )
        .stroke_path(
            PathData::new()
                .move_to((12.5, 6.5))
                .line_to((18.0, 12.0))
                .line_to((12.5, 17.5)),
        )
        .build()
}

fn expand(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((14.0, 4.0))
                .line_to((20.0, 4.0))
                .line_to((20.0, 10.0)),
        )
        .line(20.0, 4.0, 14.5, 9.5)
        .stroke_path(
            PathData::new()
                .move_to((10.0, 20.0))
                .line_to((4.0, 20.0))
                .line_to((4.0, 14.0)),
        )
        .line(4.0, 20.0, 9.5, 14.5)
        .build()
}

fn collapse(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((20.0, 10.0))
                .line_to((14.0, 10.0))
                .line_to((14.0, 4.0)),
        )
        .line(14.0, 10.0, 19.5, 4.5)
        .stroke_path(
            PathData::new()
                .move_to((4.0, 14.0))
                .line_to((10.0, 14.0))
                .line_to((10.0, 20.0)),
        )
        .line(10.0, 14.0, 4.5, 19.5)
        .build()
}

// `return` is a keyword, hence the function name.
fn return_arrow(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((19.5, 4.5))
                .line_to((19.5, 11.0))
                .cubic_to((19.5, 12.7), (18.2, 14.0), (16.5, 14.0))
                .line_to((4.5, 14.0)),
        )
        .stroke_path(
            PathData::new()
                .move_to((9.5, 9.0))
                .line_to((4.5, 14.0))
                .line_to((9.5, 19.0)),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_theme::{ThemeContext, Variant};

    fn props(variant: Variant) -> ResolvedProps {
        ResolvedProps::derive(
            24.0,
            2.0,
            None,
            Some(TherapeuticTheme::Focus),
            variant,
            &ThemeContext::standard(),
        )
    }

    #[test]
    fn collection_metadata() {
        let c = collection();
        assert_eq!(c.id(), "arrows");
        assert_eq!(c.category(), IconCategory::Arrows);
        assert_eq!(c.default_theme(), TherapeuticTheme::Focus);
        assert_eq!(c.fallback().as_str(), "arrow-right");
        assert_eq!(c.len(), 14);
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
    fn filled_and_outline_render_the_same_tree() {
        let c = collection();
        let outline = props(Variant::Outline);
        let filled = props(Variant::Filled);
        for def in c.iter() {
            assert_eq!(
                def.render(&outline),
                def.render(&filled),
                "{} differs between variants",
                def.name()
            );
        }
    }
}
