//! Data visualization icons.
//!
//! Progress and insight screens lean on these. Axis strokes stay strokes
//! under the filled variant so a filled `chart-area` still reads as a
//! chart and not a blob.

use solace_theme::{ResolvedProps, TherapeuticTheme};
use solace_vector::{DrawingTree, PathData};

use crate::category::IconCategory;
use crate::registry::Collection;
use crate::sheet::IconSheet;

/// The charts collection.
pub fn collection() -> Collection {
    Collection::builder("charts", IconCategory::Charts)
        .default_theme(TherapeuticTheme::Focus)
        .fallback("chart-bar")
        .icon("chart-bar", chart_bar)
        .icon("chart-line", chart_line)
        .icon("chart-pie", chart_pie)
        .icon("chart-area", chart_area)
        .icon("chart-scatter", chart_scatter)
        .icon("trending-up", trending_up)
        .icon("trending-down", trending_down)
        .icon("target", target)
        .icon("gauge", gauge)
        .icon("progress-ring", progress_ring)
        .icon("timeline", timeline)
        .icon("stats", stats)
        .icon("percent", percent)
        .icon("grid", grid)
        .build()
        .expect("charts collection is statically consistent")
}

fn chart_bar(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .rect(4.0, 12.0, 4.0, 8.5, 1.0)
        .rect(10.0, 7.0, 4.0, 13.5, 1.0)
        .rect(16.0, 3.5, 4.0, 17.0, 1.0)
        .build()
}

fn chart_line(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((3.5, 3.5))
                .line_to((3.5, 20.5))
                .line_to((20.5, 20.5)),
        )
        .stroke_path(
            PathData::new()
                .move_to((6.0, 15.5))
                .line_to((10.0, 10.5))
                .line_to((13.5, 13.0))
                .line_to((18.5, 6.0)),
        )
        .build()
}

fn chart_pie(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.0)
        .contrast_line(12.0, 12.0, 12.0, 3.0)
        .contrast_line(12.0, 12.0, 19.8, 7.5)
        .build()
}

fn chart_area(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((3.5, 17.0))
                .line_to((8.5, 11.0))
                .line_to((12.5, 14.0))
                .line_to((20.5, 7.0))
                .line_to((20.5, 20.5))
                .line_to((3.5, 20.5))
                .close(),
        )
        .stroke_path(
            PathData::new()
                .move_to((3.5, 3.5))
                .line_to((3.5, 20.5))
                .line_to((20.5, 20.5)),
        )
        .build()
}

fn chart_scatter(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((3.5, 3.5))
                .line_to((3.5, 20.5))
                .line_to((20.5, 20.5)),
        )
        .dot(8.0, 14.0, 1.5)
        .dot(12.0, 9.0, 1.5)
        .dot(16.0, 13.0, 1.5)
        .dot(18.0, 5.5, 1.5)
        .dot(7.0, 7.5, 1.5)
        .build()
}

fn trending_up(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((3.5, 17.5))
                .line_to((9.5, 11.5))
                .line_to((13.5, 14.5))
                .line_to((20.5, 7.0)),
        )
        .stroke_path(
            PathData::new()
                .move_to((15.5, 7.0))
                .line_to((20.5, 7.0))
                .line_to((20.5, 12.0)),
        )
        .build()
}

fn trending_down(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((3.5, 6.5))
                .line_to((9.5, 12.5))
                .line_to((13.5, 9.5))
                .line_to((20.5, 17.0)),
        )
        .stroke_path(
            PathData::new()
                .move_to((15.5, 17.0))
                .line_to((20.5, 17.0))
                .line_to((20.5, 12.0)),
        )
        .build()
}

fn target(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 9.0)
        .contrast_ring(12.0, 12.0, 5.0)
        .contrast_dot(12.0, 12.0, 1.5)
        .build()
}

fn gauge(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((4.5, 16.5))
                .cubic_to((3.5, 10.0), (7.0, 4.5), (12.0, 4.5))
                .cubic_to((17.0, 4.5), (20.5, 10.0), (19.5, 16.5)),
        )
        .line(12.0, 16.0, 16.0, 9.5)
        .dot(12.0, 16.0, 1.5)
        .build()
}

fn progress_ring(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((12.0, 3.5))
                .cubic_to((16.7, 3.5), (20.5, 7.3), (20.5, 12.0))
                .cubic_to((20.5, 16.7), (16.7, 20.5), (12.0, 20.5))
                .cubic_to((7.3, 20.5), (3.5, 16.7), (3.5, 12.0)),
        )
        .dot(3.5, 12.0, 1.5)
        .build()
}

fn timeline(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(4.0, 12.0, 20.0, 12.0)
        .dot(6.5, 12.0, 2.0)
        .dot(12.0, 12.0, 2.0)
        .dot(17.5, 12.0, 2.0)
        .build()
}

fn stats(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(5.0, 20.5, 5.0, 15.0)
        .line(9.7, 20.5, 9.7, 10.0)
        .line(14.3, 20.5, 14.3, 13.0)
        .line(19.0, 20.5, 19.0, 6.5)
        .build()
}

fn percent(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(5.0, 19.0, 19.0, 5.0)
        .circle(7.5, 7.5, 3.0)
        .circle(16.5, 16.5, 3.0)
        .build()
}

fn grid(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .rect(3.5, 3.5, 17.0, 17.0, 2.0)
        .contrast_line(12.0, 3.5, 12.0, 20.5)
        .contrast_line(3.5, 12.0, 20.5, 12.0)
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
            Some(TherapeuticTheme::Focus),
            variant,
            &ThemeContext::standard(),
        )
    }

    #[test]
    fn collection_metadata() {
        let c = collection();
        assert_eq!(c.id(), "charts");
        assert_eq!(c.category(), IconCategory::Charts);
        assert_eq!(c.default_theme(), TherapeuticTheme::Focus);
        assert_eq!(c.fallback().as_str(), "chart-bar");
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
    fn target_rings_alternate_when_filled() {
        let tree = target(&props(Variant::Filled));
        assert_eq!(tree.len(), 3);
        assert_eq!(
            tree.shapes[0].style.fill.as_solid().unwrap().to_hex(),
            "#7C6BB8"
        );
        assert_eq!(tree.shapes[1].style.stroke, Paint::Solid(Color::WHITE));
        assert_eq!(tree.shapes[2].style.fill, Paint::Solid(Color::WHITE));
    }

    #[test]
    fn chart_area_keeps_its_axes_stroked_when_filled() {
        let tree = chart_area(&props(Variant::Filled));
        assert!(tree.shapes[0].style.fill.as_solid().is_some());
        assert!(tree.shapes[1].style.fill.is_none());
        assert_eq!(
            tree.shapes[1].style.stroke.as_solid().unwrap().to_hex(),
            "#7C6BB8"
        );
    }
}
