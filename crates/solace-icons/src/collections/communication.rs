//! Messaging and connection icons.

use solace_theme::{ResolvedProps, TherapeuticTheme};
use solace_vector::{DrawingTree, PathData};

use crate::category::IconCategory;
use crate::registry::Collection;
use crate::sheet::IconSheet;

/// The communication collection.
pub fn collection() -> Collection {
    Collection::builder("communication", IconCategory::Communication)
        .default_theme(TherapeuticTheme::Nurturing)
        .fallback("message-circle")
        .icon("message-circle", message_circle)
        .icon("message-square", message_square)
        .icon("send", send)
        .icon("mail", mail)
        .icon("phone", phone)
        .icon("video", video)
        .icon("mic", mic)
        .icon("mic-off", mic_off)
        .icon("users", users)
        .icon("user-plus", user_plus)
        .icon("at-sign", at_sign)
        .icon("hash", hash)
        .icon("reply", reply)
        .icon("forward", forward)
        .icon("inbox", inbox)
        .icon("megaphone", megaphone)
        .build()
        .expect("communication collection is statically consistent")
}

fn message_circle(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((12.0, 3.5))
                .cubic_to((16.7, 3.5), (20.5, 7.0), (20.5, 11.5))
                .cubic_to((20.5, 16.0), (16.7, 19.5), (12.0, 19.5))
                .cubic_to((10.5, 19.5), (9.0, 19.2), (7.8, 18.6))
                .line_to((3.5, 20.0))
                .line_to((5.0, 15.9))
                .cubic_to((4.0, 14.6), (3.5, 13.1), (3.5, 11.5))
                .cubic_to((3.5, 7.0), (7.3, 3.5), (12.0, 3.5))
                .close(),
        )
        .build()
}

fn message_square(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((4.0, 3.5))
                .line_to((20.0, 3.5))
                .line_to((20.0, 16.5))
                .line_to((8.5, 16.5))
                .line_to((4.0, 20.5))
                .close(),
        )
        .build()
}

fn send(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((21.0, 3.0))
                .line_to((3.5, 10.5))
                .line_to((10.2, 13.8))
                .line_to((13.5, 20.5))
                .close(),
        )
        .contrast_line(10.2, 13.8, 19.0, 5.0)
        .build()
}

fn mail(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .rect(3.5, 5.5, 17.0, 13.0, 1.5)
        .contrast_stroke_path(
            PathData::new()
                .move_to((4.5, 7.0))
                .line_to((12.0, 13.0))
                .line_to((19.5, 7.0)),
        )
        .build()
}

fn phone(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((8.0, 3.5))
                .cubic_to((8.6, 3.5), (9.1, 3.9), (9.3, 4.5))
                .line_to((10.2, 7.7))
                .cubic_to((10.3, 8.2), (10.2, 8.7), (9.8, 9.0))
                .line_to((8.2, 10.4))
                .cubic_to((9.4, 12.8), (11.2, 14.6), (13.6, 15.8))
                .line_to((15.0, 14.2))
                .cubic_to((15.3, 13.8), (15.8, 13.7), (16.3, 13.8))
                .line_to((19.5, 14.7))
                .cubic_to((20.1, 14.9), (20.5, 15.4), (20.5, 16.0))
                .line_to((20.5, 19.0))
                .cubic_to((20.5, 19.8), (19.8, 20.5), (19.0, 20.4))
                .cubic_to((10.7, 19.6), (4.4, 13.3), (3.6, 5.0))
                .cubic_to((3.5, 4.2), (4.2, 3.5), (5.0, 3.5))
                .close(),
        )
        .build()
}

fn video(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .rect(3.0, 6.5, 12.0, 11.0, 2.0)
        .path(
            PathData::new()
                .move_to((15.5, 10.5))
                .line_to((21.0, 7.5))
                .line_to((21.0, 16.5))
                .line_to((15.5, 13.5))
                .close(),
        )
        .build()
}

fn mic(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .rect(9.0, 3.0, 6.0, 11.0, 3.0)
        .stroke_path(
            PathData::new()
                .move_to((5.5, 11.5))
                .cubic_to((5.5, 15.1), (8.4, 18.0), (12.0, 18.0))
                .cubic_to((15.6, 18.0), (18.5, 15.1), (18.5, 11.5)),
        )
        .line(12.0, 18.0, 12.0, 21.0)
        .build()
}

fn mic_off(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .rect(9.0, 3.0, 6.0, 11.0, 3.0)
        .stroke_path(
            PathData::new()
                .move_to((5.5, 11.5))
                .cubic_to((5.5, 15.1), (8.4, 18.0), (12.0, 18.0))
                .cubic_to((15.6, 18.0), (18.5, 15.1), (18.5, 11.5)),
        )
        .line(12.0, 18.0, 12.0, 21.0)
        .contrast_line(4.5, 19.5, 19.5, 4.5)
        .build()
}

fn users(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(9.0, 8.0, 3.5)
        .path(
            PathData::new()
                .move_to((2.5, 20.0))
                .cubic_to((2.5, 16.0), (5.4, 13.8), (9.0, 13.8))
                .cubic_to((12.6, 13.8), (15.5, 16.0), (15.5, 20.0))
                .close(),
        )
        .stroke_path(
            PathData::new()
                .move_to((15.5, 4.7))
                .cubic_to((17.0, 5.3), (18.0, 6.8), (18.0, 8.5))
                .cubic_to((18.0, 10.2), (17.0, 11.7), (15.5, 12.3)),
        )
        .stroke_path(
            PathData::new()
                .move_to((16.5, 13.9))
                .cubic_to((19.5, 14.6), (21.5, 16.6), (21.5, 20.0)),
        )
        .build()
}

fn user_plus(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(10.0, 7.5, 3.5)
        .path(
            PathData::new()
                .move_to((3.0, 20.5))
                .cubic_to((3.0, 16.3), (6.0, 14.0), (10.0, 14.0))
                .cubic_to((14.0, 14.0), (17.0, 16.3), (17.0, 20.5))
                .close(),
        )
        .line(19.0, 8.0, 19.0, 14.0)
        .line(16.0, 11.0, 22.0, 11.0)
        .build()
}

fn at_sign(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .circle(12.0, 12.0, 4.0)
        .stroke_path(
            PathData::new()
                .move_to((16.0, 8.0))
                .line_to((16.0, 13.0))
                .cubic_to((16.0, 14.7), (17.0, 15.5), (18.3, 15.5))
                .cubic_to((20.0, 15.5), (21.0, 14.0), (21.0, 12.0))
                .cubic_to((21.0, 7.0), (17.0, 3.0), (12.0, 3.0))
                .cubic_to((7.0, 3.0), (3.0, 7.0), (3.0, 12.0))
                .cubic_to((3.0, 17.0), (7.0, 21.0), (12.0, 21.0))
                .cubic_to((14.2, 21.0), (16.2, 20.2), (17.7, 18.9)),
        )
        .build()
}

fn hash(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .line(9.5, 4.0, 8.0, 20.0)
        .line(16.0, 4.0, 14.5, 20.0)
        .line(4.5, 9.5, 20.0, 9.5)
        .line(4.0, 14.5, 19.5, 14.5)
        .build()
}

fn reply(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((9.0, 6.5))
                .line_to((4.0, 11.5))
                .line_to((9.0, 16.5)),
        )
        .stroke_path(
            PathData::new()
                .move_to((4.0, 11.5))
                .line_to((14.5, 11.5))
                .cubic_to((17.8, 11.5), (20.0, 13.7), (20.0, 17.0))
                .line_to((20.0, 18.5)),
        )
        .build()
}

fn forward(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .stroke_path(
            PathData::new()
                .move_to((15.0, 6.5))
                .line_to((20.0, 11.5))
                .line_to((15.0, 16.5)),
        )
        .stroke_path(
            PathData::new()
                .move_to((20.0, 11.5))
                .line_to((9.5, 11.5))
                .cubic_to((6.2, 11.5), (4.0, 13.7), (4.0, 17.0))
                .line_to((4.0, 18.5)),
        )
        .build()
}

fn inbox(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((3.5, 13.5))
                .line_to((6.2, 5.2))
                .cubic_to((6.4, 4.5), (7.0, 4.0), (7.7, 4.0))
                .line_to((16.3, 4.0))
                .cubic_to((17.0, 4.0), (17.6, 4.5), (17.8, 5.2))
                .line_to((20.5, 13.5))
                .line_to((20.5, 18.0))
                .cubic_to((20.5, 19.1), (19.6, 20.0), (18.5, 20.0))
                .line_to((5.5, 20.0))
                .cubic_to((4.4, 20.0), (3.5, 19.1), (3.5, 18.0))
                .close(),
        )
        .contrast_stroke_path(
            PathData::new()
                .move_to((3.5, 13.5))
                .line_to((9.0, 13.5))
                .line_to((10.0, 15.5))
                .line_to((14.0, 15.5))
                .line_to((15.0, 13.5))
                .line_to((20.5, 13.5)),
        )
        .build()
}

fn megaphone(props: &ResolvedProps) -> DrawingTree {
    IconSheet::new(props)
        .path(
            PathData::new()
                .move_to((13.0, 5.5))
                .line_to((13.0, 18.5))
                .line_to((6.5, 14.5))
                .line_to((3.5, 14.5))
                .line_to((3.5, 9.5))
                .line_to((6.5, 9.5))
                .close(),
        )
        .stroke_path(
            PathData::new()
                .move_to((16.5, 8.5))
                .cubic_to((18.0, 10.3), (18.0, 13.7), (16.5, 15.5)),
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
            Some(TherapeuticTheme::Nurturing),
            variant,
            &ThemeContext::standard(),
        )
    }

    #[test]
    fn collection_metadata() {
        let c = collection();
        assert_eq!(c.id(), "communication");
        assert_eq!(c.category(), IconCategory::Communication);
        assert_eq!(c.default_theme(), TherapeuticTheme::Nurturing);
        assert_eq!(c.fallback().as_str(), "message-circle");
        assert_eq!(c.len(), 16);
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
    fn mail_flap_inverts_when_filled() {
        let tree = mail(&props(Variant::Filled));
        assert_eq!(
            tree.shapes[0].style.fill.as_solid().unwrap().to_hex(),
            "#C06B8A"
        );
        assert_eq!(tree.shapes[1].style.stroke, Paint::Solid(Color::WHITE));
    }

    #[test]
    fn reply_stays_stroked_in_both_variants() {
        for variant in [Variant::Outline, Variant::Filled] {
            let tree = reply(&props(variant));
            for shape in &tree.shapes {
                assert!(shape.style.fill.is_none());
                assert_eq!(
                    shape.style.stroke.as_solid().unwrap().to_hex(),
                    "#C06B8A"
                );
            }
        }
    }
}
