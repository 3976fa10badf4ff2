//! Integration tests for the rendering front door.

use solace_icons::{
    builtin, render, render_with, Collection, IconCategory, IconRequest, IconSheet,
    RegistryBuilder, FALLBACK_ICON,
};
use solace_theme::{
    IconSize, ResolvedProps, ShadeScale, ThemeColors, ThemeContext, TherapeuticTheme, Variant,
};
use solace_vector::{Color, DrawingTree};

#[test]
fn every_builtin_icon_renders_a_well_formed_svg() {
    let context = ThemeContext::standard();

    for variant in [Variant::Outline, Variant::Filled] {
        for name in builtin().names() {
            let icon = render(
                &IconRequest::new(name.clone()).with_variant(variant),
                &context,
            );
            assert!(!icon.fallback_used, "{name} fell back");
            assert!(!icon.tree.is_empty(), "{name} drew nothing");

            let svg = icon.to_svg();
            assert!(
                svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""),
                "{name} produced a malformed header"
            );
            assert!(svg.ends_with("</svg>"), "{name} produced a malformed footer");
        }
    }
}

#[test]
fn derived_test_ids_name_the_rendered_category() {
    let context = ThemeContext::standard();

    for name in builtin().names() {
        let icon = render(&IconRequest::new(name.clone()), &context);
        let expected = format!("{}-icon-{}", icon.category.as_str(), icon.name);
        assert_eq!(icon.test_id, expected);
    }
}

#[test]
fn unknown_name_renders_the_fallback_glyph_exactly() {
    let context = ThemeContext::standard();
    let substituted = render(&IconRequest::new("definitely-not-an-icon"), &context);
    let direct = render(&IconRequest::new(FALLBACK_ICON), &context);

    assert!(substituted.fallback_used);
    assert!(!direct.fallback_used);
    assert_eq!(substituted.name.as_str(), "help-circle");
    assert_eq!(substituted.category, IconCategory::Interface);
    // The test id reflects what rendered, not what was asked for.
    assert_eq!(substituted.test_id, "interface-icon-help-circle");
    assert_eq!(substituted.tree, direct.tree);
    assert_eq!(substituted.to_svg(), direct.to_svg());
}

#[test]
fn explicit_color_beats_the_theme_cascade() {
    let context = ThemeContext::standard();
    let icon = render(
        &IconRequest::new("brain")
            .with_color(Color::from_hex("#ABCDEF").unwrap())
            .with_theme(TherapeuticTheme::Calming),
        &context,
    );

    let stroke = icon.tree.shapes[0].style.stroke.as_solid().unwrap();
    assert_eq!(stroke.to_hex(), "#ABCDEF");
}

#[test]
fn theme_resolves_through_the_context_scale() {
    let context = ThemeContext::standard();
    let icon = render(
        &IconRequest::new("chart-bar").with_theme(TherapeuticTheme::Focus),
        &context,
    );

    let stroke = icon.tree.shapes[0].style.stroke.as_solid().unwrap();
    assert_eq!(stroke.to_hex(), "#7C6BB8");
}

#[test]
fn host_injected_palette_drives_the_cascade() {
    let blue = Color::from_hex("#3A7BD5").unwrap();
    let context = ThemeContext {
        colors: ThemeColors {
            therapeutic: [(
                TherapeuticTheme::Calming,
                ShadeScale::new().with(600, blue),
            )]
            .into(),
            ..Default::default()
        },
    };

    let icon = render(
        &IconRequest::new("brain").with_theme(TherapeuticTheme::Calming),
        &context,
    );

    assert!(!icon.fallback_used);
    for shape in &icon.tree.shapes {
        assert!(shape.style.fill.is_none());
        assert_eq!(shape.style.stroke.as_solid(), Some(blue));
    }
}

#[test]
fn missing_theme_falls_back_to_the_primary_scale() {
    let context = ThemeContext::standard();
    let icon = render(&IconRequest::new("heart"), &context);

    let stroke = icon.tree.shapes[0].style.stroke.as_solid().unwrap();
    assert_eq!(stroke.to_hex(), "#417FA3");
}

#[test]
fn empty_context_falls_back_to_the_hard_default() {
    let icon = render(
        &IconRequest::new("heart").with_theme(TherapeuticTheme::Calming),
        &ThemeContext::default(),
    );

    let stroke = icon.tree.shapes[0].style.stroke.as_solid().unwrap();
    assert_eq!(stroke.to_hex(), "#4A90B8");
}

#[test]
fn variants_swap_which_paint_side_carries_the_color() {
    let context = ThemeContext::standard();
    let outline = render(&IconRequest::new("heart"), &context);
    let filled = render(
        &IconRequest::new("heart").with_variant(Variant::Filled),
        &context,
    );

    let o = outline.tree.shapes[0].style;
    let f = filled.tree.shapes[0].style;
    assert!(o.fill.is_none());
    assert!(o.stroke.as_solid().is_some());
    assert!(f.stroke.is_none());
    assert!(f.fill.as_solid().is_some());
}

#[test]
fn rendering_is_deterministic() {
    let context = ThemeContext::standard();
    let request = IconRequest::new("breathing")
        .with_theme(TherapeuticTheme::Grounding)
        .with_variant(Variant::Filled)
        .with_size(IconSize::Lg);

    let first = render(&request, &context);
    let second = render(&request, &context);
    assert_eq!(first, second);
    assert_eq!(first.to_svg(), second.to_svg());
}

#[test]
fn size_presets_flow_into_the_svg_document() {
    let context = ThemeContext::standard();
    let icon = render(&IconRequest::new("heart").with_size(IconSize::Xl), &context);

    assert_eq!(icon.tree.size, 48.0);
    assert!(icon
        .to_svg()
        .contains("width=\"48\" height=\"48\" viewBox=\"0 0 24 24\""));
}

#[test]
fn stroke_width_flows_into_stroke_attributes() {
    let context = ThemeContext::standard();
    let icon = render(&IconRequest::new("close").with_stroke_width(1.5), &context);
    assert!(icon.to_svg().contains("stroke-width=\"1.5\""));
}

#[test]
fn hand_built_registry_without_fallback_renders_empty() {
    fn solo(props: &ResolvedProps) -> DrawingTree {
        IconSheet::new(props).circle(12.0, 12.0, 8.0).build()
    }

    let registry = RegistryBuilder::new()
        .collection(
            Collection::builder("solo", IconCategory::Interface)
                .icon("solo", solo)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    let context = ThemeContext::standard();

    let known = render_with(&IconRequest::new("solo"), &context, &registry);
    assert!(!known.fallback_used);
    assert_eq!(known.tree.shapes.len(), 1);

    // No help-circle in this registry, so the degraded result is an empty
    // drawing at the requested size.
    let missing = render_with(&IconRequest::new("absent"), &context, &registry);
    assert!(missing.fallback_used);
    assert!(missing.tree.is_empty());
    assert_eq!(missing.tree.size, 24.0);
    assert_eq!(missing.test_id, "icon-absent");
}
