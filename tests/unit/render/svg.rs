use super::*;
use crate::{
    compose::composite::{Panel, compose_pair},
    foundation::core::Rng64,
    layout::{LayoutOptions, render},
    palette::model::{HexColor, SchemeVariant, TokenMap, Variant},
    scene::model::{Binding, Region, SceneBuilder, SceneItem},
};

fn single(primitive: Primitive) -> Composite {
    let mut scene = SceneBuilder::new(Size::new(50.0, 50.0));
    scene.push(SceneItem {
        region: Region::Swatches,
        binding: Binding::Token {
            token: "primary".into(),
        },
        over: None,
        primitive,
    });
    Composite {
        size: Size::new(100.0, 80.0),
        background: Rgb::WHITE,
        panels: vec![Panel {
            origin: Point::new(10.0, 20.0),
            scene: scene.finish(),
        }],
        labels: Vec::new(),
    }
}

#[test]
fn numbers_are_trimmed() {
    assert_eq!(num(12.0), "12");
    assert_eq!(num(0.5), "0.5");
    assert_eq!(num(1.23456), "1.235");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(f64::NAN), "0");
}

#[test]
fn escapes_markup() {
    assert_eq!(escape(r#"a<b & "c">'d'"#), "a&lt;b &amp; &quot;c&quot;&gt;&apos;d&apos;");
}

#[test]
fn document_frame_and_background() {
    let svg = to_svg(&single(Primitive::circle(
        Point::new(5.0, 5.0),
        2.0,
        Rgb::BLACK.opaque(),
        0.0,
    )));
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="100" height="80" viewBox="0 0 100 80">"#));
    assert!(svg.contains(r##"<rect width="100" height="80" fill="#ffffff"/>"##));
    assert!(svg.contains(r#"<g transform="translate(10 20)" clip-path="url(#panel0)">"#));
    assert!(svg.contains(r##"<circle cx="5" cy="5" r="2" fill="#000000"/>"##));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn rounded_rect_with_alpha_and_stroke() {
    let p = Primitive::rounded_rect(
        RoundRect::new(1.0, 2.0, 30.0, 10.0, 4.0),
        Rgb::new(1.0, 0.0, 0.0).with_alpha(0.5),
        0.0,
    )
    .with_stroke(Rgb::BLACK.opaque(), 1.5);
    let svg = to_svg(&single(p));
    assert!(svg.contains(
        r##"<rect x="1" y="2" width="30" height="10" rx="4" fill="#ff0000" fill-opacity="0.5" stroke="#000000" stroke-width="1.5"/>"##
    ));
}

#[test]
fn shadow_is_displaced_copy() {
    let casting = RoundRect::new(0.0, 0.0, 10.0, 10.0, 2.0);
    let p = Primitive::shadow(
        casting,
        crate::foundation::core::Vec2::new(3.0, 4.0),
        Rgb::BLACK.with_alpha(0.2),
        0.0,
    );
    let svg = to_svg(&single(p));
    assert!(svg.contains(r#"<rect x="3" y="4" width="10" height="10" rx="2""#));
}

#[test]
fn polygon_becomes_closed_path() {
    let p = Primitive::polygon(
        [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0)],
        Rgb::BLACK.opaque(),
        0.0,
    );
    let expected = match &p.shape {
        Shape::Polygon(poly) => poly.to_path().to_svg(),
        _ => unreachable!(),
    };
    assert!(expected.ends_with('Z'));
    assert!(to_svg(&single(p)).contains(&format!(r#"<path d="{expected}""#)));
}

#[test]
fn labels_carry_anchor_weight_and_escaped_text() {
    let mut composite = single(Primitive::circle(Point::ORIGIN, 1.0, Rgb::BLACK.opaque(), 0.0));
    composite.labels.push(
        Label::new("Light & Dark", Point::new(50.0, 12.0), 18.0, Rgb::BLACK)
            .bold()
            .anchored(Anchor::Start),
    );
    let svg = to_svg(&composite);
    assert!(svg.contains(r#"text-anchor="start""#));
    assert!(svg.contains(r#"font-weight="bold">Light &amp; Dark</text>"#));
}

#[test]
fn desktop_pair_renders_every_item() {
    let tokens: TokenMap = [("primary", HexColor::new("#6750a4"))].into_iter().collect();
    let scene = |variant| {
        render(
            SchemeVariant {
                variant,
                tokens: &tokens,
            },
            Size::new(320.0, 200.0),
            Rng64::new(1),
            &LayoutOptions::default(),
        )
    };
    let composite = compose_pair("Vibrant", scene(Variant::Light), scene(Variant::Dark));
    let svg = to_svg(&composite);

    let items: usize = composite.panels.iter().map(|p| p.scene.items().len()).sum();
    let shapes = svg.matches("<rect x=").count() + svg.matches("<circle").count() + svg.matches("<path").count();
    assert_eq!(shapes, items);
    assert_eq!(svg.matches("<g ").count(), 2);
    assert!(svg.contains("Vibrant Desktop Concept"));
}
