use super::*;
use crate::{
    color::codec::Rgb,
    compose::composite::{Composite, Label, Panel},
    scene::{
        model::{Binding, Region, SceneBuilder, SceneItem},
        primitive::RoundRect,
    },
};

fn item(z: f64) -> SceneItem {
    SceneItem {
        region: Region::Swatches,
        binding: Binding::Token {
            token: "primary".into(),
        },
        over: None,
        primitive: Primitive::rounded_rect(RoundRect::new(0.0, 0.0, 10.0, 10.0, 0.0), Rgb::WHITE.opaque(), z),
    }
}

#[test]
fn panels_draw_by_z_then_labels() {
    let mut scene = SceneBuilder::new(Size::new(20.0, 20.0));
    scene.push(item(5.0));
    scene.push(item(1.0));
    scene.push(item(3.0));
    let composite = Composite {
        size: Size::new(100.0, 50.0),
        background: Rgb::BLACK,
        panels: vec![Panel {
            origin: Point::new(10.0, 20.0),
            scene: scene.finish(),
        }],
        labels: vec![Label::new("title", Point::new(50.0, 10.0), 12.0, Rgb::WHITE)],
    };

    let mut surface = RecordingSurface::default();
    draw_composite(&composite, &mut surface);

    let zs: Vec<f64> = surface.primitives().map(|p| p.z).collect();
    assert_eq!(zs, [1.0, 3.0, 5.0]);
    assert!(matches!(surface.calls.first(), Some(DrawCall::Begin { .. })));
    assert!(matches!(
        surface.calls[1],
        DrawCall::BeginPanel { origin, .. } if origin == Point::new(10.0, 20.0)
    ));
    assert!(matches!(surface.calls[5], DrawCall::EndPanel));
    assert!(matches!(surface.calls.last(), Some(DrawCall::Label(l)) if l.text == "title"));
}

#[test]
fn equal_z_keeps_construction_order() {
    let mut scene = SceneBuilder::new(Size::new(20.0, 20.0));
    for x in [4.0, 2.0, 8.0] {
        let mut it = item(1.0);
        it.primitive.shape = crate::scene::primitive::Shape::RoundedRect(RoundRect::new(x, 0.0, 1.0, 1.0, 0.0));
        scene.push(it);
    }
    let composite = Composite {
        size: Size::new(20.0, 20.0),
        background: Rgb::BLACK,
        panels: vec![Panel {
            origin: Point::ORIGIN,
            scene: scene.finish(),
        }],
        labels: Vec::new(),
    };
    let mut surface = RecordingSurface::default();
    draw_composite(&composite, &mut surface);
    let xs: Vec<f64> = surface.primitives().map(|p| p.shape.bounds().x0).collect();
    assert_eq!(xs, [4.0, 2.0, 8.0]);
}
