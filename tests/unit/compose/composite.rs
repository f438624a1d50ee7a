use super::*;
use crate::{
    foundation::core::Rng64,
    layout::{LayoutOptions, render},
    palette::model::{HexColor, SchemeVariant, TokenMap, Variant},
};

fn scene(variant: Variant, tokens: &TokenMap, canvas: Size) -> Scene {
    render(
        SchemeVariant { variant, tokens },
        canvas,
        Rng64::new(5),
        &LayoutOptions::default(),
    )
}

#[test]
fn panels_sit_side_by_side_under_title() {
    let tokens: TokenMap = [("primary", HexColor::new("#6750a4"))].into_iter().collect();
    let canvas = Size::new(800.0, 500.0);
    let light = scene(Variant::Light, &tokens, canvas);
    let dark = scene(Variant::Dark, &tokens, canvas);

    let composite = compose_pair("Vibrant", light.clone(), dark.clone());

    assert_eq!(composite.panels.len(), 2);
    assert_eq!(composite.panels[0].scene, light);
    assert_eq!(composite.panels[1].scene, dark);
    let (a, b) = (composite.panels[0].origin, composite.panels[1].origin);
    assert_eq!(a.y, b.y);
    assert!(b.x >= a.x + canvas.width);
    assert!(composite.size.width >= b.x + canvas.width);
    assert!(composite.size.height >= a.y + canvas.height);

    let texts: Vec<&str> = composite.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["Vibrant Desktop Concept", "Light Theme", "Dark Theme"]);
    assert!(composite.labels[0].bold);
    assert!(composite.labels[0].position.y < a.y);
    assert!(composite.labels[1].position.y > a.y + canvas.height);
}

#[test]
fn missing_tokens_merge_across_panels() {
    let light_tokens: TokenMap = [("primary", HexColor::new("#6750a4"))].into_iter().collect();
    let canvas = Size::new(160.0, 100.0);
    let composite = compose_pair(
        "X",
        scene(Variant::Light, &light_tokens, canvas),
        scene(Variant::Dark, &TokenMap::new(), canvas),
    );
    let missing = composite.missing_tokens();
    assert!(missing.contains(&"primary"));
    assert!(missing.contains(&"surface"));
    assert!(missing.windows(2).all(|w| w[0] < w[1]));
}
