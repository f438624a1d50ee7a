use super::*;
use crate::palette::parser::parse_str;

const TWO_SCHEMES: &str = "\
title
subtitle
#112233
#445566
Scheme Vibrant Light:
primary: Color #6750a4
secondary: Color #625b71
Scheme Vibrant Dark:
primary: Color #d0bcff
Scheme Muted Light:
primary: Color #fefefe
Scheme Muted Dark:
surface: Color #101010
";

fn swatch_fills(composite: &Composite) -> Vec<Rgb> {
    composite.panels[0]
        .scene
        .items()
        .iter()
        .map(|item| item.primitive.fill.rgb())
        .collect()
}

#[test]
fn overview_has_two_swatches_per_scheme_in_document_order() {
    let doc = parse_str(TWO_SCHEMES);
    let composite = compose_overview(&doc, &LayoutOptions::default()).unwrap();

    let fills = swatch_fills(&composite);
    assert_eq!(fills.len(), 4);
    assert_eq!(fills[0], HexColor::new("#6750a4").rgb());
    assert_eq!(fills[1], HexColor::new("#d0bcff").rgb());
    assert_eq!(fills[2], HexColor::new("#fefefe").rgb());
    // Muted has no dark primary.
    assert_eq!(fills[3], Rgb::BLACK);
    assert_eq!(composite.panels[0].scene.missing_tokens().collect::<Vec<_>>(), ["primary"]);

    let vibrant = composite.labels.iter().position(|l| l.text == "Vibrant").unwrap();
    let muted = composite.labels.iter().position(|l| l.text == "Muted").unwrap();
    assert!(vibrant < muted);
    assert!(composite.labels.iter().any(|l| l.text == "#000000"));
}

#[test]
fn swatch_labels_contrast_with_fill() {
    let doc = parse_str(TWO_SCHEMES);
    let composite = compose_overview(&doc, &LayoutOptions::default()).unwrap();
    let light_on = |text: &str| {
        composite
            .labels
            .iter()
            .filter(|l| l.text == text)
            .map(|l| l.color)
            .collect::<Vec<_>>()
    };
    // Vibrant light primary is dark, Muted light primary is near white.
    assert_eq!(
        light_on("Light"),
        [ContrastText::White.rgb(), ContrastText::Dark.rgb()]
    );
}

#[test]
fn comparison_is_token_by_scheme_grid() {
    let doc = parse_str(TWO_SCHEMES);
    let composite = compose_comparison(&doc, &LayoutOptions::default()).unwrap();
    let scene = &composite.panels[0].scene;
    assert_eq!(scene.items().len(), COMPARISON_TOKENS.len() * 2);

    let tokens: Vec<&str> = scene
        .items()
        .iter()
        .take(COMPARISON_TOKENS.len())
        .map(|item| item.binding.token().as_str())
        .collect();
    assert_eq!(tokens, ["primary", "secondary", "tertiary", "background", "surface"]);

    // Dark-only tokens never leak into the light comparison.
    let muted_surface = &scene.items()[COMPARISON_TOKENS.len() + 4];
    assert_eq!(muted_surface.primitive.fill.rgb(), Rgb::BLACK);
}

#[test]
fn extracted_strip_keeps_order_and_bounds() {
    let doc = parse_str(TWO_SCHEMES);
    let composite = compose_extracted(doc.extracted(), &LayoutOptions::default()).unwrap();
    let fills = swatch_fills(&composite);
    assert_eq!(
        fills,
        [HexColor::new("#112233").rgb(), HexColor::new("#445566").rgb()]
    );

    let panel = &composite.panels[0];
    for item in panel.scene.items() {
        let b = item.primitive.shape.bounds();
        assert!(b.x0 >= 0.0 && b.x1 <= panel.scene.size().width);
        assert!(panel.origin.x + b.x1 <= composite.size.width);
    }
}

#[test]
fn empty_inputs_are_reported_not_drawn() {
    let doc = parse_str("");
    let opts = LayoutOptions::default();
    assert!(matches!(compose_overview(&doc, &opts), Err(SwatchError::Validation(_))));
    assert!(matches!(compose_comparison(&doc, &opts), Err(SwatchError::Validation(_))));
    assert!(matches!(compose_extracted(&[], &opts), Err(SwatchError::Validation(_))));
}

#[test]
fn default_color_fills_missing_swatches() {
    let doc = parse_str(TWO_SCHEMES);
    let opts = LayoutOptions {
        default_color: Rgb::new(1.0, 0.0, 1.0),
        ..LayoutOptions::default()
    };
    let composite = compose_comparison(&doc, &opts).unwrap();
    assert!(composite.labels.iter().any(|l| l.text == "#ff00ff"));
}
