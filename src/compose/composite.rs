use serde::Serialize;

use crate::{
    color::codec::{ContrastText, Rgb},
    foundation::core::{Point, Size},
    scene::model::Scene,
};

const MARGIN: f64 = 32.0;
const GAP: f64 = 24.0;
const TITLE_BAND: f64 = 56.0;
const CAPTION_BAND: f64 = 40.0;

/// Page color behind every composite.
pub const PAGE_BACKGROUND: Rgb = Rgb::new(0xf0 as f64 / 255.0, 0xf2 as f64 / 255.0, 0xf5 as f64 / 255.0);

/// Horizontal alignment of a label relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// A line of text placed on the composite, baseline at `position`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub position: Point,
    pub size_px: f64,
    pub color: Rgb,
    pub anchor: Anchor,
    pub bold: bool,
}

impl Label {
    pub fn new(text: impl Into<String>, position: Point, size_px: f64, color: Rgb) -> Self {
        Self {
            text: text.into(),
            position,
            size_px,
            color,
            anchor: Anchor::Middle,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}

/// A scene placed at `origin` on the composite.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Panel {
    pub origin: Point,
    pub scene: Scene,
}

/// One output artifact: panels drawn in order, then labels on top.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Composite {
    pub size: Size,
    pub background: Rgb,
    pub panels: Vec<Panel>,
    pub labels: Vec<Label>,
}

impl Composite {
    /// Every token any panel wanted but did not find, deduplicated and sorted.
    pub fn missing_tokens(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .panels
            .iter()
            .flat_map(|panel| panel.scene.missing_tokens())
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}

/// Place the light and dark scenes of `scheme` side by side under a title.
#[tracing::instrument(skip(light, dark))]
pub fn compose_pair(scheme: &str, light: Scene, dark: Scene) -> Composite {
    let (ls, ds) = (light.size(), dark.size());
    let panel_h = ls.height.max(ds.height);
    let size = Size::new(
        MARGIN * 2.0 + ls.width + GAP + ds.width,
        MARGIN * 2.0 + TITLE_BAND + panel_h + CAPTION_BAND,
    );
    let ink = ContrastText::Dark.rgb();
    let top = MARGIN + TITLE_BAND;

    let light_origin = Point::new(MARGIN, top);
    let dark_origin = Point::new(MARGIN + ls.width + GAP, top);
    let caption_y = top + panel_h + CAPTION_BAND * 0.7;

    let labels = vec![
        Label::new(
            format!("{scheme} Desktop Concept"),
            Point::new(size.width / 2.0, MARGIN + TITLE_BAND * 0.6),
            28.0,
            ink,
        )
        .bold(),
        Label::new(
            "Light Theme",
            Point::new(light_origin.x + ls.width / 2.0, caption_y),
            18.0,
            ink,
        ),
        Label::new(
            "Dark Theme",
            Point::new(dark_origin.x + ds.width / 2.0, caption_y),
            18.0,
            ink,
        ),
    ];

    Composite {
        size,
        background: PAGE_BACKGROUND,
        panels: vec![
            Panel {
                origin: light_origin,
                scene: light,
            },
            Panel {
                origin: dark_origin,
                scene: dark,
            },
        ],
        labels,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composite.rs"]
mod tests;
