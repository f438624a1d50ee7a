//! Cross-scheme swatch sheets: primary overview, key-color comparison, extracted strip.

use crate::{
    color::{
        codec::{ContrastText, Rgb, contrast_text, encode},
        role::{Role, TokenKey},
    },
    compose::composite::{Composite, Label, PAGE_BACKGROUND, Panel},
    foundation::{
        core::{Point, Rect, Size},
        error::{SwatchError, SwatchResult},
    },
    layout::LayoutOptions,
    palette::model::{HexColor, PaletteDocument, Variant},
    scene::{
        model::{Binding, Region, SceneBuilder, SceneItem},
        primitive::{Primitive, RoundRect},
    },
};

/// Light-variant tokens shown per scheme in the comparison sheet, top to bottom.
pub const COMPARISON_TOKENS: [Role; 5] = [
    Role::Primary,
    Role::Secondary,
    Role::Tertiary,
    Role::Background,
    Role::Surface,
];

const MARGIN: f64 = 32.0;
const TITLE_LINE: f64 = 34.0;
const SWATCH_RADIUS: f64 = 6.0;
const SWATCH_EDGE: f64 = 2.0;

/// Swatch grid under a multi-line title. Positions passed in are local to the grid.
struct Sheet<'o> {
    opts: &'o LayoutOptions,
    origin: Point,
    grid: Size,
    scene: SceneBuilder,
    labels: Vec<Label>,
}

impl<'o> Sheet<'o> {
    fn new(title: &[&str], grid: Size, opts: &'o LayoutOptions) -> Self {
        let ink = ContrastText::Dark.rgb();
        let labels = title
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let label = Label::new(
                    *line,
                    Point::new(MARGIN + grid.width / 2.0, MARGIN + (i as f64 + 0.8) * TITLE_LINE),
                    if i == 0 { 24.0 } else { 16.0 },
                    ink,
                );
                if i == 0 { label.bold() } else { label }
            })
            .collect();
        let header = title.len() as f64 * TITLE_LINE + 16.0;
        Self {
            opts,
            origin: Point::new(MARGIN, MARGIN + header),
            grid,
            scene: SceneBuilder::new(grid),
            labels,
        }
    }

    /// Push one swatch. Returns its fill and the hex text to print on it.
    fn swatch(&mut self, rect: Rect, token: TokenKey, hex: Option<&HexColor>) -> (Rgb, String) {
        let (fill, text) = match hex {
            Some(hex) => (hex.rgb(), hex.as_str().to_owned()),
            None => {
                self.scene.note_missing(token.as_str());
                let fill = self.opts.default_color;
                (fill, encode(fill))
            }
        };
        let primitive = Primitive::rounded_rect(
            RoundRect::from_rect(rect, SWATCH_RADIUS),
            fill.opaque(),
            0.0,
        )
        .with_stroke(Rgb::BLACK.opaque(), SWATCH_EDGE);
        self.scene.push(SceneItem {
            region: Region::Swatches,
            binding: Binding::Token { token },
            over: None,
            primitive,
        });
        (fill, text)
    }

    /// Text centered on `center`, legible against `fill`.
    fn text_on(&mut self, text: impl Into<String>, center: Point, size_px: f64, fill: Rgb, bold: bool) {
        let color = contrast_text(fill, self.opts.contrast.badge).rgb();
        let label = Label::new(text, self.baseline(center, size_px), size_px, color);
        self.labels.push(if bold { label.bold() } else { label });
    }

    /// Page-colored caption centered on `center`.
    fn caption(&mut self, text: impl Into<String>, center: Point, size_px: f64) {
        let label = Label::new(
            text,
            self.baseline(center, size_px),
            size_px,
            ContrastText::Dark.rgb(),
        );
        self.labels.push(label);
    }

    fn baseline(&self, center: Point, size_px: f64) -> Point {
        Point::new(
            self.origin.x + center.x,
            self.origin.y + center.y + size_px * 0.35,
        )
    }

    fn finish(self) -> Composite {
        Composite {
            size: Size::new(
                MARGIN * 2.0 + self.grid.width,
                self.origin.y + self.grid.height + MARGIN,
            ),
            background: PAGE_BACKGROUND,
            panels: vec![Panel {
                origin: self.origin,
                scene: self.scene.finish(),
            }],
            labels: self.labels,
        }
    }
}

fn span(count: usize, cell: f64, gap: f64) -> f64 {
    count as f64 * cell + count.saturating_sub(1) as f64 * gap
}

fn nothing_to_visualize(what: &str) -> SwatchError {
    SwatchError::validation(format!("nothing to visualize: {what}"))
}

/// Light and dark `primary` of every scheme, one column per scheme in document order.
#[tracing::instrument(skip_all, fields(schemes = doc.schemes().len()))]
pub fn compose_overview(doc: &PaletteDocument, opts: &LayoutOptions) -> SwatchResult<Composite> {
    const CELL: f64 = 160.0;
    const GAP: f64 = 24.0;
    const HEAD: f64 = 48.0;

    let schemes = doc.schemes();
    if schemes.is_empty() {
        return Err(nothing_to_visualize("document has no schemes"));
    }

    let grid = Size::new(span(schemes.len(), CELL, GAP), HEAD + span(2, CELL, GAP));
    let mut sheet = Sheet::new(
        &[
            "Material You Color Schemes Overview",
            "Primary Colors for Light and Dark Variants",
        ],
        grid,
        opts,
    );

    for (col, scheme) in schemes.iter().enumerate() {
        let x = col as f64 * (CELL + GAP);
        sheet.caption(&scheme.name, Point::new(x + CELL / 2.0, 12.0), 16.0);

        for (row, variant) in Variant::ALL.into_iter().enumerate() {
            let y = HEAD + row as f64 * (CELL + GAP);
            let rect = Rect::new(x, y, x + CELL, y + CELL);
            let hex = scheme.tokens(variant).get(Role::Primary.as_str());
            let (fill, text) = sheet.swatch(rect, Role::Primary.into(), hex);
            if variant == Variant::Light {
                sheet.caption(text.clone(), Point::new(x + CELL / 2.0, 32.0), 13.0);
            }
            let name = match variant {
                Variant::Light => "Light",
                Variant::Dark => "Dark",
            };
            let center = rect.center();
            sheet.text_on(name, center, 16.0, fill, true);
            sheet.text_on(text, Point::new(center.x, center.y + 24.0), 12.0, fill, false);
        }
    }
    Ok(sheet.finish())
}

/// Key light-variant colors per scheme: one column per scheme, one row per token.
#[tracing::instrument(skip_all, fields(schemes = doc.schemes().len()))]
pub fn compose_comparison(doc: &PaletteDocument, opts: &LayoutOptions) -> SwatchResult<Composite> {
    const CELL: f64 = 120.0;
    const GAP: f64 = 12.0;
    const HEAD: f64 = 28.0;

    let schemes = doc.schemes();
    if schemes.is_empty() {
        return Err(nothing_to_visualize("document has no schemes"));
    }

    let grid = Size::new(
        span(schemes.len(), CELL, GAP),
        HEAD + span(COMPARISON_TOKENS.len(), CELL, GAP),
    );
    let mut sheet = Sheet::new(
        &["Color Scheme Comparison", "Light Variant Key Colors"],
        grid,
        opts,
    );

    for (col, scheme) in schemes.iter().enumerate() {
        let x = col as f64 * (CELL + GAP);
        sheet.caption(&scheme.name, Point::new(x + CELL / 2.0, 10.0), 14.0);

        for (row, role) in COMPARISON_TOKENS.into_iter().enumerate() {
            let y = HEAD + row as f64 * (CELL + GAP);
            let rect = Rect::new(x, y, x + CELL, y + CELL);
            let hex = scheme.light.get(role.as_str());
            let (fill, text) = sheet.swatch(rect, role.into(), hex);
            sheet.text_on(role.as_str(), Point::new(x + CELL / 2.0, y + CELL * 0.3), 13.0, fill, true);
            sheet.text_on(text, Point::new(x + CELL / 2.0, y + CELL * 0.7), 11.0, fill, false);
        }
    }
    Ok(sheet.finish())
}

/// The colors sampled from the source image, left to right.
#[tracing::instrument(skip_all, fields(colors = colors.len()))]
pub fn compose_extracted(colors: &[HexColor], opts: &LayoutOptions) -> SwatchResult<Composite> {
    const CELL_W: f64 = 128.0;
    const CELL_H: f64 = 160.0;
    const GAP: f64 = 32.0;

    if colors.is_empty() {
        return Err(nothing_to_visualize("no extracted colors"));
    }

    let grid = Size::new(span(colors.len(), CELL_W, GAP), CELL_H);
    let mut sheet = Sheet::new(&["Colors Extracted from Example Image"], grid, opts);
    for (i, hex) in colors.iter().enumerate() {
        let x = i as f64 * (CELL_W + GAP);
        let rect = Rect::new(x, 0.0, x + CELL_W, CELL_H);
        let (fill, text) = sheet.swatch(rect, hex.as_str().into(), Some(hex));
        sheet.text_on(text, rect.center(), 15.0, fill, true);
    }
    Ok(sheet.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/summary.rs"]
mod tests;
