use std::collections::BTreeMap;

use crate::{
    color::{
        codec::{ContrastThresholds, Rgb, contrast_text},
        role::{Role, TokenKey},
    },
    foundation::core::{Point, Rect, Rng64, Size, Vec2},
    palette::model::TokenMap,
    scene::{
        model::{Binding, ItemId, Region, Scene, SceneBuilder, SceneItem},
        primitive::{Primitive, RoundRect, Shape},
    },
};

/// Logical grid the desktop is authored in. Mapped uniformly onto the canvas.
pub(crate) const GRID_W: f64 = 16.0;
pub(crate) const GRID_H: f64 = 10.0;

/// Which per-call-site threshold a contrast decision uses.
#[derive(Clone, Copy, Debug)]
pub(crate) enum ContrastUse {
    Panel,
    Badge,
}

/// Mutable state threaded through the region composers.
pub(crate) struct LayoutCtx<'a> {
    tokens: &'a TokenMap,
    default: Rgb,
    contrast: ContrastThresholds,
    unit: f64,
    origin: Point,
    pub(crate) rng: Rng64,
    scene: SceneBuilder,
    region: Region,
    bodies: BTreeMap<Region, ItemId>,
}

impl<'a> LayoutCtx<'a> {
    pub(crate) fn new(
        tokens: &'a TokenMap,
        canvas: Size,
        default: Rgb,
        contrast: ContrastThresholds,
        rng: Rng64,
    ) -> Self {
        let unit = (canvas.width / GRID_W).min(canvas.height / GRID_H).max(0.0);
        let origin = Point::new(
            (canvas.width - GRID_W * unit) / 2.0,
            (canvas.height - GRID_H * unit) / 2.0,
        );
        Self {
            tokens,
            default,
            contrast,
            unit,
            origin,
            rng,
            scene: SceneBuilder::new(canvas),
            region: Region::Wallpaper,
            bodies: BTreeMap::new(),
        }
    }

    pub(crate) fn enter(&mut self, region: Region) {
        self.region = region;
    }

    pub(crate) fn finish(self) -> Scene {
        self.scene.finish()
    }

    /// Resolve a token, recording it when the map lacks it.
    pub(crate) fn color(&mut self, key: &TokenKey) -> Rgb {
        match self.tokens.get(key.as_str()) {
            Some(hex) => hex.rgb(),
            None => {
                self.scene.note_missing(key.as_str());
                self.default
            }
        }
    }

    pub(crate) fn threshold(&self, usage: ContrastUse) -> f64 {
        match usage {
            ContrastUse::Panel => self.contrast.panel,
            ContrastUse::Badge => self.contrast.badge,
        }
    }

    pub(crate) fn px(&self, v: f64) -> f64 {
        v * self.unit
    }

    pub(crate) fn point(&self, x: f64, y: f64) -> Point {
        Point::new(self.origin.x + x * self.unit, self.origin.y + y * self.unit)
    }

    pub(crate) fn rect(&self, x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_points(self.point(x, y), self.point(x + w, y + h))
    }

    /// The body item registered for `region`, if that region has been composed.
    pub(crate) fn body(&self, region: Region) -> Option<ItemId> {
        self.bodies.get(&region).copied()
    }

    pub(crate) fn rounded(&mut self, x: f64, y: f64, w: f64, h: f64, r: f64) -> Draw<'_, 'a> {
        let shape = Shape::RoundedRect(RoundRect::from_rect(self.rect(x, y, w, h), self.px(r)));
        Draw::new(self, shape)
    }

    /// A text placeholder: pill with fully rounded ends.
    pub(crate) fn text(&mut self, x: f64, y: f64, w: f64, h: f64) -> Draw<'_, 'a> {
        let rect = self.rect(x, y, w, h);
        let Primitive { shape, .. } = Primitive::text_blob(rect, Rgb::BLACK.opaque(), 0.0);
        Draw::new(self, shape)
    }

    pub(crate) fn circle(&mut self, cx: f64, cy: f64, r: f64) -> Draw<'_, 'a> {
        let center = self.point(cx, cy);
        let Primitive { shape, .. } =
            Primitive::circle(center, self.px(r), Rgb::BLACK.opaque(), 0.0);
        Draw::new(self, shape)
    }

    pub(crate) fn polygon(&mut self, points: impl IntoIterator<Item = (f64, f64)>) -> Draw<'_, 'a> {
        let points: Vec<Point> = points.into_iter().map(|(x, y)| self.point(x, y)).collect();
        let Primitive { shape, .. } = Primitive::polygon(points, Rgb::BLACK.opaque(), 0.0);
        Draw::new(self, shape)
    }
}

/// One pending item. Nothing is added to the scene until [`Draw::push`].
#[must_use = "call push() to add the item to the scene"]
pub(crate) struct Draw<'c, 'a> {
    ctx: &'c mut LayoutCtx<'a>,
    shape: Shape,
    binding: Binding,
    fill: Rgb,
    alpha: f64,
    stroke: Option<(Rgb, f64)>,
    z: f64,
    over: Option<ItemId>,
    shadow: Option<(Vec2, f64)>,
    body: bool,
}

impl<'c, 'a> Draw<'c, 'a> {
    fn new(ctx: &'c mut LayoutCtx<'a>, shape: Shape) -> Self {
        Self {
            ctx,
            shape,
            binding: Binding::Token {
                token: TokenKey::from(Role::Background),
            },
            fill: Rgb::BLACK,
            alpha: 1.0,
            stroke: None,
            z: 0.0,
            over: None,
            shadow: None,
            body: false,
        }
    }

    pub(crate) fn fill(mut self, key: impl Into<TokenKey>) -> Self {
        let key = key.into();
        self.fill = self.ctx.color(&key);
        self.binding = Binding::Token { token: key };
        self
    }

    /// Fill with white or dark text, whichever reads better on `against`.
    pub(crate) fn contrast_on(mut self, against: impl Into<TokenKey>, usage: ContrastUse) -> Self {
        let against = against.into();
        let backdrop = self.ctx.color(&against);
        let threshold = self.ctx.threshold(usage);
        self.fill = contrast_text(backdrop, threshold).rgb();
        self.binding = Binding::Contrast { against };
        self
    }

    pub(crate) fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Outline in `key`, `width` in grid units.
    pub(crate) fn stroke(mut self, key: impl Into<TokenKey>, width: f64) -> Self {
        let color = self.ctx.color(&key.into());
        self.stroke = Some((color, self.ctx.px(width)));
        self
    }

    /// Local z inside the current region's band.
    pub(crate) fn z(mut self, local: f64) -> Self {
        self.z = local;
        self
    }

    pub(crate) fn over(mut self, below: impl Into<Option<ItemId>>) -> Self {
        self.over = below.into();
        self
    }

    /// Cast a `shadow`-token copy offset by `(dx, dy)` grid units, half a step below.
    pub(crate) fn shadow(mut self, dx: f64, dy: f64, alpha: f64) -> Self {
        self.shadow = Some((Vec2::new(self.ctx.px(dx), self.ctx.px(dy)), alpha));
        self
    }

    /// Register as the region's body so later regions can stack on it.
    pub(crate) fn body(mut self) -> Self {
        self.body = true;
        self
    }

    pub(crate) fn push(self) -> ItemId {
        let Draw {
            ctx,
            shape,
            binding,
            fill,
            alpha,
            stroke,
            z,
            over,
            shadow,
            body,
        } = self;
        let region = ctx.region;
        let z = region.z_base() + z;

        if let (Some((offset, shadow_alpha)), Shape::RoundedRect(casting)) = (shadow, &shape) {
            let key = TokenKey::from(Role::Shadow);
            let color = ctx.color(&key);
            ctx.scene.push(SceneItem {
                region,
                binding: Binding::Token { token: key },
                over,
                primitive: Primitive::shadow(*casting, offset, color.with_alpha(shadow_alpha), z - 0.5),
            });
        }

        let mut primitive = Primitive::new(shape, fill.with_alpha(alpha), z);
        if let Some((color, width)) = stroke {
            primitive = primitive.with_stroke(color.opaque(), width);
        }
        let id = ctx.scene.push(SceneItem {
            region,
            binding,
            over,
            primitive,
        });
        if body {
            ctx.bodies.insert(region, id);
        }
        id
    }
}
