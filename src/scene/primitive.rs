use serde::Serialize;
use smallvec::SmallVec;

use crate::{
    color::codec::Rgba,
    foundation::core::{Circle, Point, Rect, Vec2},
};

/// Axis-aligned rectangle with a uniform corner radius.
///
/// The radius is always clamped to half the shorter side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RoundRect {
    pub rect: Rect,
    pub radius: f64,
}

impl RoundRect {
    pub fn new(x: f64, y: f64, w: f64, h: f64, radius: f64) -> Self {
        Self::from_rect(Rect::new(x, y, x + w, y + h), radius)
    }

    pub fn from_rect(rect: Rect, radius: f64) -> Self {
        let rect = rect.abs();
        Self {
            rect,
            radius: clamped_radius(rect.width(), rect.height(), radius),
        }
    }

    pub fn translate(self, offset: Vec2) -> Self {
        Self {
            rect: self.rect + offset,
            radius: self.radius,
        }
    }
}

/// Effective corner radius: at most half of the shorter extent, never negative.
pub fn clamped_radius(w: f64, h: f64, radius: f64) -> f64 {
    let limit = 0.5 * w.abs().min(h.abs());
    if radius.is_nan() {
        return 0.0;
    }
    radius.clamp(0.0, limit)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polygon {
    pub points: SmallVec<[Point; 8]>,
}

impl Polygon {
    pub fn bounds(&self) -> Rect {
        let mut it = self.points.iter();
        let Some(first) = it.next() else {
            return Rect::ZERO;
        };
        it.fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p))
    }

    pub fn to_path(&self) -> kurbo::BezPath {
        let mut path = kurbo::BezPath::new();
        let mut it = self.points.iter();
        if let Some(first) = it.next() {
            path.move_to(*first);
            for p in it {
                path.line_to(*p);
            }
            path.close_path();
        }
        path
    }
}

/// Geometry of a primitive, independent of its paint.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    RoundedRect(RoundRect),
    Circle(Circle),
    Polygon(Polygon),
    /// Placeholder for a run of text: a pill with fully rounded ends.
    TextBlob(RoundRect),
    /// Simulated drop shadow: the caster's geometry displaced by `offset`.
    Shadow { casting: RoundRect, offset: Vec2 },
}

impl Shape {
    pub fn bounds(&self) -> Rect {
        match self {
            Self::RoundedRect(r) | Self::TextBlob(r) => r.rect,
            Self::Circle(c) => Rect::from_center_size(c.center, (2.0 * c.radius, 2.0 * c.radius)),
            Self::Polygon(p) => p.bounds(),
            Self::Shadow { casting, offset } => casting.rect + *offset,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

/// A shape with its paint and draw-sequencing key.
///
/// `z` only orders drawing: higher values are drawn later and occlude lower ones.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Primitive {
    pub shape: Shape,
    pub fill: Rgba,
    pub stroke: Option<Stroke>,
    pub z: f64,
}

impl Primitive {
    pub fn new(shape: Shape, fill: Rgba, z: f64) -> Self {
        Self {
            shape,
            fill,
            stroke: None,
            z,
        }
    }

    pub fn rounded_rect(rect: RoundRect, fill: Rgba, z: f64) -> Self {
        Self::new(Shape::RoundedRect(rect), fill, z)
    }

    pub fn circle(center: Point, radius: f64, fill: Rgba, z: f64) -> Self {
        Self::new(Shape::Circle(Circle::new(center, radius.max(0.0))), fill, z)
    }

    pub fn polygon(points: impl IntoIterator<Item = Point>, fill: Rgba, z: f64) -> Self {
        Self::new(
            Shape::Polygon(Polygon {
                points: points.into_iter().collect(),
            }),
            fill,
            z,
        )
    }

    pub fn text_blob(rect: Rect, fill: Rgba, z: f64) -> Self {
        let rect = rect.abs();
        let blob = RoundRect::from_rect(rect, rect.height() / 2.0);
        Self::new(Shape::TextBlob(blob), fill, z)
    }

    pub fn shadow(casting: RoundRect, offset: Vec2, fill: Rgba, z: f64) -> Self {
        Self::new(Shape::Shadow { casting, offset }, fill, z)
    }

    pub fn with_stroke(mut self, color: Rgba, width: f64) -> Self {
        self.stroke = Some(Stroke {
            color,
            width: width.max(0.0),
        });
        self
    }
}
