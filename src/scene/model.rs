use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    color::role::TokenKey,
    foundation::core::Size,
    scene::primitive::Primitive,
};

/// Area of the mock desktop an item belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Wallpaper,
    StatusBar,
    Terminal,
    PrimaryWindow,
    ControlCenter,
    QuickSettings,
    Dock,
    Cursor,
    /// Cells of the summary swatch grids.
    Swatches,
}

impl Region {
    /// Base of the z band the region draws in. Each band spans ten units.
    pub fn z_base(self) -> f64 {
        match self {
            Self::Wallpaper | Self::Swatches => 0.0,
            Self::StatusBar => 10.0,
            Self::Terminal => 20.0,
            Self::PrimaryWindow => 30.0,
            Self::ControlCenter => 40.0,
            Self::QuickSettings => 50.0,
            Self::Dock => 60.0,
            Self::Cursor => 100.0,
        }
    }
}

/// Where an item's fill came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Binding {
    /// Looked up by token name.
    Token { token: TokenKey },
    /// Legible text color chosen against the fill of `against`.
    Contrast { against: TokenKey },
}

impl Binding {
    pub fn token(&self) -> &TokenKey {
        match self {
            Self::Token { token } => token,
            Self::Contrast { against } => against,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub(crate) usize);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneItem {
    pub region: Region,
    pub binding: Binding,
    /// Item this one is stacked on, if any. Its z is strictly lower.
    pub over: Option<ItemId>,
    pub primitive: Primitive,
}

/// Ordered primitives for one canvas. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    size: Size,
    items: Vec<SceneItem>,
    missing_tokens: BTreeSet<String>,
}

impl Scene {
    pub fn size(&self) -> Size {
        self.size
    }

    /// Items in construction order.
    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&SceneItem> {
        self.items.get(id.0)
    }

    /// Items sorted by ascending z; ties keep construction order.
    pub fn draw_order(&self) -> Vec<&SceneItem> {
        let mut order: Vec<&SceneItem> = self.items.iter().collect();
        order.sort_by(|a, b| a.primitive.z.total_cmp(&b.primitive.z));
        order
    }

    /// Token names the builder asked for but the token map did not define.
    pub fn missing_tokens(&self) -> impl Iterator<Item = &str> {
        self.missing_tokens.iter().map(String::as_str)
    }

    /// Items filled from `token` (directly, not via a contrast decision).
    pub fn items_bound_to<'a>(&'a self, token: &'a str) -> impl Iterator<Item = &'a SceneItem> {
        self.items.iter().filter(move |item| {
            matches!(&item.binding, Binding::Token { token: t } if t.as_str() == token)
        })
    }

    /// Whether both scenes place the same shapes at the same z, ignoring paint.
    pub fn same_geometry(&self, other: &Scene) -> bool {
        self.size == other.size
            && self.items.len() == other.items.len()
            && self.items.iter().zip(&other.items).all(|(a, b)| {
                a.region == b.region
                    && a.over == b.over
                    && a.primitive.shape == b.primitive.shape
                    && a.primitive.z == b.primitive.z
                    && a.primitive.stroke.map(|s| s.width) == b.primitive.stroke.map(|s| s.width)
            })
    }
}

/// Accumulates items for a [`Scene`].
#[derive(Debug)]
pub(crate) struct SceneBuilder {
    size: Size,
    items: Vec<SceneItem>,
    missing_tokens: BTreeSet<String>,
}

impl SceneBuilder {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            size,
            items: Vec::new(),
            missing_tokens: BTreeSet::new(),
        }
    }

    pub(crate) fn push(&mut self, item: SceneItem) -> ItemId {
        debug_assert!(
            item.over
                .and_then(|id| self.items.get(id.0))
                .is_none_or(|below| item.primitive.z > below.primitive.z),
            "item must stack above the item it sits on"
        );
        self.items.push(item);
        ItemId(self.items.len() - 1)
    }

    pub(crate) fn note_missing(&mut self, token: &str) {
        if !self.missing_tokens.contains(token) {
            self.missing_tokens.insert(token.to_owned());
        }
    }

    pub(crate) fn finish(self) -> Scene {
        Scene {
            size: self.size,
            items: self.items,
            missing_tokens: self.missing_tokens,
        }
    }
}
