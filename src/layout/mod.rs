//! Token-driven composition of the mock desktop.
//!
//! Each region is a composer function in [`REGIONS`], run in order against a shared
//! [`ctx::LayoutCtx`]. Composers only decide geometry and which token fills what; the token map
//! decides the colors. Swapping the map therefore never moves anything.

pub(crate) mod ctx;

mod control_center;
mod cursor;
mod dock;
mod quick_settings;
mod status_bar;
mod terminal;
mod wallpaper;
mod window;

use serde::{Deserialize, Serialize};

use crate::{
    color::codec::{ContrastThresholds, Rgb},
    foundation::core::{Rng64, Size},
    palette::model::SchemeVariant,
    scene::model::{Region, Scene},
};

use ctx::LayoutCtx;

type ComposeFn = fn(&mut LayoutCtx<'_>);

/// Region composers in build order. Later regions may stack on earlier bodies.
pub(crate) const REGIONS: [(Region, ComposeFn); 8] = [
    (Region::Wallpaper, wallpaper::compose),
    (Region::StatusBar, status_bar::compose),
    (Region::Terminal, terminal::compose),
    (Region::PrimaryWindow, window::compose),
    (Region::ControlCenter, control_center::compose),
    (Region::QuickSettings, quick_settings::compose),
    (Region::Dock, dock::compose),
    (Region::Cursor, cursor::compose),
];

/// Paint policy for a layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Color used for tokens the map does not define.
    pub default_color: Rgb,
    pub contrast: ContrastThresholds,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            default_color: Rgb::BLACK,
            contrast: ContrastThresholds::default(),
        }
    }
}

/// Build the desktop scene for one scheme variant.
///
/// Never fails: absent tokens fall back to `opts.default_color` and are listed in
/// [`Scene::missing_tokens`]. Identical inputs and `rng` state give identical scenes.
#[tracing::instrument(skip_all, fields(variant = %variant.variant, tokens = variant.tokens.len()))]
pub fn render(variant: SchemeVariant<'_>, canvas: Size, rng: Rng64, opts: &LayoutOptions) -> Scene {
    let mut ctx = LayoutCtx::new(
        variant.tokens,
        canvas,
        opts.default_color,
        opts.contrast,
        rng,
    );
    for (region, compose) in REGIONS {
        ctx.enter(region);
        compose(&mut ctx);
    }
    let scene = ctx.finish();
    tracing::debug!(items = scene.items().len(), "laid out desktop scene");
    scene
}

#[cfg(test)]
#[path = "../../tests/unit/layout/render.rs"]
mod tests;
