//! Secondary floating panel: 2x2 role-tinted toggle grid and a brightness bar.

use crate::{
    color::role::{ContainerPair, Role},
    layout::ctx::{ContrastUse, LayoutCtx},
    scene::model::Region,
};

const X: f64 = 12.7;
const Y: f64 = 5.9;
const W: f64 = 3.0;
const H: f64 = 2.6;

const TILE_W: f64 = 1.25;
const TILE_H: f64 = 0.68;
const TILE_ROLES: [Role; 4] = [Role::Primary, Role::Secondary, Role::Tertiary, Role::Error];

const BAR_FILL: f64 = 0.62;

pub(super) fn compose(ctx: &mut LayoutCtx<'_>) {
    let backdrop = ctx.body(Region::Wallpaper);
    let panel = ctx
        .rounded(X, Y, W, H, 0.35)
        .fill(Role::SurfaceContainerHigh)
        .stroke(Role::OutlineVariant, 0.02)
        .shadow(0.1, 0.14, 0.16)
        .over(backdrop)
        .body()
        .push();

    for (i, role) in TILE_ROLES.into_iter().enumerate() {
        let (col, row) = (i % 2, i / 2);
        let tx = X + 0.2 + col as f64 * (TILE_W + 0.1);
        let ty = Y + 0.2 + row as f64 * (TILE_H + 0.12);
        let pair = ContainerPair::of(role);

        let tile = ctx
            .rounded(tx, ty, TILE_W, TILE_H, 0.2)
            .fill(pair.container.clone())
            .z(1.0)
            .over(panel)
            .push();
        ctx.circle(tx + 0.3, ty + TILE_H / 2.0, 0.13)
            .fill(pair.on_container)
            .z(2.0)
            .over(tile)
            .push();
        ctx.text(tx + 0.55, ty + 0.28, 0.55, 0.12)
            .contrast_on(pair.container, ContrastUse::Badge)
            .z(2.0)
            .over(tile)
            .push();
    }

    let (bx, by, bw, bh) = (X + 0.2, Y + 1.95, W - 0.4, 0.4);
    let bar = ctx
        .rounded(bx, by, bw, bh, bh / 2.0)
        .fill(Role::SurfaceVariant)
        .z(1.0)
        .over(panel)
        .push();
    let level = ctx
        .rounded(bx, by, bw * BAR_FILL, bh, bh / 2.0)
        .fill(Role::Primary)
        .z(2.0)
        .over(bar)
        .push();
    ctx.circle(bx + 0.22, by + bh / 2.0, 0.09)
        .contrast_on(Role::Primary, ContrastUse::Panel)
        .z(3.0)
        .over(level)
        .push();
}
