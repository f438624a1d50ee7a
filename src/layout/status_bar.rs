use crate::{
    color::role::Role,
    layout::ctx::{GRID_W, LayoutCtx},
    scene::model::Region,
};

const X: f64 = 0.2;
const Y: f64 = 0.2;
const H: f64 = 0.6;

pub(super) fn compose(ctx: &mut LayoutCtx<'_>) {
    let backdrop = ctx.body(Region::Wallpaper);
    let bar = ctx
        .rounded(X, Y, GRID_W - 2.0 * X, H, H / 2.0)
        .fill(Role::SurfaceContainerLow)
        .alpha(0.92)
        .shadow(0.0, 0.06, 0.08)
        .over(backdrop)
        .body()
        .push();

    // left: logo, app name, menus
    ctx.text(0.5, 0.35, 0.3, 0.3).fill(Role::Primary).z(1.0).over(bar).push();
    ctx.text(1.0, 0.42, 1.0, 0.16).fill(Role::OnSurface).z(1.0).over(bar).push();
    for (x, w) in [(2.2, 0.8), (3.2, 0.7), (4.1, 0.8)] {
        ctx.text(x, 0.43, w, 0.14)
            .fill(Role::OnSurfaceVariant)
            .z(1.0)
            .over(bar)
            .push();
    }

    // right: status glyphs and clock
    ctx.circle(12.9, 0.5, 0.08)
        .fill(Role::OnSurfaceVariant)
        .z(1.0)
        .over(bar)
        .push();
    ctx.text(13.2, 0.4, 0.5, 0.2).fill(Role::Secondary).z(1.0).over(bar).push();
    ctx.circle(14.0, 0.5, 0.1).fill(Role::Primary).z(1.0).over(bar).push();
    ctx.text(14.3, 0.42, 1.0, 0.16).fill(Role::OnSurface).z(1.0).over(bar).push();
}
