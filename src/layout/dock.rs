use crate::{
    color::role::Role,
    layout::ctx::{ContrastUse, GRID_H, GRID_W, LayoutCtx},
    scene::model::Region,
};

const W: f64 = 7.0;
const H: f64 = 0.8;
const ICON: f64 = 0.5;
const ICONS: [Role; 7] = [
    Role::Primary,
    Role::Secondary,
    Role::Tertiary,
    Role::Error,
    Role::PrimaryContainer,
    Role::SecondaryContainer,
    Role::TertiaryContainer,
];
/// Icons with a running-app indicator dot beneath them.
const RUNNING: [usize; 2] = [0, 2];

pub(super) fn compose(ctx: &mut LayoutCtx<'_>) {
    let x = (GRID_W - W) / 2.0;
    let y = GRID_H - 0.2 - H;

    let backdrop = ctx.body(Region::Wallpaper);
    let dock = ctx
        .rounded(x, y, W, H, 0.4)
        .fill(Role::SurfaceContainerHighest)
        .alpha(0.92)
        .shadow(0.0, 0.08, 0.12)
        .over(backdrop)
        .body()
        .push();

    let gap = (W - ICONS.len() as f64 * ICON) / (ICONS.len() + 1) as f64;
    for (i, role) in ICONS.into_iter().enumerate() {
        let ix = x + gap + i as f64 * (ICON + gap);
        let iy = y + 0.12;
        let icon = ctx
            .rounded(ix, iy, ICON, ICON, 0.15)
            .fill(role)
            .z(1.0)
            .over(dock)
            .push();
        ctx.text(ix + 0.15, iy + 0.15, 0.2, 0.2)
            .contrast_on(role, ContrastUse::Badge)
            .z(2.0)
            .over(icon)
            .push();

        if RUNNING.contains(&i) {
            ctx.circle(ix + ICON / 2.0, y + 0.72, 0.04)
                .fill(Role::OnSurface)
                .z(1.0)
                .over(dock)
                .push();
        }
    }
}
