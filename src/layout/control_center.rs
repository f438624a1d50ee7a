//! Floating control center: two large toggle pills, a row of round toggles, two sliders.

use crate::{
    color::role::{ContainerPair, Role, TokenKey},
    layout::ctx::{ContrastUse, LayoutCtx},
    scene::model::{ItemId, Region},
};

const X: f64 = 12.7;
const Y: f64 = 1.1;
const W: f64 = 3.0;
const H: f64 = 4.5;

const PILL_W: f64 = 1.25;
const PILL_H: f64 = 0.6;
const ROUND_BUTTONS: usize = 4;
const ROUND_ACTIVE: [usize; 2] = [0, 2];

const SLIDER_W: f64 = 2.6;
const SLIDER_H: f64 = 0.36;
const SLIDER_FILLS: [f64; 2] = [0.7, 0.4];

/// Background and foreground for a toggle in the given state.
fn toggle_tokens(active: bool, accent: Role) -> (TokenKey, TokenKey) {
    if active {
        let pair = ContainerPair::of(accent);
        (pair.container, pair.on_container)
    } else {
        (
            Role::SurfaceContainerHighest.into(),
            Role::OnSurfaceVariant.into(),
        )
    }
}

pub(super) fn compose(ctx: &mut LayoutCtx<'_>) {
    let backdrop = ctx.body(Region::Wallpaper);
    let panel = ctx
        .rounded(X, Y, W, H, 0.35)
        .fill(Role::SurfaceContainer)
        .alpha(0.96)
        .stroke(Role::OutlineVariant, 0.02)
        .shadow(0.1, 0.14, 0.16)
        .over(backdrop)
        .body()
        .push();

    ctx.text(X + 0.25, Y + 0.25, 1.2, 0.16)
        .fill(Role::OnSurface)
        .z(1.0)
        .over(panel)
        .push();

    pills(ctx, panel);
    round_buttons(ctx, panel);
    for (j, fill) in SLIDER_FILLS.into_iter().enumerate() {
        slider(ctx, panel, Y + 2.25 + j as f64 * 0.95, fill);
    }

    ctx.text(X + 0.25, Y + 4.05, 0.8, 0.14)
        .fill(Role::OnSurfaceVariant)
        .z(1.0)
        .over(panel)
        .push();
    let power = ContainerPair::of(Role::Error);
    let button = ctx
        .circle(X + W - 0.4, Y + 4.12, 0.17)
        .fill(power.container)
        .z(1.0)
        .over(panel)
        .push();
    ctx.circle(X + W - 0.4, Y + 4.12, 0.06)
        .fill(power.on_container)
        .z(2.0)
        .over(button)
        .push();
}

fn pills(ctx: &mut LayoutCtx<'_>, panel: ItemId) {
    for i in 0..2 {
        let (bg, fg) = toggle_tokens(i == 0, Role::Primary);
        let px = X + 0.2 + i as f64 * (PILL_W + 0.1);
        let py = Y + 0.6;
        let pill = ctx
            .rounded(px, py, PILL_W, PILL_H, PILL_H / 2.0)
            .fill(bg)
            .z(1.0)
            .over(panel)
            .push();
        ctx.circle(px + 0.3, py + PILL_H / 2.0, 0.14)
            .fill(fg.clone())
            .z(2.0)
            .over(pill)
            .push();
        ctx.text(px + 0.55, py + 0.24, 0.5, 0.12)
            .fill(fg)
            .z(2.0)
            .over(pill)
            .push();
    }
}

fn round_buttons(ctx: &mut LayoutCtx<'_>, panel: ItemId) {
    let cy = Y + 1.65;
    for i in 0..ROUND_BUTTONS {
        let (bg, fg) = toggle_tokens(ROUND_ACTIVE.contains(&i), Role::Secondary);
        let cx = X + 0.5 + i as f64 * 0.67;
        let button = ctx.circle(cx, cy, 0.26).fill(bg).z(1.0).over(panel).push();
        ctx.circle(cx, cy, 0.09).fill(fg).z(2.0).over(button).push();
    }
}

fn slider(ctx: &mut LayoutCtx<'_>, panel: ItemId, y: f64, fill: f64) {
    ctx.text(X + 0.25, y, 0.9, 0.12)
        .fill(Role::OnSurfaceVariant)
        .z(1.0)
        .over(panel)
        .push();

    let (sx, sy) = (X + 0.2, y + 0.25);
    let track = ctx
        .rounded(sx, sy, SLIDER_W, SLIDER_H, SLIDER_H / 2.0)
        .fill(Role::SurfaceContainerHighest)
        .z(1.0)
        .over(panel)
        .push();
    let filled = ctx
        .rounded(sx, sy, SLIDER_W * fill, SLIDER_H, SLIDER_H / 2.0)
        .fill(Role::Primary)
        .z(2.0)
        .over(track)
        .push();
    ctx.circle(sx + SLIDER_W * fill - SLIDER_H / 2.0, sy + SLIDER_H / 2.0, 0.12)
        .fill(Role::OnPrimary)
        .z(3.0)
        .over(filled)
        .push();
    // value readout sits on the fill
    ctx.text(sx + 0.15, sy + 0.12, 0.35, 0.12)
        .contrast_on(Role::Primary, ContrastUse::Panel)
        .z(3.0)
        .over(filled)
        .push();
}
