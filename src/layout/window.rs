//! Foreground application window: navigation rail, header, info card, switches and a slider.

use crate::{
    color::role::{ContainerPair, Role},
    layout::ctx::{ContrastUse, LayoutCtx},
    scene::model::{ItemId, Region},
};

const X: f64 = 4.2;
const Y: f64 = 1.6;
const W: f64 = 8.2;
const H: f64 = 6.6;
const RADIUS: f64 = 0.4;

const RAIL_W: f64 = 2.0;
const NAV_ITEMS: usize = 5;
const NAV_SELECTED: usize = 1;
const NAV_PITCH: f64 = 0.6;

const CONTENT_X: f64 = X + RAIL_W + 0.4;
const CONTENT_W: f64 = W - RAIL_W - 0.8;

const SLIDER_X: f64 = CONTENT_X + 1.7;
const SLIDER_Y: f64 = Y + 5.1;
const SLIDER_W: f64 = 2.4;
const SLIDER_FILL: f64 = 0.55;

/// Center of the content slider's thumb, in grid units.
pub(super) const SLIDER_THUMB: (f64, f64) = (SLIDER_X + SLIDER_W * SLIDER_FILL, SLIDER_Y + 0.05);

pub(super) fn compose(ctx: &mut LayoutCtx<'_>) {
    let below = ctx.body(Region::Terminal).or(ctx.body(Region::Wallpaper));
    let body = ctx
        .rounded(X, Y, W, H, RADIUS)
        .fill(Role::Surface)
        .stroke(Role::OutlineVariant, 0.025)
        .shadow(0.2, 0.2, 0.15)
        .over(below)
        .body()
        .push();

    let rail = ctx
        .rounded(X, Y, RAIL_W, H, RADIUS)
        .fill(Role::SurfaceContainerLow)
        .z(1.0)
        .over(body)
        .push();

    for (i, role) in [Role::Error, Role::Tertiary, Role::Primary].into_iter().enumerate() {
        ctx.circle(X + 0.4 + i as f64 * 0.4, Y + 0.5, 0.12)
            .fill(role)
            .z(2.0)
            .over(rail)
            .push();
    }

    navigation(ctx, rail);
    header(ctx, body);
    info_card(ctx, body);
    switches(ctx, body);
    slider(ctx, body);
    fab(ctx, body);
}

fn navigation(ctx: &mut LayoutCtx<'_>, rail: ItemId) {
    let selected = ContainerPair::of(Role::Secondary);
    for i in 0..NAV_ITEMS {
        let y = Y + 1.3 + i as f64 * NAV_PITCH;
        if i == NAV_SELECTED {
            let pill = ctx
                .rounded(X + 0.2, y - 0.17, RAIL_W - 0.4, 0.5, 0.25)
                .fill(selected.container.clone())
                .z(2.0)
                .over(rail)
                .push();
            ctx.circle(X + 0.5, y + 0.08, 0.09)
                .fill(selected.on_container.clone())
                .z(3.0)
                .over(pill)
                .push();
            ctx.text(X + 0.7, y, 0.8, 0.15)
                .fill(selected.on_container.clone())
                .z(3.0)
                .over(pill)
                .push();
        } else {
            ctx.circle(X + 0.5, y + 0.08, 0.09)
                .fill(Role::OnSurfaceVariant)
                .z(2.0)
                .over(rail)
                .push();
            ctx.text(X + 0.7, y, 0.8, 0.15)
                .fill(Role::OnSurfaceVariant)
                .z(2.0)
                .over(rail)
                .push();
        }
    }
}

fn header(ctx: &mut LayoutCtx<'_>, body: ItemId) {
    ctx.text(CONTENT_X, Y + 0.7, 2.5, 0.4)
        .fill(Role::OnSurface)
        .z(1.0)
        .over(body)
        .push();
    ctx.text(CONTENT_X, Y + 1.25, 3.6, 0.16)
        .fill(Role::OnSurfaceVariant)
        .z(1.0)
        .over(body)
        .push();

    let chip = ContainerPair::of(Role::Tertiary);
    let chip_x = CONTENT_X + CONTENT_W - 1.2;
    let pill = ctx
        .rounded(chip_x, Y + 0.7, 1.2, 0.4, 0.2)
        .fill(chip.container)
        .z(1.0)
        .over(body)
        .push();
    ctx.text(chip_x + 0.25, Y + 0.83, 0.7, 0.14)
        .fill(chip.on_container)
        .z(2.0)
        .over(pill)
        .push();
}

fn info_card(ctx: &mut LayoutCtx<'_>, body: ItemId) {
    let card_y = Y + 1.8;
    let card = ctx
        .rounded(CONTENT_X, card_y, CONTENT_W, 1.5, 0.3)
        .fill(Role::SurfaceContainerHighest)
        .z(1.0)
        .over(body)
        .push();

    let icon = ContainerPair::of(Role::Primary);
    let icon_box = ctx
        .rounded(CONTENT_X + 0.2, card_y + 0.3, 0.9, 0.9, 0.2)
        .fill(icon.container)
        .z(2.0)
        .over(card)
        .push();
    ctx.text(CONTENT_X + 0.5, card_y + 0.6, 0.3, 0.3)
        .fill(icon.on_container)
        .z(3.0)
        .over(icon_box)
        .push();

    ctx.text(CONTENT_X + 1.3, card_y + 0.45, 2.0, 0.2)
        .fill(Role::OnSurface)
        .z(2.0)
        .over(card)
        .push();
    ctx.text(CONTENT_X + 1.3, card_y + 0.85, 2.6, 0.15)
        .fill(Role::OnSurfaceVariant)
        .z(2.0)
        .over(card)
        .push();

    let button_x = CONTENT_X + CONTENT_W - 1.3;
    let button = ctx
        .rounded(button_x, card_y + 1.0, 1.1, 0.32, 0.16)
        .fill(Role::Primary)
        .z(2.0)
        .over(card)
        .push();
    ctx.text(button_x + 0.25, card_y + 1.1, 0.6, 0.12)
        .contrast_on(Role::Primary, ContrastUse::Badge)
        .z(3.0)
        .over(button)
        .push();
}

fn switches(ctx: &mut LayoutCtx<'_>, body: ItemId) {
    let track_x = CONTENT_X + CONTENT_W - 1.0;

    // active
    let y = Y + 3.7;
    ctx.text(CONTENT_X, y + 0.17, 2.2, 0.16)
        .fill(Role::OnSurface)
        .z(1.0)
        .over(body)
        .push();
    let track = ctx
        .rounded(track_x, y, 1.0, 0.5, 0.25)
        .fill(Role::Primary)
        .z(1.0)
        .over(body)
        .push();
    ctx.circle(track_x + 0.75, y + 0.25, 0.18)
        .fill(Role::OnPrimary)
        .z(2.0)
        .over(track)
        .push();

    // inactive
    let y = Y + 4.4;
    ctx.text(CONTENT_X, y + 0.17, 1.8, 0.16)
        .fill(Role::OnSurface)
        .z(1.0)
        .over(body)
        .push();
    let track = ctx
        .rounded(track_x, y, 1.0, 0.5, 0.25)
        .fill(Role::SurfaceContainerHighest)
        .stroke(Role::Outline, 0.03)
        .z(1.0)
        .over(body)
        .push();
    ctx.circle(track_x + 0.25, y + 0.25, 0.12)
        .fill(Role::Outline)
        .z(2.0)
        .over(track)
        .push();
}

fn slider(ctx: &mut LayoutCtx<'_>, body: ItemId) {
    ctx.text(CONTENT_X, SLIDER_Y - 0.03, 1.4, 0.16)
        .fill(Role::OnSurfaceVariant)
        .z(1.0)
        .over(body)
        .push();
    let track = ctx
        .text(SLIDER_X, SLIDER_Y, SLIDER_W, 0.1)
        .fill(Role::OutlineVariant)
        .z(1.0)
        .over(body)
        .push();
    let active = ctx
        .text(SLIDER_X, SLIDER_Y, SLIDER_W * SLIDER_FILL, 0.1)
        .fill(Role::Primary)
        .z(2.0)
        .over(track)
        .push();
    let (tx, ty) = SLIDER_THUMB;
    ctx.circle(tx, ty, 0.15)
        .fill(Role::Primary)
        .z(3.0)
        .over(active)
        .push();
}

fn fab(ctx: &mut LayoutCtx<'_>, body: ItemId) {
    let fab = ContainerPair::of(Role::Tertiary);
    let (x, y) = (X + W - 1.5, Y + H - 1.5);
    let button = ctx
        .rounded(x, y, 1.1, 1.1, 0.35)
        .fill(fab.container)
        .shadow(0.06, 0.08, 0.2)
        .z(4.0)
        .over(body)
        .push();
    ctx.text(x + 0.35, y + 0.35, 0.4, 0.4)
        .fill(fab.on_container)
        .z(5.0)
        .over(button)
        .push();
}
