//! Inactive background window showing a terminal with syntax-tinted code lines.

use crate::{
    color::role::Role,
    layout::ctx::LayoutCtx,
    scene::model::Region,
};

const X: f64 = 0.8;
const Y: f64 = 1.4;
const W: f64 = 5.6;
const H: f64 = 4.4;
const TITLE_H: f64 = 0.55;

const LINES: usize = 9;
const LINE_PITCH: f64 = 0.36;
const LINE_H: f64 = 0.14;
const INDENT: f64 = 0.3;
/// Right margin the code lines never cross.
const TEXT_RIGHT: f64 = X + W - 0.3;

pub(super) fn compose(ctx: &mut LayoutCtx<'_>) {
    let backdrop = ctx.body(Region::Wallpaper);
    let body = ctx
        .rounded(X, Y, W, H, 0.35)
        .fill(Role::SurfaceContainer)
        .stroke(Role::OutlineVariant, 0.02)
        .shadow(0.12, 0.12, 0.12)
        .over(backdrop)
        .body()
        .push();

    let title = ctx
        .rounded(X, Y, W, TITLE_H, 0.35)
        .fill(Role::SurfaceContainerHigh)
        .z(1.0)
        .over(body)
        .push();
    for i in 0..3 {
        ctx.circle(X + 0.35 + i as f64 * 0.3, Y + TITLE_H / 2.0, 0.09)
            .fill(Role::Outline)
            .z(2.0)
            .over(title)
            .push();
    }
    ctx.text(X + W / 2.0 - 0.8, Y + 0.21, 1.6, 0.14)
        .fill(Role::OnSurfaceVariant)
        .z(2.0)
        .over(title)
        .push();

    let mut last_end = X + 0.35;
    let mut last_y = Y + 0.9;
    for i in 0..LINES {
        let y = Y + 0.9 + i as f64 * LINE_PITCH;
        let mut x = X + 0.35;

        if i % 3 == 0 {
            ctx.text(x, y, 0.22, LINE_H)
                .fill(Role::Primary)
                .z(2.0)
                .over(body)
                .push();
            x += 0.32;
        } else {
            x += 0.32 + (i % 3) as f64 * INDENT;
        }

        let keyword = ctx.rng.range(0.4, 1.2);
        let rest = ctx.rng.range(0.8, 2.6);

        let keyword = keyword.min(TEXT_RIGHT - x);
        ctx.text(x, y, keyword, LINE_H)
            .fill(Role::Secondary)
            .z(2.0)
            .over(body)
            .push();
        x += keyword + 0.12;

        let rest = rest.min(TEXT_RIGHT - x).max(0.1);
        let role = if i % 2 == 0 {
            Role::OnSurface
        } else {
            Role::Tertiary
        };
        ctx.text(x, y, rest, LINE_H)
            .fill(role)
            .z(2.0)
            .over(body)
            .push();

        last_end = x + rest;
        last_y = y;
    }

    // block cursor after the last line
    ctx.rounded(last_end + 0.1, last_y - 0.03, 0.12, 0.2, 0.02)
        .fill(Role::Primary)
        .alpha(0.8)
        .z(3.0)
        .over(body)
        .push();
}
