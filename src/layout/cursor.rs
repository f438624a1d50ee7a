use crate::{
    color::role::Role,
    layout::{ctx::LayoutCtx, window::SLIDER_THUMB},
    scene::model::Region,
};

/// Arrow outline with the tip at the origin, pointing up-left.
const ARROW: [(f64, f64); 7] = [
    (0.0, 0.0),
    (0.0, 1.2),
    (0.3, 0.9),
    (0.5, 1.4),
    (0.7, 1.3),
    (0.5, 0.8),
    (0.9, 0.8),
];
const SCALE: f64 = 0.6;

pub(super) fn compose(ctx: &mut LayoutCtx<'_>) {
    // hovering the window's slider thumb
    let (tx, ty) = (SLIDER_THUMB.0 + 0.08, SLIDER_THUMB.1 + 0.08);
    let below = ctx.body(Region::PrimaryWindow);
    ctx.polygon(ARROW.map(|(x, y)| (tx + x * SCALE, ty + y * SCALE)))
        .fill(Role::Primary)
        .stroke(Role::OnPrimary, 0.03)
        .over(below)
        .push();
}
