use crate::{
    color::role::Role,
    layout::ctx::{GRID_H, GRID_W, LayoutCtx},
};

pub(super) fn compose(ctx: &mut LayoutCtx<'_>) {
    let backdrop = ctx
        .rounded(0.0, 0.0, GRID_W, GRID_H, 0.0)
        .fill(Role::Background)
        .body()
        .push();

    let blobs = [
        (2.0, 8.0, 4.0, Role::TertiaryContainer, 0.85),
        (GRID_W - 2.0, 2.0, 5.0, Role::SecondaryContainer, 0.85),
        (9.0, 5.5, 2.2, Role::PrimaryContainer, 0.35),
    ];
    for (i, (cx, cy, r, role, alpha)) in blobs.into_iter().enumerate() {
        ctx.circle(cx, cy, r)
            .fill(role)
            .alpha(alpha)
            .z(0.1 * (i + 1) as f64)
            .over(backdrop)
            .push();
    }
}
