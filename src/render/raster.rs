use std::{
    path::Path,
    sync::{Arc, OnceLock},
};

use anyhow::Context;

use crate::{
    compose::composite::Composite,
    foundation::error::{SwatchError, SwatchResult},
    render::svg::to_svg,
};

const MAX_DIM: u32 = 16_384;

/// A rasterized composite.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Straight-alpha RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4)?.try_into().ok()
    }
}

/// System fonts, loaded once per process and shared by every rasterization.
fn fontdb() -> Arc<usvg::fontdb::Database> {
    static FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "loaded system fonts");
            Arc::new(db)
        })
        .clone()
}

fn to_px(v: f32, scale: f64) -> SwatchResult<u32> {
    let px = (f64::from(v) * scale).ceil();
    if !px.is_finite() || px < 1.0 {
        return Err(SwatchError::render("svg has invalid width/height"));
    }
    if px > f64::from(MAX_DIM) {
        return Err(SwatchError::render(format!(
            "raster size too large: {px} px (max {MAX_DIM})"
        )));
    }
    Ok(px as u32)
}

/// Rasterize an SVG document at `scale` pixels per logical unit.
#[tracing::instrument(skip(svg), fields(bytes = svg.len()))]
pub fn rasterize_svg(svg: &str, scale: f64) -> SwatchResult<FrameRGBA> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(SwatchError::validation("raster scale must be finite and > 0"));
    }

    let opts = usvg::Options {
        fontdb: fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;

    let size = tree.size();
    let width = to_px(size.width(), scale)?;
    let height = to_px(size.height(), scale)?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| SwatchError::render("failed to allocate pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    Ok(FrameRGBA {
        width,
        height,
        data,
    })
}

/// Rasterize `composite` through its SVG form.
pub fn rasterize(composite: &Composite, scale: f64) -> SwatchResult<FrameRGBA> {
    rasterize_svg(&to_svg(composite), scale)
}

pub fn write_png(frame: &FrameRGBA, path: &Path) -> SwatchResult<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
