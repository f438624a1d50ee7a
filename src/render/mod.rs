//! Output surfaces for composites: an SVG writer and a raster path through it.

pub(crate) mod raster;
pub(crate) mod surface;
pub(crate) mod svg;
