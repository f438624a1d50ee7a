//! swatchdesk turns color-token scheme documents into desktop mockups.
//!
//! The flow is one-way and pure up to the last step:
//!
//! - Parse a scheme document into a [`PaletteDocument`] ([`parse_str`], [`parse_with`])
//! - Lay out each [`SchemeVariant`] as a [`Scene`] of z-ordered primitives ([`render`])
//! - Place light and dark side by side in a [`Composite`] ([`compose_pair`])
//! - Draw it to SVG or PNG ([`to_svg`], [`rasterize`]) or run all of it via [`render_document`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod color;
pub(crate) mod compose;
/// Render configuration.
pub mod config;
pub(crate) mod layout;
pub(crate) mod palette;
/// Batch rendering of whole documents.
pub mod pipeline;
pub(crate) mod render;
pub(crate) mod scene;

pub use crate::foundation::core::{Point, Rect, Rng64, Size, Vec2, derive_seed};
pub use crate::foundation::error::{SwatchError, SwatchResult};

pub use crate::color::codec::{
    ContrastText, ContrastThresholds, Rgb, Rgba, contrast_text, decode, encode, luminance,
    normalize, try_decode,
};
pub use crate::color::role::{ContainerPair, Role, TokenKey, UnknownRole};
pub use crate::compose::composite::{Anchor, Composite, Label, Panel, compose_pair};
pub use crate::compose::summary::{
    COMPARISON_TOKENS, compose_comparison, compose_extracted, compose_overview,
};
pub use crate::config::{CanvasSize, OutputFormat, RenderConfig};
pub use crate::layout::{LayoutOptions, render};
pub use crate::palette::model::{
    ColorScheme, HexColor, PaletteDocument, SchemeVariant, TokenMap, Variant,
};
pub use crate::palette::parser::{
    Diagnostic, DiagnosticKind, ParseOptions, Parsed, parse_lines, parse_path, parse_str,
    parse_with,
};
pub use crate::pipeline::{Artifact, Output, render_document, render_scheme, write_outputs};
pub use crate::render::raster::{FrameRGBA, rasterize, rasterize_svg, write_png};
pub use crate::render::surface::{DrawCall, RecordingSurface, Surface, draw_composite};
pub use crate::render::svg::{SvgSurface, to_svg};
pub use crate::scene::model::{Binding, ItemId, Region, Scene, SceneItem};
pub use crate::scene::primitive::{Polygon, Primitive, RoundRect, Shape, Stroke};
