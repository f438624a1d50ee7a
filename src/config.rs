//! Render configuration: JSON file, environment override, then CLI flags on top.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    color::codec::ContrastThresholds,
    foundation::{
        core::Size,
        error::{SwatchError, SwatchResult},
    },
    layout::LayoutOptions,
    palette::model::HexColor,
};

/// Environment variable that replaces [`RenderConfig::seed`] when it parses as `u64`.
pub const SEED_ENV: &str = "SWATCHDESK_SEED";

/// Logical canvas of one desktop mockup.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1600.0,
            height: 1000.0,
        }
    }
}

/// Container written for each artifact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    #[default]
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub canvas: CanvasSize,
    /// Base seed; each scheme derives its own from this and its name.
    pub seed: u64,
    /// Fill for tokens a scheme does not define.
    pub default_color: HexColor,
    pub contrast: ContrastThresholds,
    pub format: OutputFormat,
    /// Raster pixels per logical unit. Ignored for SVG.
    pub scale: f64,
    /// Render schemes on a rayon pool.
    pub parallel: bool,
    /// Worker count for the pool; rayon's default when unset.
    pub threads: Option<usize>,
    /// Reject parse diagnostics and missing tokens instead of substituting.
    pub strict: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            seed: 42,
            default_color: HexColor::new("#000000"),
            contrast: ContrastThresholds::default(),
            format: OutputFormat::default(),
            scale: 1.0,
            parallel: false,
            threads: None,
            strict: false,
        }
    }
}

impl RenderConfig {
    pub fn from_json(text: &str) -> SwatchResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> SwatchResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// Apply [`SEED_ENV`] from the process environment.
    pub fn with_env(self) -> Self {
        let raw = std::env::var(SEED_ENV).ok();
        self.with_seed_override(raw.as_deref())
    }

    pub(crate) fn with_seed_override(mut self, raw: Option<&str>) -> Self {
        if let Some(seed) = raw.and_then(|v| v.trim().parse::<u64>().ok()) {
            self.seed = seed;
        }
        self
    }

    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas.width, self.canvas.height)
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            default_color: self.default_color.rgb(),
            contrast: self.contrast,
        }
    }

    pub fn validate(&self) -> SwatchResult<()> {
        let CanvasSize { width, height } = self.canvas;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SwatchError::validation(format!(
                "canvas must be finite and > 0, got {width}x{height}"
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(SwatchError::validation(format!(
                "scale must be finite and > 0, got {}",
                self.scale
            )));
        }
        for (name, t) in [("panel", self.contrast.panel), ("badge", self.contrast.badge)] {
            if !(0.0..=1.0).contains(&t) {
                return Err(SwatchError::validation(format!(
                    "contrast.{name} must be within [0, 1], got {t}"
                )));
            }
        }
        if !self.default_color.is_well_formed() {
            return Err(SwatchError::validation(format!(
                "default_color '{}' is not a 3- or 6-digit hex color",
                self.default_color
            )));
        }
        if self.threads == Some(0) {
            return Err(SwatchError::validation("threads must be >= 1 when set"));
        }
        Ok(())
    }
}
