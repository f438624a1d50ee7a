use serde::{Deserialize, Serialize};

/// Straight RGB color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Perceptual luminance of this color, see [`luminance`].
    pub fn luminance(self) -> f64 {
        luminance(self.r, self.g, self.b)
    }

    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: a.clamp(0.0, 1.0),
        }
    }

    pub fn opaque(self) -> Rgba {
        self.with_alpha(1.0)
    }
}

/// Straight-alpha RGBA color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }
}

fn channel_to_u8(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Decode a hex color leniently.
///
/// Leading `#` characters are stripped. Six digits decode as `rrggbb`, three digits as the
/// shorthand `rgb`. Any other length, or any non-hex digit, decodes to black.
pub fn decode(hex: &str) -> Rgb {
    try_decode(hex).unwrap_or(Rgb::BLACK)
}

/// Decode a hex color, returning `None` where [`decode`] would fall back to black.
pub fn try_decode(hex: &str) -> Option<Rgb> {
    let digits = hex.trim_start_matches('#');
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |b: u8| -> u8 {
        match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => b - b'A' + 10,
        }
    };
    let scale = |v: u8| f64::from(v) / 255.0;

    let bytes = digits.as_bytes();
    match bytes.len() {
        6 => {
            let byte = |i: usize| (nibble(bytes[i]) << 4) | nibble(bytes[i + 1]);
            Some(Rgb::new(scale(byte(0)), scale(byte(2)), scale(byte(4))))
        }
        3 => {
            let doubled = |i: usize| nibble(bytes[i]) * 17;
            Some(Rgb::new(
                scale(doubled(0)),
                scale(doubled(1)),
                scale(doubled(2)),
            ))
        }
        _ => None,
    }
}

/// Encode as lowercase `#rrggbb`.
pub fn encode(rgb: Rgb) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channel_to_u8(rgb.r),
        channel_to_u8(rgb.g),
        channel_to_u8(rgb.b)
    )
}

/// Canonical lowercase six-digit form of `hex`; malformed input normalizes to `#000000`.
pub fn normalize(hex: &str) -> String {
    encode(decode(hex))
}

/// ITU-R 601 weighting: `0.299 r + 0.587 g + 0.114 b`.
pub fn luminance(r: f64, g: f64, b: f64) -> f64 {
    0.299 * r + 0.587 * g + 0.114 * b
}

/// Legible text color for content drawn on a fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastText {
    White,
    Dark,
}

impl ContrastText {
    pub fn rgb(self) -> Rgb {
        match self {
            Self::White => Rgb::WHITE,
            // #1d1b20
            Self::Dark => Rgb::new(29.0 / 255.0, 27.0 / 255.0, 32.0 / 255.0),
        }
    }
}

/// `White` when the fill's luminance is below `threshold`, `Dark` otherwise.
pub fn contrast_text(fill: Rgb, threshold: f64) -> ContrastText {
    if fill.luminance() < threshold {
        ContrastText::White
    } else {
        ContrastText::Dark
    }
}

/// Luminance thresholds for the two drawing contexts that pick text colors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastThresholds {
    /// Content sitting on large tinted panel fills (slider fills, brightness bar).
    pub panel: f64,
    /// Content on small saturated badges (dock icons, quick tiles, swatches).
    pub badge: f64,
}

impl Default for ContrastThresholds {
    fn default() -> Self {
        Self {
            panel: 0.55,
            badge: 0.5,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/codec.rs"]
mod tests;
