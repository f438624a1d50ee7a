use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::color::{
    codec::{self, Rgb},
    role::{Role, TokenKey},
};

/// Hex color text as it appeared in the input, `#`-prefixed.
///
/// Stored verbatim; decoding is lenient (see [`codec::decode`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> Rgb {
        codec::decode(&self.0)
    }

    /// Lowercase six-digit form.
    pub fn normalized(&self) -> String {
        codec::normalize(&self.0)
    }

    /// Whether the text decodes without falling back to black.
    pub fn is_well_formed(&self) -> bool {
        codec::try_decode(&self.0).is_some()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Token name to color mapping for one scheme variant.
///
/// Keys are open-ended; lookups of absent keys resolve to a caller-supplied default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenMap(BTreeMap<String, HexColor>);

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a token, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, hex: HexColor) -> Option<HexColor> {
        self.0.insert(name.into(), hex)
    }

    pub fn get(&self, name: &str) -> Option<&HexColor> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HexColor)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Decoded color for `key`, or `default` when the token is absent.
    pub fn color_or(&self, key: impl Into<TokenKey>, default: Rgb) -> Rgb {
        let key = key.into();
        self.get(key.as_str()).map_or(default, HexColor::rgb)
    }

    /// Decoded color for a well-known role, black when absent.
    pub fn role(&self, role: Role) -> Rgb {
        self.color_or(role, Rgb::BLACK)
    }
}

impl<K: Into<String>> FromIterator<(K, HexColor)> for TokenMap {
    fn from_iter<I: IntoIterator<Item = (K, HexColor)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Light,
    Dark,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Light, Variant::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One token map tagged with its variant.
#[derive(Clone, Copy, Debug)]
pub struct SchemeVariant<'a> {
    pub variant: Variant,
    pub tokens: &'a TokenMap,
}

/// A named scheme with its light and dark token maps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,
    pub light: TokenMap,
    pub dark: TokenMap,
}

impl ColorScheme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            light: TokenMap::new(),
            dark: TokenMap::new(),
        }
    }

    pub fn tokens(&self, variant: Variant) -> &TokenMap {
        match variant {
            Variant::Light => &self.light,
            Variant::Dark => &self.dark,
        }
    }

    pub fn tokens_mut(&mut self, variant: Variant) -> &mut TokenMap {
        match variant {
            Variant::Light => &mut self.light,
            Variant::Dark => &mut self.dark,
        }
    }

    pub fn variant(&self, variant: Variant) -> SchemeVariant<'_> {
        SchemeVariant {
            variant,
            tokens: self.tokens(variant),
        }
    }
}

/// Parsed result: up to four extracted header colors and schemes in first-seen order.
///
/// Read-only once built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteDocument {
    pub(crate) extracted: Vec<HexColor>,
    pub(crate) schemes: Vec<ColorScheme>,
}

impl PaletteDocument {
    pub fn extracted(&self) -> &[HexColor] {
        &self.extracted
    }

    pub fn schemes(&self) -> &[ColorScheme] {
        &self.schemes
    }

    pub fn scheme(&self, name: &str) -> Option<&ColorScheme> {
        self.schemes.iter().find(|s| s.name == name)
    }

    pub fn scheme_names(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(|s| s.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}
