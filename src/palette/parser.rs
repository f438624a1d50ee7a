use std::{
    collections::HashMap,
    fmt,
    path::Path,
    sync::LazyLock,
};

use anyhow::Context as _;
use regex::Regex;
use serde::Serialize;

use crate::{
    foundation::error::{SwatchError, SwatchResult},
    palette::model::{ColorScheme, HexColor, PaletteDocument, Variant},
};

/// Lines `2..6` (0-based) form the extracted-color header.
const EXTRACTED_WINDOW: std::ops::Range<usize> = 2..6;
const TOKEN_SEPARATOR: &str = ": Color #";

static SCHEME_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Scheme (\w+) (Light|Dark):$").expect("scheme header pattern is valid")
});

#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions {
    /// Reject documents with error-level diagnostics instead of degrading silently.
    pub strict: bool,
}

/// A condition the lenient parser degraded past.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The value would decode to black through the fallback path.
    MalformedHex { token: String, value: String },
    EmptyTokenName,
    /// A token line before any `Scheme <Name> <Light|Dark>:` header.
    TokenOutsideScheme,
    /// A later line replaced an earlier value (last write wins).
    Overwritten {
        scheme: String,
        variant: Variant,
        token: String,
    },
}

impl DiagnosticKind {
    /// Whether strict mode rejects the document for this condition.
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Overwritten { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            DiagnosticKind::MalformedHex { token, value } => {
                write!(f, "token '{token}' has malformed hex '{value}'")
            }
            DiagnosticKind::EmptyTokenName => f.write_str("token line has an empty name"),
            DiagnosticKind::TokenOutsideScheme => {
                f.write_str("token line appears before any scheme header")
            }
            DiagnosticKind::Overwritten {
                scheme,
                variant,
                token,
            } => write!(f, "token '{token}' redefined in {scheme} {variant}"),
        }
    }
}

/// Parser output: the document plus everything it silently degraded past.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Parsed {
    pub document: PaletteDocument,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.kind.is_error())
    }
}

/// Lenient parse of a whole document. Never fails.
pub fn parse_str(text: &str) -> PaletteDocument {
    parse_lines(text.lines()).document
}

/// Single forward pass over `lines`.
pub fn parse_lines<I, S>(lines: I) -> Parsed
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extracted = Vec::new();
    let mut schemes: Vec<ColorScheme> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut diagnostics = Vec::new();

    let mut current: Option<(usize, Variant)> = None;

    for (i, raw) in lines.into_iter().enumerate() {
        let line = raw.as_ref().trim();
        let line_no = i + 1;

        if EXTRACTED_WINDOW.contains(&i) && line.starts_with('#') && extracted.len() < 4 {
            extracted.push(HexColor::new(line));
        }

        if let Some(caps) = SCHEME_HEADER.captures(line) {
            let name = &caps[1];
            let variant = if &caps[2] == "Light" {
                Variant::Light
            } else {
                Variant::Dark
            };
            let slot = *index.entry(name.to_owned()).or_insert_with(|| {
                schemes.push(ColorScheme::new(name));
                schemes.len() - 1
            });
            current = Some((slot, variant));
            continue;
        }

        let Some((left, right)) = line.split_once(TOKEN_SEPARATOR) else {
            continue;
        };
        let Some((slot, variant)) = current else {
            diagnostics.push(Diagnostic {
                line: line_no,
                kind: DiagnosticKind::TokenOutsideScheme,
            });
            continue;
        };

        let token = left.trim();
        let hex = HexColor::new(format!("#{}", right.trim()));

        if token.is_empty() {
            diagnostics.push(Diagnostic {
                line: line_no,
                kind: DiagnosticKind::EmptyTokenName,
            });
        }
        if !hex.is_well_formed() {
            diagnostics.push(Diagnostic {
                line: line_no,
                kind: DiagnosticKind::MalformedHex {
                    token: token.to_owned(),
                    value: hex.as_str().to_owned(),
                },
            });
        }

        let scheme = &mut schemes[slot];
        if scheme.tokens_mut(variant).insert(token, hex).is_some() {
            diagnostics.push(Diagnostic {
                line: line_no,
                kind: DiagnosticKind::Overwritten {
                    scheme: scheme.name.clone(),
                    variant,
                    token: token.to_owned(),
                },
            });
        }
    }

    Parsed {
        document: PaletteDocument { extracted, schemes },
        diagnostics,
    }
}

/// Parse `text`, applying `opts`.
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_with(text: &str, opts: ParseOptions) -> SwatchResult<Parsed> {
    let parsed = parse_lines(text.lines());
    tracing::debug!(
        schemes = parsed.document.schemes().len(),
        extracted = parsed.document.extracted().len(),
        diagnostics = parsed.diagnostics.len(),
        "parsed palette document"
    );

    let errors: Vec<&Diagnostic> = parsed.errors().collect();
    if let Some(first) = errors.first() {
        if opts.strict {
            return Err(SwatchError::parse(format!(
                "{} problem(s) in scheme document; first: {first}",
                errors.len()
            )));
        }
        for d in &errors {
            tracing::warn!("{d}");
        }
    }
    Ok(parsed)
}

/// Read and parse a scheme file.
pub fn parse_path(path: impl AsRef<Path>, opts: ParseOptions) -> SwatchResult<Parsed> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read scheme file '{}'", path.display()))?;
    parse_with(&text, opts)
}

#[cfg(test)]
#[path = "../../tests/unit/palette/parser.rs"]
mod tests;
