pub type SwatchResult<T> = Result<T, SwatchError>;

/// Errors surfaced by configuration, strict mode, composition and output.
///
/// The parsing and layout core never produces these for bad data; it substitutes instead.
#[derive(thiserror::Error, Debug)]
pub enum SwatchError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SwatchError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SwatchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}
