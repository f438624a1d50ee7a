//! The palette document model and the line-oriented scheme parser that builds it.

pub(crate) mod model;
pub(crate) mod parser;
