//! Hex color codec, contrast helpers and the typed token vocabulary.

pub(crate) mod codec;
pub(crate) mod role;
