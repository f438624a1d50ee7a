//! Arranges finished scenes into output artifacts. No geometry decisions happen here beyond
//! placement of whole panels and labels.

pub(crate) mod composite;
pub(crate) mod summary;
