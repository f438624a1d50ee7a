//! Vector primitives and the scene they are collected into.

pub(crate) mod model;
pub(crate) mod primitive;
