//! Typeface registration, shaping and word wrap.

pub mod engine;
pub mod fonts;
pub mod wrap;
