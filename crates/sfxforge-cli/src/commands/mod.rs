//! CLI command implementations

pub mod inspect;
pub mod placeholders;
pub mod render;
pub mod synth;

mod reporting;
