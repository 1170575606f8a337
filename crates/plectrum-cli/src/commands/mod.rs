//! CLI command implementations.

pub mod chord;
pub mod neck;
pub mod presets;
pub mod render;
pub mod spectrum;
