//! GPU-side utilities.

pub mod shader_composer;
