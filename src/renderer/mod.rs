//! Marker pipeline pieces that touch wgpu directly.
//!
//! [`marker_shader::MarkerShader`] enumerates the shader permutations;
//! [`pipeline_util`] holds the blend and depth states a host plugs into its
//! own render pipeline.

pub mod marker_shader;
pub mod pipeline_util;

pub use marker_shader::MarkerShader;
