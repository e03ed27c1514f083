//! The two-stage marker pipeline, evaluated on the CPU.
//!
//! A mark is a unit quad billboarded toward the camera and shaded as a soft
//! round dot whose color and opacity encode its distance from the viewer.
//!
//! - [`transform::transform_vertex`] is the per-vertex stage: it builds the
//!   instance's local-to-world matrix, multiplies it with the view, patches
//!   the rotation block to identity (the billboard), projects the quad corner
//!   and picks a tint from the distance bands.
//! - [`shading::shade_fragment`] is the per-pixel stage: radial falloff times
//!   the optional logistic depth fade.
//!
//! Both are pure functions of their inputs and mirror
//! `assets/shaders/raster/marker.wgsl` line for line, so hosts can use them
//! for previews or picking and tests can pin the shader's behavior.

pub mod instance;
pub mod ramp;
pub mod shading;
pub mod style;
pub mod transform;

pub use instance::{
    InstanceRecord, InstanceShape, ModelInstance, PositionInstance, QuadVertex,
    QUAD_CORNERS, QUAD_VERTICES,
};
pub use ramp::{DistanceBands, RampPolicy};
pub use shading::{
    radial_alpha, shade_fragment, DepthFade, FragmentInput, ShadingVariant,
};
pub use style::{MarkerParams, MarkerStyle};
pub use transform::{billboard, transform_vertex, VertexOutput};
