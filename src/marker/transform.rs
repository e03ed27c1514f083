//! Transform Stage: billboard one quad corner of one instance.

use glam::{Mat4, Vec2, Vec3, Vec4};

use super::{instance::InstanceRecord, style::MarkerStyle};
use crate::camera::core::CameraBlock;

/// Per-vertex output of the Transform Stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexOutput {
    /// Clip-space position (consumed by the rasterizer).
    pub clip: Vec4,
    /// Quad-local coordinate, passed through unchanged.
    pub local: Vec2,
    /// Base tint for the whole instance.
    pub tint: Vec3,
    /// Instance-to-camera distance; `None` for the flat variant or when the
    /// camera block has no position.
    pub distance: Option<f32>,
}

/// Replace the rotation/scale block of a model-to-view matrix.
///
/// The upper-left 3×3 becomes `diag(scale)` and the translation column is
/// left untouched, so the quad's local X/Y axes line up with the view's X/Y
/// axes. This is the billboard: it must run on `view × model`, after the
/// multiply, because patching `model` alone would leave the view rotation
/// in place.
#[inline]
pub fn billboard(model_to_view: Mat4, scale: Vec3) -> Mat4 {
    let mut m = model_to_view;
    m.x_axis = Vec4::new(scale.x, 0.0, 0.0, m.x_axis.w);
    m.y_axis = Vec4::new(0.0, scale.y, 0.0, m.y_axis.w);
    m.z_axis = Vec4::new(0.0, 0.0, scale.z, m.z_axis.w);
    m
}

/// Lengths of a matrix's three basis columns (its per-axis scale).
#[inline]
pub fn basis_scale(model: &Mat4) -> Vec3 {
    Vec3::new(
        model.x_axis.truncate().length(),
        model.y_axis.truncate().length(),
        model.z_axis.truncate().length(),
    )
}

/// Run the Transform Stage for one instance and one quad corner.
pub fn transform_vertex(
    camera: &CameraBlock,
    instance: &InstanceRecord,
    corner: Vec2,
    style: &MarkerStyle,
) -> VertexOutput {
    let model = instance.model_matrix();
    let scale = if style.keep_instance_scale {
        basis_scale(&model)
    } else {
        Vec3::ONE
    };
    let model_to_view = billboard(camera.view * model, scale);
    let clip =
        camera.projection * model_to_view * corner.extend(0.0).extend(1.0);

    let distance = camera
        .position
        .filter(|_| style.shading.uses_distance())
        .map(|eye| instance.position().distance(eye));
    let tint = match distance {
        Some(d) => style.bands.sample(d, style.ramp_policy),
        None => style.flat_color,
    };

    VertexOutput {
        clip,
        local: corner,
        tint,
        distance,
    }
}
