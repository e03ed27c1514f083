//! Quad geometry and per-instance records.
//!
//! Every mark shares the same six-vertex quad; instances arrive either as a
//! bare position or as a position plus full model matrix.

use glam::{Mat4, Vec2, Vec3};

/// One corner of the shared marker quad.
///
/// Must match the WGSL `@location(0) corner: vec2<f32>` vertex input.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    /// Quad-local position in [-0.5, 0.5]².
    pub position: [f32; 2],
}

impl QuadVertex {
    /// Corner as a `glam` vector.
    pub fn corner(self) -> Vec2 {
        Vec2::from_array(self.position)
    }
}

/// The unit quad every mark is drawn with: two counter-clockwise triangles
/// over the corners (±0.5, ±0.5). Identical for all instances.
pub const QUAD_VERTICES: [QuadVertex; 6] = [
    QuadVertex { position: [-0.5, 0.5] },
    QuadVertex { position: [-0.5, -0.5] },
    QuadVertex { position: [0.5, 0.5] },
    QuadVertex { position: [-0.5, -0.5] },
    QuadVertex { position: [0.5, -0.5] },
    QuadVertex { position: [0.5, 0.5] },
];

/// The four distinct quad corners, counter-clockwise from bottom-left.
pub const QUAD_CORNERS: [Vec2; 4] = [
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(-0.5, 0.5),
];

/// Per-instance input to the Transform Stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InstanceRecord {
    /// World position only. The local-to-world transform is a pure
    /// translation.
    Position(Vec3),
    /// World position plus a full model matrix. Rotation in `model` is
    /// cancelled by the billboard step; its translation is kept.
    Transformed {
        /// World position used for the camera distance.
        position: Vec3,
        /// Local-to-world matrix used as-is.
        model: Mat4,
    },
}

impl InstanceRecord {
    /// World position of the instance.
    pub fn position(&self) -> Vec3 {
        match *self {
            Self::Position(p) | Self::Transformed { position: p, .. } => p,
        }
    }

    /// Local-to-world matrix of the instance.
    pub fn model_matrix(&self) -> Mat4 {
        match *self {
            Self::Position(p) => Mat4::from_translation(p),
            Self::Transformed { model, .. } => model,
        }
    }

    /// Which GPU instance layout this record needs.
    pub fn shape(&self) -> InstanceShape {
        match self {
            Self::Position(_) => InstanceShape::Position,
            Self::Transformed { .. } => InstanceShape::Model,
        }
    }
}

/// The two per-instance stream layouts a marker shader can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstanceShape {
    /// [`PositionInstance`] stream.
    Position,
    /// [`ModelInstance`] stream.
    Model,
}

/// Position-only instance record for the GPU.
///
/// Must match the WGSL vertex input `@location(1) pos: vec3<f32>`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionInstance {
    /// World position.
    pub pos: [f32; 3],
}

/// Position + model matrix instance record for the GPU.
///
/// Must match the WGSL vertex inputs `@location(1) pos` and
/// `@location(2..=5)` model columns.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelInstance {
    /// World position.
    pub pos: [f32; 3],
    /// Column-major local-to-world matrix.
    pub model: [[f32; 4]; 4],
}

impl From<&InstanceRecord> for PositionInstance {
    fn from(record: &InstanceRecord) -> Self {
        Self {
            pos: record.position().to_array(),
        }
    }
}

impl From<&InstanceRecord> for ModelInstance {
    fn from(record: &InstanceRecord) -> Self {
        Self {
            pos: record.position().to_array(),
            model: record.model_matrix().to_cols_array_2d(),
        }
    }
}

impl From<&ModelInstance> for InstanceRecord {
    fn from(raw: &ModelInstance) -> Self {
        Self::Transformed {
            position: Vec3::from_array(raw.pos),
            model: Mat4::from_cols_array_2d(&raw.model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_covers_the_four_corners() {
        for corner in QUAD_CORNERS {
            assert!(QUAD_VERTICES.iter().any(|v| v.corner() == corner));
        }
        assert!(QUAD_VERTICES
            .iter()
            .all(|v| v.position[0].abs() == 0.5 && v.position[1].abs() == 0.5));
    }

    #[test]
    fn quad_triangles_are_counter_clockwise() {
        for tri in QUAD_VERTICES.chunks(3) {
            let (a, b, c) = (tri[0].corner(), tri[1].corner(), tri[2].corner());
            assert!((b - a).perp_dot(c - a) > 0.0);
        }
    }

    #[test]
    fn position_record_is_pure_translation() {
        let p = Vec3::new(3.0, -1.0, 7.5);
        let record = InstanceRecord::Position(p);
        let model = record.model_matrix();
        assert_eq!(model.w_axis.truncate(), p);
        assert_eq!(model.x_axis, glam::Vec4::X);
        assert_eq!(model.y_axis, glam::Vec4::Y);
        assert_eq!(model.z_axis, glam::Vec4::Z);
        assert_eq!(record.shape(), InstanceShape::Position);
    }

    #[test]
    fn gpu_records_match_wgsl_strides() {
        assert_eq!(size_of::<QuadVertex>(), 8);
        assert_eq!(size_of::<PositionInstance>(), 12);
        assert_eq!(size_of::<ModelInstance>(), 76);
    }

    #[test]
    fn model_instance_round_trips_the_record() {
        let record = InstanceRecord::Transformed {
            position: Vec3::new(1.0, 2.0, 3.0),
            model: Mat4::from_scale_rotation_translation(
                Vec3::splat(2.0),
                glam::Quat::from_rotation_y(0.3),
                Vec3::new(1.0, 2.0, 3.0),
            ),
        };
        let raw = ModelInstance::from(&record);
        assert_eq!(InstanceRecord::from(&raw), record);
    }
}
