//! Per-frame camera block and its GPU uniform mirror.

use glam::{Mat4, Vec3};

/// Per-frame camera data consumed by the Transform Stage.
///
/// Supplied by the host once per frame and never mutated by scanmark.
/// `position` is optional: without it no distance is computed and every
/// shading variant degrades to the flat color with radial-only alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBlock {
    /// World → view transform.
    pub view: Mat4,
    /// View → clip transform.
    pub projection: Mat4,
    /// Camera world-space position, if the host provides one.
    pub position: Option<Vec3>,
}

impl CameraBlock {
    /// Camera block without a world position.
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view,
            projection,
            position: None,
        }
    }

    /// Camera block that also carries its world position.
    pub fn with_position(view: Mat4, projection: Mat4, position: Vec3) -> Self {
        Self {
            view,
            projection,
            position: Some(position),
        }
    }

    /// Right-handed look-at camera with a [0,1]-depth perspective
    /// projection (wgpu/Vulkan convention). `fovy` is in degrees.
    pub fn look_at(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        fovy: f32,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let view = Mat4::look_at_rh(eye, target, up);
        let projection =
            Mat4::perspective_rh(fovy.to_radians(), aspect, znear, zfar);
        Self::with_position(view, projection, eye)
    }

    /// Combined view-projection matrix (used for frustum extraction).
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform mirroring [`CameraBlock`].
///
/// Must match the WGSL `CameraUniform` struct in
/// `modules/billboard.wgsl` (144 bytes, column-major matrices).
pub struct CameraUniform {
    /// World → view matrix.
    pub view: [[f32; 4]; 4],
    /// View → clip matrix.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position (ignored when `has_position == 0`).
    pub position: [f32; 3],
    /// 1 when `position` is meaningful, 0 otherwise.
    pub has_position: u32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Identity camera without a position.
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            has_position: 0,
        }
    }

    /// Update uniform fields from the given camera block.
    pub fn update(&mut self, camera: &CameraBlock) {
        self.view = camera.view.to_cols_array_2d();
        self.projection = camera.projection.to_cols_array_2d();
        match camera.position {
            Some(p) => {
                self.position = p.to_array();
                self.has_position = 1;
            }
            None => {
                self.position = [0.0; 3];
                self.has_position = 0;
            }
        }
    }
}

impl From<&CameraBlock> for CameraUniform {
    fn from(camera: &CameraBlock) -> Self {
        let mut uniform = Self::new();
        uniform.update(camera);
        uniform
    }
}
