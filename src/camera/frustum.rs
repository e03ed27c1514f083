//! View frustum for culling
//!
//! Extracts frustum planes from the view-projection matrix and provides
//! intersection tests for points and axis-aligned cubes (octree octants).

use glam::{Mat4, Vec3, Vec4};

/// A plane `n · p + d = 0` with a unit normal pointing into the frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance term `d`.
    pub distance: f32,
}

impl Plane {
    /// Build a plane from raw `(a, b, c, d)` coefficients, normalized.
    ///
    /// Degenerate coefficients produce a plane that accepts everything.
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let len = coefficients.truncate().length();
        if len > 0.0 {
            Self {
                normal: coefficients.truncate() / len,
                distance: coefficients.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = inside).
    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Whether an axis-aligned cube reaches the positive half-space.
    ///
    /// Projects the cube's half-extent onto the normal and compares it with
    /// the center's signed distance.
    #[inline]
    pub fn reaches_cube(&self, center: Vec3, half_extent: f32) -> bool {
        let r = half_extent * self.normal.abs().element_sum();
        self.distance_to_point(center) >= -r
    }
}

/// View frustum consisting of 6 planes
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    /// Six clipping planes: left, right, bottom, top, near, far.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Gribb/Hartmann extraction for a right-handed projection with [0,1]
    /// depth (wgpu/Vulkan). Planes point inward.
    pub fn from_view_projection(vp: Mat4) -> Self {
        let rows = [vp.row(0), vp.row(1), vp.row(2), vp.row(3)];

        Self {
            planes: [
                Plane::from_coefficients(rows[3] + rows[0]),
                Plane::from_coefficients(rows[3] - rows[0]),
                Plane::from_coefficients(rows[3] + rows[1]),
                Plane::from_coefficients(rows[3] - rows[1]),
                // [0,1] depth: near plane is just row 2
                Plane::from_coefficients(rows[2]),
                Plane::from_coefficients(rows[3] - rows[2]),
            ],
        }
    }

    /// Test if a point is inside the frustum
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|p| p.distance_to_point(point) >= 0.0)
    }

    /// Conservative cube test: `false` only when the cube lies entirely
    /// outside at least one plane.
    #[inline]
    pub fn intersects_cube(&self, center: Vec3, half_extent: f32) -> bool {
        self.planes.iter().all(|p| p.reaches_cube(center, half_extent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_frustum() -> Frustum {
        let proj = Mat4::perspective_rh(45.0_f32.to_radians(), 1.0, 0.1, 100.0);
        let view =
            Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        Frustum::from_view_projection(proj * view)
    }

    #[test]
    fn test_frustum_contains_origin() {
        let frustum = test_frustum();
        assert!(frustum.contains_point(Vec3::ZERO));
        // Behind the camera
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 20.0)));
        // Beyond the far plane
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -200.0)));
    }

    #[test]
    fn test_cube_intersection() {
        let frustum = test_frustum();
        assert!(frustum.intersects_cube(Vec3::ZERO, 1.0));
        // Cube behind the camera that doesn't reach the frustum
        assert!(!frustum.intersects_cube(Vec3::new(0.0, 0.0, 50.0), 1.0));
        // Large cube enclosing the camera still intersects
        assert!(frustum.intersects_cube(Vec3::new(0.0, 0.0, 10.0), 50.0));
    }

    #[test]
    fn degenerate_plane_accepts_everything() {
        let plane = Plane::from_coefficients(Vec4::ZERO);
        assert_eq!(plane.distance_to_point(Vec3::splat(1e6)), 0.0);
        assert!(plane.reaches_cube(Vec3::splat(-1e6), 0.0));
    }
}
