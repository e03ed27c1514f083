//! Scalar curves shared by the color ramp and the depth fade.
//!
//! These mirror the WGSL built-ins (`smoothstep`, `mix`) exactly so the CPU
//! reference path and the shader agree bit-for-bit at the curve endpoints.

use glam::Vec3;

/// Cubic Hermite step between `edge0` and `edge1`.
///
/// The interpolation factor is clamped to [0, 1] before shaping, so the
/// result is exactly `0.0` at or below `edge0` and exactly `1.0` at or above
/// `edge1`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear blend `a·(1 − t) + b·t`, WGSL `mix` form.
///
/// Unlike `a + (b − a)·t` this returns `b` exactly for `t == 1.0`.
#[inline]
pub fn mix(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Logistic curve `1 / (1 + e^(−(x·rate − offset)))`.
#[inline]
pub fn logistic(x: f32, rate: f32, offset: f32) -> f32 {
    1.0 / (1.0 + (-(x * rate - offset)).exp())
}
