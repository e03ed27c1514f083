//! Shading Stage: per-pixel color and alpha of a mark.

use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3, Vec4};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{style::MarkerStyle, transform::VertexOutput};
use crate::util::easing::logistic;

/// Which distance encodings a mark uses.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ShadingVariant {
    /// Flat color, radial alpha only.
    Flat,
    /// Distance-ramp tint, radial alpha only.
    Tinted,
    /// Distance-ramp tint, radial alpha scaled by the depth fade.
    #[default]
    Faded,
}

impl ShadingVariant {
    /// All variants, simplest first.
    pub const ALL: [ShadingVariant; 3] =
        [Self::Flat, Self::Tinted, Self::Faded];

    /// Whether the Transform Stage computes a camera distance.
    pub fn uses_distance(self) -> bool {
        !matches!(self, Self::Flat)
    }

    /// Whether the Shading Stage applies the depth fade.
    pub fn uses_fade(self) -> bool {
        matches!(self, Self::Faded)
    }
}

/// Logistic opacity falloff over camera distance.
///
/// `scale(d) = 1 − strength / (1 + e^(−(d·rate − offset)))`, so the
/// scale starts near 1 and approaches `1 − strength` far away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthFade {
    /// Steepness `k` of the logistic curve (per distance unit).
    pub rate: f32,
    /// Horizontal shift; the curve's midpoint is at `offset / rate`.
    pub offset: f32,
    /// Maximum attenuation; `1 − strength` is the floor opacity scale.
    pub strength: f32,
}

impl Default for DepthFade {
    fn default() -> Self {
        Self {
            rate: 0.02,
            offset: 10.0,
            strength: 0.9,
        }
    }
}

impl DepthFade {
    /// Opacity scale at `distance`.
    #[inline]
    pub fn scale(&self, distance: f32) -> f32 {
        1.0 - logistic(distance, self.rate, self.offset) * self.strength
    }
}

/// Interpolated Transform Stage outputs, as seen by one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentInput {
    /// Quad-local coordinate in [-0.5, 0.5]².
    pub local: Vec2,
    /// Interpolated RGB tint.
    pub tint: Vec3,
    /// Interpolated camera distance, when the variant carries one.
    pub distance: Option<f32>,
}

impl From<&VertexOutput> for FragmentInput {
    fn from(v: &VertexOutput) -> Self {
        Self {
            local: v.local,
            tint: v.tint,
            distance: v.distance,
        }
    }
}

/// Soft round mask: 1 at the quad center, 0 on and outside the inscribed
/// circle.
#[inline]
pub fn radial_alpha(local: Vec2) -> f32 {
    let r = 2.0 * local.length();
    (r * FRAC_PI_2).cos().clamp(0.0, 1.0)
}

/// Final non-premultiplied RGBA for one pixel.
///
/// The depth fade is applied only for [`ShadingVariant::Faded`] and only
/// when a distance was interpolated.
#[inline]
pub fn shade_fragment(input: &FragmentInput, style: &MarkerStyle) -> Vec4 {
    let mut alpha = radial_alpha(input.local);
    if style.shading.uses_fade() {
        if let Some(distance) = input.distance {
            alpha *= style.fade.scale(distance);
        }
    }
    input.tint.extend(alpha)
}
