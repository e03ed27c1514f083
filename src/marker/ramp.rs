//! Distance → RGB color ramp over three bands.
//!
//! Three anchor colors sit at three strictly increasing distances. Between
//! anchors the color is blended with a cubic Hermite (`smoothstep`) factor;
//! below `near` it is exactly the near color and beyond `far` exactly the far
//! color.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::{mix, smoothstep};

/// How the two band blends are combined.
///
/// For strictly increasing thresholds both policies produce bit-identical
/// colors; they only part ways when `mid <= near` or `far <= mid`.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RampPolicy {
    /// Blend near → mid, then blend that result → far, both
    /// unconditionally.
    #[default]
    Sequential,
    /// Pick the band containing the distance and blend only its two anchors.
    Banded,
}

impl RampPolicy {
    /// Value written to the `ramp_policy` uniform field.
    pub fn as_gpu(self) -> u32 {
        match self {
            Self::Sequential => 0,
            Self::Banded => 1,
        }
    }
}

/// Three distance thresholds with their anchor colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceBands {
    /// Distance at and below which the color is `near_color`.
    pub near: f32,
    /// Distance at which the color is `mid_color`.
    pub mid: f32,
    /// Distance at and beyond which the color is `far_color`.
    pub far: f32,
    /// Anchor color at `near`.
    pub near_color: Vec3,
    /// Anchor color at `mid`.
    pub mid_color: Vec3,
    /// Anchor color at `far`.
    pub far_color: Vec3,
}

impl DistanceBands {
    /// Whether `near < mid < far`.
    pub fn is_strictly_increasing(&self) -> bool {
        self.near < self.mid && self.mid < self.far
    }

    /// Color at `distance` under the given policy.
    #[inline]
    pub fn sample(&self, distance: f32, policy: RampPolicy) -> Vec3 {
        match policy {
            RampPolicy::Sequential => self.sample_sequential(distance),
            RampPolicy::Banded => self.sample_banded(distance),
        }
    }

    fn sample_sequential(&self, distance: f32) -> Vec3 {
        let to_mid = smoothstep(self.near, self.mid, distance);
        let to_far = smoothstep(self.mid, self.far, distance);
        let color = mix(self.near_color, self.mid_color, to_mid);
        mix(color, self.far_color, to_far)
    }

    fn sample_banded(&self, distance: f32) -> Vec3 {
        if distance <= self.near {
            self.near_color
        } else if distance < self.mid {
            let t = smoothstep(self.near, self.mid, distance);
            mix(self.near_color, self.mid_color, t)
        } else {
            let t = smoothstep(self.mid, self.far, distance);
            mix(self.mid_color, self.far_color, t)
        }
    }
}
