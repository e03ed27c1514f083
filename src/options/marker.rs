//! Marker pipeline options.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::ScanmarkError,
    marker::{
        DepthFade, DistanceBands, MarkerParams, MarkerStyle, RampPolicy,
        ShadingVariant,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Markers", inline)]
#[serde(default)]
/// Distance bands, colors and fade curve of the marker pipeline.
pub struct MarkerOptions {
    /// Distance at and below which marks use `near_color`.
    #[schemars(
        title = "Near Distance",
        range(min = 0.0, max = 1000.0),
        extend("step" = 1.0)
    )]
    pub near: f32,
    /// Distance at which marks use `mid_color`.
    #[schemars(
        title = "Mid Distance",
        range(min = 0.0, max = 2000.0),
        extend("step" = 1.0)
    )]
    pub mid: f32,
    /// Distance at and beyond which marks use `far_color`.
    #[schemars(
        title = "Far Distance",
        range(min = 0.0, max = 4000.0),
        extend("step" = 1.0)
    )]
    pub far: f32,
    /// RGB anchor at the near threshold.
    #[schemars(skip)]
    pub near_color: [f32; 3],
    /// RGB anchor at the mid threshold.
    #[schemars(skip)]
    pub mid_color: [f32; 3],
    /// RGB anchor at the far threshold.
    #[schemars(skip)]
    pub far_color: [f32; 3],
    /// RGB used when no camera distance is available.
    #[schemars(skip)]
    pub flat_color: [f32; 3],
    /// Logistic steepness of the depth fade.
    #[schemars(
        title = "Fade Rate",
        range(min = 0.001, max = 0.2),
        extend("step" = 0.001)
    )]
    pub fade_rate: f32,
    /// Logistic shift of the depth fade.
    #[schemars(
        title = "Fade Offset",
        range(min = 0.0, max = 20.0),
        extend("step" = 0.1)
    )]
    pub fade_offset: f32,
    /// Maximum opacity attenuation far away.
    #[schemars(
        title = "Fade Strength",
        range(min = 0.0, max = 1.0),
        extend("step" = 0.01)
    )]
    pub fade_strength: f32,
    /// How the two band blends combine.
    #[schemars(title = "Ramp Policy")]
    pub ramp_policy: RampPolicy,
    /// Which distance encodings are active.
    #[schemars(title = "Shading")]
    pub shading: ShadingVariant,
    /// Keep per-instance scale through the billboard step.
    #[schemars(skip)]
    pub keep_instance_scale: bool,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        let fade = DepthFade::default();
        Self {
            near: 100.0,
            mid: 200.0,
            far: 300.0,
            near_color: [0.1, 0.9, 1.0],
            mid_color: [0.95, 0.85, 0.2],
            far_color: [1.0, 0.25, 0.1],
            flat_color: [0.1, 0.9, 1.0],
            fade_rate: fade.rate,
            fade_offset: fade.offset,
            fade_strength: fade.strength,
            ramp_policy: RampPolicy::default(),
            shading: ShadingVariant::default(),
            keep_instance_scale: false,
        }
    }
}

impl MarkerOptions {
    /// Distance bands in `glam` form.
    #[must_use]
    pub fn bands(&self) -> DistanceBands {
        DistanceBands {
            near: self.near,
            mid: self.mid,
            far: self.far,
            near_color: Vec3::from_array(self.near_color),
            mid_color: Vec3::from_array(self.mid_color),
            far_color: Vec3::from_array(self.far_color),
        }
    }

    /// Full CPU-side style.
    #[must_use]
    pub fn style(&self) -> MarkerStyle {
        MarkerStyle {
            bands: self.bands(),
            ramp_policy: self.ramp_policy,
            flat_color: Vec3::from_array(self.flat_color),
            fade: DepthFade {
                rate: self.fade_rate,
                offset: self.fade_offset,
                strength: self.fade_strength,
            },
            shading: self.shading,
            keep_instance_scale: self.keep_instance_scale,
        }
    }

    /// GPU uniform for the marker shaders.
    #[must_use]
    pub fn params(&self) -> MarkerParams {
        MarkerParams::from(&self.style())
    }

    /// Host-side sanity check. The stages never validate their inputs, so
    /// presets are checked once here instead.
    pub fn validate(&self) -> Result<(), ScanmarkError> {
        if !self.bands().is_strictly_increasing() {
            return Err(ScanmarkError::InvalidOptions(format!(
                "distance bands must be strictly increasing, \
                 got near={} mid={} far={}",
                self.near, self.mid, self.far
            )));
        }
        if !(0.0..=1.0).contains(&self.fade_strength) {
            return Err(ScanmarkError::InvalidOptions(format!(
                "fade_strength must be within [0, 1], got {}",
                self.fade_strength
            )));
        }
        Ok(())
    }
}
