//! Pipeline tunables and their GPU uniform.

use glam::Vec3;

use super::{
    ramp::{DistanceBands, RampPolicy},
    shading::{DepthFade, ShadingVariant},
};

/// Every tunable of the marker pipeline, in `glam` form for the CPU stages.
///
/// Built from [`crate::options::MarkerOptions`]; [`MarkerParams`] is the
/// matching GPU uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Distance thresholds and anchor colors.
    pub bands: DistanceBands,
    /// How the band blends combine.
    pub ramp_policy: RampPolicy,
    /// Tint used when no distance is available.
    pub flat_color: Vec3,
    /// Depth fade curve.
    pub fade: DepthFade,
    /// Which distance encodings are active.
    pub shading: ShadingVariant,
    /// Keep the model matrix's per-axis scale through the billboard step.
    pub keep_instance_scale: bool,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        crate::options::MarkerOptions::default().style()
    }
}

/// GPU uniform for the marker shaders.
///
/// Must match the WGSL `MarkerParams` struct in `modules/billboard.wgsl`:
/// each RGB anchor shares a 16-byte slot with one scalar (80 bytes total).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarkerParams {
    /// Near anchor color.
    pub near_color: [f32; 3],
    /// Near threshold.
    pub near: f32,
    /// Mid anchor color.
    pub mid_color: [f32; 3],
    /// Mid threshold.
    pub mid: f32,
    /// Far anchor color.
    pub far_color: [f32; 3],
    /// Far threshold.
    pub far: f32,
    /// Tint used without a camera position.
    pub flat_color: [f32; 3],
    /// Logistic steepness.
    pub fade_rate: f32,
    /// Logistic shift.
    pub fade_offset: f32,
    /// Maximum attenuation.
    pub fade_strength: f32,
    /// 0 = sequential, 1 = banded.
    pub ramp_policy: u32,
    /// 1 to keep per-instance scale through the billboard step.
    pub keep_instance_scale: u32,
}

impl From<&MarkerStyle> for MarkerParams {
    fn from(style: &MarkerStyle) -> Self {
        let bands = &style.bands;
        Self {
            near_color: bands.near_color.to_array(),
            near: bands.near,
            mid_color: bands.mid_color.to_array(),
            mid: bands.mid,
            far_color: bands.far_color.to_array(),
            far: bands.far,
            flat_color: style.flat_color.to_array(),
            fade_rate: style.fade.rate,
            fade_offset: style.fade.offset,
            fade_strength: style.fade.strength,
            ramp_policy: style.ramp_policy.as_gpu(),
            keep_instance_scale: u32::from(style.keep_instance_scale),
        }
    }
}
