//! Shader permutations of the marker pipeline.
//!
//! One WGSL source (`raster/marker.wgsl`) covers both instance stream
//! layouts and all three shading variants through `#ifdef` shader defs.

use std::collections::HashMap;

use naga_oil::compose::ShaderDefValue;

use crate::{
    error::ScanmarkError,
    gpu::shader_composer::ShaderComposer,
    marker::{InstanceShape, ShadingVariant, QUAD_VERTICES},
};

/// Vertices drawn per mark (two triangles).
pub const VERTICES_PER_MARK: u32 = QUAD_VERTICES.len() as u32;

/// Vertex stage entry point.
pub const VERTEX_ENTRY: &str = "vs_main";

/// Fragment stage entry point.
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Marker WGSL source, before composition.
pub const SOURCE: &str =
    include_str!("../../assets/shaders/raster/marker.wgsl");

/// Path the composer reports in diagnostics.
pub const FILE_PATH: &str = "raster/marker.wgsl";

/// One compiled variant of the marker shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerShader {
    /// Per-instance stream the vertex stage reads.
    pub instance: InstanceShape,
    /// What the fragment stage computes.
    pub shading: ShadingVariant,
}

impl MarkerShader {
    /// Every permutation.
    pub const ALL: [MarkerShader; 6] = [
        Self::new(InstanceShape::Position, ShadingVariant::Flat),
        Self::new(InstanceShape::Position, ShadingVariant::Tinted),
        Self::new(InstanceShape::Position, ShadingVariant::Faded),
        Self::new(InstanceShape::Model, ShadingVariant::Flat),
        Self::new(InstanceShape::Model, ShadingVariant::Tinted),
        Self::new(InstanceShape::Model, ShadingVariant::Faded),
    ];

    /// Permutation for an instance layout and shading variant.
    pub const fn new(instance: InstanceShape, shading: ShadingVariant) -> Self {
        Self { instance, shading }
    }

    /// Shader defs selecting this permutation.
    pub fn shader_defs(&self) -> HashMap<String, ShaderDefValue> {
        let flags = [
            ("INSTANCE_MODEL", self.instance == InstanceShape::Model),
            ("DISTANCE_TINT", self.shading.uses_distance()),
            ("DEPTH_FADE", self.shading.uses_fade()),
        ];
        flags
            .into_iter()
            .filter(|&(_, on)| on)
            .map(|(name, _)| (name.to_owned(), ShaderDefValue::Bool(true)))
            .collect()
    }

    /// Debug label for the shader module and pipeline.
    pub fn label(&self) -> String {
        let instance = match self.instance {
            InstanceShape::Position => "position",
            InstanceShape::Model => "model",
        };
        let shading = match self.shading {
            ShadingVariant::Flat => "flat",
            ShadingVariant::Tinted => "tinted",
            ShadingVariant::Faded => "faded",
        };
        format!("Marker Shader ({instance}, {shading})")
    }

    /// Compose this permutation into a GPU shader module.
    pub fn compose(
        &self,
        composer: &mut ShaderComposer,
        device: &wgpu::Device,
    ) -> Result<wgpu::ShaderModule, ScanmarkError> {
        composer.compose(
            device,
            &self.label(),
            SOURCE,
            FILE_PATH,
            self.shader_defs(),
        )
    }

    /// Compose this permutation to naga IR (no device needed).
    pub fn compose_naga(
        &self,
        composer: &mut ShaderComposer,
    ) -> Result<naga::Module, ScanmarkError> {
        composer.compose_naga(SOURCE, FILE_PATH, self.shader_defs())
    }
}
