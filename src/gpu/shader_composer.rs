//! WGSL shader composition with `#import` support via naga-oil.

use std::{borrow::Cow, collections::HashMap};

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor, ShaderDefValue,
    ShaderLanguage, ShaderType,
};

use crate::error::ScanmarkError;

/// Wraps `naga_oil::compose::Composer` to provide shader composition with
/// `#import` and `#ifdef` support.
///
/// Pre-loads all shared WGSL modules at construction time. Consuming shaders
/// use `#import scanmark::module_name::{...}` to pull in shared code. The
/// composer produces `naga::Module` IR directly, skipping WGSL re-parse at
/// runtime.
pub struct ShaderComposer {
    composer: Composer,
}

/// Shared module definition: (source, file_path)
struct ModuleDef {
    source: &'static str,
    file_path: &'static str,
}

/// Shared modules in dependency order.
const MODULES: &[ModuleDef] = &[ModuleDef {
    source: include_str!("../../assets/shaders/modules/billboard.wgsl"),
    file_path: "modules/billboard.wgsl",
}];

impl ShaderComposer {
    /// Composer with every shared module registered.
    pub fn new() -> Result<Self, ScanmarkError> {
        let mut composer = Composer::default();

        for m in MODULES {
            let _ = composer
                .add_composable_module(ComposableModuleDescriptor {
                    source: m.source,
                    file_path: m.file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| {
                    ScanmarkError::ShaderCompose(format!(
                        "failed to register shader module '{}': {e}",
                        m.file_path
                    ))
                })?;
        }

        Ok(Self { composer })
    }

    /// Compose a shader source string (which may contain `#import` and
    /// `#ifdef` directives) into a `wgpu::ShaderModule` ready for pipeline
    /// creation.
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        source: &str,
        file_path: &str,
        shader_defs: HashMap<String, ShaderDefValue>,
    ) -> Result<wgpu::ShaderModule, ScanmarkError> {
        let naga_module = self.compose_naga(source, file_path, shader_defs)?;

        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        }))
    }

    /// Compose a shader source into a `naga::Module` without creating a
    /// wgpu shader module. Useful for testing shader composition without a
    /// GPU device.
    pub fn compose_naga(
        &mut self,
        source: &str,
        file_path: &str,
        shader_defs: HashMap<String, ShaderDefValue>,
    ) -> Result<naga::Module, ScanmarkError> {
        log::debug!(
            "composing shader '{file_path}' with defs {:?}",
            shader_defs.keys().collect::<Vec<_>>()
        );
        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                shader_defs,
                ..Default::default()
            })
            .map_err(|e| {
                ScanmarkError::ShaderCompose(format!(
                    "failed to compose shader '{file_path}': {e}"
                ))
            })
    }

    /// Run naga's validator over a composed module.
    pub fn validate(
        module: &naga::Module,
    ) -> Result<naga::valid::ModuleInfo, ScanmarkError> {
        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::default(),
        )
        .validate(module)
        .map_err(|e| ScanmarkError::ShaderValidation(e.as_inner().to_string()))
    }
}
