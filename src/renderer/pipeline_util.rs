//! Blend and depth states for marker pipelines.

/// Color target for marker pipelines: straight (non-premultiplied) alpha
/// over whatever is already in the target.
pub fn marker_color_target(
    format: wgpu::TextureFormat,
) -> wgpu::ColorTargetState {
    wgpu::ColorTargetState {
        format,
        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
        write_mask: wgpu::ColorWrites::ALL,
    }
}

/// Depth state for marker pipelines.
///
/// Marks are translucent and drawn back-to-front, so they test against the
/// opaque scene depth but never write it.
pub fn marker_depth_stencil_state(
    format: wgpu::TextureFormat,
) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format,
        depth_write_enabled: false,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}
