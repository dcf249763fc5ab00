use super::helpers;
use crate::constants::MSAA_SAMPLES;

/// Offscreen attachments that track the surface size.
///
/// - `msaa_view` is the multisampled color target resolved into the swapchain.
/// - `depth_view` is the matching multisampled depth buffer.
pub(crate) struct RenderTargets {
    _msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    _depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) = helpers::create_render_texture(
            device,
            "msaa_color",
            width,
            height,
            color_format,
            MSAA_SAMPLES,
        );
        let (depth_tex, depth_view) = helpers::create_render_texture(
            device,
            "depth",
            width,
            height,
            helpers::DEPTH_FORMAT,
            MSAA_SAMPLES,
        );
        Self {
            _msaa_tex: msaa_tex,
            msaa_view,
            _depth_tex: depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(
        &mut self,
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) {
        *self = Self::new(device, color_format, width, height);
    }
}
