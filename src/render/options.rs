/// Backends the page can draw with.
///
/// Passed to `new_instance_with_webgpu_detection`, which keeps WebGPU only
/// when the browser actually returns an adapter and otherwise leaves WebGL2.
pub fn instance_descriptor() -> wgpu::InstanceDescriptor {
    wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
        ..Default::default()
    }
}

/// Glass panels draw front faces only: one blended layer per panel.
pub const PANEL_CULL_MODE: Option<wgpu::Face> = Some(wgpu::Face::Back);
