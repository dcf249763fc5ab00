use super::helpers;
use crate::scene::Starfield;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct StarsUniforms {
    pub(crate) model_view: [[f32; 4]; 4],
    pub(crate) proj: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) params: [f32; 4],
}

impl StarsUniforms {
    /// `fovy_radians` converts the nominal point size into a view-space quad
    /// that projects to the same on-screen size as a size-attenuated point.
    pub(crate) fn new(stars: &Starfield, view: Mat4, proj: Mat4, fovy_radians: f32) -> Self {
        let quad = stars.size * (fovy_radians * 0.5).tan();
        Self {
            model_view: (view * stars.transform.matrix()).to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            color: stars.color.extend(1.0).to_array(),
            params: [quad, stars.opacity, 0.0, 0.0],
        }
    }
}

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

const INSTANCE_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Instance,
    attributes: &INSTANCE_ATTRIBUTES,
};

pub(crate) struct StarsResources {
    pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl StarsResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        stars: &Starfield,
        initial: &StarsUniforms,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("stars_shader"),
            source: wgpu::ShaderSource::Wgsl(super::STARS_WGSL.into()),
        });
        let bgl = helpers::uniform_layout(
            device,
            "stars_bgl",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("stars_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_pipeline(
            device,
            "stars_pipeline",
            &pl,
            &shader,
            &[INSTANCE_LAYOUT],
            color_format,
            None,
            false,
        );
        let positions: Vec<[f32; 3]> = stars.positions.iter().map(Vec3::to_array).collect();
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("stars_instances"),
            contents: bytemuck::cast_slice(&positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let uniform_buffer = helpers::create_uniform_buffer(device, "stars_uniforms", initial);
        let bind_group = helpers::uniform_bind_group(device, "stars_bg", &bgl, &uniform_buffer);
        Self {
            pipeline,
            instance_buffer,
            instance_count: positions.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, value: &StarsUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(value));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        rpass.draw(0..6, 0..self.instance_count);
    }
}
