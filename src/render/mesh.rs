use super::helpers;
use super::options::PANEL_CULL_MODE;
use crate::geometry::{MeshData, Vertex};
use crate::scene::{Material, Scene};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlobalsUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) camera_pos: [f32; 4],
    pub(crate) light_dir: [f32; 4],
    pub(crate) light_color: [f32; 4],
    pub(crate) ambient: [f32; 4],
}

impl GlobalsUniforms {
    pub(crate) fn new(scene: &Scene, view_proj: Mat4, eye: Vec3) -> Self {
        let sun = &scene.sun;
        let amb = scene.ambient.color * scene.ambient.intensity;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            camera_pos: eye.extend(1.0).to_array(),
            light_dir: sun.to_light().extend(sun.intensity).to_array(),
            light_color: sun.color.extend(1.0).to_array(),
            ambient: amb.extend(1.0).to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) normal_matrix: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) material: [f32; 4],
}

impl ObjectUniforms {
    pub(crate) fn new(model: Mat4, material: &Material) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            color: material.color.extend(material.opacity).to_array(),
            material: [material.metalness, material.roughness, 0.0, 0.0],
        }
    }
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

pub(crate) const VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &VERTEX_ATTRIBUTES,
};

/// Geometry uploaded once; shared by every object drawn with it.
pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

impl GpuMesh {
    pub(crate) fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }

    pub(crate) fn draw<'p>(&self, rpass: &mut wgpu::RenderPass<'p>, object: &GpuObject) {
        rpass.set_bind_group(1, &object.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Per-object transform and material uniforms.
pub(crate) struct GpuObject {
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl GpuObject {
    pub(crate) fn new(
        device: &wgpu::Device,
        label: &str,
        layout: &wgpu::BindGroupLayout,
        initial: &ObjectUniforms,
    ) -> Self {
        let uniform_buffer = helpers::create_uniform_buffer(device, label, initial);
        let bind_group = helpers::uniform_bind_group(device, label, layout, &uniform_buffer);
        Self {
            uniform_buffer,
            bind_group,
        }
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, value: &ObjectUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(value));
    }
}

pub(crate) struct MeshPipelines {
    pub(crate) globals_bgl: wgpu::BindGroupLayout,
    pub(crate) object_bgl: wgpu::BindGroupLayout,
    pub(crate) opaque: wgpu::RenderPipeline,
    pub(crate) transparent: wgpu::RenderPipeline,
}

pub(crate) fn create_mesh_pipelines(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> MeshPipelines {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(super::SCENE_WGSL.into()),
    });
    let globals_bgl = helpers::uniform_layout(
        device,
        "globals_bgl",
        wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
    );
    let object_bgl = helpers::uniform_layout(
        device,
        "object_bgl",
        wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
    );
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("mesh_pl"),
        bind_group_layouts: &[&globals_bgl, &object_bgl],
        push_constant_ranges: &[],
    });
    let opaque = helpers::make_pipeline(
        device,
        "mesh_opaque",
        &layout,
        &shader,
        &[VERTEX_LAYOUT],
        color_format,
        Some(wgpu::Face::Back),
        true,
    );
    // glass panels: front faces only, so each panel blends as one layer
    let transparent = helpers::make_pipeline(
        device,
        "mesh_transparent",
        &layout,
        &shader,
        &[VERTEX_LAYOUT],
        color_format,
        PANEL_CULL_MODE,
        false,
    );
    MeshPipelines {
        globals_bgl,
        object_bgl,
        opaque,
        transparent,
    }
}
