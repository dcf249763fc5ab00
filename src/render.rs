use crate::camera::Camera;
use crate::scene::Scene;
use smallvec::SmallVec;
use web_sys as web;

mod helpers;
mod mesh;
mod options;
mod stars;
mod targets;

use mesh::{GlobalsUniforms, GpuMesh, GpuObject, MeshPipelines, ObjectUniforms};
use stars::{StarsResources, StarsUniforms};
use targets::RenderTargets;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static STARS_WGSL: &str = include_str!("../shaders/stars.wgsl");

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    meshes: MeshPipelines,
    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    knot_mesh: GpuMesh,
    knot: GpuObject,
    // one box geometry shared by every panel
    panel_mesh: GpuMesh,
    panels: Vec<GpuObject>,
    stars: StarsResources,

    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        scene: &Scene,
        camera: &Camera,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance =
            wgpu::util::new_instance_with_webgpu_detection(&options::instance_descriptor())
                .await;
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU/WebGL adapter"))?;
        log::info!("[gpu] adapter: {:?}", adapter.get_info().backend);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // WebGL2 fallback cannot meet the WebGPU defaults
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // transparent canvas: let the page show through
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, format, width, height);
        let meshes = mesh::create_mesh_pipelines(&device, format);

        let globals = GlobalsUniforms::new(scene, camera.view_proj(), camera.eye);
        let globals_buffer = helpers::create_uniform_buffer(&device, "globals", &globals);
        let globals_bg = helpers::uniform_bind_group(
            &device,
            "globals_bg",
            &meshes.globals_bgl,
            &globals_buffer,
        );

        let cp = &scene.centerpiece;
        let knot_mesh = GpuMesh::upload(&device, "knot", &cp.knot.geometry);
        let knot = GpuObject::new(
            &device,
            "knot_uniforms",
            &meshes.object_bgl,
            &ObjectUniforms::new(cp.world_of(&cp.knot.transform), &cp.knot.material),
        );
        let panel_geometry = cp
            .panels
            .first()
            .map(|p| p.mesh.geometry.clone())
            .unwrap_or_default();
        let panel_mesh = GpuMesh::upload(&device, "panel", &panel_geometry);
        let panels = cp
            .panels
            .iter()
            .map(|p| {
                GpuObject::new(
                    &device,
                    "panel_uniforms",
                    &meshes.object_bgl,
                    &ObjectUniforms::new(cp.world_of(&p.mesh.transform), &p.mesh.material),
                )
            })
            .collect();

        let stars = StarsResources::new(
            &device,
            format,
            &scene.stars,
            &StarsUniforms::new(
                &scene.stars,
                camera.view_matrix(),
                camera.projection_matrix(),
                camera.fovy_radians,
            ),
        );

        log::info!(
            "[gpu] ready {}x{} format={:?} knot_tris={}",
            width,
            height,
            format,
            cp.knot.geometry.triangle_count()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            meshes,
            globals_buffer,
            globals_bg,
            knot_mesh,
            knot,
            panel_mesh,
            panels,
            stars,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets
                .recreate(&self.device, self.config.format, width, height);
        }
    }

    /// Reconfigure after the surface was lost or became outdated.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn upload_frame(&self, scene: &Scene, camera: &Camera) {
        let globals = GlobalsUniforms::new(scene, camera.view_proj(), camera.eye);
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let cp = &scene.centerpiece;
        self.knot.write(
            &self.queue,
            &ObjectUniforms::new(cp.world_of(&cp.knot.transform), &cp.knot.material),
        );
        for (gpu, panel) in self.panels.iter().zip(cp.panels.iter()) {
            gpu.write(
                &self.queue,
                &ObjectUniforms::new(cp.world_of(&panel.mesh.transform), &panel.mesh.material),
            );
        }
        self.stars.write(
            &self.queue,
            &StarsUniforms::new(
                &scene.stars,
                camera.view_matrix(),
                camera.projection_matrix(),
                camera.fovy_radians,
            ),
        );
    }

    /// Draw one frame: opaque knot, then stars, then the glass panels.
    pub fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        self.upload_frame(scene, camera);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.meshes.opaque);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            self.knot_mesh.draw(&mut rpass, &self.knot);

            self.stars.draw(&mut rpass);

            rpass.set_pipeline(&self.meshes.transparent);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            for i in back_to_front(scene, camera) {
                if let Some(panel) = self.panels.get(i) {
                    self.panel_mesh.draw(&mut rpass, panel);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Panel indices ordered farthest-first from the camera, for blending.
fn back_to_front(scene: &Scene, camera: &Camera) -> SmallVec<[usize; 4]> {
    let cp = &scene.centerpiece;
    let mut order: SmallVec<[(usize, f32); 4]> = cp
        .panels
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let world = cp.world_of(&p.mesh.transform).w_axis.truncate();
            (i, world.distance_squared(camera.eye))
        })
        .collect();
    order.sort_by(|a, b| b.1.total_cmp(&a.1));
    order.into_iter().map(|(i, _)| i).collect()
}
