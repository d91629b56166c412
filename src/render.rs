use crate::constants::*;
use glam::Mat4;
use scene_core::{SceneState, Transform};
use web_sys as web;

pub mod background;
mod helpers;
pub mod mesh;

use background::BackgroundResources;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

// ===================== WebGPU state =====================

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
    light: [f32; 4],
}

/// GPU buffers for one drawable object.
struct MeshGpu {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    color: [f32; 3],
}

impl MeshGpu {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        data: &mesh::MeshData,
        color: [f32; 3],
    ) -> Self {
        let (vertex_buffer, index_buffer) = helpers::create_mesh_buffers(device, label, data);
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{}_uniforms", label)),
            size: std::mem::size_of::<ObjectUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{}_bg", label)),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
            uniform_buffer,
            bind_group,
            color,
        }
    }

    fn write_uniforms(&self, queue: &wgpu::Queue, view_proj: Mat4, transform: &Transform) {
        let u = ObjectUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: transform.model_matrix().to_cols_array_2d(),
            color: [self.color[0], self.color[1], self.color[2], 1.0],
            light: [
                LIGHT_DIRECTION[0],
                LIGHT_DIRECTION[1],
                LIGHT_DIRECTION[2],
                AMBIENT_LIGHT,
            ],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    fn destroy(&self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
        self.uniform_buffer.destroy();
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    mesh_pipeline: wgpu::RenderPipeline,
    cube: MeshGpu,
    torus: MeshGpu,
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    background: Option<BackgroundResources>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        // The surface owns its canvas handle, so it can outlive this call
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
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
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let bgl = helpers::uniform_bind_group_layout(&device, "object_bgl");
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let mesh_pipeline = helpers::make_pipeline(
            &device,
            "mesh_pipeline",
            &pl,
            &shader,
            "vs_main",
            "fs_main",
            &[helpers::vertex_layout()],
            format,
            true,
        );

        let cube = MeshGpu::new(&device, &bgl, "cube", &mesh::cube(CUBE_SIZE), CUBE_COLOR);
        let torus = MeshGpu::new(
            &device,
            &bgl,
            "torus",
            &mesh::torus(
                TORUS_RADIUS,
                TORUS_TUBE,
                TORUS_RADIAL_SEGMENTS,
                TORUS_TUBULAR_SEGMENTS,
            ),
            TORUS_COLOR,
        );
        log::info!(
            "[gpu] ready {}x{} format={:?} cube_idx={} torus_idx={}",
            width,
            height,
            format,
            cube.index_count,
            torus.index_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            mesh_pipeline,
            cube,
            torus,
            depth_tex,
            depth_view,
            background: None,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    pub fn set_background(&mut self, image: &web::HtmlImageElement) {
        if let Some(old) = self.background.take() {
            old.texture.destroy();
        }
        self.background = Some(background::create_background_resources(
            &self.device,
            &self.queue,
            image,
            self.config.format,
        ));
        log::info!(
            "[gpu] background {}x{}",
            image.natural_width(),
            image.natural_height()
        );
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_tex.destroy();
        (self.depth_tex, self.depth_view) =
            helpers::create_depth_texture(&self.device, self.width, self.height);
    }

    /// Draw one frame of `scene`. Lost/outdated surfaces are reconfigured
    /// and the frame is skipped.
    pub fn render(&mut self, scene: &SceneState) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view_proj = scene.camera.view_projection();
        self.cube.write_uniforms(&self.queue, view_proj, &scene.cube);
        self.torus.write_uniforms(&self.queue, view_proj, &scene.torus);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let Some(bg) = &self.background {
                rpass.set_pipeline(&bg.pipeline);
                rpass.set_bind_group(0, &bg.bind_group, &[]);
                rpass.draw(0..3, 0..1);
            }
            rpass.set_pipeline(&self.mesh_pipeline);
            self.cube.draw(&mut rpass);
            self.torus.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Free every GPU allocation. The device goes away with `self`.
    pub fn release(self) {
        self.cube.destroy();
        self.torus.destroy();
        self.depth_tex.destroy();
        if let Some(bg) = &self.background {
            bg.texture.destroy();
        }
        self.device.destroy();
        log::info!("[gpu] released");
    }
}
