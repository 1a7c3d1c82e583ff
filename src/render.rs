use crate::batch::{self, InstanceRaw};
use crate::constants::{CLEAR_COLOR, CLEAR_COLOR_FOCUSED, FOLIAGE_POINT_SIZE};
use ornament_core::{Camera, FoliagePoint, Scene};
use web_sys as web;
use wgpu::util::DeviceExt;

mod foliage;
mod helpers;
mod instances;

use foliage::{create_foliage_resources, FoliageResources};
use helpers::CameraUniforms;
use instances::{create_instance_resources, InstanceResources};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    quad_vb: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bg: wgpu::BindGroup,

    foliage: FoliageResources,
    instances: InstanceResources,
    instance_scratch: Vec<InstanceRaw>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

#[inline]
fn to_color(rgb: [f64; 3]) -> wgpu::Color {
    wgpu::Color {
        r: rgb[0],
        g: rgb[1],
        b: rgb[2],
        a: 1.0,
    }
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        foliage_points: &[FoliagePoint],
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
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
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&helpers::QUAD_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let camera_bgl = helpers::uniform_bgl(&device, "camera_bgl");
        let camera_buffer = helpers::uniform_buffer(
            &device,
            "camera_uniforms",
            std::mem::size_of::<CameraUniforms>() as u64,
        );
        let camera_bg = helpers::uniform_bind_group(&device, "camera_bg", &camera_bgl, &camera_buffer);

        let foliage =
            create_foliage_resources(&device, format, &camera_bgl, foliage_points);
        let instances = create_instance_resources(&device, format, &camera_bgl);
        log::info!(
            "[render] surface {}x{} {:?}, {} foliage points",
            width,
            height,
            format,
            foliage.point_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            _depth_tex: depth_tex,
            depth_view,
            quad_vb,
            camera_buffer,
            camera_bg,
            foliage,
            instances,
            instance_scratch: Vec::new(),
            width,
            height,
            clear_color: to_color(CLEAR_COLOR),
        })
    }

    /// Dim the background while a photo is focused.
    pub fn set_focus_dim(&mut self, focused: bool) {
        self.clear_color = to_color(if focused { CLEAR_COLOR_FOCUSED } else { CLEAR_COLOR });
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
        self.config.width = self.width.max(1);
        self.config.height = self.height.max(1);
        self.surface.configure(&self.device, &self.config);
        let (tex, view) = helpers::create_depth_texture(&self.device, self.width, self.height);
        self._depth_tex = tex;
        self.depth_view = view;
    }

    pub fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                self.surface.get_current_texture()?
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let cam = CameraUniforms::new(camera, scene.origin(), FOLIAGE_POINT_SIZE);
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&cam));
        self.foliage
            .write_uniforms(&self.queue, &scene.foliage().uniforms());
        batch::pack_scene(scene, &mut self.instance_scratch);
        self.instances
            .upload(&self.device, &self.queue, &self.instance_scratch);

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
            let quad_verts = helpers::QUAD_CORNERS.len() as u32;
            rpass.set_bind_group(0, &self.camera_bg, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));

            // instances write depth; foliage only tests against it
            if self.instances.count > 0 {
                rpass.set_pipeline(&self.instances.pipeline);
                rpass.set_vertex_buffer(1, self.instances.buffer.slice(..));
                rpass.draw(0..quad_verts, 0..self.instances.count);
            }

            rpass.set_pipeline(&self.foliage.pipeline);
            rpass.set_bind_group(1, &self.foliage.bind_group, &[]);
            rpass.set_vertex_buffer(1, self.foliage.point_buffer.slice(..));
            rpass.draw(0..quad_verts, 0..self.foliage.point_count);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
