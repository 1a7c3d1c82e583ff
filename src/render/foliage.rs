use super::helpers;
use ornament_core::{FoliagePoint, FoliageUniforms};
use wgpu::util::DeviceExt;

static FOLIAGE_WGSL: &str = include_str!("../../shaders/foliage.wgsl");

pub(crate) struct FoliageResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) point_buffer: wgpu::Buffer,
    pub(crate) point_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl FoliageResources {
    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, uniforms: &FoliageUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }
}

/// Points are immutable, so they are uploaded once here.
pub(crate) fn create_foliage_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    camera_bgl: &wgpu::BindGroupLayout,
    points: &[FoliagePoint],
) -> FoliageResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("foliage_shader"),
        source: wgpu::ShaderSource::Wgsl(FOLIAGE_WGSL.into()),
    });
    let bgl = helpers::uniform_bgl(device, "foliage_bgl");
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("foliage_pl"),
        bind_group_layouts: &[camera_bgl, &bgl],
        push_constant_ranges: &[],
    });
    let buffers = [
        helpers::quad_vertex_layout(),
        // slot 1: one FoliagePoint per instance
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<FoliagePoint>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 12,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 16,
                    shader_location: 3,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 32,
                    shader_location: 4,
                },
            ],
        },
    ];
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("foliage_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_foliage"),
            buffers: &buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(helpers::depth_state(false)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_foliage"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState {
                    color: wgpu::BlendComponent {
                        src_factor: wgpu::BlendFactor::SrcAlpha,
                        dst_factor: wgpu::BlendFactor::One,
                        operation: wgpu::BlendOperation::Add,
                    },
                    alpha: wgpu::BlendComponent::OVER,
                }),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let point_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("foliage_points"),
        contents: bytemuck::cast_slice(points),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let uniform_buffer = helpers::uniform_buffer(
        device,
        "foliage_uniforms",
        std::mem::size_of::<FoliageUniforms>() as u64,
    );
    let bind_group = helpers::uniform_bind_group(device, "foliage_bg", &bgl, &uniform_buffer);

    FoliageResources {
        pipeline,
        point_buffer,
        point_count: points.len() as u32,
        uniform_buffer,
        bind_group,
    }
}
