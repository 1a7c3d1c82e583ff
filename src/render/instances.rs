use super::helpers;
use crate::batch::InstanceRaw;

static INSTANCES_WGSL: &str = include_str!("../../shaders/instances.wgsl");

const INITIAL_CAPACITY: usize = 1024;

pub(crate) struct InstanceResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) buffer: wgpu::Buffer,
    capacity: usize,
    pub(crate) count: u32,
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instance_buffer"),
        size: (capacity * std::mem::size_of::<InstanceRaw>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl InstanceResources {
    /// Upload this frame's instances, growing the buffer when needed.
    pub(crate) fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, data: &[InstanceRaw]) {
        if data.len() > self.capacity {
            self.capacity = data.len().next_power_of_two();
            self.buffer = create_instance_buffer(device, self.capacity);
            log::info!("[render] instance buffer grown to {}", self.capacity);
        }
        if !data.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
        }
        self.count = data.len() as u32;
    }
}

pub(crate) fn create_instance_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    camera_bgl: &wgpu::BindGroupLayout,
) -> InstanceResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("instances_shader"),
        source: wgpu::ShaderSource::Wgsl(INSTANCES_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("instances_pl"),
        bind_group_layouts: &[camera_bgl],
        push_constant_ranges: &[],
    });
    let buffers = [
        helpers::quad_vertex_layout(),
        // slot 1: InstanceRaw (model columns, colors, params)
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![
                1 => Float32x4,
                2 => Float32x4,
                3 => Float32x4,
                4 => Float32x4,
                5 => Float32x4,
                6 => Float32x4,
                7 => Float32x4,
            ],
        },
    ];
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("instances_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_instance"),
            buffers: &buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        // frames are two-sided
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(helpers::depth_state(true)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_instance"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    InstanceResources {
        pipeline,
        buffer: create_instance_buffer(device, INITIAL_CAPACITY),
        capacity: INITIAL_CAPACITY,
        count: 0,
    }
}
