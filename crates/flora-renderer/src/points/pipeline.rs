//! Instanced billboard renderer for the particle cloud.
//!
//! Each particle is a camera-facing quad of six vertices. The vertex stage
//! fetches the particle's position from the simulation state texture, so
//! the instance buffer only carries static attributes.

use wgpu::util::DeviceExt;

use super::types::PointUniforms;
use crate::gpgpu::{state_texture_entry, ParticleAttributes};

const VERTICES_PER_PARTICLE: u32 = 6;

pub struct PointRenderer {
    pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    /// One bind group per ping-pong state texture.
    bind_groups: [wgpu::BindGroup; 2],
    draw_count: u32,
}

impl PointRenderer {
    /// Build the pipeline for `target_format`.
    ///
    /// `state_views` are the simulator's ping-pong textures; `draw_count`
    /// limits drawing to real particles, skipping padding texels.
    pub fn new(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        attributes: &[ParticleAttributes],
        draw_count: u32,
        state_views: [&wgpu::TextureView; 2],
        uniforms: &PointUniforms,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/particles.wgsl").into()),
        });

        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle attributes"),
            contents: bytemuck::cast_slice(attributes),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("point uniforms"),
            contents: bytemuck::bytes_of(uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("points bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(
                            std::mem::size_of::<PointUniforms>() as u64,
                        ),
                    },
                    count: None,
                },
                state_texture_entry(1, wgpu::ShaderStages::VERTEX),
            ],
        });

        let make_bind_group = |label: &str, state: &wgpu::TextureView| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(state),
                    },
                ],
            })
        };
        let bind_groups = [
            make_bind_group("points state a", state_views[0]),
            make_bind_group("points state b", state_views[1]),
        ];

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("points pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[ParticleAttributes::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            instance_buffer,
            uniform_buffer,
            bind_groups,
            draw_count,
        }
    }

    /// Upload this frame's camera and resolution.
    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &PointUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Draw all particles reading state texture `state_index`.
    pub fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>, state_index: usize) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_groups[state_index & 1], &[]);
        pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        pass.draw(0..VERTICES_PER_PARTICLE, 0..self.draw_count);
    }

    pub fn draw_count(&self) -> u32 {
        self.draw_count
    }
}
