//! Ping-pong feedback simulation on `Rgba32Float` textures.
//!
//! Each pass draws a full-screen triangle into the inactive texture while
//! reading the active one plus the immutable base texture, then swaps.
//! Float32 textures are not filterable, so the shader uses `textureLoad`.

use wgpu::util::DeviceExt;

use super::layout::GpgpuLayout;
use super::types::SimulationUniforms;

const STATE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba32Float;

/// Owns the base texture, the ping-pong pair, and the update pipeline.
pub struct FeedbackSimulator {
    pub layout: GpgpuLayout,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    _base_texture: wgpu::Texture,
    _state_textures: [wgpu::Texture; 2],
    state_views: [wgpu::TextureView; 2],
    /// `bind_groups[i]` reads `state_views[i]` and writes the other view.
    bind_groups: [wgpu::BindGroup; 2],
    current: usize,
}

impl FeedbackSimulator {
    /// Upload `base_texels` (one per texel of `layout`) into the base
    /// texture and both ping-pong textures, and build the pipeline.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: GpgpuLayout,
        base_texels: &[[f32; 4]],
        uniforms: &SimulationUniforms,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("simulation shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/simulation.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("simulation uniforms"),
            contents: bytemuck::bytes_of(uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let texels: &[u8] = bytemuck::cast_slice(base_texels);
        let base_texture = create_state_texture(
            device,
            queue,
            "simulation base",
            layout.size,
            wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            texels,
        );
        let ping_pong_usage = wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::RENDER_ATTACHMENT
            | wgpu::TextureUsages::COPY_DST;
        let state_textures = [
            create_state_texture(device, queue, "simulation state a", layout.size, ping_pong_usage, texels),
            create_state_texture(device, queue, "simulation state b", layout.size, ping_pong_usage, texels),
        ];

        let base_view = base_texture.create_view(&wgpu::TextureViewDescriptor::default());
        let state_views = [
            state_textures[0].create_view(&wgpu::TextureViewDescriptor::default()),
            state_textures[1].create_view(&wgpu::TextureViewDescriptor::default()),
        ];

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("simulation bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(
                            std::mem::size_of::<SimulationUniforms>() as u64,
                        ),
                    },
                    count: None,
                },
                state_texture_entry(1, wgpu::ShaderStages::FRAGMENT),
                state_texture_entry(2, wgpu::ShaderStages::FRAGMENT),
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
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::TextureView(&base_view),
                    },
                ],
            })
        };
        let bind_groups = [
            make_bind_group("simulation a->b", &state_views[0]),
            make_bind_group("simulation b->a", &state_views[1]),
        ];

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("simulation pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("simulation pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: STATE_FORMAT,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        tracing::info!(
            texels = layout.texel_count,
            particles = layout.draw_count,
            "gpgpu texture {}x{}",
            layout.size,
            layout.size,
        );

        Self {
            layout,
            pipeline,
            uniform_buffer,
            _base_texture: base_texture,
            _state_textures: state_textures,
            state_views,
            bind_groups,
            current: 0,
        }
    }

    /// Upload this frame's uniforms.
    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &SimulationUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Record one simulation step and make its output current.
    pub fn compute(&mut self, encoder: &mut wgpu::CommandEncoder) {
        let output = 1 - self.current;
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("simulation pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.state_views[output],
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.bind_groups[self.current], &[]);
            pass.draw(0..3, 0..1);
        }
        self.current = output;
    }

    /// Index (0 or 1) of the texture holding the latest state.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Both ping-pong views, indexed like [`Self::current_index`].
    pub fn state_views(&self) -> [&wgpu::TextureView; 2] {
        [&self.state_views[0], &self.state_views[1]]
    }
}

/// Layout entry for an unfilterable float texture read with `textureLoad`.
pub(crate) fn state_texture_entry(
    binding: u32,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: false },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    }
}

fn create_state_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    size: u32,
    usage: wgpu::TextureUsages,
    texels: &[u8],
) -> wgpu::Texture {
    device.create_texture_with_data(
        queue,
        &wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: size,
                height: size,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: STATE_FORMAT,
            usage,
            view_formats: &[],
        },
        wgpu::util::TextureDataOrder::LayerMajor,
        texels,
    )
}
