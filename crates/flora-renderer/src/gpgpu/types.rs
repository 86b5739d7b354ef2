//! GPU-facing data for the particle simulation.

use flora_config::schema::ResolvedSimulation;

/// Per-pass uniforms for the simulation shader.
///
/// `time` and `delta_time` change every frame; the flow-field constants
/// and `life_decay` are fixed at startup. 32 bytes, matching the WGSL
/// struct in `simulation.wgsl`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SimulationUniforms {
    pub time: f32,
    pub delta_time: f32,
    pub flow_field_influence: f32,
    pub flow_field_strength: f32,
    pub flow_field_frequency: f32,
    pub life_decay: f32,
    pub _padding: [f32; 2],
}

impl SimulationUniforms {
    pub fn new(sim: &ResolvedSimulation) -> Self {
        Self {
            time: 0.0,
            delta_time: 0.0,
            flow_field_influence: sim.flow_field_influence,
            flow_field_strength: sim.flow_field_strength,
            flow_field_frequency: sim.flow_field_frequency,
            life_decay: sim.life_decay,
            _padding: [0.0; 2],
        }
    }

    /// Update the per-frame clock fields (already time-scaled).
    pub fn set_step(&mut self, time: f32, delta_time: f32) {
        self.time = time;
        self.delta_time = delta_time;
    }
}

/// Static per-particle instance data.
///
/// Layout: uv(vec2) + size(f32) = 12 bytes. `uv` addresses the particle's
/// texel in the state texture; `size` is a random weight in `[0, 1)` used
/// for both point size and palette position.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleAttributes {
    pub uv: [f32; 2],
    pub size: f32,
}

impl ParticleAttributes {
    /// wgpu instance buffer layout for `ParticleAttributes`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ParticleAttributes>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            // uv: vec2<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            },
            // size: f32 at offset 8
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 8,
                shader_location: 1,
            },
        ],
    };
}
