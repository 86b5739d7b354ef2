use std::sync::Arc;

use flora_assets::MeshPositions;
use flora_common::Result;
use flora_config::FloraConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::window::Window;

use super::helpers::{parse_clear_color, parse_palette};
use crate::gpgpu::{
    build_base_texels, build_particle_attributes, FeedbackSimulator, GpgpuLayout,
    SimulationUniforms,
};
use crate::gpu::GpuContext;
use crate::points::{PointRenderer, PointUniforms};

/// The GPU particle scene: simulator, point renderer, and surface.
///
/// One particle per mesh vertex. Implements
/// [`FrameTarget`](crate::driver::FrameTarget) so the frame driver can
/// step and draw it.
pub struct ParticleScene {
    pub gpu: GpuContext,
    pub(super) simulator: FeedbackSimulator,
    pub(super) points: PointRenderer,
    pub(super) sim_uniforms: SimulationUniforms,
    pub(super) point_uniforms: PointUniforms,
    pub clear_color: wgpu::Color,
}

impl ParticleScene {
    /// Create the surface and upload the initial particle state built from `mesh`.
    pub async fn new(
        window: Arc<Window>,
        config: &FloraConfig,
        mesh: &MeshPositions,
    ) -> Result<Self> {
        let palette = parse_palette(&config.particles.colors)?;
        let clear_color = parse_clear_color(&config.particles.clear_color)?;

        let gpu = GpuContext::new(window, config.performance.vsync).await?;

        let layout = GpgpuLayout::new(mesh.count());
        let mut rng = match config.simulation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let base_texels = build_base_texels(mesh, &layout, &mut rng);
        let attributes = build_particle_attributes(&layout, &mut rng);

        let sim_uniforms = SimulationUniforms::new(&config.resolved_simulation());
        let simulator =
            FeedbackSimulator::new(&gpu.device, &gpu.queue, layout, &base_texels, &sim_uniforms);

        let point_uniforms =
            PointUniforms::new(config.resolved_point_size(), layout.size, palette);
        let points = PointRenderer::new(
            &gpu.device,
            gpu.format(),
            &attributes,
            layout.draw_count,
            simulator.state_views(),
            &point_uniforms,
        );

        tracing::info!(
            particles = layout.draw_count,
            texture_size = layout.size,
            strategy = ?config.camera.strategy,
            "particle scene ready"
        );

        Ok(Self {
            gpu,
            simulator,
            points,
            sim_uniforms,
            point_uniforms,
            clear_color,
        })
    }

    pub fn particle_count(&self) -> u32 {
        self.points.draw_count()
    }
}
