use crate::camera::Viewport;
use crate::driver::{CameraFrame, DrawOutcome, FrameTarget, TimeStep};
use crate::gpu::RendererError;

use super::helpers::log_first_frame;
use super::state::ParticleScene;

impl FrameTarget for ParticleScene {
    fn resize(&mut self, viewport: &Viewport) {
        self.gpu
            .resize(viewport.physical_width, viewport.physical_height);
    }

    fn simulate(&mut self, step: TimeStep) {
        self.sim_uniforms.set_step(step.time, step.delta_time);
        self.simulator
            .update_uniforms(&self.gpu.queue, &self.sim_uniforms);

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("flora simulation encoder"),
            });
        self.simulator.compute(&mut encoder);
        self.gpu.queue.submit(std::iter::once(encoder.finish()));
    }

    fn draw(&mut self, frame: &CameraFrame) -> Result<DrawOutcome, RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(DrawOutcome::Dropped);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("surface texture timed out, skipping frame");
                return Ok(DrawOutcome::Dropped);
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        self.point_uniforms
            .set_camera(frame.view_proj, frame.view, frame.resolution);
        self.points
            .update_uniforms(&self.gpu.queue, &self.point_uniforms);

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("flora frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("flora particles pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.points
                .render(&mut pass, self.simulator.current_index());
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(
            self.gpu.size.width,
            self.gpu.size.height,
            self.gpu.format(),
            self.points.draw_count(),
        );

        Ok(DrawOutcome::Presented)
    }
}
