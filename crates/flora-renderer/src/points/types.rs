//! Uniform data for the point renderer.

use crate::matrix::{Mat4, IDENTITY};

/// Per-frame uniforms for the particle point shader.
///
/// 208 bytes, laid out to match `PointUniforms` in `particles.wgsl`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointUniforms {
    pub view_proj: [f32; 16],
    pub view: [f32; 16],
    /// Drawing-buffer resolution in pixels.
    pub resolution: [f32; 2],
    /// Base point size before perspective and per-particle scaling.
    pub size: f32,
    /// Width of the square state texture.
    pub grid_size: f32,
    /// Linear RGBA palette stops, blended by particle size.
    pub colors: [[f32; 4]; 4],
}

impl PointUniforms {
    pub fn new(size: f32, grid_size: u32, palette: [[f32; 3]; 4]) -> Self {
        let mut colors = [[0.0f32; 4]; 4];
        for (dst, src) in colors.iter_mut().zip(palette.iter()) {
            *dst = [src[0], src[1], src[2], 1.0];
        }
        Self {
            view_proj: IDENTITY,
            view: IDENTITY,
            resolution: [1.0, 1.0],
            size,
            grid_size: grid_size as f32,
            colors,
        }
    }

    pub fn set_camera(&mut self, view_proj: Mat4, view: Mat4, resolution: [f32; 2]) {
        self.view_proj = view_proj;
        self.view = view;
        self.resolution = resolution;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_uniforms_match_wgsl_size() {
        assert_eq!(std::mem::size_of::<PointUniforms>(), 208);
    }

    #[test]
    fn palette_gets_opaque_alpha() {
        let u = PointUniforms::new(0.04, 100, [[1.0, 0.0, 0.0]; 4]);
        assert_eq!(u.colors[3], [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(u.grid_size, 100.0);
    }

    #[test]
    fn set_camera_replaces_matrices() {
        let mut u = PointUniforms::new(0.04, 10, [[0.0; 3]; 4]);
        let mut m = IDENTITY;
        m[12] = 5.0;
        u.set_camera(m, IDENTITY, [1920.0, 1080.0]);
        assert_eq!(u.view_proj[12], 5.0);
        assert_eq!(u.resolution, [1920.0, 1080.0]);
    }
}
