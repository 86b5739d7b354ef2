//! Mapping between particles and texels of the square state texture.

use flora_assets::MeshPositions;
use rand::Rng;

use super::types::ParticleAttributes;

/// Square texture layout holding one texel per particle.
///
/// `size` is the smallest `N` with `N * N >= particle_count`. Texels past
/// `draw_count` are padding: simulated but never drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpgpuLayout {
    pub size: u32,
    pub texel_count: u32,
    pub draw_count: u32,
}

impl GpgpuLayout {
    pub fn new(particle_count: usize) -> Self {
        let count = particle_count as u32;
        let mut size = (particle_count as f64).sqrt().ceil() as u32;
        // guard against float rounding on perfect squares
        while size * size < count {
            size += 1;
        }
        let size = size.max(1);
        Self {
            size,
            texel_count: size * size,
            draw_count: count,
        }
    }

    /// Texel center of the `index`-th particle in normalized coordinates.
    pub fn uv(&self, index: u32) -> [f32; 2] {
        let n = self.size as f32;
        let x = (index % self.size) as f32;
        let y = (index / self.size) as f32;
        [(x + 0.5) / n, (y + 0.5) / n]
    }
}

/// Initial state texels: mesh position in RGB, random lifetime in A.
///
/// Returns `layout.texel_count` texels; padding texels are all zero.
pub fn build_base_texels(
    mesh: &MeshPositions,
    layout: &GpgpuLayout,
    rng: &mut impl Rng,
) -> Vec<[f32; 4]> {
    let mut texels = vec![[0.0f32; 4]; layout.texel_count as usize];
    for (texel, p) in texels
        .iter_mut()
        .zip(mesh.positions.iter())
        .take(layout.draw_count as usize)
    {
        *texel = [p[0], p[1], p[2], rng.gen::<f32>()];
    }
    texels
}

/// Per-texel instance attributes, row-major (`i = y * N + x`).
pub fn build_particle_attributes(
    layout: &GpgpuLayout,
    rng: &mut impl Rng,
) -> Vec<ParticleAttributes> {
    (0..layout.texel_count)
        .map(|i| ParticleAttributes {
            uv: layout.uv(i),
            size: rng.gen::<f32>(),
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
