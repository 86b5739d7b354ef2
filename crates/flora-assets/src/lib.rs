//! Particle source meshes.
//!
//! Particles are seeded from the vertex positions of a glTF model, or
//! from a procedural lattice sphere when no model is configured.

mod gltf_loader;
mod mesh;
mod sphere;

pub use gltf_loader::*;
pub use mesh::*;
pub use sphere::*;
