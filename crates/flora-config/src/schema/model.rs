//! Model (particle source) configuration types.

use serde::{Deserialize, Serialize};

/// Which mesh seeds the particle positions.
///
/// An empty `path` selects the built-in lattice sphere with
/// `fallback_latitudes * fallback_longitudes` vertices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to a `.glb` / `.gltf` file. Relative paths resolve against
    /// the working directory.
    pub path: String,
    /// Location of the mesh decoder assets, reported when a model needs
    /// a compression extension that cannot be decoded.
    pub decoder_path: String,
    pub fallback_latitudes: u32,
    pub fallback_longitudes: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            decoder_path: "assets/draco/".into(),
            fallback_latitudes: 100,
            fallback_longitudes: 100,
        }
    }
}

impl ModelConfig {
    /// Whether a model file is configured.
    pub fn has_path(&self) -> bool {
        !self.path.trim().is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
