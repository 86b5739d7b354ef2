//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Initial window settings.
///
/// `width`/`height` are logical pixels; the OS scale factor is applied
/// by winit when the window is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Flora".into(),
            width: 1280,
            height: 800,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
