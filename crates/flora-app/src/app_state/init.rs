//! Window creation, mesh loading, and renderer initialization.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use flora_assets::{load_mesh, sphere_mesh, MeshPositions};
use flora_common::AssetError;
use flora_config::schema::ModelConfig;
use flora_renderer::{FrameDriver, ParticleScene, Viewport};

use super::core::FloraApp;

/// Radius of the procedural sphere used when no model is configured.
const FALLBACK_SPHERE_RADIUS: f32 = 1.5;

impl FloraApp {
    /// Create the window, load the mesh, and initialize the GPU scene.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let mesh = match load_particle_mesh(&self.config.model) {
            Ok(mesh) => mesh,
            Err(e) => {
                tracing::error!("Failed to load model: {e}");
                return false;
            }
        };

        let scene = pollster::block_on(ParticleScene::new(window.clone(), &self.config, &mesh));
        let scene = match scene {
            Ok(scene) => scene,
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        };

        let size = window.inner_size();
        let viewport = Viewport::from_physical(
            size.width,
            size.height,
            window.scale_factor(),
            self.config.performance.max_pixel_ratio as f32,
        );
        self.driver = Some(FrameDriver::from_config(&self.config, viewport, Instant::now()));
        self.scene = Some(scene);
        self.window = Some(window);

        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            pixel_ratio = viewport.pixel_ratio,
            "Window created and renderer initialized"
        );
        true
    }
}

/// Vertex positions from the configured model, or the procedural sphere.
pub(super) fn load_particle_mesh(model: &ModelConfig) -> Result<MeshPositions, AssetError> {
    if model.has_path() {
        return load_mesh(Path::new(model.path.trim()), &model.decoder_path);
    }

    tracing::info!(
        latitudes = model.fallback_latitudes,
        longitudes = model.fallback_longitudes,
        "No model configured, using procedural sphere"
    );
    let mesh = sphere_mesh(
        model.fallback_latitudes,
        model.fallback_longitudes,
        FALLBACK_SPHERE_RADIUS,
    );
    if mesh.is_empty() {
        return Err(AssetError::Empty);
    }
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_ten_thousand_point_sphere() {
        let mesh = load_particle_mesh(&ModelConfig::default()).unwrap();
        assert_eq!(mesh.count(), 10_000);
    }

    #[test]
    fn missing_model_file_is_an_error() {
        let model = ModelConfig {
            path: "/tmp/flora_no_such_model.glb".into(),
            ..Default::default()
        };
        assert!(matches!(
            load_particle_mesh(&model),
            Err(AssetError::Io { .. })
        ));
    }

    #[test]
    fn unreadable_model_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.glb");
        std::fs::write(&path, b"not a model").unwrap();
        let model = ModelConfig {
            path: path.display().to_string(),
            ..Default::default()
        };
        assert!(matches!(load_particle_mesh(&model), Err(AssetError::Gltf(_))));
    }
}
