use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read model {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("gltf error: {0}")]
    Gltf(String),

    #[error("model contains no meshes")]
    NoMesh,

    #[error("mesh primitive has no POSITION attribute")]
    MissingPositions,

    #[error("model has no vertices")]
    Empty,

    #[error("unsupported extension {extension} (decoder path: {decoder_path})")]
    UnsupportedExtension {
        extension: String,
        decoder_path: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum FloraError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("renderer error: {0}")]
    Renderer(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("camera.radius = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: camera.radius = 0 is out of range"
        );
    }

    #[test]
    fn asset_error_display() {
        assert_eq!(AssetError::NoMesh.to_string(), "model contains no meshes");
        assert_eq!(
            AssetError::MissingPositions.to_string(),
            "mesh primitive has no POSITION attribute"
        );

        let err = AssetError::UnsupportedExtension {
            extension: "KHR_draco_mesh_compression".into(),
            decoder_path: "/draco/".into(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported extension KHR_draco_mesh_compression (decoder path: /draco/)"
        );
    }

    #[test]
    fn asset_io_error_keeps_path() {
        let err = AssetError::Io {
            path: PathBuf::from("flor4.glb"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("flor4.glb"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn flora_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: FloraError = config_err.into();
        assert!(matches!(err, FloraError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn flora_error_from_asset() {
        let err: FloraError = AssetError::Empty.into();
        assert!(matches!(err, FloraError::Asset(_)));
        assert_eq!(err.to_string(), "model has no vertices");
    }

    #[test]
    fn flora_error_renderer_display() {
        let err = FloraError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");
    }
}
