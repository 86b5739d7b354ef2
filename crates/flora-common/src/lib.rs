pub mod errors;
pub mod types;

pub use errors::{AssetError, ConfigError, FloraError};
pub use types::Color;

pub type Result<T> = std::result::Result<T, FloraError>;
