//! GPU particle simulation: texel layout, uniforms, and the feedback pass.

mod layout;
mod pipeline;
mod types;

pub use layout::*;
pub use pipeline::*;
pub use types::*;
