mod context;
mod types;

pub use context::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_converts_to_flora_error() {
        let err: flora_common::FloraError = RendererError::AdapterNotFound.into();
        assert_eq!(err.to_string(), "renderer error: no suitable GPU adapter found");
    }

    #[test]
    fn physical_size_never_zero() {
        let size = PhysicalSize::non_zero(0, 0);
        assert_eq!(size, PhysicalSize { width: 1, height: 1 });
        assert_eq!(PhysicalSize::non_zero(800, 600).width, 800);
    }
}
