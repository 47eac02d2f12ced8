use wgpu::{Surface, SurfaceConfiguration, SurfaceTexture};

use super::gpu_context::GpuContext;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Hardware pixel densities above this are clamped to bound fragment cost
/// on high-density displays
pub const PIXEL_RATIO_CAP: f64 = 2.0;

/// Rendering pixel dimensions for a physical viewport size
///
/// Applies the pixel-ratio cap: below the cap the surface renders at native
/// resolution, above it the backing store is scaled down so a 3x display
/// pays for at most 2x the logical pixel count per axis. Dimensions never
/// drop below one pixel.
pub fn pixel_dimensions(physical: (u32, u32), scale_factor: f64) -> (u32, u32) {
    let effective = if scale_factor > PIXEL_RATIO_CAP {
        PIXEL_RATIO_CAP / scale_factor
    } else {
        1.0
    };
    let width = (physical.0 as f64 * effective).round() as u32;
    let height = (physical.1 as f64 * effective).round() as u32;
    (width.max(1), height.max(1))
}

/// Window surface plus its swapchain configuration
///
/// Owns resizing: callers hand it physical viewport dimensions and the
/// window scale factor; it reconfigures only when the capped pixel
/// dimensions actually change, so repeated identical resizes are no-ops.
pub struct SurfaceTarget {
    surface: Surface<'static>,
    config: SurfaceConfiguration,
}

impl SurfaceTarget {
    pub fn new(
        surface: Surface<'static>,
        gpu: &GpuContext,
        physical: (u32, u32),
        scale_factor: f64,
    ) -> Result<Self> {
        let caps = surface.get_capabilities(gpu.adapter());
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(caps.formats[0]);

        let (width, height) = pixel_dimensions(physical, scale_factor);
        let config = SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(gpu.device(), &config);

        Ok(Self { surface, config })
    }

    /// Adopt new viewport dimensions, skipping redundant reconfiguration
    pub fn resize(&mut self, gpu: &GpuContext, physical: (u32, u32), scale_factor: f64) {
        if physical.0 == 0 || physical.1 == 0 {
            return;
        }
        let (width, height) = pixel_dimensions(physical, scale_factor);
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(gpu.device(), &self.config);
    }

    /// Re-apply the current configuration (after a lost/outdated surface)
    pub fn reconfigure(&self, gpu: &GpuContext) {
        self.surface.configure(gpu.device(), &self.config);
    }

    pub fn acquire(&self) -> std::result::Result<SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }
}
