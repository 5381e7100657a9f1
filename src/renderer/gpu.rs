use anyhow::{Context, Result};
use std::sync::Arc;
use winit::window::Window;

use super::pipeline::DEPTH_FORMAT;
use crate::camera::Viewport;

/// Preferred MSAA sample count, used when the adapter supports it
pub const MSAA_SAMPLES: u32 = 4;

/// Device, queue and the configured window surface
pub struct Gpu {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub config: wgpu::SurfaceConfiguration,
    /// 4 when the surface and depth formats support MSAA, else 1
    pub sample_count: u32,
}

impl Gpu {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("Failed to create window surface")?;
        let adapter = Self::request_adapter(&instance, &surface).await?;
        let (device, queue) = Self::request_device(&adapter).await?;

        let info = adapter.get_info();
        log::info!("Using {} ({:?})", info.name, info.backend);

        let config = Self::create_surface_config(
            &surface,
            &adapter,
            Viewport::new(size.width, size.height),
        );
        surface.configure(&device, &config);

        let sample_count = Self::choose_sample_count(&adapter, config.format);
        log::debug!("MSAA samples: {}", sample_count);

        Ok(Self {
            device,
            queue,
            surface,
            config,
            sample_count,
        })
    }

    async fn request_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> Result<wgpu::Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .context("Failed to find appropriate adapter")
    }

    async fn request_device(adapter: &wgpu::Adapter) -> Result<(wgpu::Device, wgpu::Queue)> {
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Stress Scene Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .context("Failed to create device")
    }

    fn choose_sample_count(adapter: &wgpu::Adapter, color: wgpu::TextureFormat) -> u32 {
        let supported = [color, DEPTH_FORMAT].iter().all(|format| {
            adapter
                .get_texture_format_features(*format)
                .flags
                .sample_count_supported(MSAA_SAMPLES)
        });
        if supported {
            MSAA_SAMPLES
        } else {
            1
        }
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        viewport: Viewport,
    ) -> wgpu::SurfaceConfiguration {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: viewport.width.max(1),
            height: viewport.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn size(&self) -> [u32; 2] {
        [self.config.width, self.config.height]
    }

    /// Reconfigure for a drawable viewport; zero-area sizes are ignored
    pub fn resize(&mut self, viewport: &Viewport) {
        if !viewport.is_drawable() {
            return;
        }
        self.config.width = viewport.width;
        self.config.height = viewport.height;
        self.reconfigure();
    }

    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }
}
