//! wgpu render context setup

use glint_core::Viewport;
use std::sync::Arc;
use thiserror::Error;
use winit::window::Window;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to create surface: {0}")]
    SurfaceCreation(String),
    #[error("Failed to get adapter")]
    AdapterNotFound,
    #[error("Failed to create device: {0}")]
    DeviceCreation(String),
    #[error("Surface error: {0}")]
    SurfaceError(String),
}

/// wgpu render context containing device, queue, and surface
pub struct RenderContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,
}

impl RenderContext {
    /// Create a render context for the overlay window.
    ///
    /// With `transparent` set, a premultiplied alpha mode is preferred so the
    /// desktop shows through wherever the overlay draws nothing.
    pub async fn new(window: Arc<Window>, transparent: bool) -> Result<Self, RenderError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| RenderError::SurfaceCreation(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::AdapterNotFound)?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Glint Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_defaults(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await
            .map_err(|e| RenderError::DeviceCreation(e.to_string()))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = choose_format(&surface_caps.formats).ok_or_else(|| {
            RenderError::SurfaceCreation("surface reports no texture formats".into())
        })?;
        let alpha_mode = choose_alpha_mode(&surface_caps.alpha_modes, transparent)
            .ok_or_else(|| RenderError::SurfaceCreation("surface reports no alpha modes".into()))?;

        log::debug!(
            "surface format {:?}, alpha mode {:?}, size {}x{}",
            surface_format,
            alpha_mode,
            size.width,
            size.height
        );

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    /// Resize the surface
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Current surface size as a viewport
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.size.width, self.size.height)
    }
}

/// Glyph colors are authored in sRGB already, so blend in a non-sRGB target
/// to match how a browser canvas composites them.
fn choose_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first())
        .copied()
}

fn choose_alpha_mode(
    modes: &[wgpu::CompositeAlphaMode],
    transparent: bool,
) -> Option<wgpu::CompositeAlphaMode> {
    if transparent {
        if let Some(mode) = modes
            .iter()
            .find(|m| **m == wgpu::CompositeAlphaMode::PreMultiplied)
        {
            return Some(*mode);
        }
    }
    modes.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, TextureFormat};

    #[test]
    fn prefers_linear_format() {
        let formats = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
        assert_eq!(choose_format(&formats), Some(TextureFormat::Bgra8Unorm));
    }

    #[test]
    fn falls_back_to_first_format() {
        let formats = [TextureFormat::Rgba8UnormSrgb];
        assert_eq!(choose_format(&formats), Some(TextureFormat::Rgba8UnormSrgb));
        assert_eq!(choose_format(&[]), None);
    }

    #[test]
    fn transparent_prefers_premultiplied() {
        let modes = [CompositeAlphaMode::Opaque, CompositeAlphaMode::PreMultiplied];
        assert_eq!(
            choose_alpha_mode(&modes, true),
            Some(CompositeAlphaMode::PreMultiplied)
        );
        assert_eq!(choose_alpha_mode(&modes, false), Some(CompositeAlphaMode::Opaque));
    }

    #[test]
    fn transparent_without_support_uses_first_mode() {
        let modes = [CompositeAlphaMode::Opaque];
        assert_eq!(choose_alpha_mode(&modes, true), Some(CompositeAlphaMode::Opaque));
    }
}
