//! Glint Render - wgpu overlay renderer
//!
//! Draws a frame of trail glyphs over the page backdrop:
//! - `OverlayCanvas` batches `Canvas` calls into GPU-ready instance and
//!   vertex data on the CPU
//! - `OverlayPipeline` holds the glow (instanced radial gradient quads) and
//!   stroke (triangle list) pipelines, both composited with a screen blend
//! - `OverlayRenderer` uploads a batch and records the render pass

mod context;
pub mod overlay_canvas;
pub mod overlay_pipeline;
mod renderer;

pub use context::{RenderContext, RenderError};
pub use overlay_canvas::{GlowInstance, OverlayCanvas, StrokeVertex};
pub use overlay_pipeline::{OverlayPipeline, OverlayUniforms, SCREEN_BLEND};
pub use renderer::OverlayRenderer;

#[cfg(test)]
mod tests {
    #[test]
    fn overlay_shader_wgsl_parses() {
        let source = include_str!("overlay_shader.wgsl");
        naga::front::wgsl::parse_str(source).expect("overlay_shader.wgsl failed to parse");
    }
}
