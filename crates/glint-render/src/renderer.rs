//! Per-frame upload and render pass for the overlay

use crate::context::{RenderContext, RenderError};
use crate::overlay_canvas::OverlayCanvas;
use crate::overlay_pipeline::{OverlayPipeline, OverlayUniforms};
use glint_core::Color;
use wgpu::util::DeviceExt;

/// Draws an `OverlayCanvas` batch on top of a cleared backdrop
pub struct OverlayRenderer {
    pipeline: OverlayPipeline,
}

impl OverlayRenderer {
    pub fn new(context: &RenderContext) -> Self {
        Self {
            pipeline: OverlayPipeline::new(&context.device, context.config.format),
        }
    }

    /// Acquire the next surface texture, draw and present it.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render_frame(
        &self,
        context: &RenderContext,
        canvas: Option<&OverlayCanvas>,
        backdrop: Color,
    ) -> Result<(), RenderError> {
        let output = match context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                context.surface.configure(&context.device, &context.config);
                return Ok(());
            }
            Err(e) => return Err(RenderError::SurfaceError(e.to_string())),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.render(context, canvas, backdrop, &view);
        output.present();
        Ok(())
    }

    /// Record and submit one frame into `view`
    pub fn render(
        &self,
        context: &RenderContext,
        canvas: Option<&OverlayCanvas>,
        backdrop: Color,
        view: &wgpu::TextureView,
    ) {
        let device = &context.device;
        let queue = &context.queue;

        let uniforms = OverlayUniforms {
            viewport: [
                context.config.width.max(1) as f32,
                context.config.height.max(1) as f32,
            ],
            _pad: [0.0; 2],
        };
        queue.write_buffer(&self.pipeline.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        // Storage buffers cannot be zero-sized, so empty batches skip creation
        let glow_bind_group = canvas.filter(|c| !c.glows().is_empty()).map(|c| {
            let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Overlay Glow Buffer"),
                contents: bytemuck::cast_slice(c.glows()),
                usage: wgpu::BufferUsages::STORAGE,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                layout: &self.pipeline.glow_bind_group_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
                label: Some("Overlay Glow Bind Group"),
            });
            (bind_group, c.glows().len() as u32)
        });

        let stroke_buffer = canvas.filter(|c| !c.stroke_vertices().is_empty()).map(|c| {
            let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Overlay Stroke Buffer"),
                contents: bytemuck::cast_slice(c.stroke_vertices()),
                usage: wgpu::BufferUsages::VERTEX,
            });
            (buffer, c.stroke_vertices().len() as u32)
        });

        let clear = backdrop.premultiplied();
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Overlay Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Overlay Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear[0] as f64,
                            g: clear[1] as f64,
                            b: clear[2] as f64,
                            a: clear[3] as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_bind_group(0, &self.pipeline.uniform_bind_group, &[]);

            // Glows first, star outlines over them
            if let Some((bind_group, count)) = &glow_bind_group {
                render_pass.set_pipeline(&self.pipeline.glow_pipeline);
                render_pass.set_bind_group(1, bind_group, &[]);
                render_pass.set_index_buffer(
                    self.pipeline.quad_index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                render_pass.draw_indexed(0..6, 0, 0..*count);
            }

            if let Some((buffer, count)) = &stroke_buffer {
                render_pass.set_pipeline(&self.pipeline.stroke_pipeline);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                render_pass.draw(0..*count, 0..1);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }
}
