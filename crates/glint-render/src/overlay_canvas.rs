//! CPU-side batching of canvas calls into GPU instance/vertex data

use bytemuck::{Pod, Zeroable};
use glint_core::{Canvas, Color, GradientStop, Vec2, Viewport};

/// One radial glow, matches WGSL `GlowInstance`.
/// 64 bytes, 16-byte aligned (4 x vec4). Colors are premultiplied.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GlowInstance {
    pub center_radius: [f32; 4], // xy = center, z = radius, w = mid stop offset
    pub inner: [f32; 4],
    pub mid: [f32; 4],
    pub outer: [f32; 4],
}

/// Stroke geometry vertex, matches WGSL `StrokeIn`. Color is premultiplied.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct StrokeVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl StrokeVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<StrokeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// A `Canvas` that records one frame of glyphs for the GPU.
///
/// Gradients keep three stops: the first, one middle stop and the last.
/// Strokes are expanded to triangles so line width is honoured.
#[derive(Debug, Default)]
pub struct OverlayCanvas {
    size: Viewport,
    glows: Vec<GlowInstance>,
    stroke_vertices: Vec<StrokeVertex>,
}

impl OverlayCanvas {
    pub fn new(size: Viewport) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn glows(&self) -> &[GlowInstance] {
        &self.glows
    }

    pub fn stroke_vertices(&self) -> &[StrokeVertex] {
        &self.stroke_vertices
    }

    pub fn is_empty(&self) -> bool {
        self.glows.is_empty() && self.stroke_vertices.is_empty()
    }
}

impl Canvas for OverlayCanvas {
    fn size(&self) -> Viewport {
        self.size
    }

    fn resize(&mut self, viewport: Viewport) {
        self.size = viewport;
    }

    fn clear(&mut self) {
        self.glows.clear();
        self.stroke_vertices.clear();
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        if radius <= 0.0 {
            return;
        }
        let Some((inner, mid, outer)) = three_stops(stops) else {
            return;
        };
        self.glows.push(GlowInstance {
            center_radius: [center.x, center.y, radius, mid.offset],
            inner: inner.color.premultiplied(),
            mid: mid.color.premultiplied(),
            outer: outer.color.premultiplied(),
        });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, line_width: f32) {
        if points.len() < 2 || line_width <= 0.0 {
            return;
        }
        let color = color.premultiplied();
        let half = line_width / 2.0;

        for (i, &a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            let dir = b - a;
            let len = dir.length();
            if len <= f32::EPSILON {
                continue;
            }
            let normal = Vec2::new(-dir.y / len, dir.x / len) * half;
            let quad = [a + normal, a - normal, b + normal, b + normal, a - normal, b - normal];
            self.stroke_vertices
                .extend(quad.iter().map(|p| StrokeVertex {
                    position: p.to_array(),
                    color,
                }));
        }
    }
}

/// Reduce a gradient to inner, middle and outer stops
fn three_stops(stops: &[GradientStop]) -> Option<(GradientStop, GradientStop, GradientStop)> {
    let first = *stops.first()?;
    let last = *stops.last()?;
    let mid = match stops.len() {
        1 => GradientStop::new(0.5, first.color),
        2 => GradientStop::new(0.5, mix(first.color, last.color, 0.5)),
        _ => stops[1],
    };
    Some((first, mid, last))
}

fn mix(a: Color, b: Color, t: f32) -> Color {
    Color::rgba(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}
