//! Drawing surface abstraction

use crate::types::{Color, Vec2, Viewport};

/// One color stop of a radial gradient. `offset` is a fraction of the radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// A transparent 2D drawing surface covering the whole viewport.
///
/// Coordinates are surface pixels with the origin at the top-left corner.
pub trait Canvas {
    /// Current surface dimensions
    fn size(&self) -> Viewport;

    /// Change the surface dimensions. Does not move anything already drawn
    /// in surface coordinates.
    fn resize(&mut self, viewport: Viewport);

    /// Erase the whole surface back to fully transparent
    fn clear(&mut self);

    /// Fill the disc at `center` with a radial gradient reaching `radius`
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]);

    /// Stroke the closed polygon through `points`
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, line_width: f32);
}

/// A recorded drawing operation
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    RadialGradient {
        center: Vec2,
        radius: f32,
        stops: Vec<GradientStop>,
    },
    StrokePolygon {
        points: Vec<Vec2>,
        color: Color,
        line_width: f32,
    },
}

/// In-memory canvas that records every operation since the last clear.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    size: Viewport,
    ops: Vec<DrawOp>,
    clear_count: usize,
    resize_count: usize,
}

impl RecordingCanvas {
    pub fn new(size: Viewport) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Operations drawn since the last `clear`
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn gradient_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::RadialGradient { .. }))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokePolygon { .. }))
            .count()
    }

    /// Number of times the surface has been cleared
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn resize_count(&self) -> usize {
        self.resize_count
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Viewport {
        self.size
    }

    fn resize(&mut self, viewport: Viewport) {
        self.size = viewport;
        self.resize_count += 1;
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.clear_count += 1;
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        self.ops.push(DrawOp::RadialGradient {
            center,
            radius,
            stops: stops.to_vec(),
        });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, line_width: f32) {
        self.ops.push(DrawOp::StrokePolygon {
            points: points.to_vec(),
            color,
            line_width,
        });
    }
}
