//! Glyph geometry and drawing: radial glow plus an optional star outline

use crate::config::TrailConfig;
use crate::particle::Particle;
use glint_core::{Canvas, Color, GradientStop, Vec2};
use std::f32::consts::PI;

/// Gradient stops for a glow at `opacity`: opaque center, dimmer middle,
/// fully transparent rim
pub fn glow_stops(config: &TrailConfig, opacity: f32) -> [GradientStop; 3] {
    [
        GradientStop::new(0.0, config.glow_inner_color().with_alpha(opacity)),
        GradientStop::new(
            config.glow_mid_offset,
            config
                .glow_mid_color()
                .with_alpha(opacity * config.glow_mid_alpha_scale),
        ),
        GradientStop::new(1.0, config.glow_outer_color().with_alpha(0.0)),
    ]
}

/// Vertices of a star with `points` spikes, alternating outer and inner
/// radius, starting at angle 0 and sweeping evenly around `center`
pub fn star_vertices(center: Vec2, points: u32, outer: f32, inner: f32) -> Vec<Vec2> {
    let count = points * 2;
    (0..count)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = i as f32 * PI / points as f32;
            center.polar_offset(angle, radius)
        })
        .collect()
}

/// Whether a particle of `size` gets a star outline
pub fn has_star(config: &TrailConfig, size: f32) -> bool {
    size > config.star_size_threshold
}

/// Star outline color at `opacity`
pub fn star_color(config: &TrailConfig, opacity: f32) -> Color {
    config
        .star_color()
        .with_alpha(opacity * config.star_alpha_scale)
}

/// Draw one live particle
pub fn draw_particle<C: Canvas + ?Sized>(canvas: &mut C, particle: &Particle, config: &TrailConfig) {
    let opacity = particle.opacity() as f32;
    let center = particle.position();
    let size = particle.size();

    canvas.fill_radial_gradient(center, size, &glow_stops(config, opacity));

    if has_star(config, size) {
        let outline = star_vertices(
            center,
            config.star_points,
            size * config.star_outer_ratio,
            size * config.star_inner_ratio,
        );
        canvas.stroke_polygon(&outline, star_color(config, opacity), config.star_line_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{DrawOp, ParticleId, RecordingCanvas, Viewport};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn star_has_alternating_radii() {
        let center = Vec2::new(50.0, 50.0);
        let verts = star_vertices(center, 4, 4.0, 2.0);
        assert_eq!(verts.len(), 8);
        for (i, v) in verts.iter().enumerate() {
            let expected = if i % 2 == 0 { 4.0 } else { 2.0 };
            assert!(close(v.distance(&center), expected));
        }
        // First vertex points along +x
        assert!(close(verts[0].x, 54.0));
        assert!(close(verts[0].y, 50.0));
        // Third vertex is a quarter turn later
        assert!(close(verts[2].x, 50.0));
        assert!(close(verts[2].y, 54.0));
    }

    #[test]
    fn glow_stops_track_opacity() {
        let config = TrailConfig::default();
        let stops = glow_stops(&config, 0.5);
        assert_eq!(stops[0].offset, 0.0);
        assert!(close(stops[0].color.a, 0.5));
        assert_eq!(stops[1].offset, 0.5);
        assert!(close(stops[1].color.a, 0.4));
        assert_eq!(stops[2].offset, 1.0);
        assert_eq!(stops[2].color.a, 0.0);
    }

    #[test]
    fn star_threshold_is_strict() {
        let config = TrailConfig::default();
        assert!(!has_star(&config, 3.0));
        assert!(!has_star(&config, 4.0));
        assert!(has_star(&config, 4.01));
    }

    #[test]
    fn small_particle_draws_glow_only() {
        let config = TrailConfig::default();
        let mut canvas = RecordingCanvas::new(Viewport::new(100, 100));
        let p = Particle::new(ParticleId(0), Vec2::new(10.0, 10.0), 3.0, 0.02);
        draw_particle(&mut canvas, &p, &config);
        assert_eq!(canvas.gradient_count(), 1);
        assert_eq!(canvas.stroke_count(), 0);
    }

    #[test]
    fn large_particle_draws_star_with_scaled_radii() {
        let config = TrailConfig::default();
        let mut canvas = RecordingCanvas::new(Viewport::new(100, 100));
        let center = Vec2::new(20.0, 30.0);
        let p = Particle::new(ParticleId(0), center, 5.0, 0.02);
        draw_particle(&mut canvas, &p, &config);

        assert_eq!(canvas.gradient_count(), 1);
        assert_eq!(canvas.stroke_count(), 1);
        match &canvas.ops()[1] {
            DrawOp::StrokePolygon {
                points,
                color,
                line_width,
            } => {
                assert_eq!(points.len(), 8);
                assert!(close(points[0].distance(&center), 4.0));
                assert!(close(points[1].distance(&center), 2.0));
                assert!(close(color.a, 0.6));
                assert_eq!(*line_width, 1.0);
            }
            other => panic!("expected star stroke, got {other:?}"),
        }
        match &canvas.ops()[0] {
            DrawOp::RadialGradient { center: c, radius, .. } => {
                assert_eq!(*c, center);
                assert_eq!(*radius, 5.0);
            }
            other => panic!("expected glow, got {other:?}"),
        }
    }
}
