//! Trail tuning constants, optionally overridden from a TOML `[trail]` table
//!
//! The defaults are hand-tuned and kept exactly as shipped.

use glint_core::{Color, GlintError, Result};

/// Tuning for spawning, decay and the glyph look
#[derive(Debug, Clone, PartialEq)]
pub struct TrailConfig {
    /// A spawn happens only when a uniform draw exceeds this (0.7 → 30%)
    pub spawn_threshold: f64,
    /// Maximum jitter per axis, in pixels, around the pointer
    pub jitter: f64,
    pub size_min: f64,
    pub size_max: f64,
    /// Opacity lost per frame is drawn from [decay_min, decay_max)
    pub decay_min: f64,
    pub decay_max: f64,
    /// Particles strictly larger than this also get a star outline
    pub star_size_threshold: f32,
    pub star_points: u32,
    pub star_outer_ratio: f32,
    pub star_inner_ratio: f32,
    pub star_line_width: f32,
    pub star_alpha_scale: f32,
    /// Gradient position of the middle stop, as a fraction of the radius
    pub glow_mid_offset: f32,
    pub glow_mid_alpha_scale: f32,
    /// Hue (degrees), saturation and lightness (fractions)
    pub glow_inner_hsl: [f32; 3],
    pub glow_mid_hsl: [f32; 3],
    pub glow_outer_hsl: [f32; 3],
    pub star_hsl: [f32; 3],
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            spawn_threshold: 0.7,
            jitter: 10.0,
            size_min: 2.0,
            size_max: 8.0,
            decay_min: 0.01,
            decay_max: 0.03,
            star_size_threshold: 4.0,
            star_points: 4,
            star_outer_ratio: 0.8,
            star_inner_ratio: 0.4,
            star_line_width: 1.0,
            star_alpha_scale: 0.6,
            glow_mid_offset: 0.5,
            glow_mid_alpha_scale: 0.8,
            glow_inner_hsl: [45.0, 1.0, 0.5],
            glow_mid_hsl: [30.0, 1.0, 0.5],
            glow_outer_hsl: [60.0, 1.0, 0.7],
            star_hsl: [45.0, 1.0, 0.5],
        }
    }
}

impl TrailConfig {
    /// Parse a TrailConfig from a TOML table. Missing keys keep their
    /// defaults; the result is validated.
    pub fn from_toml(table: &toml::value::Table) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = table.get("spawn_threshold") {
            config.spawn_threshold = toml_f64(v, "spawn_threshold")?;
        }
        if let Some(v) = table.get("jitter") {
            config.jitter = toml_f64(v, "jitter")?;
        }
        if let Some(v) = table.get("size_min") {
            config.size_min = toml_f64(v, "size_min")?;
        }
        if let Some(v) = table.get("size_max") {
            config.size_max = toml_f64(v, "size_max")?;
        }
        if let Some(v) = table.get("decay_min") {
            config.decay_min = toml_f64(v, "decay_min")?;
        }
        if let Some(v) = table.get("decay_max") {
            config.decay_max = toml_f64(v, "decay_max")?;
        }
        if let Some(v) = table.get("star_size_threshold") {
            config.star_size_threshold = toml_f64(v, "star_size_threshold")? as f32;
        }
        if let Some(v) = table.get("star_points") {
            let n = v.as_integer().ok_or_else(|| {
                GlintError::ConfigError("star_points must be an integer".into())
            })?;
            config.star_points = u32::try_from(n).map_err(|_| {
                GlintError::ConfigError(format!("star_points out of range: {n}"))
            })?;
        }
        if let Some(v) = table.get("star_outer_ratio") {
            config.star_outer_ratio = toml_f64(v, "star_outer_ratio")? as f32;
        }
        if let Some(v) = table.get("star_inner_ratio") {
            config.star_inner_ratio = toml_f64(v, "star_inner_ratio")? as f32;
        }
        if let Some(v) = table.get("star_line_width") {
            config.star_line_width = toml_f64(v, "star_line_width")? as f32;
        }
        if let Some(v) = table.get("star_alpha_scale") {
            config.star_alpha_scale = toml_f64(v, "star_alpha_scale")? as f32;
        }
        if let Some(v) = table.get("glow_mid_offset") {
            config.glow_mid_offset = toml_f64(v, "glow_mid_offset")? as f32;
        }
        if let Some(v) = table.get("glow_mid_alpha_scale") {
            config.glow_mid_alpha_scale = toml_f64(v, "glow_mid_alpha_scale")? as f32;
        }
        if let Some(v) = table.get("glow_inner_hsl") {
            config.glow_inner_hsl = toml_hsl(v, "glow_inner_hsl")?;
        }
        if let Some(v) = table.get("glow_mid_hsl") {
            config.glow_mid_hsl = toml_hsl(v, "glow_mid_hsl")?;
        }
        if let Some(v) = table.get("glow_outer_hsl") {
            config.glow_outer_hsl = toml_hsl(v, "glow_outer_hsl")?;
        }
        if let Some(v) = table.get("star_hsl") {
            config.star_hsl = toml_hsl(v, "star_hsl")?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would break the particle invariants
    pub fn validate(&self) -> Result<()> {
        check_range("spawn_threshold", self.spawn_threshold, 0.0, 1.0)?;
        check_range("glow_mid_offset", f64::from(self.glow_mid_offset), 0.0, 1.0)?;
        if self.jitter < 0.0 {
            return Err(GlintError::ConfigError(format!(
                "jitter must not be negative, got {}",
                self.jitter
            )));
        }
        if self.size_min <= 0.0 || self.size_min > self.size_max {
            return Err(GlintError::ConfigError(format!(
                "size range must satisfy 0 < size_min <= size_max, got [{}, {}]",
                self.size_min, self.size_max
            )));
        }
        // A zero decay would keep a particle alive forever
        if self.decay_min <= 0.0 || self.decay_min > self.decay_max {
            return Err(GlintError::ConfigError(format!(
                "decay range must satisfy 0 < decay_min <= decay_max, got [{}, {}]",
                self.decay_min, self.decay_max
            )));
        }
        if self.star_points < 2 {
            return Err(GlintError::ConfigError(format!(
                "star_points must be at least 2, got {}",
                self.star_points
            )));
        }
        Ok(())
    }

    /// Opaque center color of the glow
    pub fn glow_inner_color(&self) -> Color {
        hsl_color(self.glow_inner_hsl)
    }

    pub fn glow_mid_color(&self) -> Color {
        hsl_color(self.glow_mid_hsl)
    }

    pub fn glow_outer_color(&self) -> Color {
        hsl_color(self.glow_outer_hsl)
    }

    pub fn star_color(&self) -> Color {
        hsl_color(self.star_hsl)
    }
}

fn hsl_color(hsl: [f32; 3]) -> Color {
    Color::from_hsla(hsl[0], hsl[1], hsl[2], 1.0)
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if value < min || value > max || value.is_nan() {
        return Err(GlintError::ValueOutOfRange {
            field: field.to_string(),
            min,
            max,
            value,
        });
    }
    Ok(())
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f64(v: &toml::Value, field: &str) -> Result<f64> {
    v.as_float()
        .or_else(|| v.as_integer().map(|i| i as f64))
        .ok_or_else(|| GlintError::ConfigError(format!("{field} must be a number")))
}

fn toml_hsl(v: &toml::Value, field: &str) -> Result<[f32; 3]> {
    match v.as_array() {
        Some(arr) if arr.len() == 3 => Ok([
            toml_f64(&arr[0], field)? as f32,
            toml_f64(&arr[1], field)? as f32,
            toml_f64(&arr[2], field)? as f32,
        ]),
        _ => Err(GlintError::ConfigError(format!(
            "{field} must be an array of [hue, saturation, lightness]"
        ))),
    }
}
