//! Player config file: `[window]` settings and the `[trail]` table

use glint_core::{Color, Result};
use glint_trail::TrailConfig;
use serde::Deserialize;
use std::path::Path;

/// Window settings from the `[window]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Page color behind the trail, straight RGBA
    pub backdrop: [f32; 4],
    /// Ask the compositor for a see-through window
    pub transparent: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Glint".to_string(),
            width: 1280,
            height: 720,
            backdrop: [0.05, 0.05, 0.08, 1.0],
            transparent: false,
        }
    }
}

impl WindowConfig {
    /// Clear color for each frame. A transparent window clears to nothing.
    pub fn backdrop_color(&self) -> Color {
        if self.transparent {
            return Color::TRANSPARENT;
        }
        let [r, g, b, a] = self.backdrop;
        Color::rgba(r, g, b, a)
    }
}

#[derive(Deserialize, Default)]
struct PlayerFile {
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    trail: toml::value::Table,
}

/// Everything the player needs to open a window and run a trail
#[derive(Debug, Clone, Default)]
pub struct PlayerConfig {
    pub window: WindowConfig,
    pub trail: TrailConfig,
}

impl PlayerConfig {
    /// Parse a config file's contents
    pub fn parse(content: &str) -> Result<Self> {
        let file: PlayerFile = toml::from_str(content)?;
        let trail = TrailConfig::from_toml(&file.trail)?;
        Ok(Self {
            window: file.window,
            trail,
        })
    }

    /// Load from `path`, or use defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Self::parse(&content)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::GlintError;

    #[test]
    fn empty_file_is_defaults() {
        let config = PlayerConfig::parse("").unwrap();
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.trail.spawn_threshold, 0.7);
    }

    #[test]
    fn parses_window_and_trail() {
        let config = PlayerConfig::parse(
            r#"
[window]
title = "Trail Demo"
width = 800
backdrop = [0.0, 0.0, 0.0, 1.0]

[trail]
spawn_threshold = 0.5
jitter = 4
"#,
        )
        .unwrap();

        assert_eq!(config.window.title, "Trail Demo");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.window.backdrop_color(), Color::BLACK);
        assert_eq!(config.trail.spawn_threshold, 0.5);
        assert_eq!(config.trail.jitter, 4.0);
    }

    #[test]
    fn transparent_window_clears_to_nothing() {
        let config = PlayerConfig::parse("[window]\ntransparent = true\n").unwrap();
        assert_eq!(config.window.backdrop_color(), Color::TRANSPARENT);
    }

    #[test]
    fn invalid_trail_is_rejected() {
        let result = PlayerConfig::parse("[trail]\nsize_min = 9.0\nsize_max = 3.0\n");
        assert!(matches!(result, Err(GlintError::ConfigError(_))));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let result = PlayerConfig::parse("[window\ntitle = 1");
        assert!(matches!(result, Err(GlintError::TomlParseError(_))));
    }

    #[test]
    fn missing_path_uses_defaults() {
        let config = PlayerConfig::load(None).unwrap();
        assert_eq!(config.window.title, "Glint");
    }

    #[test]
    fn unreadable_path_is_io_error() {
        let result = PlayerConfig::load(Some(Path::new("/nonexistent/glint.toml")));
        assert!(matches!(result, Err(GlintError::IoError(_))));
    }
}
