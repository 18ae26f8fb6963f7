//! Error types for Glint

use thiserror::Error;

/// The main error type for Glint operations
#[derive(Debug, Error)]
pub enum GlintError {
    #[error("Drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for Glint operations
pub type Result<T> = std::result::Result<T, GlintError>;

impl From<toml::de::Error> for GlintError {
    fn from(err: toml::de::Error) -> Self {
        GlintError::TomlParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_field() {
        let err = GlintError::ValueOutOfRange {
            field: "spawn_threshold".into(),
            min: 0.0,
            max: 1.0,
            value: 1.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("spawn_threshold"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn toml_errors_convert() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("a = ");
        let err: GlintError = parsed.unwrap_err().into();
        assert!(matches!(err, GlintError::TomlParseError(_)));
    }
}
