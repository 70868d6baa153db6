// src/config.rs
use crate::constants::{
    DEFAULT_POINT_SIZE, DEFAULT_SANS_SERIF_TYPEFACE, MAX_SAMPLE_TEXT_BYTES, SAMPLE_TEXT_FILE,
    SIZE_PRESETS, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::error::{FontScopeError, FontScopeResult};

/// How the style of a font is chosen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleMode {
    /// Host-enumerated face names, first face selected by default
    Named,
    /// Always the plain (regular, upright) face of the family
    Plain,
}

/// Defaults handed to the font resolver at construction
#[derive(Clone, Debug, PartialEq)]
pub struct FontDefaults {
    /// Family used when no typeface name is given
    pub sans_serif_typeface: String,
}

impl Default for FontDefaults {
    fn default() -> Self {
        Self {
            sans_serif_typeface: DEFAULT_SANS_SERIF_TYPEFACE.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DemoConfig {
    /// Initial typeface; usually the system sans-serif face
    pub default_typeface: String,
    pub default_point_size: f32,
    pub size_presets: Vec<String>,
    pub style_mode: StyleMode,
    /// File name looked up next to the executable
    pub sample_text_file: String,
    pub max_sample_text_bytes: u64,
    pub window_width: i32,
    pub window_height: i32,
    pub prefer_dark_theme: bool,
    pub allow_multiple_instances: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            default_typeface: DEFAULT_SANS_SERIF_TYPEFACE.to_string(),
            default_point_size: DEFAULT_POINT_SIZE,
            size_presets: SIZE_PRESETS.iter().map(|s| s.to_string()).collect(),
            style_mode: StyleMode::Named,
            sample_text_file: SAMPLE_TEXT_FILE.to_string(),
            max_sample_text_bytes: MAX_SAMPLE_TEXT_BYTES,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            prefer_dark_theme: false,
            allow_multiple_instances: true,
        }
    }
}

impl DemoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_typeface(mut self, family: &str) -> Self {
        self.default_typeface = family.to_string();
        self
    }

    pub fn with_default_point_size(mut self, size: f32) -> Self {
        self.default_point_size = size;
        self
    }

    pub fn with_style_mode(mut self, mode: StyleMode) -> Self {
        self.style_mode = mode;
        self
    }

    pub fn with_sample_text_file(mut self, file_name: &str) -> Self {
        self.sample_text_file = file_name.to_string();
        self
    }

    pub fn with_window_size(mut self, width: i32, height: i32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn with_dark_theme(mut self, enabled: bool) -> Self {
        self.prefer_dark_theme = enabled;
        self
    }

    /// Resolver defaults derived from this configuration
    pub fn font_defaults(&self) -> FontDefaults {
        FontDefaults {
            sans_serif_typeface: self.default_typeface.clone(),
        }
    }

    /// Text shown in the size entry at startup
    pub fn default_size_text(&self) -> String {
        format!("{}", self.default_point_size)
    }

    pub fn validate(&self) -> FontScopeResult<()> {
        if !self.default_point_size.is_finite() || self.default_point_size <= 0.0 {
            return Err(FontScopeError::ConfigurationError {
                field: "default_point_size".to_string(),
                value: self.default_point_size.to_string(),
            });
        }
        if self.max_sample_text_bytes == 0 {
            return Err(FontScopeError::ConfigurationError {
                field: "max_sample_text_bytes".to_string(),
                value: "0".to_string(),
            });
        }
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(FontScopeError::ConfigurationError {
                field: "window_size".to_string(),
                value: format!("{}x{}", self.window_width, self.window_height),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_size_text(), "14");
        assert_eq!(config.size_presets.len(), 16);
        assert_eq!(config.style_mode, StyleMode::Named);
    }

    #[test]
    fn test_builder_feeds_font_defaults() {
        let config = DemoConfig::new().with_default_typeface("Cantarell");
        assert_eq!(config.font_defaults().sans_serif_typeface, "Cantarell");
    }

    #[test]
    fn test_builder_sets_sample_file_and_theme() {
        let config = DemoConfig::new()
            .with_sample_text_file("pangrams.txt")
            .with_dark_theme(true);
        assert_eq!(config.sample_text_file, "pangrams.txt");
        assert!(config.prefer_dark_theme);
        assert!(config.validate().is_ok());
        assert!(!DemoConfig::default().prefer_dark_theme);
    }

    #[test]
    fn test_fractional_default_size_text() {
        let config = DemoConfig::new().with_default_point_size(10.5);
        assert_eq!(config.default_size_text(), "10.5");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = DemoConfig::new().with_default_point_size(0.0);
        assert!(matches!(
            config.validate(),
            Err(FontScopeError::ConfigurationError { ref field, .. }) if field == "default_point_size"
        ));

        let config = DemoConfig::new().with_window_size(0, 320);
        assert!(config.validate().is_err());
    }
}
