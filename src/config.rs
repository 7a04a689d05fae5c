// ABOUTME: Configuration module for the slideas converter
// ABOUTME: Provides directory, theme and watch settings with environment overrides

use std::env;
use std::path::PathBuf;

pub const DEFAULT_THEME: &str = "serif";

/// Slide appended to every converted deck.
pub const CLOSING_SLIDE: &str = "## Thank You! {.unnumbered .unlisted}\n\nQuestions?\n";

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub output_extension: String,
    pub theme: String,
    pub cache_dir: PathBuf,
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("slideas"),
            output_dir: PathBuf::from("lectures"),
            output_extension: "qmd".to_string(),
            theme: DEFAULT_THEME.to_string(),
            cache_dir: PathBuf::from("data"),
            debounce_ms: 500,
        }
    }
}

/// Options that shape the converted text of a single deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub theme: String,
    pub closing_slide: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            closing_slide: CLOSING_SLIDE.to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let source_dir = env::var("SLIDEAS_SOURCE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.source_dir);
        let output_dir = env::var("SLIDEAS_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        let output_extension = env::var("SLIDEAS_OUTPUT_EXT")
            .map(|ext| ext.trim_start_matches('.').to_string())
            .unwrap_or(defaults.output_extension);
        let theme = env::var("SLIDEAS_THEME").unwrap_or(defaults.theme);
        let cache_dir = env::var("SLIDEAS_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.cache_dir);
        let debounce_ms = env::var("SLIDEAS_DEBOUNCE_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.debounce_ms);

        Self {
            source_dir,
            output_dir,
            output_extension,
            theme,
            cache_dir,
            debounce_ms,
        }
    }

    /// Get the conversion options for this configuration
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            theme: self.theme.clone(),
            ..ConvertOptions::default()
        }
    }
}
