//! Configuration loading for Kaleidoscope.
//!
//! Configuration is loaded from TOML files with environment variable overrides.

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "config.default.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct KaleidoConfig {
    #[serde(default)]
    pub pattern: PatternConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Defaults for parameters not given on the command line.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternConfig {
    #[serde(default = "default_complexity")]
    pub complexity: u32,

    #[serde(default = "default_segments")]
    pub segments: u32,

    #[serde(default = "default_scale")]
    pub scale: f64,

    #[serde(default = "default_zoom")]
    pub zoom: f64,

    #[serde(default)]
    pub rotation: f64,

    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            complexity: default_complexity(),
            segments: default_segments(),
            scale: default_scale(),
            zoom: default_zoom(),
            rotation: 0.0,
            theme: default_theme(),
        }
    }
}

fn default_complexity() -> u32 {
    8
}

fn default_segments() -> u32 {
    8
}

fn default_scale() -> f64 {
    2.0
}

fn default_zoom() -> f64 {
    1.0
}

fn default_theme() -> String {
    "rainbow".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: String,

    #[serde(default = "default_resolution")]
    pub resolution: String,

    #[serde(default)]
    pub save_params: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            resolution: default_resolution(),
            save_params: false,
        }
    }
}

fn default_directory() -> String {
    "output".to_string()
}

fn default_resolution() -> String {
    "medium".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
        }
    }
}

fn default_background() -> String {
    "#000000".to_string()
}

impl KaleidoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("KALEIDO").separator("_"))
            .build()?;

        let kaleido_config = config.try_deserialize().unwrap_or_else(|e| {
            warn!(error = %e, "invalid configuration, using defaults");
            KaleidoConfig::default()
        });
        Ok(kaleido_config)
    }
}
