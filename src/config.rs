//! Configuration file handling for img-ascii.
//!
//! Loads configuration from `~/.config/img-ascii/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{CharacterRamp, DEFAULT_RAMP};
use crate::error::AsciiError;
use crate::pipeline::PipelineOptions;
use crate::source::DEFAULT_MAX_WIDTH;

/// Configuration file structure for img-ascii.
/// Loaded from ~/.config/img-ascii/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub ascii: AsciiConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Directory text output is written into (default: current directory)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct AsciiConfig {
    /// Glyphs from lightest to darkest
    #[serde(default = "default_ramp")]
    pub ramp: String,
    #[serde(default = "default_max_width")]
    pub max_width: u32,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            ramp: default_ramp(),
            max_width: default_max_width(),
        }
    }
}

fn default_ramp() -> String {
    DEFAULT_RAMP.to_string()
}

fn default_max_width() -> u32 {
    DEFAULT_MAX_WIDTH
}

/// Template written by `img-ascii config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# img-ascii configuration

[output]
# Directory text files are written into (default: current directory)
# dir = "/home/me/ascii"

[ascii]
# Glyphs from lightest to darkest; the count is also the sampling stride
ramp = ".~:;!jX0@#"
# Wider images are scaled down to this width before sampling
max_width = 1024
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Turn the file settings into pipeline options.
    pub fn pipeline_options(&self) -> Result<PipelineOptions, AsciiError> {
        if self.ascii.max_width == 0 {
            return Err(AsciiError::InvalidMaxWidth {
                value: self.ascii.max_width,
            });
        }
        Ok(PipelineOptions {
            ramp: CharacterRamp::from_light_to_dark(&self.ascii.ramp)?,
            max_width: self.ascii.max_width,
            output_dir: self.output.dir.clone().unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("img-ascii").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/img-ascii/config.toml")
        })
}
