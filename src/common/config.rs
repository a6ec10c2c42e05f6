//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Where the chart documents are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Chart dimensions and window
    #[serde(default)]
    pub charts: ChartConfig,

    /// Browser display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Output file settings
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Directory the documents are written to
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// File name of the growth chart document
    #[serde(default = "default_growth_file")]
    pub growth_file: String,

    /// File name of the convergence chart document
    #[serde(default = "default_convergence_file")]
    pub convergence_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            growth_file: default_growth_file(),
            convergence_file: default_convergence_file(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_growth_file() -> String {
    "fibonacci_exponential_growth.html".to_string()
}
fn default_convergence_file() -> String {
    "fibonacci_golden_ratio.html".to_string()
}

/// Chart settings
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// Chart width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Chart height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Sequences shorter than this are not charted directly
    #[serde(default = "default_min_terms")]
    pub min_terms: usize,

    /// Number of terms charted when the sequence is too short
    #[serde(default = "default_fallback_terms")]
    pub fallback_terms: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            min_terms: default_min_terms(),
            fallback_terms: default_fallback_terms(),
        }
    }
}

fn default_width() -> u32 {
    900
}
fn default_height() -> u32 {
    600
}
fn default_min_terms() -> usize {
    10
}
fn default_fallback_terms() -> usize {
    20
}

/// Browser display settings
#[derive(Debug, Deserialize)]
pub struct DisplayConfig {
    /// Open the written documents in the browser
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            open_browser: default_open_browser(),
        }
    }
}

fn default_open_browser() -> bool {
    true
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let config: Self =
            toml::from_str(&content).map_err(|e| super::Error::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.charts.width == 0 || self.charts.height == 0 {
            return Err(super::Error::Config(
                "chart width and height must be non-zero".to_string(),
            ));
        }
        if self.charts.fallback_terms < 2 {
            return Err(super::Error::Config(
                "charts.fallback_terms must be at least 2".to_string(),
            ));
        }
        Ok(())
    }
}
