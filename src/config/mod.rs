//! Configuration module for DSPFlow
//!
//! `EngineConfig` holds the construction defaults the step factory uses for
//! each built-in step type. It never describes a pipeline's step list.
//!
//! # Files
//!
//! Config files are JSON or TOML, chosen by extension (`.toml` → TOML,
//! anything else → JSON). The default location is platform-specific:
//! - **Linux**: `~/.config/dspflow/engine.toml`
//! - **macOS**: `~/Library/Application Support/dspflow/engine.toml`
//! - **Windows**: `%APPDATA%\dspflow\engine.toml`
//!
//! # Example
//!
//! ```ignore
//! use dspflow::config::EngineConfig;
//!
//! let mut config = EngineConfig::load_or_default("engine.toml");
//! config.low_pass.alpha = 0.25;
//! config.save("engine.toml")?;
//! ```

use crate::analysis::WindowFunction;
use crate::error::{DspFlowError, Result};
use crate::pipeline::step::ProcessingMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for config directories
pub const APP_ID: &str = "dspflow";

/// Default config filename
pub const CONFIG_FILE: &str = "engine.toml";

/// Default generator batch size
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Branch threshold used by factory-built steps
pub const DEFAULT_FACTORY_THRESHOLD: f64 = 8.0;

/// Default frequency-transform window length
pub const DEFAULT_WINDOW_SIZE: usize = 32;

/// Default smoothing coefficient
pub const DEFAULT_ALPHA: f64 = 0.1;

/// Get the default config file path
pub fn default_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID).join(CONFIG_FILE))
}

// ==================== Engine Config ====================

/// Per-step-type construction defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub branch: BranchConfig,

    #[serde(default)]
    pub fft: FftStepConfig,

    #[serde(default)]
    pub low_pass: LowPassConfig,
}

/// Defaults for `GenerateData` steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Initial processing mode
    #[serde(default)]
    pub processing_mode: ProcessingMode,

    /// Samples produced per batch-mode run
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Fixed RNG seed; `None` seeds from entropy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            processing_mode: ProcessingMode::Batch,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
        }
    }
}

/// Defaults for `Branch` steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_FACTORY_THRESHOLD
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FACTORY_THRESHOLD,
        }
    }
}

/// Defaults for `FFT` steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FftStepConfig {
    /// Samples per window
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// Window function applied before the transform
    #[serde(default)]
    pub window: WindowFunction,
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

impl Default for FftStepConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            window: WindowFunction::Rectangular,
        }
    }
}

/// Defaults for `LowPassFilter` steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowPassConfig {
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

impl Default for LowPassConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

impl EngineConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every field against its accepted domain.
    pub fn validate(&self) -> Result<()> {
        if self.generator.batch_size == 0 {
            return Err(DspFlowError::Config(
                "generator.batch_size must be at least 1".to_string(),
            ));
        }
        if self.fft.window_size < 2 {
            return Err(DspFlowError::Config(
                "fft.window_size must be at least 2".to_string(),
            ));
        }
        if !self.branch.threshold.is_finite() {
            return Err(DspFlowError::Config(
                "branch.threshold must be finite".to_string(),
            ));
        }
        if !self.low_pass.alpha.is_finite() {
            return Err(DspFlowError::Config(
                "low_pass.alpha must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DspFlowError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config: EngineConfig = match ConfigFormat::for_path(path) {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| {
                DspFlowError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?,
            ConfigFormat::Json => serde_json::from_str(&content).map_err(|e| {
                DspFlowError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load a config file, returning defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load engine config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save the config to disk
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DspFlowError::Config(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let content = match ConfigFormat::for_path(path) {
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| DspFlowError::Config(format!("Failed to serialize config: {}", e)))?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| DspFlowError::Config(format!("Failed to serialize config: {}", e)))?,
        };

        std::fs::write(path, content).map_err(|e| {
            DspFlowError::Config(format!("Failed to write config file {:?}: {}", path, e))
        })
    }

    /// Use a fixed generator seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.generator.seed = Some(seed);
        self
    }

    /// Set the initial generator mode
    pub fn with_processing_mode(mut self, mode: ProcessingMode) -> Self {
        self.generator.processing_mode = mode;
        self
    }
}
