use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CerebraConfig {
    pub pacing: PacingConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl CerebraConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: CerebraConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file doesn't exist, return defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("CEREBRA_PACING") {
            self.pacing.enabled = matches!(v.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Ok(v) = std::env::var("CEREBRA_STAGE_DELAY_MS") {
            if let Ok(n) = v.parse() {
                self.pacing.stage_delay_ms = n;
            }
        }
        if let Ok(v) = std::env::var("CEREBRA_OUTPUT") {
            match v.to_lowercase().as_str() {
                "json" => self.output.format = OutputFormat::Json,
                "text" => self.output.format = OutputFormat::Text,
                other => tracing::warn!("Ignoring unknown CEREBRA_OUTPUT value: {}", other),
            }
        }
        if let Ok(v) = std::env::var("CEREBRA_LOG") {
            self.logging.filter = v;
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

/// Presentation delays between stages. Never affects results.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub enabled: bool,
    pub stage_delay_ms: u64,
    /// Delay after the last (prefrontal) stage
    pub final_stage_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            stage_delay_ms: 650,
            final_stage_delay_ms: 200,
        }
    }
}

impl PacingConfig {
    /// Delay to wait after a stage; `is_last` selects the shorter final pause.
    pub fn delay_after(&self, is_last: bool) -> Duration {
        if !self.enabled {
            return Duration::ZERO;
        }
        let ms = if is_last {
            self.final_stage_delay_ms
        } else {
            self.stage_delay_ms
        };
        Duration::from_millis(ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
