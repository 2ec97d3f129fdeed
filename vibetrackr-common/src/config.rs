//! Configuration loading and root folder resolution
//!
//! Resolution priority for every setting:
//! 1. Command-line argument (highest)
//! 2. Environment variable
//! 3. TOML config file (`~/.config/vibetrackr/config.toml`)
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable naming the data root folder
pub const ROOT_ENV_VAR: &str = "VIBETRACKR_ROOT";

/// Environment variable naming the VAD inference backend URL
pub const VAD_URL_ENV_VAR: &str = "VIBETRACKR_VAD_URL";

/// Default bind address for the backend service
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5810";

/// Default Gradio space hosting the VAD inference model
pub const DEFAULT_VAD_URL: &str = "https://robrokools-vad-emotion.hf.space";

/// Raw TOML config file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Data root folder (database lives here)
    pub root_folder: Option<String>,
    /// Service bind address, e.g. "127.0.0.1:5810"
    pub bind_addr: Option<String>,
    /// VAD inference backend base URL
    pub vad_backend_url: Option<String>,
    /// Affect analysis tuning
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

/// Affect analysis tuning knobs
///
/// Defaults match the production pipeline: chunked scoring with a
/// 128-char window, 32-char stride, and a conservative retry budget
/// against the rate-limited inference backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// "chunked" (default) or "single-call"
    pub mode: String,
    /// Chunk window size in characters
    pub window: usize,
    /// Chunk stride in characters (must not exceed window)
    pub stride: usize,
    /// Delay between sequential backend calls, milliseconds (0 = none)
    pub call_delay_ms: u64,
    /// Retries per backend call after the initial attempt
    pub max_retries: u32,
    /// Initial retry backoff, milliseconds (doubles per attempt)
    pub initial_backoff_ms: u64,
    /// Per-call request timeout, seconds
    pub request_timeout_secs: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            mode: "chunked".to_string(),
            window: 128,
            stride: 32,
            call_delay_ms: 250,
            max_retries: 3,
            initial_backoff_ms: 500,
            request_timeout_secs: 30,
        }
    }
}

impl AnalysisSettings {
    /// Validate tuning values before the service starts
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(Error::Config("analysis.window must be positive".to_string()));
        }
        if self.stride == 0 {
            return Err(Error::Config("analysis.stride must be positive".to_string()));
        }
        if self.stride > self.window {
            return Err(Error::Config(format!(
                "analysis.stride ({}) must not exceed analysis.window ({})",
                self.stride, self.window
            )));
        }
        match self.mode.as_str() {
            "chunked" | "single-call" => Ok(()),
            other => Err(Error::Config(format!(
                "analysis.mode must be \"chunked\" or \"single-call\", got \"{}\"",
                other
            ))),
        }
    }
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Data root folder
    pub root_folder: PathBuf,
    /// Service bind address
    pub bind_addr: String,
    /// VAD inference backend base URL
    pub vad_backend_url: String,
    /// Affect analysis tuning
    pub analysis: AnalysisSettings,
}

impl ServerConfig {
    /// Resolve configuration from CLI arguments, environment, TOML, defaults
    pub fn resolve(cli_root: Option<&str>, cli_bind: Option<&str>) -> Result<Self> {
        let toml_config = load_toml_config().unwrap_or_default();

        let root_folder = resolve_root_folder(cli_root, &toml_config);

        let bind_addr = cli_bind
            .map(str::to_string)
            .or_else(|| toml_config.bind_addr.clone())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let vad_backend_url = std::env::var(VAD_URL_ENV_VAR)
            .ok()
            .or_else(|| toml_config.vad_backend_url.clone())
            .unwrap_or_else(|| DEFAULT_VAD_URL.to_string());

        let analysis = toml_config.analysis;
        analysis.validate()?;

        Ok(Self {
            root_folder,
            bind_addr,
            vad_backend_url,
            analysis,
        })
    }

    /// Path of the SQLite database inside the root folder
    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join("vibetrackr.db")
    }
}

/// Resolve the data root folder
///
/// Priority: CLI argument, then `VIBETRACKR_ROOT`, then the TOML
/// `root_folder` key, then the platform data directory.
pub fn resolve_root_folder(cli_arg: Option<&str>, toml_config: &TomlConfig) -> PathBuf {
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var(ROOT_ENV_VAR) {
        return PathBuf::from(path);
    }

    if let Some(path) = &toml_config.root_folder {
        return PathBuf::from(path);
    }

    default_root_folder()
}

/// Load the TOML config file if one exists
pub fn load_toml_config() -> Result<TomlConfig> {
    let path = config_file_path()?;
    let contents = std::fs::read_to_string(&path)?;
    toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Default configuration file path for the platform
fn config_file_path() -> Result<PathBuf> {
    let path = dirs::config_dir()
        .map(|d| d.join("vibetrackr").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if path.exists() {
        Ok(path)
    } else {
        Err(Error::Config(format!("Config file not found: {:?}", path)))
    }
}

/// OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("vibetrackr"))
        .unwrap_or_else(|| PathBuf::from("./vibetrackr_data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_analysis_settings_are_valid() {
        let settings = AnalysisSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.window, 128);
        assert_eq!(settings.stride, 32);
        assert_eq!(settings.mode, "chunked");
    }

    #[test]
    fn stride_larger_than_window_rejected() {
        let settings = AnalysisSettings {
            window: 32,
            stride: 64,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn zero_window_rejected() {
        let settings = AnalysisSettings {
            window: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn unknown_mode_rejected() {
        let settings = AnalysisSettings {
            mode: "streaming".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn toml_analysis_section_parses() {
        let toml_str = r#"
            bind_addr = "0.0.0.0:8080"

            [analysis]
            mode = "single-call"
            window = 256
            stride = 64
        "#;
        let config: TomlConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.bind_addr.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(config.analysis.mode, "single-call");
        assert_eq!(config.analysis.window, 256);
        assert_eq!(config.analysis.stride, 64);
        // Unspecified keys fall back to defaults
        assert_eq!(config.analysis.max_retries, 3);
    }
}
