use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::LifecycleError;

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "package-lifecycle.toml";

/// Prefix for environment overrides, e.g. `PACKAGE_LIFECYCLE_OUTPUT__FORMAT=json`
pub const ENV_PREFIX: &str = "PACKAGE_LIFECYCLE";

/// Main configuration structure for the package-lifecycle CLI
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PackageLifecycleConfig {
    /// Logging settings
    pub observability: ObservabilityConfig,
    /// How traces are printed
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level directive, `RUST_LOG` takes precedence
    pub log_level: String,
    /// Emit logs as JSON lines instead of compact text
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `text` or `json`
    pub format: String,
    /// Print the boundary notice after a no-op step
    pub show_notices: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text.as_str().to_string(),
            show_notices: false,
        }
    }
}

impl OutputConfig {
    pub fn format(&self) -> Result<OutputFormat, LifecycleError> {
        self.format.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = LifecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(LifecycleError::UnknownFormat(other.to_string())),
        }
    }
}

impl PackageLifecycleConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. `package-lifecycle.toml` in the working directory
    /// 3. Environment variables (prefixed with PACKAGE_LIFECYCLE_)
    pub fn load() -> Result<Self, LifecycleError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Same as [`load`](Self::load) but reads the given file instead.
    /// A missing file is not an error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, LifecycleError> {
        Self::build(path.as_ref(), false)
    }

    /// Load from a file the user named explicitly; the file must exist.
    pub fn load_required<P: AsRef<Path>>(path: P) -> Result<Self, LifecycleError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(LifecycleError::ConfigNotFound(path.to_path_buf()));
        }
        Self::build(path, true)
    }

    fn build(path: &Path, required: bool) -> Result<Self, LifecycleError> {
        let config = Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists. Returns whether one was loaded.
    pub fn load_env_file() -> Result<bool, LifecycleError> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            return Ok(true);
        }
        Ok(false)
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<PackageLifecycleConfig, LifecycleError>> =
    std::sync::LazyLock::new(|| {
        // Load .env file first
        PackageLifecycleConfig::load_env_file().and_then(|_| PackageLifecycleConfig::load())
    });

/// Get the global configuration
pub fn config() -> Result<&'static PackageLifecycleConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PackageLifecycleConfig::default();
        assert_eq!(config.observability.log_level, "warn");
        assert!(!config.observability.json_logs);
        assert_eq!(config.output.format().unwrap(), OutputFormat::Text);
        assert!(!config.output.show_notices);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PackageLifecycleConfig::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package-lifecycle.toml");
        std::fs::write(&path, "[output]\nshow_notices = true\n").unwrap();

        let config = PackageLifecycleConfig::load_from(&path).unwrap();
        assert!(config.output.show_notices);
        assert_eq!(config.output.format, "text");
        assert_eq!(config.observability.log_level, "warn");
    }

    #[test]
    fn test_required_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typo.toml");

        let err = PackageLifecycleConfig::load_required(&path).unwrap_err();
        assert!(matches!(&err, LifecycleError::ConfigNotFound(p) if p == &path));
        assert!(err.to_string().contains("typo.toml"));
    }

    #[test]
    fn test_required_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        let config = PackageLifecycleConfig::load_required(&path).unwrap();
        assert_eq!(config.output.format().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");

        let mut config = PackageLifecycleConfig::default();
        config.output.format = "json".to_string();
        config.observability.json_logs = true;
        config.save_to_file(&path).unwrap();

        let loaded = PackageLifecycleConfig::load_from(&path).unwrap();
        assert_eq!(loaded.output.format().unwrap(), OutputFormat::Json);
        assert!(loaded.observability.json_logs);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let output = OutputConfig {
            format: "yaml".to_string(),
            show_notices: false,
        };
        assert!(matches!(
            output.format(),
            Err(LifecycleError::UnknownFormat(f)) if f == "yaml"
        ));
    }
}
