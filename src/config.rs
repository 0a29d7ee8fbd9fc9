//! Configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model selection and credential lookup
    pub model: ModelConfig,

    /// Prompt template location
    pub prompts: PromptsConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .ocrclean.yml
        let local_config = PathBuf::from(".ocrclean.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/ocrclean/ocrclean.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("ocrclean").join("ocrclean.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Model selection and credential lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model used when --model is not given
    pub default: String,

    /// Suffix appended to the uppercased model name to form the credential
    /// environment variable name (e.g. `gemini` -> `GEMINI_API_KEY`)
    #[serde(rename = "api-key-suffix")]
    pub api_key_suffix: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            default: "gemini".to_string(),
            api_key_suffix: "_API_KEY".to_string(),
        }
    }
}

/// Prompt template location configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    /// Directory containing the prompt template files
    pub dir: PathBuf,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("prompts"),
        }
    }
}

/// Resolve the optional API key for a model from the environment
///
/// Looks up `<MODEL_UPPER><suffix>` (e.g. `mistral` with the default suffix
/// reads `MISTRAL_API_KEY`). An unset variable is not an error; the
/// credential is simply absent.
pub fn api_key_for(model: &str, suffix: &str) -> Option<String> {
    let var = format!("{}{}", model.to_uppercase(), suffix);
    match std::env::var(&var) {
        Ok(key) => {
            tracing::debug!(%var, "API key found in environment");
            Some(key)
        }
        Err(_) => {
            tracing::debug!(%var, "API key not set, invoking without credential");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.model.default, "gemini");
        assert_eq!(config.model.api_key_suffix, "_API_KEY");
        assert_eq!(config.prompts.dir, PathBuf::from("prompts"));
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
model:
  default: claude
  api-key-suffix: _TOKEN

prompts:
  dir: /etc/ocrclean/prompts
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.model.default, "claude");
        assert_eq!(config.model.api_key_suffix, "_TOKEN");
        assert_eq!(config.prompts.dir, PathBuf::from("/etc/ocrclean/prompts"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
model:
  default: mistral
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.model.default, "mistral");

        // Defaults for unspecified
        assert_eq!(config.model.api_key_suffix, "_API_KEY");
        assert_eq!(config.prompts.dir, PathBuf::from("prompts"));
    }

    #[test]
    #[serial]
    fn test_api_key_for_reads_uppercased_var() {
        // SAFETY: serialized test, no concurrent env access
        unsafe {
            std::env::set_var("MISTRAL_API_KEY", "test-key");
        }

        let key = api_key_for("mistral", "_API_KEY");

        // SAFETY: serialized test, no concurrent env access
        unsafe {
            std::env::remove_var("MISTRAL_API_KEY");
        }

        assert_eq!(key.as_deref(), Some("test-key"));
    }

    #[test]
    #[serial]
    fn test_api_key_for_absent_is_none() {
        // SAFETY: serialized test, no concurrent env access
        unsafe {
            std::env::remove_var("MISTRAL_API_KEY");
        }

        assert!(api_key_for("mistral", "_API_KEY").is_none());
    }

    #[test]
    #[serial]
    fn test_api_key_for_custom_suffix() {
        // SAFETY: serialized test, no concurrent env access
        unsafe {
            std::env::set_var("GEMINI_TOKEN", "other-key");
        }

        let key = api_key_for("gemini", "_TOKEN");

        // SAFETY: serialized test, no concurrent env access
        unsafe {
            std::env::remove_var("GEMINI_TOKEN");
        }

        assert_eq!(key.as_deref(), Some("other-key"));
    }
}
