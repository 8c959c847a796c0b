use std::env;
use std::path::PathBuf;

use crate::error::{ContrastError, Result};
use crate::models::AspectRatio;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_STYLE: &str = "Photorealistic, cinematic lighting, 8k high resolution";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub aspect_ratio: AspectRatio,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub default_style: String,
    pub output_dir: PathBuf,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            model: None,
            base_url: None,
            aspect_ratio: AspectRatio::Square,
            timeout_secs: None,
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `GEMINI_API_KEY`, falling back to `API_KEY`.
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok();
        let model = env::var("GEMINI_MODEL").ok();
        let base_url = env::var("GEMINI_BASE_URL").ok();
        let timeout_secs = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());

        GeminiConfig {
            api_key,
            model,
            base_url,
            aspect_ratio: AspectRatio::Square,
            timeout_secs,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key
            .as_deref()
            .map_or(false, |key| !key.trim().is_empty())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.has_credentials() {
            return Err(ContrastError::ConfigError(
                "missing API key, set GEMINI_API_KEY in the environment or .env file".into(),
            ));
        }
        Ok(())
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gemini: GeminiConfig::default(),
            default_style: DEFAULT_STYLE.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let default_style = env::var("CONTRAST_STYLE").unwrap_or_else(|_| DEFAULT_STYLE.to_string());
        let output_dir = env::var("CONTRAST_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Config {
            gemini: GeminiConfig::from_env(),
            default_style,
            output_dir,
        }
    }

    pub fn with_gemini(mut self, config: GeminiConfig) -> Self {
        self.gemini = config;
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.default_style = style.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_defaults() {
        let config = GeminiConfig::new();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.aspect_ratio, AspectRatio::Square);
        assert_eq!(config.timeout_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_validate_requires_key() {
        assert!(matches!(
            GeminiConfig::new().validate(),
            Err(ContrastError::ConfigError(_))
        ));
        assert!(GeminiConfig::new().with_api_key("   ").validate().is_err());
        assert!(GeminiConfig::new().with_api_key("secret").validate().is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = GeminiConfig::new().with_base_url("http://localhost:8080/v1beta/");
        assert_eq!(config.base_url(), "http://localhost:8080/v1beta");
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_style("watercolor")
            .with_output_dir("/tmp/out")
            .with_gemini(GeminiConfig::new().with_model("custom-model"));
        assert_eq!(config.default_style, "watercolor");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.gemini.model(), "custom-model");
    }
}
