// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SearchError};
use crate::models::EntityLabel;
use crate::utils::validation::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://google.serper.dev/search";
pub const DEFAULT_API_KEY_ENV: &str = "SERPAPI_API_KEY";
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub themes: ThemeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    pub endpoint: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Issue a bare query when no site filter was requested
    pub general_when_unfiltered: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            general_when_unfiltered: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub top_n: usize,
    pub categories: Vec<EntityLabel>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            categories: EntityLabel::theme_defaults(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("OSERPENT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    /// Reads the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String> {
        match std::env::var(&self.search.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(SearchError::MissingCredential(
                self.search.api_key_env.clone(),
            )),
        }
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.search.endpoint)
            .map_err(|e| SearchError::Config(e.to_string()))?;

        if self.themes.top_n == 0 {
            return Err(SearchError::Config(
                "themes.top_n must be greater than 0".to_string(),
            ));
        }

        if self.search.api_key_env.trim().is_empty() {
            return Err(SearchError::Config(
                "search.api_key_env must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default_config();
        assert_eq!(config.search.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.search.api_key_env, "SERPAPI_API_KEY");
        assert!(!config.search.general_when_unfiltered);
        assert_eq!(config.themes.top_n, 5);
        assert_eq!(
            config.themes.categories,
            vec![
                EntityLabel::Organization,
                EntityLabel::Product,
                EntityLabel::Event
            ]
        );
        assert!(config.output.color);
    }

    #[test]
    fn test_load_from_file_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("oserpent.toml");
        fs::write(
            &path,
            "[themes]\ntop_n = 10\ncategories = [\"organization\"]\n\n[search]\ngeneral_when_unfiltered = true\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.themes.top_n, 10);
        assert_eq!(config.themes.categories, vec![EntityLabel::Organization]);
        assert!(config.search.general_when_unfiltered);
        assert_eq!(config.search.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_rejects_zero_top_n() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[themes]\ntop_n = 0\n").unwrap();

        assert!(matches!(
            Config::load(Some(&path)),
            Err(SearchError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[search]\nendpoint = \"ftp://example.com\"\n").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_missing_credential() {
        let mut config = Config::default_config();
        config.search.api_key_env = "OSERPENT_TEST_KEY_THAT_IS_NEVER_SET".to_string();

        match config.api_key() {
            Err(SearchError::MissingCredential(name)) => {
                assert_eq!(name, "OSERPENT_TEST_KEY_THAT_IS_NEVER_SET")
            }
            other => panic!("expected missing credential, got {:?}", other),
        }
    }
}
