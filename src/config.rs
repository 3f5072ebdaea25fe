use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::client::API_ENDPOINT;
use crate::error::{IssuesError, Result};
use crate::state::DEFAULT_PATH;

const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Deserialize, Serialize, Default, Debug, PartialEq)]
pub struct Config {
    pub token: Option<String>,
    pub default_path: Option<String>,
    pub api_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| IssuesError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| IssuesError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "gh-issues")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(IssuesError::NoConfigDir)
    }

    /// Get token with env var taking precedence over config file
    pub fn token(&self) -> Result<String> {
        Self::resolve_token(std::env::var(TOKEN_ENV).ok(), self.token.as_deref())
    }

    fn resolve_token(env: Option<String>, configured: Option<&str>) -> Result<String> {
        env.filter(|token| !token.is_empty())
            .or_else(|| configured.map(String::from))
            .ok_or(IssuesError::MissingToken)
    }

    /// Get repository path, preferring explicit argument over default
    pub fn resolve_path(&self, explicit: Option<&str>) -> String {
        explicit
            .or(self.default_path.as_deref())
            .unwrap_or(DEFAULT_PATH)
            .to_string()
    }

    pub fn endpoint(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| API_ENDPOINT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
token = "ghp_example"
default_path = "facebook/react"
api_url = "https://github.example.com/api/graphql"
"#,
        )
        .unwrap();

        assert_eq!(config.token.as_deref(), Some("ghp_example"));
        assert_eq!(config.resolve_path(None), "facebook/react");
        assert_eq!(config.endpoint(), "https://github.example.com/api/graphql");
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.resolve_path(None), DEFAULT_PATH);
        assert_eq!(config.endpoint(), API_ENDPOINT);
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        assert!(Config::parse("token = 42").is_err());
    }

    #[test]
    fn test_explicit_path_wins() {
        let config = Config {
            default_path: Some("facebook/react".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_path(Some("rust-lang/rust")), "rust-lang/rust");
    }

    #[test]
    fn test_env_token_takes_precedence() {
        let token =
            Config::resolve_token(Some("from-env".to_string()), Some("from-file")).unwrap();
        assert_eq!(token, "from-env");

        let token = Config::resolve_token(Some(String::new()), Some("from-file")).unwrap();
        assert_eq!(token, "from-file");

        assert!(matches!(
            Config::resolve_token(None, None),
            Err(IssuesError::MissingToken)
        ));
    }
}
