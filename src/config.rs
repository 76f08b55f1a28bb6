use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::github::GitHub;
use crate::http::HttpClient;

/// Applied to every request; no request is retried.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const USER_AGENT: &str = concat!("relkit/", env!("RELKIT_VERSION"));

/// Connection settings shared by all commands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigOptions {
    pub api_url: Option<String>,
    pub raw_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConfigOptions {
    /// Per-request timeout, [`DEFAULT_TIMEOUT_SECS`] when unset.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

pub struct Config {
    pub github: GitHub,
}

impl Config {
    pub fn new(options: ConfigOptions) -> Result<Self> {
        let timeout = options.timeout();

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        debug!("HTTP client ready (timeout {:?})", timeout);

        let github = GitHub::new(HttpClient::new(client), options.api_url, options.raw_url);

        Ok(Self { github })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelkitError;
    use crate::github::{DEFAULT_API_URL, DEFAULT_RAW_URL, GitHubRepo, ReleaseSource};
    use mockito::{Matcher, Server};

    #[test]
    fn test_timeout_defaults_to_ten_seconds() {
        assert_eq!(ConfigOptions::default().timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new(ConfigOptions::default()).unwrap();
        assert_eq!(config.github.api_url, DEFAULT_API_URL);
        assert_eq!(config.github.raw_url, DEFAULT_RAW_URL);
    }

    #[test]
    fn test_config_overrides() {
        let options = ConfigOptions {
            api_url: Some("http://localhost:8080".to_string()),
            raw_url: Some("http://localhost:9090".to_string()),
            timeout_secs: Some(3),
        };
        assert_eq!(options.timeout(), Duration::from_secs(3));

        let config = Config::new(options).unwrap();
        assert_eq!(config.github.api_url, "http://localhost:8080");
        assert_eq!(config.github.raw_url, "http://localhost:9090");
    }

    #[tokio::test]
    async fn test_config_sends_user_agent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/o/r/main/VERSION")
            .match_header("User-Agent", Matcher::Regex("^relkit/".to_string()))
            .with_body("1.0.0")
            .create_async()
            .await;

        let config = Config::new(ConfigOptions {
            raw_url: Some(server.url()),
            ..Default::default()
        })
        .unwrap();
        let body = config
            .github
            .raw_file(&GitHubRepo::new("o", "r"), "main", "VERSION")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body, "1.0.0");
    }

    #[tokio::test]
    async fn test_config_github_uses_api_url() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/o/r/releases/latest")
            .with_status(403)
            .create_async()
            .await;

        let config = Config::new(ConfigOptions {
            api_url: Some(server.url()),
            ..Default::default()
        })
        .unwrap();
        let err = config
            .github
            .latest_release(&GitHubRepo::new("o", "r"))
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(
            err.downcast_ref::<RelkitError>(),
            Some(RelkitError::HttpStatus { status: 403, .. })
        ));
    }
}
