use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use crate::http::HttpClient;

use super::repo::GitHubRepo;
use super::types::Release;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_RAW_URL: &str = "https://raw.githubusercontent.com";

/// Remote sources relkit reads from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Metadata of the latest published release.
    async fn latest_release(&self, repo: &GitHubRepo) -> Result<Release>;
    /// Raw content of `path` on `branch`.
    async fn raw_file(&self, repo: &GitHubRepo, branch: &str, path: &str) -> Result<String>;
}

pub struct GitHub {
    pub http: HttpClient,
    pub api_url: String,
    pub raw_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(http, api_url, raw_url))]
    pub fn new(http: HttpClient, api_url: Option<String>, raw_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let raw_url = raw_url.unwrap_or_else(|| DEFAULT_RAW_URL.to_string());
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            raw_url: raw_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn latest_release_url(&self, repo: &GitHubRepo) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url, repo.owner, repo.repo
        )
    }

    pub fn raw_file_url(&self, repo: &GitHubRepo, branch: &str, path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_url,
            repo.owner,
            repo.repo,
            branch,
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl ReleaseSource for GitHub {
    #[tracing::instrument(skip(self))]
    async fn latest_release(&self, repo: &GitHubRepo) -> Result<Release> {
        let url = self.latest_release_url(repo);
        debug!("Fetching latest release from {}...", url);
        self.http.get_json::<Release>(&url).await
    }

    #[tracing::instrument(skip(self))]
    async fn raw_file(&self, repo: &GitHubRepo, branch: &str, path: &str) -> Result<String> {
        let url = self.raw_file_url(repo, branch, path);
        debug!("Fetching raw file from {}...", url);
        self.http.get_text(&url).await
    }
}
