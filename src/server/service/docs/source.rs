//! Remote documentation sources.
//!
//! The watcher only needs two questions answered: which documents exist, and when was
//! each last changed. `DocsSource` captures that seam; `GithubDocsSource` answers it
//! against the GitHub REST API.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use url::Url;

use crate::server::{
    config::DocsConfig,
    error::{internal::InternalError, AppError},
    model::docs::RemoteEntry,
};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Provides the remote document listing and per-document revisions.
#[async_trait]
pub trait DocsSource: Send + Sync {
    /// Lists every entry in the watched location, tracked or not.
    async fn list_documents(&self) -> Result<Vec<RemoteEntry>, AppError>;

    /// Returns the most recent change timestamp for `path`, or `None` when the document
    /// has no history.
    async fn latest_revision(&self, path: &str) -> Result<Option<String>, AppError>;
}

/// `DocsSource` backed by the GitHub contents and commits APIs.
pub struct GithubDocsSource {
    http: reqwest::Client,
    api_url: Url,
    owner: String,
    repo: String,
    path: String,
    token: Option<String>,
}

impl GithubDocsSource {
    /// Creates a new GitHub source.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client, expected to carry a User-Agent and timeout
    /// - `config` - Repository coordinates and credentials
    ///
    /// # Returns
    /// - `Ok(GithubDocsSource)` - Source ready to query
    /// - `Err(AppError::InternalErr)` - `config.github_api_url` is not a usable base URL
    pub fn new(http: reqwest::Client, config: &DocsConfig) -> Result<Self, AppError> {
        let api_url = Url::parse(&config.github_api_url).map_err(|e| {
            AppError::InternalError(format!(
                "Invalid GitHub API URL '{}': {}",
                config.github_api_url, e
            ))
        })?;

        if api_url.cannot_be_a_base() {
            return Err(InternalError::UrlCannotBeABase(config.github_api_url.clone()).into());
        }

        Ok(Self {
            http,
            api_url,
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            path: config.path.clone(),
            token: config.github_token.clone(),
        })
    }

    /// Builds `{api}/repos/{owner}/{repo}/{segments...}`.
    fn repo_url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| InternalError::UrlCannotBeABase(self.api_url.to_string()))?
            .pop_if_empty()
            .extend(["repos", self.owner.as_str(), self.repo.as_str()])
            .extend(segments);
        Ok(url)
    }

    /// `GET /repos/{owner}/{repo}/contents/{path}`
    pub(super) fn contents_url(&self) -> Result<Url, AppError> {
        self.repo_url(
            std::iter::once("contents").chain(self.path.split('/').filter(|s| !s.is_empty())),
        )
    }

    /// `GET /repos/{owner}/{repo}/commits?path={path}&per_page=1`
    pub(super) fn commits_url(&self, path: &str) -> Result<Url, AppError> {
        let mut url = self.repo_url(["commits"])?;
        url.query_pairs_mut()
            .append_pair("path", path)
            .append_pair("per_page", "1");
        Ok(url)
    }

    fn get(&self, url: Url) -> reqwest::RequestBuilder {
        let request = self.http.get(url).header(ACCEPT, GITHUB_ACCEPT);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl DocsSource for GithubDocsSource {
    async fn list_documents(&self) -> Result<Vec<RemoteEntry>, AppError> {
        let body = self
            .get(self.contents_url()?)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        Ok(entries_from_contents(body))
    }

    async fn latest_revision(&self, path: &str) -> Result<Option<String>, AppError> {
        let commits = self
            .get(self.commits_url(path)?)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<CommitEntry>>()
            .await?;

        Ok(latest_commit_date(commits))
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct CommitEntry {
    commit: CommitDetail,
}

#[derive(Deserialize, Debug)]
struct CommitDetail {
    committer: Option<CommitSignature>,
}

#[derive(Deserialize, Debug)]
struct CommitSignature {
    date: Option<String>,
}

/// Extracts entries from a contents API response.
///
/// The contents API returns an object instead of an array when the configured path
/// points at a single file; that yields no documents rather than an error. Array items
/// missing `name` or `path` are skipped.
pub(crate) fn entries_from_contents(body: serde_json::Value) -> Vec<RemoteEntry> {
    let serde_json::Value::Array(items) = body else {
        tracing::warn!("GitHub contents response is not a directory listing, ignoring it");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<RemoteEntry>(item).ok())
        .collect()
}

/// Returns the committer date of the newest commit, if any.
pub(crate) fn latest_commit_date(commits: Vec<CommitEntry>) -> Option<String> {
    commits
        .into_iter()
        .next()
        .and_then(|entry| entry.commit.committer)
        .and_then(|committer| committer.date)
}
