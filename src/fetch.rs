use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use thiserror::Error;
use url::Url;

/// Failures while retrieving a manifest from GitHub.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid GitHub repository URL: {0}")]
    InvalidRepoUrl(String),
    #[error("pyproject.toml not found in {owner}/{repo} at ref '{git_ref}'")]
    ManifestNotFound {
        owner: String,
        repo: String,
        git_ref: String,
    },
    #[error("GitHub API request failed with status {0}")]
    BadStatus(StatusCode),
    #[error("failed to reach the GitHub API")]
    Transport(#[from] reqwest::Error),
}

/// Client for reading pyproject.toml through the GitHub contents API.
pub struct GitHubClient {
    client: reqwest::Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("depviz/0.1.0")
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            api_base: "https://api.github.com".to_string(),
        }
    }

    /// Point the client at a different API base URL (used in tests).
    pub fn with_api_base(mut self, url: &str) -> Self {
        self.api_base = url.trim_end_matches('/').to_string();
        self
    }

    /// Fetch the raw pyproject.toml of a repository at the given ref.
    ///
    /// The request asks for GitHub's raw media type, so the body is the
    /// manifest text itself rather than a JSON envelope.
    pub async fn fetch_manifest(&self, repo_url: &str, git_ref: &str) -> Result<String, FetchError> {
        let (owner, repo) = parse_repo_url(repo_url)?;
        let url = format!(
            "{}/repos/{owner}/{repo}/contents/pyproject.toml?ref={git_ref}",
            self.api_base
        );

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github.raw+json")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::ManifestNotFound {
                owner,
                repo,
                git_ref: git_ref.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(FetchError::BadStatus(response.status()));
        }

        Ok(response.text().await?)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a GitHub repository URL into its owner and repository name.
fn parse_repo_url(repo_url: &str) -> Result<(String, String), FetchError> {
    let url =
        Url::parse(repo_url).map_err(|_| FetchError::InvalidRepoUrl(repo_url.to_string()))?;

    let mut segments = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()))
        .ok_or_else(|| FetchError::InvalidRepoUrl(repo_url.to_string()))?;

    let owner = segments
        .next()
        .ok_or_else(|| FetchError::InvalidRepoUrl(repo_url.to_string()))?;
    let repo = segments
        .next()
        .ok_or_else(|| FetchError::InvalidRepoUrl(repo_url.to_string()))?;

    Ok((owner.to_string(), repo.trim_end_matches(".git").to_string()))
}
