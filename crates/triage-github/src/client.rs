//! GitHub API client.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Method, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::auth::Auth;
use crate::error::{Error, Result};
use crate::types::{AddLabels, Comparison, Issue, Label, PullRequest, User};

/// GitHub API client.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: SecretString,
}

impl GitHubClient {
    /// Default GitHub API URL.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Create a new GitHub client.
    ///
    /// # Errors
    /// Returns error if no token can be resolved.
    pub fn new(auth: &Auth) -> Result<Self> {
        Self::with_base_url(auth, Self::DEFAULT_API_URL)
    }

    /// Create a new GitHub client with a custom API URL (for GitHub Enterprise).
    ///
    /// # Errors
    /// Returns error if no token can be resolved.
    pub fn with_base_url(auth: &Auth, base_url: impl Into<String>) -> Result<Self> {
        let token = auth.resolve()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("triage-cli"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Build a request URL from an API path.
    fn url(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))
    }

    /// Send an authenticated request.
    async fn send<B: serde::Serialize + Sync>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<reqwest::Response> {
        tracing::debug!(%method, path = url.path(), "GitHub request");

        let mut request = self
            .client
            .request(method, url)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.token.expose_secret()),
            );
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    /// Make a GET request.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .send::<()>(Method::GET, self.url(path)?, None)
            .await?;

        Self::handle_response(response).await
    }

    /// Make a POST request.
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .send(Method::POST, self.url(path)?, Some(body))
            .await?;

        Self::handle_response(response).await
    }

    /// Handle API response.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        if response.status().is_success() {
            let body = response.json().await?;
            return Ok(body);
        }

        Err(Self::error_from_response(response).await)
    }

    /// Map an unsuccessful response to an [`Error`].
    async fn error_from_response(response: reqwest::Response) -> Error {
        let status = response.status();
        let rate_limited = response
            .headers()
            .get("x-ratelimit-remaining")
            .is_some_and(|v| v == "0");
        let text = response.text().await.unwrap_or_default();

        // GitHub error bodies look like {"message": "...", "documentation_url": "..."}
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or(text);

        match status {
            StatusCode::UNAUTHORIZED => Error::AuthenticationFailed,
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS if rate_limited => {
                Error::RateLimited
            }
            StatusCode::FORBIDDEN => Error::Forbidden(message),
            _ => Error::ApiError {
                status: status.as_u16(),
                message,
            },
        }
    }

    // === Identity ===

    /// Get the authenticated user.
    ///
    /// # Errors
    /// Returns error if the token is rejected or the API call fails.
    pub async fn current_user(&self) -> Result<User> {
        self.get("/user").await
    }

    // === Listing ===

    /// List open issues in a repository.
    ///
    /// Pull requests, which the issues endpoint also returns, are left out.
    ///
    /// # Errors
    /// Returns error if API call fails.
    pub async fn list_issues(&self, owner: &str, repo: &str) -> Result<Vec<Issue>> {
        #[derive(serde::Deserialize)]
        struct ApiIssue {
            #[serde(flatten)]
            issue: Issue,
            pull_request: Option<serde::de::IgnoredAny>,
        }

        let issues: Vec<ApiIssue> = self
            .get(&format!(
                "/repos/{owner}/{repo}/issues?state=open&per_page=100"
            ))
            .await?;

        Ok(issues
            .into_iter()
            .filter(|i| i.pull_request.is_none())
            .map(|i| i.issue)
            .collect())
    }

    /// List open pull requests in a repository.
    ///
    /// # Errors
    /// Returns error if API call fails.
    pub async fn list_pull_requests(&self, owner: &str, repo: &str) -> Result<Vec<PullRequest>> {
        #[derive(serde::Deserialize)]
        struct ApiPr {
            number: u64,
            title: String,
            #[serde(default)]
            labels: Vec<Label>,
            head: Branch,
            base: Branch,
        }

        #[derive(serde::Deserialize)]
        struct Branch {
            #[serde(rename = "ref")]
            ref_name: String,
        }

        let prs: Vec<ApiPr> = self
            .get(&format!(
                "/repos/{owner}/{repo}/pulls?state=open&per_page=100"
            ))
            .await?;

        Ok(prs
            .into_iter()
            .map(|api_pr| PullRequest {
                number: api_pr.number,
                title: api_pr.title,
                labels: api_pr.labels,
                head_ref: api_pr.head.ref_name,
                base_ref: api_pr.base.ref_name,
            })
            .collect())
    }

    // === Comparison ===

    /// Compare `head` against `base`.
    ///
    /// # Errors
    /// Returns error if either ref is unknown or the API call fails.
    pub async fn compare(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
    ) -> Result<Comparison> {
        // Branch names may contain `#`, `%` or `?`, so the range is one encoded segment
        let mut url = self.url(&format!("/repos/{owner}/{repo}/compare"))?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(self.base_url.clone()))?
            .push(&format!("{base}...{head}"));

        let response = self.send::<()>(Method::GET, url, None).await?;

        Self::handle_response(response).await
    }

    // === Label Operations ===

    /// Add labels to an issue or pull request.
    ///
    /// Returns the full label set after the change. Adding a label that is
    /// already present is accepted by GitHub and leaves the set unchanged.
    ///
    /// # Errors
    /// Returns error if API call fails.
    pub async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        labels: &[&str],
    ) -> Result<Vec<Label>> {
        let body = AddLabels {
            labels: labels.iter().map(ToString::to_string).collect(),
        };

        self.post(
            &format!("/repos/{owner}/{repo}/issues/{number}/labels"),
            &body,
        )
        .await
    }

    /// Remove a label from an issue or pull request.
    ///
    /// A label that is not present is not an error.
    ///
    /// # Errors
    /// Returns error if API call fails.
    pub async fn remove_label(&self, owner: &str, repo: &str, number: u64, name: &str) -> Result<()> {
        let mut url = self.url(&format!("/repos/{owner}/{repo}/issues/{number}/labels"))?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(self.base_url.clone()))?
            .push(name);

        let response = self.send::<()>(Method::DELETE, url, None).await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(number, label = name, "label already absent");
            return Ok(());
        }

        Err(Self::error_from_response(response).await)
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .field("token", &"[redacted]")
            .finish_non_exhaustive()
    }
}
