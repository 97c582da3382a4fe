use app_core::error::AppError;
use async_trait::async_trait;
use oauth2::AccessToken;
use reqwest::Client;
use reqwest::header::ACCEPT;

use crate::domain::entity::repository::RawRepository;

const STARRED_FAILED_MSG: &str = "failed to retrieve starred repositories information";

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait StarredSource: Send + Sync {
    /// Lists the repositories `login` has starred, exactly as GitHub returns
    /// them. Only the first page is read.
    async fn fetch_starred(&self, login: &str, access_token: &AccessToken) -> Result<Vec<RawRepository>, AppError>;
}

pub struct GitHubStarred {
    http: Client,
    api_url: String,
}

impl GitHubStarred {
    pub fn new(http: Client, api_url: String) -> Self {
        Self { http, api_url: api_url.trim_end_matches('/').to_string() }
    }
}

#[async_trait]
impl StarredSource for GitHubStarred {
    async fn fetch_starred(&self, login: &str, access_token: &AccessToken) -> Result<Vec<RawRepository>, AppError> {
        let url = format!("{}/users/{}/starred", self.api_url, login);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .bearer_auth(access_token.secret())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, login = login, "Starred repositories lookup rejected by provider");
            return Err(AppError::Upstream { status, message: STARRED_FAILED_MSG.to_string() });
        }

        let repositories: Vec<RawRepository> = response.json().await?;

        tracing::debug!(login = login, count = repositories.len(), "Fetched starred repositories");

        Ok(repositories)
    }
}
