//! A utility module for the GitHub OAuth "web application flow".
//!
//! The provider builds the authorize redirect, exchanges an authorization
//! code for a bearer token and resolves the token to the GitHub login of the
//! user who granted it. Secrets are carried in `oauth2` newtypes so they never
//! show up in `Debug` output or logs.

use axum::http::StatusCode;
use oauth2::url::Url;
use oauth2::{AccessToken, AuthUrl, AuthorizationCode, ClientId, ClientSecret, TokenUrl};
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{Config, ConfigError};

pub const DEFAULT_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const TOKEN_EXCHANGE_FAILED_MSG: &str = "token exchange failed";
const USER_INFO_FAILED_MSG: &str = "failed to retrieve user information";

#[derive(Debug, Error)]
pub enum OAuthError {
    #[error("Invalid URL format: {0}")]
    InvalidUrl(#[from] oauth2::url::ParseError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    #[error("Access token missing")]
    MissingToken,

    #[error("Failed to parse provider response")]
    ResponseParse,
}

/// The client credentials registered with the OAuth application.
#[derive(Debug, Clone)]
pub struct OAuthCredentials {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
}

impl OAuthCredentials {
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self { client_id: ClientId::new(client_id), client_secret: ClientSecret::new(client_secret) }
    }

    /// Loads the credentials, failing when either value is missing or blank.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(config.require("oauth.github.client_id")?, config.require("oauth.github.client_secret")?))
    }
}

/// Where the provider lives. Defaults to github.com; overridable for GitHub
/// Enterprise hosts and test servers.
#[derive(Debug, Clone, PartialEq)]
pub struct GitHubEndpoints {
    pub authorize_url: String,
    pub token_url: String,
    pub api_url: String,
}

impl Default for GitHubEndpoints {
    fn default() -> Self {
        Self {
            authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl GitHubEndpoints {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            authorize_url: config.get_or("github.authorize_url", defaults.authorize_url)?,
            token_url: config.get_or("github.token_url", defaults.token_url)?,
            api_url: config.get_or("github.api_url", defaults.api_url)?,
        })
    }

    /// The API base without a trailing slash, ready for path concatenation.
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

#[async_trait::async_trait]
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait OAuthProvider: Send + Sync {
    /// Builds the provider authorization URL carrying the client id.
    fn authorization_url(&self) -> Result<String, OAuthError>;

    /// Exchanges an authorization code for a bearer access token.
    async fn exchange_code(&self, code: AuthorizationCode) -> Result<AccessToken, OAuthError>;

    /// Resolves an access token to the login of the user it belongs to.
    async fn get_user_login(&self, access_token: &AccessToken) -> Result<String, OAuthError>;
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

#[derive(Deserialize)]
struct GitHubUser {
    login: String,
}

#[derive(Debug)]
pub struct GitHubOAuthProvider {
    credentials: OAuthCredentials,
    auth_url: AuthUrl,
    token_url: TokenUrl,
    user_url: Url,
    http: Client,
}

impl GitHubOAuthProvider {
    pub fn new(credentials: OAuthCredentials, endpoints: &GitHubEndpoints, http: Client) -> Result<Self, OAuthError> {
        Ok(Self {
            credentials,
            auth_url: AuthUrl::new(endpoints.authorize_url.clone())?,
            token_url: TokenUrl::new(endpoints.token_url.clone())?,
            user_url: Url::parse(&format!("{}/user", endpoints.api_base()))?,
            http,
        })
    }
}

#[async_trait::async_trait]
impl OAuthProvider for GitHubOAuthProvider {
    fn authorization_url(&self) -> Result<String, OAuthError> {
        let url = Url::parse_with_params(
            self.auth_url.url().as_str(),
            &[("client_id", self.credentials.client_id.as_str())],
        )?;

        tracing::debug!("Generated authorization URL: {}", url);

        Ok(url.to_string())
    }

    async fn exchange_code(&self, code: AuthorizationCode) -> Result<AccessToken, OAuthError> {
        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.secret().as_str()),
            ("code", code.secret().as_str()),
        ];

        let response = self
            .http
            .post(self.token_url.url().as_str())
            .header(ACCEPT, "application/json")
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OAuth token request failed: {:?}", e);
                OAuthError::HttpClient(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "OAuth token exchange rejected by provider");
            return Err(OAuthError::Upstream { status, message: TOKEN_EXCHANGE_FAILED_MSG.to_string() });
        }

        let body: TokenResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse token response: {:?}", e);
            OAuthError::ResponseParse
        })?;

        match body.access_token.filter(|token| !token.is_empty()) {
            Some(token) => Ok(AccessToken::new(token)),
            None => {
                tracing::warn!(
                    error = body.error.as_deref().unwrap_or("none"),
                    error_description = body.error_description.as_deref().unwrap_or("none"),
                    "OAuth token response carried no access token"
                );
                Err(OAuthError::MissingToken)
            },
        }
    }

    async fn get_user_login(&self, access_token: &AccessToken) -> Result<String, OAuthError> {
        let response = self
            .http
            .get(self.user_url.as_str())
            .header(ACCEPT, "application/json")
            .bearer_auth(access_token.secret())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("GitHub user request failed: {:?}", e);
                OAuthError::HttpClient(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "GitHub user lookup rejected by provider");
            return Err(OAuthError::Upstream { status, message: USER_INFO_FAILED_MSG.to_string() });
        }

        let user: GitHubUser = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse GitHub user: {:?}", e);
            OAuthError::ResponseParse
        })?;

        Ok(user.login)
    }
}
