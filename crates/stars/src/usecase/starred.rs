use std::sync::Arc;

use app_core::error::AppError;
use app_core::oauth::OAuthProvider;
use async_trait::async_trait;
use oauth2::AuthorizationCode;

use crate::domain::entity::repository::to_essential;
use crate::domain::inout::prelude::*;
use crate::outbound::github::StarredSource;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait StarredUseCase: Send + Sync {
    fn login(&self) -> Result<LoginOutput, AppError>;
    async fn show_starred(&self, input: ShowStarredInput) -> Result<ShowStarredOutput, AppError>;
}

#[derive(Clone)]
pub struct StarredService {
    oauth: Arc<dyn OAuthProvider>,
    source: Arc<dyn StarredSource>,
}

impl StarredService {
    pub fn new(oauth: Arc<dyn OAuthProvider>, source: Arc<dyn StarredSource>) -> Self {
        Self { oauth, source }
    }
}

#[async_trait]
impl StarredUseCase for StarredService {
    fn login(&self) -> Result<LoginOutput, AppError> {
        let auth_url = self.oauth.authorization_url()?;

        Ok(LoginOutput { auth_url })
    }

    async fn show_starred(&self, input: ShowStarredInput) -> Result<ShowStarredOutput, AppError> {
        let access_token = self.oauth.exchange_code(AuthorizationCode::new(input.code)).await?;

        let login = self.oauth.get_user_login(&access_token).await?;

        let raw = self.source.fetch_starred(&login, &access_token).await?;
        let starred_repositories = to_essential(&raw);

        tracing::info!(
            login = %login,
            total = raw.len(),
            public = starred_repositories.len(),
            "Starred repositories collected"
        );

        // The count covers every starred entry GitHub returned, including the
        // private ones that are filtered out of the list.
        Ok(ShowStarredOutput { starred_repositories_count: raw.len(), starred_repositories })
    }
}
