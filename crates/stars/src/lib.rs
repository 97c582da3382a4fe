//! The starred-repositories feature: GitHub login redirect and the
//! code → token → login → starred list pipeline behind it.

mod domain;
mod inbound;
mod outbound;
mod usecase;

use std::sync::Arc;

use app_core::oauth::OAuthProvider;
pub use inbound::router::create_router;
pub use inbound::state::StarsState;
use reqwest::Client;

use crate::outbound::github::GitHubStarred;
use crate::usecase::starred::StarredService;

pub struct Dependency {
    pub oauth: Arc<dyn OAuthProvider>,
    pub http: Client,
    pub api_url: String,
}

pub fn new(dep: Dependency) -> StarsState {
    let source = Arc::new(GitHubStarred::new(dep.http, dep.api_url));
    let starred_svc = Arc::new(StarredService::new(dep.oauth, source));

    StarsState::new(starred_svc)
}
