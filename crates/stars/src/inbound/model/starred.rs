use serde::{Deserialize, Serialize};

use crate::domain::entity::repository::EssentialRepository;
use crate::domain::inout::prelude::*;

// ╔════════════════════════════╗
// ║      Show Starred          ║
// ╚════════════════════════════╝

#[derive(Deserialize)]
pub struct ShowStarredRequest {
    pub code: String,
}

/// Serialized field order is part of the response contract:
/// `name, description, URL, [license], topics`.
#[derive(Serialize)]
pub struct EssentialRepositoryResponse {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    pub topics: Vec<String>,
}

impl From<EssentialRepository> for EssentialRepositoryResponse {
    fn from(repo: EssentialRepository) -> Self {
        Self { name: repo.name, description: repo.description, url: repo.url, license: repo.license, topics: repo.topics }
    }
}

#[derive(Serialize)]
pub struct ShowStarredResponse {
    pub starred_repositories_count: usize,
    pub starred_repositories: Vec<EssentialRepositoryResponse>,
}

impl From<ShowStarredOutput> for ShowStarredResponse {
    fn from(output: ShowStarredOutput) -> Self {
        Self {
            starred_repositories_count: output.starred_repositories_count,
            starred_repositories: output.starred_repositories.into_iter().map(Into::into).collect(),
        }
    }
}
