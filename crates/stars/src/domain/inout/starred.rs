use crate::domain::entity::repository::EssentialRepository;

// ╔════════════════════════════╗
// ║          Login             ║
// ╚════════════════════════════╝

#[derive(Debug)]
pub struct LoginOutput {
    pub auth_url: String,
}

// ╔════════════════════════════╗
// ║      Show Starred          ║
// ╚════════════════════════════╝

#[derive(Debug)]
pub struct ShowStarredInput {
    pub code: String,
}

#[derive(Debug)]
pub struct ShowStarredOutput {
    /// Size of the list GitHub returned, private entries included.
    pub starred_repositories_count: usize,
    /// Public entries only.
    pub starred_repositories: Vec<EssentialRepository>,
}
