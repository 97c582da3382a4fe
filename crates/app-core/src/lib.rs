//! Shared infrastructure for the service: configuration, error mapping,
//! extractors, middleware and the GitHub OAuth provider.

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod oauth;
mod rejection;
