//! A centralized error handling module for the Axum web application.
//!
//! Every failure is turned into an HTTP response here and nowhere else. The
//! body is always `{"Error": "<message>"}`; upstream bodies are never echoed.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use super::config::ConfigError;
use super::oauth::OAuthError;

const INTERNAL_ERROR_MSG: &str = "An internal server error occurred";
const UPSTREAM_UNAVAILABLE_MSG: &str = "Upstream provider unavailable";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request format: {0}")]
    RequestFormat(String),

    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    // Internal Libraries
    #[error("Config operation failed")]
    Config(#[from] ConfigError),

    #[error("OAuth operation failed")]
    OAuth(#[from] OAuthError),

    // Third Party Libraries
    #[error("Upstream HTTP request failed")]
    Http(#[from] reqwest::Error),

    #[error("An internal server error occurred")]
    Internal,
}

#[derive(Serialize)]
struct ErrorResponse {
    #[serde(rename = "Error")]
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::RequestFormat(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream { status, message } => (status, message),

            // Internal Libraries
            AppError::Config(err) => {
                tracing::error!("Config getter error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MSG.to_string())
            },
            AppError::OAuth(err) => match err {
                OAuthError::Upstream { status, message } => (status, message),
                OAuthError::MissingToken => (StatusCode::BAD_REQUEST, err.to_string()),
                OAuthError::InvalidUrl(_) => {
                    tracing::error!("OAuth URL construction failed: {:?}", err);
                    (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {err}"))
                },
                OAuthError::HttpClient(_) | OAuthError::ResponseParse => {
                    tracing::error!("OAuth provider error: {:?}", err);
                    (StatusCode::BAD_GATEWAY, UPSTREAM_UNAVAILABLE_MSG.to_string())
                },
            },

            // Third Party Libraries
            AppError::Http(err) => {
                tracing::error!("Upstream HTTP error: {:?}", err);
                (StatusCode::BAD_GATEWAY, UPSTREAM_UNAVAILABLE_MSG.to_string())
            },
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MSG.to_string()),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
