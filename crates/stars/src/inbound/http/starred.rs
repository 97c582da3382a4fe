use app_core::extractors::AppQuery;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, debug_handler};

use crate::domain::inout::prelude::*;
use crate::inbound::model::prelude::*;
use crate::inbound::state::StarsState;

#[debug_handler]
pub async fn login(State(state): State<StarsState>) -> impl IntoResponse {
    state
        .starred
        .login()
        .map(|output| (StatusCode::FOUND, [(header::LOCATION, output.auth_url)]))
}

#[debug_handler]
pub async fn show_starred(
    State(state): State<StarsState>,
    AppQuery(req): AppQuery<ShowStarredRequest>,
) -> impl IntoResponse {
    state
        .starred
        .show_starred(ShowStarredInput { code: req.code })
        .await
        .map(ShowStarredResponse::from)
        .map(Json)
}
