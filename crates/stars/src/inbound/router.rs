use axum::Router;
use axum::routing::get;

use crate::inbound::http::starred::*;
use crate::inbound::state::StarsState;

pub fn create_router(state: StarsState) -> Router {
    Router::new()
        .route("/login", get(login))
        .route("/essential-starred-repositories-information", get(show_starred))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use app_core::error::AppError;
    use app_core::oauth::OAuthError;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::entity::repository::EssentialRepository;
    use crate::domain::inout::prelude::*;
    use crate::usecase::starred::{MockStarredUseCase, StarredUseCase};

    fn app(usecase: MockStarredUseCase) -> Router {
        let starred: Arc<dyn StarredUseCase> = Arc::new(usecase);
        create_router(StarsState::new(starred))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(body_bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_login_redirects_to_github() {
        let mut usecase = MockStarredUseCase::new();
        usecase.expect_login().returning(|| {
            Ok(LoginOutput { auth_url: "https://github.com/login/oauth/authorize?client_id=abc".to_string() })
        });

        let response = app(usecase).oneshot(get_request("/login")).await.unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://github.com/login/oauth/authorize?client_id=abc"
        );
    }

    #[tokio::test]
    async fn test_login_failure_is_internal_error() {
        let mut usecase = MockStarredUseCase::new();
        usecase.expect_login().returning(|| {
            Err(AppError::OAuth(OAuthError::InvalidUrl(oauth2::url::Url::parse("::").unwrap_err())))
        });

        let response = app(usecase).oneshot(get_request("/login")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(json["Error"].as_str().unwrap().starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_show_starred_success_body_keeps_field_order() {
        let mut usecase = MockStarredUseCase::new();
        usecase
            .expect_show_starred()
            .withf(|input| input.code == "abc")
            .times(1)
            .returning(|_| {
                Box::pin(async move {
                    Ok(ShowStarredOutput {
                        starred_repositories_count: 2,
                        starred_repositories: vec![EssentialRepository {
                            name: "a".to_string(),
                            description: None,
                            url: "u1".to_string(),
                            license: Some("MIT".to_string()),
                            topics: vec![],
                        }],
                    })
                })
            });

        let response = app(usecase)
            .oneshot(get_request("/essential-starred-repositories-information?code=abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"{"starred_repositories_count":2,"starred_repositories":[{"name":"a","description":null,"URL":"u1","license":"MIT","topics":[]}]}"#
        );
    }

    #[tokio::test]
    async fn test_show_starred_mirrors_upstream_status() {
        let mut usecase = MockStarredUseCase::new();
        usecase.expect_show_starred().returning(|_| {
            Box::pin(async move {
                Err(AppError::OAuth(OAuthError::Upstream {
                    status: StatusCode::UNAUTHORIZED,
                    message: "token exchange failed".to_string(),
                }))
            })
        });

        let response = app(usecase)
            .oneshot(get_request("/essential-starred-repositories-information?code=abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json, json!({"Error": "token exchange failed"}));
    }

    #[tokio::test]
    async fn test_show_starred_missing_access_token() {
        let mut usecase = MockStarredUseCase::new();
        usecase
            .expect_show_starred()
            .returning(|_| Box::pin(async move { Err(AppError::OAuth(OAuthError::MissingToken)) }));

        let response = app(usecase)
            .oneshot(get_request("/essential-starred-repositories-information?code=stale"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json, json!({"Error": "Access token missing"}));
    }

    #[tokio::test]
    async fn test_show_starred_without_code_is_rejected() {
        let mut usecase = MockStarredUseCase::new();
        usecase.expect_show_starred().never();

        let response = app(usecase)
            .oneshot(get_request("/essential-starred-repositories-information"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
