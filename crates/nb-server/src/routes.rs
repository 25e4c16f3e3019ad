//! HTTP routes.

use axum::extract::State;
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::models::{ApiResult, NewsInput, NewsOutput};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))
        // The /latest alias always points at the newest stable version.
        .route("/api/v1/news/run", post(run_news))
        .route("/api/latest/news/run", post(run_news))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Redirect {
    Redirect::temporary("/api/health")
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.config.openai.model,
    }))
}

async fn run_news(
    State(state): State<AppState>,
    Json(input): Json<NewsInput>,
) -> Result<Json<ApiResult<NewsOutput>>, ApiError> {
    let result = state.service.run(&input).await?;
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::service::NewsService;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use nb_core::testing::MockProvider;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(provider: Arc<MockProvider>) -> Router {
        let mut config = Config::default();
        config.openai.api_key = "sk-test".to_string();

        let service = NewsService::new(provider, &config).unwrap();
        create_routes(AppState::new(config, service))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = test_app(Arc::new(MockProvider::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_root_redirects_to_health() {
        let app = test_app(Arc::new(MockProvider::new()));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/health"
        );
    }

    #[tokio::test]
    async fn test_run_news_returns_envelope() {
        let provider = Arc::new(MockProvider::new());
        provider.queue_response("- A\n- B\n- C\nResumo: texto");

        let app = test_app(provider);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/news/run")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"topic": "eleições 2026"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["content"], "- A\n- B\n- C\nResumo: texto");
    }

    #[tokio::test]
    async fn test_run_news_empty_topic_is_bad_request() {
        let app = test_app(Arc::new(MockProvider::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/latest/news/run")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"topic": ""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("topic"));
    }
}
