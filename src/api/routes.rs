use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::docs::{self, OPENAPI_PATH, SWAGGER_UI_PATH};
use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::hello))
        .route("/health", get(handlers::health_check))
        // Recommendations
        .route("/recommender", post(handlers::recommender))
        .route("/recommender-training", post(handlers::recommender_training))
        // Catalog lists
        .route("/list/task_type", get(handlers::list_task_types))
        .route("/list/data_type", get(handlers::list_data_types))
        .route("/list/kpi", get(handlers::list_kpis))
        .route("/list/performance_metric", get(handlers::list_performance_metrics))
        .route("/list/strategy", get(handlers::list_strategies))
        // API description
        .route(OPENAPI_PATH, get(docs::openapi_json))
        .route(OPENAPI_PATH.trim_end_matches('/'), get(docs::openapi_json))
        .route(SWAGGER_UI_PATH, get(docs::swagger_ui))
        .route(SWAGGER_UI_PATH.trim_end_matches('/'), get(docs::swagger_ui))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}

/// Wraps a router with a CORS layer that allows any origin
pub fn with_permissive_cors(router: Router) -> Router {
    router.layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn router() -> Router {
        create_router(AppState::from_file("does-not-exist.json"))
    }

    #[tokio::test]
    async fn test_permissive_cors_allows_any_origin() {
        let response = with_permissive_cors(router())
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_docs_served_with_and_without_trailing_slash() {
        for uri in ["/swagger/", "/swagger", "/swagger-ui/", "/swagger-ui"] {
            let response = router()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_recommender_rejects_get() {
        let response = router()
            .oneshot(Request::builder().uri("/recommender").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
