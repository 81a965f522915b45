use axum::{extract::State, http::Uri, Extension, Json};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{
        DataTypeList, KpiList, ListKey, PerformanceMetricList, Recommendation,
        RecommenderRequest, RecommenderTrainingRequest, StrategyList, TaskTypeList,
    },
    services::recommendations,
};

use super::{extract::ValidatedJson, AppState};

// Root and health

/// Root endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses((status = 200, description = "Greeting"))
)]
pub async fn hello() -> Json<Value> {
    Json(json!({ "hello": "world" }))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

// Recommendations

/// Recommender POST API for deploying
#[utoipa::path(
    post,
    path = "/recommender",
    tag = "recommendations",
    request_body = RecommenderRequest,
    responses(
        (status = 200, description = "Recommended method", body = Recommendation),
        (status = 400, description = "Body is not JSON"),
        (status = 422, description = "Body failed field validation")
    )
)]
pub async fn recommender(
    Extension(request_id): Extension<RequestId>,
    ValidatedJson(request): ValidatedJson<RecommenderRequest>,
) -> AppResult<Json<Recommendation>> {
    tracing::info!(request_id = %request_id, "Processing recommender request");

    let recommendation = recommendations::recommend_for_task(&request).await?;
    Ok(Json(recommendation))
}

/// Recommender POST API for training
#[utoipa::path(
    post,
    path = "/recommender-training",
    tag = "recommendations",
    request_body = RecommenderTrainingRequest,
    responses(
        (status = 200, description = "Recommended method", body = Recommendation),
        (status = 400, description = "Body is not JSON"),
        (status = 422, description = "Body failed field validation")
    )
)]
pub async fn recommender_training(
    Extension(request_id): Extension<RequestId>,
    ValidatedJson(request): ValidatedJson<RecommenderTrainingRequest>,
) -> AppResult<Json<Recommendation>> {
    tracing::info!(request_id = %request_id, "Processing recommender training request");

    let recommendation = recommendations::recommend_for_training(&request).await?;
    Ok(Json(recommendation))
}

// Lists

async fn list(state: &AppState, key: ListKey) -> AppResult<Json<Value>> {
    let value = state.catalog.lookup(key).await?;
    Ok(Json(key.shape(value)))
}

/// List all task types
#[utoipa::path(
    get,
    path = "/list/task_type",
    tag = "lists",
    responses(
        (status = 200, description = "Supported task types", body = TaskTypeList),
        (status = 500, description = "Catalog missing, malformed or incomplete")
    )
)]
pub async fn list_task_types(State(state): State<AppState>) -> AppResult<Json<Value>> {
    list(&state, ListKey::TaskType).await
}

/// List all data types
#[utoipa::path(
    get,
    path = "/list/data_type",
    tag = "lists",
    responses(
        (status = 200, description = "Supported data types", body = DataTypeList),
        (status = 500, description = "Catalog missing, malformed or incomplete")
    )
)]
pub async fn list_data_types(State(state): State<AppState>) -> AppResult<Json<Value>> {
    list(&state, ListKey::DataType).await
}

/// List all KPIs
#[utoipa::path(
    get,
    path = "/list/kpi",
    tag = "lists",
    responses(
        (status = 200, description = "Supported KPIs", body = KpiList),
        (status = 500, description = "Catalog missing, malformed or incomplete")
    )
)]
pub async fn list_kpis(State(state): State<AppState>) -> AppResult<Json<Value>> {
    list(&state, ListKey::Kpi).await
}

/// List all performance metrics
#[utoipa::path(
    get,
    path = "/list/performance_metric",
    tag = "lists",
    responses(
        (status = 200, description = "Performance metrics by task type", body = PerformanceMetricList),
        (status = 500, description = "Catalog missing, malformed or incomplete")
    )
)]
pub async fn list_performance_metrics(State(state): State<AppState>) -> AppResult<Json<Value>> {
    list(&state, ListKey::PerformanceMetric).await
}

/// List all strategies
#[utoipa::path(
    get,
    path = "/list/strategy",
    tag = "lists",
    responses(
        (status = 200, description = "Strategies by data and task type", body = StrategyList),
        (status = 500, description = "Catalog missing, malformed or incomplete")
    )
)]
pub async fn list_strategies(State(state): State<AppState>) -> AppResult<Json<Value>> {
    list(&state, ListKey::Strategy).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::MockCatalogSource;
    use axum::{http::StatusCode, response::IntoResponse};
    use mockall::predicate::eq;
    use std::sync::Arc;

    fn state_with(mock: MockCatalogSource) -> AppState {
        AppState::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_list_strategies_returns_mapping_verbatim() {
        let stored = json!({
            "tabular_classification": ["decisionTreeClassifier", "svm"],
            "image_classification": ["cnn"]
        });
        let returned = stored.clone();

        let mut mock = MockCatalogSource::new();
        mock.expect_lookup()
            .with(eq(ListKey::Strategy))
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let Json(body) = list_strategies(State(state_with(mock))).await.unwrap();
        assert_eq!(body, stored);
    }

    #[tokio::test]
    async fn test_list_task_types_wraps_array() {
        let mut mock = MockCatalogSource::new();
        mock.expect_lookup()
            .with(eq(ListKey::TaskType))
            .returning(|_| Ok(json!(["classification", "regression"])));

        let Json(body) = list_task_types(State(state_with(mock))).await.unwrap();
        assert_eq!(
            body,
            json!({ "task_type_all": ["classification", "regression"] })
        );
    }

    #[tokio::test]
    async fn test_catalog_failure_becomes_server_error() {
        let mut mock = MockCatalogSource::new();
        mock.expect_lookup()
            .returning(|key| Err(AppError::MissingKey(key.as_str())));

        let err = list_kpis(State(state_with(mock))).await.unwrap_err();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_not_found_names_path() {
        let err = not_found("/nowhere".parse().unwrap()).await;
        assert!(matches!(err, AppError::NotFound(ref path) if path == "/nowhere"));
    }
}
