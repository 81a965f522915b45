use axum::{response::Html, Json};
use utoipa::OpenApi;

use crate::models::{
    DataTypeList, Kpi, KpiList, PerformanceMetricList, Recommendation, RecommenderRequest,
    RecommenderTrainingRequest, StrategyList, TaskTypeList,
};

use super::handlers;

/// Path of the generated API description
pub const OPENAPI_PATH: &str = "/swagger/";

/// Path of the browsable UI
pub const SWAGGER_UI_PATH: &str = "/swagger-ui/";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "KnowlEdge Project",
        version = "v1",
        description = "Recommendations for machine-learning pipeline components and the catalog of supported task types, data types, KPIs, performance metrics and strategies."
    ),
    paths(
        handlers::hello,
        handlers::health_check,
        handlers::recommender,
        handlers::recommender_training,
        handlers::list_task_types,
        handlers::list_data_types,
        handlers::list_kpis,
        handlers::list_performance_metrics,
        handlers::list_strategies,
    ),
    components(schemas(
        RecommenderRequest,
        RecommenderTrainingRequest,
        Recommendation,
        Kpi,
        TaskTypeList,
        DataTypeList,
        KpiList,
        PerformanceMetricList,
        StrategyList,
    )),
    tags(
        (name = "recommendations", description = "Method recommendations for deployment and training"),
        (name = "lists", description = "Catalog of supported values"),
        (name = "system", description = "Service status")
    )
)]
pub struct ApiDoc;

/// Serves the API description document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Serves a Swagger UI page that renders the API description
pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>KnowlEdge Project API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {{
      window.ui = SwaggerUIBundle({{ url: "{OPENAPI_PATH}", dom_id: "#swagger-ui" }});
    }};
  </script>
</body>
</html>
"##
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/health",
            "/recommender",
            "/recommender-training",
            "/list/task_type",
            "/list/data_type",
            "/list/kpi",
            "/list/performance_metric",
            "/list/strategy",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{} is undocumented", path);
        }
    }

    #[test]
    fn test_request_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("RecommenderRequest"));
        assert!(schemas.contains_key("RecommenderTrainingRequest"));
        assert!(schemas.contains_key("Recommendation"));
    }

    #[tokio::test]
    async fn test_swagger_ui_points_at_document() {
        let Html(page) = swagger_ui().await;
        assert!(page.contains(r#"url: "/swagger/""#));
    }
}
